//! JSON Schema to type graph conversion.

use std::collections::{HashMap, HashSet};

use jackgen_core::to_pascal_case;
use jackgen_graph::{ClassProperty, TypeGraph, TypeGraphBuilder, TypeId, TypeKind, TypeNames};
use serde_json::{Map, Value};

use crate::{Error, Result, SchemaSource, SourceContext};

/// Load every source into one type graph, one top-level per source.
pub fn load(sources: &[SchemaSource]) -> Result<TypeGraph> {
    let mut builder = TypeGraphBuilder::new();
    let mut seen = HashSet::new();

    for source in sources {
        if !seen.insert(source.name()) {
            return Err(Box::new(Error::DuplicateTopLevel {
                name: source.name().to_string(),
                filename: source.filename().to_string(),
            }));
        }
        let ctx = SourceContext::new(source.content(), source.filename());
        let root: Value =
            serde_json::from_str(source.content()).map_err(|e| ctx.parse_error(e))?;

        let id = {
            let mut loader = Loader::new(&mut builder, &ctx, &root);
            loader.convert(&root, &name_hint(source.name(), "TopLevel"), "#")?
        };
        tracing::debug!(name = source.name(), ty = %id, "registered top-level");
        builder.add_top_level(source.name(), id);
    }

    Ok(builder.finish())
}

/// Load a single in-memory schema registered under `name`.
pub fn load_str(name: &str, content: &str) -> Result<TypeGraph> {
    load(&[SchemaSource::new(name, content)])
}

struct Loader<'a> {
    builder: &'a mut TypeGraphBuilder,
    ctx: &'a SourceContext,
    root: &'a Value,
    /// Converted locations, keyed by `#`-prefixed JSON pointer.
    refs: HashMap<String, TypeId>,
    resolving: HashSet<String>,
}

impl<'a> Loader<'a> {
    fn new(builder: &'a mut TypeGraphBuilder, ctx: &'a SourceContext, root: &'a Value) -> Self {
        Self {
            builder,
            ctx,
            root,
            refs: HashMap::new(),
            resolving: HashSet::new(),
        }
    }

    fn convert(&mut self, schema: &Value, hint: &str, pointer: &str) -> Result<TypeId> {
        match schema {
            Value::Bool(true) => Ok(self.builder.primitive(TypeKind::Any)),
            Value::Bool(false) => Err(self.ctx.invalid_schema(
                pointer,
                "the `false` schema admits no values",
                None,
            )),
            Value::Object(obj) => self.convert_object(obj, hint, pointer),
            _ => Err(self.ctx.invalid_schema(
                pointer,
                "a schema must be an object or a boolean",
                None,
            )),
        }
    }

    fn convert_object(
        &mut self,
        obj: &Map<String, Value>,
        hint: &str,
        pointer: &str,
    ) -> Result<TypeId> {
        let names = names_for(obj, hint);

        let id = if let Some(reference) = obj.get("$ref") {
            let reference = reference.as_str().ok_or_else(|| {
                self.ctx
                    .invalid_schema(pointer, "`$ref` must be a string", None)
            })?;
            self.resolve_ref(reference)?
        } else if let Some((keyword, members)) = obj
            .get_key_value("anyOf")
            .or_else(|| obj.get_key_value("oneOf"))
        {
            let members = members.as_array().ok_or_else(|| {
                self.ctx
                    .invalid_schema(pointer, format!("`{}` must be an array", keyword), None)
            })?;
            let mut ids = Vec::with_capacity(members.len());
            for (i, member) in members.iter().enumerate() {
                let member_pointer = format!("{}/{}/{}", pointer, keyword, i);
                ids.push(self.convert(member, &names.combined, &member_pointer)?);
            }
            self.builder.union(ids, names.clone())
        } else if let Some(cases) = obj.get("enum") {
            self.convert_enum(cases, names.clone(), pointer)?
        } else {
            match obj.get("type") {
                None if obj.contains_key("properties") => {
                    self.convert_class(obj, names.clone(), pointer)?
                }
                None if obj.contains_key("items") => {
                    self.convert_typed("array", obj, &names, pointer)?
                }
                None => self.builder.primitive(TypeKind::Any),
                Some(Value::String(ty)) => self.convert_typed(ty, obj, &names, pointer)?,
                Some(Value::Array(types)) => {
                    let mut ids = Vec::with_capacity(types.len());
                    for ty in types {
                        let ty = ty.as_str().ok_or_else(|| {
                            self.ctx
                                .invalid_schema(pointer, "`type` entries must be strings", None)
                        })?;
                        ids.push(self.convert_typed(ty, obj, &names, pointer)?);
                    }
                    self.builder.union(ids, names.clone())
                }
                Some(_) => {
                    return Err(self.ctx.invalid_schema(
                        pointer,
                        "`type` must be a string or an array of strings",
                        None,
                    ));
                }
            }
        };

        if obj.get("nullable").and_then(Value::as_bool) == Some(true) {
            let null = self.builder.primitive(TypeKind::Null);
            return Ok(self.builder.union([id, null], names));
        }
        Ok(id)
    }

    fn convert_typed(
        &mut self,
        ty: &str,
        obj: &Map<String, Value>,
        names: &TypeNames,
        pointer: &str,
    ) -> Result<TypeId> {
        let kind = match ty {
            "string" => TypeKind::String,
            "integer" => TypeKind::Integer,
            "number" => TypeKind::Double,
            "boolean" => TypeKind::Bool,
            "null" => TypeKind::Null,
            "object" => return self.convert_object_type(obj, names, pointer),
            "array" => return self.convert_array(obj, names, pointer),
            other => return Err(self.ctx.unsupported_type(pointer, other)),
        };
        Ok(self.builder.primitive(kind))
    }

    fn convert_object_type(
        &mut self,
        obj: &Map<String, Value>,
        names: &TypeNames,
        pointer: &str,
    ) -> Result<TypeId> {
        if obj.contains_key("properties") {
            return self.convert_class(obj, names.clone(), pointer);
        }
        match obj.get("additionalProperties") {
            None | Some(Value::Bool(true)) => {
                let any = self.builder.primitive(TypeKind::Any);
                Ok(self.builder.map(any))
            }
            // Closed object with no declared properties
            Some(Value::Bool(false)) => self.convert_class(obj, names.clone(), pointer),
            Some(values) => {
                let hint = format!("{}Value", names.combined);
                let values_pointer = format!("{}/additionalProperties", pointer);
                let values = self.convert(values, &hint, &values_pointer)?;
                Ok(self.builder.map(values))
            }
        }
    }

    fn convert_array(
        &mut self,
        obj: &Map<String, Value>,
        names: &TypeNames,
        pointer: &str,
    ) -> Result<TypeId> {
        let hint = format!("{}Element", names.combined);
        let items_pointer = format!("{}/items", pointer);
        let items = match obj.get("items") {
            None => self.builder.primitive(TypeKind::Any),
            // Tuple form: any position may hold any of the listed types
            Some(Value::Array(items)) => {
                let mut ids = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    ids.push(self.convert(item, &hint, &format!("{}/{}", items_pointer, i))?);
                }
                self.builder.union(ids, TypeNames::new(hint))
            }
            Some(item) => self.convert(item, &hint, &items_pointer)?,
        };
        Ok(self.builder.array(items))
    }

    fn convert_class(
        &mut self,
        obj: &Map<String, Value>,
        names: TypeNames,
        pointer: &str,
    ) -> Result<TypeId> {
        let slot = self.builder.reserve_class(names);
        // Register before descending so self references resolve to this class
        self.refs.entry(pointer.to_string()).or_insert(slot.id());

        let required: HashSet<&str> = match obj.get("required") {
            None => HashSet::new(),
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            Some(_) => {
                return Err(self.ctx.invalid_schema(
                    pointer,
                    "`required` must be an array of property names",
                    self.ctx.find_quoted("required"),
                ));
            }
        };

        let empty = Map::new();
        let props = match obj.get("properties") {
            None => &empty,
            Some(Value::Object(props)) => props,
            Some(_) => {
                return Err(self.ctx.invalid_schema(
                    pointer,
                    "`properties` must be an object",
                    self.ctx.find_quoted("properties"),
                ));
            }
        };

        let mut properties = Vec::with_capacity(props.len());
        for (name, schema) in props {
            let prop_pointer = format!("{}/properties/{}", pointer, escape_pointer(name));
            let ty = self.convert(schema, &name_hint(name, "Property"), &prop_pointer)?;
            let description = schema
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string);
            properties.push((
                name.clone(),
                ClassProperty::new(ty)
                    .optional(!required.contains(name.as_str()))
                    .description(description),
            ));
        }

        let id = self.builder.define_class(slot, properties);
        tracing::debug!(%pointer, ty = %id, "converted class");
        Ok(id)
    }

    fn convert_enum(&mut self, cases: &Value, names: TypeNames, pointer: &str) -> Result<TypeId> {
        let Some(values) = cases.as_array().filter(|v| !v.is_empty()) else {
            return Err(self.ctx.invalid_schema(
                pointer,
                "`enum` must be a non-empty array",
                self.ctx.find_quoted("enum"),
            ));
        };

        let mut strings = Vec::with_capacity(values.len());
        let mut has_null = false;
        for value in values {
            match value {
                Value::String(s) => strings.push(s.clone()),
                Value::Null => has_null = true,
                _ => {
                    return Err(self.ctx.invalid_schema(
                        pointer,
                        "only string and null enum values are supported",
                        self.ctx.find_quoted("enum"),
                    ));
                }
            }
        }

        if strings.is_empty() {
            return Ok(self.builder.primitive(TypeKind::Null));
        }
        let id = self.builder.enumeration(strings, names.clone());
        if has_null {
            let null = self.builder.primitive(TypeKind::Null);
            return Ok(self.builder.union([id, null], names));
        }
        Ok(id)
    }

    fn resolve_ref(&mut self, reference: &str) -> Result<TypeId> {
        if let Some(id) = self.refs.get(reference) {
            return Ok(*id);
        }
        let Some(path) = reference.strip_prefix('#') else {
            return Err(self.ctx.unresolved_ref(reference));
        };
        let Some(target) = self.root.pointer(path) else {
            return Err(self.ctx.unresolved_ref(reference));
        };
        if !self.resolving.insert(reference.to_string()) {
            return Err(self.ctx.circular_ref(reference));
        }

        let last = path.rsplit('/').next().unwrap_or_default();
        let hint = name_hint(&unescape_pointer(last), "TopLevel");
        let id = self.convert(target, &hint, reference)?;

        self.resolving.remove(reference);
        self.refs.insert(reference.to_string(), id);
        tracing::debug!(%reference, ty = %id, "resolved reference");
        Ok(id)
    }
}

/// Naming hints for a schema: its title if present, else the contextual hint.
fn names_for(obj: &Map<String, Value>, hint: &str) -> TypeNames {
    let combined = obj
        .get("title")
        .and_then(Value::as_str)
        .map(to_pascal_case)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| hint.to_string());
    let description = obj
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string);
    TypeNames::new(combined).with_description(description)
}

fn name_hint(raw: &str, fallback: &str) -> String {
    let name = to_pascal_case(raw);
    if name.is_empty() {
        fallback.to_string()
    } else {
        name
    }
}

fn escape_pointer(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn unescape_pointer(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_hint() {
        assert_eq!(name_hint("line_items", "Property"), "LineItems");
        assert_eq!(name_hint("__", "Property"), "Property");
    }

    #[test]
    fn test_pointer_escaping() {
        assert_eq!(escape_pointer("a/b~c"), "a~1b~0c");
        assert_eq!(unescape_pointer("a~1b~0c"), "a/b~c");
    }

    #[test]
    fn test_title_overrides_hint() {
        let obj: Map<String, Value> =
            serde_json::from_str(r#"{"title": "street address", "description": "d"}"#).unwrap();
        let names = names_for(&obj, "Address");
        assert_eq!(names.combined, "StreetAddress");
        assert_eq!(names.description.as_deref(), Some("d"));
    }
}
