//! Java source renderer.
//!
//! One file is emitted per named type, in graph order, followed by the
//! `Converter` helper unless only types were requested. Every identifier
//! comes from the [`NameBindings`] computed up front through the hooks.

use eyre::{Result, eyre};
use jackgen_codegen::{
    CodeBuilder, ImportCollector, NameBindings, RenderOutput, RendererHooks, SourceFile,
};
use jackgen_graph::{ClassType, EnumType, Type, TypeGraph, TypeId, TypeKind, TypeNode};

use crate::{JAVA_NAMING, JavaOptions, JavaTypeMapper};

/// Name of the generated serialization helper class.
pub const CONVERTER_CLASS: &str = "Converter";

const JACKSON_ANNOTATION: &str = "com.fasterxml.jackson.annotation";
const JACKSON_CORE: &str = "com.fasterxml.jackson.core";
const JACKSON_DATABIND: &str = "com.fasterxml.jackson.databind";
const JACKSON_DATABIND_ANNOTATION: &str = "com.fasterxml.jackson.databind.annotation";

/// Renders a type graph to Java, customized by `H`.
pub struct JavaRenderer<'a, H: ?Sized> {
    graph: &'a TypeGraph,
    hooks: &'a H,
    options: &'a JavaOptions,
    bindings: NameBindings,
}

impl<'a, H> JavaRenderer<'a, H>
where
    H: RendererHooks + ?Sized,
{
    /// Bind every name for this pass.
    pub fn new(graph: &'a TypeGraph, hooks: &'a H, options: &'a JavaOptions) -> Self {
        let reserved: &[&str] = if options.just_types {
            &[]
        } else {
            &[CONVERTER_CLASS]
        };
        let bindings = NameBindings::bind(graph, hooks, &JAVA_NAMING, reserved);
        Self {
            graph,
            hooks,
            options,
            bindings,
        }
    }

    pub fn bindings(&self) -> &NameBindings {
        &self.bindings
    }

    /// Render all files in memory.
    pub fn render(&self) -> Result<RenderOutput> {
        let mut output = RenderOutput::new();

        for node in self.graph.named_types() {
            let name = self.type_name(node.id)?;
            let lines = match &node.ty {
                Type::Class(class) => self.emit_class(node, class, name)?,
                Type::Enum(e) => self.emit_enum(node, e, name)?,
                Type::Union(_) => self.emit_union(node, name)?,
                _ => continue,
            };
            let file_name = format!("{}.java", name);
            tracing::debug!(file = %file_name, lines = lines.len(), "rendered type");
            output.insert(file_name, SourceFile::new(lines));
        }

        if !self.options.just_types && self.graph.top_levels().next().is_some() {
            let lines = self.emit_converter()?;
            output.insert(format!("{}.java", CONVERTER_CLASS), SourceFile::new(lines));
        }

        Ok(output)
    }

    fn type_name(&self, id: TypeId) -> Result<&str> {
        self.bindings
            .type_name(id)
            .ok_or_else(|| eyre!("type {} has no bound name", id))
    }

    fn mapper(&self) -> JavaTypeMapper<'_> {
        JavaTypeMapper::new(self.graph, &self.bindings)
    }

    /// Leading comments, package and imports, then `body`.
    fn finish_file(
        &self,
        imports: &ImportCollector,
        default_comments: &[String],
        body: CodeBuilder,
    ) -> Vec<String> {
        let mut out = CodeBuilder::java();
        let comments = self
            .options
            .leading_comments
            .as_deref()
            .unwrap_or(default_comments);
        if !comments.is_empty() {
            out.push_comment_lines(comments).push_blank();
        }

        out.push_line(&format!("package {};", self.options.package));
        out.push_blank();
        let import_lines = imports.java_lines();
        if !import_lines.is_empty() {
            for line in &import_lines {
                out.push_line(line);
            }
            out.push_blank();
        }

        let mut lines = out.into_lines();
        lines.extend(body.into_lines());
        lines
    }

    fn emit_class(&self, node: &TypeNode, class: &ClassType, name: &str) -> Result<Vec<String>> {
        let mapper = self.mapper();
        let mut imports = ImportCollector::new();
        imports.add_wildcard(JACKSON_ANNOTATION);

        // Resolve every member before emitting anything
        let mut fields = Vec::with_capacity(class.len());
        for (json_name, property) in class.properties() {
            let names = self
                .bindings
                .member(node.id, json_name)
                .ok_or_else(|| eyre!("property '{}' of {} has no bound name", json_name, name))?;
            let ty = mapper.property_type(property, &mut imports)?;
            let annotation = format!("@JsonProperty(\"{}\")", escape_java_string(json_name));
            fields.push((annotation, property, names, ty));
        }

        let mut body = CodeBuilder::java();
        if let Some(description) = node.description() {
            body.push_javadoc(description);
        }
        if self.options.lombok {
            body.push_line("@lombok.Data");
        }
        self.hooks
            .emit_class_attributes(self.graph, class, name, &mut body);

        let lombok = self.options.lombok;
        body.block(&format!("public class {} {{", name), "}", |b| {
            for (annotation, property, names, ty) in &fields {
                if let Some(description) = &property.description {
                    b.push_javadoc(description);
                }
                if lombok {
                    b.push_line(annotation);
                }
                b.push_line(&format!("private {} {};", ty, names.property));
            }
            if lombok {
                return;
            }
            for (annotation, _, names, ty) in &fields {
                b.ensure_blank();
                b.push_line(annotation);
                b.push_line(&format!(
                    "public {} {}() {{ return {}; }}",
                    ty, names.getter, names.property
                ));
                b.push_line(annotation);
                b.push_line(&format!(
                    "public void {}({} value) {{ this.{} = value; }}",
                    names.setter, ty, names.property
                ));
            }
        });

        Ok(self.finish_file(&imports, &[], body))
    }

    fn emit_enum(&self, node: &TypeNode, e: &EnumType, name: &str) -> Result<Vec<String>> {
        let mut imports = ImportCollector::new();
        imports.add("java.io", "IOException");
        imports.add_wildcard(JACKSON_ANNOTATION);

        let mut cases = Vec::with_capacity(e.cases.len());
        for case in &e.cases {
            let constant = self
                .bindings
                .enum_case(node.id, case)
                .ok_or_else(|| eyre!("case '{}' of {} has no bound name", case, name))?;
            cases.push((case.as_str(), constant));
        }

        let mut body = CodeBuilder::java();
        if let Some(description) = node.description() {
            body.push_javadoc(description);
        }
        body.block(&format!("public enum {} {{", name), "}", |b| {
            let constants: Vec<&str> = cases.iter().map(|(_, c)| *c).collect();
            b.push_line(&format!("{};", constants.join(", ")));
            b.push_blank();

            b.push_line("@JsonValue");
            b.block("public String toValue() {", "}", |b| {
                b.block("switch (this) {", "}", |b| {
                    for (value, constant) in &cases {
                        b.push_line(&format!(
                            "case {}: return \"{}\";",
                            constant,
                            escape_java_string(value)
                        ));
                    }
                });
                b.push_line("return null;");
            });
            b.push_blank();

            b.push_line("@JsonCreator");
            b.block(
                &format!(
                    "public static {} forValue(String value) throws IOException {{",
                    name
                ),
                "}",
                |b| {
                    for (value, constant) in &cases {
                        b.push_line(&format!(
                            "if (value.equals(\"{}\")) return {};",
                            escape_java_string(value),
                            constant
                        ));
                    }
                    b.push_line(&format!(
                        "throw new IOException(\"Cannot deserialize {}\");",
                        name
                    ));
                },
            );
        });

        Ok(self.finish_file(&imports, &[], body))
    }

    fn emit_union(&self, node: &TypeNode, name: &str) -> Result<Vec<String>> {
        let mapper = self.mapper();
        let mut imports = ImportCollector::new();
        imports.add("java.io", "IOException");
        imports.add_wildcard(JACKSON_CORE);
        imports.add_wildcard(JACKSON_DATABIND);
        imports.add_wildcard(JACKSON_DATABIND_ANNOTATION);

        let nullable = self.graph.is_nullable(node.id);
        let mut members = Vec::new();
        for member in self.graph.non_null_members(node.id) {
            let field = self
                .bindings
                .union_member(node.id, member)
                .ok_or_else(|| eyre!("member {} of {} has no bound name", member, name))?;
            let ty = mapper.java_type(member, true, &mut imports)?;
            let token = mapper.type_token(&ty, &mut imports);
            members.push(UnionMember {
                kind: self.graph.node(member).kind(),
                field,
                ty,
                token,
            });
        }

        // Each JSON token goes to the first member accepting it
        let mut claimed: Vec<&str> = Vec::new();
        let mut arms: Vec<(Vec<&str>, &UnionMember<'_>)> = Vec::new();
        let mut fallback = None;
        for member in &members {
            if member.kind == TypeKind::Any {
                fallback.get_or_insert(member);
                continue;
            }
            let tokens: Vec<&str> = json_tokens(member.kind)
                .iter()
                .copied()
                .filter(|t| !claimed.contains(t))
                .collect();
            if tokens.is_empty() {
                continue;
            }
            claimed.extend(&tokens);
            arms.push((tokens, member));
        }

        let mut body = CodeBuilder::java();
        if let Some(description) = node.description() {
            body.push_javadoc(description);
        }
        body.push_line(&format!(
            "@JsonDeserialize(using = {}.Deserializer.class)",
            name
        ));
        body.push_line(&format!("@JsonSerialize(using = {}.Serializer.class)", name));
        body.block(&format!("public class {} {{", name), "}", |b| {
            for member in &members {
                b.push_line(&format!("public {} {};", member.ty, member.field));
            }
            b.push_blank();

            b.block(
                &format!(
                    "static class Deserializer extends JsonDeserializer<{}> {{",
                    name
                ),
                "}",
                |b| {
                    b.push_line("@Override");
                    b.block(
                        &format!(
                            "public {} deserialize(JsonParser jsonParser, DeserializationContext context) throws IOException, JsonProcessingException {{",
                            name
                        ),
                        "}",
                        |b| {
                            b.push_line(&format!("{} value = new {}();", name, name));
                            b.block("switch (jsonParser.currentToken()) {", "}", |b| {
                                if nullable {
                                    b.push_line("case VALUE_NULL:");
                                    b.push_indent().push_line("break;").push_dedent();
                                }
                                for (tokens, member) in &arms {
                                    for token in tokens {
                                        b.push_line(&format!("case {}:", token));
                                    }
                                    b.push_indent();
                                    b.push_line(&format!(
                                        "value.{} = jsonParser.readValueAs({});",
                                        member.field, member.token
                                    ));
                                    b.push_line("break;");
                                    b.push_dedent();
                                }
                                b.push_line("default:");
                                b.push_indent();
                                match fallback {
                                    Some(member) => {
                                        b.push_line(&format!(
                                            "value.{} = jsonParser.readValueAs(Object.class);",
                                            member.field
                                        ));
                                        b.push_line("break;");
                                    }
                                    None => {
                                        b.push_line(&format!(
                                            "throw new IOException(\"Cannot deserialize {}\");",
                                            name
                                        ));
                                    }
                                }
                                b.push_dedent();
                            });
                            b.push_line("return value;");
                        },
                    );
                },
            );
            b.push_blank();

            b.block(
                &format!("static class Serializer extends JsonSerializer<{}> {{", name),
                "}",
                |b| {
                    b.push_line("@Override");
                    b.block(
                        &format!(
                            "public void serialize({} obj, JsonGenerator jsonGenerator, SerializerProvider serializerProvider) throws IOException {{",
                            name
                        ),
                        "}",
                        |b| {
                            for member in &members {
                                b.block(&format!("if (obj.{} != null) {{", member.field), "}", |b| {
                                    b.push_line(&format!("jsonGenerator.writeObject(obj.{});", member.field));
                                    b.push_line("return;");
                                });
                            }
                            if nullable {
                                b.push_line("jsonGenerator.writeNull();");
                            } else {
                                b.push_line(&format!(
                                    "throw new IOException(\"{} must not be null\");",
                                    name
                                ));
                            }
                        },
                    );
                },
            );
        });

        Ok(self.finish_file(&imports, &[], body))
    }

    fn emit_converter(&self) -> Result<Vec<String>> {
        let mapper = self.mapper();
        let mut imports = ImportCollector::new();
        imports.add("java.io", "IOException");
        imports.add_wildcard(JACKSON_CORE);
        imports.add_wildcard(JACKSON_DATABIND);

        let mut roots = Vec::new();
        for (given, ty) in self.graph.top_levels() {
            let name = self
                .bindings
                .top_level_name(given)
                .ok_or_else(|| eyre!("top-level '{}' has no bound name", given))?;
            let java = mapper.java_type(ty, true, &mut imports)?;
            let token = mapper.type_token(&java, &mut imports);
            roots.push((name, java, token));
        }

        let mut usage = vec![
            "To use this code, add the following Maven dependency to your project:".to_string(),
            String::new(),
            "    com.fasterxml.jackson.core     : jackson-databind          : 2.9.0".to_string(),
            String::new(),
            "Import this package:".to_string(),
            String::new(),
            format!("    import {}.{};", self.options.package, CONVERTER_CLASS),
            String::new(),
            "Then you can deserialize a JSON string with".to_string(),
            String::new(),
        ];
        for (name, java, _) in &roots {
            usage.push(format!(
                "    {} data = {}.{}FromJsonString(jsonString);",
                java, CONVERTER_CLASS, name
            ));
        }

        let mut body = CodeBuilder::java();
        body.block(&format!("public class {} {{", CONVERTER_CLASS), "}", |b| {
            for (name, java, token) in &roots {
                b.ensure_blank();
                b.block(
                    &format!(
                        "public static {} {}FromJsonString(String json) throws IOException {{",
                        java, name
                    ),
                    "}",
                    |b| {
                        b.push_line(&format!("return get{}ObjectReader().readValue(json);", name));
                    },
                );
                b.push_blank();
                b.block(
                    &format!(
                        "public static String {}ToJsonString({} obj) throws JsonProcessingException {{",
                        name, java
                    ),
                    "}",
                    |b| {
                        b.push_line(&format!(
                            "return get{}ObjectWriter().writeValueAsString(obj);",
                            name
                        ));
                    },
                );
                b.push_blank();
                b.push_line(&format!("private static ObjectReader {}Reader;", name));
                b.push_line(&format!("private static ObjectWriter {}Writer;", name));
                b.push_blank();
                b.block(
                    &format!("private static void instantiate{}Mapper() {{", name),
                    "}",
                    |b| {
                        b.push_line("ObjectMapper mapper = new ObjectMapper();");
                        b.push_line("mapper.findAndRegisterModules();");
                        b.push_line(&format!("{}Reader = mapper.readerFor({});", name, token));
                        b.push_line(&format!("{}Writer = mapper.writerFor({});", name, token));
                    },
                );
                b.push_blank();
                b.block(
                    &format!("private static ObjectReader get{}ObjectReader() {{", name),
                    "}",
                    |b| {
                        b.push_line(&format!(
                            "if ({}Reader == null) instantiate{}Mapper();",
                            name, name
                        ));
                        b.push_line(&format!("return {}Reader;", name));
                    },
                );
                b.push_blank();
                b.block(
                    &format!("private static ObjectWriter get{}ObjectWriter() {{", name),
                    "}",
                    |b| {
                        b.push_line(&format!(
                            "if ({}Writer == null) instantiate{}Mapper();",
                            name, name
                        ));
                        b.push_line(&format!("return {}Writer;", name));
                    },
                );
            }
        });

        Ok(self.finish_file(&imports, &usage, body))
    }
}

struct UnionMember<'a> {
    kind: TypeKind,
    field: &'a str,
    ty: String,
    token: String,
}

/// Jackson tokens that can start a value of `kind`.
fn json_tokens(kind: TypeKind) -> &'static [&'static str] {
    match kind {
        TypeKind::Bool => &["VALUE_TRUE", "VALUE_FALSE"],
        TypeKind::Integer => &["VALUE_NUMBER_INT"],
        TypeKind::Double => &["VALUE_NUMBER_INT", "VALUE_NUMBER_FLOAT"],
        TypeKind::String | TypeKind::Enum => &["VALUE_STRING"],
        TypeKind::Array => &["START_ARRAY"],
        TypeKind::Class | TypeKind::Map => &["START_OBJECT"],
        TypeKind::Any | TypeKind::Null | TypeKind::Union => &[],
    }
}

fn escape_java_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
