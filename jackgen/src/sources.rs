//! Schema source selection shared by commands.

use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, bail};
use jackgen_codegen::hooks::DEFAULT_TOP_LEVEL_NAME;
use jackgen_core::to_pascal_case;
use jackgen_schema::SchemaSource;

use crate::{commands::UnwrapOrExit, config::JackgenConfig};

#[derive(Args)]
pub struct SourceArgs {
    /// JSON Schema file(s) to load (overrides [[sources]] in the config)
    #[arg(short, long = "src", value_name = "FILE")]
    pub sources: Vec<PathBuf>,

    /// Top-level name for a single --src (defaults to "TopLevel")
    #[arg(short, long, value_name = "NAME")]
    pub top_level: Option<String>,

    /// Path to jackgen.toml (defaults to ./jackgen.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// A schema to load under a top-level name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub name: String,
    pub path: PathBuf,
}

impl SourceArgs {
    pub fn config(&self) -> Result<Option<JackgenConfig>> {
        JackgenConfig::discover(self.config.as_deref())
    }

    /// Pick sources from the command line, else from the config.
    pub fn resolve(&self, config: Option<&JackgenConfig>) -> Result<Vec<SourceSpec>> {
        if !self.sources.is_empty() {
            if self.top_level.is_some() && self.sources.len() > 1 {
                bail!("--top-level can only be used with a single --src");
            }
            if let [path] = self.sources.as_slice() {
                let name = self
                    .top_level
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TOP_LEVEL_NAME.to_string());
                return Ok(vec![SourceSpec {
                    name,
                    path: path.clone(),
                }]);
            }
            return Ok(self
                .sources
                .iter()
                .map(|path| SourceSpec {
                    name: name_from_path(path),
                    path: path.clone(),
                })
                .collect());
        }

        if let Some(config) = config.filter(|c| !c.sources.is_empty()) {
            return Ok(config
                .sources
                .iter()
                .map(|source| SourceSpec {
                    name: source.name.clone(),
                    path: config.schema_path(source),
                })
                .collect());
        }

        bail!("no schema sources; pass --src or add [[sources]] to jackgen.toml")
    }

    /// Resolve and read every source, exiting with a diagnostic on I/O errors.
    pub fn open(&self, config: Option<&JackgenConfig>) -> Result<Vec<SchemaSource>> {
        let entries = self.resolve(config)?;
        Ok(entries
            .into_iter()
            .map(|entry| {
                tracing::debug!(name = %entry.name, path = %entry.path.display(), "reading schema");
                SchemaSource::open(entry.name, &entry.path).unwrap_or_exit()
            })
            .collect())
    }
}

/// Top-level name for one of several sources: the file name without
/// `.schema.json` or `.json`, PascalCased.
fn name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name
        .strip_suffix(".schema.json")
        .or_else(|| file_name.strip_suffix(".json"))
        .unwrap_or(&file_name);
    let name = to_pascal_case(stem);
    if name.is_empty() {
        DEFAULT_TOP_LEVEL_NAME.to_string()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(sources: &[&str], top_level: Option<&str>) -> SourceArgs {
        SourceArgs {
            sources: sources.iter().map(PathBuf::from).collect(),
            top_level: top_level.map(str::to_string),
            config: None,
        }
    }

    #[test]
    fn test_single_source_defaults_to_top_level() {
        let specs = args(&["input.schema"], None).resolve(None).unwrap();
        assert_eq!(specs[0].name, "TopLevel");
    }

    #[test]
    fn test_single_source_with_given_name() {
        let specs = args(&["order.json"], Some("Order")).resolve(None).unwrap();
        assert_eq!(specs[0].name, "Order");
    }

    #[test]
    fn test_multiple_sources_named_after_files() {
        let specs = args(&["schemas/line_item.schema.json", "point.json"], None)
            .resolve(None)
            .unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["LineItem", "Point"]);
    }

    #[test]
    fn test_top_level_with_multiple_sources_is_rejected() {
        assert!(args(&["a.json", "b.json"], Some("A")).resolve(None).is_err());
    }

    #[test]
    fn test_sources_from_config() {
        let config = JackgenConfig::parse(
            "[[sources]]\nname = \"Order\"\nschema = \"order.json\"\n",
            "schemas",
        )
        .unwrap();
        let specs = args(&[], None).resolve(Some(&config)).unwrap();
        assert_eq!(
            specs,
            vec![SourceSpec {
                name: "Order".to_string(),
                path: Path::new("schemas").join("order.json"),
            }]
        );
    }

    #[test]
    fn test_command_line_overrides_config() {
        let config = JackgenConfig::parse(
            "[[sources]]\nname = \"Order\"\nschema = \"order.json\"\n",
            "",
        )
        .unwrap();
        let specs = args(&["point.json"], Some("Point"))
            .resolve(Some(&config))
            .unwrap();
        assert_eq!(specs[0].name, "Point");
    }

    #[test]
    fn test_no_sources_is_an_error() {
        assert!(args(&[], None).resolve(None).is_err());
    }
}
