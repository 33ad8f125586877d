//! `jackgen.toml` configuration.
//!
//! ```toml
//! [java]
//! package = "com.example.orders"
//! just_types = false
//! lombok = false
//!
//! [[sources]]
//! name = "Order"
//! schema = "schemas/order.schema.json"
//! ```

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Deserialize;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG: &str = "jackgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JackgenConfig {
    #[serde(default)]
    pub java: JavaSection,
    #[serde(default)]
    pub sources: Vec<SourceEntry>,
    /// Directory the config was read from; schema paths are relative to it
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JavaSection {
    pub package: Option<String>,
    pub just_types: Option<bool>,
    pub lombok: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    pub name: String,
    pub schema: PathBuf,
}

impl JackgenConfig {
    /// Parse config text; schema paths resolve against `base_dir`.
    pub fn parse(content: &str, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let mut config: Self = toml::from_str(content)?;
        config.base_dir = base_dir.into();
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&content, base_dir)
            .wrap_err_with(|| format!("invalid config '{}'", path.display()))
    }

    /// Load the config to use for a command.
    ///
    /// An explicitly given path must exist. Without one, [`DEFAULT_CONFIG`]
    /// is used if present.
    pub fn discover(explicit: Option<&Path>) -> Result<Option<Self>> {
        match explicit {
            Some(path) => Self::open(path).map(Some),
            None => {
                let path = Path::new(DEFAULT_CONFIG);
                if path.exists() {
                    tracing::debug!(path = %path.display(), "using config file");
                    Self::open(path).map(Some)
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Schema path of a source, resolved against the config directory.
    pub fn schema_path(&self, source: &SourceEntry) -> PathBuf {
        self.base_dir.join(&source.schema)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = JackgenConfig::parse(
            r#"
            [java]
            package = "com.example"
            lombok = true

            [[sources]]
            name = "Order"
            schema = "order.schema.json"
            "#,
            "schemas",
        )
        .unwrap();

        assert_eq!(config.java.package.as_deref(), Some("com.example"));
        assert_eq!(config.java.lombok, Some(true));
        assert_eq!(config.java.just_types, None);
        assert_eq!(config.sources.len(), 1);
        assert_eq!(
            config.schema_path(&config.sources[0]),
            Path::new("schemas").join("order.schema.json")
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = JackgenConfig::parse("", "").unwrap();
        assert_eq!(config.java, JavaSection::default());
        assert!(config.sources.is_empty());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(JackgenConfig::parse("[java]\npackages = \"x\"", "").is_err());
    }

    #[test]
    fn test_open_resolves_relative_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(DEFAULT_CONFIG);
        fs::write(
            &path,
            "[[sources]]\nname = \"Order\"\nschema = \"order.json\"\n",
        )
        .unwrap();

        let config = JackgenConfig::open(&path).unwrap();
        assert_eq!(
            config.schema_path(&config.sources[0]),
            temp.path().join("order.json")
        );
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(JackgenConfig::discover(Some(&missing)).is_err());
    }
}
