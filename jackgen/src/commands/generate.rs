use std::{io, path::PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use jackgen_codegen_java::{DEFAULT_PACKAGE, JavaOptions};
use jackgen_core::{Overwrite, WriteResult};

use super::UnwrapOrExit;
use crate::{config::JackgenConfig, language::Language, output::print_files, sources::SourceArgs};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Target language
    #[arg(short, long, value_enum, default_value_t = Language::Java)]
    pub lang: Language,

    /// Java package for generated files (overrides jackgen.toml)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Emit only type declarations, without the Converter helper
    #[arg(long)]
    pub just_types: bool,

    /// Annotate classes with @lombok.Data instead of emitting accessors
    #[arg(long)]
    pub lombok: bool,

    /// Write files into this directory instead of printing them
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Leave files that already exist in the output directory untouched
    #[arg(long, requires = "out")]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.sources.config()?;
        let sources = self.sources.open(config.as_ref())?;
        let graph = jackgen_schema::load(&sources).unwrap_or_exit();

        let options = self.options(config.as_ref());
        let target = self.lang.target(options);
        // Everything is rendered before anything is written
        let output = target
            .render(&graph)
            .wrap_err("Failed to generate code")?;

        match &self.out {
            None => print_files(&output, &mut io::stdout().lock()),
            Some(dir) => {
                let overwrite = if self.keep_existing {
                    Overwrite::IfMissing
                } else {
                    Overwrite::Always
                };
                let results = output
                    .write_all(dir, overwrite)
                    .wrap_err("Failed to write generated files")?;

                let written = results
                    .iter()
                    .filter(|(_, r)| *r == WriteResult::Written)
                    .count();
                println!("Generated: {}/ ({} files)", dir.display(), written);
                for (path, result) in &results {
                    match result {
                        WriteResult::Written => println!("  + {}", path.display()),
                        WriteResult::Skipped => println!("  = {} (kept)", path.display()),
                    }
                }
                Ok(())
            }
        }
    }

    /// Command line flags win over the config file, which wins over defaults.
    fn options(&self, config: Option<&JackgenConfig>) -> JavaOptions {
        let java = config.map(|c| c.java.clone()).unwrap_or_default();
        let package = self
            .package
            .clone()
            .or(java.package)
            .unwrap_or_else(|| DEFAULT_PACKAGE.to_string());

        JavaOptions::new()
            .package(package)
            .just_types(self.just_types || java.just_types.unwrap_or(false))
            .lombok(self.lombok || java.lombok.unwrap_or(false))
    }
}
