use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tswink_codegen_typescript::{Generator, LanguageCodegen};
use tswink_manifest::{EntitySource, Project};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to tswink.toml (defaults to ./tswink.toml)
    #[arg(short, long, default_value = "tswink.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let files = Generator::new(&project)
            .preview()
            .wrap_err("Validation failed")?;

        let (models, enums) = project
            .sources()
            .iter()
            .partition::<Vec<_>, _>(|s| matches!(s.entity, EntitySource::Model(_)));

        println!("✓ {} is valid\n", self.config.display());
        println!(
            "  {} model{}, {} enum{}",
            models.len(),
            if models.len() == 1 { "" } else { "s" },
            enums.len(),
            if enums.len() == 1 { "" } else { "s" }
        );
        println!(
            "  {} file{} would be generated",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }
}
