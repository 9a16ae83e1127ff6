use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use log::info;
use tswink_codegen_typescript::{Generator, LanguageCodegen};
use tswink_manifest::Project;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to tswink.toml (defaults to ./tswink.toml)
    #[arg(short, long, default_value = "tswink.toml")]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let project = Project::open(&self.config).unwrap_or_exit();
        let generator = Generator::new(&project);
        info!(
            "generating {} from {} entity sources in {}",
            generator.language(),
            project.sources().len(),
            self.config.display()
        );

        if self.dry_run {
            self.run_preview(&generator, &project)
        } else {
            self.run_generation(&generator, &project)
        }
    }

    fn run_generation(&self, generator: &Generator, project: &Project) -> Result<()> {
        let result = generator
            .generate()
            .wrap_err("Failed to generate TypeScript")?;

        if !result.written.is_empty() {
            println!("Written:");
            for path in &result.written {
                println!("  + {}", relative(project.root(), path).display());
            }
        }

        println!(
            "{} written, {} unchanged",
            result.written.len(),
            result.unchanged.len()
        );
        Ok(())
    }

    fn run_preview(&self, generator: &Generator, project: &Project) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", relative(project.root(), &file.path).display());
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}

/// Display paths relative to the project root when possible.
fn relative<'a>(root: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
