use std::path::PathBuf;

use appwire_codegen::{build_plan, Generator, Registration, SkipReason};
use appwire_core::WriteResult;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{config::Config, discover::discover};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to appwire.toml (defaults to ./appwire.toml)
    #[arg(short, long, default_value = "appwire.toml")]
    pub config: PathBuf,

    /// Source tree root (overrides input.dir)
    #[arg(short, long)]
    pub input_dir: Option<PathBuf>,

    /// Output root directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print the generated document instead of writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = Config::open(&self.config).unwrap_or_exit();
        let input_dir = self.input_dir.clone().unwrap_or_else(|| config.input_dir.clone());

        let paths = discover(&input_dir, &config.patterns)
            .wrap_err_with(|| format!("Failed to discover files under '{}'", input_dir.display()))?;

        let plan = build_plan(&paths, &config.plan_options());
        let generator = Generator::new(&plan, &input_dir, &self.output);

        if self.dry_run {
            println!("── {} ──", config.output_file.display());
            println!("{}", generator.preview());
            println!("── Summary ──");
            Self::print_counts(&plan);
            return Ok(());
        }

        let result = generator
            .generate(&config.output_file)
            .wrap_err("Failed to generate manifest")?;

        match result.write {
            WriteResult::Written => println!("Generated: {}", result.document_path.display()),
            WriteResult::Skipped => {
                println!("Up to date: {}", result.document_path.display());
            }
        }
        println!("Relocated {} files from {}", result.relocated, input_dir.display());
        Self::print_counts(&plan);
        Self::print_skipped(&plan);
        println!(
            "Source map: {} (emitted by the build pipeline, sources_content = {})",
            config.source_map_file.display(),
            config.sources_content
        );

        Ok(())
    }

    fn print_counts(plan: &appwire_codegen::Plan) {
        println!(
            "{} registered, {} plain modules",
            plan.registered_count(),
            plan.module_count()
        );
    }

    fn print_skipped(plan: &appwire_codegen::Plan) {
        for file in plan.skipped() {
            let Registration::Skip { reason } = &file.registration else {
                continue;
            };
            match reason {
                SkipReason::EntryFile => println!("  - {} (application entry)", file.path),
                SkipReason::UnsupportedExtension => {
                    println!("  - {} (relocated, not registered)", file.path)
                }
            }
        }
    }
}
