use std::path::PathBuf;

use appwire_codegen::{build_plan, Registration, SkipReason};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{config::Config, discover::discover};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to appwire.toml (defaults to ./appwire.toml)
    #[arg(short, long, default_value = "appwire.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::open(&self.config).unwrap_or_exit();

        let paths = discover(&config.input_dir, &config.patterns).wrap_err_with(|| {
            format!(
                "Failed to discover files under '{}'",
                config.input_dir.display()
            )
        })?;

        let plan = build_plan(&paths, &config.plan_options());

        println!("✓ {} is valid\n", self.config.display());
        for file in &plan.files {
            let category = file
                .category
                .map(|c| c.name())
                .unwrap_or("module");
            match &file.registration {
                Registration::Skip { reason } => {
                    let why = match reason {
                        SkipReason::EntryFile => "application entry",
                        SkipReason::UnsupportedExtension => "unsupported extension",
                    };
                    println!("  {} (skipped: {})", file.path, why);
                }
                Registration::Module { .. } => {
                    println!("  {} ({})", file.path, category);
                }
                Registration::Load { identifier, .. }
                | Registration::Helper { identifier, .. }
                | Registration::View { identifier, .. }
                | Registration::Initializer { identifier, .. } => {
                    println!("  {} ({}) -> {}", file.path, category, identifier);
                }
                Registration::Template {
                    identifier, key, ..
                } => {
                    println!(
                        "  {} ({}) -> {} ['{}']",
                        file.path, category, identifier, key
                    );
                }
            }
        }

        println!(
            "\n  {} registered, {} plain modules, {} skipped",
            plan.registered_count(),
            plan.module_count(),
            plan.skipped().count()
        );

        Ok(())
    }
}
