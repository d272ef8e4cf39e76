//! `appwire.toml` parsing and validation.
//!
//! The manifest is deserialized into a raw shape first, then validated into
//! a [`Config`] with every default applied, so the rest of the binary never
//! sees an `Option`.

use std::path::{Path, PathBuf};

use appwire_codegen::PlanOptions;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(appwire::config::io),
        help("pass --config to point at your appwire.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse appwire.toml")]
    #[diagnostic(code(appwire::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("option 'output.file' is required")]
    #[diagnostic(
        code(appwire::config::missing_output),
        help("add `file = \"app-init.js\"` under [output]")
    )]
    MissingOutputFile {
        #[source_code]
        src: NamedSource<String>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    output: RawOutput,
    #[serde(default)]
    input: RawInput,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOutput {
    file: Option<PathBuf>,
    source_map: Option<PathBuf>,
    #[serde(default)]
    sources_content: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawInput {
    dir: Option<PathBuf>,
    patterns: Option<Vec<String>>,
    extension: Option<String>,
    entry: Option<String>,
    modules_dir: Option<String>,
}

/// Fully validated configuration with defaults applied.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the generated document, relative to the output root.
    pub output_file: PathBuf,
    /// Companion source-map path; the map itself is produced by the
    /// surrounding tooling, not by appwire.
    pub source_map_file: PathBuf,
    pub sources_content: bool,
    /// Discovery root for the application tree.
    pub input_dir: PathBuf,
    /// Glob filters applied to discovered paths.
    pub patterns: Vec<String>,
    pub extension: String,
    pub entry_file: String,
    pub modules_dir: String,
}

impl Config {
    /// Load and validate a manifest from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(ConfigError::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_str_with_filename(&content, &filename)
    }

    /// Parse and validate manifest content.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, content.to_string()),
                span,
                source,
            })
        })?;

        let Some(output_file) = raw.output.file else {
            return Err(Box::new(ConfigError::MissingOutputFile {
                src: NamedSource::new(filename, content.to_string()),
            }));
        };

        let extension = raw.input.extension.unwrap_or_else(|| "js".to_string());
        let source_map_file = raw
            .output
            .source_map
            .unwrap_or_else(|| output_file.with_extension("map"));
        let patterns = raw
            .input
            .patterns
            .unwrap_or_else(|| vec![format!("**/*.{extension}")]);
        let entry_file = raw.input.entry.unwrap_or_else(|| format!("app.{extension}"));

        Ok(Self {
            output_file,
            source_map_file,
            sources_content: raw.output.sources_content,
            input_dir: raw.input.dir.unwrap_or_else(|| PathBuf::from(".")),
            patterns,
            extension,
            entry_file,
            modules_dir: raw
                .input
                .modules_dir
                .unwrap_or_else(|| "modules".to_string()),
        })
    }

    /// The planner options this configuration implies.
    pub fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            entry_file: self.entry_file.clone(),
            extension: self.extension.clone(),
            modules_dir: self.modules_dir.clone(),
        }
    }
}
