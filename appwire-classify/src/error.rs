use miette::Diagnostic;
use thiserror::Error;

/// Result type for classification operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("'{path}' does not carry the expected '.{extension}' extension")]
    #[diagnostic(
        code(appwire::classify::unsupported_extension),
        help("only '.{extension}' files are registered; anything else is relocated untouched")
    )]
    UnsupportedExtension { path: String, extension: String },
}
