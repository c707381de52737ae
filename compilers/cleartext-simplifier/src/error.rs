use std::path::PathBuf;

use thiserror::Error;

use cleartext_protocol::{AnalyzerError, OracleError};

/// Failure of a simplification run. Collaborator errors pass through unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClearTextError {
    #[error("linguistic analysis failed: {0}")]
    Analyzer(#[from] AnalyzerError),

    #[error("frequency or readability lookup failed: {0}")]
    Oracle(#[from] OracleError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid dictionary entry: {0}")]
    Dictionary(String),
}
