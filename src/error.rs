//! Error types for google_oauth_env.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(".env file not found at: {}", .0.display())]
    EnvFileNotFound(PathBuf),

    #[error("{0} is required")]
    MissingCredential(&'static str),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "failed to parse {}: {source} (values containing spaces must be quoted)",
        path.display()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: dotenv::Error,
    },

    #[error("console I/O failed: {0}")]
    Console(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
