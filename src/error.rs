use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "failed to execute {}: {source}. Please ensure the path for headsetcontrol is correct",
        .path.display()
    )]
    ExternalToolMissing { path: PathBuf, source: io::Error },

    #[error("malformed headsetcontrol response: {0}")]
    MalformedResponse(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("check interval must be at least one second")]
    InvalidInterval,
}
