// typed leaf errors - operations wrap these in anyhow with extra context

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// a single filesystem call failed (read, write, create directory, walk)
    #[error("failed to {action} {}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// file content is not valid utf-8
    #[error("{} is not valid utf-8 text", path.display())]
    Encoding { path: PathBuf },

    /// config file could not be parsed
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl ToolError {
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        ToolError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}
