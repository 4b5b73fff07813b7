use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A tagged envelope that could not be decoded. `path` is a JSON pointer
    /// (empty for the document root).
    #[error("tagged value at '{path}': {message}")]
    Tagged { path: String, message: String },

    #[error("{0}")]
    Message(String),
}

impl Error {
    #[cfg(feature = "json")]
    pub(crate) fn tagged(path: &str, message: impl Into<String>) -> Self {
        Error::Tagged {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
