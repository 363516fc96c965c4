use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File {path} not found.")]
    NotFound {
        path: String
    },
    #[error("Encoding error in file {path}")]
    Encoding {
        path: String,
        #[source]
        source: FromUtf8Error
    },
    #[error("Malformed transactions in file {path}: {message}")]
    Malformed {
        path: String,
        message: String
    },
    #[error("Failed to read file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error
    }
}

impl LoadError {
    pub fn read(path: &str, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path: path.to_string() },
            _ => Self::Io { path: path.to_string(), source }
        }
    }

    pub fn encoding(path: &str, source: FromUtf8Error) -> Self {
        Self::Encoding { path: path.to_string(), source }
    }

    pub fn malformed(path: &str, message: impl ToString) -> Self {
        Self::Malformed { path: path.to_string(), message: message.to_string() }
    }
}
