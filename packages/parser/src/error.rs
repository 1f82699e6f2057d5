use std::path::Path;
use thiserror::Error;

/// Errors that can interrupt the one-shot load of a properties file.
///
/// None of these reach `get` callers directly: they are logged,
/// recorded on the owning `Properties`, and otherwise surface only as
/// missing keys.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("resource not found: {path}")]
    ResourceNotFound { path: String },

    #[error("{path} is not valid UTF-8 (first invalid byte at offset {offset})")]
    UnsupportedEncoding { path: String, offset: usize },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn resource_not_found(path: &Path) -> Self {
        Self::ResourceNotFound {
            path: path.display().to_string(),
        }
    }

    pub fn unsupported_encoding(path: &Path, offset: usize) -> Self {
        Self::UnsupportedEncoding {
            path: path.display().to_string(),
            offset,
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Lookup failure returned by `Properties::get`.
///
/// This is the only error the accessor ever raises, which keeps the
/// "try get, fall back to a default" caller pattern simple: a missing
/// file and a missing key look the same here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("property not found: {name}")]
pub struct PropertyNotFound {
    name: String,
}

impl PropertyNotFound {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Name of the property that was looked up.
    pub fn name(&self) -> &str {
        &self.name
    }
}
