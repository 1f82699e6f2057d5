//! Lazily-initialized property table backed by a single file.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use propfile_common::{FileSystem, RealFileSystem};

use crate::error::{LoadError, PropertyNotFound};
use crate::tokenizer::parse;

/// Result of the one-shot load: the parsed table, plus the failure
/// that prevented it from being filled, if any.
#[derive(Debug)]
struct LoadState {
    table: HashMap<String, String>,
    failure: Option<LoadError>,
}

/// Lazily-loaded view of a properties file.
///
/// The file is resolved through a [`FileSystem`], read and parsed once
/// on the first lookup, and served from the cached table afterwards.
/// There is no retry and no reload: the first load is final for the
/// lifetime of the value. Load failures are logged, recorded, and
/// otherwise degrade to "every key is missing".
pub struct Properties<F: FileSystem = RealFileSystem> {
    fs: F,
    path: PathBuf,
    state: OnceLock<LoadState>,
}

impl Properties<RealFileSystem> {
    /// Create a reader over a file on the real file system.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_file_system(RealFileSystem, path)
    }
}

impl<F: FileSystem> Properties<F> {
    /// Create a reader that resolves `path` through a custom file
    /// system (a mock, in tests).
    pub fn with_file_system(fs: F, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
            state: OnceLock::new(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File system used to resolve the backing file.
    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Look up a single property. The first call triggers the load.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyNotFound`] when the key is absent — including
    /// when the backing file could not be opened or decoded, which is
    /// deliberately indistinguishable here (see [`Self::load_failure`]).
    pub fn get(&self, name: &str) -> Result<&str, PropertyNotFound> {
        self.loaded()
            .table
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| PropertyNotFound::new(name))
    }

    /// Look up a property, falling back to `default` when it is absent.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// The full key/value table (empty when the load failed).
    ///
    /// Repeated calls return the same cached table without re-reading
    /// the source.
    pub fn all(&self) -> &HashMap<String, String> {
        &self.loaded().table
    }

    /// Why the load failed, if it did.
    ///
    /// [`Self::get`] folds load failures into [`PropertyNotFound`];
    /// callers that need to tell "file absent" from "key absent" can
    /// inspect this instead.
    pub fn load_failure(&self) -> Option<&LoadError> {
        self.loaded().failure.as_ref()
    }

    fn loaded(&self) -> &LoadState {
        self.state.get_or_init(|| self.load())
    }

    // Runs at most once per instance, guarded by the OnceLock.
    fn load(&self) -> LoadState {
        match self.read_table() {
            Ok(table) => LoadState {
                table,
                failure: None,
            },
            Err(failure) => {
                match failure {
                    LoadError::UnsupportedEncoding { .. } => {
                        tracing::error!("properties load error (unsupported encoding): {failure}");
                    }
                    _ => tracing::error!("properties load error: {failure}"),
                }
                LoadState {
                    table: HashMap::new(),
                    failure: Some(failure),
                }
            }
        }
    }

    fn read_table(&self) -> Result<HashMap<String, String>, LoadError> {
        let bytes = self.fs.read(&self.path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                LoadError::resource_not_found(&self.path)
            } else {
                LoadError::io(&self.path, err)
            }
        })?;
        let text = String::from_utf8(bytes).map_err(|err| {
            LoadError::unsupported_encoding(&self.path, err.utf8_error().valid_up_to())
        })?;
        Ok(parse(&text))
    }
}
