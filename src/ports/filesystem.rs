//! Filesystem port for loading schema, spec and data files.

use std::path::Path;

/// Read access to the files the CLI loads.
///
/// Loading goes through this trait so the store can be tested against an
/// in-memory filesystem.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if the path exists.
    fn exists(&self, path: &Path) -> bool;
}
