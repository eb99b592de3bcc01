use std::path::{Path, PathBuf};

use bytes::Bytes;
use quill_domain::Error;

/// The single seam the queue subsystem uses to reach the filesystem.
///
/// Implementations hold no state between calls apart from their outcome-log
/// collaborator. Read-side queries never fail; they report "nothing found"
/// through their return value. Mutating operations surface a typed
/// [`Error`], aborting any remaining work in that call.
#[async_trait::async_trait]
pub trait FileServiceInfra: Send + Sync {
    async fn exists(&self, path: &Path) -> bool;

    async fn is_directory(&self, path: &Path) -> bool;

    /// Raw contents, or `None` when the path cannot be read.
    async fn read_file(&self, path: &Path) -> Option<Bytes>;

    /// Writes `data` to `path`, creating it when absent and creatable.
    /// Returns the number of bytes written.
    async fn write_file(&self, path: &Path, data: Bytes) -> Result<u64, Error>;

    /// Ordered matches for a shell-style wildcard pattern. Empty when
    /// nothing matches or the pattern is invalid.
    async fn glob(&self, pattern: &str) -> Vec<PathBuf>;

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), Error>;

    /// Copies every match of `pattern` into `target_dir`, flattening each
    /// path to its basename. Stops at the first failing copy; earlier
    /// copies stay in place. Returns the number of matches attempted.
    async fn copy_matching(&self, pattern: &str, target_dir: &Path) -> Result<usize, Error>;

    /// Creates a single directory level; parents must already exist.
    async fn make_directory(&self, path: &Path) -> Result<(), Error>;

    async fn delete_file(&self, path: &Path) -> Result<(), Error>;

    /// Deletes every direct child of `folder` in match order; the first
    /// failure propagates and the remainder is left untouched.
    async fn delete_all_in_directory(&self, folder: &Path) -> Result<(), Error>;

    /// Removes an empty directory.
    async fn remove_directory(&self, path: &Path) -> Result<(), Error>;

    /// Final path component, empty when there is none.
    fn basename(&self, path: &Path) -> String;
}
