use std::io;
use std::path::PathBuf;

/// Coarse classification of a failed filesystem operation.
///
/// `NotWritable` covers failed writability/creatability preconditions, plus
/// the platform operations whose only failure signal is the call itself
/// (rename, copy, mkdir). `FileOperation` covers OS calls that failed even
/// though the precondition passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotWritable,
    FileOperation,
}

/// Failure of a single filesystem operation.
///
/// Each variant keeps the path(s) involved and, where an OS call failed
/// after its precondition passed, the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not write to file `{}`", path.display())]
    FileNotWritable { path: PathBuf },

    #[error("write to file `{}` failed", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not rename `{}` to `{}`", from.display(), to.display())]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not copy to file target `{}`", target.display())]
    CopyFailed {
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not create folder `{}`", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not remove file `{}`", path.display())]
    FileNotRemovable { path: PathBuf },

    #[error("failed to unlink `{}`", path.display())]
    UnlinkFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not remove directory `{}`", path.display())]
    DirectoryNotRemovable { path: PathBuf },

    #[error("deleting folder `{}` failed", path.display())]
    RemoveDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotWritable { .. }
            | Error::RenameFailed { .. }
            | Error::CopyFailed { .. }
            | Error::CreateDirFailed { .. }
            | Error::FileNotRemovable { .. }
            | Error::DirectoryNotRemovable { .. } => ErrorKind::NotWritable,
            Error::WriteFailed { .. }
            | Error::UnlinkFailed { .. }
            | Error::RemoveDirFailed { .. } => ErrorKind::FileOperation,
        }
    }
}
