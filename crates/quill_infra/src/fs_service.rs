use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use quill_app::{FileServiceInfra, OutcomeLogInfra};
use quill_domain::Error;
use tokio::fs;
use tracing::debug;

/// Filesystem services for the queue subsystem.
///
/// Each operation is a pass-through to the platform call, decorated with a
/// writability precondition where one applies and an outcome line appended
/// to the injected log collaborator. The service keeps no OS handles
/// between calls and no state beyond that collaborator.
pub struct QuillFileService {
    outcome_log: Option<Arc<dyn OutcomeLogInfra>>,
}

impl QuillFileService {
    pub fn new() -> Self {
        Self { outcome_log: None }
    }

    pub fn with_outcome_log(outcome_log: Arc<dyn OutcomeLogInfra>) -> Self {
        Self { outcome_log: Some(outcome_log) }
    }

    async fn record(&self, message: String, outcome: Option<bool>) {
        if let Some(log) = &self.outcome_log {
            log.append(&message, outcome).await;
        }
    }
}

impl Default for QuillFileService {
    fn default() -> Self {
        Self::new()
    }
}

/// Writability probe used by the mutating preconditions.
///
/// Regular files are probed by opening for write; directories by their
/// readonly bit. A missing path is not writable.
async fn is_writable(path: &Path) -> bool {
    match fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => !meta.permissions().readonly(),
        Ok(_) => fs::OpenOptions::new().write(true).open(path).await.is_ok(),
        Err(_) => false,
    }
}

#[async_trait::async_trait]
impl FileServiceInfra for QuillFileService {
    async fn exists(&self, path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }

    async fn is_directory(&self, path: &Path) -> bool {
        fs::metadata(path).await.map(|meta| meta.is_dir()).unwrap_or(false)
    }

    async fn read_file(&self, path: &Path) -> Option<Bytes> {
        fs::read(path).await.ok().map(Bytes::from)
    }

    async fn write_file(&self, path: &Path, data: Bytes) -> Result<u64, Error> {
        // Create the file if it is absent but creatable, so the writability
        // check below can pass. The probe's own outcome is ignored.
        let _ = fs::OpenOptions::new().append(true).create(true).open(path).await;

        if !is_writable(path).await {
            return Err(Error::FileNotWritable { path: path.to_path_buf() });
        }

        let written = fs::write(path, &data).await;
        self.record(
            format!("Writing to file `{}`", path.display()),
            Some(written.is_ok()),
        )
        .await;

        match written {
            Ok(()) => Ok(data.len() as u64),
            Err(source) => Err(Error::WriteFailed { path: path.to_path_buf(), source }),
        }
    }

    async fn glob(&self, pattern: &str) -> Vec<PathBuf> {
        match glob::glob(pattern) {
            Ok(paths) => paths.filter_map(Result::ok).collect(),
            Err(_) => Vec::new(),
        }
    }

    async fn rename(&self, from: &Path, to: &Path) -> Result<(), Error> {
        fs::rename(from, to).await.map_err(|source| Error::RenameFailed {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;

        // Sits after the failure check: a failed rename is never logged.
        self.record(
            format!("Renaming `{}` to `{}`", from.display(), to.display()),
            Some(true),
        )
        .await;
        Ok(())
    }

    async fn copy_matching(&self, pattern: &str, target_dir: &Path) -> Result<usize, Error> {
        let files = self.glob(pattern).await;
        debug!(pattern, count = files.len(), "copying glob matches");

        for file in &files {
            let target = target_dir.join(file.file_name().unwrap_or_default());
            fs::copy(file, &target)
                .await
                .map_err(|source| Error::CopyFailed { target: target.clone(), source })?;
        }

        self.record(
            format!(
                "Attempted to copy {} files from `{pattern}` to `{}`",
                files.len(),
                target_dir.display()
            ),
            None,
        )
        .await;
        Ok(files.len())
    }

    async fn make_directory(&self, path: &Path) -> Result<(), Error> {
        fs::create_dir(path).await.map_err(|source| Error::CreateDirFailed {
            path: path.to_path_buf(),
            source,
        })?;

        self.record(format!("Creating directory `{}`", path.display()), Some(true))
            .await;
        Ok(())
    }

    async fn delete_file(&self, path: &Path) -> Result<(), Error> {
        if !is_writable(path).await {
            return Err(Error::FileNotRemovable { path: path.to_path_buf() });
        }

        fs::remove_file(path).await.map_err(|source| Error::UnlinkFailed {
            path: path.to_path_buf(),
            source,
        })?;

        self.record(format!("Unlinking file `{}`", path.display()), Some(true))
            .await;
        Ok(())
    }

    async fn delete_all_in_directory(&self, folder: &Path) -> Result<(), Error> {
        let pattern = folder.join("*").to_string_lossy().into_owned();
        for file in self.glob(&pattern).await {
            self.delete_file(&file).await?;
        }
        Ok(())
    }

    async fn remove_directory(&self, path: &Path) -> Result<(), Error> {
        if !is_writable(path).await {
            return Err(Error::DirectoryNotRemovable { path: path.to_path_buf() });
        }

        fs::remove_dir(path).await.map_err(|source| Error::RemoveDirFailed {
            path: path.to_path_buf(),
            source,
        })?;

        self.record(format!("Removing directory `{}`", path.display()), Some(true))
            .await;
        Ok(())
    }

    fn basename(&self, path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
