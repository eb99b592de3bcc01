use std::path::PathBuf;

use quill_app::OutcomeLogInfra;
use quill_domain::LogEntry;
use tokio::io::AsyncWriteExt;
use tracing::warn;

/// Append-only text sink for operation outcomes.
///
/// Holds one path, fixed at construction. The path is never validated,
/// created ahead of time, or rotated, and appends from concurrent callers
/// are not synchronized.
pub struct QuillOutcomeLog {
    path: PathBuf,
}

impl QuillOutcomeLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl OutcomeLogInfra for QuillOutcomeLog {
    async fn append(&self, message: &str, outcome: Option<bool>) {
        let line = format!("{}\n", LogEntry::new(message, outcome));

        let appended = async {
            let mut file = tokio::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&self.path)
                .await?;
            file.write_all(line.as_bytes()).await
        }
        .await;

        // The operation being logged already succeeded or failed on its own
        // merits; a broken log path must not change that.
        if let Err(error) = appended {
            warn!(path = %self.path.display(), %error, "outcome log append failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn appends_accumulate_with_outcome_suffixes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("operations.log");
        let log = QuillOutcomeLog::new(&path);

        log.append("Writing to file `a.txt`", Some(true)).await;
        log.append("Writing to file `b.txt`", Some(false)).await;
        log.append("Attempted to copy 2 files from `*.txt` to `out`", None)
            .await;

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Writing to file `a.txt` (OK)\n\
             Writing to file `b.txt` (Failed)\n\
             Attempted to copy 2 files from `*.txt` to `out`\n"
        );
    }

    #[tokio::test]
    async fn creates_the_log_file_on_first_append() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("operations.log");
        let log = QuillOutcomeLog::new(&path);

        log.append("Creating directory `queue`", Some(true)).await;

        assert!(path.exists());
    }

    #[tokio::test]
    async fn a_failed_append_is_swallowed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("operations.log");
        let log = QuillOutcomeLog::new(&path);

        log.append("Unlinking file `x.txt`", Some(true)).await;

        assert!(!path.exists());
    }
}
