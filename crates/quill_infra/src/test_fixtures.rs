//! Reusable test doubles for the infra seams.

use std::sync::Mutex;

use quill_app::OutcomeLogInfra;
use quill_domain::LogEntry;

/// Records rendered outcome lines in memory instead of touching disk.
#[derive(Default)]
pub struct RecordingLog {
    lines: Mutex<Vec<String>>,
}

impl RecordingLog {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl OutcomeLogInfra for RecordingLog {
    async fn append(&self, message: &str, outcome: Option<bool>) {
        self.lines
            .lock()
            .unwrap()
            .push(LogEntry::new(message, outcome).to_string());
    }
}
