mod fs_service;
mod outcome_log;

#[cfg(test)]
pub mod test_fixtures;

pub use fs_service::QuillFileService;
pub use outcome_log::QuillOutcomeLog;
