mod file_service;
mod outcome_log;

pub use file_service::FileServiceInfra;
pub use outcome_log::OutcomeLogInfra;
