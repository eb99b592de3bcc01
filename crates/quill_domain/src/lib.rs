mod error;
mod log_entry;

pub use error::{Error, ErrorKind};
pub use log_entry::LogEntry;
