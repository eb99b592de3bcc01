use std::fmt;

/// One outcome-log line: a human-readable message plus an optional boolean
/// outcome.
///
/// Rendered as `<message>`, `<message> (OK)` or `<message> (Failed)`. The
/// sink that persists the entry owns the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    message: String,
    outcome: Option<bool>,
}

impl LogEntry {
    pub fn new(message: impl Into<String>, outcome: Option<bool>) -> Self {
        Self { message: message.into(), outcome }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        match self.outcome {
            Some(true) => f.write_str(" (OK)"),
            Some(false) => f.write_str(" (Failed)"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_the_outcome_suffix() {
        assert_eq!(
            LogEntry::new("Writing to file `a.txt`", Some(true)).to_string(),
            "Writing to file `a.txt` (OK)"
        );
        assert_eq!(
            LogEntry::new("Writing to file `a.txt`", Some(false)).to_string(),
            "Writing to file `a.txt` (Failed)"
        );
    }

    #[test]
    fn renders_plain_when_no_outcome_applies() {
        assert_eq!(
            LogEntry::new("Attempted to copy 0 files from `*` to `out`", None).to_string(),
            "Attempted to copy 0 files from `*` to `out`"
        );
    }
}
