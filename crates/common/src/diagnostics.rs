//! Leveled diagnostics recorded during a conversion run
//!
//! Pipeline stages record diagnostics instead of printing; the CLI decides
//! how to render them. Diagnostics never affect output correctness.

/// Console channel a diagnostic belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Comment,
    Error,
}

/// A single diagnostic line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    pub fn comment(message: impl Into<String>) -> Self {
        Self {
            level: Level::Comment,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}
