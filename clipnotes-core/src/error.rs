use thiserror::Error;

/// Errors raised while resolving notes or compiling a clip.
///
/// Every variant aborts the whole compile; no partial event list is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    /// Illegal pattern character, unbalanced brackets, or an empty pattern/group
    #[error("pattern syntax error: {message}")]
    PatternSyntax {
        message: String,
        /// Byte offset into the pattern string, when the error has one
        position: Option<usize>,
    },

    /// A note-list element that is not a pitch, pitch array or known chord
    #[error("invalid note '{token}': {reason}")]
    InvalidNote { token: String, reason: String },

    /// Missing or wrongly shaped configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClipError {
    pub fn syntax(message: impl Into<String>) -> Self {
        ClipError::PatternSyntax {
            message: message.into(),
            position: None,
        }
    }

    pub fn syntax_at(message: impl Into<String>, position: usize) -> Self {
        ClipError::PatternSyntax {
            message: message.into(),
            position: Some(position),
        }
    }

    pub fn invalid_note(token: impl Into<String>, reason: impl Into<String>) -> Self {
        ClipError::InvalidNote {
            token: token.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        ClipError::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ClipError>;
