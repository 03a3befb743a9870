//! The characters a pattern string may contain.

use std::fmt;

/// One character of pattern notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotationToken {
    /// `x`: play the next note
    NoteOn,
    /// `-`: silence
    RestSilent,
    /// `_`: silence the player may render as a held note
    RestSustain,
    /// `[`
    GroupOpen,
    /// `]`
    GroupClose,
}

impl NotationToken {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(NotationToken::NoteOn),
            '-' => Some(NotationToken::RestSilent),
            '_' => Some(NotationToken::RestSustain),
            '[' => Some(NotationToken::GroupOpen),
            ']' => Some(NotationToken::GroupClose),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            NotationToken::NoteOn => 'x',
            NotationToken::RestSilent => '-',
            NotationToken::RestSustain => '_',
            NotationToken::GroupOpen => '[',
            NotationToken::GroupClose => ']',
        }
    }
}

impl fmt::Display for NotationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
