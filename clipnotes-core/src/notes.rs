//! Note-list resolution
//!
//! Turns the user's `notes` parameter into one [`ResolvedNote`] per entry.
//! Each entry is tried, in order, as an explicit pitch array, a single pitch,
//! then a chord name. Pitch wins over chord name, so `C6` is the pitch C in
//! octave 6 and never the C sixth chord.

use crate::error::{ClipError, Result};
use crate::types::{ChordLookup, Pitch};
use std::fmt;

/// The raw `notes` parameter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NoteList {
    /// Whitespace-delimited tokens: `"c4 e4 CM"`
    Text(String),
    /// Pre-split entries
    Items(Vec<NoteItem>),
}

/// One entry of a structured note list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum NoteItem {
    /// A pitch or chord name
    Token(String),
    /// An explicit chord given as pitches
    Pitches(Vec<String>),
}

impl Default for NoteList {
    fn default() -> Self {
        NoteList::Text("C4".to_string())
    }
}

impl From<&str> for NoteList {
    fn from(s: &str) -> Self {
        NoteList::Text(s.to_string())
    }
}

impl From<String> for NoteList {
    fn from(s: String) -> Self {
        NoteList::Text(s)
    }
}

impl From<Vec<NoteItem>> for NoteList {
    fn from(items: Vec<NoteItem>) -> Self {
        NoteList::Items(items)
    }
}

impl From<&str> for NoteItem {
    fn from(s: &str) -> Self {
        NoteItem::Token(s.to_string())
    }
}

impl<S: AsRef<str>> From<Vec<S>> for NoteItem {
    fn from(pitches: Vec<S>) -> Self {
        NoteItem::Pitches(pitches.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl NoteList {
    /// Split into entries. Text input collapses whitespace runs first.
    pub fn items(&self) -> Vec<NoteItem> {
        match self {
            NoteList::Text(text) => text
                .split_whitespace()
                .map(|token| NoteItem::Token(token.to_string()))
                .collect(),
            NoteList::Items(items) => items.clone(),
        }
    }
}

/// Canonical pitch set for one note-list entry. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResolvedNote(Vec<Pitch>);

impl ResolvedNote {
    /// Wrap a pitch list, rejecting an empty one.
    pub fn new(pitches: Vec<Pitch>) -> Option<Self> {
        if pitches.is_empty() {
            None
        } else {
            Some(ResolvedNote(pitches))
        }
    }

    pub fn single(pitch: Pitch) -> Self {
        ResolvedNote(vec![pitch])
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_chord(&self) -> bool {
        self.0.len() > 1
    }

    /// Pitch identifiers as strings, e.g. `["C4", "E4", "G4"]`
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|p| p.to_string()).collect()
    }
}

impl fmt::Display for ResolvedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.names();
        if self.is_chord() {
            write!(f, "[{}]", names.join(", "))
        } else {
            write!(f, "{}", names.join(""))
        }
    }
}

/// Resolve every entry of `notes`, failing on the first bad one.
pub fn resolve_notes(notes: &NoteList, chords: &dyn ChordLookup) -> Result<Vec<ResolvedNote>> {
    let items = notes.items();
    if items.is_empty() {
        return Err(ClipError::config("notes must contain at least one entry"));
    }
    items.iter().map(|item| resolve_item(item, chords)).collect()
}

/// Resolve a single entry.
pub fn resolve_item(item: &NoteItem, chords: &dyn ChordLookup) -> Result<ResolvedNote> {
    match item {
        NoteItem::Pitches(members) => {
            let pitches = members
                .iter()
                .map(|m| {
                    m.parse::<Pitch>().map_err(|_| {
                        ClipError::invalid_note(m.as_str(), "arrays must contain only valid pitches")
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            ResolvedNote::new(pitches)
                .ok_or_else(|| ClipError::invalid_note("[]", "chord array is empty"))
        }
        NoteItem::Token(token) => resolve_token(token, chords),
    }
}

/// Resolve a single token: pitch first, chord name second.
pub fn resolve_token(token: &str, chords: &dyn ChordLookup) -> Result<ResolvedNote> {
    if let Ok(pitch) = token.parse::<Pitch>() {
        return Ok(ResolvedNote::single(pitch));
    }

    if let Some(resolved) = chords.lookup(token).and_then(ResolvedNote::new) {
        log::trace!("'{}' resolved as chord {}", token, resolved);
        return Ok(resolved);
    }

    Err(ClipError::invalid_note(
        token,
        "must be a valid note, array of notes or a chord name",
    ))
}
