//! # clipnotes core
//!
//! Compiles rhythm patterns such as `"x[x[xx]x]x"` plus a note list into a
//! flat, time-ordered list of note events for a sequencer to play.
//!
//! ## Features
//!
//! - **serde**: serialise events, deserialise [`ClipParams`] from JSON
//!
//! ## Example
//!
//! ```
//! use clipnotes_core::{compile, ClipParams};
//!
//! let events = compile(&ClipParams::new("c4 e4 g4", "x[xx]")).unwrap();
//! assert_eq!(events.len(), 3);
//! assert_eq!(events[1].names(), vec!["E4"]);
//! ```

pub mod clip;
pub mod error;
pub mod notes;
pub mod pattern;
pub mod types;

// Re-export commonly used types
pub use clip::{compile, Clip, ClipParams, NoteEvent, SlotKind, Subdivision};
pub use error::ClipError;
pub use notes::{resolve_notes, NoteItem, NoteList, ResolvedNote};
pub use pattern::{expand, PatternNode};
pub use types::{ChordLookup, Pitch, StandardChords, Ticks};
