//! Compiled clip events.

use crate::notes::ResolvedNote;
use crate::types::time::{format_ticks, Ticks};
use std::fmt;

/// Which pattern leaf produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SlotKind {
    /// `x`
    Note,
    /// `-`
    Rest,
    /// `_`; silent here, a player may choose to hold the previous note
    Sustain,
}

/// One entry of a compiled clip, in playback order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NoteEvent {
    /// Pitches to sound; `None` for rests
    pub pitches: Option<ResolvedNote>,
    /// Exact length in ticks
    pub duration: Ticks,
    /// MIDI velocity (0-127)
    pub velocity: u8,
    pub slot: SlotKind,
}

impl NoteEvent {
    pub fn note(pitches: ResolvedNote, duration: Ticks, velocity: u8) -> Self {
        NoteEvent {
            pitches: Some(pitches),
            duration,
            velocity,
            slot: SlotKind::Note,
        }
    }

    pub fn rest(slot: SlotKind, duration: Ticks, velocity: u8) -> Self {
        NoteEvent {
            pitches: None,
            duration,
            velocity,
            slot,
        }
    }

    pub fn is_rest(&self) -> bool {
        self.pitches.is_none()
    }

    /// Pitch names, empty for rests
    pub fn names(&self) -> Vec<String> {
        self.pitches.as_ref().map(|p| p.names()).unwrap_or_default()
    }
}

impl fmt::Display for NoteEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.pitches, self.slot) {
            (Some(pitches), _) => write!(
                f,
                "{} {} vel {}",
                pitches,
                format_ticks(self.duration),
                self.velocity
            ),
            (None, SlotKind::Sustain) => write!(f, "_ {}", format_ticks(self.duration)),
            (None, _) => write!(f, "- {}", format_ticks(self.duration)),
        }
    }
}
