// clipnotes-core/src/types/mod.rs

pub mod chord;
pub mod pitch;
pub mod time;

pub use chord::{ChordLookup, StandardChords};
pub use pitch::{is_valid_pitch, Accidental, Pitch};
pub use time::{ticks, Ticks, TICKS_PER_BAR};
