//! Clip compilation
//!
//! Walks an expanded pattern depth-first, giving every leaf its share of the
//! subdivision and handing out resolved notes round-robin to the `x` slots.

mod accent;
mod compiler;
mod event;
mod params;

#[cfg(test)]
mod tests;

pub use accent::Accent;
pub use compiler::{compile, Clip};
pub use event::{NoteEvent, SlotKind};
pub use params::{
    ClipParams, Subdivision, DEFAULT_ACCENT_HI, DEFAULT_ACCENT_LO, DEFAULT_VELOCITY, MAX_VELOCITY,
};
