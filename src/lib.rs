//! # clipnotes
//!
//! Command-line front end for the clipnotes pattern compiler. A clip is a
//! rhythm pattern such as `"x[xx]-"` plus a list of pitches or chord names;
//! compiling it yields a flat list of timed note events.
//!
//! ## Modules
//!
//! - `commands`: REPL command registry and handlers for editing a clip session.
//! - `repl`: The interactive Read-Eval-Print Loop.
//! - `render`: Terminal and JSON output for compiled clips.
//!
//! The compiler itself lives in `clipnotes-core`.

pub mod commands;
pub mod render;
pub mod repl;

// Re-export commonly used types and functions for convenience
pub use clipnotes_core::{compile, Clip, ClipError, ClipParams, NoteEvent};
