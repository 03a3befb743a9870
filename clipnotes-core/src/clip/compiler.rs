//! Pattern-to-event compiler.

use super::accent::Accent;
use super::event::{NoteEvent, SlotKind};
use super::params::{ClipParams, Subdivision};
use crate::error::{ClipError, Result};
use crate::notes::{resolve_notes, ResolvedNote};
use crate::pattern::{expand, PatternNode};
use crate::types::time::{format_ticks, offsets, split, Ticks};
use crate::types::{ChordLookup, StandardChords};

/// A compiled clip: the flat event list plus the slot grid it was built on.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    events: Vec<NoteEvent>,
    starts: Vec<Ticks>,
    total: Ticks,
    subdivision: Subdivision,
    slots: usize,
}

impl Clip {
    /// Compile with the built-in chord dictionary.
    pub fn compile(params: &ClipParams) -> Result<Clip> {
        Self::compile_with(params, &StandardChords)
    }

    /// Compile against a caller-supplied chord dictionary.
    ///
    /// Stages run in order and the first failure aborts the call: params,
    /// note resolution, pattern expansion, then the walk. The walk fails only
    /// when nesting is deep enough that exact durations overflow `i64`.
    pub fn compile_with(params: &ClipParams, chords: &dyn ChordLookup) -> Result<Clip> {
        params.validate()?;
        let notes = resolve_notes(&params.notes, chords)?;
        let root = expand(&params.pattern)?;
        let subdivision = params.subdivision();

        let mut walker = Walker {
            notes: &notes,
            step: 0,
            on_index: 0,
            velocity: params.velocity,
            accent: Accent::new(&params.accent_map, params.accent_hi, params.accent_lo),
            events: Vec::with_capacity(root.leaf_count()),
        };

        // Each top-level slot gets a whole subdivision; only brackets divide
        let slots = root.children();
        for slot in slots {
            walker.walk(slot, subdivision.ticks())?;
        }

        let (starts, total) =
            offsets(walker.events.iter().map(|e| e.duration)).ok_or_else(too_deep)?;
        let clip = Clip {
            events: walker.events,
            starts,
            total,
            subdivision,
            slots: slots.len(),
        };
        log::debug!(
            "compiled '{}' at {}: {} events over {} slots, {} ticks",
            params.pattern,
            subdivision,
            clip.events.len(),
            clip.slots,
            format_ticks(clip.total)
        );
        Ok(clip)
    }

    pub fn events(&self) -> &[NoteEvent] {
        &self.events
    }

    /// Events paired with their start offset from the top of the clip
    pub fn timeline(&self) -> impl Iterator<Item = (Ticks, &NoteEvent)> + '_ {
        self.starts.iter().copied().zip(self.events.iter())
    }

    pub fn into_events(self) -> Vec<NoteEvent> {
        self.events
    }

    pub fn subdivision(&self) -> Subdivision {
        self.subdivision
    }

    /// Number of top-level slots in the pattern
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Sum of all event durations; always `slots * subdivision ticks`
    pub fn total_duration(&self) -> Ticks {
        self.total
    }

    /// Number of sounding events
    pub fn on_count(&self) -> usize {
        self.events.iter().filter(|e| !e.is_rest()).count()
    }
}

/// Compile `params` into its event list.
pub fn compile(params: &ClipParams) -> Result<Vec<NoteEvent>> {
    Ok(Clip::compile(params)?.into_events())
}

fn too_deep() -> ClipError {
    ClipError::syntax("pattern nests too deeply for exact timing")
}

/// Depth-first walk state. `step` only moves on `x` leaves.
struct Walker<'a> {
    notes: &'a [ResolvedNote],
    step: usize,
    on_index: usize,
    velocity: u8,
    accent: Option<Accent>,
    events: Vec<NoteEvent>,
}

impl Walker<'_> {
    fn walk(&mut self, node: &PatternNode, duration: Ticks) -> Result<()> {
        match node {
            PatternNode::Note => {
                let velocity = match &self.accent {
                    Some(accent) => accent.velocity(self.on_index),
                    None => self.velocity,
                };
                let pitches = self.notes[self.step].clone();
                log::trace!("step {}: {} for {}", self.step, pitches, format_ticks(duration));
                self.events.push(NoteEvent::note(pitches, duration, velocity));
                self.step = (self.step + 1) % self.notes.len();
                self.on_index += 1;
            }
            PatternNode::Rest => {
                self.events
                    .push(NoteEvent::rest(SlotKind::Rest, duration, self.velocity));
            }
            PatternNode::Sustain => {
                self.events
                    .push(NoteEvent::rest(SlotKind::Sustain, duration, self.velocity));
            }
            PatternNode::Group(children) => {
                let child_duration = split(duration, children.len()).ok_or_else(too_deep)?;
                for child in children {
                    self.walk(child, child_duration)?;
                }
            }
        }
        Ok(())
    }
}
