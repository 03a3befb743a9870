//! Terminal and JSON rendering of compiled clips

use anyhow::{Context, Result};
use clipnotes_core::types::time::format_ticks;
use clipnotes_core::{Clip, NoteEvent, SlotKind};
use colored::*;

/// One line per event: start offset, duration, pitches, velocity
pub fn render_clip(clip: &Clip) -> String {
    let mut out = String::new();

    for (i, (start, event)) in clip.timeline().enumerate() {
        out.push_str(&format!(
            "{:>3}  @{:<8} {:<8} {}\n",
            i,
            format_ticks(start),
            format_ticks(event.duration),
            describe(event)
        ));
    }

    out.push_str(
        &format!(
            "{} events, {} sounding, {} slots of {} = {} ticks",
            clip.events().len(),
            clip.on_count(),
            clip.slots(),
            clip.subdivision(),
            format_ticks(clip.total_duration())
        )
        .dimmed()
        .to_string(),
    );
    out
}

fn describe(event: &NoteEvent) -> String {
    match (&event.pitches, event.slot) {
        (Some(pitches), _) => format!(
            "{} {}",
            pitches.to_string().cyan(),
            format!("vel {}", event.velocity).dimmed()
        ),
        (None, SlotKind::Sustain) => "_ sustain".yellow().to_string(),
        (None, _) => "- rest".bright_black().to_string(),
    }
}

/// Pretty JSON array of the clip's events
pub fn clip_json(clip: &Clip) -> Result<String> {
    serde_json::to_string_pretty(clip.events()).context("Failed to serialize events")
}
