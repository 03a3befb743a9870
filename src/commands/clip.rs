//! Clip session commands (notes, pattern, subdiv, accent, clip, chord)

use crate::commands::{CommandContext, CommandResult};
use crate::render::{clip_json, render_clip};
use clipnotes_core::clip::MAX_VELOCITY;
use clipnotes_core::notes::resolve_token;
use clipnotes_core::pattern::check_characters;
use clipnotes_core::{expand, resolve_notes, NoteItem, NoteList, StandardChords, Subdivision};
use colored::*;

/// Handle `notes <tokens>`; the list is resolved up front so typos show now
pub fn cmd_notes(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Notes: {}", describe_notes(&ctx.params.notes)));
    }

    let notes = NoteList::from(args);
    match resolve_notes(&notes, &StandardChords) {
        Ok(resolved) => {
            let shown: Vec<String> = resolved.iter().map(|n| n.to_string()).collect();
            ctx.params.notes = notes;
            CommandResult::Message(
                format!("🎵 Notes set: {}", shown.join(" "))
                    .bright_green()
                    .to_string(),
            )
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `pattern <x-_[]>`
pub fn cmd_pattern(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Pattern: {}", ctx.params.pattern));
    }

    match expand(args) {
        Ok(root) => {
            ctx.params.pattern = args.to_string();
            CommandResult::Message(
                format!(
                    "🥁 Pattern set: {} ({} slots, {} notes)",
                    args,
                    root.children().len(),
                    root.on_count()
                )
                .bright_green()
                .to_string(),
            )
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `subdiv <1n|2n|4n|8n|16n>`
pub fn cmd_subdiv(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Subdivision: {}", ctx.params.subdivision()));
    }

    match args.parse::<Subdivision>() {
        Ok(subdiv) => {
            ctx.params.subdiv = subdiv.name().to_string();
            CommandResult::Message(format!(
                "Subdivision set: {} ({} ticks per slot)",
                subdiv,
                subdiv.ticks()
            ))
        }
        Err(_) => {
            let names: Vec<&str> = Subdivision::ALL.iter().map(|s| s.name()).collect();
            CommandResult::Error(format!("Unknown subdivision. Use one of: {}", names.join(", ")))
        }
    }
}

/// Handle `accent <map> [hi] [lo]` or `accent off`
pub fn cmd_accent(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let mut parts = args.split_whitespace();
    let map = match parts.next() {
        None => {
            return CommandResult::Message(format!(
                "Accent: '{}' hi {} lo {}",
                ctx.params.accent_map, ctx.params.accent_hi, ctx.params.accent_lo
            ))
        }
        Some("off") => "",
        Some(map) => map,
    };

    let hi = match parse_velocity(parts.next(), ctx.params.accent_hi) {
        Ok(v) => v,
        Err(e) => return CommandResult::Error(e),
    };
    let lo = match parse_velocity(parts.next(), ctx.params.accent_lo) {
        Ok(v) => v,
        Err(e) => return CommandResult::Error(e),
    };

    let params = ctx.params.clone().with_accent(map, hi, lo);
    match params.validate() {
        Ok(()) => {
            ctx.params = params;
            CommandResult::Success
        }
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `velocity <0-127>`
pub fn cmd_velocity(args: &str, ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        return CommandResult::Message(format!("Velocity: {}", ctx.params.velocity));
    }
    match parse_velocity(Some(args), ctx.params.velocity) {
        Ok(v) => {
            ctx.params.velocity = v;
            CommandResult::Success
        }
        Err(e) => CommandResult::Error(e),
    }
}

fn parse_velocity(arg: Option<&str>, current: u8) -> Result<u8, String> {
    match arg {
        None => Ok(current),
        Some(s) => match s.parse::<u8>() {
            Ok(v) if v <= MAX_VELOCITY => Ok(v),
            _ => Err(format!("Invalid velocity '{}'. Use a value between 0-127", s)),
        },
    }
}

/// Handle `clip [pattern]`: compile the session, optionally with a one-off pattern
pub fn cmd_clip(args: &str, ctx: &mut CommandContext) -> CommandResult {
    let params = if args.is_empty() {
        ctx.params.clone()
    } else {
        ctx.params.clone().with_pattern(args)
    };
    match CommandContext::with_params(params).compile() {
        Ok(clip) => CommandResult::Message(render_clip(&clip)),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `json`: compile the session and print events as JSON
pub fn cmd_json(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    match ctx.compile().and_then(|clip| clip_json(&clip)) {
        Ok(json) => CommandResult::Message(json),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Handle `chord <name>`: show what a note token resolves to
pub fn cmd_chord(args: &str, _ctx: &mut CommandContext) -> CommandResult {
    if args.is_empty() {
        let qualities: Vec<&str> = StandardChords::quality_names().collect();
        return CommandResult::Message(format!("Chord qualities: {}", qualities.join(" ")));
    }
    match resolve_token(args, &StandardChords) {
        Ok(resolved) if resolved.is_chord() => {
            CommandResult::Message(format!("{}: {}", args.cyan(), resolved))
        }
        Ok(resolved) => CommandResult::Message(format!(
            "{}: {} (a single pitch; pitch spellings win over chord names)",
            args.cyan(),
            resolved
        )),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

/// Try a bare line as a pattern against the current session notes
pub fn try_bare_pattern(line: &str, ctx: &mut CommandContext) -> CommandResult {
    if check_characters(line).is_err() {
        return CommandResult::Error(format!(
            "Unknown command or pattern '{}'. Type 'help' for commands.",
            line
        ));
    }
    cmd_clip(line, ctx)
}

pub(crate) fn describe_notes(notes: &NoteList) -> String {
    notes
        .items()
        .iter()
        .map(|item| match item {
            NoteItem::Token(t) => t.clone(),
            NoteItem::Pitches(p) => format!("[{}]", p.join(" ")),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notes_rejects_bad_token_and_keeps_old() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_notes("c4 h9", &mut ctx), CommandResult::Error(_)));
        assert_eq!(ctx.params.notes, NoteList::default());
    }

    #[test]
    fn test_pattern_rejects_bad_syntax() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_pattern("x[x", &mut ctx), CommandResult::Error(_)));
        assert_eq!(ctx.params.pattern, "x");
    }

    #[test]
    fn test_subdiv_is_strict_in_repl() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_subdiv("3n", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_subdiv("8n", &mut ctx), CommandResult::Message(_)));
        assert_eq!(ctx.params.subdivision(), Subdivision::Eighth);
    }

    #[test]
    fn test_accent() {
        let mut ctx = CommandContext::new();
        assert!(matches!(cmd_accent("x-- 110 40", &mut ctx), CommandResult::Success));
        assert_eq!(ctx.params.accent_map, "x--");
        assert_eq!((ctx.params.accent_hi, ctx.params.accent_lo), (110, 40));
        assert!(matches!(cmd_accent("xo", &mut ctx), CommandResult::Error(_)));
        assert!(matches!(cmd_accent("off", &mut ctx), CommandResult::Success));
        assert_eq!(ctx.params.accent_map, "");
        assert!(matches!(cmd_accent("x 300", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_chord_lookup() {
        let mut ctx = CommandContext::new();
        match cmd_chord("Am7", &mut ctx) {
            CommandResult::Message(m) => assert!(m.contains("[A4, C5, E5, G5]")),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(cmd_chord("Zz", &mut ctx), CommandResult::Error(_)));
    }

    #[test]
    fn test_bare_pattern() {
        let mut ctx = CommandContext::new();
        assert!(matches!(try_bare_pattern("x-x", &mut ctx), CommandResult::Message(_)));
        assert!(matches!(try_bare_pattern("hello", &mut ctx), CommandResult::Error(_)));
    }
}
