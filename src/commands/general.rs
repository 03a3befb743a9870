//! General REPL commands (help, quit, show, reset)

use crate::commands::clip::describe_notes;
use crate::commands::{CommandContext, CommandResult};
use clipnotes_core::ClipParams;
use colored::*;

/// Handle `help` command
pub fn cmd_help(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    print_help();
    CommandResult::Success
}

/// Handle `quit` or `exit` command
pub fn cmd_quit(_args: &str, _ctx: &mut CommandContext) -> CommandResult {
    CommandResult::Exit
}

/// Handle `show`: print the session's params
pub fn cmd_show(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    let p = &ctx.params;
    let accent = if p.accent_map.is_empty() {
        "off".to_string()
    } else {
        format!("{} (hi {}, lo {})", p.accent_map, p.accent_hi, p.accent_lo)
    };
    CommandResult::Message(format!(
        "{}  {}\n{}  {}\n{}   {}\n{} {}\n{}   {}",
        "notes:".green(),
        describe_notes(&p.notes),
        "pattern:".green(),
        p.pattern,
        "subdiv:".green(),
        p.subdivision(),
        "velocity:".green(),
        p.velocity,
        "accent:".green(),
        accent
    ))
}

/// Handle `reset`: back to the default params
pub fn cmd_reset(_args: &str, ctx: &mut CommandContext) -> CommandResult {
    ctx.params = ClipParams::default();
    CommandResult::Message("Session reset".to_string())
}

/// Print help information
fn print_help() {
    println!("{}", "🎵 clipnotes Help".bold());
    println!("{}", "=================".bold());
    println!();
    println!("{}", "Pattern Notation:".green());
    println!("  {}      - Play the next note", "x".cyan());
    println!("  {}      - Rest", "-".cyan());
    println!("  {}      - Sustain (silent slot a player may hold through)", "_".cyan());
    println!("  {}   - Split one slot into equal parts", "[..]".cyan());
    println!();
    println!("{}", "Session:".green());
    println!("  {}  - Set notes (pitches or chord names)", "notes c4 e4 CM".cyan());
    println!("  {}     - Set the pattern", "pattern x[xx]".cyan());
    println!("  {}          - Slot length: 1n 2n 4n 8n 16n", "subdiv 8n".cyan());
    println!("  {}  - Accent map with hi/lo velocities", "accent x-- 127 70".cyan());
    println!("  {}        - Velocity when no accent is set", "velocity 100".cyan());
    println!("  {}                - Show current settings", "show".cyan());
    println!("  {}               - Back to defaults", "reset".cyan());
    println!();
    println!("{}", "Output:".green());
    println!("  {}                - Compile and list events", "clip".cyan());
    println!("  {}        - Compile with a one-off pattern", "clip x-[xx]".cyan());
    println!("  {}                - Compile and print JSON", "json".cyan());
    println!("  {}          - Show what a note token resolves to", "chord Am7".cyan());
    println!();
    println!("A bare pattern such as {} compiles it against the current notes.", "x[xx]-".cyan());
    println!("Type {} or {} to leave.", "quit".bright_red(), "Ctrl+D".bright_red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset() {
        let mut ctx = CommandContext::with_params(ClipParams::new("d4", "xx"));
        cmd_reset("", &mut ctx);
        assert_eq!(ctx.params, ClipParams::default());
    }

    #[test]
    fn test_show_mentions_pattern() {
        let mut ctx = CommandContext::with_params(ClipParams::new("d4", "x[x-]"));
        match cmd_show("", &mut ctx) {
            CommandResult::Message(m) => assert!(m.contains("x[x-]")),
            other => panic!("unexpected {:?}", other),
        }
    }
}
