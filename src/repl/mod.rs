//! REPL (Read-Eval-Print Loop) for building clips interactively

use crate::commands::clip::try_bare_pattern;
use crate::commands::{create_registry, CommandContext, CommandRegistry, CommandResult};
use anyhow::Result;
use clipnotes_core::ClipParams;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Interactive clip session
pub struct Repl {
    editor: DefaultEditor,
    registry: CommandRegistry,
    ctx: CommandContext,
}

/// What the loop should do after a line
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

impl Repl {
    /// Create a new REPL instance starting from `params`
    pub fn new(params: ClipParams) -> Result<Self> {
        Ok(Repl {
            editor: DefaultEditor::new()?,
            registry: create_registry(),
            ctx: CommandContext::with_params(params),
        })
    }

    /// Start the REPL loop
    pub fn run(&mut self) -> Result<()> {
        println!(
            "{} {}",
            "🎵".bright_yellow(),
            "clipnotes pattern compiler".bright_cyan().bold()
        );
        println!(
            "Try: {}, {}, {}",
            "notes c4 e4 CM".cyan(),
            "pattern x[xx]-".cyan(),
            "clip".cyan()
        );
        println!(
            "Type '{}' for more information, '{}' or {} to exit.\n",
            "help".bright_green(),
            "quit".bright_red(),
            "Ctrl+D".bright_red()
        );

        loop {
            let prompt = format!("{} ", "clip>".bright_magenta().bold());
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = self.editor.add_history_entry(line);
                    if handle_line(&self.registry, &mut self.ctx, line) == LineOutcome::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{} 🎵", "Goodbye!".bright_cyan());
                    break;
                }
                Err(err) => {
                    log::error!("readline failed: {}", err);
                    return Err(err.into());
                }
            }
        }
        Ok(())
    }
}

/// Run one line through the command registry, falling back to treating it
/// as a bare pattern.
pub fn handle_line(registry: &CommandRegistry, ctx: &mut CommandContext, line: &str) -> LineOutcome {
    let result = match registry.execute(line, ctx) {
        CommandResult::NotACommand => try_bare_pattern(line, ctx),
        other => other,
    };

    match result {
        CommandResult::Success | CommandResult::NotACommand => {}
        CommandResult::Message(msg) => println!("{}", msg),
        CommandResult::Exit => {
            println!("{} 🎵", "Goodbye!".bright_cyan());
            return LineOutcome::Exit;
        }
        CommandResult::Error(e) => {
            println!("{} {}", "Error:".bright_red().bold(), e.red());
        }
    }
    LineOutcome::Continue
}
