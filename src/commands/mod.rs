//! Command registry for REPL commands
//!
//! Provides a clean, extensible pattern for handling REPL commands.

pub mod clip;
pub mod general;

use anyhow::Result;
use clipnotes_core::{Clip, ClipParams};

/// Result of executing a command
#[derive(Debug)]
pub enum CommandResult {
    /// Command executed successfully, continue REPL
    Success,
    /// Command executed, show this message
    Message(String),
    /// Exit the REPL
    Exit,
    /// Not a command, try compiling as a pattern
    NotACommand,
    /// Error occurred
    Error(String),
}

/// Session state shared by command handlers
pub struct CommandContext {
    pub params: ClipParams,
}

impl CommandContext {
    pub fn new() -> Self {
        Self {
            params: ClipParams::default(),
        }
    }

    pub fn with_params(params: ClipParams) -> Self {
        Self { params }
    }

    /// Compile the session's current params
    pub fn compile(&self) -> Result<Clip> {
        Ok(Clip::compile(&self.params)?)
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A command handler function
pub type CommandHandler = fn(&str, &mut CommandContext) -> CommandResult;

/// Registry of available commands
pub struct CommandRegistry {
    /// Sorted by prefix length descending for longest-match-first lookup
    commands: Vec<(String, CommandHandler)>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Register a command with its prefix
    pub fn register(&mut self, prefix: &str, handler: CommandHandler) {
        self.commands.push((prefix.to_string(), handler));
        self.commands.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    }

    /// Execute a command, returning NotACommand if no match found
    pub fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        for (prefix, handler) in &self.commands {
            if input == prefix || input.starts_with(&format!("{} ", prefix)) {
                let args = if input.len() > prefix.len() {
                    input[prefix.len()..].trim()
                } else {
                    ""
                };
                return handler(args, ctx);
            }
        }
        CommandResult::NotACommand
    }

    /// Get all registered command prefixes
    pub fn list_commands(&self) -> Vec<&str> {
        self.commands.iter().map(|(p, _)| p.as_str()).collect()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fully populated command registry with all built-in commands
pub fn create_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    // Clip session commands
    registry.register("notes", clip::cmd_notes);
    registry.register("pattern", clip::cmd_pattern);
    registry.register("subdiv", clip::cmd_subdiv);
    registry.register("accent", clip::cmd_accent);
    registry.register("velocity", clip::cmd_velocity);
    registry.register("clip", clip::cmd_clip);
    registry.register("json", clip::cmd_json);
    registry.register("chord", clip::cmd_chord);

    // General commands
    registry.register("show", general::cmd_show);
    registry.register("reset", general::cmd_reset);
    registry.register("help", general::cmd_help);
    registry.register("quit", general::cmd_quit);
    registry.register("exit", general::cmd_quit);

    registry
}
