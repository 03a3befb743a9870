//! clipnotes: compile rhythm patterns into note events
//!
//! - `compile`: compile one clip from flags or a JSON params file
//! - `chord`: show what a note token resolves to
//! - `repl`: interactive session (the default with no subcommand)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clipnotes::render::{clip_json, render_clip};
use clipnotes::repl::Repl;
use clipnotes_core::notes::resolve_token;
use clipnotes_core::{Clip, ClipParams, StandardChords};
use std::fs;
use std::path::PathBuf;

/// Compile x/-/_/[ ] rhythm patterns plus notes into timed note events
#[derive(Parser)]
#[command(name = "clipnotes")]
#[command(about = "Compile rhythm patterns and note lists into note events")]
#[command(version)]
struct Cli {
    /// Log more (repeat for trace output); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a single clip and print its events
    Compile {
        /// JSON file with clip params; flags below override its fields
        #[arg(long)]
        params: Option<PathBuf>,

        /// Space-separated pitches or chord names, e.g. "c4 e4 CM"
        #[arg(short, long)]
        notes: Option<String>,

        /// Pattern of x - _ [ ], e.g. "x[xx]-"
        #[arg(short, long)]
        pattern: Option<String>,

        /// Slot length: 1n, 2n, 4n, 8n or 16n
        #[arg(short, long)]
        subdiv: Option<String>,

        /// Velocity for notes when no accent map is set
        #[arg(long)]
        velocity: Option<u8>,

        /// Accent map of x and -, cycled over note events
        #[arg(long)]
        accent: Option<String>,

        #[arg(long)]
        accent_hi: Option<u8>,

        #[arg(long)]
        accent_lo: Option<u8>,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show what a note token or chord name resolves to
    Chord {
        name: String,
    },

    /// Start an interactive session
    Repl,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

#[allow(clippy::too_many_arguments)]
fn build_params(
    params: Option<PathBuf>,
    notes: Option<String>,
    pattern: Option<String>,
    subdiv: Option<String>,
    velocity: Option<u8>,
    accent: Option<String>,
    accent_hi: Option<u8>,
    accent_lo: Option<u8>,
) -> Result<ClipParams> {
    let mut p = match params {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            ClipParams::from_json(&json)
                .with_context(|| format!("Invalid params in {}", path.display()))?
        }
        None => ClipParams::default(),
    };

    if let Some(notes) = notes {
        p = p.with_notes(notes);
    }
    if let Some(pattern) = pattern {
        p = p.with_pattern(pattern);
    }
    if let Some(subdiv) = subdiv {
        p = p.with_subdiv(subdiv);
    }
    if let Some(velocity) = velocity {
        p = p.with_velocity(velocity);
    }
    if let Some(accent) = accent {
        p.accent_map = accent;
    }
    if let Some(hi) = accent_hi {
        p.accent_hi = hi;
    }
    if let Some(lo) = accent_lo {
        p.accent_lo = lo;
    }
    Ok(p)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Compile {
            params,
            notes,
            pattern,
            subdiv,
            velocity,
            accent,
            accent_hi,
            accent_lo,
            json,
        } => {
            let params = build_params(
                params, notes, pattern, subdiv, velocity, accent, accent_hi, accent_lo,
            )?;
            let clip = Clip::compile(&params).context("Failed to compile clip")?;
            if json {
                println!("{}", clip_json(&clip)?);
            } else {
                println!("{}", render_clip(&clip));
            }
        }
        Commands::Chord { name } => {
            let resolved = resolve_token(&name, &StandardChords)?;
            println!("{}: {}", name, resolved);
        }
        Commands::Repl => {
            let params = ClipParams::default();
            Repl::new(params)?.run()?;
        }
    }

    Ok(())
}
