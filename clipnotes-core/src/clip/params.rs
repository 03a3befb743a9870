//! Clip configuration
//!
//! One immutable [`ClipParams`] value is built per compile call. The accent,
//! shuffle, sizzle and arpeggiate fields are carried for forward
//! compatibility; of those only the accent map is applied, and it only ever
//! changes velocities.

use crate::error::{ClipError, Result};
use crate::notes::NoteList;
use crate::types::time::{ticks, Ticks, TICKS_PER_BAR};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_VELOCITY: u8 = 127;
pub const DEFAULT_ACCENT_HI: u8 = 127;
pub const DEFAULT_ACCENT_LO: u8 = 70;
pub const MAX_VELOCITY: u8 = 127;

/// Base slot length, named the way Tone.js names note values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subdivision {
    /// `1n`
    Whole,
    /// `2n`
    Half,
    /// `4n`
    #[default]
    Quarter,
    /// `8n`
    Eighth,
    /// `16n`
    Sixteenth,
}

impl Subdivision {
    pub const ALL: [Subdivision; 5] = [
        Subdivision::Whole,
        Subdivision::Half,
        Subdivision::Quarter,
        Subdivision::Eighth,
        Subdivision::Sixteenth,
    ];

    /// Look up a subdivision by name, falling back to a quarter note.
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(subdiv) => subdiv,
            Err(_) => {
                log::warn!(
                    "unknown subdivision '{}', falling back to {}",
                    name,
                    Subdivision::default()
                );
                Subdivision::default()
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Subdivision::Whole => "1n",
            Subdivision::Half => "2n",
            Subdivision::Quarter => "4n",
            Subdivision::Eighth => "8n",
            Subdivision::Sixteenth => "16n",
        }
    }

    /// Ticks per slot, from a 512-tick bar
    pub fn ticks(self) -> Ticks {
        let per_bar = match self {
            Subdivision::Whole => 1,
            Subdivision::Half => 2,
            Subdivision::Quarter => 4,
            Subdivision::Eighth => 8,
            Subdivision::Sixteenth => 16,
        };
        ticks(TICKS_PER_BAR / per_bar)
    }
}

impl FromStr for Subdivision {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self> {
        Subdivision::ALL
            .into_iter()
            .find(|subdiv| subdiv.name() == s)
            .ok_or_else(|| ClipError::config(format!("unknown subdivision '{}'", s)))
    }
}

impl fmt::Display for Subdivision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Everything a compile call needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ClipParams {
    /// Pitches, pitch arrays or chord names, cycled over the `x` slots
    pub notes: NoteList,
    pub pattern: String,
    /// Subdivision name; unknown names compile as `4n`
    pub subdiv: String,
    /// Velocity of every note when no accent map is set
    pub velocity: u8,
    /// `x`/`-` string cycled over note events: `x` -> accent_hi, `-` -> accent_lo
    pub accent_map: String,
    pub accent_hi: u8,
    #[cfg_attr(feature = "serde", serde(alias = "accentLow"))]
    pub accent_lo: u8,
    pub shuffle: bool,
    pub sizzle: bool,
    #[cfg_attr(feature = "serde", serde(alias = "arpegiate"))]
    pub arpeggiate: bool,
}

impl Default for ClipParams {
    fn default() -> Self {
        ClipParams {
            notes: NoteList::default(),
            pattern: "x".to_string(),
            subdiv: Subdivision::default().name().to_string(),
            velocity: DEFAULT_VELOCITY,
            accent_map: String::new(),
            accent_hi: DEFAULT_ACCENT_HI,
            accent_lo: DEFAULT_ACCENT_LO,
            shuffle: false,
            sizzle: false,
            arpeggiate: false,
        }
    }
}

impl ClipParams {
    pub fn new(notes: impl Into<NoteList>, pattern: impl Into<String>) -> Self {
        ClipParams {
            notes: notes.into(),
            pattern: pattern.into(),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<NoteList>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_subdiv(mut self, subdiv: impl Into<String>) -> Self {
        self.subdiv = subdiv.into();
        self
    }

    pub fn with_velocity(mut self, velocity: u8) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_accent(mut self, map: impl Into<String>, hi: u8, lo: u8) -> Self {
        self.accent_map = map.into();
        self.accent_hi = hi;
        self.accent_lo = lo;
        self
    }

    /// The subdivision this clip compiles with, after fallback
    pub fn subdivision(&self) -> Subdivision {
        Subdivision::from_name(&self.subdiv)
    }

    /// Check the fields the type system cannot: velocity ranges and the
    /// accent map alphabet. Notes and pattern are checked by their own stages.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("velocity", self.velocity),
            ("accentHi", self.accent_hi),
            ("accentLo", self.accent_lo),
        ] {
            if value > MAX_VELOCITY {
                return Err(ClipError::config(format!(
                    "{} must be 0-{}, got {}",
                    name, MAX_VELOCITY, value
                )));
            }
        }

        if let Some(c) = self.accent_map.chars().find(|c| !matches!(c, 'x' | '-')) {
            return Err(ClipError::config(format!(
                "accent map can only comprise x and -, found '{}'",
                c
            )));
        }

        for (name, set) in [
            ("shuffle", self.shuffle),
            ("sizzle", self.sizzle),
            ("arpeggiate", self.arpeggiate),
        ] {
            if set {
                log::warn!("'{}' is accepted but not applied by the clip compiler", name);
            }
        }

        Ok(())
    }

    /// Parse params from JSON. `notes` may be a string or an array whose
    /// items are strings or arrays of strings.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ClipError::config(e.to_string()))
    }
}
