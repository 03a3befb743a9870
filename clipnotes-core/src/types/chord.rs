//! Chord-name dictionary
//!
//! Names are a root (`C`, `f#`, `Bb`, ...), a quality from [`QUALITIES`] and an
//! optional `-<octave>` suffix: `CM`, `Dm7`, `F#dim`, `Bbmaj7-3`. The root is
//! placed in octave 4 unless a suffix says otherwise.

use super::pitch::{Accidental, Pitch};

/// Looks up a chord name and returns its pitches, or `None` when unknown.
///
/// The resolver only needs this one call, so alternative dictionaries can be
/// plugged in without touching the compiler.
pub trait ChordLookup {
    fn lookup(&self, name: &str) -> Option<Vec<Pitch>>;
}

/// Chord qualities and their intervals in semitones above the root.
pub const QUALITIES: &[(&str, &[i16])] = &[
    ("M", &[0, 4, 7]),
    ("maj", &[0, 4, 7]),
    ("m", &[0, 3, 7]),
    ("min", &[0, 3, 7]),
    ("dim", &[0, 3, 6]),
    ("aug", &[0, 4, 8]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("5", &[0, 7]),
    ("6", &[0, 4, 7, 9]),
    ("m6", &[0, 3, 7, 9]),
    ("7", &[0, 4, 7, 10]),
    ("M7", &[0, 4, 7, 11]),
    ("maj7", &[0, 4, 7, 11]),
    ("m7", &[0, 3, 7, 10]),
    ("dim7", &[0, 3, 6, 9]),
    ("m7b5", &[0, 3, 6, 10]),
    ("9", &[0, 4, 7, 10, 14]),
    ("M9", &[0, 4, 7, 11, 14]),
    ("maj9", &[0, 4, 7, 11, 14]),
    ("m9", &[0, 3, 7, 10, 14]),
    ("add9", &[0, 4, 7, 14]),
    ("11", &[0, 4, 7, 10, 14, 17]),
    ("13", &[0, 4, 7, 10, 14, 21]),
];

const DEFAULT_OCTAVE: u8 = 4;

/// The built-in dictionary backed by [`QUALITIES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChords;

impl StandardChords {
    /// Quality names this dictionary knows, in table order
    pub fn quality_names() -> impl Iterator<Item = &'static str> {
        QUALITIES.iter().map(|(name, _)| *name)
    }

    fn intervals(quality: &str) -> Option<&'static [i16]> {
        QUALITIES
            .iter()
            .find(|(name, _)| *name == quality)
            .map(|(_, intervals)| *intervals)
    }
}

impl ChordLookup for StandardChords {
    fn lookup(&self, name: &str) -> Option<Vec<Pitch>> {
        let parsed = ChordName::parse(name)?;
        let intervals = Self::intervals(parsed.quality)?;
        let root = Pitch::new(parsed.letter, parsed.accidental, parsed.octave).ok()?;

        let prefer_flats = match parsed.accidental {
            Accidental::Flat => true,
            Accidental::Natural => root.letter() == 'F',
            Accidental::Sharp => false,
        };

        let mut pitches = Vec::with_capacity(intervals.len());
        for &interval in intervals {
            // The root keeps its written spelling; chord tones are respelled
            let pitch = if interval == 0 {
                root
            } else {
                root.transpose(interval, prefer_flats).ok()?
            };
            pitches.push(pitch);
        }
        Some(pitches)
    }
}

#[derive(Debug, PartialEq)]
struct ChordName<'a> {
    letter: char,
    accidental: Accidental,
    quality: &'a str,
    octave: u8,
}

impl<'a> ChordName<'a> {
    fn parse(name: &'a str) -> Option<Self> {
        let letter = name.chars().next()?.to_ascii_uppercase();
        if !('A'..='G').contains(&letter) {
            return None;
        }

        let mut rest = &name[1..];
        let accidental = if let Some(r) = rest.strip_prefix('#') {
            rest = r;
            Accidental::Sharp
        } else if let Some(r) = rest.strip_prefix('b') {
            rest = r;
            Accidental::Flat
        } else {
            Accidental::Natural
        };

        let (quality, octave) = match rest.rsplit_once('-') {
            Some((quality, octave)) => {
                if octave.len() != 1 {
                    return None;
                }
                let digit = octave.chars().next()?.to_digit(10)?;
                (quality, digit as u8)
            }
            None => (rest, DEFAULT_OCTAVE),
        };

        if quality.is_empty() {
            return None;
        }

        Some(ChordName {
            letter,
            accidental,
            quality,
            octave,
        })
    }
}
