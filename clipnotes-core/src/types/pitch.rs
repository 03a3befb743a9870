use crate::error::{ClipError, Result};
use std::fmt;
use std::str::FromStr;

/// A single pitch identifier: letter, optional accidental and one octave digit.
///
/// Spellings are kept as written (`Db4` stays `Db4`, it is not respelled as
/// `C#4`); only the letter is case-normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    letter: char, // always uppercase A-G
    accidental: Accidental,
    octave: u8, // 0-9
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    fn offset(self) -> i16 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// Syntactic pitch check: `[a-gA-G]`, optional `#` or `b`, one octave digit.
///
/// Does not care about register; `C0` and `B9` are both valid.
pub fn is_valid_pitch(token: &str) -> bool {
    token.parse::<Pitch>().is_ok()
}

impl Pitch {
    /// Build a pitch from parts. The letter may be given in either case.
    pub fn new(letter: char, accidental: Accidental, octave: u8) -> Result<Self> {
        let letter = letter.to_ascii_uppercase();
        if natural_pitch_class(letter).is_none() {
            return Err(ClipError::invalid_note(
                letter.to_string(),
                "pitch letter must be A-G",
            ));
        }
        if octave > 9 {
            return Err(ClipError::invalid_note(
                format!("{}{}{}", letter, accidental.symbol(), octave),
                "octave must be a single digit",
            ));
        }
        Ok(Pitch {
            letter,
            accidental,
            octave,
        })
    }

    /// Build the pitch for a MIDI note number, spelled with sharps or flats.
    /// Fails when the result would fall outside octaves 0-9.
    pub fn from_midi(midi: i16, prefer_flats: bool) -> Result<Self> {
        let octave = midi.div_euclid(12) - 1;
        let pitch_class = midi.rem_euclid(12) as u8;
        if !(0..=9).contains(&octave) {
            return Err(ClipError::invalid_note(
                midi.to_string(),
                "pitch is outside octaves 0-9",
            ));
        }
        let (letter, accidental) = spell(pitch_class, prefer_flats);
        Pitch::new(letter, accidental, octave as u8)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// MIDI note number, with C4 = 60. `Cb4` is 59 and `B#3` is 60.
    pub fn midi_note(&self) -> i16 {
        let natural = natural_pitch_class(self.letter).unwrap_or(0) as i16;
        (self.octave as i16 + 1) * 12 + natural + self.accidental.offset()
    }

    /// Transpose by semitones, respelling the result.
    pub fn transpose(&self, semitones: i16, prefer_flats: bool) -> Result<Pitch> {
        Pitch::from_midi(self.midi_note() + semitones, prefer_flats)
    }
}

fn natural_pitch_class(letter: char) -> Option<u8> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

fn spell(pitch_class: u8, prefer_flats: bool) -> (char, Accidental) {
    match (pitch_class, prefer_flats) {
        (0, _) => ('C', Accidental::Natural),
        (1, false) => ('C', Accidental::Sharp),
        (1, true) => ('D', Accidental::Flat),
        (2, _) => ('D', Accidental::Natural),
        (3, false) => ('D', Accidental::Sharp),
        (3, true) => ('E', Accidental::Flat),
        (4, _) => ('E', Accidental::Natural),
        (5, _) => ('F', Accidental::Natural),
        (6, false) => ('F', Accidental::Sharp),
        (6, true) => ('G', Accidental::Flat),
        (7, _) => ('G', Accidental::Natural),
        (8, false) => ('G', Accidental::Sharp),
        (8, true) => ('A', Accidental::Flat),
        (9, _) => ('A', Accidental::Natural),
        (10, false) => ('A', Accidental::Sharp),
        (10, true) => ('B', Accidental::Flat),
        _ => ('B', Accidental::Natural),
    }
}

impl FromStr for Pitch {
    type Err = ClipError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ClipError::invalid_note(s, "not a valid pitch (expected e.g. c4, F#3, Bb2)");
        let mut chars = s.chars().peekable();

        let letter = match chars.next() {
            Some(c) if natural_pitch_class(c.to_ascii_uppercase()).is_some() => c,
            _ => return Err(invalid()),
        };

        // Accidental is case-sensitive: 'B' after a letter is not a flat
        let accidental = match chars.peek() {
            Some('#') => {
                chars.next();
                Accidental::Sharp
            }
            Some('b') => {
                chars.next();
                Accidental::Flat
            }
            _ => Accidental::Natural,
        };

        let octave = match chars.next() {
            Some(c) if c.is_ascii_digit() => c as u8 - b'0',
            _ => return Err(invalid()),
        };

        if chars.next().is_some() {
            return Err(invalid());
        }

        Pitch::new(letter, accidental, octave)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental.symbol(), self.octave)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Pitch {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
