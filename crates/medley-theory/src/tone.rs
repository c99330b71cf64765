//! Letter names, accidentals and the enharmonic tone table.
//!
//! Every pitch class has exactly two registered spellings: slot 0 is the
//! sharp/natural spelling and slot 1 the flat (or alternate natural) spelling.
//! A [`Tone`] is one of those 24 entries; arbitrary letter/accidental
//! combinations outside the table cannot be built.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::RangeError;
use crate::frequency;
use crate::validation;

/// Diatonic letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl LetterName {
    /// All letters in scale order starting from C.
    pub const ALL: [LetterName; 7] = [
        LetterName::C,
        LetterName::D,
        LetterName::E,
        LetterName::F,
        LetterName::G,
        LetterName::A,
        LetterName::B,
    ];

    /// Letter for an ASCII character, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(LetterName::C),
            'D' => Some(LetterName::D),
            'E' => Some(LetterName::E),
            'F' => Some(LetterName::F),
            'G' => Some(LetterName::G),
            'A' => Some(LetterName::A),
            'B' => Some(LetterName::B),
            _ => None,
        }
    }

    /// Uppercase character for this letter.
    pub fn as_char(self) -> char {
        match self {
            LetterName::C => 'C',
            LetterName::D => 'D',
            LetterName::E => 'E',
            LetterName::F => 'F',
            LetterName::G => 'G',
            LetterName::A => 'A',
            LetterName::B => 'B',
        }
    }
}

impl fmt::Display for LetterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Single accidental applied to a letter name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accidental {
    Flat,
    Natural,
    Sharp,
}

impl Accidental {
    /// Human-readable name ("Flat", "Natural", "Sharp").
    pub fn name(self) -> &'static str {
        match self {
            Accidental::Flat => "Flat",
            Accidental::Natural => "Natural",
            Accidental::Sharp => "Sharp",
        }
    }

    /// Engraved symbol (♭, ♮, ♯).
    pub fn symbol(self) -> char {
        match self {
            Accidental::Flat => '\u{266d}',
            Accidental::Natural => '\u{266e}',
            Accidental::Sharp => '\u{266f}',
        }
    }

    /// Character used in note notation text; naturals are written with none.
    pub fn notation(self) -> Option<char> {
        match self {
            Accidental::Flat => Some('b'),
            Accidental::Natural => None,
            Accidental::Sharp => Some('#'),
        }
    }

    /// Accidental for a notation character (`b` or `#`).
    pub fn from_notation(c: char) -> Option<Self> {
        match c {
            'b' => Some(Accidental::Flat),
            '#' => Some(Accidental::Sharp),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A letter name paired with an accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spelling {
    pub letter: LetterName,
    pub accidental: Accidental,
}

impl Spelling {
    const fn new(letter: LetterName, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }
}

/// Spellings per pitch class: `[sharp/natural, flat/alternate]`.
pub const TONE_TABLE: [[Spelling; 2]; 12] = {
    use Accidental::{Flat, Natural, Sharp};
    use LetterName::{A, B, C, D, E, F, G};

    [
        [Spelling::new(C, Natural), Spelling::new(B, Sharp)],
        [Spelling::new(C, Sharp), Spelling::new(D, Flat)],
        [Spelling::new(D, Natural), Spelling::new(D, Natural)],
        [Spelling::new(D, Sharp), Spelling::new(E, Flat)],
        [Spelling::new(E, Natural), Spelling::new(F, Flat)],
        [Spelling::new(F, Natural), Spelling::new(E, Sharp)],
        [Spelling::new(F, Sharp), Spelling::new(G, Flat)],
        [Spelling::new(G, Natural), Spelling::new(G, Natural)],
        [Spelling::new(G, Sharp), Spelling::new(A, Flat)],
        [Spelling::new(A, Natural), Spelling::new(A, Natural)],
        [Spelling::new(A, Sharp), Spelling::new(B, Flat)],
        [Spelling::new(B, Natural), Spelling::new(C, Flat)],
    ]
};

/// Finds the table position `(pitch_class, slot)` of a spelling.
fn locate(letter: LetterName, accidental: Accidental) -> (u8, u8) {
    let wanted = Spelling::new(letter, accidental);
    for (pitch_class, spellings) in TONE_TABLE.iter().enumerate() {
        for (slot, spelling) in spellings.iter().enumerate() {
            if *spelling == wanted {
                return (pitch_class as u8, slot as u8);
            }
        }
    }
    // Each letter has a flat, natural and sharp entry somewhere in the table.
    unreachable!("{letter}{accidental} is missing from the tone table")
}

/// Pitch class (0-11) of a letter/accidental pair.
pub fn pitch_class_of(letter: LetterName, accidental: Accidental) -> u8 {
    locate(letter, accidental).0
}

/// A pitch class together with one of its two registered spellings.
///
/// Equality and hashing consider the pitch class only, so `C♯ == D♭`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "ToneRecord", try_from = "ToneRecord")]
pub struct Tone {
    letter: LetterName,
    accidental: Accidental,
    pitch_class: u8,
    slot: u8,
}

impl Tone {
    /// Tone with the given spelling.
    pub fn new(letter: LetterName, accidental: Accidental) -> Self {
        let (pitch_class, slot) = locate(letter, accidental);
        Self::from_table(pitch_class, slot)
    }

    /// Sharp/natural spelling of the pitch class of `midi_number`.
    pub fn from_midi_number(midi_number: i32) -> Result<Self, RangeError> {
        validation::midi_number(midi_number)?;
        Ok(Self::from_table((midi_number % 12) as u8, 0))
    }

    /// Sharp/natural spelling of the nearest pitch class to `frequency`.
    pub fn from_frequency(frequency: f64) -> Result<Self, RangeError> {
        let midi_number = frequency::midi_number_from_frequency(frequency)?;
        Self::from_midi_number(midi_number as i32)
    }

    fn from_table(pitch_class: u8, slot: u8) -> Self {
        let spelling = TONE_TABLE[pitch_class as usize][slot as usize];
        Self {
            letter: spelling.letter,
            accidental: spelling.accidental,
            pitch_class,
            slot,
        }
    }

    pub fn letter(&self) -> LetterName {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    pub fn spelling(&self) -> Spelling {
        Spelling::new(self.letter, self.accidental)
    }

    /// The same pitch class under its other registered spelling.
    ///
    /// Applying this twice returns the original spelling. Pitch classes with a
    /// single natural spelling (D, G, A) come back unchanged.
    #[must_use]
    pub fn switched(self) -> Self {
        Self::from_table(self.pitch_class, 1 - self.slot)
    }

    /// In-place form of [`Tone::switched`].
    pub fn switch_accidental(&mut self) {
        *self = self.switched();
    }

    /// ASCII notation for this tone (e.g. `C#`, `Bb`, `E`).
    pub fn notation(&self) -> String {
        let mut out = String::with_capacity(2);
        out.push(self.letter.as_char());
        if let Some(c) = self.accidental.notation() {
            out.push(c);
        }
        out
    }
}

impl PartialEq for Tone {
    fn eq(&self, other: &Self) -> bool {
        self.pitch_class == other.pitch_class
    }
}

impl Eq for Tone {}

impl Hash for Tone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pitch_class.hash(state);
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if self.accidental != Accidental::Natural {
            write!(f, "{}", self.accidental)?;
        }
        Ok(())
    }
}

/// Serialized form of a [`Tone`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ToneRecord {
    letter: LetterName,
    accidental: Accidental,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pitch_class: Option<u8>,
}

impl From<Tone> for ToneRecord {
    fn from(tone: Tone) -> Self {
        Self {
            letter: tone.letter,
            accidental: tone.accidental,
            pitch_class: Some(tone.pitch_class),
        }
    }
}

impl TryFrom<ToneRecord> for Tone {
    type Error = String;

    fn try_from(record: ToneRecord) -> Result<Self, Self::Error> {
        let tone = Tone::new(record.letter, record.accidental);
        match record.pitch_class {
            Some(pc) if pc != tone.pitch_class => Err(format!(
                "pitch_class {} does not match {}, which is pitch class {}",
                pc,
                tone.notation(),
                tone.pitch_class
            )),
            _ => Ok(tone),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use Accidental::{Flat, Natural, Sharp};
    use LetterName::{A, B, C, D, E, F, G};

    #[test]
    fn test_table_slots() {
        for (pc, [primary, alternate]) in TONE_TABLE.iter().enumerate() {
            assert_ne!(primary.accidental, Flat, "slot 0 of {} is flat", pc);
            if primary != alternate {
                assert!(
                    alternate.accidental == Flat || primary.accidental == Natural,
                    "unexpected alternate for {}",
                    pc
                );
            }
        }
    }

    #[test]
    fn test_every_spelling_is_registered() {
        for letter in LetterName::ALL {
            for accidental in [Flat, Natural, Sharp] {
                let tone = Tone::new(letter, accidental);
                assert_eq!(tone.letter(), letter);
                assert_eq!(tone.accidental(), accidental);
            }
        }
    }

    #[test]
    fn test_pitch_class_of() {
        assert_eq!(pitch_class_of(C, Natural), 0);
        assert_eq!(pitch_class_of(B, Sharp), 0);
        assert_eq!(pitch_class_of(D, Flat), 1);
        assert_eq!(pitch_class_of(F, Flat), 4);
        assert_eq!(pitch_class_of(E, Sharp), 5);
        assert_eq!(pitch_class_of(C, Flat), 11);
    }

    #[test]
    fn test_from_midi_number_picks_sharp_spelling() {
        let tone = Tone::from_midi_number(61).unwrap();
        assert_eq!(tone.spelling(), Spelling::new(C, Sharp));
        assert_eq!(tone.pitch_class(), 1);

        let tone = Tone::from_midi_number(70).unwrap();
        assert_eq!(tone.spelling(), Spelling::new(A, Sharp));

        assert!(Tone::from_midi_number(128).is_err());
        assert!(Tone::from_midi_number(-1).is_err());
    }

    #[test]
    fn test_from_frequency() {
        let tone = Tone::from_frequency(440.0).unwrap();
        assert_eq!(tone.spelling(), Spelling::new(A, Natural));
        assert!(Tone::from_frequency(5.0).is_err());
    }

    #[test]
    fn test_switch_accidental() {
        let mut tone = Tone::new(C, Sharp);
        tone.switch_accidental();
        assert_eq!(tone.spelling(), Spelling::new(D, Flat));
        assert_eq!(tone.pitch_class(), 1);
        tone.switch_accidental();
        assert_eq!(tone.spelling(), Spelling::new(C, Sharp));
    }

    #[test]
    fn test_switch_from_alternate_slot() {
        // B♯ lives in slot 1, so the first switch goes back to C♮.
        let tone = Tone::new(B, Sharp).switched();
        assert_eq!(tone.spelling(), Spelling::new(C, Natural));

        let tone = Tone::new(C, Flat).switched();
        assert_eq!(tone.spelling(), Spelling::new(B, Natural));
    }

    #[test]
    fn test_switch_single_spelling_class() {
        let tone = Tone::new(G, Natural).switched();
        assert_eq!(tone.spelling(), Spelling::new(G, Natural));
        assert_eq!(tone.switched().spelling(), Spelling::new(G, Natural));
    }

    #[test]
    fn test_equality_by_pitch_class() {
        assert_eq!(Tone::new(C, Sharp), Tone::new(D, Flat));
        assert_eq!(Tone::new(B, Sharp), Tone::new(C, Natural));
        assert_ne!(Tone::new(C, Natural), Tone::new(C, Sharp));

        let set: HashSet<Tone> = [Tone::new(F, Sharp), Tone::new(G, Flat)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display_and_notation() {
        assert_eq!(Tone::new(C, Natural).to_string(), "C");
        assert_eq!(Tone::new(C, Sharp).to_string(), "C\u{266f}");
        assert_eq!(Tone::new(B, Flat).to_string(), "B\u{266d}");
        assert_eq!(Tone::new(C, Sharp).notation(), "C#");
        assert_eq!(Tone::new(B, Flat).notation(), "Bb");
        assert_eq!(Tone::new(E, Natural).notation(), "E");
    }

    #[test]
    fn test_accidental_metadata() {
        assert_eq!(Flat.name(), "Flat");
        assert_eq!(Natural.symbol(), '\u{266e}');
        assert_eq!(Sharp.notation(), Some('#'));
        assert_eq!(Natural.notation(), None);
        assert_eq!(Accidental::from_notation('b'), Some(Flat));
        assert_eq!(Accidental::from_notation('x'), None);
    }

    #[test]
    fn test_letter_from_char() {
        assert_eq!(LetterName::from_char('c'), Some(C));
        assert_eq!(LetterName::from_char('G'), Some(G));
        assert_eq!(LetterName::from_char('H'), None);
    }
}
