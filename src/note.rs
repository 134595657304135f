//! # Pitch Primitives
//!
//! Pitch classes, notes, and equal-temperament arithmetic used by every
//! module above this one.
//!
//! ## Spelling Rules
//! - Twelve canonical pitch classes, spelled with sharps (`C`, `C#`, `D`, ...)
//! - No double accidentals; transposition always lands back on the canonical set
//! - Flat names are accepted on input and normalized: `"Db"` parses to [`PitchClass::Cs`]
//!
//! ## Frequency
//! Equal temperament anchored at A4 = 440 Hz: `f = 440 * 2^((midi - 69) / 12)`,
//! with MIDI numbers on the C4 = 60 convention.
//!
//! ## Related Modules
//! - `tuning` - Canonical C-harmonica layouts built from these types
//! - `layout` - Transposes notes to the harmonica key

use std::fmt;

use serde::Serialize;

/// Reference pitch: A4 in hertz.
pub const A4_HZ: f64 = 440.0;

/// MIDI number of the reference pitch A4.
const A4_MIDI: i32 = 69;

/// The twelve chromatic pitch classes, canonically spelled with sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PitchClass {
    /// C
    #[serde(rename = "C")]
    C,
    /// C sharp (accepts `Db` on input)
    #[serde(rename = "C#")]
    Cs,
    /// D
    #[serde(rename = "D")]
    D,
    /// D sharp (accepts `Eb` on input)
    #[serde(rename = "D#")]
    Ds,
    /// E
    #[serde(rename = "E")]
    E,
    /// F
    #[serde(rename = "F")]
    F,
    /// F sharp (accepts `Gb` on input)
    #[serde(rename = "F#")]
    Fs,
    /// G
    #[serde(rename = "G")]
    G,
    /// G sharp (accepts `Ab` on input)
    #[serde(rename = "G#")]
    Gs,
    /// A
    #[serde(rename = "A")]
    A,
    /// A sharp (accepts `Bb` on input)
    #[serde(rename = "A#")]
    As,
    /// B
    #[serde(rename = "B")]
    B,
}

impl PitchClass {
    /// All twelve pitch classes in ascending chroma order.
    pub const ALL: [PitchClass; 12] = [
        PitchClass::C,
        PitchClass::Cs,
        PitchClass::D,
        PitchClass::Ds,
        PitchClass::E,
        PitchClass::F,
        PitchClass::Fs,
        PitchClass::G,
        PitchClass::Gs,
        PitchClass::A,
        PitchClass::As,
        PitchClass::B,
    ];

    /// Chroma: semitones above C, 0-11.
    pub fn chroma(self) -> u8 {
        match self {
            PitchClass::C => 0,
            PitchClass::Cs => 1,
            PitchClass::D => 2,
            PitchClass::Ds => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::Fs => 6,
            PitchClass::G => 7,
            PitchClass::Gs => 8,
            PitchClass::A => 9,
            PitchClass::As => 10,
            PitchClass::B => 11,
        }
    }

    /// Canonical pitch class for a chroma; any integer is reduced mod 12.
    pub fn from_chroma(chroma: i32) -> PitchClass {
        PitchClass::ALL[chroma.rem_euclid(12) as usize]
    }

    /// Pitch class `semitones` away, reduced to the canonical spelling.
    pub fn transposed(self, semitones: i32) -> PitchClass {
        PitchClass::from_chroma(self.chroma() as i32 + semitones)
    }

    /// Canonical display name (`"C"`, `"C#"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Parse a note name like `"C"`, `"F#"`, `"Bb"`.
    ///
    /// Sharp names also accept an `s` suffix (`"Fs"`) and flat names an `f`
    /// suffix (`"Bf"`). Flat spellings normalize to the sharp-preferring
    /// canonical set, so `"Db"` and `"C#"` parse to the same value.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        let pc = match name.trim() {
            "C" => PitchClass::C,
            "C#" | "Cs" | "Db" | "Df" => PitchClass::Cs,
            "D" => PitchClass::D,
            "D#" | "Ds" | "Eb" | "Ef" => PitchClass::Ds,
            "E" => PitchClass::E,
            "F" => PitchClass::F,
            "F#" | "Fs" | "Gb" | "Gf" => PitchClass::Fs,
            "G" => PitchClass::G,
            "G#" | "Gs" | "Ab" | "Af" => PitchClass::Gs,
            "A" => PitchClass::A,
            "A#" | "As" | "Bb" | "Bf" => PitchClass::As,
            "B" => PitchClass::B,
            _ => return None,
        };
        Some(pc)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete pitch: pitch class, octave, and equal-temperament frequency.
///
/// The frequency is computed on construction and carried on the value so
/// serialized layouts hand the host everything it needs for playback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Canonical pitch class.
    pub pitch_class: PitchClass,
    /// Scientific octave number (C4 is middle C).
    pub octave: i8,
    /// Equal-temperament frequency in hertz.
    pub frequency: f64,
}

impl Note {
    /// Construct a note from pitch class and octave.
    pub fn new(pitch_class: PitchClass, octave: i8) -> Note {
        let midi = (octave as i32 + 1) * 12 + pitch_class.chroma() as i32;
        Note {
            pitch_class,
            octave,
            frequency: frequency_of(midi),
        }
    }

    /// MIDI note number (C4 = 60).
    pub fn midi(&self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.pitch_class.chroma() as i32
    }

    /// Note for a MIDI number, spelled canonically.
    pub fn from_midi(midi: i32) -> Note {
        let pitch_class = PitchClass::from_chroma(midi.rem_euclid(12));
        let octave = (midi.div_euclid(12) - 1) as i8;
        Note::new(pitch_class, octave)
    }

    /// Note `semitones` away.
    pub fn transposed(&self, semitones: i32) -> Note {
        Note::from_midi(self.midi() + semitones)
    }

    /// Chroma of the pitch class, 0-11.
    pub fn chroma(&self) -> u8 {
        self.pitch_class.chroma()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

/// Equal-temperament frequency for a MIDI number.
fn frequency_of(midi: i32) -> f64 {
    A4_HZ * 2f64.powf((midi - A4_MIDI) as f64 / 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chroma_round_trip() {
        for pc in PitchClass::ALL {
            assert_eq!(PitchClass::from_chroma(pc.chroma() as i32), pc);
        }
    }

    #[test]
    fn test_flat_names_normalize_to_sharps() {
        assert_eq!(PitchClass::from_name("Db"), Some(PitchClass::Cs));
        assert_eq!(PitchClass::from_name("Eb"), Some(PitchClass::Ds));
        assert_eq!(PitchClass::from_name("Gb"), Some(PitchClass::Fs));
        assert_eq!(PitchClass::from_name("Ab"), Some(PitchClass::Gs));
        assert_eq!(PitchClass::from_name("Bb"), Some(PitchClass::As));
        assert_eq!(PitchClass::from_name("Bf"), Some(PitchClass::As));
        assert_eq!(PitchClass::from_name("F#"), PitchClass::from_name("Gb"));
        assert_eq!(PitchClass::from_name("H"), None);
    }

    #[test]
    fn test_transposed_wraps_around_the_octave() {
        assert_eq!(PitchClass::B.transposed(1), PitchClass::C);
        assert_eq!(PitchClass::C.transposed(-1), PitchClass::B);
        assert_eq!(PitchClass::G.transposed(7), PitchClass::D);
    }

    #[test]
    fn test_midi_convention() {
        assert_eq!(Note::new(PitchClass::C, 4).midi(), 60);
        assert_eq!(Note::new(PitchClass::A, 4).midi(), 69);
        assert_eq!(Note::new(PitchClass::G, 3).midi(), 55);
        assert_eq!(Note::from_midi(60), Note::new(PitchClass::C, 4));
    }

    #[test]
    fn test_frequency_anchors() {
        assert_eq!(Note::new(PitchClass::A, 4).frequency, 440.0);
        let c4 = Note::new(PitchClass::C, 4).frequency;
        assert!((c4 - 261.63).abs() < 0.01, "C4 was {c4}");
    }

    #[test]
    fn test_note_transposition_carries_octave() {
        let b4 = Note::new(PitchClass::B, 4);
        let c5 = b4.transposed(1);
        assert_eq!(c5.pitch_class, PitchClass::C);
        assert_eq!(c5.octave, 5);
        let g3 = Note::new(PitchClass::C, 4).transposed(-5);
        assert_eq!(g3.to_string(), "G3");
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(PitchClass::Fs, 5).to_string(), "F#5");
        assert_eq!(PitchClass::As.to_string(), "A#");
    }
}
