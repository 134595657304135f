//! Chord names, harmonica positions, and Roman-numeral functions.

use crate::chords::ChordQuality;
use crate::note::PitchClass;

/// The twelve keys in circle-of-fourths order (as chromas), the conventional
/// axis for harmonica position numbering.
const CIRCLE_OF_FOURTHS: [u8; 12] = [0, 5, 10, 3, 8, 1, 6, 11, 4, 9, 2, 7];

/// Scale-degree numerals by semitone distance from the key; chromatic
/// degrees take a flat prefix.
const DEGREE_NUMERALS: [&str; 12] = [
    "I", "bII", "II", "bIII", "III", "IV", "bV", "V", "bVI", "VI", "bVII", "VII",
];

fn circle_index(pc: PitchClass) -> i32 {
    let chroma = pc.chroma();
    CIRCLE_OF_FOURTHS
        .iter()
        .position(|&c| c == chroma)
        .expect("every chroma appears on the circle") as i32
}

/// Chord symbol: root plus quality suffix (`"C"`, `"Am"`, `"G7"`, `"Bdim"`).
pub fn short_name(root: PitchClass, quality: ChordQuality) -> String {
    format!("{}{}", root.as_str(), quality.suffix())
}

/// Spelled-out chord name (`"G dominant seventh"`).
pub fn long_name(root: PitchClass, quality: ChordQuality) -> String {
    format!("{} {}", root.as_str(), quality.word())
}

/// Harmonica position of a chord root relative to the harp key, 1-12.
///
/// Counts backwards along the circle of fourths from the harp key
/// (equivalently, up in fifths): position 1 is straight harp, position 2 is
/// cross harp on the key's dominant, position 3 is two fifths up.
pub fn position(key: PitchClass, root: PitchClass) -> u8 {
    let steps = circle_index(key) - circle_index(root);
    (steps.rem_euclid(12) + 1) as u8
}

/// Roman-numeral function of a chord in the harp key.
///
/// The degree comes from the root's distance above the key; the case and
/// suffix come from the voicing's own classified quality (`"V7"` for the
/// dominant seventh, `"vii°"` for the diminished seventh degree).
pub fn roman_numeral(key: PitchClass, root: PitchClass, quality: ChordQuality) -> String {
    let degree = (root.chroma() as i32 - key.chroma() as i32).rem_euclid(12) as usize;
    let base = DEGREE_NUMERALS[degree];
    match quality {
        ChordQuality::Major => base.to_string(),
        ChordQuality::Dominant7 => format!("{base}7"),
        ChordQuality::Minor => base.to_lowercase(),
        ChordQuality::Diminished => format!("{}°", base.to_lowercase()),
    }
}
