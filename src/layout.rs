//! # Harmonica Layout Construction
//!
//! Builds the full ten-hole note layout for any (key, tuning) pair.
//!
//! ## Pipeline
//! 1. Look up the tuning's canonical C-harmonica reed rows
//! 2. Transpose every reed by the key's chromatic offset plus a fixed
//!    register shift (keys C..F# start at octave 4, G..B at octave 3,
//!    matching how the instruments are actually pitched)
//! 3. Derive each hole's bend ladder and overblow/overdraw from the
//!    blow-draw interval
//!
//! ## Bend Rules
//! Bends lower the higher-pitched reed of a hole: a half-step bend once the
//! blow-draw gap reaches 2 semitones, a whole-step at 3, a minor-third at 4.
//! Overblows sit a half step above the draw note on holes 1, 4, 5, 6;
//! overdraws a half step above the blow note on holes 7, 9, 10.

use serde::Serialize;

use crate::note::{Note, PitchClass};
use crate::tuning::{Tuning, HOLE_COUNT};

/// Holes that admit an overblow.
const OVERBLOW_HOLES: [u8; 4] = [1, 4, 5, 6];

/// Holes that admit an overdraw.
const OVERDRAW_HOLES: [u8; 3] = [7, 9, 10];

/// Everything one hole can sound.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoleLayout {
    /// Hole number, 1-10.
    pub number: u8,
    /// The blow note.
    pub blow: Note,
    /// The draw note.
    pub draw: Note,
    /// Bend ladder, shallowest first (half, whole, minor third below the
    /// higher-pitched reed). Empty when the hole does not bend.
    pub bends: Vec<Note>,
    /// Overblow note, on holes that admit one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overblow: Option<Note>,
    /// Overdraw note, on holes that admit one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overdraw: Option<Note>,
}

/// A complete harmonica: key, tuning, and the ten hole layouts in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Harmonica {
    /// The harmonica's key.
    pub key: PitchClass,
    /// The reed tuning.
    pub tuning: Tuning,
    /// Hole layouts for holes 1 through 10.
    pub holes: Vec<HoleLayout>,
}

impl Harmonica {
    /// The layout of a hole by its 1-based number.
    pub fn hole(&self, number: u8) -> &HoleLayout {
        &self.holes[number as usize - 1]
    }
}

/// Fixed starting register per key. Keys C through F# sit at octave 4; the
/// higher keys G through B drop to octave 3, the register the instruments
/// are built in.
fn octave_shift(key: PitchClass) -> i32 {
    match key {
        PitchClass::C
        | PitchClass::Cs
        | PitchClass::D
        | PitchClass::Ds
        | PitchClass::E
        | PitchClass::F
        | PitchClass::Fs => 0,
        PitchClass::G | PitchClass::Gs | PitchClass::A | PitchClass::As | PitchClass::B => -1,
    }
}

/// Build the layout for a harmonica in the given key and tuning.
pub fn build_harmonica(key: PitchClass, tuning: Tuning) -> Harmonica {
    let semitones = key.chroma() as i32 + 12 * octave_shift(key);
    let blow_row = tuning.canonical_blow();
    let draw_row = tuning.canonical_draw();

    let mut holes = Vec::with_capacity(HOLE_COUNT);
    for i in 0..HOLE_COUNT {
        let (blow_pc, blow_octave) = blow_row[i];
        let (draw_pc, draw_octave) = draw_row[i];
        let blow = Note::new(blow_pc, blow_octave).transposed(semitones);
        let draw = Note::new(draw_pc, draw_octave).transposed(semitones);
        holes.push(build_hole(i as u8 + 1, blow, draw));
    }

    Harmonica { key, tuning, holes }
}

/// Derive a hole's bends and over-notes from its blow-draw interval.
fn build_hole(number: u8, blow: Note, draw: Note) -> HoleLayout {
    let interval = draw.midi() - blow.midi();

    let mut bends = Vec::new();
    let mut overblow = None;
    let mut overdraw = None;

    if interval > 0 {
        // Draw reed is higher: draw bends, and overblows where the hole
        // supports one.
        for depth in 1..=3 {
            if interval >= depth + 1 {
                bends.push(draw.transposed(-depth));
            }
        }
        if OVERBLOW_HOLES.contains(&number) {
            overblow = Some(draw.transposed(1));
        }
    } else {
        // Blow reed is higher (or the reeds are unison): blow bends against
        // the absolute gap, and overdraws where supported.
        let gap = -interval;
        for depth in 1..=3 {
            if gap >= depth + 1 {
                bends.push(blow.transposed(-depth));
            }
        }
        if OVERDRAW_HOLES.contains(&number) {
            overdraw = Some(blow.transposed(1));
        }
    }

    HoleLayout {
        number,
        blow,
        draw,
        bends,
        overblow,
        overdraw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_names(notes: &[Note]) -> Vec<String> {
        notes.iter().map(Note::to_string).collect()
    }

    #[test]
    fn test_c_richter_reed_plates() {
        let harp = build_harmonica(PitchClass::C, Tuning::Richter);
        let blow: Vec<String> = harp.holes.iter().map(|h| h.blow.to_string()).collect();
        let draw: Vec<String> = harp.holes.iter().map(|h| h.draw.to_string()).collect();
        assert_eq!(
            blow,
            ["C4", "E4", "G4", "C5", "E5", "G5", "C6", "E6", "G6", "C7"]
        );
        assert_eq!(
            draw,
            ["D4", "G4", "B4", "D5", "F5", "A5", "B5", "D6", "F6", "A6"]
        );
    }

    #[test]
    fn test_g_harp_starts_an_octave_down() {
        let harp = build_harmonica(PitchClass::G, Tuning::Richter);
        assert_eq!(harp.hole(1).blow.to_string(), "G3");
        assert_eq!(harp.hole(1).draw.to_string(), "A3");
        assert_eq!(harp.hole(2).draw.to_string(), "D4");

        let fs_harp = build_harmonica(PitchClass::Fs, Tuning::Richter);
        assert_eq!(fs_harp.hole(1).blow.to_string(), "F#4");
    }

    #[test]
    fn test_c_richter_bend_ladders() {
        let harp = build_harmonica(PitchClass::C, Tuning::Richter);
        // Hole 1: whole-step gap, one draw bend.
        assert_eq!(note_names(&harp.hole(1).bends), ["C#4"]);
        // Hole 2: minor-third gap, two draw bends.
        assert_eq!(note_names(&harp.hole(2).bends), ["F#4", "F4"]);
        // Hole 3: major-third gap, the full three-bend ladder.
        assert_eq!(note_names(&harp.hole(3).bends), ["A#4", "A4", "G#4"]);
        // Hole 5: half-step gap, no bend.
        assert!(harp.hole(5).bends.is_empty());
        // Hole 7: draw sits a half step under the blow, no bend either way.
        assert!(harp.hole(7).bends.is_empty());
        // Hole 8 and 10: blow bends against the inverted interval.
        assert_eq!(note_names(&harp.hole(8).bends), ["D#6"]);
        assert_eq!(note_names(&harp.hole(10).bends), ["B6", "A#6"]);
    }

    #[test]
    fn test_c_richter_over_notes() {
        let harp = build_harmonica(PitchClass::C, Tuning::Richter);
        for hole in &harp.holes {
            match hole.number {
                1 | 4 | 5 | 6 => {
                    let overblow = hole.overblow.expect("overblow hole");
                    assert_eq!(overblow.midi(), hole.draw.midi() + 1);
                    assert!(hole.overdraw.is_none());
                }
                7 | 9 | 10 => {
                    let overdraw = hole.overdraw.expect("overdraw hole");
                    assert_eq!(overdraw.midi(), hole.blow.midi() + 1);
                    assert!(hole.overblow.is_none());
                }
                _ => {
                    assert!(hole.overblow.is_none());
                    assert!(hole.overdraw.is_none());
                }
            }
        }
        assert_eq!(harp.hole(5).overblow.map(|n| n.to_string()), Some("F#5".into()));
        assert_eq!(harp.hole(6).overblow.map(|n| n.to_string()), Some("A#5".into()));
        assert_eq!(harp.hole(7).overdraw.map(|n| n.to_string()), Some("C#6".into()));
        assert_eq!(harp.hole(10).overdraw.map(|n| n.to_string()), Some("C#7".into()));
    }

    #[test]
    fn test_reed_rows_strictly_ascend_for_every_key_and_tuning() {
        for key in PitchClass::ALL {
            for tuning in Tuning::ALL {
                let harp = build_harmonica(key, tuning);
                assert_eq!(harp.holes.len(), HOLE_COUNT);
                for pair in harp.holes.windows(2) {
                    assert!(
                        pair[0].blow.frequency < pair[1].blow.frequency,
                        "blow row not ascending for {key} {tuning:?}"
                    );
                    assert!(
                        pair[0].draw.frequency < pair[1].draw.frequency,
                        "draw row not ascending for {key} {tuning:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_transposition_preserves_blow_draw_gaps() {
        for tuning in Tuning::ALL {
            let reference = build_harmonica(PitchClass::C, tuning);
            for key in PitchClass::ALL {
                let harp = build_harmonica(key, tuning);
                for (hole, ref_hole) in harp.holes.iter().zip(&reference.holes) {
                    assert_eq!(
                        hole.draw.midi() - hole.blow.midi(),
                        ref_hole.draw.midi() - ref_hole.blow.midi(),
                        "gap changed at hole {} for {key} {tuning:?}",
                        hole.number
                    );
                }
            }
        }
    }
}
