//! The five supported tunings and their canonical C-harmonica reed tables.

use serde::Serialize;

use crate::note::PitchClass;
use crate::note::PitchClass::{A, As, B, C, D, Ds, E, F, Fs, G, Gs};

/// Number of holes on a diatonic harmonica.
pub const HOLE_COUNT: usize = 10;

/// One reed row of the canonical C harmonica: pitch class + octave per hole.
pub type ReedRow = [(PitchClass, i8); HOLE_COUNT];

const RICHTER_BLOW: ReedRow = [
    (C, 4),
    (E, 4),
    (G, 4),
    (C, 5),
    (E, 5),
    (G, 5),
    (C, 6),
    (E, 6),
    (G, 6),
    (C, 7),
];

const RICHTER_DRAW: ReedRow = [
    (D, 4),
    (G, 4),
    (B, 4),
    (D, 5),
    (F, 5),
    (A, 5),
    (B, 5),
    (D, 6),
    (F, 6),
    (A, 6),
];

// Country: richter with the 5 draw raised a half step.
const COUNTRY_DRAW: ReedRow = [
    (D, 4),
    (G, 4),
    (B, 4),
    (D, 5),
    (Fs, 5),
    (A, 5),
    (B, 5),
    (D, 6),
    (F, 6),
    (A, 6),
];

// Melody maker: richter with the 3 blow raised a whole step and the
// 5 and 9 draws raised a half step.
const MELODY_MAKER_BLOW: ReedRow = [
    (C, 4),
    (E, 4),
    (A, 4),
    (C, 5),
    (E, 5),
    (G, 5),
    (C, 6),
    (E, 6),
    (G, 6),
    (C, 7),
];

const MELODY_MAKER_DRAW: ReedRow = [
    (D, 4),
    (G, 4),
    (B, 4),
    (D, 5),
    (Fs, 5),
    (A, 5),
    (B, 5),
    (D, 6),
    (Fs, 6),
    (A, 6),
];

// Both minor tunings flatten the blow thirds; they differ on the draw plate.
const MINOR_BLOW: ReedRow = [
    (C, 4),
    (Ds, 4),
    (G, 4),
    (C, 5),
    (Ds, 5),
    (G, 5),
    (C, 6),
    (Ds, 6),
    (G, 6),
    (C, 7),
];

const NATURAL_MINOR_DRAW: ReedRow = [
    (D, 4),
    (G, 4),
    (As, 4),
    (D, 5),
    (F, 5),
    (A, 5),
    (As, 5),
    (D, 6),
    (F, 6),
    (A, 6),
];

const HARMONIC_MINOR_DRAW: ReedRow = [
    (D, 4),
    (G, 4),
    (B, 4),
    (D, 5),
    (F, 5),
    (Gs, 5),
    (B, 5),
    (D, 6),
    (F, 6),
    (Gs, 6),
];

/// The supported reed tunings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tuning {
    /// Standard major diatonic tuning.
    #[default]
    Richter,
    /// Richter with a major 5 draw chord (raised 5 draw).
    Country,
    /// Lee Oskar style lead tuning (raised 3 blow, 5 and 9 draw).
    MelodyMaker,
    /// Natural minor throughout.
    NaturalMinor,
    /// Harmonic minor with the raised seventh on the draw plate.
    HarmonicMinor,
}

impl Tuning {
    /// All supported tunings.
    pub const ALL: [Tuning; 5] = [
        Tuning::Richter,
        Tuning::Country,
        Tuning::MelodyMaker,
        Tuning::NaturalMinor,
        Tuning::HarmonicMinor,
    ];

    /// Stable identifier used in serialized output and name parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            Tuning::Richter => "richter",
            Tuning::Country => "country",
            Tuning::MelodyMaker => "melody-maker",
            Tuning::NaturalMinor => "natural-minor",
            Tuning::HarmonicMinor => "harmonic-minor",
        }
    }

    /// Parse a tuning name (case-insensitive; spaces and underscores are
    /// accepted in place of hyphens).
    pub fn from_name(name: &str) -> Option<Tuning> {
        let normalized = name.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "richter" => Some(Tuning::Richter),
            "country" => Some(Tuning::Country),
            "melody-maker" => Some(Tuning::MelodyMaker),
            "natural-minor" => Some(Tuning::NaturalMinor),
            "harmonic-minor" => Some(Tuning::HarmonicMinor),
            _ => None,
        }
    }

    /// Blow reeds of the canonical C harmonica in this tuning.
    pub fn canonical_blow(self) -> &'static ReedRow {
        match self {
            Tuning::Richter | Tuning::Country => &RICHTER_BLOW,
            Tuning::MelodyMaker => &MELODY_MAKER_BLOW,
            Tuning::NaturalMinor | Tuning::HarmonicMinor => &MINOR_BLOW,
        }
    }

    /// Draw reeds of the canonical C harmonica in this tuning.
    pub fn canonical_draw(self) -> &'static ReedRow {
        match self {
            Tuning::Richter => &RICHTER_DRAW,
            Tuning::Country => &COUNTRY_DRAW,
            Tuning::MelodyMaker => &MELODY_MAKER_DRAW,
            Tuning::NaturalMinor => &NATURAL_MINOR_DRAW,
            Tuning::HarmonicMinor => &HARMONIC_MINOR_DRAW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for tuning in Tuning::ALL {
            assert_eq!(Tuning::from_name(tuning.as_str()), Some(tuning));
        }
    }

    #[test]
    fn test_from_name_accepts_loose_spellings() {
        assert_eq!(Tuning::from_name("Melody Maker"), Some(Tuning::MelodyMaker));
        assert_eq!(Tuning::from_name("natural_minor"), Some(Tuning::NaturalMinor));
        assert_eq!(Tuning::from_name("RICHTER"), Some(Tuning::Richter));
        assert_eq!(Tuning::from_name("paddy"), None);
    }

    #[test]
    fn test_default_is_richter() {
        assert_eq!(Tuning::default(), Tuning::Richter);
    }

    #[test]
    fn test_country_differs_from_richter_only_at_five_draw() {
        let richter = Tuning::Richter.canonical_draw();
        let country = Tuning::Country.canonical_draw();
        for hole in 0..HOLE_COUNT {
            if hole == 4 {
                assert_eq!(country[hole], (Fs, 5));
            } else {
                assert_eq!(country[hole], richter[hole]);
            }
        }
        assert_eq!(Tuning::Country.canonical_blow(), Tuning::Richter.canonical_blow());
    }
}
