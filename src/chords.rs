//! # Chord Voicing Search
//!
//! Enumerates every hole grouping a player can sound in one breath and keeps
//! the ones that form a recognizable chord.
//!
//! ## Windows
//! - **Consecutive**: every contiguous run of 3 or 4 holes (the ordinary
//!   puckered chord shapes)
//! - **Split**: tongue-blocking shapes: two outer hole runs spanning 5
//!   (highest minus lowest hole) around a single blocked gap of 2 or 3
//!   holes, sounding 3 or 4 holes in total
//!
//! Blow and draw notes are never mixed in one voicing; the two breath
//! directions are searched independently.
//!
//! ## Classification
//! A candidate's notes reduce to a pitch-class set that is tested against a
//! fixed table of interval patterns under every rotation, so inversions
//! resolve to one chord identity no matter which note is physically lowest
//! (holes 1-2-3 and 4-5-6 blow on a C richter harp are both C major).
//! Candidates matching no pattern are discarded; that is the common case,
//! not an error. When more than one rotation matches, the pattern table
//! order decides quality and the lowest sounding note decides the root.

use serde::Serialize;

use crate::layout::Harmonica;
use crate::naming;
use crate::note::{Note, PitchClass};
use crate::tuning::{Tuning, HOLE_COUNT};

/// Hole-number difference between the outer holes of a split voicing.
const SPLIT_SPAN: u8 = 5;

/// Breath direction through the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Breath {
    /// Exhaling into the holes.
    Blow,
    /// Inhaling through the holes.
    Draw,
}

/// The chord qualities the search recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    /// Major triad (C-E-G).
    Major,
    /// Minor triad (C-Eb-G).
    Minor,
    /// Dominant seventh (C-E-G-Bb).
    Dominant7,
    /// Diminished triad (C-Eb-Gb).
    Diminished,
}

impl ChordQuality {
    /// Short chord-symbol suffix (`"m"` in `"Am"`).
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Dominant7 => "7",
            ChordQuality::Diminished => "dim",
        }
    }

    /// Spelled-out quality word for long names.
    pub fn word(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Dominant7 => "dominant seventh",
            ChordQuality::Diminished => "diminished",
        }
    }
}

/// Interval patterns in priority order; earlier entries win when a
/// pitch-class set matches more than one quality under rotation.
const QUALITY_PATTERNS: [(ChordQuality, &[u8]); 4] = [
    (ChordQuality::Major, &[0, 4, 7]),
    (ChordQuality::Minor, &[0, 3, 7]),
    (ChordQuality::Dominant7, &[0, 4, 7, 10]),
    (ChordQuality::Diminished, &[0, 3, 6]),
];

/// One playable chord voicing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordVoicing {
    /// Sounded holes, ascending and unique, at least three.
    pub holes: Vec<u8>,
    /// Breath direction for every hole in the voicing.
    pub breath: Breath,
    /// The sounded notes, one per hole.
    pub notes: Vec<Note>,
    /// Classified chord quality.
    pub quality: ChordQuality,
    /// Root pitch class, independent of inversion.
    pub root: PitchClass,
    /// Chord symbol (`"G7"`).
    pub short_name: String,
    /// Spelled-out name (`"G dominant seventh"`).
    pub long_name: String,
    /// Whether the holes form one contiguous run.
    pub is_consecutive: bool,
    /// Harmonica position of the root relative to the harp key, 1-12.
    pub position: u8,
    /// Roman-numeral function in the harp key (`"V7"`).
    pub roman_numeral: String,
    /// Tuning the voicing was found on.
    pub tuning: Tuning,
}

/// Which window family to search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowKind {
    /// Contiguous runs of 3 or 4 holes.
    Consecutive,
    /// Tongue-blocking splits.
    Split,
}

/// Every contiguous run of 3 or 4 holes.
fn consecutive_windows() -> Vec<Vec<u8>> {
    let holes = HOLE_COUNT as u8;
    let mut windows = Vec::new();
    for size in 3..=4u8 {
        for start in 1..=holes - size + 1 {
            windows.push((start..start + size).collect());
        }
    }
    windows
}

/// Every tongue-blocking shape: outer runs at both ends of a six-hole
/// window around one blocked gap. The run-length constraints are stated
/// directly and the playable shapes fall out: a gap of 2 sounds 4 holes,
/// a gap of 3 sounds 3.
fn split_windows() -> Vec<Vec<u8>> {
    let holes = HOLE_COUNT as u8;
    let width = SPLIT_SPAN + 1;
    let mut windows = Vec::new();
    for start in 1..=holes - width + 1 {
        for left in 1..width {
            for right in 1..width {
                if left + right >= width {
                    continue;
                }
                let gap = width - left - right;
                let sounded = left + right;
                if !(2..=3).contains(&gap) || !(3..=4).contains(&sounded) {
                    continue;
                }
                let mut window: Vec<u8> = (start..start + left).collect();
                window.extend(start + width - right..start + width);
                windows.push(window);
            }
        }
    }
    windows
}

/// Classify a run of sounded notes, returning quality and root.
///
/// Notes arrive in ascending pitch order (reed rows ascend across holes),
/// so scanning candidate roots in first-appearance order makes the lowest
/// sounding note win ties between equal-priority rotations.
fn classify(notes: &[Note]) -> Option<(ChordQuality, PitchClass)> {
    let mut mask: u16 = 0;
    let mut candidates: Vec<u8> = Vec::with_capacity(notes.len());
    for note in notes {
        let chroma = note.chroma();
        if mask & (1 << chroma) == 0 {
            mask |= 1 << chroma;
            candidates.push(chroma);
        }
    }

    for (quality, pattern) in QUALITY_PATTERNS {
        if pattern.len() != candidates.len() {
            continue;
        }
        for &root in &candidates {
            let matches = pattern
                .iter()
                .all(|&step| mask & (1 << ((root + step) % 12)) != 0);
            if matches {
                return Some((quality, PitchClass::from_chroma(root as i32)));
            }
        }
    }
    None
}

/// Search one window family of a harmonica for chord voicings.
pub(crate) fn find_chords(harmonica: &Harmonica, kind: WindowKind) -> Vec<ChordVoicing> {
    let windows = match kind {
        WindowKind::Consecutive => consecutive_windows(),
        WindowKind::Split => split_windows(),
    };
    let is_consecutive = kind == WindowKind::Consecutive;

    let mut voicings = Vec::new();
    for breath in [Breath::Blow, Breath::Draw] {
        for window in &windows {
            let notes: Vec<Note> = window
                .iter()
                .map(|&hole| {
                    let layout = harmonica.hole(hole);
                    match breath {
                        Breath::Blow => layout.blow,
                        Breath::Draw => layout.draw,
                    }
                })
                .collect();

            let Some((quality, root)) = classify(&notes) else {
                continue;
            };

            voicings.push(ChordVoicing {
                holes: window.clone(),
                breath,
                notes,
                quality,
                root,
                short_name: naming::short_name(root, quality),
                long_name: naming::long_name(root, quality),
                is_consecutive,
                position: naming::position(harmonica.key, root),
                roman_numeral: naming::roman_numeral(harmonica.key, root, quality),
                tuning: harmonica.tuning,
            });
        }
    }
    voicings
}
