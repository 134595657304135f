//! # Public API
//!
//! The entry points the presentation layer consumes. Every function here is
//! a pure computation over the finite (key, tuning) domain; the host owns
//! key/tuning selection, audio playback of the returned notes and
//! frequencies, and any persistence.
//!
//! ## Typical Usage
//!
//! ```rust
//! use harplay::{get_all_chords, group_chords_by_name, PitchClass, Tuning};
//!
//! let chords = get_all_chords(PitchClass::C, Tuning::Richter);
//! let groups = group_chords_by_name(chords);
//! assert_eq!(groups[0].name, "C");
//! ```
//!
//! ## String Boundary
//!
//! Hosts holding raw names go through [`harmonica_for_names`] and
//! [`parse_scale`], which normalize enharmonic spellings and surface
//! [`HarpError`] on anything unrecognized.

use crate::chords::{self, ChordVoicing, WindowKind};
use crate::error::HarpError;
use crate::groups::{self, ChordGroup};
use crate::layout::{build_harmonica, Harmonica};
use crate::note::PitchClass;
use crate::tuning::Tuning;

/// The full layout for a harmonica in the given key and tuning.
///
/// # Example
/// ```rust
/// use harplay::{get_harmonica, PitchClass, Tuning};
///
/// let harp = get_harmonica(PitchClass::G, Tuning::Richter);
/// assert_eq!(harp.holes.len(), 10);
/// assert_eq!(harp.hole(1).blow.to_string(), "G3");
/// ```
pub fn get_harmonica(key: PitchClass, tuning: Tuning) -> Harmonica {
    build_harmonica(key, tuning)
}

/// Every chord voicing playable on consecutive holes.
///
/// # Example
/// ```rust
/// use harplay::{get_all_chords, PitchClass, Tuning};
///
/// let chords = get_all_chords(PitchClass::C, Tuning::Richter);
/// assert!(chords.iter().all(|c| c.is_consecutive));
/// assert!(chords.iter().any(|c| c.short_name == "G7"));
/// ```
pub fn get_all_chords(key: PitchClass, tuning: Tuning) -> Vec<ChordVoicing> {
    let harmonica = build_harmonica(key, tuning);
    chords::find_chords(&harmonica, WindowKind::Consecutive)
}

/// Consecutive-hole voicings whose every note lies in the given scale.
///
/// Membership is tested by chroma, so a scale spelled in flats filters
/// exactly like its sharp spelling.
pub fn get_scale_filtered_chords(
    key: PitchClass,
    tuning: Tuning,
    scale: &[PitchClass],
) -> Vec<ChordVoicing> {
    groups::filter_by_scale(get_all_chords(key, tuning), scale)
}

/// Every tongue-blocking (split-window) chord voicing.
///
/// # Example
/// ```rust
/// use harplay::{get_tongue_blocking_chords, PitchClass, Tuning};
///
/// let splits = get_tongue_blocking_chords(PitchClass::C, Tuning::Richter);
/// assert!(splits.iter().all(|c| !c.is_consecutive));
/// ```
pub fn get_tongue_blocking_chords(key: PitchClass, tuning: Tuning) -> Vec<ChordVoicing> {
    let harmonica = build_harmonica(key, tuning);
    chords::find_chords(&harmonica, WindowKind::Split)
}

/// Bucket voicings by chord symbol for UI paging.
pub fn group_chords_by_name(voicings: Vec<ChordVoicing>) -> Vec<ChordGroup> {
    groups::group_chords_by_name(voicings)
}

/// Build a harmonica from raw key and tuning names.
///
/// # Example
/// ```rust
/// use harplay::harmonica_for_names;
///
/// let harp = harmonica_for_names("Bb", "melody maker")?;
/// assert_eq!(harp.key.to_string(), "A#");
/// # Ok::<(), harplay::HarpError>(())
/// ```
///
/// # Errors
/// Returns [`HarpError`] when either name is unrecognized.
pub fn harmonica_for_names(key: &str, tuning: &str) -> Result<Harmonica, HarpError> {
    let key = PitchClass::from_name(key).ok_or_else(|| HarpError::UnknownNote(key.to_string()))?;
    let tuning =
        Tuning::from_name(tuning).ok_or_else(|| HarpError::UnknownTuning(tuning.to_string()))?;
    Ok(build_harmonica(key, tuning))
}

/// Parse a list of note names into pitch classes, normalizing enharmonic
/// spellings.
///
/// # Errors
/// Returns [`HarpError::UnknownNote`] for the first unrecognized name.
pub fn parse_scale(names: &[&str]) -> Result<Vec<PitchClass>, HarpError> {
    names
        .iter()
        .map(|name| {
            PitchClass::from_name(name).ok_or_else(|| HarpError::UnknownNote((*name).to_string()))
        })
        .collect()
}
