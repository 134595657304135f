//! # harplay
//!
//! Layout and chord-voicing engine for ten-hole diatonic harmonicas.
//!
//! Given a key (12 values) and a tuning (5 values), the crate derives the
//! complete note layout (blow, draw, bend ladders, overblows and
//! overdraws) and enumerates every playable chord voicing, from ordinary
//! consecutive-hole shapes to tongue-blocking splits, each classified by
//! quality and labeled with an inversion-safe name, its harmonica position,
//! and its Roman-numeral function.
//!
//! ## Example
//! ```rust
//! use harplay::{get_all_chords, get_harmonica, PitchClass, Tuning};
//!
//! let harp = get_harmonica(PitchClass::C, Tuning::Richter);
//! assert_eq!(harp.holes.len(), 10);
//! assert_eq!(harp.hole(1).blow.to_string(), "C4");
//!
//! let chords = get_all_chords(PitchClass::C, Tuning::Richter);
//! let g7 = chords.iter().find(|c| c.short_name == "G7").unwrap();
//! assert_eq!(g7.holes, vec![2, 3, 4, 5]);
//! assert_eq!(g7.roman_numeral, "V7");
//! ```
//!
//! Every result is a plain serializable value; playback, rendering, and
//! persistence belong to the host application.

#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod cache;
pub mod chords;
pub mod error;
pub mod groups;
pub mod layout;
pub mod naming;
pub mod note;
pub mod tuning;

pub use api::*;
pub use cache::HarmonicaCache;
pub use chords::{Breath, ChordQuality, ChordVoicing};
pub use error::HarpError;
pub use groups::ChordGroup;
pub use layout::{Harmonica, HoleLayout};
pub use note::{Note, PitchClass};
pub use tuning::Tuning;
