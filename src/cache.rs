//! Memoized harmonica layouts over the finite (key, tuning) domain.

use std::collections::HashMap;

use crate::layout::{build_harmonica, Harmonica};
use crate::note::PitchClass;
use crate::tuning::Tuning;

/// An explicitly owned cache of derived [`Harmonica`] layouts.
///
/// The domain is finite (12 keys × 5 tunings = 60 entries) and every entry
/// is immutable once computed. Single-threaded hosts can populate lazily
/// through [`get`](HarmonicaCache::get); concurrent hosts should build a
/// [`preloaded`](HarmonicaCache::preloaded) cache up front and share it
/// read-only. Dropping the cache and constructing a fresh one resets all
/// state, which keeps tests independent.
#[derive(Debug, Clone, Default)]
pub struct HarmonicaCache {
    entries: HashMap<(PitchClass, Tuning), Harmonica>,
}

impl HarmonicaCache {
    /// An empty cache that fills in on demand.
    pub fn new() -> HarmonicaCache {
        HarmonicaCache::default()
    }

    /// A cache with all 60 (key, tuning) layouts computed eagerly.
    pub fn preloaded() -> HarmonicaCache {
        let mut cache = HarmonicaCache::new();
        for key in PitchClass::ALL {
            for tuning in Tuning::ALL {
                cache.get(key, tuning);
            }
        }
        cache
    }

    /// The layout for a key and tuning, computing and storing it on first
    /// access.
    pub fn get(&mut self, key: PitchClass, tuning: Tuning) -> &Harmonica {
        self.entries
            .entry((key, tuning))
            .or_insert_with(|| build_harmonica(key, tuning))
    }

    /// The layout for a key and tuning if it has already been computed.
    pub fn peek(&self, key: PitchClass, tuning: Tuning) -> Option<&Harmonica> {
        self.entries.get(&(key, tuning))
    }

    /// Number of cached layouts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
