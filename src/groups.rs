//! Scale filtering and name-based grouping of voicings.

use std::collections::HashMap;

use serde::Serialize;

use crate::chords::ChordVoicing;
use crate::note::PitchClass;

/// Voicings sharing one chord symbol, with a cursor for UI paging.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordGroup {
    /// Shared chord symbol (`"G7"`).
    pub name: String,
    /// Member voicings: blow before draw, then by lowest hole.
    pub voicings: Vec<ChordVoicing>,
    /// Zero-based cursor into `voicings`, for the host to step through.
    pub current_index: usize,
}

/// Bitmask over the chromas of a scale. Comparing by chroma keeps the
/// filter enharmonic-safe: C# and Db land on the same bit.
fn chroma_mask(scale: &[PitchClass]) -> u16 {
    scale
        .iter()
        .fold(0u16, |mask, pc| mask | (1 << pc.chroma()))
}

/// Keep only voicings whose every note belongs to the scale.
pub fn filter_by_scale(voicings: Vec<ChordVoicing>, scale: &[PitchClass]) -> Vec<ChordVoicing> {
    let mask = chroma_mask(scale);
    voicings
        .into_iter()
        .filter(|voicing| {
            voicing
                .notes
                .iter()
                .all(|note| mask & (1 << note.chroma()) != 0)
        })
        .collect()
}

/// Bucket voicings by short name.
///
/// Groups appear in order of first appearance of their name; within a group
/// voicings sort blow-before-draw, then by lowest hole. Every group starts
/// with its cursor at 0.
pub fn group_chords_by_name(voicings: Vec<ChordVoicing>) -> Vec<ChordGroup> {
    let mut groups: Vec<ChordGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for voicing in voicings {
        let index = match index_by_name.get(&voicing.short_name) {
            Some(&index) => index,
            None => {
                index_by_name.insert(voicing.short_name.clone(), groups.len());
                groups.push(ChordGroup {
                    name: voicing.short_name.clone(),
                    voicings: Vec::new(),
                    current_index: 0,
                });
                groups.len() - 1
            }
        };
        groups[index].voicings.push(voicing);
    }

    for group in &mut groups {
        group.voicings.sort_by_key(|v| (v.breath, v.holes[0]));
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chords::{find_chords, Breath, WindowKind};
    use crate::layout::build_harmonica;
    use crate::note::PitchClass::{A, B, C, D, E, Fs, G};
    use crate::tuning::Tuning;

    fn c_richter_chords() -> Vec<ChordVoicing> {
        let harp = build_harmonica(C, Tuning::Richter);
        find_chords(&harp, WindowKind::Consecutive)
    }

    #[test]
    fn test_filter_keeps_in_scale_voicings_only() {
        let all = c_richter_chords();
        let total = all.len();
        // G major scale: the F-natural voicings (Dm, Bdim, G7) drop out.
        let g_major = [G, A, B, C, D, E, Fs];
        let filtered = filter_by_scale(all, &g_major);
        assert!(filtered.len() <= total);
        assert_eq!(filtered.len(), 18);
        for voicing in &filtered {
            assert!(voicing
                .notes
                .iter()
                .all(|n| g_major.iter().any(|pc| pc.chroma() == n.chroma())));
        }
    }

    #[test]
    fn test_filter_on_the_full_chromatic_scale_keeps_everything() {
        let all = c_richter_chords();
        let total = all.len();
        assert_eq!(filter_by_scale(all, &PitchClass::ALL).len(), total);
    }

    #[test]
    fn test_group_ordering_and_cursor() {
        let groups = group_chords_by_name(c_richter_chords());
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        // First appearance order: blow C chords first, then the draw chords.
        assert_eq!(names, ["C", "G", "Bdim", "Dm", "G7"]);

        let c_group = &groups[0];
        assert_eq!(c_group.current_index, 0);
        assert_eq!(c_group.voicings.len(), 15);
        for pair in c_group.voicings.windows(2) {
            let ordering = (pair[0].breath, pair[0].holes[0]) <= (pair[1].breath, pair[1].holes[0]);
            assert!(ordering, "group not sorted");
        }

        let g_group = &groups[1];
        assert_eq!(g_group.voicings.len(), 3);
        assert!(g_group.voicings.iter().all(|v| v.breath == Breath::Draw));
        assert_eq!(g_group.voicings[0].holes[0], 1);
    }

    #[test]
    fn test_groups_cover_every_voicing_exactly_once() {
        let all = c_richter_chords();
        let total = all.len();
        let groups = group_chords_by_name(all);
        let grouped: usize = groups.iter().map(|g| g.voicings.len()).sum();
        assert_eq!(grouped, total);
    }
}
