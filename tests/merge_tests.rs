// Ranked merge tests
// Core guarantees of RankedMerger::merge over pre-sorted (descending) sources.

use ranked_merge::{RankedMerger, merge, merge_by_key};

/// An item that remembers where it came from, ranked by `score` only.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tagged {
    score: i64,
    source: usize,
    position: usize,
}

fn tagged(sources: &[Vec<i64>]) -> Vec<Vec<Tagged>> {
    sources
        .iter()
        .enumerate()
        .map(|(source, scores)| {
            scores
                .iter()
                .enumerate()
                .map(|(position, &score)| Tagged {
                    score,
                    source,
                    position,
                })
                .collect()
        })
        .collect()
}

// =============================================================================
// Test 1: The playlist scenario
// =============================================================================
#[test]
fn merges_three_sources_into_one_ranking() {
    let a = vec![100, 80, 50];
    let b = vec![90, 85];
    let c = vec![70];

    assert_eq!(merge(&[a, b, c]), vec![100, 90, 85, 80, 70, 50]);
}

// =============================================================================
// Test 2: Ties go to the lower source index, then to earlier position
// =============================================================================
#[test]
fn ties_break_by_source_then_position() {
    let sources = tagged(&[vec![5, 5], vec![5, 3]]);
    let merged = merge_by_key(&sources, |t: &Tagged| t.score);

    let order: Vec<_> = merged.iter().map(|t| (t.score, t.source, t.position)).collect();
    assert_eq!(order, vec![(5, 0, 0), (5, 0, 1), (5, 1, 0), (3, 1, 1)]);
}

#[test]
fn ties_across_many_sources_follow_source_index() {
    let sources = tagged(&[vec![1], vec![7, 1], vec![7], vec![7, 7]]);
    let merged = merge_by_key(&sources, |t: &Tagged| t.score);

    let order: Vec<_> = merged.iter().map(|t| (t.source, t.position)).collect();
    assert_eq!(
        order,
        vec![(1, 0), (2, 0), (3, 0), (3, 1), (0, 0), (1, 1)]
    );
}

// =============================================================================
// Test 3: Empty input
// =============================================================================
#[test]
fn no_sources_yields_empty() {
    let sources: Vec<Vec<u32>> = Vec::new();
    assert!(merge(&sources).is_empty());
}

#[test]
fn all_empty_sources_yield_empty() {
    let sources: Vec<Vec<u32>> = vec![vec![], vec![], vec![]];
    assert!(merge(&sources).is_empty());
}

#[test]
fn empty_sources_are_skipped() {
    let sources: Vec<Vec<u32>> = vec![vec![], vec![9, 1]];
    assert_eq!(merge(&sources), vec![9, 1]);
}

// =============================================================================
// Test 4: Single source is returned unchanged
// =============================================================================
#[test]
fn single_source_is_identity() {
    let only = vec![42, 42, 17, 3, 3, 0, -8];
    assert_eq!(merge(&[only.clone()]), only);
}

// =============================================================================
// Test 5: Re-merging merged output changes nothing
// =============================================================================
#[test]
fn remerge_is_idempotent() {
    let merged = merge(&[vec![30, 20, 10], vec![25, 15], vec![40, 5]]);
    assert_eq!(merge(&[merged.clone()]), merged);
}

// =============================================================================
// Test 6: Cardinality and ordering on uneven sources
// =============================================================================
#[test]
fn keeps_every_item_and_orders_them() {
    let sources = vec![
        vec![1000, 999, 10],
        vec![],
        vec![500],
        vec![998, 998, 998, 2, 1],
        vec![11],
    ];
    let merged = merge(&sources);

    let total: usize = sources.iter().map(Vec::len).sum();
    assert_eq!(merged.len(), total);
    assert!(merged.windows(2).all(|w| w[0] >= w[1]));

    let mut expected: Vec<_> = sources.concat();
    expected.sort_by(|a, b| b.cmp(a));
    assert_eq!(merged, expected);
}

// =============================================================================
// Test 7: Inputs are left untouched, and slices work as sources
// =============================================================================
#[test]
fn borrowed_slices_are_not_mutated() {
    let a = [8u8, 6, 4];
    let b = [7u8, 5];
    let sources: [&[u8]; 2] = [&a, &b];

    let merged = RankedMerger::new().merge(&sources);

    assert_eq!(merged, vec![8, 7, 6, 5, 4]);
    assert_eq!(a, [8, 6, 4]);
    assert_eq!(b, [7, 5]);
}

// =============================================================================
// Test 8: Ranking structured items by a field
// =============================================================================
#[derive(Debug, Clone, PartialEq)]
struct Song {
    name: &'static str,
    album: &'static str,
    play_count: i64,
}

fn song(name: &'static str, album: &'static str, play_count: i64) -> Song {
    Song {
        name,
        album,
        play_count,
    }
}

#[test]
fn playlist_from_albums_by_play_count() {
    let albums = vec![
        vec![song("Intro", "Dawn", 900), song("Rise", "Dawn", 400)],
        vec![
            song("Echo", "Dusk", 950),
            song("Fade", "Dusk", 400),
            song("Outro", "Dusk", 20),
        ],
    ];

    let playlist = merge_by_key(&albums, |s: &Song| s.play_count);
    let names: Vec<_> = playlist.iter().map(|s| s.name).collect();

    assert_eq!(names, vec!["Echo", "Intro", "Rise", "Fade", "Outro"]);
    assert_eq!(playlist[2].album, "Dawn");
}

// =============================================================================
// Test 9: Unsorted input is not rejected, only misordered
// =============================================================================
#[test]
fn unsorted_source_still_keeps_every_item() {
    // Precondition violated on purpose: [1, 9] is ascending.
    let merged = merge(&[vec![1, 9], vec![5]]);

    let mut sorted = merged.clone();
    sorted.sort();
    assert_eq!(sorted, vec![1, 5, 9]);
    assert_eq!(merged, vec![5, 1, 9]);
}
