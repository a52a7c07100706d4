//! Helpers for cutting a flat buffer into segments, mainly for exercising
//! readers against many segment layouts.

use alloc::vec::Vec;

use crate::sequence::Sequence;

/// Split `payload` into `parts` approximately equal-sized segments.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_segments<T>(payload: &[T], parts: usize) -> Sequence<'_, T> {
    assert!(parts > 0);
    let chunk_size = payload.len().div_ceil(parts).max(1);
    payload.chunks(chunk_size).collect()
}

/// Split `payload` at the given cut points.
///
/// Cuts are taken modulo `payload.len() + 1` and sorted, so any list of
/// numbers is a valid layout. Repeated cuts produce empty segments.
#[must_use]
pub fn split_at_cuts<'a, T>(payload: &'a [T], cuts: &[usize]) -> Sequence<'a, T> {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (payload.len() + 1)).collect();
    points.sort_unstable();
    let mut segments = Vec::with_capacity(points.len() + 1);
    let mut start = 0;
    for end in points {
        segments.push(&payload[start..end]);
        start = end;
    }
    segments.push(&payload[start..]);
    Sequence::new(segments)
}

/// Every way of splitting `payload` into exactly two segments, the empty
/// splits at either end included.
pub fn two_way_splits<T>(payload: &[T]) -> impl Iterator<Item = Sequence<'_, T>> {
    (0..=payload.len()).map(move |cut| {
        let (head, tail) = payload.split_at(cut);
        Sequence::new(alloc::vec![head, tail])
    })
}
