//! Segmented sequence: the ordered, read-only list of chunks a reader walks.
//!
//! A sequence only stores borrowed slices (`&'a [T]`), never the elements
//! themselves. Cloning one copies the slice list, not the data, which is what
//! lets a multi-segment [`View`] be returned without copying any element.

use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator, slice};

use crate::{segment::Segment, view::View};

/// A location inside a [`Sequence`]: a segment index and an offset into it.
///
/// Positions compare in stream order as long as both are normalized (the
/// offset lies strictly inside a non-empty segment), which is how the reader
/// reports them. The end of a sequence is `segment == segment_count()`,
/// `offset == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Index of the segment holding the element.
    pub segment: usize,
    /// Offset of the element within that segment.
    pub offset: usize,
}

impl Position {
    /// Creates a position from its parts.
    #[must_use]
    pub const fn new(segment: usize, offset: usize) -> Self {
        Self { segment, offset }
    }
}

/// An ordered, immutable list of borrowed segments forming one logical
/// stream.
///
/// Segments may have any length, including zero, and need not be adjacent in
/// memory. The total length is computed once on construction.
pub struct Sequence<'a, T> {
    segments: Vec<&'a [T]>,
    len: usize,
}

impl<'a, T> Sequence<'a, T> {
    /// Builds a sequence from an ordered list of segments.
    #[must_use]
    pub fn new(segments: Vec<&'a [T]>) -> Self {
        let len = segments.iter().map(|s| s.len()).sum();
        Self { segments, len }
    }

    /// Builds a sequence holding exactly one segment.
    #[must_use]
    pub fn single(segment: &'a [T]) -> Self {
        Self {
            len: segment.len(),
            segments: alloc::vec![segment],
        }
    }

    /// Builds a sequence by borrowing every item of `segments` as a slice.
    ///
    /// ```rust
    /// use segcursor::Sequence;
    ///
    /// let chunks = vec!["ab".to_string(), String::new(), "c|".to_string()];
    /// let seq = Sequence::from_segments(&chunks);
    /// assert_eq!(seq.len(), 4);
    /// assert_eq!(seq.segment_count(), 3);
    /// ```
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a S>,
        S: Segment<T> + ?Sized + 'a,
        T: 'a,
    {
        segments
            .into_iter()
            .map(<S as Segment<T>>::as_segment)
            .collect()
    }

    /// Total number of elements across all segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the sequence holds no elements (it may still hold empty
    /// segments).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of segments, empty ones included.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the sequence is stored as at most one segment.
    #[must_use]
    pub fn is_single_segment(&self) -> bool {
        self.segments.len() <= 1
    }

    /// Returns the segment at `index`, if any.
    #[inline]
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&'a [T]> {
        self.segments.get(index).copied()
    }

    /// Iterates over the segments in stream order.
    pub fn segments(&self) -> Segments<'_, 'a, T> {
        Segments::new(&self.segments)
    }

    /// Iterates over every element in stream order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.segments.iter().flat_map(|s| s.iter())
    }

    /// Copies the whole sequence into one contiguous vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        for segment in &self.segments {
            out.extend_from_slice(segment);
        }
        out
    }

    /// The position of the first element.
    #[must_use]
    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    /// The position one past the last element.
    #[must_use]
    pub fn end(&self) -> Position {
        Position::new(self.segments.len(), 0)
    }

    /// Maps a flat element index to its normalized position.
    ///
    /// `index == len()` maps to [`end`](Self::end); larger indices have no
    /// position.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<Position> {
        if index > self.len {
            return None;
        }
        let mut skip = index;
        for (segment, chunk) in self.segments.iter().enumerate() {
            if skip < chunk.len() {
                return Some(Position::new(segment, skip));
            }
            skip -= chunk.len();
        }
        Some(self.end())
    }

    /// Returns the zero-copy view of the elements in `[start, end)`.
    ///
    /// Returns `None` if either position lies outside the sequence or `end`
    /// precedes `start`.
    #[must_use]
    pub fn slice(&self, start: Position, end: Position) -> Option<View<'a, T>> {
        if !self.contains(start) || !self.contains(end) || end < start {
            return None;
        }
        Some(self.view_between(start, end))
    }

    fn contains(&self, position: Position) -> bool {
        match self.segments.get(position.segment) {
            Some(segment) => position.offset <= segment.len(),
            None => position == self.end(),
        }
    }

    /// Materializes `[start, end)` for positions already known to be valid and
    /// ordered. Empty parts are dropped, so a range touching one non-empty
    /// segment always comes back contiguous.
    pub(crate) fn view_between(&self, start: Position, end: Position) -> View<'a, T> {
        if start.segment == end.segment {
            return match self.segments.get(start.segment) {
                Some(segment) => View::Contiguous(&segment[start.offset..end.offset]),
                None => View::empty(),
            };
        }

        let last = end.segment.min(self.segments.len().saturating_sub(1));
        let mut parts = (start.segment..=last).filter_map(|index| {
            let segment = self.segments[index];
            let lo = if index == start.segment { start.offset } else { 0 };
            let hi = if index == end.segment {
                end.offset
            } else {
                segment.len()
            };
            let part = &segment[lo..hi];
            (!part.is_empty()).then_some(part)
        });

        let Some(first) = parts.next() else {
            return View::empty();
        };
        let Some(second) = parts.next() else {
            return View::Contiguous(first);
        };
        let mut segments = alloc::vec![first, second];
        segments.extend(parts);
        View::Segmented(Self::new(segments))
    }
}

impl<T> Clone for Sequence<'_, T> {
    fn clone(&self) -> Self {
        Self {
            segments: self.segments.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Sequence<'_, T> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            len: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments.iter()).finish()
    }
}

impl<'a, T> FromIterator<&'a [T]> for Sequence<'a, T> {
    fn from_iter<I: IntoIterator<Item = &'a [T]>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> From<&'a [T]> for Sequence<'a, T> {
    fn from(segment: &'a [T]) -> Self {
        Self::single(segment)
    }
}

impl<'a, T> From<Vec<&'a [T]>> for Sequence<'a, T> {
    fn from(segments: Vec<&'a [T]>) -> Self {
        Self::new(segments)
    }
}

/// Iterator over the segments of a [`Sequence`] or [`View`], in stream
/// order.
pub struct Segments<'s, 'a, T> {
    inner: slice::Iter<'s, &'a [T]>,
}

impl<'s, 'a, T> Segments<'s, 'a, T> {
    pub(crate) fn new(segments: &'s [&'a [T]]) -> Self {
        Self {
            inner: segments.iter(),
        }
    }
}

impl<T> Clone for Segments<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Segments<'_, '_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Segments<'_, 'a, T> {
    type Item = &'a [T];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Segments<'_, '_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().copied()
    }
}

impl<T> ExactSizeIterator for Segments<'_, '_, T> {}

impl<T> FusedIterator for Segments<'_, '_, T> {}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn abc_de() -> Sequence<'static, u8> {
        Sequence::from_segments(["abc", "", "de"])
    }

    #[test]
    fn length_counts_every_segment() {
        let seq = abc_de();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.segment_count(), 3);
        assert!(!seq.is_single_segment());
        assert_eq!(seq.to_vec(), b"abcde");
        assert_eq!(seq.iter().count(), 5);
    }

    #[test]
    fn empty_sequence_has_matching_bounds() {
        let seq = Sequence::<u8>::default();
        assert!(seq.is_empty());
        assert_eq!(seq.start(), seq.end());
        assert_eq!(seq.position_at(0), Some(seq.end()));
        assert_eq!(seq.position_at(1), None);
    }

    #[test]
    fn position_at_skips_empty_segments() {
        let seq = abc_de();
        assert_eq!(seq.position_at(0), Some(Position::new(0, 0)));
        assert_eq!(seq.position_at(2), Some(Position::new(0, 2)));
        assert_eq!(seq.position_at(3), Some(Position::new(2, 0)));
        assert_eq!(seq.position_at(5), Some(Position::new(3, 0)));
        assert_eq!(seq.position_at(6), None);
    }

    #[test]
    fn slice_within_one_segment_is_contiguous() {
        let seq = abc_de();
        let view = seq
            .slice(Position::new(0, 1), Position::new(0, 3))
            .expect("valid range");
        assert_eq!(view.as_contiguous(), Some(&b"bc"[..]));
    }

    #[test]
    fn slice_ending_at_next_segment_start_stays_contiguous() {
        let seq = abc_de();
        let view = seq
            .slice(Position::new(0, 1), Position::new(2, 0))
            .expect("valid range");
        assert_eq!(view.as_contiguous(), Some(&b"bc"[..]));
    }

    #[test]
    fn slice_across_segments_keeps_parts() {
        let seq = abc_de();
        let view = seq
            .slice(Position::new(0, 2), Position::new(2, 1))
            .expect("valid range");
        assert!(!view.is_contiguous());
        assert_eq!(view.segments().collect::<Vec<_>>(), vec![&b"c"[..], &b"d"[..]]);
        assert_eq!(view, b"cd"[..]);

        let tail = seq.slice(Position::new(0, 1), seq.end()).expect("valid");
        assert_eq!(tail.to_vec(), b"bcde");
    }

    #[test]
    fn slice_rejects_bad_ranges() {
        let seq = abc_de();
        assert!(seq.slice(Position::new(0, 2), Position::new(0, 1)).is_none());
        assert!(seq.slice(Position::new(0, 4), Position::new(2, 0)).is_none());
        assert!(seq.slice(Position::new(0, 0), Position::new(4, 0)).is_none());
        assert!(seq.slice(seq.end(), seq.end()).is_some_and(|v| v.is_empty()));
    }

    #[test]
    fn segments_iterate_in_order_both_ways() {
        let seq = abc_de();
        let forward: Vec<_> = seq.segments().collect();
        assert_eq!(forward, vec![&b"abc"[..], &b""[..], &b"de"[..]]);
        let backward: Vec<_> = seq.segments().rev().collect();
        assert_eq!(backward, vec![&b"de"[..], &b""[..], &b"abc"[..]]);
        assert_eq!(seq.segments().len(), 3);
    }
}
