//! Reader: forward-only cursor over a [`Sequence`].
//!
//! The reader keeps three pieces of state: the current segment (resolved once
//! per boundary crossing, never per element), the offset inside it, and the
//! number of elements consumed since the start of the sequence.
//!
//! Invariants
//! - Unless the reader is at the end, the offset lies strictly inside a
//!   non-empty segment. Empty segments and exhausted segments are stepped
//!   over eagerly, so `peek()` is a single slice lookup.
//! - At the end the position is `sequence.end()` and the current segment is
//!   empty.
//! - Scans work on a copy of the cursor and write it back only on success;
//!   see `scan.rs`.

mod scan;

use tracing::debug;

use crate::{
    error::ReaderError,
    sequence::{Position, Sequence},
    view::View,
};

/// Location state shared by the reader and its speculative scans.
///
/// Copying it is how a scan gets scratch state; assigning it back is the
/// commit.
#[derive(Debug)]
struct Cursor<'a, T> {
    position: Position,
    current: &'a [T],
    consumed: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    fn start(sequence: &Sequence<'a, T>) -> Self {
        let mut cursor = Self {
            position: sequence.start(),
            current: sequence.segment(0).unwrap_or(&[]),
            consumed: 0,
        };
        cursor.settle(sequence);
        cursor
    }

    fn end(sequence: &Sequence<'a, T>) -> Self {
        Self {
            position: sequence.end(),
            current: &[],
            consumed: sequence.len(),
        }
    }

    #[inline]
    fn unread(&self) -> &'a [T] {
        &self.current[self.position.offset..]
    }

    #[inline]
    fn peek(&self) -> Option<&'a T> {
        self.current.get(self.position.offset)
    }

    /// Steps over exhausted and empty segments.
    fn settle(&mut self, sequence: &Sequence<'a, T>) {
        while self.position.offset >= self.current.len() {
            let next = self.position.segment + 1;
            if let Some(segment) = sequence.segment(next) {
                self.position = Position::new(next, 0);
                self.current = segment;
            } else {
                self.position = sequence.end();
                self.current = &[];
                return;
            }
        }
    }

    /// Moves forward by `count` elements. The caller guarantees
    /// `count <= remaining`.
    fn advance(&mut self, sequence: &Sequence<'a, T>, mut count: usize) {
        loop {
            let available = self.current.len() - self.position.offset;
            if count < available {
                self.position.offset += count;
                self.consumed += count;
                return;
            }
            count -= available;
            self.position.offset += available;
            self.consumed += available;
            self.settle(sequence);
            if count == 0 || self.current.is_empty() {
                return;
            }
        }
    }

    /// Finds the first unread element accepted by `hit`, walking segments in
    /// order from this cursor. `hit` is handed one chunk at a time and
    /// returns the index of the match inside it.
    ///
    /// The returned cursor sits on the matched element; `self` is untouched.
    fn find<F>(&self, sequence: &Sequence<'a, T>, mut hit: F) -> Option<Self>
    where
        F: FnMut(&'a [T]) -> Option<usize>,
    {
        let mut segment = self.position.segment;
        let mut offset = self.position.offset;
        let mut current = self.current;
        let mut scanned = 0;
        loop {
            let chunk = &current[offset..];
            if let Some(index) = hit(chunk) {
                debug_assert!(index < chunk.len(), "match index outside chunk");
                return Some(Self {
                    position: Position::new(segment, offset + index),
                    current,
                    consumed: self.consumed + scanned + index,
                });
            }
            scanned += chunk.len();
            segment += 1;
            current = sequence.segment(segment)?;
            offset = 0;
        }
    }

    fn peek_at(&self, sequence: &Sequence<'a, T>, ahead: usize) -> Option<&'a T> {
        let mut skip = ahead;
        let mut segment = self.position.segment;
        let mut chunk = self.unread();
        loop {
            if let Some(element) = chunk.get(skip) {
                return Some(element);
            }
            skip -= chunk.len();
            segment += 1;
            chunk = sequence.segment(segment)?;
        }
    }

    /// Whether the unread elements begin with `needle`, which may straddle
    /// any number of segments.
    fn starts_with(&self, sequence: &Sequence<'a, T>, needle: &[T]) -> bool
    where
        T: PartialEq,
    {
        let mut rest = needle;
        let mut segment = self.position.segment;
        let mut chunk = self.unread();
        loop {
            let n = rest.len().min(chunk.len());
            if chunk[..n] != rest[..n] {
                return false;
            }
            rest = &rest[n..];
            if rest.is_empty() {
                return true;
            }
            segment += 1;
            match sequence.segment(segment) {
                Some(next) => chunk = next,
                None => return false,
            }
        }
    }
}

/// A forward-only reader over a segmented [`Sequence`].
///
/// Reads never copy: single elements come back by value (`T: Copy`), runs of
/// elements come back as [`View`]s that borrow from the sequence's storage.
/// Every scan is all-or-nothing; see
/// [`try_read_to_escaped`](Self::try_read_to_escaped).
///
/// A reader is a single-owner cursor. Several readers may walk the same
/// segments at once, each with its own position.
#[derive(Debug)]
pub struct Reader<'a, T> {
    sequence: Sequence<'a, T>,
    cursor: Cursor<'a, T>,
}

impl<T> Clone for Reader<'_, T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            cursor: self.cursor,
        }
    }
}

impl<'a, T> From<Sequence<'a, T>> for Reader<'a, T> {
    fn from(sequence: Sequence<'a, T>) -> Self {
        Self::new(sequence)
    }
}

impl<'a, T> Reader<'a, T> {
    /// Creates a reader positioned at the start of `sequence`.
    #[must_use]
    pub fn new(sequence: Sequence<'a, T>) -> Self {
        let cursor = Cursor::start(&sequence);
        Self { sequence, cursor }
    }

    /// The sequence being read.
    #[must_use]
    pub fn sequence(&self) -> &Sequence<'a, T> {
        &self.sequence
    }

    /// Number of elements consumed since the start of the sequence.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor.consumed
    }

    /// Number of elements not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor.consumed
    }

    /// Whether every element has been consumed.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.cursor.consumed == self.sequence.len()
    }

    /// The normalized position of the next unread element, or
    /// `sequence().end()` at the end.
    #[must_use]
    pub fn position(&self) -> Position {
        self.cursor.position
    }

    /// The unread remainder of the current segment; empty only at the end.
    #[must_use]
    pub fn unread_segment(&self) -> &'a [T] {
        self.cursor.unread()
    }

    /// A view over everything not yet consumed.
    #[must_use]
    pub fn unread(&self) -> View<'a, T> {
        self.sequence
            .view_between(self.cursor.position, self.sequence.end())
    }

    /// Moves forward by exactly `count` elements, crossing segment
    /// boundaries as needed.
    ///
    /// # Errors
    ///
    /// Returns [`ReaderError::OutOfRange`] if fewer than `count` elements
    /// remain; the reader does not move in that case.
    pub fn advance(&mut self, count: usize) -> Result<(), ReaderError> {
        let remaining = self.remaining();
        if count > remaining {
            debug!(requested = count, remaining, "advance past end of sequence");
            return Err(ReaderError::OutOfRange {
                requested: count,
                remaining,
            });
        }
        self.cursor.advance(&self.sequence, count);
        Ok(())
    }
}

impl<'a, T: Copy + PartialEq> Reader<'a, T> {
    /// Returns the next unread element without consuming it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<T> {
        self.cursor.peek().copied()
    }

    /// Returns the element `ahead` positions past the next unread one,
    /// without consuming anything. `try_peek_at(0)` is `peek()`.
    #[must_use]
    pub fn try_peek_at(&self, ahead: usize) -> Option<T> {
        self.cursor.peek_at(&self.sequence, ahead).copied()
    }

    /// Whether the next unread element equals `value`.
    #[inline]
    #[must_use]
    pub fn is_next(&self, value: T) -> bool {
        self.peek() == Some(value)
    }

    /// Whether the unread elements begin with `prefix`; consumes it when
    /// `advance_past` is set and it matches.
    pub fn is_next_slice(&mut self, prefix: &[T], advance_past: bool) -> bool {
        if !self.cursor.starts_with(&self.sequence, prefix) {
            return false;
        }
        if advance_past {
            self.cursor.advance(&self.sequence, prefix.len());
        }
        true
    }

    /// Consumes and returns the next element.
    pub fn try_read(&mut self) -> Option<T> {
        let value = self.peek()?;
        self.cursor.advance(&self.sequence, 1);
        Some(value)
    }

    /// Copies the next `dst.len()` elements into `dst` without consuming
    /// them. Returns `false`, leaving `dst` untouched, if too few remain.
    pub fn try_copy_to(&self, dst: &mut [T]) -> bool {
        if dst.len() > self.remaining() {
            return false;
        }
        let mut filled = 0;
        let mut segment = self.cursor.position.segment;
        let mut chunk = self.cursor.unread();
        while filled < dst.len() {
            let n = chunk.len().min(dst.len() - filled);
            dst[filled..filled + n].copy_from_slice(&chunk[..n]);
            filled += n;
            segment += 1;
            chunk = self.sequence.segment(segment).unwrap_or(&[]);
        }
        true
    }

    /// Consumes consecutive elements equal to `value`; returns how many.
    pub fn advance_past(&mut self, value: T) -> usize {
        self.skip_while(|e| e == value)
    }

    /// Consumes consecutive elements contained in `values`; returns how many.
    pub fn advance_past_any(&mut self, values: &[T]) -> usize {
        self.skip_while(|e| values.contains(&e))
    }

    fn skip_while(&mut self, mut skip: impl FnMut(T) -> bool) -> usize {
        let start = self.cursor.consumed;
        self.cursor = self
            .cursor
            .find(&self.sequence, |chunk| chunk.iter().position(|&e| !skip(e)))
            .unwrap_or_else(|| Cursor::end(&self.sequence));
        self.cursor.consumed - start
    }
}
