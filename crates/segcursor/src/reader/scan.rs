//! Delimiter scans.
//!
//! Every scan here follows the same shape: copy the cursor, walk forward on
//! the copy, and on success materialize `[start, match)` as a view and
//! assign the copy back. A miss returns `None` before anything is assigned,
//! so the reader is left exactly as it was no matter how many segments the
//! lookahead crossed.

use tracing::trace;

use super::{Cursor, Reader};
use crate::view::View;

impl<'a, T: Copy + PartialEq> Reader<'a, T> {
    /// Reads up to the first `delimiter`.
    ///
    /// On success returns every element before the delimiter and leaves the
    /// reader past the delimiter (`advance_past_delimiter`) or on it. Returns
    /// `None` and leaves the reader untouched if no delimiter remains.
    pub fn try_read_to(&mut self, delimiter: T, advance_past_delimiter: bool) -> Option<View<'a, T>> {
        let found = self
            .cursor
            .find(&self.sequence, |chunk| chunk.iter().position(|&e| e == delimiter));
        self.settle_scan(found, 1, advance_past_delimiter)
    }

    /// Reads up to the first `delimiter` that is not escaped.
    ///
    /// A delimiter preceded by an odd run of `escape` elements is content; an
    /// even run (zero included) makes it the terminator. Escapes and the
    /// delimiters they protect are returned verbatim. Runs split across
    /// segments count the same as unsplit ones.
    ///
    /// ```rust
    /// use segcursor::{Reader, Sequence};
    ///
    /// let mut reader = Reader::new(Sequence::from_segments(["^^", "^|x|"]));
    /// let field = reader.try_read_to_escaped(b'|', b'^', false).unwrap();
    /// assert_eq!(field, b"^^^|x");
    /// assert!(reader.is_next(b'|'));
    /// assert_eq!(reader.consumed(), 5);
    /// ```
    ///
    /// If `escape == delimiter` no delimiter can be escaped and this behaves
    /// like [`try_read_to`](Self::try_read_to).
    pub fn try_read_to_escaped(
        &mut self,
        delimiter: T,
        escape: T,
        advance_past_delimiter: bool,
    ) -> Option<View<'a, T>> {
        if escape == delimiter {
            return self.try_read_to(delimiter, advance_past_delimiter);
        }

        // Escapes seen immediately before the scan point; survives chunk
        // boundaries because the closure outlives each call.
        let mut run = 0usize;
        let found = self.cursor.find(&self.sequence, |chunk| {
            for (index, &e) in chunk.iter().enumerate() {
                if e == escape {
                    run += 1;
                } else if e == delimiter && run % 2 == 0 {
                    return Some(index);
                } else {
                    run = 0;
                }
            }
            None
        });
        self.settle_scan(found, 1, advance_past_delimiter)
    }

    /// Reads up to the first element found in `delimiters`.
    pub fn try_read_to_any(
        &mut self,
        delimiters: &[T],
        advance_past_delimiter: bool,
    ) -> Option<View<'a, T>> {
        let found = self.cursor.find(&self.sequence, |chunk| {
            chunk.iter().position(|e| delimiters.contains(e))
        });
        self.settle_scan(found, 1, advance_past_delimiter)
    }

    /// Reads up to the first occurrence of the multi-element `delimiter`,
    /// which may itself straddle segment boundaries.
    ///
    /// An empty `delimiter` matches immediately with an empty view.
    pub fn try_read_to_slice(
        &mut self,
        delimiter: &[T],
        advance_past_delimiter: bool,
    ) -> Option<View<'a, T>> {
        let Some(&first) = delimiter.first() else {
            return Some(View::empty());
        };
        let mut probe = self.cursor;
        loop {
            let Some(candidate) = probe.find(&self.sequence, |chunk| {
                chunk.iter().position(|&e| e == first)
            }) else {
                return self.settle_scan(None, delimiter.len(), advance_past_delimiter);
            };
            if candidate.starts_with(&self.sequence, delimiter) {
                return self.settle_scan(Some(candidate), delimiter.len(), advance_past_delimiter);
            }
            probe = candidate;
            probe.advance(&self.sequence, 1);
        }
    }

    /// Skips to the first `delimiter` without returning the skipped
    /// elements. Returns `false`, leaving the reader untouched, on a miss.
    pub fn try_advance_to(&mut self, delimiter: T, advance_past_delimiter: bool) -> bool {
        self.try_read_to(delimiter, advance_past_delimiter).is_some()
    }

    /// Skips to the first element found in `delimiters`.
    pub fn try_advance_to_any(&mut self, delimiters: &[T], advance_past_delimiter: bool) -> bool {
        self.try_read_to_any(delimiters, advance_past_delimiter)
            .is_some()
    }

    /// Commits a successful scan or reports a miss.
    ///
    /// `found` sits on the first element of the delimiter; the view ends
    /// there. The reader is only written to when `found` is `Some`.
    fn settle_scan(
        &mut self,
        found: Option<Cursor<'a, T>>,
        delimiter_len: usize,
        advance_past_delimiter: bool,
    ) -> Option<View<'a, T>> {
        let Some(found) = found else {
            trace!(
                target: "segcursor::scan",
                consumed = self.cursor.consumed,
                remaining = self.remaining(),
                "no terminating delimiter"
            );
            return None;
        };

        let view = self
            .sequence
            .view_between(self.cursor.position, found.position);
        let scanned = found.consumed - self.cursor.consumed;
        self.cursor = found;
        if advance_past_delimiter {
            self.cursor.advance(&self.sequence, delimiter_len);
        }
        trace!(
            target: "segcursor::scan",
            consumed = self.cursor.consumed,
            scanned,
            segments = view.segments().len(),
            "delimiter found"
        );
        Some(view)
    }
}
