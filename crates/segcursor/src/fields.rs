use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{reader::Reader, view::View};

/// How [`Reader::fields`] splits the stream.
///
/// # Examples
///
/// ```rust
/// use segcursor::{FieldOptions, Reader, Sequence};
///
/// let mut reader = Reader::new(Sequence::from_segments(["a^|b|c", "|tail"]));
/// let fields: Vec<String> = reader
///     .fields(FieldOptions::new(b'|').with_escape(b'^'))
///     .map(|f| f.to_string())
///     .collect();
/// assert_eq!(fields, ["a^|b", "c"]);
/// // The unterminated tail stays unread for the next attempt.
/// assert_eq!(reader.unread(), b"tail");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldOptions<T> {
    /// Element that terminates a field.
    pub delimiter: T,

    /// Element that, in an odd run right before a delimiter, turns that
    /// delimiter into content.
    ///
    /// # Default
    ///
    /// `None`: every delimiter terminates.
    pub escape: Option<T>,
}

impl<T> FieldOptions<T> {
    /// Fields terminated by `delimiter`, with no escape.
    #[must_use]
    pub const fn new(delimiter: T) -> Self {
        Self {
            delimiter,
            escape: None,
        }
    }

    /// Sets the escape element.
    #[must_use]
    pub fn with_escape(mut self, escape: T) -> Self {
        self.escape = Some(escape);
        self
    }
}

/// Iterator over terminated fields; see [`Reader::fields`].
#[derive(Debug)]
pub struct Fields<'r, 'a, T> {
    reader: &'r mut Reader<'a, T>,
    options: FieldOptions<T>,
    done: bool,
}

impl<'a, T: Copy + PartialEq> Iterator for Fields<'_, 'a, T> {
    type Item = View<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let FieldOptions { delimiter, escape } = self.options;
        let field = match escape {
            Some(escape) => self.reader.try_read_to_escaped(delimiter, escape, true),
            None => self.reader.try_read_to(delimiter, true),
        };
        self.done = field.is_none();
        field
    }
}

impl<T: Copy + PartialEq> FusedIterator for Fields<'_, '_, T> {}

impl<'a, T: Copy + PartialEq> Reader<'a, T> {
    /// Iterates over delimiter-terminated fields, consuming each field and
    /// its delimiter.
    ///
    /// The iterator stops at the first field with no terminator left. That
    /// field is not consumed, so a streaming caller can rebuild the reader
    /// once more input has arrived and resume from
    /// [`consumed`](Self::consumed).
    pub fn fields(&mut self, options: FieldOptions<T>) -> Fields<'_, 'a, T> {
        Fields {
            reader: self,
            options,
            done: false,
        }
    }

    /// Collects every terminated field; see [`fields`](Self::fields).
    pub fn read_fields(&mut self, options: FieldOptions<T>) -> Vec<View<'a, T>> {
        self.fields(options).collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec::Vec};

    use super::*;
    use crate::Sequence;

    fn render(fields: &[View<'_, u8>]) -> Vec<alloc::string::String> {
        fields.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn plain_fields_stop_at_unterminated_tail() {
        let mut reader = Reader::new(Sequence::from_segments(["a|b", "c||d"]));
        let fields = reader.read_fields(FieldOptions::new(b'|'));
        assert_eq!(render(&fields), ["a", "bc", ""]);
        assert_eq!(reader.consumed(), 6);
        assert!(reader.is_next(b'd'));
    }

    #[test]
    fn escaped_fields_keep_escapes_verbatim() {
        let mut reader = Reader::new(Sequence::from_segments(["x^|y|^^|", "z"]));
        let fields = reader.read_fields(FieldOptions::new(b'|').with_escape(b'^'));
        assert_eq!(render(&fields), ["x^|y", "^^"]);
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn fields_are_fused_after_a_miss() {
        let mut reader = Reader::new(Sequence::from_segments(["a|b"]));
        let mut fields = reader.fields(FieldOptions::new(b'|'));
        assert!(fields.next().is_some());
        assert!(fields.next().is_none());
        assert!(fields.next().is_none());
    }

    #[test]
    fn options_builder() {
        let options = FieldOptions::new(',').with_escape('\\');
        assert_eq!(
            options,
            FieldOptions {
                delimiter: ',',
                escape: Some('\\'),
            }
        );
        assert_eq!(FieldOptions::new(0u8).escape, None);
    }
}
