use alloc::{borrow::Cow, vec::Vec};
use core::{fmt, slice};

use bstr::{BStr, BString};

use crate::sequence::{Segments, Sequence};

/// A zero-copy view over elements matched by a scan.
///
/// The view borrows from the storage behind the [`Sequence`] the reader was
/// built over, so it stays valid after the reader moves on or is dropped.
///
/// - `Contiguous(&'a [T])`: the content lies within one segment (or is
///   empty).
/// - `Segmented(Sequence<'a, T>)`: the content spans segments; each part is a
///   non-empty sub-slice of one of them, in stream order.
///
/// Both shapes expose the same accessors; [`to_contiguous`](Self::to_contiguous)
/// linearizes only when needed.
pub enum View<'a, T> {
    /// Content fully inside one segment.
    Contiguous(&'a [T]),
    /// Content split over two or more segments.
    Segmented(Sequence<'a, T>),
}

impl<'a, T> View<'a, T> {
    /// The empty view.
    #[must_use]
    pub fn empty() -> Self {
        View::Contiguous(&[])
    }

    /// Number of elements in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            View::Contiguous(s) => s.len(),
            View::Segmented(seq) => seq.len(),
        }
    }

    /// Whether the view holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the content is a single slice.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        matches!(self, View::Contiguous(_))
    }

    /// Borrows the content as one slice when it is contiguous.
    #[must_use]
    pub fn as_contiguous(&self) -> Option<&'a [T]> {
        match self {
            View::Contiguous(s) => Some(*s),
            View::Segmented(_) => None,
        }
    }

    /// Iterates over the non-empty parts of the view in stream order.
    pub fn segments(&self) -> Segments<'_, 'a, T> {
        match self {
            View::Contiguous(s) if s.is_empty() => Segments::new(&[]),
            View::Contiguous(s) => Segments::new(slice::from_ref(s)),
            View::Segmented(seq) => seq.segments(),
        }
    }

    /// Iterates over every element in stream order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.segments().flat_map(<[T]>::iter)
    }

    /// Copies the content into one vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        match self {
            View::Contiguous(s) => s.to_vec(),
            View::Segmented(seq) => seq.to_vec(),
        }
    }

    /// Returns the content as one slice, borrowing when it already is one and
    /// copying otherwise.
    #[must_use]
    pub fn to_contiguous(&self) -> Cow<'a, [T]>
    where
        T: Clone,
    {
        match self {
            View::Contiguous(s) => Cow::Borrowed(*s),
            View::Segmented(seq) => Cow::Owned(seq.to_vec()),
        }
    }

    /// Turns the view into a sequence, e.g. to read the field with a nested
    /// [`Reader`](crate::Reader).
    #[must_use]
    pub fn into_sequence(self) -> Sequence<'a, T> {
        match self {
            View::Contiguous(s) => Sequence::single(s),
            View::Segmented(seq) => seq,
        }
    }
}

impl<T> Clone for View<'_, T> {
    fn clone(&self) -> Self {
        match self {
            View::Contiguous(s) => View::Contiguous(*s),
            View::Segmented(seq) => View::Segmented(seq.clone()),
        }
    }
}

impl<T> Default for View<'_, T> {
    fn default() -> Self {
        View::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Lossy UTF-8 rendering for byte views; fields split across segments are
/// joined first so a code point straddling a boundary still decodes.
impl fmt::Display for View<'_, u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Contiguous(s) => fmt::Display::fmt(BStr::new(s), f),
            View::Segmented(seq) => fmt::Display::fmt(&BString::from(seq.to_vec()), f),
        }
    }
}

impl<T: PartialEq> PartialEq<[T]> for View<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        match self {
            View::Contiguous(s) => *s == other,
            View::Segmented(_) => self.len() == other.len() && self.iter().eq(other.iter()),
        }
    }
}

impl<T: PartialEq> PartialEq<&[T]> for View<'_, T> {
    fn eq(&self, other: &&[T]) -> bool {
        self == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for View<'_, T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self == &other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<&[T; N]> for View<'_, T> {
    fn eq(&self, other: &&[T; N]) -> bool {
        self == &other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for View<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq for View<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for View<'_, T> {}
