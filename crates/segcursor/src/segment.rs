use alloc::{borrow::Cow, boxed::Box, rc::Rc, string::String, sync::Arc, vec::Vec};

/// A contiguous, immutable run of elements that can back one segment of a
/// [`Sequence`](crate::Sequence).
///
/// This is the whole read contract the reader needs from a chunk type:
/// borrowing it as a slice. Length and element access come from the slice,
/// so nothing is dispatched per element.
pub trait Segment<T> {
    /// Borrows the segment's elements in stream order.
    fn as_segment(&self) -> &[T];
}

impl<T> Segment<T> for [T] {
    #[inline]
    fn as_segment(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Segment<T> for [T; N] {
    #[inline]
    fn as_segment(&self) -> &[T] {
        self
    }
}

impl<T> Segment<T> for Vec<T> {
    #[inline]
    fn as_segment(&self) -> &[T] {
        self
    }
}

impl<T> Segment<T> for Box<[T]> {
    #[inline]
    fn as_segment(&self) -> &[T] {
        self
    }
}

impl<T> Segment<T> for Rc<[T]> {
    #[inline]
    fn as_segment(&self) -> &[T] {
        self
    }
}

impl<T> Segment<T> for Arc<[T]> {
    #[inline]
    fn as_segment(&self) -> &[T] {
        self
    }
}

impl<T: Clone> Segment<T> for Cow<'_, [T]> {
    #[inline]
    fn as_segment(&self) -> &[T] {
        self
    }
}

impl<T, S: Segment<T> + ?Sized> Segment<T> for &S {
    #[inline]
    fn as_segment(&self) -> &[T] {
        (**self).as_segment()
    }
}

impl Segment<u8> for str {
    #[inline]
    fn as_segment(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Segment<u8> for String {
    #[inline]
    fn as_segment(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;

    fn bytes_of<S: Segment<u8> + ?Sized>(s: &S) -> &[u8] {
        s.as_segment()
    }

    #[test]
    fn text_and_byte_containers_agree() {
        let owned = "ab|c".to_string();
        let boxed: Box<[u8]> = b"ab|c".to_vec().into_boxed_slice();
        let shared: Arc<[u8]> = Arc::from(&b"ab|c"[..]);
        assert_eq!(bytes_of("ab|c"), b"ab|c");
        assert_eq!(bytes_of(&owned), b"ab|c");
        assert_eq!(bytes_of(&boxed), b"ab|c");
        assert_eq!(bytes_of(&shared), b"ab|c");
        assert_eq!(bytes_of(b"ab|c"), b"ab|c");
    }

    #[test]
    fn generic_elements() {
        let v = vec!['a', '|'];
        assert_eq!(v.as_segment(), &['a', '|']);
        let c: Cow<'_, [char]> = Cow::Borrowed(&['x']);
        assert_eq!(c.as_segment(), &['x']);
    }
}
