//! Flat, index-based scans over one slice, used as the oracle that the
//! segmented reader is checked against.

/// Result of a flat scan: the content length and the new consumed count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatMatch {
    /// Elements before the delimiter.
    pub content_len: usize,
    /// Consumed count after the scan, relative to the slice start.
    pub consumed: usize,
}

/// Number of escape elements immediately before `index`.
fn escapes_before<T: PartialEq>(input: &[T], index: usize, escape: &T) -> usize {
    input[..index].iter().rev().take_while(|e| *e == escape).count()
}

/// Escape-aware scan written directly from the parity rule: the first
/// delimiter whose preceding escape run has even length terminates.
pub fn read_to_escaped<T: PartialEq>(
    input: &[T],
    delimiter: &T,
    escape: &T,
    advance_past_delimiter: bool,
) -> Option<FlatMatch> {
    if delimiter == escape {
        return read_to(input, delimiter, advance_past_delimiter);
    }
    let index = (0..input.len())
        .find(|&i| input[i] == *delimiter && escapes_before(input, i, escape) % 2 == 0)?;
    Some(FlatMatch {
        content_len: index,
        consumed: index + usize::from(advance_past_delimiter),
    })
}

/// Plain scan: the first delimiter terminates.
pub fn read_to<T: PartialEq>(
    input: &[T],
    delimiter: &T,
    advance_past_delimiter: bool,
) -> Option<FlatMatch> {
    let index = input.iter().position(|e| e == delimiter)?;
    Some(FlatMatch {
        content_len: index,
        consumed: index + usize::from(advance_past_delimiter),
    })
}

/// Multi-element scan: the first full occurrence of `delimiter`.
pub fn read_to_slice<T: PartialEq>(
    input: &[T],
    delimiter: &[T],
    advance_past_delimiter: bool,
) -> Option<FlatMatch> {
    if delimiter.is_empty() {
        return Some(FlatMatch {
            content_len: 0,
            consumed: 0,
        });
    }
    let index = input.windows(delimiter.len()).position(|w| w == delimiter)?;
    Some(FlatMatch {
        content_len: index,
        consumed: index + if advance_past_delimiter { delimiter.len() } else { 0 },
    })
}
