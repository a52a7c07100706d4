use alloc::vec::Vec;

use crate::{Reader, Sequence};


pub(crate) const DELIMITER: u8 = b'|';
pub(crate) const ESCAPE: u8 = b'^';

/// Everything observable about a reader after one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub content: Option<Vec<u8>>,
    pub consumed: usize,
    pub next: Option<u8>,
}

pub(crate) fn escaped_outcome(sequence: Sequence<'_, u8>, advance: bool) -> Outcome {
    let mut reader = Reader::new(sequence);
    let content = reader
        .try_read_to_escaped(DELIMITER, ESCAPE, advance)
        .map(|v| v.to_vec());
    Outcome {
        content,
        consumed: reader.consumed(),
        next: reader.peek(),
    }
}

/// Folds arbitrary bytes onto a four-letter alphabet so delimiters and
/// escape runs show up often.
pub(crate) fn dense(raw: &[u8]) -> Vec<u8> {
    raw.iter().map(|b| b"ab^|"[usize::from(b % 4)]).collect()
}

pub(crate) fn test_count() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
