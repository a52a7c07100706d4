//! Zero-copy, forward-only reading over segmented buffers.
//!
//! A [`Sequence`] is an ordered list of borrowed segments that together form
//! one logical stream. A [`Reader`] walks that stream without ever copying
//! it, and extracts delimited fields as [`View`]s that borrow from the
//! original storage: one slice when the field stays inside a segment, an
//! ordered list of sub-slices when it does not.
//!
//! Scans are transactional. A failed scan (no terminating delimiter yet)
//! leaves the reader exactly where it was, so a caller streaming input can
//! retry once more segments have arrived.
//!
//! ```rust
//! use segcursor::{Reader, Sequence};
//!
//! let parts: [&[u8]; 2] = [b"abc^", b"|de|rest"];
//! let mut reader = Reader::new(Sequence::from_segments(parts));
//!
//! let field = reader.try_read_to_escaped(b'|', b'^', true).unwrap();
//! assert_eq!(field, b"abc^|de"[..]);
//! assert!(!field.is_contiguous());
//! assert_eq!(reader.consumed(), 8);
//!
//! // No terminator left: the reader does not move.
//! assert!(reader.try_read_to_escaped(b'|', b'^', true).is_none());
//! assert_eq!(reader.consumed(), 8);
//! assert!(reader.is_next(b'r'));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod fields;
mod reader;
mod segment;
mod sequence;
mod view;

pub mod chunk_utils;

#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub mod reference;

#[cfg(test)]
mod tests;

pub use error::ReaderError;
pub use fields::{FieldOptions, Fields};
pub use reader::Reader;
pub use segment::Segment;
pub use sequence::{Position, Segments, Sequence};
pub use view::View;
