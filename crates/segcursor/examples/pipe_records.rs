//! Splits `|`-terminated records read from stdin, honoring `^` escapes.
//!
//! Input is consumed in small fixed-size chunks and never copied into one
//! buffer before scanning: each batch of chunks is wrapped in a `Sequence`
//! and fields are pulled out until the tail is unterminated.
//!
//! ```text
//! printf 'a^|b|c|tail' | cargo run --example pipe_records
//! ```
#![allow(missing_docs)]

use std::io::{self, Read, Write};

use segcursor::{FieldOptions, Reader, Sequence};

const CHUNK: usize = 8;

fn main() -> io::Result<()> {
    let options = FieldOptions::new(b'|').with_escape(b'^');
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Chunks received but not yet consumed, and how far into the first one
    // the reader has already gone.
    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let mut offset = 0usize;
    let mut record = 0usize;

    loop {
        let mut chunk = vec![0; CHUNK];
        let read = input.read(&mut chunk)?;
        if read == 0 {
            break;
        }
        chunk.truncate(read);
        chunks.push(chunk);

        let mut segments: Vec<&[u8]> = chunks.iter().map(Vec::as_slice).collect();
        segments[0] = &segments[0][offset..];
        let mut reader = Reader::new(Sequence::new(segments));
        for field in reader.fields(options) {
            writeln!(out, "{record}: {field} ({} segments)", field.segments().len())?;
            record += 1;
        }

        // Release whole chunks the reader is done with.
        let mut consumed = offset + reader.consumed();
        while chunks.first().is_some_and(|c| c.len() <= consumed) {
            consumed -= chunks.remove(0).len();
        }
        offset = consumed;
    }

    let rest = chunks.concat();
    if rest.len() > offset {
        writeln!(out, "unterminated: {}", bstr::BStr::new(&rest[offset..]))?;
    }
    Ok(())
}
