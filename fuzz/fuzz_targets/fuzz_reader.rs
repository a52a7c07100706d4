#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use segcursor::{Reader, Sequence, chunk_utils::split_at_cuts, reference};

#[derive(Debug, Arbitrary)]
enum Scan {
    Plain,
    Escaped,
    Slice(Vec<u8>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    data: Vec<u8>,
    cuts: Vec<usize>,
    delimiter: u8,
    escape: u8,
    advance: bool,
    scans: Vec<Scan>,
}

/// Runs one scan and returns the content if it succeeded.
fn run(reader: &mut Reader<'_, u8>, input: &Input, scan: &Scan) -> Option<Vec<u8>> {
    match scan {
        Scan::Plain => reader.try_read_to(input.delimiter, input.advance),
        Scan::Escaped => reader.try_read_to_escaped(input.delimiter, input.escape, input.advance),
        Scan::Slice(delimiter) => reader.try_read_to_slice(delimiter, input.advance),
    }
    .map(|v| v.to_vec())
}

fuzz_target!(|input: Input| {
    let data = input.data.as_slice();
    let mut split = Reader::new(split_at_cuts(data, &input.cuts));
    let mut whole = Reader::new(Sequence::single(data));

    // Cap the work per input; long scan lists add nothing new.
    for scan in input.scans.iter().take(16) {
        let at = whole.consumed();
        let rest = &data[at..];
        let expected = match scan {
            Scan::Plain => reference::read_to(rest, &input.delimiter, input.advance),
            Scan::Escaped => {
                reference::read_to_escaped(rest, &input.delimiter, &input.escape, input.advance)
            }
            Scan::Slice(delimiter) => reference::read_to_slice(rest, delimiter, input.advance),
        };

        let got_split = run(&mut split, &input, scan);
        let got_whole = run(&mut whole, &input, scan);
        assert_eq!(got_split, got_whole);
        assert_eq!(split.consumed(), whole.consumed());
        assert_eq!(split.peek(), whole.peek());

        match expected {
            Some(m) => {
                assert_eq!(got_whole.as_deref(), Some(&rest[..m.content_len]));
                assert_eq!(whole.consumed(), at + m.consumed);
            }
            None => {
                assert_eq!(got_whole, None);
                assert_eq!(whole.consumed(), at);
            }
        }
    }
});
