#![allow(missing_docs, dead_code)]

use std::fmt::Write;

use segcursor::{FieldOptions, Reader};

/// A record stream as it might arrive off a socket: escapes and the
/// delimiters they protect land on either side of chunk boundaries.
pub const STREAM: [&str; 5] = ["id^|name|", "42|Ada ^^|", "Love^", "|lace|", "tail^"];

pub const DELIMITER: u8 = b'|';
pub const ESCAPE: u8 = b'^';

pub fn joined() -> String {
    STREAM.concat()
}

/// One line per field, then the unterminated remainder.
pub fn render_fields(reader: &mut Reader<'_, u8>, options: FieldOptions<u8>) -> String {
    let mut out = String::new();
    for field in reader.fields(options) {
        writeln!(out, "`{field}` segments={}", field.segments().len()).unwrap();
    }
    write!(
        out,
        "unread `{}` consumed={}",
        reader.unread(),
        reader.consumed()
    )
    .unwrap();
    out
}
