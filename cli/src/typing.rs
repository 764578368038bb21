//! Character-by-character output.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Write `text` one character at a time, pausing `delay` after each.
pub fn type_text<W: Write>(out: &mut W, text: &str, delay: Duration) -> io::Result<()> {
    let mut buf = [0u8; 4];
    for c in text.chars() {
        out.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}
