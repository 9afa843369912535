//! Line counting

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

/// Bytes read from disk per step.
pub const CHUNK_SIZE: usize = 64 * 1024;

/// Count the lines of a file, or 0 if it cannot be read.
///
/// Content is decoded as UTF-8 with invalid sequences dropped. `\n`, `\r\n`
/// and a lone `\r` each end a line, and text after the last terminator counts
/// as a final line. The file is streamed in `CHUNK_SIZE` pieces.
pub fn count_lines(path: &Path) -> usize {
    match try_count_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "unreadable file counted as 0 lines");
            0
        }
    }
}

fn try_count_lines(path: &Path) -> io::Result<usize> {
    let mut reader = BufReader::with_capacity(CHUNK_SIZE, File::open(path)?);
    let mut counter = LineCounter::default();
    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        counter.feed(chunk);
        let consumed = chunk.len();
        reader.consume(consumed);
    }
    Ok(counter.finish())
}

/// Count lines in a byte buffer using the rules of [`count_lines`].
pub fn count_lines_in(content: &[u8]) -> usize {
    let mut counter = LineCounter::default();
    counter.feed(content);
    counter.finish()
}

/// Universal-newline state carried across chunks.
#[derive(Default)]
struct LineCounter {
    lines: usize,
    after_cr: bool,
    has_tail: bool,
    /// Start of a multi-byte character cut off at the end of the last chunk
    pending: Vec<u8>,
}

impl LineCounter {
    fn feed(&mut self, bytes: &[u8]) {
        if self.pending.is_empty() {
            self.feed_joined(bytes);
        } else {
            let mut joined = std::mem::take(&mut self.pending);
            joined.extend_from_slice(bytes);
            self.feed_joined(&joined);
        }
    }

    fn feed_joined(&mut self, bytes: &[u8]) {
        let (complete, cut) = bytes.split_at(bytes.len() - incomplete_suffix_len(bytes));
        for chunk in complete.utf8_chunks() {
            self.feed_text(chunk.valid());
        }
        self.pending.extend_from_slice(cut);
    }

    fn feed_text(&mut self, text: &str) {
        for b in text.bytes() {
            if self.after_cr {
                self.after_cr = false;
                if b == b'\n' {
                    continue;
                }
            }
            match b {
                b'\r' => {
                    self.lines += 1;
                    self.after_cr = true;
                    self.has_tail = false;
                }
                b'\n' => {
                    self.lines += 1;
                    self.has_tail = false;
                }
                _ => self.has_tail = true,
            }
        }
    }

    /// A cut-off character left in `pending` is dropped like any invalid input.
    fn finish(self) -> usize {
        if self.has_tail {
            self.lines + 1
        } else {
            self.lines
        }
    }
}

/// Length of a trailing UTF-8 lead sequence still waiting for continuation bytes.
fn incomplete_suffix_len(bytes: &[u8]) -> usize {
    for back in 1..=bytes.len().min(3) {
        let b = bytes[bytes.len() - back];
        if b & 0xC0 == 0x80 {
            continue;
        }
        let needed = match b {
            0xF0.. => 4,
            0xE0.. => 3,
            0xC0.. => 2,
            _ => 1,
        };
        return if needed > back { back } else { 0 };
    }
    0
}
