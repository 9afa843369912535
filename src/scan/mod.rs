//! Directory scanning
//!
//! Walks a root directory top-down, prunes excluded directories before they
//! are entered, and produces one `FileRecord` per qualifying file.

mod lines;
mod record;
mod walker;

pub use lines::{count_lines, count_lines_in};
pub use record::{FileRecord, NO_EXTENSION};
pub use walker::Scanner;
