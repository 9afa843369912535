//! Markdown table rendering
//!
//! Tables list one file per row: an optional rank, the path in backticks,
//! the extension, the line count and the size in KB.

use crate::scan::FileRecord;
use crate::stats::{Ranked, format_number};

/// Shown instead of a table when there is nothing to list.
pub const NO_FILES: &str = "*No files found matching the criteria.*";

/// Shown instead of a ranked table when every file is empty.
pub const NO_NON_EMPTY_FILES: &str = "*No non-empty files found.*";

const HEADERS: [&str; 4] = ["File", "Extension", "Lines", "Size (KB)"];

/// Render `files` as a markdown table, or the no-files sentinel if empty.
pub fn file_table(files: &[&FileRecord], show_rank: bool) -> String {
    if files.is_empty() {
        return NO_FILES.to_string();
    }

    let mut headers: Vec<&str> = Vec::with_capacity(HEADERS.len() + 1);
    if show_rank {
        headers.push("Rank");
    }
    headers.extend(HEADERS);

    let mut output = String::new();
    push_row(&mut output, headers.iter().copied());
    output.push('\n');
    push_separator(&mut output, &headers);

    for (i, record) in files.iter().enumerate() {
        output.push('\n');
        let rank = (i + 1).to_string();
        let path = format!("`{}`", record.path());
        let lines = format_number(record.lines());
        let size = format!("{:.1}", record.size_kb());

        let cells = [path.as_str(), record.ext(), lines.as_str(), size.as_str()];
        if show_rank {
            push_row(&mut output, std::iter::once(rank.as_str()).chain(cells));
        } else {
            push_row(&mut output, cells.into_iter());
        }
    }

    output
}

/// Render a ranked selection with a rank column, or its sentinel.
pub fn ranked_table(ranked: &Ranked<'_>) -> String {
    match ranked {
        Ranked::NoFiles => NO_FILES.to_string(),
        Ranked::NoNonEmpty => NO_NON_EMPTY_FILES.to_string(),
        Ranked::Files(files) => file_table(files, true),
    }
}

fn push_row<'a>(output: &mut String, cells: impl Iterator<Item = &'a str>) {
    output.push('|');
    for cell in cells {
        output.push(' ');
        output.push_str(cell);
        output.push_str(" |");
    }
}

fn push_separator(output: &mut String, headers: &[&str]) {
    output.push('|');
    for header in headers {
        output.push_str(&"-".repeat(header.len() + 2));
        output.push('|');
    }
}
