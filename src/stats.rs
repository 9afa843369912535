//! Aggregate views over scanned files
//!
//! This module derives the report's views from the flat record list: the
//! complete listing, the largest and smallest non-empty files, and totals.
//! Nothing here mutates the input slice.

use crate::scan::FileRecord;

/// Totals across all scanned files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub lines: usize,
}

impl Totals {
    pub fn from_records(records: &[FileRecord]) -> Self {
        Self {
            files: records.len(),
            lines: records.iter().map(FileRecord::lines).sum(),
        }
    }
}

/// A ranked selection of files, or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranked<'a> {
    /// The scan produced no files at all
    NoFiles,
    /// Every scanned file is empty
    NoNonEmpty,
    /// Selected files in rank order (empty when zero were requested)
    Files(Vec<&'a FileRecord>),
}

/// All records, most lines first, then by path.
pub fn full_listing(records: &[FileRecord]) -> Vec<&FileRecord> {
    let mut sorted: Vec<&FileRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.lines().cmp(&a.lines()).then_with(|| a.cmp_path(b)));
    sorted
}

/// The `n` non-empty files with the most lines.
///
/// Files with equal counts keep their input order.
pub fn largest(records: &[FileRecord], n: usize) -> Ranked<'_> {
    ranked(records, n, |a, b| b.lines().cmp(&a.lines()))
}

/// The `n` non-empty files with the fewest lines.
pub fn smallest(records: &[FileRecord], n: usize) -> Ranked<'_> {
    ranked(records, n, |a, b| a.lines().cmp(&b.lines()))
}

fn ranked<F>(records: &[FileRecord], n: usize, order: F) -> Ranked<'_>
where
    F: Fn(&FileRecord, &FileRecord) -> std::cmp::Ordering,
{
    if records.is_empty() {
        return Ranked::NoFiles;
    }
    let mut non_empty: Vec<&FileRecord> = records.iter().filter(|r| r.lines() > 0).collect();
    if non_empty.is_empty() {
        return Ranked::NoNonEmpty;
    }
    // Stable sort keeps input order among ties
    non_empty.sort_by(|a, b| order(a, b));
    non_empty.truncate(n);
    Ranked::Files(non_empty)
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
