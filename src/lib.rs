//! linetally - line count reports for a directory tree

pub mod error;
pub mod exclusions;
pub mod output;
pub mod pipeline;
pub mod scan;
pub mod stats;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use exclusions::ExclusionConfig;
pub use output::{ReportBuilder, ReportConfig};
pub use pipeline::{absolute_path, generate_report, write_report};
pub use scan::{FileRecord, Scanner, count_lines};
pub use stats::{Ranked, Totals, format_number, full_listing, largest, smallest};
