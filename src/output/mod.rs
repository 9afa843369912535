//! Report formatting
//!
//! # Module Structure
//!
//! - `config` - Report configuration types
//! - `markdown` - Markdown tables and their sentinels
//! - `report` - Full report assembly and the exclusion catalogue

mod config;
mod markdown;
mod report;

pub use config::{DEFAULT_BOTTOM_N, DEFAULT_TOP_N, ReportConfig};
pub use markdown::{NO_FILES, NO_NON_EMPTY_FILES, file_table, ranked_table};
pub use report::ReportBuilder;
