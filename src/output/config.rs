//! Report configuration types

/// Default size of the "largest files" table.
pub const DEFAULT_TOP_N: usize = 10;

/// Default size of the "smallest files" table.
pub const DEFAULT_BOTTOM_N: usize = 5;

/// Configuration for report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Rows in the largest-files table
    pub top_n: usize,
    /// Rows in the smallest-files table
    pub bottom_n: usize,
}

impl ReportConfig {
    pub fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            ..Default::default()
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            bottom_n: DEFAULT_BOTTOM_N,
        }
    }
}
