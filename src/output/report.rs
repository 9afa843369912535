//! Full line count report

use std::path::Path;

use crate::exclusions::{ExclusionConfig, HIDDEN_FILES_NOTE};
use crate::scan::FileRecord;
use crate::stats::{Totals, format_number, full_listing, largest, smallest};

use super::config::ReportConfig;
use super::markdown::{file_table, ranked_table};

/// Assembles the markdown report from scanned records.
pub struct ReportBuilder<'a> {
    exclusions: &'a ExclusionConfig,
    config: ReportConfig,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(exclusions: &'a ExclusionConfig, config: ReportConfig) -> Self {
        Self { exclusions, config }
    }

    /// Render the report for `records` scanned under `root`.
    ///
    /// The output depends only on its inputs, so an unchanged tree always
    /// yields the same document.
    pub fn build(&self, root: &Path, records: &[FileRecord]) -> String {
        let totals = Totals::from_records(records);
        let top = ranked_table(&largest(records, self.config.top_n));
        let bottom = ranked_table(&smallest(records, self.config.bottom_n));
        let full = file_table(&full_listing(records), false);

        let parts = [
            "# Line Count Report".to_string(),
            format!("*Generated at: `{}`*", root.display()),
            String::new(),
            "## File Statistics".to_string(),
            format!("- **Total files analyzed:** {}", format_number(totals.files)),
            format!("- **Total lines of code:** {}", format_number(totals.lines)),
            String::new(),
            "## Largest Files".to_string(),
            format!("*Top {} files by line count*", self.config.top_n),
            String::new(),
            top,
            String::new(),
            "---".to_string(),
            String::new(),
            "## Smallest Files".to_string(),
            format!("*Top {} smallest non-empty files*", self.config.bottom_n),
            String::new(),
            bottom,
            String::new(),
            "---".to_string(),
            String::new(),
            "## Complete File List".to_string(),
            "*Sorted by line count (descending), then by filename*".to_string(),
            String::new(),
            full,
            String::new(),
            "---".to_string(),
            String::new(),
            self.exclusion_catalogue(),
        ];
        parts.join("\n")
    }

    /// List every exclusion rule applied by the scan.
    pub fn exclusion_catalogue(&self) -> String {
        let mut lines = vec![
            "## Excluded File Types and Directories".to_string(),
            String::new(),
        ];

        for (category, exts) in self.exclusions.extension_categories() {
            lines.push(format!("### {}", category));
            lines.push(backticked(exts.into_iter()));
            lines.push(String::new());
        }

        lines.push("### Excluded Directories".to_string());
        lines.push(backticked(self.exclusions.skip_dirs()));
        lines.push(String::new());
        lines.push(HIDDEN_FILES_NOTE.to_string());

        lines.join("\n")
    }
}

fn backticked<'s>(items: impl Iterator<Item = &'s str>) -> String {
    items
        .map(|item| format!("`{}`", item))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<FileRecord> {
        vec![
            FileRecord::new("a.py", 10, 200, Some("py")),
            FileRecord::new("empty.py", 0, 0, Some("py")),
        ]
    }

    fn section<'r>(report: &'r str, heading: &str) -> &'r str {
        let start = report.find(heading).unwrap();
        let rest = &report[start..];
        let end = rest.find("\n---").unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn test_report_sections_in_order() {
        let exclusions = ExclusionConfig::default();
        let builder = ReportBuilder::new(&exclusions, ReportConfig::default());
        let report = builder.build(Path::new("/work/project"), &sample_records());

        assert!(report.starts_with("# Line Count Report\n*Generated at: `/work/project`*\n"));
        let order = [
            "## File Statistics",
            "## Largest Files",
            "## Smallest Files",
            "## Complete File List",
            "## Excluded File Types and Directories",
        ];
        let positions: Vec<usize> = order.iter().map(|h| report.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", report);
        assert!(report.contains("- **Total files analyzed:** 2\n"));
        assert!(report.contains("- **Total lines of code:** 10\n"));
        assert!(report.contains("*Top 10 files by line count*"));
        assert!(report.contains("*Top 5 smallest non-empty files*"));
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn test_ranked_tables_skip_empty_files() {
        let exclusions = ExclusionConfig::default();
        let builder = ReportBuilder::new(&exclusions, ReportConfig::default());
        let report = builder.build(Path::new("/r"), &sample_records());

        let largest = section(&report, "## Largest Files");
        assert!(largest.contains("| 1 | `a.py` | py | 10 | 0.2 |"), "{}", largest);
        assert!(!largest.contains("empty.py"));

        let smallest = section(&report, "## Smallest Files");
        assert!(smallest.contains("`a.py`"));
        assert!(!smallest.contains("empty.py"));

        let full = section(&report, "## Complete File List");
        assert!(full.contains("| `a.py` | py | 10 | 0.2 |"));
        assert!(full.contains("| `empty.py` | py | 0 | 0.0 |"));
        assert!(full.find("a.py").unwrap() < full.find("empty.py").unwrap());
    }

    #[test]
    fn test_top_n_zero() {
        let exclusions = ExclusionConfig::default();
        let builder = ReportBuilder::new(&exclusions, ReportConfig::with_top_n(0));
        let report = builder.build(Path::new("/r"), &sample_records());

        let largest = section(&report, "## Largest Files");
        assert!(largest.contains("*Top 0 files by line count*"));
        assert!(largest.contains("*No files found matching the criteria.*"));
        assert!(section(&report, "## Complete File List").contains("`empty.py`"));
    }

    #[test]
    fn test_all_empty_files() {
        let exclusions = ExclusionConfig::default();
        let builder = ReportBuilder::new(&exclusions, ReportConfig::default());
        let records = vec![FileRecord::new("empty.py", 0, 0, Some("py"))];
        let report = builder.build(Path::new("/r"), &records);

        assert!(section(&report, "## Largest Files").contains("*No non-empty files found.*"));
        assert!(section(&report, "## Smallest Files").contains("*No non-empty files found.*"));
    }

    #[test]
    fn test_exclusion_catalogue() {
        let exclusions = ExclusionConfig::default();
        let builder = ReportBuilder::new(&exclusions, ReportConfig::default());
        let catalogue = builder.exclusion_catalogue();

        assert!(catalogue.contains(
            "### Archive/Compressed Files\n`.7z`, `.bz2`, `.gz`, `.rar`, `.tar`, `.xz`, `.zip`\n"
        ));
        assert!(catalogue.contains(
            "### Backup and Cache Files\n`.bak`, `.swo`, `.swp`, `.tmp`, `~`\n"
        ));
        assert!(catalogue.contains(
            "### Excluded Directories\n`!backups`, `.env`, `.git`, `.venv`, `__pycache__`, `env`, `logs`, `node_modules`, `venv`\n"
        ));
        assert!(catalogue.ends_with(HIDDEN_FILES_NOTE));

        let archive = catalogue.find("### Archive/Compressed Files").unwrap();
        let system = catalogue.find("### System and Config Files").unwrap();
        assert!(archive < system);
    }

    #[test]
    fn test_build_is_deterministic() {
        let exclusions = ExclusionConfig::default();
        let builder = ReportBuilder::new(&exclusions, ReportConfig::default());
        let records = sample_records();
        assert_eq!(
            builder.build(Path::new("/r"), &records),
            builder.build(Path::new("/r"), &records)
        );
    }
}
