//! Scan, aggregate and render in one pass

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::exclusions::ExclusionConfig;
use crate::output::{ReportBuilder, ReportConfig};
use crate::scan::Scanner;

/// Scan `root` and render its report.
///
/// Fails if `root` is not a directory or no file qualifies.
pub fn generate_report(
    root: &Path,
    exclusions: &ExclusionConfig,
    config: ReportConfig,
) -> Result<String> {
    let records = Scanner::new(exclusions.clone()).scan(root)?;
    if records.is_empty() {
        return Err(Error::NoFiles(root.to_path_buf()));
    }
    Ok(ReportBuilder::new(exclusions, config).build(root, &records))
}

/// Make `path` absolute against the current directory.
///
/// `.` and `..` components and trailing separators are removed lexically;
/// symlinks are not resolved. A path that cannot be made absolute is
/// returned unchanged.
pub fn absolute_path(path: &Path) -> PathBuf {
    let Ok(abs) = std::path::absolute(path) else {
        return path.to_path_buf();
    };
    let mut normalized = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Write a rendered report to `path`.
pub fn write_report(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report).map_err(|source| Error::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}
