/// File Comparer - a positional line-by-line file comparison tool
///
/// This library reads two text files fully and reports the lines that
/// differ at the same line number, plus the trailing lines of the longer
/// file. Lines are never realigned after an insertion or deletion.

pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::comparer::{compare_lines, ComparisonReport, DifferenceKind, LineComparer, LineRecord};
pub use crate::core::error::{CompareError, FileAccessKind};

use std::path::Path;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compare two files and return the differing lines
///
/// This is a convenience function for simple use cases; files are
/// labelled with their paths.
///
/// # Arguments
///
/// * `path_a` - Path to the first file
/// * `path_b` - Path to the second file
///
/// # Returns
///
/// Ordered difference records, empty when the files are identical
pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
    path_a: P,
    path_b: Q,
) -> Result<Vec<LineRecord>, CompareError> {
    let (path_a, path_b) = (path_a.as_ref(), path_b.as_ref());
    let comparer = LineComparer::new(path_a.display().to_string(), path_b.display().to_string());
    comparer.compare(path_a, path_b)
}
