/// Positional line comparer
///
/// Line N of the first file is compared only with line N of the second.
/// There is no realignment after an inserted or deleted line, so a single
/// insertion near the top reports every following line as changed.

use std::path::Path;

use log::{debug, info};
use serde::Serialize;

use crate::core::error::CompareError;
use crate::utils::file_utils::{self, FileSummary};

/// How a reported line differs between the two files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Both files have the line but the content differs
    Changed,
    /// The line exists only in the first file
    OnlyInA,
    /// The line exists only in the second file
    OnlyInB,
}

/// One reported difference at a 1-based line number
///
/// At least one side is always present; records are only built through
/// [`LineRecord::changed`], [`LineRecord::only_in_a`] and
/// [`LineRecord::only_in_b`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    line_number: usize,
    content_a: Option<String>,
    content_b: Option<String>,
}

impl LineRecord {
    pub fn changed(line_number: usize, a: &str, b: &str) -> Self {
        Self {
            line_number,
            content_a: Some(a.to_string()),
            content_b: Some(b.to_string()),
        }
    }

    pub fn only_in_a(line_number: usize, a: &str) -> Self {
        Self {
            line_number,
            content_a: Some(a.to_string()),
            content_b: None,
        }
    }

    pub fn only_in_b(line_number: usize, b: &str) -> Self {
        Self {
            line_number,
            content_a: None,
            content_b: Some(b.to_string()),
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Line from the first file, with its terminator
    pub fn content_a(&self) -> Option<&str> {
        self.content_a.as_deref()
    }

    /// Line from the second file, with its terminator
    pub fn content_b(&self) -> Option<&str> {
        self.content_b.as_deref()
    }

    pub fn kind(&self) -> DifferenceKind {
        match (&self.content_a, &self.content_b) {
            (Some(_), Some(_)) => DifferenceKind::Changed,
            (Some(_), None) => DifferenceKind::OnlyInA,
            (None, Some(_)) => DifferenceKind::OnlyInB,
            (None, None) => unreachable!("line record {} has neither side", self.line_number),
        }
    }

    /// The same difference seen from the other file's side
    pub fn mirrored(&self) -> Self {
        Self {
            line_number: self.line_number,
            content_a: self.content_b.clone(),
            content_b: self.content_a.clone(),
        }
    }
}

impl Serialize for LineRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("LineRecord", 4)?;
        state.serialize_field("line_number", &self.line_number)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("content_a", &self.content_a)?;
        state.serialize_field("content_b", &self.content_b)?;
        state.end()
    }
}

/// Full result of comparing two files, used by the report exporters
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub file_a: FileSummary,
    pub file_b: FileSummary,
    pub differences: Vec<LineRecord>,
    pub generated_at: String,
}

impl ComparisonReport {
    pub fn is_identical(&self) -> bool {
        self.differences.is_empty()
    }

    /// Number of records of the given kind
    pub fn count(&self, kind: DifferenceKind) -> usize {
        self.differences.iter().filter(|r| r.kind() == kind).count()
    }
}

/// Compare two line sequences by position.
///
/// Shared indices are compared with exact string equality, terminators
/// included. Trailing lines of the longer sequence are reported one-sided.
pub fn compare_lines<A, B>(lines_a: &[A], lines_b: &[B]) -> Vec<LineRecord>
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let min_length = lines_a.len().min(lines_b.len());
    let mut differences = Vec::new();

    for (i, (a, b)) in lines_a.iter().zip(lines_b).enumerate() {
        let (a, b) = (a.as_ref(), b.as_ref());
        if a != b {
            differences.push(LineRecord::changed(i + 1, a, b));
        }
    }

    if lines_a.len() > min_length {
        for (i, a) in lines_a.iter().enumerate().skip(min_length) {
            differences.push(LineRecord::only_in_a(i + 1, a.as_ref()));
        }
    } else if lines_b.len() > min_length {
        for (i, b) in lines_b.iter().enumerate().skip(min_length) {
            differences.push(LineRecord::only_in_b(i + 1, b.as_ref()));
        }
    }

    differences
}

/// Compares two files line by line
#[derive(Debug, Clone)]
pub struct LineComparer {
    label_a: String,
    label_b: String,
}

impl LineComparer {
    /// Create a comparer that names the two files with the given labels
    /// in summaries and reports
    pub fn new(label_a: impl Into<String>, label_b: impl Into<String>) -> Self {
        Self {
            label_a: label_a.into(),
            label_b: label_b.into(),
        }
    }

    pub fn label_a(&self) -> &str {
        &self.label_a
    }

    pub fn label_b(&self) -> &str {
        &self.label_b
    }

    /// Read both files fully and compare them by position.
    ///
    /// File A is read first; if either read fails nothing is compared and
    /// the error is returned as is.
    pub fn compare(&self, path_a: &Path, path_b: &Path) -> Result<Vec<LineRecord>, CompareError> {
        let lines_a = file_utils::read_lines(path_a)?;
        let lines_b = file_utils::read_lines(path_b)?;

        Ok(self.compare_loaded(path_a, path_b, &lines_a, &lines_b))
    }

    /// Like [`LineComparer::compare`], but also returns file summaries
    pub fn compare_with_summary(
        &self,
        path_a: &Path,
        path_b: &Path,
    ) -> Result<ComparisonReport, CompareError> {
        let content_a = file_utils::read_file_content(path_a)?;
        let content_b = file_utils::read_file_content(path_b)?;

        let differences = self.compare_loaded(path_a, path_b, &content_a.lines, &content_b.lines);

        Ok(ComparisonReport {
            file_a: content_a.summary(&self.label_a),
            file_b: content_b.summary(&self.label_b),
            differences,
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }

    fn compare_loaded(
        &self,
        path_a: &Path,
        path_b: &Path,
        lines_a: &[String],
        lines_b: &[String],
    ) -> Vec<LineRecord> {
        info!("Comparing {} with {}", path_a.display(), path_b.display());
        debug!("{} has {} lines, {} has {} lines", self.label_a, lines_a.len(), self.label_b, lines_b.len());

        let differences = compare_lines(lines_a, lines_b);
        info!("Found {} differing lines", differences.len());
        differences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_sequences() {
        let a = lines(&["a\n", "b\n", "c\n"]);
        assert!(compare_lines(&a, &a).is_empty());
        assert!(compare_lines::<String, String>(&[], &[]).is_empty());
    }

    #[test]
    fn test_single_changed_line() {
        let a = lines(&["a\n", "b\n", "c\n"]);
        let b = lines(&["a\n", "x\n", "c\n"]);
        assert_eq!(compare_lines(&a, &b), vec![LineRecord::changed(2, "b\n", "x\n")]);
    }

    #[test]
    fn test_extra_line_in_a() {
        let a = lines(&["a\n", "b\n"]);
        let b = lines(&["a\n"]);
        let result = compare_lines(&a, &b);
        assert_eq!(result, vec![LineRecord::only_in_a(2, "b\n")]);
        assert_eq!(result[0].kind(), DifferenceKind::OnlyInA);
    }

    #[test]
    fn test_extra_lines_in_b() {
        let a = lines(&["a\n"]);
        let b = lines(&["a\n", "b\n", "c\n"]);
        let result = compare_lines(&a, &b);
        let numbers: Vec<_> = result.iter().map(LineRecord::line_number).collect();
        assert_eq!(numbers, vec![2, 3]);
        assert!(result.iter().all(|r| r.kind() == DifferenceKind::OnlyInB));
    }

    #[test]
    fn test_changed_then_trailing() {
        let a = lines(&["a\n", "b\n", "c\n", "d\n"]);
        let b = lines(&["a\n", "B\n"]);
        let result = compare_lines(&a, &b);
        assert_eq!(
            result,
            vec![
                LineRecord::changed(2, "b\n", "B\n"),
                LineRecord::only_in_a(3, "c\n"),
                LineRecord::only_in_a(4, "d\n"),
            ]
        );
    }

    #[test]
    fn test_no_realignment_after_insertion() {
        let a = lines(&["x\n", "a\n", "b\n"]);
        let b = lines(&["a\n", "b\n"]);
        let result = compare_lines(&a, &b);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].kind(), DifferenceKind::Changed);
        assert_eq!(result[1].kind(), DifferenceKind::Changed);
        assert_eq!(result[2], LineRecord::only_in_a(3, "b\n"));
    }

    #[test]
    fn test_exact_equality_includes_terminators() {
        let a = lines(&["a\r\n", "b", "c \n"]);
        let b = lines(&["a\n", "b\n", "c\n"]);
        assert_eq!(compare_lines(&a, &b).len(), 3);
    }

    #[test]
    fn test_mirrored_comparison() {
        let a = lines(&["a\n", "b\n", "c\n", "d\n"]);
        let b = lines(&["a\n", "x\n"]);
        let forward = compare_lines(&a, &b);
        let backward = compare_lines(&b, &a);
        let mirrored: Vec<_> = forward.iter().map(LineRecord::mirrored).collect();
        assert_eq!(mirrored, backward);
    }

    #[test]
    fn test_record_accessors() {
        let record = LineRecord::only_in_a(7, "tail\n");
        assert_eq!(record.line_number(), 7);
        assert_eq!(record.content_a(), Some("tail\n"));
        assert_eq!(record.content_b(), None);

        let mirrored = record.mirrored();
        assert_eq!(mirrored.content_a(), None);
        assert_eq!(mirrored.kind(), DifferenceKind::OnlyInB);
    }

    #[test]
    fn test_record_serializes_kind() {
        let value = serde_json::to_value(LineRecord::only_in_b(4, "z\n")).unwrap();
        assert_eq!(value["line_number"], 4);
        assert_eq!(value["kind"], "only_in_b");
        assert!(value["content_a"].is_null());
        assert_eq!(value["content_b"], "z\n");
    }
}
