/// File handling utilities
///
/// This module reads a file fully into memory, decodes it as UTF-8 and
/// splits it into lines while keeping each line's original terminator.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::core::error::CompareError;

/// Content of a file that has been read for comparison
#[derive(Debug, Clone)]
pub struct FileContent {
    /// Path the content was read from
    pub path: PathBuf,
    /// Lines in file order, each with its terminator (if any)
    pub lines: Vec<String>,
    /// Size of the raw file in bytes
    pub size: u64,
    /// SHA-256 digest of the raw bytes, hex encoded
    pub sha256: String,
}

/// Descriptive information about one compared file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSummary {
    pub label: String,
    pub path: String,
    pub line_count: usize,
    pub size: u64,
    pub sha256: String,
}

impl FileContent {
    /// Build the summary of this file under the given display label
    pub fn summary(&self, label: &str) -> FileSummary {
        FileSummary {
            label: label.to_string(),
            path: self.path.to_string_lossy().to_string(),
            line_count: self.lines.len(),
            size: self.size,
            sha256: self.sha256.clone(),
        }
    }
}

/// Read the content of a file with proper error handling.
///
/// The whole file is read before this returns; the handle is closed on
/// every path out of the function. Content must be valid UTF-8.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The file's lines and metadata, or a file access error
pub fn read_file_content(file_path: &Path) -> Result<FileContent, CompareError> {
    let bytes = fs::read(file_path).map_err(|e| CompareError::file_access(file_path, e))?;
    let size = bytes.len() as u64;
    let sha256 = hex::encode(Sha256::digest(&bytes));

    let text = String::from_utf8(bytes).map_err(|e| {
        CompareError::file_access(file_path, io::Error::new(io::ErrorKind::InvalidData, e))
    })?;

    let lines = split_lines(&text);
    debug!("Read {} lines ({} bytes) from {}", lines.len(), size, file_path.display());

    Ok(FileContent {
        path: file_path.to_path_buf(),
        lines,
        size,
        sha256,
    })
}

/// Read just the lines of a file
pub fn read_lines(file_path: &Path) -> Result<Vec<String>, CompareError> {
    read_file_content(file_path).map(|content| content.lines)
}

/// Split text into lines, keeping the `\n` (and any preceding `\r`) on each.
///
/// A bare `\r` is not a line break. The final line carries no terminator when the text does not end with a
/// newline. Empty text yields no lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_terminators() {
        assert_eq!(split_lines("a\nb\r\nc"), vec!["a\n", "b\r\n", "c"]);
        assert_eq!(split_lines("a\n\n"), vec!["a\n", "\n"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_bare_carriage_return() {
        // Only '\n' ends a line; old Mac-style '\r' endings stay inside one line
        assert_eq!(split_lines("a\rb\rc\n"), vec!["a\rb\rc\n"]);
    }

    #[test]
    fn test_read_file_content() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("sample.txt");
        fs::write(&path, "one\ntwo\n").expect("Failed to write sample file");

        let content = read_file_content(&path).expect("Failed to read sample file");
        assert_eq!(content.lines, vec!["one\n", "two\n"]);
        assert_eq!(content.size, 8);
        assert_eq!(content.sha256.len(), 64);

        let summary = content.summary("left");
        assert_eq!(summary.label, "left");
        assert_eq!(summary.line_count, 2);
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("binary.dat");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x0a]).expect("Failed to write binary file");

        let err = read_lines(&path).unwrap_err();
        assert_eq!(err.kind(), crate::core::error::FileAccessKind::Decode);
    }
}
