/// Errors raised while loading files for comparison

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Why a file could not be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAccessKind {
    /// The path does not exist
    NotFound,
    /// The process may not read the path
    PermissionDenied,
    /// The content is not valid UTF-8
    Decode,
    /// Any other I/O failure (e.g. the path is a directory)
    Other,
}

impl From<io::ErrorKind> for FileAccessKind {
    fn from(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => FileAccessKind::NotFound,
            io::ErrorKind::PermissionDenied => FileAccessKind::PermissionDenied,
            io::ErrorKind::InvalidData => FileAccessKind::Decode,
            _ => FileAccessKind::Other,
        }
    }
}

impl fmt::Display for FileAccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FileAccessKind::NotFound => "file not found",
            FileAccessKind::PermissionDenied => "permission denied",
            FileAccessKind::Decode => "content is not valid UTF-8",
            FileAccessKind::Other => "read failed",
        };
        f.write_str(text)
    }
}

/// Error returned by the comparer
#[derive(Debug, thiserror::Error)]
pub enum CompareError {
    /// An input file could not be opened, read or decoded
    #[error("Cannot read {}: {}", path.display(), kind)]
    FileAccess {
        path: PathBuf,
        kind: FileAccessKind,
        #[source]
        source: io::Error,
    },
}

impl CompareError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CompareError::FileAccess {
            path: path.into(),
            kind: source.kind().into(),
            source,
        }
    }

    /// The kind of access failure
    pub fn kind(&self) -> FileAccessKind {
        match self {
            CompareError::FileAccess { kind, .. } => *kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_io_error() {
        let err = CompareError::file_access("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), FileAccessKind::NotFound);
        assert_eq!(err.to_string(), "Cannot read missing.txt: file not found");

        let err = CompareError::file_access("a.bin", io::Error::new(io::ErrorKind::InvalidData, "bad utf-8"));
        assert_eq!(err.kind(), FileAccessKind::Decode);
    }
}
