//! Reading input files.

use std::io;

use camino::Utf8Path;

use crate::error::{AnalysisError, AnalysisResult};

/// Default maximum input size (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// Read the whole file at `path` as UTF-8 text.
///
/// The size is checked against `max_bytes` from metadata before the
/// contents are loaded. Directories and non-UTF-8 content fail with
/// [`IoFailureKind::ReadError`](crate::error::IoFailureKind::ReadError).
#[tracing::instrument(skip(max_bytes))]
pub fn read_text(path: &Utf8Path, max_bytes: Option<usize>) -> AnalysisResult<String> {
    let metadata = std::fs::metadata(path).map_err(|e| AnalysisError::io(path, e))?;

    if metadata.is_dir() {
        return Err(AnalysisError::io(
            path,
            io::Error::other("path is a directory"),
        ));
    }

    if let Some(limit) = max_bytes {
        let size = metadata.len();
        if size > limit as u64 {
            return Err(AnalysisError::InputTooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
    }

    let text = std::fs::read_to_string(path).map_err(|e| AnalysisError::io(path, e))?;
    tracing::debug!(bytes = text.len(), "read input");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IoFailureKind;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn utf8(dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn reads_utf8_file() {
        let tmp = TempDir::new().unwrap();
        let path = utf8(&tmp).join("a.txt");
        fs::write(&path, "Слово. Word.").unwrap();
        assert_eq!(read_text(&path, None).unwrap(), "Слово. Word.");
    }

    #[test]
    fn missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = read_text(&utf8(&tmp).join("nope.txt"), None).unwrap_err();
        assert_eq!(err.io_kind(), Some(IoFailureKind::NotFound));
    }

    #[test]
    fn directory_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_text(&utf8(&tmp), None).unwrap_err();
        assert_eq!(err.io_kind(), Some(IoFailureKind::ReadError));
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = utf8(&tmp).join("bin.dat");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
        let err = read_text(&path, None).unwrap_err();
        assert_eq!(err.io_kind(), Some(IoFailureKind::ReadError));
    }

    #[test]
    fn enforces_size_limit() {
        let tmp = TempDir::new().unwrap();
        let path = utf8(&tmp).join("big.txt");
        fs::write(&path, "x".repeat(64)).unwrap();

        let err = read_text(&path, Some(16)).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InputTooLarge {
                size: 64,
                limit: 16,
                ..
            }
        ));
        assert!(read_text(&path, Some(64)).is_ok());
    }
}
