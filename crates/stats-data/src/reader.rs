//! Loading of newline-separated integer files.
//!
//! The public entry point [`load_numbers`] never fails: any problem with the
//! source is logged and reported to the caller as an empty sequence.

use std::io::{ErrorKind, Read};
use std::path::Path;

use stats_core::error::{Result, StatsError};
use stats_core::models::NumberSequence;
use tracing::{debug, error};

// ── Public API ────────────────────────────────────────────────────────────────

/// Read `path` into a sequence of integers.
///
/// On a missing file, a malformed line or any other I/O failure the error is
/// logged and an empty sequence is returned. Valid lines preceding a
/// malformed one are discarded too.
pub fn load_numbers(path: &Path) -> NumberSequence {
    match read_numbers(path) {
        Ok(numbers) => numbers,
        Err(err) => {
            error!(kind = err.kind(), "{}", err);
            Vec::new()
        }
    }
}

/// Fallible counterpart of [`load_numbers`].
///
/// The file handle lives only for the duration of this call.
pub fn read_numbers(path: &Path) -> Result<NumberSequence> {
    let file = std::fs::File::open(path).map_err(|e| classify_io_error(path, e))?;
    let numbers = parse_numbers(file, path)?;

    debug!("Read {} numbers from {}", numbers.len(), path.display());
    Ok(numbers)
}

/// Parse one integer per line from `reader`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Lines that are empty after
/// trimming are skipped. Every other line must be valid UTF-8 holding a
/// base-10 signed integer (an optional `+` or `-` sign is accepted); the first
/// line that is not aborts parsing. `source` is only used for error reporting.
pub fn parse_numbers<R: Read>(mut reader: R, source: &Path) -> Result<NumberSequence> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| StatsError::UnexpectedIo {
            path: source.to_path_buf(),
            source: e,
        })?;

    let mut numbers = Vec::new();
    for (index, raw) in split_lines(&content).into_iter().enumerate() {
        let malformed = |line: &str| StatsError::MalformedEntry {
            path: source.to_path_buf(),
            line_number: index + 1,
            line: line.to_string(),
        };

        let line = std::str::from_utf8(raw)
            .map_err(|_| malformed(String::from_utf8_lossy(raw).trim()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value = trimmed.parse::<i64>().map_err(|_| malformed(trimmed))?;
        numbers.push(value);
    }

    Ok(numbers)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Split on `\n`, `\r\n` and lone `\r`, without the terminators. A trailing
/// terminator does not start an extra line.
fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                if content.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

fn classify_io_error(path: &Path, err: std::io::Error) -> StatsError {
    match err.kind() {
        ErrorKind::NotFound => StatsError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => StatsError::UnexpectedIo {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{capture_logs, lines_at};
    use std::io::{Cursor, Write};
    use std::path::PathBuf;
    use tempfile::TempDir;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        path
    }

    fn parse_str(input: &str) -> Result<NumberSequence> {
        parse_numbers(Cursor::new(input), Path::new("inline"))
    }

    // ── parse_numbers ─────────────────────────────────────────────────────────

    #[test]
    fn test_parse_numbers_basic() {
        let numbers = parse_str("1\n2\n3\n").unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_numbers_preserves_order_and_signs() {
        let numbers = parse_str("10\n-4\n+7\n0\n").unwrap();
        assert_eq!(numbers, vec![10, -4, 7, 0]);
    }

    #[test]
    fn test_parse_numbers_skips_blank_lines() {
        let numbers = parse_str("\n1\n   \n\t\n2\n\n").unwrap();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_parse_numbers_trims_whitespace() {
        let numbers = parse_str("  5  \n\t-6\t\r\n").unwrap();
        assert_eq!(numbers, vec![5, -6]);
    }

    #[test]
    fn test_parse_numbers_lone_carriage_return_endings() {
        let numbers = parse_str("1\r2\r3\r").unwrap();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_numbers_mixed_line_endings() {
        let numbers = parse_str("1\r\n2\r\r3\n\r4").unwrap();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_parse_numbers_line_number_counts_carriage_returns() {
        let err = parse_str("1\rx\r3").unwrap_err();
        assert!(matches!(err, StatsError::MalformedEntry { line_number: 2, .. }));
    }

    #[test]
    fn test_parse_numbers_without_trailing_newline() {
        let numbers = parse_str("1\n2").unwrap();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_parse_numbers_all_blank_is_empty() {
        let numbers = parse_str("\n  \n\n").unwrap();
        assert!(numbers.is_empty());
    }

    #[test]
    fn test_parse_numbers_extreme_values() {
        let input = format!("{}\n{}\n", i64::MIN, i64::MAX);
        let numbers = parse_str(&input).unwrap();
        assert_eq!(numbers, vec![i64::MIN, i64::MAX]);
    }

    #[test]
    fn test_parse_numbers_malformed_line() {
        let err = parse_str("1\n\nabc\n3\n").unwrap_err();
        match err {
            StatsError::MalformedEntry {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_numbers_rejects_decimals_and_overflow() {
        assert!(matches!(
            parse_str("1.5\n"),
            Err(StatsError::MalformedEntry { .. })
        ));
        assert!(matches!(
            parse_str("99999999999999999999\n"),
            Err(StatsError::MalformedEntry { .. })
        ));
    }

    #[test]
    fn test_parse_numbers_invalid_utf8_is_malformed() {
        let bytes: &[u8] = b"1\n\xff\xfe\n3\n";
        let err = parse_numbers(Cursor::new(bytes), Path::new("bin")).unwrap_err();
        match err {
            StatsError::MalformedEntry { line_number, .. } => assert_eq!(line_number, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_split_lines_terminators() {
        let lines = split_lines(b"a\nb\r\nc\rd");
        assert_eq!(lines, vec![&b"a"[..], &b"b"[..], &b"c"[..], &b"d"[..]]);
        assert_eq!(split_lines(b"x\r\r\n").len(), 2);
        assert!(split_lines(b"").is_empty());
    }

    // ── read_numbers ──────────────────────────────────────────────────────────

    #[test]
    fn test_read_numbers_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(dir.path(), "numbers.txt", &["3", "", "1", "2"]);
        assert_eq!(read_numbers(&path).unwrap(), vec![3, 1, 2]);
    }

    #[test]
    fn test_read_numbers_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_numbers(&path).unwrap_err();
        match err {
            StatsError::SourceNotFound { path: reported } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_numbers_directory_is_unexpected_io() {
        let dir = TempDir::new().unwrap();
        let err = read_numbers(dir.path()).unwrap_err();
        assert!(matches!(err, StatsError::UnexpectedIo { .. }));
    }

    // ── load_numbers ──────────────────────────────────────────────────────────

    #[test]
    fn test_load_numbers_success() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(dir.path(), "numbers.txt", &["-1", "0", "1"]);
        assert_eq!(load_numbers(&path), vec![-1, 0, 1]);
    }

    #[test]
    fn test_load_numbers_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_numbers(&dir.path().join("nope.txt")).is_empty());
    }

    #[test]
    fn test_load_numbers_malformed_discards_valid_lines() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(dir.path(), "numbers.txt", &["1", "2", "three", "4"]);
        assert!(load_numbers(&path).is_empty());
    }

    #[test]
    fn test_load_numbers_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(dir.path(), "empty.txt", &[]);
        assert!(load_numbers(&path).is_empty());
    }

    #[test]
    fn test_load_numbers_logs_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.txt");
        let (numbers, logs) = capture_logs(|| load_numbers(&path));
        assert!(numbers.is_empty());

        let errors = lines_at(&logs, "ERROR");
        assert_eq!(errors.len(), 1, "{logs}");
        assert!(errors[0].contains("source_not_found"));
        assert!(errors[0].contains("File not found"));
        assert!(errors[0].contains("nope.txt"));
    }

    #[test]
    fn test_load_numbers_logs_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(dir.path(), "numbers.txt", &["1", "two"]);
        let (numbers, logs) = capture_logs(|| load_numbers(&path));
        assert!(numbers.is_empty());

        let errors = lines_at(&logs, "ERROR");
        assert_eq!(errors.len(), 1, "{logs}");
        assert!(errors[0].contains("malformed_entry"));
        assert!(errors[0].contains("line 2"));
        assert!(errors[0].contains("two"));
    }

    #[test]
    fn test_load_numbers_logs_unexpected_io() {
        let dir = TempDir::new().unwrap();
        let (numbers, logs) = capture_logs(|| load_numbers(dir.path()));
        assert!(numbers.is_empty());

        let errors = lines_at(&logs, "ERROR");
        assert_eq!(errors.len(), 1, "{logs}");
        assert!(errors[0].contains("unexpected_io"));
    }

    #[test]
    fn test_load_numbers_success_logs_no_error() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(dir.path(), "numbers.txt", &["4", "2"]);
        let (_, logs) = capture_logs(|| load_numbers(&path));
        assert!(lines_at(&logs, "ERROR").is_empty(), "{logs}");
    }
}
