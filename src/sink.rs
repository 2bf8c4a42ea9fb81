//! All-or-error byte writing to part files.
//!
//! The split writer commits bytes through [`write_full`], which guarantees
//! that on success the entire buffer reached the file (short writes and
//! interrupts are retried internally). The optional diff mode compares the
//! buffer against the bytes already on disk at the cursor and skips the
//! write when the region is unchanged, which avoids needless rewrites when
//! re-running an acquisition onto existing part files.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

/// How bytes are committed to a part file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write every byte unconditionally.
    #[default]
    Overwrite,
    /// Skip regions whose on-disk bytes already match the buffer.
    Diff,
}

/// Writes the whole buffer to `file` at its current cursor position.
///
/// Returns the number of bytes written, which on success is always
/// `buf.len()`. In [`WriteMode::Diff`] the file cursor advances past the
/// region either way, but unchanged bytes are not rewritten.
pub(crate) fn write_full(file: &mut File, buf: &[u8], mode: WriteMode) -> io::Result<usize> {
    if buf.is_empty() {
        return Ok(0);
    }

    if mode == WriteMode::Diff && existing_matches(file, buf)? {
        return Ok(buf.len());
    }

    file.write_all(buf)?;
    Ok(buf.len())
}

/// Compares `buf` against the on-disk bytes at the current cursor.
///
/// On a match the cursor is left past the region (the read advanced it);
/// on a mismatch or short region the cursor is restored so the caller can
/// write in place.
fn existing_matches(file: &mut File, buf: &[u8]) -> io::Result<bool> {
    let start = file.stream_position()?;

    let mut existing = vec![0u8; buf.len()];
    let mut filled = 0;
    while filled < existing.len() {
        match file.read(&mut existing[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    if filled == buf.len() && existing == buf {
        Ok(true)
    } else {
        file.seek(SeekFrom::Start(start))?;
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_rw(path: &std::path::Path) -> File {
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .unwrap()
    }

    #[test]
    fn test_write_full_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("part");
        let mut file = open_rw(&path);

        let n = write_full(&mut file, b"hello world", WriteMode::Overwrite).unwrap();
        assert_eq!(n, 11);
        assert_eq!(std::fs::read(&path).unwrap(), b"hello world");
    }

    #[test]
    fn test_write_full_empty_buffer() {
        let dir = tempdir().unwrap();
        let mut file = open_rw(&dir.path().join("part"));

        assert_eq!(write_full(&mut file, b"", WriteMode::Overwrite).unwrap(), 0);
        assert_eq!(write_full(&mut file, b"", WriteMode::Diff).unwrap(), 0);
    }

    #[test]
    fn test_diff_skips_unchanged_region() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("part");
        std::fs::write(&path, b"unchanged").unwrap();

        let mut file = open_rw(&path);
        let n = write_full(&mut file, b"unchanged", WriteMode::Diff).unwrap();
        assert_eq!(n, 9);
        // Cursor advanced past the region even though nothing was written
        assert_eq!(file.stream_position().unwrap(), 9);
    }

    #[test]
    fn test_diff_rewrites_changed_region() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("part");
        std::fs::write(&path, b"old bytes").unwrap();

        let mut file = open_rw(&path);
        let n = write_full(&mut file, b"new bytes", WriteMode::Diff).unwrap();
        assert_eq!(n, 9);
        assert_eq!(std::fs::read(&path).unwrap(), b"new bytes");
        assert_eq!(file.stream_position().unwrap(), 9);
    }

    #[test]
    fn test_diff_writes_past_end_of_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("part");
        std::fs::write(&path, b"abc").unwrap();

        // On-disk region is shorter than the buffer, so it must be written
        let mut file = open_rw(&path);
        let n = write_full(&mut file, b"abcdef", WriteMode::Diff).unwrap();
        assert_eq!(n, 6);
        assert_eq!(std::fs::read(&path).unwrap(), b"abcdef");
    }
}
