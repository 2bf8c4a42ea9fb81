//! Split-output writer that rotates across size-limited part files.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::sink::{WriteMode, write_full};
use crate::{Error, Result, SplitConfig};

/// A writer that automatically splits output across multiple part files.
///
/// The writer opens no file until the first write. Once the current part
/// reaches the configured size threshold, the next write closes it, opens
/// the next part in the naming sequence, and continues there — a single
/// oversized write may fan out across many parts.
///
/// Exactly one part file is open at a time. On rotation the successor is
/// opened before the predecessor is dropped, and the final part is closed
/// when the writer is dropped or [`finish`](Self::finish)ed.
///
/// # Example
///
/// ```rust,no_run
/// use splitout::{SplitConfig, SplitFormat, SplitWriter, WriteMode};
///
/// let format = SplitFormat::parse("nnn")?;
/// let config = SplitConfig::new("image.dd", format, 2 * 1024 * 1024 * 1024);
/// let mut writer = SplitWriter::create(config)?;
///
/// // Write data - automatically splits across image.dd.000, image.dd.001, ...
/// let data = vec![0u8; 1 << 20];
/// let written = writer.write_split(&data, WriteMode::Overwrite)?;
/// assert_eq!(written, data.len() as u64);
///
/// let sizes = writer.finish()?;
/// println!("Created {} parts", sizes.len());
/// # Ok::<(), splitout::Error>(())
/// ```
pub struct SplitWriter {
    /// Configuration for part naming and sizing.
    config: SplitConfig,
    /// Currently open part file, if any. None until the first write.
    current: Option<File>,
    /// Bytes written to the current part.
    part_written: u64,
    /// Total bytes written across all parts.
    total_written: u64,
    /// Sizes of completed parts.
    completed_sizes: Vec<u64>,
}

impl SplitWriter {
    /// Creates a new split writer.
    ///
    /// No part file is opened yet; the first write opens the first part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroPartSize`] if the configured threshold is 0.
    pub fn create(config: SplitConfig) -> Result<Self> {
        if config.part_size() == 0 {
            return Err(Error::ZeroPartSize);
        }

        Ok(Self {
            config,
            current: None,
            part_written: 0,
            total_written: 0,
            completed_sizes: Vec::new(),
        })
    }

    /// Opens the next part file in the naming sequence.
    ///
    /// The part index is derived from the total byte count, so rotation
    /// depends only on overall progress. The previous part is closed only
    /// after the successor opens; on failure all counters and the open
    /// handle are left untouched.
    fn open_next_part(&mut self) -> Result<()> {
        let index = self.total_written / self.config.part_size();
        let max = self.config.format().max_parts();
        if index >= max {
            return Err(Error::PartLimitExceeded {
                parts: index + 1,
                max,
                format: self.config.format().to_string(),
            });
        }

        let path = self.config.part_path(index);
        log::debug!("opening split part {} at {}", index, path.display());

        let file = open_part(&path).map_err(|e| {
            log::warn!("failed to open split part {}: {}", path.display(), e);
            Error::Io(io::Error::new(
                e.kind(),
                format!("Failed to open part {}: {}", path.display(), e),
            ))
        })?;

        if self.current.take().is_some() {
            self.completed_sizes.push(self.part_written);
        }
        self.current = Some(file);
        self.part_written = 0;

        Ok(())
    }

    /// Writes the whole buffer, rotating across part boundaries as needed.
    ///
    /// Returns the total number of bytes written across every part touched
    /// by this call, which on success equals `buf.len()`. An empty buffer
    /// still triggers rotation when the current part is exactly full (or
    /// no part is open yet), without writing anything.
    ///
    /// `mode` is passed through to the byte sink unchanged; see
    /// [`WriteMode`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a part cannot be opened or written, and
    /// [`Error::PartLimitExceeded`] if rotation would run past what the
    /// naming scheme can represent. After an error the byte counters
    /// still reflect every byte confirmed written, queryable via
    /// [`total_written`](Self::total_written).
    pub fn write_split(&mut self, buf: &[u8], mode: WriteMode) -> Result<u64> {
        let mut written = 0u64;
        let mut rest = buf;

        loop {
            if self.current.is_none() || self.part_written == self.config.part_size() {
                self.open_next_part()?;
            }

            let remaining = self.config.part_size() - self.part_written;
            let take = if (rest.len() as u64) <= remaining {
                rest.len()
            } else {
                remaining as usize
            };

            let file = self.current.as_mut().ok_or_else(no_part_open)?;
            let n = write_full(file, &rest[..take], mode)?;
            self.part_written += n as u64;
            self.total_written += n as u64;
            written += n as u64;
            rest = &rest[n..];

            if rest.is_empty() {
                return Ok(written);
            }
        }
    }

    /// Returns the total bytes written across all parts.
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Returns the bytes written to the current part.
    pub fn part_written(&self) -> u64 {
        self.part_written
    }

    /// Returns the remaining capacity of the current part.
    pub fn remaining_in_part(&self) -> u64 {
        self.config.part_size().saturating_sub(self.part_written)
    }

    /// Returns the 0-based index of the currently open part, or `None`
    /// before the first write.
    pub fn current_part_index(&self) -> Option<u64> {
        self.current.as_ref()?;
        Some((self.total_written - self.part_written) / self.config.part_size())
    }

    /// Returns the path of the currently open part, or `None` before the
    /// first write.
    pub fn current_part_path(&self) -> Option<PathBuf> {
        Some(self.config.part_path(self.current_part_index()?))
    }

    /// Returns the number of parts opened so far.
    pub fn part_count(&self) -> u64 {
        self.completed_sizes.len() as u64 + u64::from(self.current.is_some())
    }

    /// Returns the sizes of all completed parts.
    pub fn completed_sizes(&self) -> &[u64] {
        &self.completed_sizes
    }

    /// Returns the configuration this writer was created with.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Finishes writing and returns the size of each part in bytes.
    ///
    /// This flushes and closes the final part file.
    pub fn finish(mut self) -> Result<Vec<u64>> {
        if let Some(mut file) = self.current.take() {
            file.flush()?;
            self.completed_sizes.push(self.part_written);
        }

        Ok(std::mem::take(&mut self.completed_sizes))
    }
}

/// The split writer rotates at part boundaries, so `write` may return a
/// count short of `buf.len()` when the buffer crosses one; looping callers
/// such as [`Write::write_all`] and [`io::copy`] compose correctly.
///
/// This impl always writes unconditionally; use
/// [`write_split`](SplitWriter::write_split) for diff mode.
impl Write for SplitWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.current.is_none() || self.part_written == self.config.part_size() {
            self.open_next_part().map_err(io::Error::other)?;
        }

        let remaining = self.config.part_size() - self.part_written;
        let take = if (buf.len() as u64) <= remaining {
            buf.len()
        } else {
            remaining as usize
        };

        let file = self.current.as_mut().ok_or_else(no_part_open)?;
        let n = file.write(&buf[..take])?;
        self.part_written += n as u64;
        self.total_written += n as u64;

        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(file) = self.current.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for SplitWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitWriter")
            .field("config", &self.config)
            .field("part_open", &self.current.is_some())
            .field("part_written", &self.part_written)
            .field("total_written", &self.total_written)
            .field("completed_parts", &self.completed_sizes.len())
            .finish()
    }
}

fn no_part_open() -> io::Error {
    io::Error::other("no part file open")
}

/// Opens a part file for writing, creating it if absent.
///
/// The file is not truncated (re-runs in diff mode compare against the
/// existing contents) and is opened readable for those comparisons. On
/// Unix the permission bits are 0666, subject to the process umask.
#[cfg(unix)]
fn open_part(path: &Path) -> io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .mode(0o666)
        .open(path)
}

#[cfg(not(unix))]
fn open_part(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
}
