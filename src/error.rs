//! Error types for split-file output.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when writing split output, along with a convenient
//! [`Result<T>`] type alias.
//!
//! All fallible operations in this crate return `Result<T, Error>`. Handle
//! errors with pattern matching or the `?` operator:
//!
//! ```rust,no_run
//! use splitout::{SplitConfig, SplitFormat, SplitWriter, WriteMode, Result};
//!
//! fn copy_out(data: &[u8]) -> Result<u64> {
//!     let format = SplitFormat::parse("nnn")?;
//!     let config = SplitConfig::new("image.dd", format, 2 * 1024 * 1024 * 1024);
//!     let mut writer = SplitWriter::create(config)?;
//!     writer.write_split(data, WriteMode::Overwrite)
//! }
//! ```

use std::io;

/// The main error type for split-output operations.
///
/// Configuration problems are caught up front (when parsing the format
/// spec or creating the writer); everything that can fail afterwards is
/// an I/O error on a part file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred while opening or writing a part file.
    ///
    /// This wraps [`std::io::Error`]. Open failures carry the part path in
    /// the error message. Common causes include permission problems, a
    /// full disk, or an invalid base path.
    ///
    /// There is no retry and no partial-success return: a part that cannot
    /// be opened ends the run, and the writer's byte counters reflect only
    /// bytes confirmed written before the failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The format spec is an empty string.
    ///
    /// A split format must have at least one position (or be one of the
    /// `MAC`/`WIN` sentinels).
    #[error("Split format spec must not be empty")]
    EmptyFormat,

    /// The configured part size is zero.
    ///
    /// A zero threshold would force a rotation before every byte and can
    /// never make progress.
    #[error("Split part size must be greater than zero")]
    ZeroPartSize,

    /// The output grew past what the naming scheme can represent.
    ///
    /// Each format spec can only render a bounded number of distinct part
    /// names (see [`SplitFormat::max_parts`]). Writing past that bound
    /// would silently alias earlier part names, so it is rejected instead.
    ///
    /// [`SplitFormat::max_parts`]: crate::SplitFormat::max_parts
    #[error("Split format '{format}' cannot name part {parts} (max {max} parts)")]
    PartLimitExceeded {
        /// The part count the write would have required.
        parts: u64,
        /// The maximum part count the format can name.
        max: u64,
        /// The format spec, as given.
        format: String,
    },
}

/// A specialized Result type for split-output operations.
///
/// This is defined as `std::result::Result<T, Error>` for convenience.
pub type Result<T> = std::result::Result<T, Error>;
