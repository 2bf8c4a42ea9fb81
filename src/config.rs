//! Configuration for split output.

use std::path::{Path, PathBuf};

use crate::naming::SplitFormat;

/// Configuration for split output.
///
/// This struct defines the common filename prefix, the naming scheme for
/// part extensions, and the size threshold at which the writer rotates to
/// the next part.
///
/// # Example
///
/// ```rust
/// use splitout::{SplitConfig, SplitFormat};
///
/// // 2 GiB parts named image.dd.aaa, image.dd.aab, ...
/// let format = SplitFormat::parse("aaa")?;
/// let config = SplitConfig::new("image.dd", format, 2 * 1024 * 1024 * 1024);
///
/// assert_eq!(config.part_path(0).to_str().unwrap(), "image.dd.aaa");
/// assert_eq!(config.part_path(1).to_str().unwrap(), "image.dd.aab");
/// # Ok::<(), splitout::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Maximum size of each part in bytes (except possibly the last).
    part_size: u64,
    /// Common filename prefix for all parts (without extension).
    base: PathBuf,
    /// Naming scheme for part extensions.
    format: SplitFormat,
}

impl SplitConfig {
    /// Creates a new split configuration.
    ///
    /// # Arguments
    ///
    /// * `base` - Common prefix for part files (e.g. `"image.dd"`)
    /// * `format` - Naming scheme for part extensions
    /// * `part_size` - Maximum size of each part in bytes
    pub fn new(base: impl AsRef<Path>, format: SplitFormat, part_size: u64) -> Self {
        Self {
            part_size,
            base: base.as_ref().to_path_buf(),
            format,
        }
    }

    /// Returns the common filename prefix.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Returns the naming scheme.
    pub fn format(&self) -> &SplitFormat {
        &self.format
    }

    /// Returns the part size threshold in bytes.
    pub fn part_size(&self) -> u64 {
        self.part_size
    }

    /// Generates the path for a 0-based part index.
    ///
    /// Parts are named `<base>.<extension>` with the extension produced by
    /// the configured [`SplitFormat`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use splitout::{SplitConfig, SplitFormat};
    ///
    /// let config = SplitConfig::new("disk.img", SplitFormat::Win, 1024);
    /// assert_eq!(config.part_path(0).to_str().unwrap(), "disk.img.001");
    /// assert_eq!(config.part_path(9).to_str().unwrap(), "disk.img.010");
    /// ```
    pub fn part_path(&self, part_index: u64) -> PathBuf {
        let base = self.base.to_string_lossy();
        PathBuf::from(format!("{}.{}", base, self.format.extension(part_index)))
    }

    /// Creates a config for CD-sized parts (~650 MB).
    pub fn cd(base: impl AsRef<Path>, format: SplitFormat) -> Self {
        Self::new(base, format, 650 * 1024 * 1024)
    }

    /// Creates a config for DVD-sized parts (~4.7 GB).
    pub fn dvd(base: impl AsRef<Path>, format: SplitFormat) -> Self {
        Self::new(base, format, 4700 * 1024 * 1024)
    }

    /// Creates a config for FAT32-compatible parts (~4 GB).
    pub fn fat32(base: impl AsRef<Path>, format: SplitFormat) -> Self {
        // FAT32 max file size is 4 GB - 1 byte
        Self::new(base, format, 4 * 1024 * 1024 * 1024 - 1)
    }
}
