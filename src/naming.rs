//! Part-extension generation for split output.
//!
//! Each part file is named `<base>.<extension>`, where the extension is
//! produced from the part index by a [`SplitFormat`]. A format is either a
//! positional pattern or one of two fixed conventions:
//!
//! - **Pattern** (e.g. `"aaa"`, `"nnn"`, `"a9"`): an odometer over the
//!   pattern's positions, rightmost position least significant. A position
//!   declared with the letter `a` counts through `a..z` (radix 26); every
//!   other character counts through `0..9` (radix 10). `"aaa"` yields
//!   `aaa`, `aab`, ... `aaz`, `aba`, ...; `"nnn"` yields `000`, `001`, ...
//! - **`MAC`**: Apple disk-image convention — `dmg` for the first part,
//!   then `001.dmgpart`, `002.dmgpart`, ...
//! - **`WIN`**: a plain 3-digit counter starting at `001`.
//!
//! The mapping is pure: it opens no files and holds no state.

use crate::{Error, Result};

/// Alphabet for letter positions (`a` = 0 ... `z` = 25).
const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
/// Alphabet for digit positions.
const DIGITS: &[u8; 10] = b"0123456789";

/// Naming scheme for split part extensions.
///
/// Parse one from the user-facing spec string with [`SplitFormat::parse`],
/// then render extensions with [`extension`](SplitFormat::extension).
///
/// # Example
///
/// ```rust
/// use splitout::SplitFormat;
///
/// let format = SplitFormat::parse("aa")?;
/// assert_eq!(format.extension(0), "aa");
/// assert_eq!(format.extension(26), "ba");
/// assert_eq!(format.max_parts(), 676);
/// # Ok::<(), splitout::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitFormat {
    /// Apple disk-image naming: `dmg`, then `NNN.dmgpart`.
    Mac,
    /// 3-digit decimal counter starting at `001`.
    Win,
    /// Positional mixed-radix pattern (see module docs).
    Pattern(String),
}

impl SplitFormat {
    /// Parses a format spec string.
    ///
    /// The sentinels `"MAC"` and `"WIN"` select the fixed conventions;
    /// anything else is a positional pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyFormat`] for an empty pattern, which could
    /// never name a single part.
    pub fn parse(spec: &str) -> Result<Self> {
        match spec {
            "MAC" => Ok(Self::Mac),
            "WIN" => Ok(Self::Win),
            "" => Err(Error::EmptyFormat),
            _ => Ok(Self::Pattern(spec.to_string())),
        }
    }

    /// Renders the extension for a 0-based part index.
    ///
    /// For patterns the result always has exactly as many characters as
    /// the pattern. Indices at or beyond [`max_parts`](Self::max_parts)
    /// wrap in the most significant position; [`SplitWriter`] rejects
    /// them before they get here.
    ///
    /// [`SplitWriter`]: crate::SplitWriter
    pub fn extension(&self, part_index: u64) -> String {
        match self {
            Self::Mac => {
                if part_index == 0 {
                    "dmg".to_string()
                } else {
                    format!("{:03}.dmgpart", part_index)
                }
            }
            Self::Win => format!("{:03}", part_index + 1),
            Self::Pattern(pattern) => {
                // Fill positions right to left, dividing the index down
                // by each position's radix as the odometer carries.
                let mut num = part_index;
                let mut reversed = String::with_capacity(pattern.len());
                for ch in pattern.chars().rev() {
                    if ch == 'a' {
                        reversed.push(LETTERS[(num % 26) as usize] as char);
                        num /= 26;
                    } else {
                        reversed.push(DIGITS[(num % 10) as usize] as char);
                        num /= 10;
                    }
                }
                reversed.chars().rev().collect()
            }
        }
    }

    /// Returns the maximum number of parts this format can name without
    /// aliasing.
    ///
    /// For patterns this is the product of each position's radix (26 for
    /// `a` positions, 10 otherwise), saturating at `u64::MAX` for absurdly
    /// long patterns. The fixed conventions are bounded by their 3-digit
    /// counter: `MAC` names 1000 parts (`dmg` plus `001.dmgpart` through
    /// `999.dmgpart`), `WIN` names 999 (`001` through `999`).
    ///
    /// Callers validating a requested split count up front should compare
    /// against this value.
    pub fn max_parts(&self) -> u64 {
        match self {
            Self::Mac => 1000,
            Self::Win => 999,
            Self::Pattern(pattern) => pattern
                .chars()
                .map(|ch| if ch == 'a' { 26u64 } else { 10u64 })
                .fold(1u64, u64::saturating_mul),
        }
    }
}

impl std::fmt::Display for SplitFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mac => write!(f, "MAC"),
            Self::Win => write!(f, "WIN"),
            Self::Pattern(pattern) => write!(f, "{}", pattern),
        }
    }
}
