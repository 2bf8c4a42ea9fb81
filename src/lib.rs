//! # splitout
//!
//! Split-file output for disk/image-copy pipelines.
//!
//! This crate transparently rotates the destination of a logical byte
//! stream across a sequence of physically separate part files once a
//! configured size threshold is reached, naming each successive file via a
//! configurable numbering scheme. It is the output side of an imaging
//! tool: the caller's copy loop supplies bytes, this crate decides which
//! part file they land in.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splitout::{SplitConfig, SplitFormat, SplitWriter, WriteMode, Result};
//!
//! fn main() -> Result<()> {
//!     // Parts named image.dd.000, image.dd.001, ... of 2 GiB each
//!     let format = SplitFormat::parse("nnn")?;
//!     let config = SplitConfig::new("image.dd", format, 2 * 1024 * 1024 * 1024);
//!     let mut writer = SplitWriter::create(config)?;
//!
//!     // The copy loop feeds buffers; rotation is automatic, and a single
//!     // oversized buffer may fan out across several parts
//!     let block = vec![0u8; 32768];
//!     writer.write_split(&block, WriteMode::Overwrite)?;
//!
//!     let sizes = writer.finish()?;
//!     println!("wrote {} parts", sizes.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Naming Schemes
//!
//! Part extensions come from a format spec string (see [`SplitFormat`]):
//!
//! | Spec | Parts |
//! |------|-------|
//! | `"nnn"` | `image.dd.000`, `image.dd.001`, ... |
//! | `"aa"` | `image.dd.aa`, `image.dd.ab`, ... `image.dd.zz` |
//! | `"a9"` | `image.dd.a0` ... `image.dd.a9`, `image.dd.b0`, ... |
//! | `"WIN"` | `image.dd.001`, `image.dd.002`, ... |
//! | `"MAC"` | `image.dd.dmg`, `image.dd.001.dmgpart`, ... |
//!
//! Pattern specs count like an odometer whose wheels have per-position
//! bases: an `a` position cycles through 26 letters, any other character
//! through 10 digits. [`SplitFormat::max_parts`] gives the number of parts
//! a spec can name; the writer refuses to rotate past it rather than alias
//! earlier part names.
//!
//! ## Scope
//!
//! The crate is a single-stream, single-writer sequencer. It does not
//! decide when copying stops, does not read input, and does not manage
//! concurrent writers. Every operation is a direct blocking call; the one
//! open part file is closed when its successor opens and the last one when
//! the writer is dropped.

pub mod config;
pub mod error;
pub mod naming;
pub mod sink;
pub mod writer;

pub use config::SplitConfig;
pub use error::{Error, Result};
pub use naming::SplitFormat;
pub use sink::WriteMode;
pub use writer::SplitWriter;
