//! Relver Core
//!
//! Release-version value type with a bounded canonical text codec.
//!
//! - [`Version`] — the ordered tuple {major, minor, patch, pre-release
//!   kind, pre-release number} with value equality and the historical
//!   first-excess comparison scan.
//! - [`codec`] — the canonical text form `MAJOR.MINOR.PATCH[-TAG[.N]]`:
//!   bounded, truncating rendering and lenient, total decoding.
//! - [`TextBuffer`] — the zero-backed fixed-capacity storage the codec
//!   writes into.

pub mod buffer;
pub mod codec;
pub mod version;

pub use buffer::TextBuffer;
pub use codec::{decode, encode, encode_into, VersionText, TEXT_CAPACITY};
pub use version::{PreReleaseKind, Version};
