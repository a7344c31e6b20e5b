//! Canonical text form: `MAJOR.MINOR.PATCH[-TAG[.N]]`.
//!
//! - [`encode`] / [`encode_into`] — render into fixed-capacity buffers,
//!   truncating silently, never panicking.
//! - [`decode`] — lenient scan that always yields a fully-formed
//!   [`Version`].
//! - `Display` for [`Version`] runs through the same writer, so
//!   `to_string()` and [`encode`] always agree.
//!
//! Everything here is stack-local; repeated and concurrent calls cannot
//! observe each other's intermediate state.

use std::fmt::{self, Write};

use crate::buffer::TextBuffer;
use crate::version::{PreReleaseKind, Version};

/// Storage that fits the widest rendering,
/// `65535.65535.65535-betha.65535` (29 characters), plus the reserved
/// trailing zero byte.
pub const TEXT_CAPACITY: usize = 30;

/// Buffer sized for any rendered version.
pub type VersionText = TextBuffer<TEXT_CAPACITY>;

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Renders `version` into a fresh default-capacity buffer.
pub fn encode(version: &Version) -> VersionText {
    let mut out = VersionText::new();
    encode_into(version, &mut out);
    out
}

/// Renders `version` into `out`, whose capacity the caller chooses.
///
/// The buffer is fully re-zeroed first; output beyond the capacity is
/// truncated silently, keeping the final storage byte zero.
pub fn encode_into<const N: usize>(version: &Version, out: &mut TextBuffer<N>) {
    out.clear();
    // the TextBuffer sink never errors; overflow is truncated
    let _ = write_canonical(version, out);
}

fn write_canonical<W: Write>(version: &Version, out: &mut W) -> fmt::Result {
    write!(out, "{}.{}.{}", version.major, version.minor, version.patch)?;
    write_pre_release(version.pre_release, version.pre_release_version, out)
}

/// Streams the pre-release suffix: nothing for `None` (the stage number is
/// ignored outright), otherwise `-TAG`, with `.N` appended only when the
/// stage number is non-zero.
fn write_pre_release<W: Write>(kind: PreReleaseKind, n: u16, out: &mut W) -> fmt::Result {
    if kind == PreReleaseKind::None {
        return Ok(());
    }
    write!(out, "-{}", kind.token())?;
    if n > 0 {
        write!(out, ".{}", n)?;
    }
    Ok(())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(self, f)
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Longest tag token the scanner looks at; longer runs are cut here before
/// the vocabulary lookup.
const TAG_SCAN_LIMIT: usize = 5;

/// Lenient decode of the canonical form.
///
/// Never fails. Fields scan left to right and the first structural
/// mismatch (missing separator, empty or out-of-range number, empty tag)
/// stops the scan, leaving every remaining field at 0 / `None`:
/// `"1.2.3"` gives `{1,2,3,None,0}`, `"not-a-version"` gives
/// `{0,0,0,None,0}`. An unrecognized tag keeps the kind at `None`, but a
/// trailing `.N` still fills the stage number. Trailing garbage after a
/// successfully scanned prefix is ignored. Callers cannot distinguish a
/// genuinely absent field from a malformed one.
pub fn decode(text: &str) -> Version {
    let mut version = Version::new(0, 0, 0);
    let mut input = text;

    let Some(major) = scan_number(&mut input) else {
        return version;
    };
    version.major = major;
    if !scan_literal(&mut input, '.') {
        return version;
    }
    let Some(minor) = scan_number(&mut input) else {
        return version;
    };
    version.minor = minor;
    if !scan_literal(&mut input, '.') {
        return version;
    }
    let Some(patch) = scan_number(&mut input) else {
        return version;
    };
    version.patch = patch;

    if !scan_literal(&mut input, '-') {
        return version;
    }
    let token = scan_tag(&mut input);
    if token.is_empty() {
        return version;
    }
    version.pre_release = PreReleaseKind::from_token(token);
    if !scan_literal(&mut input, '.') {
        return version;
    }
    if let Some(n) = scan_number(&mut input) {
        version.pre_release_version = n;
    }
    version
}

/// Consumes a leading ASCII digit run and parses it as `u16`. `None` when
/// no digit is present or the value does not fit the field.
fn scan_number(input: &mut &str) -> Option<u16> {
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    if end == 0 {
        return None;
    }
    let (digits, rest) = input.split_at(end);
    *input = rest;
    digits.parse().ok()
}

/// Consumes `expected` if it is the next character.
fn scan_literal(input: &mut &str, expected: char) -> bool {
    match input.strip_prefix(expected) {
        Some(rest) => {
            *input = rest;
            true
        }
        None => false,
    }
}

/// Consumes the tag token: at most [`TAG_SCAN_LIMIT`] characters, stopping
/// early at `.` or end of input.
fn scan_tag<'a>(input: &mut &'a str) -> &'a str {
    let mut end = input.len();
    for (count, (idx, ch)) in input.char_indices().enumerate() {
        if ch == '.' || count == TAG_SCAN_LIMIT {
            end = idx;
            break;
        }
    }
    let (token, rest) = input.split_at(end);
    *input = rest;
    token
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
