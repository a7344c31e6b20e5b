//! Fixed-capacity text storage for rendered versions.

use std::fmt;

/// Text buffer over `N` bytes of zeroed storage.
///
/// Writes truncate silently so content never exceeds `N - 1` bytes; the
/// final storage byte therefore always stays zero, and [`clear`] re-zeroes
/// the whole storage so no stale bytes survive a shorter write after a
/// longer one.
///
/// [`clear`]: Self::clear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> TextBuffer<N> {
    /// Empty buffer with fully zeroed storage.
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Number of content bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total storage size, including the reserved trailing zero byte.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Raw storage, zero padding included.
    pub const fn storage(&self) -> &[u8; N] {
        &self.bytes
    }

    /// Content as text.
    pub fn as_str(&self) -> &str {
        // push_str never cuts inside a multi-byte character, so the
        // content range is always valid UTF-8
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or("")
    }

    /// Re-zeroes the entire storage and resets the length.
    pub fn clear(&mut self) {
        self.bytes = [0; N];
        self.len = 0;
    }

    /// Appends `s`, truncating so total content stays within `N - 1`
    /// bytes. Truncation backs off to a character boundary. Returns the
    /// number of bytes actually written.
    pub fn push_str(&mut self, s: &str) -> usize {
        let available = N.saturating_sub(1).saturating_sub(self.len);
        let mut take = s.len().min(available);
        while take > 0 && !s.is_char_boundary(take) {
            take -= 1;
        }
        self.bytes[self.len..self.len + take].copy_from_slice(&s.as_bytes()[..take]);
        self.len += take;
        take
    }
}

impl<const N: usize> Default for TextBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for TextBuffer<N> {
    // Truncating sink: overflow is dropped, not reported.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Display for TextBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> AsRef<str> for TextBuffer<N> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
