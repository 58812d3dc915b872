use std::fmt::{self, Write};

/// Largest index `<= max` that falls on a char boundary of `s`.
pub fn floor_char_boundary(s: &str, max: usize) -> usize {
    if s.len() <= max {
        return s.len();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    end
}

/// Inline string holding at most `N` bytes.
///
/// Longer input is cut on a char boundary, so two inputs sharing their first
/// `N` bytes compare equal once stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedStr<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> FixedStr<N> {
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    pub fn truncated(s: &str) -> Self {
        let len = floor_char_boundary(s, N);
        let mut bytes = [0; N];
        bytes[..len].copy_from_slice(&s.as_bytes()[..len]);
        Self { bytes, len }
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes[..self.len]).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Compares against `other` as if `other` had been stored.
    pub fn matches(&self, other: &str) -> bool {
        self.as_str() == &other[..floor_char_boundary(other, N)]
    }
}

impl<const N: usize> Default for FixedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for FixedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `fmt::Write` sink that keeps at most `limit` bytes and drops the rest.
pub struct BoundedWriter {
    buffer: String,
    limit: usize,
    truncated: bool,
}

impl BoundedWriter {
    pub fn new(limit: usize) -> Self {
        Self {
            buffer: String::with_capacity(limit.min(1024)),
            limit,
            truncated: false,
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = self.limit.saturating_sub(self.buffer.len());
        let to_copy = floor_char_boundary(s, remaining);
        self.buffer.push_str(&s[..to_copy]);
        if to_copy < s.len() {
            self.truncated = true;
        }
        Ok(())
    }
}

/// Renders `args` into a string of at most `buffer_size - 1` bytes, the same
/// room a NUL-terminated buffer of `buffer_size` bytes leaves for text.
pub fn format_message(args: fmt::Arguments<'_>, buffer_size: usize) -> String {
    if let Some(s) = args.as_str()
        && s.len() < buffer_size
    {
        return s.to_string();
    }
    let mut writer = BoundedWriter::new(buffer_size.saturating_sub(1));
    let _ = writer.write_fmt(args);
    writer.into_string()
}
