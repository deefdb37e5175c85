//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect end-of-input without explicit bounds
//! checking. The total buffer size is rounded up to the next 64-byte
//! boundary for cache-line alignment, which also provides safe padding for
//! reads near the end of the buffer.
//!
//! # Loader Contract
//!
//! The buffer is built from an already-loaded `&str`. Reading a file into
//! memory is the loader's job (see `zincc`); this crate only ever receives
//! a valid, null-free source string. The buffer owns its padded copy for
//! the lexer's entire lifetime; the [`Cursor`] borrows from it.

use crate::token::Span;
use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer for zero-bounds-check scanning.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`, and the scanner's
/// start state classifies `0x00` as end-of-input (Zinc source is null-free
/// by the loader contract, so no interior byte can be mistaken for it).
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source text.
    ///
    /// Copies the source bytes into a cache-line-aligned buffer with a
    /// `0x00` sentinel byte appended.
    ///
    /// # File Size
    ///
    /// Sources larger than `u32::MAX` bytes (~4 GiB) are accepted but
    /// `source_len` saturates at `u32::MAX`; the loader rejects oversized
    /// files upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled buffer, then copy source bytes.
        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let source_len = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source as `&str`.
    pub fn as_str(&self) -> &str {
        // The buffer was constructed from `&str`; this cannot fail.
        std::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0, line 1.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// The full source line containing a span's first byte.
    ///
    /// Scans backwards and forwards from `span.start` to the enclosing
    /// newline bytes (excluded from the result). Used by diagnostic
    /// rendering to show the offending line under an error message.
    pub fn line_text(&self, span: Span) -> &str {
        let bytes = self.as_bytes();
        let anchor = (span.start as usize).min(bytes.len());
        let line_start = memchr::memrchr(b'\n', &bytes[..anchor]).map_or(0, |i| i + 1);
        let line_end = memchr::memchr(b'\n', &bytes[anchor..]).map_or(bytes.len(), |i| anchor + i);
        // Token spans always begin at character boundaries.
        std::str::from_utf8(&bytes[line_start..line_end]).unwrap_or("")
    }
}

/// Size assertion: `SourceBuffer` should be 32 bytes on 64-bit platforms.
/// Vec<u8> = 24, u32 = 4, + 4 padding = 32.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);
