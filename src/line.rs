//! Fixed-width text records, as handed over by a line sorting front end.
//!
//! A line holds at most [`MAX_LINE_LEN`] bytes including its newline and a `\0`
//! terminator. Comparison is byte-wise and stops at the terminator.

use std::cmp::Ordering;
use std::fmt;

/// Maximum record width: 60 payload bytes, the newline and the terminator.
pub const MAX_LINE_LEN: usize = 60 + 1 + 1;

/// Compares two NUL-terminated lines byte by byte.
///
/// Looks at no more than [`MAX_LINE_LEN`] positions. A position past the end of
/// a slice reads as `\0`, and the comparison ends at the first position where both
/// lines are terminated.
///
/// ```
/// use heapsort_kit::line::compare_lines;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_lines(b"apple\n", b"banana\n"), Ordering::Less);
/// assert_eq!(compare_lines(b"same\0junk", b"same\0other"), Ordering::Equal);
/// assert_eq!(compare_lines(b"ab", b"abc"), Ordering::Less);
/// ```
pub fn compare_lines(a: &[u8], b: &[u8]) -> Ordering {
    for idx in 0..MAX_LINE_LEN {
        let x = a.get(idx).copied().unwrap_or(0);
        let y = b.get(idx).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal if x == 0 => break,
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// A fixed-width, always-terminated line record.
///
/// Records are `Copy`, so moving one is the same byte copy the sorting routines
/// perform on any other element type.
///
/// ```
/// use heapsort_kit::line::Line;
///
/// let mut lines = vec![Line::new(b"pear\n"), Line::new(b"apple\n")];
/// lines.sort();
/// assert_eq!(lines[0].as_bytes(), b"apple\n");
/// ```
#[derive(Clone, Copy)]
pub struct Line {
    bytes: [u8; MAX_LINE_LEN],
}

impl Line {
    /// Builds a record from raw bytes, keeping at most `MAX_LINE_LEN - 1` of them.
    pub fn new(src: &[u8]) -> Self {
        let mut bytes = [0u8; MAX_LINE_LEN];
        let len = src.len().min(MAX_LINE_LEN - 1);
        bytes[..len].copy_from_slice(&src[..len]);
        Line { bytes }
    }

    /// The bytes before the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(MAX_LINE_LEN);
        &self.bytes[..end]
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes[0] == 0
    }
}

impl Default for Line {
    fn default() -> Self {
        Line {
            bytes: [0; MAX_LINE_LEN],
        }
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line::new(s.as_bytes())
    }
}

impl AsRef<[u8]> for Line {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// Bytes after the terminator are ignored by every comparison.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Line {}

impl PartialOrd for Line {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Line {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_lines(&self.bytes, &other.bytes)
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}
