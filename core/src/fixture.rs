//! Shared benchmark fixture data.
//!
//! The fixture is constructed once at startup and passed by `Arc` into the
//! workloads that need common input, instead of living in lazily initialized
//! process-wide state.

const MATCH_TEXT_LEN: usize = 1 << 18;
const DIGITS_LEN: usize = 1 << 18;
const MARKUP_UNIT: &str = "AAAAA < BBBBB > CCCCC & DDDDD ' EEEEE \" ";
const MARKUP_REPEAT: usize = 10_000;

/// Deterministic input buffers shared across benchmark setups.
pub struct TextFixture {
    text: Vec<u8>,
    digits: Vec<u8>,
    markup: String,
}

impl TextFixture {
    pub fn new() -> Self {
        Self {
            text: synthetic_text(MATCH_TEXT_LEN),
            digits: synthetic_digits(DIGITS_LEN),
            markup: MARKUP_UNIT.repeat(MARKUP_REPEAT),
        }
    }

    /// Fixture over caller-supplied scan text, for exercising the scan
    /// payloads against known-bad input.
    #[cfg(test)]
    pub(crate) fn with_text(text: Vec<u8>) -> Self {
        Self { text, digits: Vec::new(), markup: String::new() }
    }

    /// 256 KiB of deterministic printable text for scan payloads.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// 256 KiB of deterministic decimal digits. A much lower-entropy corpus
    /// than [`text`](Self::text), so the compression payloads cover both
    /// ends of the compressibility range.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Repetitive markup sample for the escaping payloads.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

impl Default for TextFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Fill `n` bytes with printable ASCII and a newline roughly every 31 bytes.
///
/// The generator is a fixed bit-twiddling sequence, so every run on every
/// host scans identical input and the scan payloads stay comparable.
pub fn synthetic_text(n: usize) -> Vec<u8> {
    let mut out = vec![0u8; n];
    let mut x: u32 = u32::MAX;
    for byte in out.iter_mut() {
        x = x.wrapping_add(x);
        x ^= 1;
        if (x as i32) < 0 {
            x ^= 0x8888_8eef;
        }
        *byte = if x % 31 == 0 {
            b'\n'
        } else {
            (x % (0x7e + 1 - 0x20) + 0x20) as u8
        };
    }
    out
}

/// Fill `n` bytes with decimal digits from the same bit-twiddling sequence
/// as [`synthetic_text`]. Ten symbols instead of ninety-five, so the buffer
/// compresses far better than the printable text.
pub fn synthetic_digits(n: usize) -> Vec<u8> {
    let mut out = vec![0u8; n];
    let mut x: u32 = u32::MAX;
    for byte in out.iter_mut() {
        x = x.wrapping_add(x);
        x ^= 1;
        if (x as i32) < 0 {
            x ^= 0x8888_8eef;
        }
        *byte = b'0' + (x % 10) as u8;
    }
    out
}
