//! Code point decoding for line break analysis
//!
//! Text reaches the analyzer either as UTF-8 (`str`) or as raw UTF-16
//! units (`[u16]`). Both are decoded into the same [`CodePoint`] stream so
//! the rest of the pipeline never sees storage details.

use std::ops::Range;

use super::types::CodePoint;

/// Text representation the analyzer can decode and slice
pub trait TextSource {
    /// Decode into logical code points with their storage-unit spans
    fn decode(&self) -> Vec<CodePoint>;

    /// Length in storage units
    fn unit_len(&self) -> usize;

    /// Sub-slice by storage-unit range; ranges come from [`TextSource::decode`]
    fn slice(&self, range: Range<usize>) -> &Self;
}

impl TextSource for str {
    fn decode(&self) -> Vec<CodePoint> {
        self.char_indices()
            .map(|(offset, ch)| CodePoint {
                value: ch as u32,
                offset,
                length: ch.len_utf8(),
            })
            .collect()
    }

    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

impl TextSource for [u16] {
    /// Surrogate pairs merge into one code point; unpaired surrogates are
    /// kept as their own code point carrying the raw unit value.
    fn decode(&self) -> Vec<CodePoint> {
        let mut code_points = Vec::with_capacity(self.len());
        let mut offset = 0;

        for decoded in char::decode_utf16(self.iter().copied()) {
            let (value, length) = match decoded {
                Ok(ch) => (ch as u32, ch.len_utf16()),
                Err(err) => (u32::from(err.unpaired_surrogate()), 1),
            };
            code_points.push(CodePoint {
                value,
                offset,
                length,
            });
            offset += length;
        }

        code_points
    }

    #[inline]
    fn unit_len(&self) -> usize {
        self.len()
    }

    #[inline]
    fn slice(&self, range: Range<usize>) -> &Self {
        &self[range]
    }
}

/// Decode any supported text into code points
pub fn decode<S: TextSource + ?Sized>(text: &S) -> Vec<CodePoint> {
    text.decode()
}
