//! Byte buffer represented as a sequence of big-endian 32-bit words plus a
//! significant-byte count.
//!
//! Block ciphers, block modes and padding schemes are naturally defined over
//! 32-bit words rather than raw bytes, so this is the common currency
//! between every layer of the cipher pipeline in this workspace: the
//! significant-byte count lets a buffer be "mostly full" (e.g. 13
//! significant bytes inside a 4-word/16-byte allocation) without the last
//! word's don't-care tail bytes disturbing anything that inspects whole
//! words.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod codec;

pub use codec::{Base64, Encoder, EncodingError, Hex};

use rand_core::{OsRng, RngCore};

/// A byte buffer stored as big-endian 32-bit words with an explicit
/// significant-byte length.
///
/// Bytes at index `>= sig_bytes` are don't-care filler; [`WordArray::clamp`]
/// zeroes them so that any code which reads whole words (rather than going
/// through [`WordArray::to_bytes`]) never observes stale data.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WordArray {
    words: Vec<u32>,
    sig_bytes: usize,
}

impl WordArray {
    /// Build a `WordArray` from raw words and an explicit significant-byte
    /// count.
    pub fn new(words: Vec<u32>, sig_bytes: usize) -> Self {
        let mut wa = Self { words, sig_bytes };
        wa.clamp();
        wa
    }

    /// An empty buffer.
    pub fn empty() -> Self {
        Self { words: Vec::new(), sig_bytes: 0 }
    }

    /// `n_bytes` bytes drawn from a cryptographically strong RNG.
    ///
    /// Used by [`OpenSSLKdf`](../cipher_core/struct.OpenSSLKdf.html) to mint
    /// a fresh salt.
    pub fn random(n_bytes: usize) -> Self {
        let mut bytes = vec![0u8; n_bytes];
        OsRng.fill_bytes(&mut bytes);
        Self::from_bytes(&bytes)
    }

    /// Interpret `bytes` as a big-endian word sequence.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut words = vec![0u32; bytes.len().div_ceil(4)];
        for (i, b) in bytes.iter().enumerate() {
            words[i / 4] |= (*b as u32) << (24 - 8 * (i % 4));
        }
        Self { words, sig_bytes: bytes.len() }
    }

    /// Number of significant bytes.
    pub fn sig_bytes(&self) -> usize {
        self.sig_bytes
    }

    /// Raw word storage (length `>= ceil(sig_bytes / 4)`; may have extra
    /// capacity beyond the significant byte count).
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Mutable access to the raw word storage, e.g. so a block mode can
    /// transform a block in place at a given word offset.
    pub fn words_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }

    /// Zero every byte at index `>= sig_bytes` within the allocated words.
    pub fn clamp(&mut self) {
        let n_words = self.sig_bytes.div_ceil(4);
        self.words.truncate(n_words);
        self.words.resize(n_words, 0);
        if self.sig_bytes % 4 != 0 {
            let last = self.words.len() - 1;
            let keep_bits = 8 * (self.sig_bytes % 4);
            self.words[last] &= !0u32 << (32 - keep_bits);
        }
    }

    /// Append `other` to the end of `self`, consuming `other`.
    pub fn concat(&mut self, other: &WordArray) {
        self.clamp();
        let base = self.sig_bytes;
        self.words.resize((base + other.sig_bytes).div_ceil(4).max(self.words.len()), 0);
        for i in 0..other.sig_bytes {
            let byte = (other.words[i / 4] >> (24 - 8 * (i % 4))) as u8;
            let dst_bit = base + i;
            let word_idx = dst_bit / 4;
            self.words[word_idx] |= (byte as u32) << (24 - 8 * (dst_bit % 4));
        }
        self.sig_bytes += other.sig_bytes;
    }

    /// Return a new `WordArray` that is the concatenation of `self` and
    /// `other`, without mutating either.
    pub fn concatenated(&self, other: &WordArray) -> WordArray {
        let mut out = self.clone();
        out.concat(other);
        out
    }

    /// Take the first `n_bytes` significant bytes as a new `WordArray`,
    /// leaving `self` untouched.
    pub fn head(&self, n_bytes: usize) -> WordArray {
        let n_bytes = n_bytes.min(self.sig_bytes);
        let n_words = n_bytes.div_ceil(4);
        WordArray::new(self.words[..n_words].to_vec(), n_bytes)
    }

    /// Remove the first `n_words` words (and `n_bytes` significant bytes)
    /// from the front of `self`.
    pub fn drain_words(&mut self, n_words: usize, n_bytes: usize) {
        self.words.drain(..n_words);
        self.sig_bytes = self.sig_bytes.saturating_sub(n_bytes);
    }

    /// Render to a plain byte vector, dropping any don't-care tail.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.sig_bytes);
        for i in 0..self.sig_bytes {
            out.push((self.words[i / 4] >> (24 - 8 * (i % 4))) as u8);
        }
        out
    }
}

impl From<&[u8]> for WordArray {
    fn from(bytes: &[u8]) -> Self {
        WordArray::from_bytes(bytes)
    }
}

impl From<Vec<u8>> for WordArray {
    fn from(bytes: Vec<u8>) -> Self {
        WordArray::from_bytes(&bytes)
    }
}

impl From<&str> for WordArray {
    fn from(s: &str) -> Self {
        WordArray::from_bytes(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_arbitrary_lengths() {
        for n in 0..20 {
            let bytes: Vec<u8> = (0..n as u8).collect();
            let wa = WordArray::from_bytes(&bytes);
            assert_eq!(wa.sig_bytes(), bytes.len());
            assert_eq!(wa.to_bytes(), bytes);
        }
    }

    #[test]
    fn concat_preserves_byte_order() {
        let mut a = WordArray::from_bytes(b"Hello");
        let b = WordArray::from_bytes(b", world!");
        a.concat(&b);
        assert_eq!(a.to_bytes(), b"Hello, world!");
    }

    #[test]
    fn clamp_zeroes_dont_care_tail() {
        let mut wa = WordArray::new(vec![0xAABBCCDD], 2);
        wa.clamp();
        assert_eq!(wa.words()[0], 0xAABB0000);
    }

    #[test]
    fn head_does_not_consume_source() {
        let wa = WordArray::from_bytes(b"abcdefgh");
        let h = wa.head(4);
        assert_eq!(h.to_bytes(), b"abcd");
        assert_eq!(wa.to_bytes(), b"abcdefgh");
    }
}
