//! Padding schemes over a [`WordArray`] buffer.
//!
//! `pad` grows a buffer until its significant-byte count is a positive
//! multiple of the block size; `unpad` reverses it. Both are invoked by
//! `cipher-core`'s buffered processor around the final block of a
//! message. An empty plaintext, or one whose length is already
//! block-aligned, still gains a whole extra block of PKCS#7 padding.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use cipher_traits::{CipherError, WordArray};

/// A reversible extension of a buffer to a block-aligned length.
pub trait Padding {
    /// Grow `data` so `data.sig_bytes()` becomes a positive multiple of
    /// `4 * block_size_words`.
    fn pad(data: &mut WordArray, block_size_words: usize) -> Result<(), CipherError>;

    /// Shrink `data` back down, reversing a prior `pad` call.
    fn unpad(data: &mut WordArray) -> Result<(), CipherError>;
}

/// Which padding scheme to use. Default is [`PaddingKind::Pkcs7`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PaddingKind {
    /// PKCS#7 (RFC 5652 §6.3): pad with N bytes of value N.
    Pkcs7,
    /// No padding: the caller guarantees block-aligned input.
    NoPadding,
    /// Pad with zero bytes; unpad trims a trailing run of zero bytes.
    ///
    /// Lossy for plaintexts that themselves end in `0x00` — included
    /// because CryptoJS ships it as a padding option, not because it's
    /// recommended for new protocols.
    ZeroPadding,
}

impl Default for PaddingKind {
    fn default() -> Self {
        Self::Pkcs7
    }
}

impl PaddingKind {
    /// Pad `data` per this scheme.
    pub fn pad(self, data: &mut WordArray, block_size_words: usize) -> Result<(), CipherError> {
        match self {
            Self::Pkcs7 => Pkcs7::pad(data, block_size_words),
            Self::NoPadding => NoPadding::pad(data, block_size_words),
            Self::ZeroPadding => ZeroPadding::pad(data, block_size_words),
        }
    }

    /// Unpad `data` per this scheme.
    pub fn unpad(self, data: &mut WordArray) -> Result<(), CipherError> {
        match self {
            Self::Pkcs7 => Pkcs7::unpad(data),
            Self::NoPadding => NoPadding::unpad(data),
            Self::ZeroPadding => ZeroPadding::unpad(data),
        }
    }
}

/// PKCS#7 padding.
pub struct Pkcs7;

impl Padding for Pkcs7 {
    fn pad(data: &mut WordArray, block_size_words: usize) -> Result<(), CipherError> {
        let block_size_bytes = 4 * block_size_words;
        let pad_len = block_size_bytes - (data.sig_bytes() % block_size_bytes);
        let fill = vec![pad_len as u8; pad_len];
        data.concat(&WordArray::from_bytes(&fill));
        Ok(())
    }

    fn unpad(data: &mut WordArray) -> Result<(), CipherError> {
        let bytes = data.to_bytes();
        let pad_len = *bytes.last().ok_or(CipherError::Padding)? as usize;
        if pad_len == 0 || pad_len > bytes.len() {
            return Err(CipherError::Padding);
        }
        let tail = &bytes[bytes.len() - pad_len..];
        if tail.iter().any(|&b| b as usize != pad_len) {
            return Err(CipherError::Padding);
        }
        *data = WordArray::from_bytes(&bytes[..bytes.len() - pad_len]);
        Ok(())
    }
}

/// No-op padding: the caller is responsible for block-aligned input.
pub struct NoPadding;

impl Padding for NoPadding {
    fn pad(data: &mut WordArray, block_size_words: usize) -> Result<(), CipherError> {
        if data.sig_bytes() % (4 * block_size_words) != 0 {
            return Err(CipherError::Format("message length is not a multiple of the block size"));
        }
        Ok(())
    }

    fn unpad(_data: &mut WordArray) -> Result<(), CipherError> {
        Ok(())
    }
}

/// Zero-byte padding.
pub struct ZeroPadding;

impl Padding for ZeroPadding {
    fn pad(data: &mut WordArray, block_size_words: usize) -> Result<(), CipherError> {
        let block_size_bytes = 4 * block_size_words;
        let rem = data.sig_bytes() % block_size_bytes;
        if rem != 0 {
            let fill = vec![0u8; block_size_bytes - rem];
            data.concat(&WordArray::from_bytes(&fill));
        }
        Ok(())
    }

    fn unpad(data: &mut WordArray) -> Result<(), CipherError> {
        let mut bytes = data.to_bytes();
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        *data = WordArray::from_bytes(&bytes);
        Ok(())
    }
}
