//! The cipher-primitive interface consumed by the pipeline.
//!
//! This crate does not implement any concrete round function (AES or
//! otherwise) — see the `aes-primitive` crate for a reference adapter.
//! Everything here cares only about key/block sizes in 32-bit *words*,
//! matching the word-granular buffer the pipeline is built around.

use crate::CipherError;

/// Construct a keyed primitive instance from key material.
pub trait NewBlockCipher: Sized {
    /// Accepted key size, in 32-bit words.
    fn key_size_words() -> usize;

    /// A stable name for this algorithm (e.g. `"AES-128"`), used as the
    /// `algorithm` handle attached to a [`CipherParams`](../cipher_core/struct.CipherParams.html)
    /// record rather than a runtime type descriptor.
    fn algorithm_name() -> &'static str;

    /// Build a new instance from exactly [`key_size_words`][Self::key_size_words]
    /// words of key material.
    fn new(key: &[u32]) -> Result<Self, CipherError>;
}

/// A keyed block cipher: encrypts/decrypts one block in place at a given
/// word offset.
pub trait BlockCipher: NewBlockCipher {
    /// Block size, in 32-bit words (4 for a 128-bit block cipher).
    fn block_size_words() -> usize;

    /// Encrypt the block `words[offset .. offset + block_size_words]` in place.
    fn encrypt_block(&self, words: &mut [u32], offset: usize);

    /// Decrypt the block `words[offset .. offset + block_size_words]` in place.
    fn decrypt_block(&self, words: &mut [u32], offset: usize);
}
