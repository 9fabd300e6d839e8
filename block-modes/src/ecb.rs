//! [Electronic Codebook][1] mode. No chaining state, no IV.
//!
//! Each block is encrypted independently, which leaks structure in the
//! plaintext (identical plaintext blocks yield identical ciphertext
//! blocks). Shipped because the spec's mode handle is pluggable and
//! CryptoJS ships it as a mode, not because it's recommended.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#ECB

use cipher_traits::{BlockCipher, ModeProcessor};

pub struct EcbEncryptor<C>(C);

impl<C: BlockCipher> EcbEncryptor<C> {
    pub(crate) fn new(cipher: C) -> Self {
        Self(cipher)
    }
}

impl<C: BlockCipher> ModeProcessor for EcbEncryptor<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        self.0.encrypt_block(words, offset);
    }
}

pub struct EcbDecryptor<C>(C);

impl<C: BlockCipher> EcbDecryptor<C> {
    pub(crate) fn new(cipher: C) -> Self {
        Self(cipher)
    }
}

impl<C: BlockCipher> ModeProcessor for EcbDecryptor<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        self.0.decrypt_block(words, offset);
    }
}
