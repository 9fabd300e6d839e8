//! [Cipher Feedback][1] mode, full block width.
//!
//! # Security Warning
//! This mode does not ensure ciphertexts are authentic: ciphertext
//! integrity is not verified, which can lead to serious vulnerabilities
//! if used without a separate MAC.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#CFB

use crate::util::{encrypt_words, xor_in_place};
use cipher_traits::{BlockCipher, ModeProcessor};

pub struct CfbEncryptor<C> {
    cipher: C,
    feedback: Vec<u32>,
}

impl<C: BlockCipher> CfbEncryptor<C> {
    pub(crate) fn new(cipher: C, iv: Vec<u32>) -> Self {
        Self { cipher, feedback: iv }
    }
}

impl<C: BlockCipher> ModeProcessor for CfbEncryptor<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let bs = C::block_size_words();
        encrypt_words(&self.cipher, &mut self.feedback);
        xor_in_place(&mut words[offset..offset + bs], &self.feedback);
        self.feedback.copy_from_slice(&words[offset..offset + bs]);
    }
}

pub struct CfbDecryptor<C> {
    cipher: C,
    feedback: Vec<u32>,
}

impl<C: BlockCipher> CfbDecryptor<C> {
    pub(crate) fn new(cipher: C, iv: Vec<u32>) -> Self {
        Self { cipher, feedback: iv }
    }
}

impl<C: BlockCipher> ModeProcessor for CfbDecryptor<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let bs = C::block_size_words();
        encrypt_words(&self.cipher, &mut self.feedback);
        let ciphertext: Vec<u32> = words[offset..offset + bs].to_vec();
        xor_in_place(&mut words[offset..offset + bs], &self.feedback);
        self.feedback = ciphertext;
    }
}
