//! [Cipher Block Chaining][1] mode.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#CBC

use crate::util::xor_in_place;
use cipher_traits::{BlockCipher, ModeProcessor};

/// CBC encryptor: XOR plaintext with the previous ciphertext block
/// (the IV for the first block) before encrypting.
pub struct CbcEncryptor<C> {
    cipher: C,
    prev: Vec<u32>,
}

impl<C: BlockCipher> CbcEncryptor<C> {
    pub(crate) fn new(cipher: C, iv: Vec<u32>) -> Self {
        Self { cipher, prev: iv }
    }
}

impl<C: BlockCipher> ModeProcessor for CbcEncryptor<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let bs = C::block_size_words();
        let block = &mut words[offset..offset + bs];
        xor_in_place(block, &self.prev);
        self.cipher.encrypt_block(words, offset);
        self.prev.copy_from_slice(&words[offset..offset + bs]);
    }
}

/// CBC decryptor: decrypt then XOR with the previous ciphertext block.
pub struct CbcDecryptor<C> {
    cipher: C,
    prev: Vec<u32>,
}

impl<C: BlockCipher> CbcDecryptor<C> {
    pub(crate) fn new(cipher: C, iv: Vec<u32>) -> Self {
        Self { cipher, prev: iv }
    }
}

impl<C: BlockCipher> ModeProcessor for CbcDecryptor<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let bs = C::block_size_words();
        let ciphertext: Vec<u32> = words[offset..offset + bs].to_vec();
        self.cipher.decrypt_block(words, offset);
        xor_in_place(&mut words[offset..offset + bs], &self.prev);
        self.prev = ciphertext;
    }
}
