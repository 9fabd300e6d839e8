//! [Output Feedback][1] mode: a synchronous stream cipher built from a
//! block cipher. Encryption and decryption are the identical XOR
//! operation, since the keystream never depends on plaintext/ciphertext.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#OFB

use crate::util::{encrypt_words, xor_in_place};
use cipher_traits::{BlockCipher, ModeProcessor};

pub struct Ofb<C> {
    cipher: C,
    state: Vec<u32>,
}

impl<C: BlockCipher> Ofb<C> {
    pub(crate) fn new(cipher: C, iv: Vec<u32>) -> Self {
        Self { cipher, state: iv }
    }
}

impl<C: BlockCipher> ModeProcessor for Ofb<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let bs = C::block_size_words();
        encrypt_words(&self.cipher, &mut self.state);
        xor_in_place(&mut words[offset..offset + bs], &self.state);
    }
}
