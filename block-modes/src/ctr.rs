//! [Counter][1] mode: a synchronous stream cipher that encrypts an
//! incrementing counter to build the keystream. Encryption and decryption
//! are identical.
//!
//! [1]: https://en.wikipedia.org/wiki/Block_cipher_mode_of_operation#CTR

use crate::util::{encrypt_words, increment_be, xor_in_place};
use cipher_traits::{BlockCipher, ModeProcessor};

pub struct Ctr<C> {
    cipher: C,
    counter: Vec<u32>,
}

impl<C: BlockCipher> Ctr<C> {
    pub(crate) fn new(cipher: C, iv: Vec<u32>) -> Self {
        Self { cipher, counter: iv }
    }
}

impl<C: BlockCipher> ModeProcessor for Ctr<C> {
    fn process_block(&mut self, words: &mut [u32], offset: usize) {
        let bs = C::block_size_words();
        let mut keystream = self.counter.clone();
        encrypt_words(&self.cipher, &mut keystream);
        xor_in_place(&mut words[offset..offset + bs], &keystream);
        increment_be(&mut self.counter);
    }
}
