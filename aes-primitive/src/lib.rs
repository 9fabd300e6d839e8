//! Adapts the `aes` crate's AES-128/192/256 round function to
//! [`cipher_traits::BlockCipher`].
//!
//! The concrete round function is deliberately kept out of `cipher-core`
//! itself: this crate is the reference adapter its tests and doctests are
//! built against, the same role `aes` plays as a dev-dependency of
//! `cfb-mode`/`ctr`.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit, generic_array::GenericArray};
use cipher_traits::{BlockCipher, CipherError, NewBlockCipher};

fn words_to_block(words: &[u32]) -> GenericArray<u8, aes::cipher::consts::U16> {
    let mut bytes = [0u8; 16];
    for (i, w) in words.iter().enumerate() {
        bytes[4 * i..4 * i + 4].copy_from_slice(&w.to_be_bytes());
    }
    GenericArray::clone_from_slice(&bytes)
}

fn block_into_words(block: &GenericArray<u8, aes::cipher::consts::U16>, words: &mut [u32]) {
    for (i, w) in words.iter_mut().enumerate() {
        *w = u32::from_be_bytes(block[4 * i..4 * i + 4].try_into().unwrap());
    }
}

macro_rules! aes_variant {
    ($name:ident, $inner:ty, $key_words:expr, $algo_name:expr) => {
        /// AES block cipher primitive, adapted to operate on 32-bit words.
        pub struct $name($inner);

        impl NewBlockCipher for $name {
            fn key_size_words() -> usize {
                $key_words
            }

            fn algorithm_name() -> &'static str {
                $algo_name
            }

            fn new(key: &[u32]) -> Result<Self, CipherError> {
                if key.len() != $key_words {
                    return Err(CipherError::Config("wrong AES key length"));
                }
                let mut bytes = vec![0u8; 4 * $key_words];
                for (i, w) in key.iter().enumerate() {
                    bytes[4 * i..4 * i + 4].copy_from_slice(&w.to_be_bytes());
                }
                let key = GenericArray::from_slice(&bytes);
                Ok(Self(<$inner>::new(key)))
            }
        }

        impl BlockCipher for $name {
            fn block_size_words() -> usize {
                4
            }

            fn encrypt_block(&self, words: &mut [u32], offset: usize) {
                let mut block = words_to_block(&words[offset..offset + 4]);
                self.0.encrypt_block(&mut block);
                block_into_words(&block, &mut words[offset..offset + 4]);
            }

            fn decrypt_block(&self, words: &mut [u32], offset: usize) {
                let mut block = words_to_block(&words[offset..offset + 4]);
                self.0.decrypt_block(&mut block);
                block_into_words(&block, &mut words[offset..offset + 4]);
            }
        }
    };
}

aes_variant!(Aes128, aes::Aes128, 4, "AES-128");
aes_variant!(Aes192, aes::Aes192, 6, "AES-192");
aes_variant!(Aes256, aes::Aes256, 8, "AES-256");
