//! OpenSSL's classic `EVP_BytesToKey` derivation: repeatedly hash
//! `prev_block || password || salt` with MD5 until enough key material has
//! been produced.
//!
//! This is the primitive `OpenSslKdf` (in `cipher-core`) builds its
//! salt-generation and key/IV-splitting behavior on top of.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

use digest::Digest;
use md5::Md5;

/// Derive `key_len + iv_len` bytes of key material from `password` and an
/// optional `salt`.
///
/// `iterations` is the number of times each block is re-hashed (OpenSSL's
/// `count` parameter to `EVP_BytesToKey`); `1` reproduces the classic
/// single-pass behavior used by `openssl enc`'s historical default.
pub fn derive(password: &[u8], salt: Option<&[u8]>, key_len: usize, iv_len: usize, iterations: u32) -> Vec<u8> {
    let iterations = iterations.max(1);
    let total_len = key_len + iv_len;
    let mut derived = Vec::with_capacity(total_len + Md5::output_size());
    let mut prev: Vec<u8> = Vec::new();

    while derived.len() < total_len {
        let mut hasher = Md5::new();
        hasher.update(&prev);
        hasher.update(password);
        if let Some(salt) = salt {
            hasher.update(salt);
        }
        let mut block = hasher.finalize().to_vec();
        for _ in 1..iterations {
            block = Md5::digest(&block).to_vec();
        }
        derived.extend_from_slice(&block);
        prev = block;
    }

    derived.truncate(total_len);
    derived
}
