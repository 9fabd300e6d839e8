//! `CipherParams`: the self-describing record that flows between
//! `SerializableCipher`/`PasswordBasedCipher` and a [`crate::Formatter`]
//! (spec.md §4.9/§3).
//!
//! Every field is optional: a freshly encrypted message carries all of
//! them, while a value parsed back out of a minimal wire format (just
//! salt + ciphertext, say) only has what that format actually encoded.

use block_modes::BlockModeKind;
use block_padding::PaddingKind;
use word_array::WordArray;

use crate::config::FormatterKind;

/// Everything a cipher operation and its wire format might need to agree
/// on. Not every field is meaningful for every format — an OpenSSL
/// `Salted__` container only round-trips `ciphertext` and `salt`, for
/// instance, and leaves `iv`/`key` for the caller to have derived
/// out-of-band.
#[derive(Clone, Debug, Default)]
pub struct CipherParams {
    /// The ciphertext itself. Always present once an encryption has run.
    pub ciphertext: Option<WordArray>,
    /// The key, if the caller chose to carry it (never written by
    /// [`crate::openssl_format::OpenSslFormat`] — a key belongs in
    /// neither a `Salted__` container nor its base64 envelope).
    pub key: Option<WordArray>,
    /// The IV used (or recovered, for password-based decryption).
    pub iv: Option<WordArray>,
    /// The salt used to derive `key`/`iv` from a password, if any.
    pub salt: Option<WordArray>,
    /// The algorithm the ciphertext was produced under (e.g. `"AES-128"`,
    /// from [`cipher_traits::NewBlockCipher::algorithm_name`]).
    pub algorithm: Option<&'static str>,
    /// The block mode the ciphertext was produced under.
    pub mode: Option<BlockModeKind>,
    /// The padding scheme the ciphertext was produced under.
    pub padding: Option<PaddingKind>,
    /// The block size, in 32-bit words, the processor that produced this
    /// ciphertext used.
    pub block_size: Option<usize>,
    /// The wire formatter that can (de)serialize this record to/from a
    /// string.
    pub formatter: Option<FormatterKind>,
}

impl CipherParams {
    /// A record with every field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill in any field that is currently `None` from `other`, leaving
    /// fields `self` already has untouched. Mirrors the source system's
    /// `mixIn`: call it with the freshly formatted/parsed record so a
    /// caller-supplied partial record (e.g. "I already know the key")
    /// still ends up complete.
    pub fn mix_in(&mut self, other: &CipherParams) {
        if self.ciphertext.is_none() {
            self.ciphertext = other.ciphertext.clone();
        }
        if self.key.is_none() {
            self.key = other.key.clone();
        }
        if self.iv.is_none() {
            self.iv = other.iv.clone();
        }
        if self.salt.is_none() {
            self.salt = other.salt.clone();
        }
        if self.algorithm.is_none() {
            self.algorithm = other.algorithm;
        }
        if self.mode.is_none() {
            self.mode = other.mode;
        }
        if self.padding.is_none() {
            self.padding = other.padding;
        }
        if self.block_size.is_none() {
            self.block_size = other.block_size;
        }
        if self.formatter.is_none() {
            self.formatter = other.formatter;
        }
    }
}
