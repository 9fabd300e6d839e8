//! Typed configuration structs, one per layer (spec.md §9's Design Notes
//! resolve the source's loose key/value config into these).
//!
//! `PasswordBasedConfig` wraps `SerializableConfig` wraps
//! `BlockCipherConfig` by field composition, not inheritance — each layer
//! only reads the fields it owns and hands the rest down unchanged.

use block_modes::BlockModeKind;
use block_padding::PaddingKind;
use word_array::WordArray;

/// Configuration recognized by the block/stream cipher processor.
#[derive(Clone, Debug, Default)]
pub struct BlockCipherConfig {
    /// Initial chaining value. Required by every mode except ECB.
    pub iv: Option<WordArray>,
    /// Block-mode handle. Defaults to [`BlockModeKind::Cbc`].
    pub mode: BlockModeKind,
    /// Padding handle. Defaults to [`PaddingKind::Pkcs7`].
    pub padding: PaddingKind,
}

/// Which wire formatter to use.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum FormatterKind {
    /// OpenSSL's `Salted__` + base64 container (spec.md §4.7).
    #[default]
    OpenSsl,
}

/// Configuration recognized by [`crate::serializable`].
#[derive(Clone, Debug, Default)]
pub struct SerializableConfig {
    /// Block/stream processor configuration.
    pub block: BlockCipherConfig,
    /// Wire formatter used to parse string ciphertexts and declared on the
    /// resulting [`crate::CipherParams`].
    pub format: FormatterKind,
}

/// Which password-to-(key, iv, salt) derivation to use.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum KdfKind {
    /// OpenSSL's classic `EVP_BytesToKey`, iterated MD5 (spec.md §4.6).
    #[default]
    OpenSsl,
}

/// Configuration recognized by [`crate::password`].
#[derive(Clone, Debug)]
pub struct PasswordBasedConfig {
    /// Nested serializable-cipher configuration (its `block.iv` is
    /// overwritten with the KDF-derived IV before each operation).
    pub serializable: SerializableConfig,
    /// Key-derivation handle. Defaults to [`KdfKind::OpenSsl`].
    pub kdf: KdfKind,
    /// Number of times each EVP_BytesToKey block is re-hashed. `1`
    /// reproduces `openssl enc`'s historical default.
    pub kdf_iterations: u32,
}

impl Default for PasswordBasedConfig {
    fn default() -> Self {
        Self { serializable: SerializableConfig::default(), kdf: KdfKind::default(), kdf_iterations: 1 }
    }
}
