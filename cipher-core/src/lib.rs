//! Buffered block/stream cipher pipeline: accumulate input, chain it
//! through a block mode, pad/unpad at the edges, and wrap the result in a
//! self-describing, formattable record.
//!
//! This crate is the pipeline itself; the concrete collaborators it wires
//! together — the AES primitive, the block modes, the padding schemes, the
//! `EVP_BytesToKey` KDF — are each their own sibling crate, mirrored the
//! way a caller would bring their own primitive to the teacher pack's
//! trait crates.
//!
//! ```
//! use aes_primitive::Aes128;
//! use block_modes::BlockModeKind;
//! use block_padding::PaddingKind;
//! use cipher_core::config::{BlockCipherConfig, SerializableConfig};
//! use word_array::WordArray;
//!
//! # fn main() -> Result<(), cipher_core::CipherError> {
//! let key = WordArray::from_bytes(&[0u8; 16]).words().to_vec();
//! let config = SerializableConfig {
//!     block: BlockCipherConfig {
//!         iv: Some(WordArray::from_bytes(&[1u8; 16])),
//!         mode: BlockModeKind::Cbc,
//!         padding: PaddingKind::Pkcs7,
//!     },
//!     ..Default::default()
//! };
//! let plaintext = WordArray::from_bytes(b"hi");
//! let (wire, _) = cipher_core::serializable::encrypt::<Aes128>(&key, &plaintext, config.clone())?;
//! let recovered = cipher_core::serializable::decrypt::<Aes128>(&key, &wire, config)?;
//! assert_eq!(recovered.to_bytes(), b"hi");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod algorithm;
mod buffer;
pub mod config;
mod openssl_format;
pub mod params;
pub mod password;
pub mod serializable;

pub use algorithm::Cipher;
pub use buffer::CipherProcessor;
pub use cipher_traits::{CipherError, WordArray};
pub use openssl_format::OpenSslFormat;
pub use params::CipherParams;
