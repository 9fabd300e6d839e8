//! Traits for describing the collaborators a cipher pipeline consumes:
//! keyed block primitives, block modes, and the shared error type.
//!
//! Padding, KDF and wire-format handles are defined closer to their
//! reference implementations (`block-padding`, `evpkdf`, `cipher-core`)
//! since, unlike the primitive/mode seam, the buffered processor only
//! ever talks to *one* concrete default of each — see `cipher-core` for
//! the pluggable `Padding`/`Kdf`/`Formatter` traits.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod errors;
mod mode;
mod primitive;

pub use errors::CipherError;
pub use mode::{ModeProcessor, XformMode};
pub use primitive::{BlockCipher, NewBlockCipher};

pub use word_array::WordArray;
