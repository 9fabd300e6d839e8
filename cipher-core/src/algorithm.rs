//! Turns a keyed block primitive plus a [`BlockCipherConfig`] into a
//! ready-to-drive [`CipherProcessor`], generalized over any `BlockCipher`
//! the way `aes-primitive` or a future primitive crate would plug in.

use crate::buffer::CipherProcessor;
use crate::config::BlockCipherConfig;
use cipher_traits::{BlockCipher, CipherError, NewBlockCipher, XformMode};

/// A keyed algorithm: a primitive plus the mode/padding it was configured
/// with. `Cipher::new` is the one place a key is consumed; everything
/// downstream only sees `CipherProcessor`.
pub struct Cipher<C> {
    cipher: C,
    config: BlockCipherConfig,
}

impl<C: BlockCipher + 'static> Cipher<C> {
    /// Build a keyed algorithm from raw key words and a configuration.
    pub fn new(key: &[u32], config: BlockCipherConfig) -> Result<Self, CipherError> {
        let cipher = C::new(key)?;
        Ok(Self { cipher, config })
    }

    /// Start an encrypting processor. Consumes `self`: a `Cipher` is a
    /// single-use key schedule, built fresh per message just like the
    /// `CipherProcessor` it hands back.
    pub fn encryptor(self) -> Result<CipherProcessor, CipherError> {
        self.processor(XformMode::Encrypt)
    }

    /// Start a decrypting processor.
    pub fn decryptor(self) -> Result<CipherProcessor, CipherError> {
        self.processor(XformMode::Decrypt)
    }

    fn processor(self, xform: XformMode) -> Result<CipherProcessor, CipherError> {
        let iv = self.config.iv.as_ref().map(|iv| iv.words());
        let mode = match xform {
            XformMode::Encrypt => self.config.mode.create_encryptor(self.cipher, iv)?,
            XformMode::Decrypt => self.config.mode.create_decryptor(self.cipher, iv)?,
        };
        Ok(CipherProcessor::new(mode, xform, Some(self.config.padding), C::block_size_words()))
    }
}
