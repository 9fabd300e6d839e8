//! Block modes of operation: CBC, ECB, CFB, OFB and CTR.
//!
//! Each mode is a [`cipher_traits::ModeProcessor`] that transforms exactly
//! one whole block in place — the buffered processor in `cipher-core`
//! guarantees it is never handed a partial block, so none of these need to
//! worry about alignment or carrying partial keystream across calls the
//! way a byte-oriented stream-cipher implementation would.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(missing_docs)] // mode structs are documented at the module level

mod cbc;
mod cfb;
mod ctr;
mod ecb;
mod ofb;
mod util;

pub use cbc::{CbcDecryptor, CbcEncryptor};
pub use cfb::{CfbDecryptor, CfbEncryptor};
pub use ctr::Ctr;
pub use ecb::{EcbDecryptor, EcbEncryptor};
pub use ofb::Ofb;

use cipher_traits::{BlockCipher, CipherError, ModeProcessor};

/// Which block mode to instantiate. Default is [`BlockModeKind::Cbc`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BlockModeKind {
    /// Cipher Block Chaining.
    Cbc,
    /// Electronic Codebook (no chaining, no IV).
    Ecb,
    /// Cipher Feedback.
    Cfb,
    /// Output Feedback.
    Ofb,
    /// Counter.
    Ctr,
}

impl Default for BlockModeKind {
    fn default() -> Self {
        Self::Cbc
    }
}

impl BlockModeKind {
    /// Does this mode require an IV?
    pub fn requires_iv(self) -> bool {
        !matches!(self, Self::Ecb)
    }

    fn iv_words<C: BlockCipher>(self, iv: Option<&[u32]>) -> Result<Vec<u32>, CipherError> {
        if !self.requires_iv() {
            return Ok(Vec::new());
        }
        let bs = C::block_size_words();
        match iv {
            Some(iv) if iv.len() == bs => Ok(iv.to_vec()),
            Some(_) => Err(CipherError::Config("IV length does not match the block size")),
            None => Err(CipherError::Config("this mode requires an IV")),
        }
    }

    /// Build the per-session encryptor for this mode.
    pub fn create_encryptor<C: BlockCipher + 'static>(
        self,
        cipher: C,
        iv: Option<&[u32]>,
    ) -> Result<Box<dyn ModeProcessor>, CipherError> {
        let iv = self.iv_words::<C>(iv)?;
        Ok(match self {
            Self::Cbc => Box::new(CbcEncryptor::new(cipher, iv)),
            Self::Ecb => Box::new(EcbEncryptor::new(cipher)),
            Self::Cfb => Box::new(CfbEncryptor::new(cipher, iv)),
            Self::Ofb => Box::new(Ofb::new(cipher, iv)),
            Self::Ctr => Box::new(Ctr::new(cipher, iv)),
        })
    }

    /// Build the per-session decryptor for this mode.
    pub fn create_decryptor<C: BlockCipher + 'static>(
        self,
        cipher: C,
        iv: Option<&[u32]>,
    ) -> Result<Box<dyn ModeProcessor>, CipherError> {
        let iv = self.iv_words::<C>(iv)?;
        Ok(match self {
            Self::Cbc => Box::new(CbcDecryptor::new(cipher, iv)),
            Self::Ecb => Box::new(EcbDecryptor::new(cipher)),
            Self::Cfb => Box::new(CfbDecryptor::new(cipher, iv)),
            Self::Ofb => Box::new(Ofb::new(cipher, iv)),
            Self::Ctr => Box::new(Ctr::new(cipher, iv)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_primitive::Aes128;
    use cipher_traits::NewBlockCipher;
    use hex_literal::hex;

    fn key() -> Vec<u32> {
        cipher_traits::WordArray::from_bytes(&hex!("000102030405060708090a0b0c0d0e0f")).words().to_vec()
    }

    fn iv() -> Vec<u32> {
        cipher_traits::WordArray::from_bytes(&hex!("ffeeddccbbaa99887766554433221100")).words().to_vec()
    }

    #[test]
    fn cbc_round_trip() {
        let cipher = Aes128::new(&key()).unwrap();
        let mut enc = BlockModeKind::Cbc.create_encryptor(cipher, Some(&iv())).unwrap();
        let cipher2 = Aes128::new(&key()).unwrap();
        let mut dec = BlockModeKind::Cbc.create_decryptor(cipher2, Some(&iv())).unwrap();

        let mut block = vec![1u32, 2, 3, 4];
        let original = block.clone();
        enc.process_block(&mut block, 0);
        assert_ne!(block, original);
        dec.process_block(&mut block, 0);
        assert_eq!(block, original);
    }

    #[test]
    fn ctr_is_self_inverse() {
        let cipher = Aes128::new(&key()).unwrap();
        let mut enc = BlockModeKind::Ctr.create_encryptor(cipher, Some(&iv())).unwrap();
        let cipher2 = Aes128::new(&key()).unwrap();
        let mut dec = BlockModeKind::Ctr.create_decryptor(cipher2, Some(&iv())).unwrap();

        let mut block = vec![10u32, 20, 30, 40];
        let original = block.clone();
        enc.process_block(&mut block, 0);
        dec.process_block(&mut block, 0);
        assert_eq!(block, original);
    }

    #[test]
    fn ecb_requires_no_iv() {
        assert!(!BlockModeKind::Ecb.requires_iv());
        let cipher = Aes128::new(&key()).unwrap();
        assert!(BlockModeKind::Ecb.create_encryptor(cipher, None).is_ok());
    }

    #[test]
    fn cbc_rejects_missing_iv() {
        let cipher = Aes128::new(&key()).unwrap();
        assert!(BlockModeKind::Cbc.create_encryptor(cipher, None).is_err());
    }
}
