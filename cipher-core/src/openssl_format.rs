//! The OpenSSL `Salted__` wire format (spec.md §4.7): `"Salted__" || salt
//! (8 bytes) || ciphertext`, base64-encoded for the string form `openssl
//! enc -base64` produces and consumes.

use cipher_traits::{CipherError, WordArray};
use word_array::Base64;

use crate::params::CipherParams;

const MAGIC: &[u8; 8] = b"Salted__";
const SALT_BYTES: usize = 8;

/// Serializes/parses [`CipherParams`] as an OpenSSL-compatible salted
/// container.
pub struct OpenSslFormat;

impl OpenSslFormat {
    /// Render `params` as a base64 string. Requires `ciphertext`; `salt` is
    /// omitted from the header entirely when absent (an unsalted,
    /// non-password container — still accepted by `openssl enc` for raw
    /// keyed operations run without `-S`).
    pub fn stringify(params: &CipherParams) -> Result<String, CipherError> {
        let ciphertext = params.ciphertext.as_ref().ok_or(CipherError::Format("missing ciphertext"))?;
        let mut bytes = WordArray::empty();
        if let Some(salt) = &params.salt {
            if salt.sig_bytes() != SALT_BYTES {
                return Err(CipherError::Format("salt must be 8 bytes"));
            }
            bytes.concat(&WordArray::from_bytes(MAGIC));
            bytes.concat(salt);
        }
        bytes.concat(ciphertext);
        Ok(Base64::stringify(&bytes))
    }

    /// Parse a base64 string back into a [`CipherParams`], splitting off
    /// the `Salted__` header and salt if present.
    pub fn parse(ciphertext: &str) -> Result<CipherParams, CipherError> {
        let wa = Base64::parse(ciphertext).map_err(|_| CipherError::Format("not valid base64"))?;
        let bytes = wa.to_bytes();
        if bytes.len() >= MAGIC.len() + SALT_BYTES && &bytes[..MAGIC.len()] == MAGIC {
            let salt = WordArray::from_bytes(&bytes[MAGIC.len()..MAGIC.len() + SALT_BYTES]);
            let rest = WordArray::from_bytes(&bytes[MAGIC.len() + SALT_BYTES..]);
            Ok(CipherParams { ciphertext: Some(rest), salt: Some(salt), ..Default::default() })
        } else {
            Ok(CipherParams { ciphertext: Some(WordArray::from_bytes(&bytes)), ..Default::default() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_salted_container() {
        let params = CipherParams {
            ciphertext: Some(WordArray::from_bytes(b"ciphertext-bytes")),
            salt: Some(WordArray::from_bytes(b"saltsalt")),
            ..Default::default()
        };
        let wire = OpenSslFormat::stringify(&params).unwrap();
        let parsed = OpenSslFormat::parse(&wire).unwrap();
        assert_eq!(parsed.ciphertext.unwrap().to_bytes(), b"ciphertext-bytes");
        assert_eq!(parsed.salt.unwrap().to_bytes(), b"saltsalt");
    }

    #[test]
    fn round_trips_unsalted_container() {
        let params = CipherParams { ciphertext: Some(WordArray::from_bytes(b"raw")), ..Default::default() };
        let wire = OpenSslFormat::stringify(&params).unwrap();
        let parsed = OpenSslFormat::parse(&wire).unwrap();
        assert_eq!(parsed.ciphertext.unwrap().to_bytes(), b"raw");
        assert!(parsed.salt.is_none());
    }

    #[test]
    fn rejects_non_base64_input() {
        assert!(OpenSslFormat::parse("not base64 at all!!").is_err());
    }

    #[test]
    fn rejects_wrong_length_salt() {
        let params = CipherParams {
            ciphertext: Some(WordArray::from_bytes(b"x")),
            salt: Some(WordArray::from_bytes(b"short")),
            ..Default::default()
        };
        assert!(OpenSslFormat::stringify(&params).is_err());
    }
}
