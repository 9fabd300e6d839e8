//! String encodings for [`WordArray`] byte content.

use crate::WordArray;
use base64::Engine as _;
use core::fmt;

/// An encoding that can turn a [`WordArray`] into a string and back.
pub trait Encoder {
    /// Render `data`'s significant bytes as a string.
    fn stringify(data: &WordArray) -> String;

    /// Parse a previously-[`stringify`](Encoder::stringify)'d string back
    /// into a `WordArray`.
    fn parse(input: &str) -> Result<WordArray, EncodingError>;
}

/// Error returned by [`Encoder::parse`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// The input contained characters outside the encoding's alphabet.
    InvalidCharacter,
    /// The input's length was not a valid multiple for the encoding.
    InvalidLength,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter => f.write_str("invalid character in encoded input"),
            Self::InvalidLength => f.write_str("invalid length of encoded input"),
        }
    }
}

impl std::error::Error for EncodingError {}

/// Lowercase hexadecimal encoding.
#[derive(Copy, Clone, Debug)]
pub struct Hex;

impl Encoder for Hex {
    fn stringify(data: &WordArray) -> String {
        hex::encode(data.to_bytes())
    }

    fn parse(input: &str) -> Result<WordArray, EncodingError> {
        let bytes = hex::decode(input).map_err(|_| EncodingError::InvalidCharacter)?;
        Ok(WordArray::from_bytes(&bytes))
    }
}

/// Standard (RFC 4648) base64 encoding, with padding.
#[derive(Copy, Clone, Debug)]
pub struct Base64;

impl Encoder for Base64 {
    fn stringify(data: &WordArray) -> String {
        base64::engine::general_purpose::STANDARD.encode(data.to_bytes())
    }

    fn parse(input: &str) -> Result<WordArray, EncodingError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(input.as_bytes())
            .map_err(|_| EncodingError::InvalidCharacter)?;
        Ok(WordArray::from_bytes(&bytes))
    }
}
