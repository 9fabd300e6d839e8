//! `SerializableCipher`: one-shot encrypt/decrypt of a whole message,
//! producing or consuming a formatted string instead of raw [`WordArray`]
//! output (spec.md §4.4).

use cipher_traits::{BlockCipher, CipherError};
use word_array::WordArray;

use crate::algorithm::Cipher;
use crate::config::{FormatterKind, SerializableConfig};
use crate::openssl_format::OpenSslFormat;
use crate::params::CipherParams;

/// Encrypt `plaintext` under `key`, returning a formatted ciphertext
/// string plus the full [`CipherParams`] record (so a caller who also
/// wants the raw ciphertext/IV doesn't have to re-parse the string).
///
/// Populates every field spec.md §4.4 step 3 names: ciphertext, key, iv,
/// algorithm, mode, padding, block size and formatter, so the record is
/// genuinely self-describing rather than only carrying ciphertext/iv.
pub fn encrypt<C: BlockCipher + 'static>(
    key: &[u32],
    plaintext: &WordArray,
    config: SerializableConfig,
) -> Result<(String, CipherParams), CipherError> {
    let iv = config.block.iv.clone();
    let mode = config.block.mode;
    let padding = config.block.padding;
    let format = config.format;
    let cipher = Cipher::<C>::new(key, config.block)?;
    let ciphertext = cipher.encryptor()?.finalize(Some(plaintext))?;

    let params = CipherParams {
        ciphertext: Some(ciphertext),
        key: Some(WordArray::new(key.to_vec(), key.len() * 4)),
        iv,
        algorithm: Some(C::algorithm_name()),
        mode: Some(mode),
        padding: Some(padding),
        block_size: Some(C::block_size_words()),
        formatter: Some(format),
        ..Default::default()
    };
    let wire = stringify(&params, format)?;
    Ok((wire, params))
}

/// Parse `ciphertext` with the formatter named in `config`, then decrypt
/// under `key`. The IV must already be present on `config.block.iv` (the
/// OpenSSL formatter does not carry one — see [`crate::password`] for the
/// password-driven variant that derives it).
pub fn decrypt<C: BlockCipher + 'static>(
    key: &[u32],
    ciphertext: &str,
    config: SerializableConfig,
) -> Result<WordArray, CipherError> {
    let params = parse(ciphertext, config.format)?;
    let ciphertext = params.ciphertext.ok_or(CipherError::Format("missing ciphertext"))?;
    let cipher = Cipher::<C>::new(key, config.block)?;
    cipher.decryptor()?.finalize(Some(&ciphertext))
}

pub(crate) fn stringify(params: &CipherParams, format: FormatterKind) -> Result<String, CipherError> {
    match format {
        FormatterKind::OpenSsl => OpenSslFormat::stringify(params),
    }
}

pub(crate) fn parse(ciphertext: &str, format: FormatterKind) -> Result<CipherParams, CipherError> {
    match format {
        FormatterKind::OpenSsl => OpenSslFormat::parse(ciphertext),
    }
}
