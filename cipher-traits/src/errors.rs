//! Error types shared by every layer of the pipeline.

use core::fmt;

/// Errors surfaced by the cipher pipeline.
///
/// Mirrors the taxonomy a caller needs to branch on: a bad configuration,
/// a malformed wire format, invalid padding on decrypt, or a KDF that
/// failed to produce enough key material. There is deliberately no
/// `UsageError` variant: calling `process` after `finalize` is rejected by
/// the type system (`finalize` takes the processor by value), so that
/// failure mode cannot reach a caller as a value at all.
#[derive(Debug)]
#[non_exhaustive]
pub enum CipherError {
    /// A required option was missing, or an option had the wrong kind
    /// (e.g. an IV of the wrong length for the chosen mode).
    Config(&'static str),
    /// The serialized/wire representation could not be parsed.
    Format(&'static str),
    /// Padding was absent, malformed, or inconsistent with the block size.
    Padding,
    /// The key-derivation primitive did not produce the requested amount
    /// of output. Only possible if the KDF primitive itself is broken.
    Kdf(&'static str),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Format(msg) => write!(f, "invalid format: {msg}"),
            Self::Padding => f.write_str("invalid padding"),
            Self::Kdf(msg) => write!(f, "key derivation failed: {msg}"),
        }
    }
}

impl std::error::Error for CipherError {}
