//! The block-mode interface consumed by the pipeline.
//!
//! Concrete modes (CBC, ECB, CFB, OFB, CTR) live in the sibling
//! `block-modes` crate; this trait is the seam the buffered processor
//! pumps blocks through without needing to know which mode it is driving.

/// Direction a processor was constructed for. Fixed for the processor's
/// whole lifetime.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum XformMode {
    /// Plaintext in, ciphertext out.
    Encrypt,
    /// Ciphertext in, plaintext out.
    Decrypt,
}

/// Per-session block-mode chaining state.
///
/// `process_block` transforms exactly one block in place at `words[offset
/// .. offset + block_size_words]`, threading whatever chaining state the
/// mode needs (previous ciphertext block, keystream counter, …) internally.
pub trait ModeProcessor {
    /// Transform one block in place.
    fn process_block(&mut self, words: &mut [u32], offset: usize);
}
