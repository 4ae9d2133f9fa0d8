//! SHA-384 core hashing functions
//!
//! This module implements the streaming form of SHA-384 as defined in
//! FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 1024-bit blocks
//! - `Sha384`, a plain copyable hashing state with begin / update / end
//! - a complete SHA-384 hashing function for arbitrary-length input
//!
//! The state type holds no heap resources, so saving and restoring a
//! partially absorbed state is an ordinary value copy. Keyed constructions
//! such as HMAC rely on this to precompute their padded-key states once.

use zeroize::Zeroize;

use super::computations::all_rounds;
use super::{H384_INIT, SHA384_BLOCK_SIZE, SHA384_DIGEST_SIZE};

/// Offset of the 128-bit length field inside the final block.
const LENGTH_OFFSET: usize = SHA384_BLOCK_SIZE - 16;

/// Compresses a single 1024-bit message block.
///
/// This function performs the SHA-512 compression step on a single
/// 128-byte block, updating the internal hash state in place.
///
/// # Parameters
/// - `block`: A 1024-bit (128-byte) message block
/// - `state`: The current hash state (8 × 64-bit words)
pub fn compress(block: &[u8; SHA384_BLOCK_SIZE], state: &mut [u64; 8]) {
    compress_slice(block, state);
}

/// Compression over a slice already known to be exactly one block long.
#[inline(always)]
fn compress_slice(block: &[u8], state: &mut [u64; 8]) {
    debug_assert_eq!(block.len(), SHA384_BLOCK_SIZE);

    // Message schedule (first 16 words), big-endian
    let mut w = [0u64; 16];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *slot = u64::from_be_bytes(word);
    }

    all_rounds(state, w);
}

/// Streaming SHA-384 state.
///
/// `Sha384` is `Copy`: cloning a state that has absorbed some prefix and
/// continuing both copies independently is the intended way to reuse a
/// common prefix.
///
/// # Lifecycle
///
/// - `begin()` returns a fresh state
/// - `update()` may be called any number of times with arbitrary chunking
/// - `end()` pads, produces the digest, and wipes the state
///
/// A state on which `end()` has been called is spent. Feeding it more data
/// does not produce a meaningful digest; start again from `begin()` or from
/// a saved copy.
#[derive(Clone, Copy, Zeroize)]
pub struct Sha384 {
    /// Chaining value (8 × 64-bit words).
    state: [u64; 8],

    /// Bytes of the current, not yet compressed, block.
    buffer: [u8; SHA384_BLOCK_SIZE],

    /// Number of valid bytes in `buffer`. Always `< SHA384_BLOCK_SIZE`.
    buffered: usize,

    /// Total number of bytes absorbed so far.
    length: u128,
}

impl Sha384 {
    /// Returns a fresh SHA-384 state.
    pub const fn begin() -> Self {
        Self {
            state: H384_INIT,
            buffer: [0u8; SHA384_BLOCK_SIZE],
            buffered: 0,
            length: 0,
        }
    }

    /// Alias for `begin()`.
    pub const fn new() -> Self {
        Self::begin()
    }

    /// Absorbs `data` into the state.
    ///
    /// Splitting a message across several calls yields the same digest as
    /// a single call over the concatenation. Empty input is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        self.length = self.length.wrapping_add(data.len() as u128);

        let mut data = data;

        // Top up a partially filled block first
        if self.buffered > 0 {
            let take = (SHA384_BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < SHA384_BLOCK_SIZE {
                return;
            }

            compress(&self.buffer, &mut self.state);
            self.buffered = 0;
        }

        // Full blocks straight from the input
        let mut blocks = data.chunks_exact(SHA384_BLOCK_SIZE);
        for block in blocks.by_ref() {
            compress_slice(block, &mut self.state);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();
    }

    /// Finishes the computation and returns the 384-bit digest.
    ///
    /// Applies the FIPS 180-4 padding (a single `1` bit, zeros, and the
    /// message length in bits as a 128-bit big-endian integer), then
    /// serializes the first six state words. The state is zeroized before
    /// returning.
    pub fn end(&mut self) -> [u8; SHA384_DIGEST_SIZE] {
        let mut block = [0u8; SHA384_BLOCK_SIZE];
        let rem = self.buffered;

        block[..rem].copy_from_slice(&self.buffer[..rem]);
        block[rem] = 0x80;

        // Not enough room for the length field: spill into an extra block
        if rem >= LENGTH_OFFSET {
            compress(&block, &mut self.state);
            block.zeroize();
        }

        let bit_len = self.length << 3;
        block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());

        compress(&block, &mut self.state);

        let mut out = [0u8; SHA384_DIGEST_SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        block.zeroize();
        self.zeroize();

        out
    }
}

impl Default for Sha384 {
    fn default() -> Self {
        Self::begin()
    }
}

/// Computes the SHA-384 hash of the given input.
///
/// # Parameters
/// - `input`: Arbitrary-length input message
///
/// # Returns
/// - The SHA-384 digest as 48 bytes (`[u8; 48]`)
///
/// # Notes
/// - No heap allocations are performed.
pub fn sha384(input: &[u8]) -> [u8; SHA384_DIGEST_SIZE] {
    let mut hasher = Sha384::begin();
    hasher.update(input);
    hasher.end()
}
