use std::fmt;

use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::HMAC_SHA384_SIZE;
use crate::hash::sha384::SHA384_BLOCK_SIZE;
use crate::hash::sha384::SHA384_DIGEST_SIZE;
use crate::hash::sha384::core::{Sha384, sha384};

/// Inner pad byte.
const IPAD: u8 = 0x36;

/// Outer pad byte.
const OPAD: u8 = 0x5c;

/// Errors that can occur when setting up an HMAC-SHA-384 computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacError {
    /// No key material was supplied.
    InvalidKey,
    /// The memory for a context handle could not be reserved.
    AllocationFailure,
}

impl fmt::Display for HmacError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "HMAC key is missing"),
            Self::AllocationFailure => write!(f, "failed to allocate HMAC context"),
        }
    }
}

impl std::error::Error for HmacError {}

/// HMAC-SHA-384 state for one key.
///
/// The context keeps three SHA-384 states:
///
/// - `inner`: the hash of `K' ⊕ ipad`, fixed for the lifetime of the key
/// - `outer`: the hash of `K' ⊕ opad`, fixed for the lifetime of the key
/// - `working`: the state currently absorbing message bytes
///
/// # Lifecycle
///
/// ```text
/// new ──► ready ──update──► accumulating ──finalize──► finalized
///           ▲                                              │
///           └─────────────────── reset ◄───────────────────┘
/// ```
///
/// `new` and `reset` leave `working` equal to `inner`. `finalize` spends
/// `working`; calling `update` or `finalize` again without an intervening
/// `reset` yields a meaningless tag.
///
/// # Security
///
/// - All three states held by the context are zeroized on drop.
/// - `Sha384` is `Copy`, so moving a state (or the context itself) can
///   leave bitwise copies on the stack that are not wiped. Only the
///   context's own storage is covered.
/// - The context is not synchronized. For concurrent use under one key,
///   clone it: each clone carries its own copy of the prepared states.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct HmacSha384Context {
    working: Sha384,
    inner: Sha384,
    outer: Sha384,
}

impl HmacSha384Context {
    /// Derives the inner and outer pad states from `key`.
    ///
    /// Keys longer than the SHA-384 block size (128 bytes) are first
    /// replaced by their SHA-384 digest. Shorter keys, including the
    /// zero-length key, are zero-padded on the right.
    ///
    /// # Errors
    ///
    /// Returns `HmacError::InvalidKey` if `key` is `None`. No hashing is
    /// performed in that case.
    pub fn new<K: AsRef<[u8]>>(key: Option<K>) -> Result<Self, HmacError> {
        let Some(key) = key else {
            return Err(HmacError::InvalidKey);
        };
        let key = key.as_ref();

        let mut local_key = Zeroizing::new([0u8; SHA384_BLOCK_SIZE]);
        let key_block: &mut [u8; SHA384_BLOCK_SIZE] = &mut local_key;

        if key.len() > SHA384_BLOCK_SIZE {
            trace!("hmac-sha384: condensing {}-byte key", key.len());

            let digest = Zeroizing::new(sha384(key));
            key_block[..SHA384_DIGEST_SIZE].copy_from_slice(&*digest);
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let inner = padded_key_state(key_block, IPAD);
        let outer = padded_key_state(key_block, OPAD);

        Ok(Self {
            working: inner,
            inner,
            outer,
        })
    }

    /// Restarts the inner hash from the prepared `K' ⊕ ipad` state.
    ///
    /// Any message bytes absorbed since the last `new` or `reset` are
    /// discarded. Required after `finalize` before the context is reused.
    pub fn reset(&mut self) {
        self.working = self.inner;
    }

    /// Absorbs `data` into the running MAC.
    ///
    /// Chunk boundaries do not matter: any split of a message yields the
    /// same tag as the whole message. Empty input is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        self.working.update(data);
    }

    /// Absorbs each chunk in order.
    ///
    /// Equivalent to calling `update` once per chunk, so a message held in
    /// several disjoint buffers (e.g. header and payload) can be
    /// authenticated without concatenating them first.
    pub fn update_multi(&mut self, chunks: &[&[u8]]) {
        for chunk in chunks {
            self.working.update(chunk);
        }
    }

    /// Completes the MAC and returns the 48-byte tag.
    ///
    /// # Algorithm
    ///
    /// 1. Finish the inner hash: `d = H((K' ⊕ ipad) || m)`
    /// 2. Restart from the prepared `K' ⊕ opad` state
    /// 3. Absorb `d` and finish: `tag = H((K' ⊕ opad) || d)`
    ///
    /// The working state is spent afterwards; call `reset` before
    /// computing another tag.
    pub fn finalize(&mut self) -> [u8; HMAC_SHA384_SIZE] {
        let inner_digest = Zeroizing::new(self.working.end());

        self.working = self.outer;
        self.working.update(&*inner_digest);

        self.working.end()
    }
}

impl fmt::Debug for HmacSha384Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSha384Context").finish_non_exhaustive()
    }
}

/// Hashes one block of `key ⊕ pad` into a fresh SHA-384 state.
fn padded_key_state(key: &[u8; SHA384_BLOCK_SIZE], pad: u8) -> Sha384 {
    let mut block = Zeroizing::new([0u8; SHA384_BLOCK_SIZE]);

    for (out, byte) in block.iter_mut().zip(key.iter()) {
        *out = byte ^ pad;
    }

    let mut state = Sha384::begin();
    state.update(&*block);
    state
}
