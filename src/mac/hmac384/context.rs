use log::trace;

use super::HMAC_SHA384_SIZE;
use super::core::{HmacError, HmacSha384Context};

/// Owned HMAC-SHA-384 handle bound to one key.
///
/// The pad states are derived once in `new`; every `compute` call restarts
/// from them, so issuing many tags under the same key only pays for the
/// message bytes. The context lives on the heap and is zeroized exactly
/// once, when the handle is dropped or passed to `release`.
///
/// The context is built on the stack and then moved into its heap slot;
/// that stack copy is not wiped.
///
/// # Example
///
/// ```rust
/// use hmac384::mac::{HmacSha384, hmac_sha384};
///
/// let mut mac = HmacSha384::new(Some(b"session key")).unwrap();
///
/// let first = mac.compute(b"first packet");
/// let second = mac.compute(b"second packet");
///
/// assert_eq!(first, hmac_sha384(Some(b"session key"), b"first packet").unwrap());
/// assert_eq!(second, hmac_sha384(Some(b"session key"), b"second packet").unwrap());
///
/// mac.release();
/// ```
pub struct HmacSha384 {
    /// Exactly one context, reserved fallibly.
    slot: Box<[HmacSha384Context]>,
}

impl HmacSha384 {
    /// Allocates a context and derives its pad states from `key`.
    ///
    /// # Errors
    ///
    /// - `HmacError::AllocationFailure` if the context memory cannot be
    ///   reserved
    /// - `HmacError::InvalidKey` if `key` is `None`
    pub fn new<K: AsRef<[u8]>>(key: Option<K>) -> Result<Self, HmacError> {
        let mut slot: Vec<HmacSha384Context> = Vec::new();
        slot.try_reserve_exact(1)
            .map_err(|_| HmacError::AllocationFailure)?;

        slot.push(HmacSha384Context::new(key)?);

        trace!("hmac-sha384: context handle created");

        Ok(Self {
            slot: slot.into_boxed_slice(),
        })
    }

    /// Computes the tag of `data`.
    ///
    /// Each call is independent: the inner hash is reset before absorbing
    /// `data`, so nothing from a previous call leaks into this one.
    pub fn compute(&mut self, data: &[u8]) -> [u8; HMAC_SHA384_SIZE] {
        let ctx = self.context();

        ctx.reset();
        ctx.update(data);
        ctx.finalize()
    }

    /// Computes the tag over the concatenation of `chunks`.
    pub fn compute_multi(&mut self, chunks: &[&[u8]]) -> [u8; HMAC_SHA384_SIZE] {
        let ctx = self.context();

        ctx.reset();
        ctx.update_multi(chunks);
        ctx.finalize()
    }

    /// Zeroizes and frees the context.
    ///
    /// Dropping the handle has the same effect; this makes the point of
    /// release explicit at the call site.
    pub fn release(self) {
        drop(self);
    }

    fn context(&mut self) -> &mut HmacSha384Context {
        &mut self.slot[0]
    }
}

impl Drop for HmacSha384 {
    fn drop(&mut self) {
        trace!("hmac-sha384: context handle released");
    }
}

impl std::fmt::Debug for HmacSha384 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacSha384").finish_non_exhaustive()
    }
}
