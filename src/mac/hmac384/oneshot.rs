use super::HMAC_SHA384_SIZE;
use super::core::{HmacError, HmacSha384Context};

/// Computes the HMAC-SHA-384 tag of `data` under `key`.
///
/// A fresh context is derived, used once, and zeroized before returning.
/// `Some(&[])` is the zero-length key; `None` means no key was supplied.
///
/// # Errors
///
/// Returns `HmacError::InvalidKey` if `key` is `None`.
///
/// # Example
///
/// ```rust
/// use hmac384::mac::{HMAC_SHA384_SIZE, hmac_sha384};
///
/// let tag = hmac_sha384(Some(b"Jefe"), b"what do ya want for nothing?").unwrap();
/// assert_eq!(tag.len(), HMAC_SHA384_SIZE);
/// ```
pub fn hmac_sha384<K: AsRef<[u8]>>(
    key: Option<K>,
    data: &[u8],
) -> Result<[u8; HMAC_SHA384_SIZE], HmacError> {
    let mut ctx = HmacSha384Context::new(key)?;
    ctx.update(data);

    Ok(ctx.finalize())
}

/// Computes the HMAC-SHA-384 tag over the concatenation of `chunks`.
///
/// The result is identical to `hmac_sha384(key, &chunks.concat())`, without
/// building the concatenated buffer.
///
/// # Errors
///
/// Returns `HmacError::InvalidKey` if `key` is `None`.
pub fn hmac_sha384_multi<K: AsRef<[u8]>>(
    key: Option<K>,
    chunks: &[&[u8]],
) -> Result<[u8; HMAC_SHA384_SIZE], HmacError> {
    let mut ctx = HmacSha384Context::new(key)?;
    ctx.update_multi(chunks);

    Ok(ctx.finalize())
}
