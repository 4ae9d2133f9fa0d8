//! HMAC-SHA-384 message authentication for protocol stacks
//!
//! This crate provides the keyed-hash message authentication code (HMAC)
//! construction instantiated with SHA-384, together with the SHA-384
//! primitive it is built on.
//!
//! The focus is on **clarity, predictability, and auditability**: small
//! explicit APIs, no heap allocation in the core primitives, and key
//! material wiped as soon as it goes out of use.
//!
//! # Module overview
//!
//! - `hash`
//!   SHA-384 (FIPS 180-4) as a streaming, copyable state with
//!   begin / update / end semantics, plus a one-shot function.
//!
//! - `mac`
//!   HMAC-SHA-384 (RFC 2104). Three ways in:
//!   - `hmac_sha384` / `hmac_sha384_multi` compute a single tag over one
//!     buffer or over an ordered list of buffers
//!   - `HmacSha384Context` exposes the underlying state machine
//!     (new / reset / update / finalize)
//!   - `HmacSha384` is an owned handle that derives the key pads once and
//!     computes many tags under the same key
//!
//! # Design goals
//!
//! - Pad states derived once per key, restored by value copy
//! - Multi-buffer input without concatenation copies
//! - Non-elidable zeroization of keys, pads and hash states
//!
//! Constant-time tag comparison, key derivation and key exchange are left
//! to higher layers.

pub mod hash;
pub mod mac;
