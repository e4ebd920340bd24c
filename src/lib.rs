//! Parallel PBKDF2 (PPBKDF2), a computationally hard password KDF.
//!
//! ```text
//! work = xor_blocks(pbkdf2(password, salt, 1024, 384 * cost * hash_len))
//! key  = pbkdf2(password, work, 1, output_len)
//! ```
//!
//! A cost of `n` is equivalent to `384 * 1024 * n` PBKDF2 iterations. Every
//! block of the work stream is independent, so the work step can be spread
//! across threads with [`Strategy::Parallel`].

pub mod crypto;
mod error;
mod format;

pub use crate::crypto::{Algorithm, HmacPrf, Params, Prf, Strategy, WorkValue};
pub use crate::error::KdfError;
pub use crate::format::{DerivedKey, Encoding, format_key};
use tracing::debug;

/// Derives a key with PBKDF2-HMAC over `algorithm`.
///
/// `output_len` of zero yields the digest's natural length. The only
/// failure is [`KdfError::InvalidParameter`] for a cost outside
/// `1..=max_cost`, reported before any hashing happens.
pub fn derive(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    cost: i64,
    output_len: usize,
    encoding: Encoding,
) -> Result<DerivedKey, KdfError> {
    debug!(%algorithm, cost, output_len, ?encoding, "deriving PPBKDF2 key");
    derive_with(
        algorithm.prf().as_ref(),
        password,
        salt,
        cost,
        output_len,
        encoding,
        Strategy::Sequential,
    )
}

/// Same as [`derive`], over any PBKDF2 primitive and work strategy.
pub fn derive_with<P: Prf + ?Sized>(
    prf: &P,
    password: &[u8],
    salt: &[u8],
    cost: i64,
    output_len: usize,
    encoding: Encoding,
    strategy: Strategy,
) -> Result<DerivedKey, KdfError> {
    let key = crypto::derive_key(prf, password, salt, cost, output_len, strategy)?;
    Ok(format_key(key, encoding))
}
