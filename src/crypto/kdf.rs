use tracing::debug;
use zeroize::Zeroizing;

use super::KEY_ROUNDS;
use super::params::validate_cost;
use super::prf::{Prf, hash_len};
use super::work::{Strategy, WorkValue, generate_work};
use crate::error::KdfError;

/// Key deriver: a single-iteration PBKDF2 pass salted with the work value.
///
/// An `output_len` of zero means the primitive's natural hash length.
pub fn extract_key<P: Prf + ?Sized>(
    prf: &P,
    password: &[u8],
    work: &WorkValue,
    output_len: usize,
) -> Result<Zeroizing<Vec<u8>>, KdfError> {
    let len = match output_len {
        0 => hash_len(prf),
        n => n,
    };
    debug!(output_len = len, "extracting key");

    let mut key = Zeroizing::new(vec![0u8; len]);
    prf.fill(password, work.as_bytes(), KEY_ROUNDS, &mut key)?;
    Ok(key)
}

/// Runs the full pipeline and returns the raw key bytes.
///
/// The cost is checked before the primitive is asked for anything.
pub fn derive_key<P: Prf + ?Sized>(
    prf: &P,
    password: &[u8],
    salt: &[u8],
    cost: i64,
    output_len: usize,
    strategy: Strategy,
) -> Result<Zeroizing<Vec<u8>>, KdfError> {
    let hash_len = hash_len(prf);
    let cost = validate_cost(cost, hash_len)?;

    let work = generate_work(prf, password, salt, cost, strategy)?;
    extract_key(prf, password, &work, output_len)
}
