use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use tracing::debug;

use super::{Algorithm, BLOCKS_PER_COST, MAX_OUTPUT_LEN, Strategy, WORK_ROUNDS};
use crate::error::KdfError;
use crate::format::{DerivedKey, Encoding};

/// Largest cost whose work length `384 * cost * hash_len` still fits in
/// the primitive's output length limit.
pub fn max_cost(hash_len: usize) -> u32 {
    let limit = (MAX_OUTPUT_LEN / BLOCKS_PER_COST) as usize;
    limit.checked_div(hash_len).unwrap_or(0) as u32
}

/// Parameter validator: accepts `0 < cost <= max_cost(hash_len)`.
pub fn validate_cost(cost: i64, hash_len: usize) -> Result<u32, KdfError> {
    let max_cost = max_cost(hash_len);
    match u32::try_from(cost) {
        Ok(c) if c > 0 && c <= max_cost => Ok(c),
        _ => {
            debug!(cost, max_cost, hash_len, "rejecting PPBKDF2 cost");
            Err(KdfError::InvalidParameter { cost, max_cost })
        }
    }
}

/// Stored configuration for one PPBKDF2 setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    algorithm: Algorithm,
    cost: u32,
    output_len: usize,
    encoding: Encoding,
    strategy: Strategy,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Sha256,
            // roughly 3.1M PBKDF2 iterations
            cost: 8,
            // natural hash length
            output_len: 0,
            encoding: Encoding::Hex,
            strategy: Strategy::Sequential,
        }
    }
}

impl Params {
    pub fn new(algorithm: Algorithm, cost: u32, output_len: usize) -> Result<Self> {
        let params = Self {
            algorithm,
            cost,
            output_len,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Loads parameters from JSON, filling omitted fields from the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Params =
            serde_json::from_str(json).context("failed to parse PPBKDF2 parameters")?;
        params.validate()?;
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn output_len(&self) -> usize {
        self.output_len
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Plain PBKDF2 iterations this cost is equivalent to.
    pub fn equivalent_iterations(&self) -> u64 {
        u64::from(BLOCKS_PER_COST) * u64::from(WORK_ROUNDS) * u64::from(self.cost)
    }

    pub fn validate(&self) -> Result<()> {
        validate_cost(i64::from(self.cost), self.algorithm.hash_len())
            .with_context(|| format!("invalid PPBKDF2 parameters for {}", self.algorithm))?;
        Ok(())
    }

    pub fn derive(&self, password: &[u8], salt: &[u8]) -> Result<DerivedKey, KdfError> {
        crate::derive_with(
            self.algorithm.prf().as_ref(),
            password,
            salt,
            i64::from(self.cost),
            self.output_len,
            self.encoding,
            self.strategy,
        )
    }

    /// Re-derives and compares against `expected` in constant time.
    ///
    /// `expected` is raw bytes or hex text, matching [`Params::encoding`].
    pub fn verify(&self, password: &[u8], salt: &[u8], expected: &[u8]) -> Result<bool, KdfError> {
        let derived = self.derive(password, salt)?;
        Ok(derived.as_bytes().ct_eq(expected).into())
    }
}
