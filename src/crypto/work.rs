//! The work step.
//!
//! One PBKDF2 stream of `384 * cost * hash_len` bytes is requested at
//! [`WORK_ROUNDS`] iterations and its hash-length blocks are XOR-folded
//! into a single hash-length value. The fold is commutative and
//! associative, so [`Strategy::Sequential`] and [`Strategy::Parallel`]
//! produce identical results.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::params::validate_cost;
use super::prf::{Prf, hash_len};
use super::{BLOCKS_PER_COST, WORK_ROUNDS};
use crate::error::KdfError;

/// How the work blocks are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// One bulk PBKDF2 call into a single buffer, folded in stream order.
    #[default]
    Sequential,
    /// Blocks computed independently on the rayon pool; no work buffer.
    Parallel,
}

/// Folded work, used as the salt of the final extraction.
pub struct WorkValue(Zeroizing<Vec<u8>>);

impl WorkValue {
    fn zeroed(len: usize) -> Self {
        Self(Zeroizing::new(vec![0u8; len]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn absorb(&mut self, block: &[u8]) {
        self.0
            .iter_mut()
            .zip(block)
            .for_each(|(acc, b)| *acc ^= b);
    }
}

impl std::fmt::Debug for WorkValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WorkValue([REDACTED; {}])", self.len())
    }
}

/// XOR-folds `hash_len`-byte blocks into one value, in whatever order the
/// iterator yields them.
pub fn fold_blocks<'a, I>(blocks: I, hash_len: usize) -> WorkValue
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut work = WorkValue::zeroed(hash_len);
    for block in blocks {
        work.absorb(block);
    }
    work
}

/// Work generator. Rejects a cost outside `1..=max_cost` before the
/// primitive is called.
pub fn generate_work<P: Prf + ?Sized>(
    prf: &P,
    password: &[u8],
    salt: &[u8],
    cost: u32,
    strategy: Strategy,
) -> Result<WorkValue, KdfError> {
    let hash_len = hash_len(prf);
    let cost = validate_cost(i64::from(cost), hash_len)?;
    let blocks = BLOCKS_PER_COST * cost;
    let work_len = blocks as usize * hash_len;
    debug!(cost, hash_len, blocks, work_len, ?strategy, "generating work");

    match strategy {
        Strategy::Sequential => sequential(prf, password, salt, hash_len, work_len),
        Strategy::Parallel => parallel(prf, password, salt, hash_len, blocks),
    }
}

fn sequential<P: Prf + ?Sized>(
    prf: &P,
    password: &[u8],
    salt: &[u8],
    hash_len: usize,
    work_len: usize,
) -> Result<WorkValue, KdfError> {
    let mut buffer = Zeroizing::new(vec![0u8; work_len]);
    prf.fill(password, salt, WORK_ROUNDS, &mut buffer)?;
    Ok(fold_blocks(buffer.chunks_exact(hash_len), hash_len))
}

struct Accumulator {
    work: WorkValue,
    scratch: Zeroizing<Vec<u8>>,
}

impl Accumulator {
    fn new(hash_len: usize) -> Self {
        Self {
            work: WorkValue::zeroed(hash_len),
            scratch: Zeroizing::new(vec![0u8; hash_len]),
        }
    }
}

fn parallel<P: Prf + ?Sized>(
    prf: &P,
    password: &[u8],
    salt: &[u8],
    hash_len: usize,
    blocks: u32,
) -> Result<WorkValue, KdfError> {
    let acc = (0..blocks)
        .into_par_iter()
        .try_fold(
            || Accumulator::new(hash_len),
            |mut acc, i| {
                prf.block(password, salt, WORK_ROUNDS, i + 1, &mut acc.scratch)?;
                acc.work.absorb(&acc.scratch);
                Ok::<_, KdfError>(acc)
            },
        )
        .try_reduce(
            || Accumulator::new(hash_len),
            |mut a, b| {
                a.work.absorb(b.work.as_bytes());
                Ok(a)
            },
        )?;
    Ok(acc.work)
}
