//! PPBKDF2 building blocks.
//!
//! Provides the PBKDF2 primitive seam, parameter validation, the
//! parallelizable work step and the final key extraction.

pub mod algorithm;
pub mod kdf;
pub mod params;
pub mod prf;
pub mod work;

pub use algorithm::Algorithm;
pub use kdf::{derive_key, extract_key};
pub use params::{Params, max_cost, validate_cost};
pub use prf::{HmacPrf, Prf, hash_len};
pub use work::{Strategy, WorkValue, fold_blocks, generate_work};

/// PBKDF2 iterations used to fill the work buffer.
pub const WORK_ROUNDS: u32 = 1024;
/// PBKDF2 iterations used for the final extraction pass.
pub const KEY_ROUNDS: u32 = 1;
/// Hash-length blocks requested per unit of cost.
pub const BLOCKS_PER_COST: u32 = 384;
/// Largest output length the primitive is allowed to be asked for (2^31 - 1).
pub const MAX_OUTPUT_LEN: u32 = 0x7fff_ffff;
