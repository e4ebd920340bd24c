//! PBKDF2 primitive seam.
//!
//! Everything PPBKDF2 does is expressed as calls into a [`Prf`]: one long
//! PBKDF2 stream for the work step and one short stream for the key.

use std::marker::PhantomData;

use hmac::Mac;
use hmac::digest::{FixedOutput, KeyInit, Update};

use crate::error::KdfError;

/// A PBKDF2 instance over some fixed pseudorandom function.
///
/// Every byte of a PBKDF2 stream depends only on the password, salt,
/// iteration count and the block it falls in, so blocks can be computed
/// on their own and in any order.
pub trait Prf: Sync {
    /// Natural output size in bytes, i.e. what a zero-length request yields.
    fn output_len(&self) -> usize;

    /// Computes PBKDF2 block `index` (1-based) into `out`.
    ///
    /// `out` may be shorter than [`Prf::output_len`], in which case the
    /// block is truncated.
    fn block(
        &self,
        password: &[u8],
        salt: &[u8],
        rounds: u32,
        index: u32,
        out: &mut [u8],
    ) -> Result<(), KdfError>;

    /// Fills `out` with the PBKDF2 stream, block by block in stream order.
    fn fill(&self, password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) -> Result<(), KdfError> {
        for (i, chunk) in out.chunks_mut(self.output_len()).enumerate() {
            let index = u32::try_from(i + 1)
                .map_err(|_| KdfError::Primitive("requested output too long".into()))?;
            self.block(password, salt, rounds, index, chunk)?;
        }
        Ok(())
    }
}

/// Hash length resolver: the primitive's natural output size.
///
/// [`Prf::output_len`] is what a zero-length request with empty password
/// and salt at one iteration would return.
pub fn hash_len<P: Prf + ?Sized>(prf: &P) -> usize {
    prf.output_len()
}

/// PBKDF2 over an HMAC type such as `Hmac<Sha256>`.
pub struct HmacPrf<M> {
    _mac: PhantomData<fn() -> M>,
}

impl<M> HmacPrf<M> {
    pub fn new() -> Self {
        Self { _mac: PhantomData }
    }
}

impl<M> Default for HmacPrf<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Prf for HmacPrf<M>
where
    M: Mac + KeyInit + Update + FixedOutput + Clone + Sync,
{
    fn output_len(&self) -> usize {
        <M as hmac::digest::OutputSizeUser>::output_size()
    }

    fn block(
        &self,
        password: &[u8],
        salt: &[u8],
        rounds: u32,
        index: u32,
        out: &mut [u8],
    ) -> Result<(), KdfError> {
        let keyed = <M as KeyInit>::new_from_slice(password)
            .map_err(|e| KdfError::Primitive(e.to_string()))?;

        let mut mac = keyed.clone();
        Update::update(&mut mac, salt);
        Update::update(&mut mac, &index.to_be_bytes());
        let mut u = mac.finalize_fixed();

        let take = out.len().min(u.len());
        out[..take].copy_from_slice(&u[..take]);

        for _ in 1..rounds {
            let mut mac = keyed.clone();
            Update::update(&mut mac, &u);
            u = mac.finalize_fixed();
            out[..take]
                .iter_mut()
                .zip(u.iter())
                .for_each(|(o, b)| *o ^= b);
        }

        Ok(())
    }

    fn fill(&self, password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) -> Result<(), KdfError> {
        pbkdf2::pbkdf2::<M>(password, salt, rounds, out)
            .map_err(|e| KdfError::Primitive(e.to_string()))
    }
}
