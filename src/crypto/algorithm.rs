use std::fmt;
use std::str::FromStr;

use hmac::Hmac;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use super::prf::{HmacPrf, Prf};
use crate::error::KdfError;

/// Digest underneath PBKDF2-HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Algorithm {
    Sha1,
    Sha224,
    #[default]
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
        Algorithm::Sha512_224,
        Algorithm::Sha512_256,
        Algorithm::Sha3_224,
        Algorithm::Sha3_256,
        Algorithm::Sha3_384,
        Algorithm::Sha3_512,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
            Algorithm::Sha512_224 => "sha512/224",
            Algorithm::Sha512_256 => "sha512/256",
            Algorithm::Sha3_224 => "sha3-224",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3_384 => "sha3-384",
            Algorithm::Sha3_512 => "sha3-512",
        }
    }

    /// PBKDF2-HMAC instance for this digest.
    pub fn prf(self) -> Box<dyn Prf> {
        match self {
            Algorithm::Sha1 => Box::new(HmacPrf::<Hmac<Sha1>>::new()),
            Algorithm::Sha224 => Box::new(HmacPrf::<Hmac<Sha224>>::new()),
            Algorithm::Sha256 => Box::new(HmacPrf::<Hmac<Sha256>>::new()),
            Algorithm::Sha384 => Box::new(HmacPrf::<Hmac<Sha384>>::new()),
            Algorithm::Sha512 => Box::new(HmacPrf::<Hmac<Sha512>>::new()),
            Algorithm::Sha512_224 => Box::new(HmacPrf::<Hmac<Sha512_224>>::new()),
            Algorithm::Sha512_256 => Box::new(HmacPrf::<Hmac<Sha512_256>>::new()),
            Algorithm::Sha3_224 => Box::new(HmacPrf::<Hmac<Sha3_224>>::new()),
            Algorithm::Sha3_256 => Box::new(HmacPrf::<Hmac<Sha3_256>>::new()),
            Algorithm::Sha3_384 => Box::new(HmacPrf::<Hmac<Sha3_384>>::new()),
            Algorithm::Sha3_512 => Box::new(HmacPrf::<Hmac<Sha3_512>>::new()),
        }
    }

    pub fn hash_len(self) -> usize {
        super::prf::hash_len(self.prf().as_ref())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = KdfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KdfError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = KdfError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for &'static str {
    fn from(value: Algorithm) -> Self {
        value.name()
    }
}
