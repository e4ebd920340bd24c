//! Output formatting for derived keys.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// How a derived key is handed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Lowercase hexadecimal text, two characters per byte.
    #[default]
    Hex,
    /// Raw key bytes.
    Binary,
}

/// A derived key, raw or hex encoded. Wiped on drop.
pub enum DerivedKey {
    Binary(Zeroizing<Vec<u8>>),
    Hex(Zeroizing<String>),
}

impl DerivedKey {
    /// Raw bytes, or the ASCII bytes of the hex text.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            DerivedKey::Binary(bytes) => bytes.as_slice(),
            DerivedKey::Hex(text) => text.as_bytes(),
        }
    }

    pub fn as_hex(&self) -> Option<&str> {
        match self {
            DerivedKey::Hex(text) => Some(text.as_str()),
            DerivedKey::Binary(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    pub fn encoding(&self) -> Encoding {
        match self {
            DerivedKey::Binary(_) => Encoding::Binary,
            DerivedKey::Hex(_) => Encoding::Hex,
        }
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DerivedKey::{:?}([REDACTED; {}])", self.encoding(), self.len())
    }
}

pub fn format_key(key: Zeroizing<Vec<u8>>, encoding: Encoding) -> DerivedKey {
    match encoding {
        Encoding::Binary => DerivedKey::Binary(key),
        Encoding::Hex => DerivedKey::Hex(Zeroizing::new(hex::encode(key.as_slice()))),
    }
}
