use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KdfError {
    /// Cost is non-positive or would push the work length past the
    /// primitive's addressable output range.
    InvalidParameter { cost: i64, max_cost: u32 },
    UnsupportedAlgorithm(String),
    Primitive(String),
}

impl fmt::Display for KdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdfError::InvalidParameter { cost, max_cost } => {
                write!(f, "invalid cost {cost}: must be between 1 and {max_cost}")
            }
            KdfError::UnsupportedAlgorithm(name) => write!(f, "unsupported algorithm '{name}'"),
            KdfError::Primitive(msg) => write!(f, "pbkdf2 primitive failed: {msg}"),
        }
    }
}

impl std::error::Error for KdfError {}
