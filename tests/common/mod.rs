#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use ppbkdf2::{KdfError, Prf};

/// One recorded `fill` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub rounds: u32,
    pub salt: Vec<u8>,
    pub len: usize,
}

/// Block `i` (0-based) is the byte `i mod 256` repeated `hash_len` times,
/// regardless of password, salt or rounds.
pub struct PatternPrf {
    hash_len: usize,
    fills: Mutex<Vec<Fill>>,
}

impl PatternPrf {
    pub fn new(hash_len: usize) -> Self {
        Self {
            hash_len,
            fills: Mutex::new(Vec::new()),
        }
    }

    pub fn fills(&self) -> Vec<Fill> {
        self.fills.lock().unwrap().clone()
    }

    pub fn block_bytes(&self, index: u32) -> Vec<u8> {
        vec![((index - 1) % 256) as u8; self.hash_len]
    }
}

impl Prf for PatternPrf {
    fn output_len(&self) -> usize {
        self.hash_len
    }

    fn block(
        &self,
        _password: &[u8],
        _salt: &[u8],
        _rounds: u32,
        index: u32,
        out: &mut [u8],
    ) -> Result<(), KdfError> {
        out.fill(((index - 1) % 256) as u8);
        Ok(())
    }

    fn fill(&self, password: &[u8], salt: &[u8], rounds: u32, out: &mut [u8]) -> Result<(), KdfError> {
        self.fills.lock().unwrap().push(Fill {
            rounds,
            salt: salt.to_vec(),
            len: out.len(),
        });
        for (i, chunk) in out.chunks_mut(self.hash_len).enumerate() {
            self.block(password, salt, rounds, i as u32 + 1, chunk)?;
        }
        Ok(())
    }
}

/// Fails on first use and counts how often it was reached.
pub struct RefusingPrf {
    hash_len: usize,
    calls: AtomicUsize,
}

impl RefusingPrf {
    pub fn new(hash_len: usize) -> Self {
        Self {
            hash_len,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Prf for RefusingPrf {
    fn output_len(&self) -> usize {
        self.hash_len
    }

    fn block(
        &self,
        _password: &[u8],
        _salt: &[u8],
        _rounds: u32,
        _index: u32,
        _out: &mut [u8],
    ) -> Result<(), KdfError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(KdfError::Primitive("refused".into()))
    }
}
