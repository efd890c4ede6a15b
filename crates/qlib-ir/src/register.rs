//! Register identity tokens.
//!
//! Registers carry no quantum or classical state; they are opaque tokens
//! whose only property is identity. Two registers compare equal iff they
//! come from the same allocation. Allocation draws from a process-wide
//! counter, so registers are never reused across circuits and circuits
//! built on different threads need no coordination.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_QREG: AtomicU64 = AtomicU64::new(0);
static NEXT_CREG: AtomicU64 = AtomicU64::new(0);

/// Identity token for one quantum storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumRegister(u64);

impl QuantumRegister {
    /// Allocate `count` fresh quantum registers.
    ///
    /// Each call returns registers distinct from every register allocated
    /// before, in this or any other circuit.
    pub fn allocate(count: usize) -> Vec<Self> {
        let base = NEXT_QREG.fetch_add(count as u64, Ordering::Relaxed);
        (base..base + count as u64).map(QuantumRegister).collect()
    }
}

impl fmt::Display for QuantumRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Identity token for one classical storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassicalRegister(u64);

impl ClassicalRegister {
    /// Allocate `count` fresh classical registers.
    pub fn allocate(count: usize) -> Vec<Self> {
        let base = NEXT_CREG.fetch_add(count as u64, Ordering::Relaxed);
        (base..base + count as u64).map(ClassicalRegister).collect()
    }
}

impl fmt::Display for ClassicalRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}
