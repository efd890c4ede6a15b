//! Quantum Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing quantum
//! circuits as trees of typed, arity-checked components. It is the
//! foundation the rest of the qlib stack builds on.
//!
//! # Overview
//!
//! A circuit owns a bank of identity-only registers and an ordered
//! sequence of components. A component is a measurement, a unitary gate
//! leaf, or a container composing other components; containers nest, so
//! circuits are built bottom-up from smaller named sub-circuits. The
//! whole tree linearizes on demand into an ordered [`CurrentOp`] stream
//! that downstream backends (simulators, code generators) consume.
//!
//! # Core Components
//!
//! - **Registers**: [`QuantumRegister`], [`ClassicalRegister`] identity
//!   tokens, compared by allocation and never by name or position
//! - **Components**: [`Component`] with its [`Measurement`],
//!   [`UnitaryLeaf`], and [`UnitaryContainer`] variants
//! - **Builders**: the [`op`] module, a validated construction surface
//!   with the standard gate catalog
//! - **Flattening**: [`CurrentOp`] records and the lazy [`Flatten`]
//!   iterator
//! - **Circuit**: [`Circuit`], the owning, append-only sequence
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qlib_ir::{Circuit, op};
//!
//! let mut circuit = Circuit::with_size("bell", 2, 2);
//! let (q0, q1) = (circuit.qreg(0), circuit.qreg(1));
//! let (c0, c1) = (circuit.creg(0), circuit.creg(1));
//!
//! circuit
//!     .append(op::h(q0).unwrap())
//!     .append(op::cnot(q0, q1).unwrap())
//!     .append(op::measure(q0, c0))
//!     .append(op::measure(q1, c1));
//!
//! assert_eq!(circuit.flatten().count(), 4);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Registers | Parameters |
//! |------|-----------|------------|
//! | `id`, `x`, `y`, `z`, `h`, `s`, `t` | 1 | 0 |
//! | `r` | 1 | 1 |
//! | `cnot`, `swap`, `cz`, `cs` | 2 | 0 |
//! | `cr` | 2 | 1 |
//! | `toffoli`, `fredkin` | 3 | 0 |
//!
//! Gates outside the catalog are built with [`op::u`] and carry whatever
//! arity their construction call supplies.

pub mod circuit;
pub mod component;
pub mod error;
pub mod flatten;
pub mod gates;
pub mod op;
pub mod register;

pub use circuit::Circuit;
pub use component::{Component, ComponentKind, Measurement, UnitaryContainer, UnitaryLeaf};
pub use error::{IrError, IrResult};
pub use flatten::{CurrentOp, Flatten, OpKind};
pub use register::{ClassicalRegister, QuantumRegister};
