//! Structural inverse ("dagger") rules for qlib circuits.
//!
//! Given any [`Component`](qlib_ir::Component), [`dagger`] produces its
//! adjoint as a new component tree. Unitary leaves resolve through a
//! process-wide registry keyed by structural signature (gate name,
//! register arity, parameter arity); containers invert into the
//! reverse-order composition of their children's adjoints; measurements
//! have no adjoint and poison their subtree.
//!
//! # Example
//!
//! ```rust
//! use qlib_dagger::dagger;
//! use qlib_ir::{QuantumRegister, op};
//!
//! let q = QuantumRegister::allocate(2);
//! let module = op::us(
//!     "m",
//!     vec![op::h(q[0]).unwrap(), op::cnot(q[0], q[1]).unwrap()],
//! );
//!
//! // The adjoint of H then CNOT is CNOT then H.
//! let inverted = dagger(&module).unwrap();
//! let names: Vec<_> = inverted.flatten().map(|op| op.name).collect();
//! assert_eq!(names, vec!["cnot", "h"]);
//! ```
//!
//! # Seed rules
//!
//! `id`, `x`, `y`, `z`, `h`, `cnot`, `swap`, `cz`, `toffoli`, and
//! `fredkin` are self-inverse. `s`, `t`, and `cs` invert into the
//! phase-shift family: `s† = r(−π/2)`, `t† = r(−π/4)`,
//! `cs† = cr(−π/2)`. `r(φ)† = r(−φ)` and `cr(φ)† = cr(−φ)`.

pub mod error;
pub mod invert;
pub mod rules;

pub use error::{DaggerError, DaggerResult};
pub use invert::dagger;
pub use rules::{DaggerRule, ParamTransform, Signature, rule_count};
