//! Error types for the IR crate.

use crate::register::QuantumRegister;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Wrong number of registers or parameters for a gate.
    #[error(
        "Gate '{gate}' requires {expected_registers} registers and {expected_params} parameters, \
         got {got_registers} and {got_params}"
    )]
    ArityMismatch {
        /// Name of the gate.
        gate: String,
        /// Register arity the gate requires.
        expected_registers: usize,
        /// Registers actually supplied.
        got_registers: usize,
        /// Parameter arity the gate requires.
        expected_params: usize,
        /// Parameters actually supplied.
        got_params: usize,
    },

    /// The same register supplied more than once to one gate.
    #[error("Duplicate register {register} in gate '{gate}'")]
    DuplicateRegister {
        /// Name of the gate.
        gate: String,
        /// The register that appeared twice.
        register: QuantumRegister,
    },

    /// A lookup by name into a container's children failed.
    #[error("Container '{container}' has no subcomponent named '{name}'")]
    UnknownSubcomponent {
        /// Name of the container searched.
        container: String,
        /// The child name that was not found.
        name: String,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
