//! Error types for dagger resolution.

use qlib_ir::IrError;
use thiserror::Error;

/// Errors that can occur while inverting a component tree.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DaggerError {
    /// No rule is registered for the gate's structural signature.
    #[error(
        "No dagger rule for gate '{name}' with {register_arity} registers \
         and {parameter_arity} parameters"
    )]
    UnknownInverse {
        /// The gate name looked up.
        name: String,
        /// Register arity of the signature.
        register_arity: usize,
        /// Parameter arity of the signature.
        parameter_arity: usize,
    },

    /// The subtree contains a measurement; measurement has no adjoint.
    #[error("Cannot invert a subtree containing a measurement")]
    NotInvertible,

    /// Rebuilding the inverted component failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for dagger operations.
pub type DaggerResult<T> = Result<T, DaggerError>;
