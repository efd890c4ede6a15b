//! The dagger rule registry.
//!
//! Rules map a gate's structural signature (name, register arity,
//! parameter arity) to its adjoint's name and a parameter transform.
//! The registry is keyed by signature, not by instance, is populated
//! once on first touch, and is never mutated afterward, so concurrent
//! readers need no locking.

use rustc_hash::FxHashMap;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::sync::LazyLock;

use qlib_ir::gates;

/// Pure function from a gate's parameter list to its adjoint's.
pub type ParamTransform = fn(&[f64]) -> Vec<f64>;

/// Structural signature of a gate: name plus both arities.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The gate name.
    pub name: String,
    /// Number of quantum registers the gate takes.
    pub register_arity: usize,
    /// Number of numeric parameters the gate takes.
    pub parameter_arity: usize,
}

impl Signature {
    /// Create a signature.
    pub fn new(name: impl Into<String>, register_arity: usize, parameter_arity: usize) -> Self {
        Self {
            name: name.into(),
            register_arity,
            parameter_arity,
        }
    }
}

/// One inverse rule: the adjoint's name and parameter transform.
#[derive(Debug, Clone, Copy)]
pub struct DaggerRule {
    /// Name of the adjoint gate.
    pub inverse_name: &'static str,
    /// Transform from original parameters to the adjoint's.
    pub transform: ParamTransform,
}

fn identity(params: &[f64]) -> Vec<f64> {
    params.to_vec()
}

fn negate(params: &[f64]) -> Vec<f64> {
    params.iter().map(|p| -p).collect()
}

fn neg_half_pi(_params: &[f64]) -> Vec<f64> {
    vec![-FRAC_PI_2]
}

fn neg_quarter_pi(_params: &[f64]) -> Vec<f64> {
    vec![-FRAC_PI_4]
}

static REGISTRY: LazyLock<FxHashMap<Signature, DaggerRule>> = LazyLock::new(|| {
    let mut rules = FxHashMap::default();

    // Self-inverse (Hermitian) gates.
    let self_inverse: &[(&'static str, usize)] = &[
        (gates::ID, 1),
        (gates::X, 1),
        (gates::Y, 1),
        (gates::Z, 1),
        (gates::H, 1),
        (gates::CNOT, 2),
        (gates::SWAP, 2),
        (gates::CZ, 2),
        (gates::TOFFOLI, 3),
        (gates::FREDKIN, 3),
    ];
    for &(name, register_arity) in self_inverse {
        rules.insert(
            Signature::new(name, register_arity, 0),
            DaggerRule {
                inverse_name: name,
                transform: identity,
            },
        );
    }

    // Phase-like gates invert into the rotation family.
    rules.insert(
        Signature::new(gates::S, 1, 0),
        DaggerRule {
            inverse_name: gates::R,
            transform: neg_half_pi,
        },
    );
    rules.insert(
        Signature::new(gates::T, 1, 0),
        DaggerRule {
            inverse_name: gates::R,
            transform: neg_quarter_pi,
        },
    );
    rules.insert(
        Signature::new(gates::CS, 2, 0),
        DaggerRule {
            inverse_name: gates::CR,
            transform: neg_half_pi,
        },
    );

    // Rotations invert within their own family with the angle negated.
    rules.insert(
        Signature::new(gates::R, 1, 1),
        DaggerRule {
            inverse_name: gates::R,
            transform: negate,
        },
    );
    rules.insert(
        Signature::new(gates::CR, 2, 1),
        DaggerRule {
            inverse_name: gates::CR,
            transform: negate,
        },
    );

    rules
});

/// Look up the rule for a structural signature.
pub fn lookup(
    name: &str,
    register_arity: usize,
    parameter_arity: usize,
) -> Option<&'static DaggerRule> {
    REGISTRY.get(&Signature::new(name, register_arity, parameter_arity))
}

/// Number of registered rules.
pub fn rule_count() -> usize {
    REGISTRY.len()
}
