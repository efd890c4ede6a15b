//! Component builders.
//!
//! A validated construction surface over the component model: the
//! generic [`u`] builder, the named catalog constructors, and the [`us`]
//! composite helper. Every named constructor is defined purely in terms
//! of [`u`] with a fixed name and arity; the fixed-shape signatures
//! exist for ergonomic, type-checked call sites, not for behavior.

use crate::component::{Component, Measurement, UnitaryContainer, UnitaryLeaf};
use crate::error::IrResult;
use crate::gates;
use crate::register::{ClassicalRegister, QuantumRegister};

/// Build a unitary gate with explicit parameters.
///
/// Arity is taken from the supplied counts; names in the standard
/// catalog are additionally checked against their fixed signature.
/// Fails with [`ArityMismatch`] on a catalog count mismatch and with
/// [`DuplicateRegister`] if the same register appears twice.
///
/// [`ArityMismatch`]: crate::error::IrError::ArityMismatch
/// [`DuplicateRegister`]: crate::error::IrError::DuplicateRegister
pub fn u(
    name: impl Into<String>,
    params: impl IntoIterator<Item = f64>,
    registers: impl IntoIterator<Item = QuantumRegister>,
) -> IrResult<Component> {
    let leaf = UnitaryLeaf::new(
        name,
        registers.into_iter().collect(),
        params.into_iter().collect(),
    )?;
    Ok(leaf.into())
}

/// Build a parameterless unitary gate. Shorthand for [`u`] with no
/// parameters.
pub fn unitary(
    name: impl Into<String>,
    registers: impl IntoIterator<Item = QuantumRegister>,
) -> IrResult<Component> {
    u(name, [], registers)
}

/// Wrap already-built components into one named container.
///
/// `us(name, vec![])` produces an empty container, useful as a named
/// no-op placeholder during incremental assembly.
pub fn us(name: impl Into<String>, children: Vec<Component>) -> Component {
    UnitaryContainer::new(name, children).into()
}

/// Build a measurement of one qubit into one classical bit.
pub fn measure(qreg: QuantumRegister, creg: ClassicalRegister) -> Component {
    Measurement::new(qreg, creg).into()
}

/// Identity gate.
pub fn id(q: QuantumRegister) -> IrResult<Component> {
    u(gates::ID, [], [q])
}

/// Pauli-X gate.
pub fn x(q: QuantumRegister) -> IrResult<Component> {
    u(gates::X, [], [q])
}

/// Pauli-Y gate.
pub fn y(q: QuantumRegister) -> IrResult<Component> {
    u(gates::Y, [], [q])
}

/// Pauli-Z gate.
pub fn z(q: QuantumRegister) -> IrResult<Component> {
    u(gates::Z, [], [q])
}

/// Hadamard gate.
pub fn h(q: QuantumRegister) -> IrResult<Component> {
    u(gates::H, [], [q])
}

/// S (phase) gate.
pub fn s(q: QuantumRegister) -> IrResult<Component> {
    u(gates::S, [], [q])
}

/// T (π/8) gate.
pub fn t(q: QuantumRegister) -> IrResult<Component> {
    u(gates::T, [], [q])
}

/// Phase-shift gate R(φ).
pub fn r(phi: f64, q: QuantumRegister) -> IrResult<Component> {
    u(gates::R, [phi], [q])
}

/// Controlled-NOT gate. First register is control, second target.
pub fn cnot(control: QuantumRegister, target: QuantumRegister) -> IrResult<Component> {
    u(gates::CNOT, [], [control, target])
}

/// SWAP gate.
pub fn swap(a: QuantumRegister, b: QuantumRegister) -> IrResult<Component> {
    u(gates::SWAP, [], [a, b])
}

/// Controlled-Z gate.
pub fn cz(control: QuantumRegister, target: QuantumRegister) -> IrResult<Component> {
    u(gates::CZ, [], [control, target])
}

/// Controlled-S gate.
pub fn cs(control: QuantumRegister, target: QuantumRegister) -> IrResult<Component> {
    u(gates::CS, [], [control, target])
}

/// Controlled phase-shift gate CR(φ).
pub fn cr(phi: f64, control: QuantumRegister, target: QuantumRegister) -> IrResult<Component> {
    u(gates::CR, [phi], [control, target])
}

/// Toffoli (CCNOT) gate. First two registers are controls.
pub fn toffoli(
    c1: QuantumRegister,
    c2: QuantumRegister,
    target: QuantumRegister,
) -> IrResult<Component> {
    u(gates::TOFFOLI, [], [c1, c2, target])
}

/// Fredkin (CSWAP) gate. First register is control.
pub fn fredkin(
    control: QuantumRegister,
    t1: QuantumRegister,
    t2: QuantumRegister,
) -> IrResult<Component> {
    u(gates::FREDKIN, [], [control, t1, t2])
}
