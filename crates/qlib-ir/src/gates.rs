//! The standard gate catalog.
//!
//! Gate names are immutable process-wide constants, and each catalog name
//! carries a fixed signature: how many quantum registers and how many
//! numeric parameters the gate takes. The builder checks every catalog
//! name against its signature at construction time.

/// Identity gate.
pub const ID: &str = "id";
/// Pauli-X gate.
pub const X: &str = "x";
/// Pauli-Y gate.
pub const Y: &str = "y";
/// Pauli-Z gate.
pub const Z: &str = "z";
/// Hadamard gate.
pub const H: &str = "h";
/// S gate (sqrt(Z)).
pub const S: &str = "s";
/// T gate (fourth root of Z).
pub const T: &str = "t";
/// Phase-shift gate R(φ).
pub const R: &str = "r";
/// Controlled-NOT gate.
pub const CNOT: &str = "cnot";
/// SWAP gate.
pub const SWAP: &str = "swap";
/// Controlled-Z gate.
pub const CZ: &str = "cz";
/// Controlled-S gate.
pub const CS: &str = "cs";
/// Controlled phase-shift gate CR(φ).
pub const CR: &str = "cr";
/// Toffoli (CCNOT) gate.
pub const TOFFOLI: &str = "toffoli";
/// Fredkin (CSWAP) gate.
pub const FREDKIN: &str = "fredkin";
/// Measurement.
pub const MEASURE: &str = "measure";

/// Fixed `(register_arity, parameter_arity)` for a catalog gate name.
///
/// Returns `None` for names outside the catalog; those carry whatever
/// arity their construction call supplies.
pub fn signature(name: &str) -> Option<(usize, usize)> {
    match name {
        ID | X | Y | Z | H | S | T => Some((1, 0)),
        R => Some((1, 1)),
        CNOT | SWAP | CZ | CS => Some((2, 0)),
        CR => Some((2, 1)),
        TOFFOLI | FREDKIN => Some((3, 0)),
        _ => None,
    }
}
