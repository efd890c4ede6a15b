//! High-level circuit type.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::{IrError, IrResult};
use crate::flatten::Flatten;
use crate::register::{ClassicalRegister, QuantumRegister};

/// A quantum circuit.
///
/// Owns a register bank allocated at construction time and an ordered
/// sequence of top-level components. Append order is program order; the
/// circuit is append-only and never mutates or removes a component once
/// it is in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// The quantum register bank.
    qregs: Vec<QuantumRegister>,
    /// The classical register bank.
    cregs: Vec<ClassicalRegister>,
    /// Top-level components in program order.
    components: Vec<Component>,
}

impl Circuit {
    /// Create a circuit with a quantum register bank and no classical
    /// registers.
    pub fn new(name: impl Into<String>, num_qubits: usize) -> Self {
        Self::with_size(name, num_qubits, 0)
    }

    /// Create a circuit with both quantum and classical register banks.
    pub fn with_size(name: impl Into<String>, num_qubits: usize, num_clbits: usize) -> Self {
        Self {
            name: name.into(),
            qregs: QuantumRegister::allocate(num_qubits),
            cregs: ClassicalRegister::allocate(num_clbits),
            components: vec![],
        }
    }

    /// Append a top-level component, taking ownership.
    ///
    /// Returns the circuit itself so appends chain.
    pub fn append(&mut self, component: impl Into<Component>) -> &mut Self {
        self.components.push(component.into());
        self
    }

    /// Linearize the whole circuit into its ordered operation stream.
    ///
    /// Concatenation, in append order, of each component's flatten. Does
    /// not mutate the circuit and may be called any number of times.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(&self.components)
    }

    /// Look up a top-level component by name.
    pub fn component(&self, name: &str) -> IrResult<&Component> {
        self.components
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| IrError::UnknownSubcomponent {
                container: self.name.clone(),
                name: name.to_string(),
            })
    }

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get one quantum register from the bank.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn qreg(&self, index: usize) -> QuantumRegister {
        self.qregs[index]
    }

    /// Get one classical register from the bank.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range, like slice indexing.
    pub fn creg(&self, index: usize) -> ClassicalRegister {
        self.cregs[index]
    }

    /// Get the quantum register bank.
    pub fn qregs(&self) -> &[QuantumRegister] {
        &self.qregs
    }

    /// Get the classical register bank.
    pub fn cregs(&self) -> &[ClassicalRegister] {
        &self.cregs
    }

    /// Get the top-level components in program order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Get the number of quantum registers.
    pub fn num_qubits(&self) -> usize {
        self.qregs.len()
    }

    /// Get the number of classical registers.
    pub fn num_clbits(&self) -> usize {
        self.cregs.len()
    }

    /// Number of top-level components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Check if no component has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::OpKind;
    use crate::op;

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::with_size("test", 3, 2);
        assert_eq!(circuit.name(), "test");
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.num_clbits(), 2);
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_register_banks_are_disjoint_across_circuits() {
        let a = Circuit::new("a", 2);
        let b = Circuit::new("b", 2);
        for qa in a.qregs() {
            for qb in b.qregs() {
                assert_ne!(qa, qb);
            }
        }
    }

    #[test]
    fn test_chained_append_preserves_order() {
        let mut circuit = Circuit::with_size("bell", 2, 2);
        let (q0, q1) = (circuit.qreg(0), circuit.qreg(1));
        let (c0, c1) = (circuit.creg(0), circuit.creg(1));

        circuit
            .append(op::h(q0).unwrap())
            .append(op::cnot(q0, q1).unwrap())
            .append(op::measure(q0, c0))
            .append(op::measure(q1, c1));

        let ops: Vec<_> = circuit.flatten().collect();
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0].name, "h");
        assert_eq!(ops[1].name, "cnot");
        assert_eq!(ops[1].qregs, vec![q0, q1]);
        assert_eq!(ops[2].kind, OpKind::Measurement);
        assert_eq!(ops[3].qregs, vec![q1]);
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let mut circuit = Circuit::new("test", 1);
        let q0 = circuit.qreg(0);
        circuit.append(op::x(q0).unwrap());

        let first: Vec<_> = circuit.flatten().collect();
        let second: Vec<_> = circuit.flatten().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_flatten_descends_into_containers() {
        let mut circuit = Circuit::new("test", 2);
        let (q0, q1) = (circuit.qreg(0), circuit.qreg(1));

        let module = op::us("m", vec![op::x(q0).unwrap(), op::h(q1).unwrap()]);
        circuit.append(module).append(op::cz(q0, q1).unwrap());

        let names: Vec<_> = circuit.flatten().map(|o| o.name).collect();
        assert_eq!(names, vec!["x", "h", "cz"]);
    }

    #[test]
    fn test_component_lookup() {
        let mut circuit = Circuit::new("test", 1);
        let q0 = circuit.qreg(0);
        circuit.append(op::us("prep", vec![op::h(q0).unwrap()]));

        assert!(circuit.component("prep").is_ok());
        assert!(circuit.component("teardown").is_err());
    }

    #[test]
    fn test_circuit_serde_roundtrip() {
        let mut circuit = Circuit::with_size("test", 2, 1);
        let (q0, q1) = (circuit.qreg(0), circuit.qreg(1));
        let c0 = circuit.creg(0);
        circuit
            .append(op::h(q0).unwrap())
            .append(op::cr(0.25, q0, q1).unwrap())
            .append(op::measure(q1, c0));

        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(circuit, back);
    }
}
