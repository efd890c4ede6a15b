//! Depth-first linearization of component trees.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::gates;
use crate::register::{ClassicalRegister, QuantumRegister};

/// The kind of a flattened operation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    /// A measurement record.
    Measurement,
    /// A unitary gate record.
    Unitary,
}

/// One flattened operation record.
///
/// This is the IR's output unit: a pure projection of one leaf of a
/// component tree, produced only by flattening and never mutated.
/// Downstream backends iterate records in order, dispatch on [`kind`],
/// and interpret registers positionally per gate semantics (for `cnot`
/// the first register is control, the second target).
///
/// [`kind`]: CurrentOp::kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentOp {
    /// The operation name.
    pub name: String,
    /// The kind of operation.
    pub kind: OpKind,
    /// Ordered quantum registers.
    pub qregs: Vec<QuantumRegister>,
    /// Ordered classical registers (measurements only).
    pub cregs: Vec<ClassicalRegister>,
    /// Ordered parameter values.
    pub params: Vec<f64>,
}

/// Lazy depth-first iterator over the operation records of a subtree.
///
/// Pre-order, left-to-right over children, matching insertion order;
/// this is the canonical execution order. Created by
/// [`Component::flatten`] and [`Circuit::flatten`].
///
/// [`Circuit::flatten`]: crate::circuit::Circuit::flatten
#[derive(Debug, Clone)]
pub struct Flatten<'a> {
    // Explicit stack; children are pushed reversed so the leftmost is
    // popped first.
    stack: Vec<&'a Component>,
}

impl<'a> Flatten<'a> {
    pub(crate) fn new(roots: &'a [Component]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl Iterator for Flatten<'_> {
    type Item = CurrentOp;

    fn next(&mut self) -> Option<CurrentOp> {
        while let Some(component) = self.stack.pop() {
            match component {
                Component::Measurement(m) => {
                    return Some(CurrentOp {
                        name: gates::MEASURE.to_string(),
                        kind: OpKind::Measurement,
                        qregs: vec![m.qreg],
                        cregs: vec![m.creg],
                        params: vec![],
                    });
                }
                Component::Unitary(leaf) => {
                    return Some(CurrentOp {
                        name: leaf.name.clone(),
                        kind: OpKind::Unitary,
                        qregs: leaf.registers.clone(),
                        cregs: vec![],
                        params: leaf.params.clone(),
                    });
                }
                Component::Container(container) => {
                    self.stack.extend(container.children.iter().rev());
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op;
    use crate::register::{ClassicalRegister, QuantumRegister};

    #[test]
    fn test_flatten_container_in_child_order() {
        let q = QuantumRegister::allocate(2);
        let module = op::us(
            "m",
            vec![op::x(q[0]).unwrap(), op::h(q[1]).unwrap()],
        );

        let ops: Vec<_> = module.flatten().collect();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0].name, "x");
        assert_eq!(ops[0].qregs, vec![q[0]]);
        assert_eq!(ops[1].name, "h");
        assert_eq!(ops[1].qregs, vec![q[1]]);
    }

    #[test]
    fn test_flatten_nested_containers_pre_order() {
        let q = QuantumRegister::allocate(3);
        let inner = op::us(
            "inner",
            vec![op::cnot(q[0], q[1]).unwrap(), op::z(q[2]).unwrap()],
        );
        let outer = op::us("outer", vec![op::h(q[0]).unwrap(), inner, op::x(q[1]).unwrap()]);

        let names: Vec<_> = outer.flatten().map(|o| o.name).collect();
        assert_eq!(names, vec!["h", "cnot", "z", "x"]);
    }

    #[test]
    fn test_flatten_is_restartable() {
        let q = QuantumRegister::allocate(1);
        let module = op::us("m", vec![op::h(q[0]).unwrap()]);
        assert_eq!(module.flatten().count(), 1);
        assert_eq!(module.flatten().count(), 1);
    }

    #[test]
    fn test_empty_container_flattens_to_nothing() {
        let noop = op::us("noop", vec![]);
        assert_eq!(noop.flatten().count(), 0);
    }

    #[test]
    fn test_measurement_record() {
        let q = QuantumRegister::allocate(1);
        let c = ClassicalRegister::allocate(1);
        let m = op::measure(q[0], c[0]);

        let ops: Vec<_> = m.flatten().collect();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, OpKind::Measurement);
        assert_eq!(ops[0].qregs, vec![q[0]]);
        assert_eq!(ops[0].cregs, vec![c[0]]);
        assert!(ops[0].params.is_empty());
    }

    #[test]
    fn test_parameter_values_carried_through() {
        let q = QuantumRegister::allocate(1);
        let r = op::r(1.25, q[0]).unwrap();
        let ops: Vec<_> = r.flatten().collect();
        assert_eq!(ops[0].params, vec![1.25]);
        assert_eq!(ops[0].kind, OpKind::Unitary);
    }

    #[test]
    fn test_current_op_serde_roundtrip() {
        let q = QuantumRegister::allocate(1);
        let r = op::r(0.5, q[0]).unwrap();
        let record = r.flatten().next().unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: CurrentOp = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
