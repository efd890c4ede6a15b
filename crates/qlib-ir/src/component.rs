//! Circuit components.
//!
//! A component is one node of a circuit tree: a measurement, a unitary
//! gate leaf, or a container holding an ordered composition of other
//! components. Ownership is strictly tree-shaped; a component has exactly
//! one owner and no back-references.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::flatten::Flatten;
use crate::gates;
use crate::register::{ClassicalRegister, QuantumRegister};

/// The kind of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// A measurement of one qubit into one classical bit.
    Measurement,
    /// A unitary gate leaf.
    Unitary,
    /// An ordered composition of components.
    Container,
}

/// One node of a circuit tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    /// A measurement operation.
    Measurement(Measurement),
    /// A unitary gate leaf.
    Unitary(UnitaryLeaf),
    /// A container of child components.
    Container(UnitaryContainer),
}

impl Component {
    /// Get the name of this component.
    pub fn name(&self) -> &str {
        match self {
            Component::Measurement(_) => gates::MEASURE,
            Component::Unitary(leaf) => &leaf.name,
            Component::Container(container) => &container.name,
        }
    }

    /// Get the kind of this component.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Measurement(_) => ComponentKind::Measurement,
            Component::Unitary(_) => ComponentKind::Unitary,
            Component::Container(_) => ComponentKind::Container,
        }
    }

    /// Get the parameters of this component.
    ///
    /// For containers this is the concatenation of all descendant leaf
    /// parameters in flatten order.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            Component::Measurement(_) => vec![],
            Component::Unitary(leaf) => leaf.params.clone(),
            Component::Container(container) => container
                .children
                .iter()
                .flat_map(Component::parameters)
                .collect(),
        }
    }

    /// Get the quantum registers this component touches.
    ///
    /// For containers this is the concatenation of all descendant leaf
    /// register lists in first-occurrence order. A register used by two
    /// distinct leaves appears twice; de-duplication is a consumer
    /// concern, not an ordering one.
    pub fn registers(&self) -> Vec<QuantumRegister> {
        match self {
            Component::Measurement(m) => vec![m.qreg],
            Component::Unitary(leaf) => leaf.registers.clone(),
            Component::Container(container) => container
                .children
                .iter()
                .flat_map(Component::registers)
                .collect(),
        }
    }

    /// Linearize this subtree into its ordered operation records.
    ///
    /// The traversal is depth-first, pre-order, left-to-right over
    /// children, matching insertion order. The iterator is lazy and the
    /// method may be called any number of times.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(std::slice::from_ref(self))
    }

    /// Check if this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, Component::Measurement(_))
    }

    /// Check if this is a unitary leaf.
    pub fn is_unitary(&self) -> bool {
        matches!(self, Component::Unitary(_))
    }

    /// Check if this is a container.
    pub fn is_container(&self) -> bool {
        matches!(self, Component::Container(_))
    }

    /// Get the container if this is one.
    pub fn as_container(&self) -> Option<&UnitaryContainer> {
        match self {
            Component::Container(container) => Some(container),
            _ => None,
        }
    }

    /// Get the unitary leaf if this is one.
    pub fn as_unitary(&self) -> Option<&UnitaryLeaf> {
        match self {
            Component::Unitary(leaf) => Some(leaf),
            _ => None,
        }
    }
}

impl From<Measurement> for Component {
    fn from(m: Measurement) -> Self {
        Component::Measurement(m)
    }
}

impl From<UnitaryLeaf> for Component {
    fn from(leaf: UnitaryLeaf) -> Self {
        Component::Unitary(leaf)
    }
}

impl From<UnitaryContainer> for Component {
    fn from(container: UnitaryContainer) -> Self {
        Component::Container(container)
    }
}

/// A measurement of one qubit into one classical bit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// The quantum register being measured.
    pub qreg: QuantumRegister,
    /// The classical register receiving the outcome.
    pub creg: ClassicalRegister,
}

impl Measurement {
    /// Create a new measurement. Single qubit, single bit by design.
    pub fn new(qreg: QuantumRegister, creg: ClassicalRegister) -> Self {
        Self { qreg, creg }
    }
}

/// A named unitary gate over fixed registers and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitaryLeaf {
    /// The gate name.
    pub name: String,
    /// Ordered quantum registers the gate acts on.
    pub registers: Vec<QuantumRegister>,
    /// Ordered numeric parameters.
    pub params: Vec<f64>,
}

impl UnitaryLeaf {
    /// Create a new unitary leaf.
    ///
    /// Fails with [`IrError::DuplicateRegister`] if any two supplied
    /// registers are identity-equal, and with [`IrError::ArityMismatch`]
    /// if `name` is a catalog gate and the supplied counts disagree with
    /// its fixed signature.
    pub fn new(
        name: impl Into<String>,
        registers: Vec<QuantumRegister>,
        params: Vec<f64>,
    ) -> IrResult<Self> {
        let name = name.into();

        if let Some((expected_registers, expected_params)) = gates::signature(&name) {
            if registers.len() != expected_registers || params.len() != expected_params {
                return Err(IrError::ArityMismatch {
                    gate: name,
                    expected_registers,
                    got_registers: registers.len(),
                    expected_params,
                    got_params: params.len(),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for reg in &registers {
            if !seen.insert(*reg) {
                return Err(IrError::DuplicateRegister {
                    gate: name,
                    register: *reg,
                });
            }
        }

        Ok(Self {
            name,
            registers,
            params,
        })
    }
}

/// An ordered composition of owned child components.
///
/// A container may be empty, representing a named no-op grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitaryContainer {
    /// The container name.
    pub name: String,
    /// Owned children in program order.
    pub children: Vec<Component>,
}

impl UnitaryContainer {
    /// Create a container from already-constructed children.
    pub fn new(name: impl Into<String>, children: Vec<Component>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    /// Append a child, taking ownership.
    pub fn push(&mut self, child: impl Into<Component>) {
        self.children.push(child.into());
    }

    /// Look up a direct child by name.
    ///
    /// Fails with [`IrError::UnknownSubcomponent`] if no child carries
    /// the name. When several children share a name the first in program
    /// order wins.
    pub fn child(&self, name: &str) -> IrResult<&Component> {
        self.children
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| IrError::UnknownSubcomponent {
                container: self.name.clone(),
                name: name.to_string(),
            })
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
