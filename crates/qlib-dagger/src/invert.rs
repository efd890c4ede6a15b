//! Recursive inversion of component trees.

use tracing::trace;

use qlib_ir::{Component, op};

use crate::error::{DaggerError, DaggerResult};
use crate::rules;

/// Produce the adjoint of a component, recursively.
///
/// - A unitary leaf inverts through the rule registry: the adjoint acts
///   on the same registers in the same order, with parameters produced
///   by the rule's transform.
/// - A container inverts into a container of the children's adjoints in
///   reversed order: the adjoint of A then B is dagger(B) then
///   dagger(A).
/// - A measurement has no adjoint; any subtree containing one fails
///   with [`DaggerError::NotInvertible`].
pub fn dagger(component: &Component) -> DaggerResult<Component> {
    match component {
        Component::Measurement(_) => Err(DaggerError::NotInvertible),

        Component::Unitary(leaf) => {
            let rule = rules::lookup(&leaf.name, leaf.registers.len(), leaf.params.len())
                .ok_or_else(|| DaggerError::UnknownInverse {
                    name: leaf.name.clone(),
                    register_arity: leaf.registers.len(),
                    parameter_arity: leaf.params.len(),
                })?;

            trace!(
                gate = %leaf.name,
                inverse = rule.inverse_name,
                "resolved dagger rule"
            );

            let params = (rule.transform)(&leaf.params);
            Ok(op::u(rule.inverse_name, params, leaf.registers.iter().copied())?)
        }

        Component::Container(container) => {
            let children = container
                .children
                .iter()
                .rev()
                .map(dagger)
                .collect::<DaggerResult<Vec<_>>>()?;
            Ok(op::us(container.name.clone(), children))
        }
    }
}
