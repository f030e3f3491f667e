// entry points: is_supported + get_property_mappings
use crate::core::assemble::{PropertyMapping, assemble_join, assemble_split};
use crate::core::decomposition::{DecompositionProvider, decompose};
use crate::core::error::AnalysisError;
use crate::core::graph::{Operator, OperatorPort};
use crate::core::resolve::resolve_terms;
use crate::core::shape::{ShapeKind, check_shape};
use crate::core::types::{PortDirection, PortRef};

/// Whether the operator moves data through a joined model (a `MasterJoin` or `Split`).
pub fn is_supported(operator: &Operator) -> bool {
    ShapeKind::recognize(&operator.kind).is_some()
}

/// Resolves the property mappings between an operator's joined model port and its two
/// constituent ports.
///
/// Join operators yield one mapping per distinct joined property (first declaration wins).
/// Split operators yield one mapping per declared pair.
pub fn get_property_mappings(
    operator: &Operator,
    provider: &dyn DecompositionProvider,
) -> Result<Vec<PropertyMapping>, AnalysisError> {
    let Some(shape) = ShapeKind::recognize(&operator.kind) else {
        return Err(AnalysisError::UnsupportedOperator {
            operator: operator.id.clone(),
            kind: operator.kind.to_string(),
        });
    };
    check_shape(operator, shape)?;

    let composite = shape.composite_port();
    let composite_type = &port_of(operator, composite).data_type;
    tracing::debug!(operator = %operator, %shape, composite = %composite_type, "analyzing joined model");

    let decomposition = decompose(provider, composite_type)?;

    let [a, b] = shape.constituent_ports();
    let terms = resolve_terms(
        &operator.id,
        &decomposition,
        (a, &port_of(operator, a).data_type),
        (b, &port_of(operator, b).data_type),
    )?;

    let mappings = match shape {
        ShapeKind::Join => assemble_join(composite, &terms),
        ShapeKind::Split => assemble_split(composite, &terms),
    };
    tracing::debug!(operator = %operator, count = mappings.len(), "resolved property mappings");
    Ok(mappings)
}

//only called after check_shape, so the index is in range
fn port_of(operator: &Operator, port: PortRef) -> &OperatorPort {
    match port.direction {
        PortDirection::Input => &operator.inputs[port.index],
        PortDirection::Output => &operator.outputs[port.index],
    }
}
