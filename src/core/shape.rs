// operator shape recognition + arity checks
use std::fmt;

use crate::core::error::AnalysisError;
use crate::core::graph::{Operator, OperatorKind};
use crate::core::types::{PortRef, PortRole};

/// The two operator shapes that move data through a joined model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `master` + `transaction` in, `joined` + `missed` out.
    Join,
    /// `joined` in, `left` + `right` out.
    Split,
}

//annotation simple name -> shape. fixed, not an extension point
const SHAPE_TABLE: &[(&str, ShapeKind)] = &[
    ("MasterJoin", ShapeKind::Join),
    ("Split", ShapeKind::Split),
];

impl ShapeKind {
    /// Looks up the shape of an operator kind. Only user operators can have one.
    pub fn recognize(kind: &OperatorKind) -> Option<ShapeKind> {
        let OperatorKind::User { annotation } = kind else {
            return None;
        };
        SHAPE_TABLE
            .iter()
            .find(|(name, _)| *name == annotation.as_str())
            .map(|&(_, shape)| shape)
    }

    pub fn input_roles(&self) -> &'static [PortRole] {
        match self {
            ShapeKind::Join => &[PortRole::Master, PortRole::Transaction],
            ShapeKind::Split => &[PortRole::Joined],
        }
    }

    pub fn output_roles(&self) -> &'static [PortRole] {
        match self {
            ShapeKind::Join => &[PortRole::Joined, PortRole::Missed],
            ShapeKind::Split => &[PortRole::Left, PortRole::Right],
        }
    }

    /// The port carrying the joined model.
    pub fn composite_port(&self) -> PortRef {
        match self {
            ShapeKind::Join => PortRef::output(0, PortRole::Joined),
            ShapeKind::Split => PortRef::input(0, PortRole::Joined),
        }
    }

    /// The two ports carrying the constituent models, in assembly order.
    pub fn constituent_ports(&self) -> [PortRef; 2] {
        match self {
            ShapeKind::Join => [
                PortRef::input(0, PortRole::Master),
                PortRef::input(1, PortRole::Transaction),
            ],
            ShapeKind::Split => [
                PortRef::output(0, PortRole::Left),
                PortRef::output(1, PortRole::Right),
            ],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Join => f.write_str("join"),
            ShapeKind::Split => f.write_str("split"),
        }
    }
}

/// Fails unless the operator has exactly as many ports as `shape` lays out.
pub fn check_shape(operator: &Operator, shape: ShapeKind) -> Result<(), AnalysisError> {
    let expected_inputs = shape.input_roles().len();
    let expected_outputs = shape.output_roles().len();
    if operator.inputs.len() != expected_inputs || operator.outputs.len() != expected_outputs {
        return Err(AnalysisError::Arity {
            operator: operator.id.clone(),
            shape,
            expected_inputs,
            expected_outputs,
            actual_inputs: operator.inputs.len(),
            actual_outputs: operator.outputs.len(),
        });
    }
    Ok(())
}
