// operator graph view consumed by the analyzer
use std::fmt;

use crate::core::types::TypeRef;

/// What kind of operator a graph node is.
///
/// Only user operators carry an annotation that can name a join or split shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// User-defined operator, identified by its annotation's simple name (e.g. `MasterJoin`).
    User { annotation: String },
    Core(String),
    Marker,
    Flow(String),
}

impl OperatorKind {
    pub fn user(annotation: impl Into<String>) -> Self {
        OperatorKind::User { annotation: annotation.into() }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::User { annotation } => write!(f, "@{annotation}"),
            OperatorKind::Core(name) => write!(f, "core:{name}"),
            OperatorKind::Marker => f.write_str("marker"),
            OperatorKind::Flow(name) => write!(f, "flow:{name}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorPort {
    pub name: String,
    pub data_type: TypeRef,
}

impl OperatorPort {
    pub fn new(name: impl Into<String>, data_type: impl Into<TypeRef>) -> Self {
        Self { name: name.into(), data_type: data_type.into() }
    }
}

/// A single operator with its ordered input and output ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub id: String,
    pub kind: OperatorKind,
    pub inputs: Vec<OperatorPort>,
    pub outputs: Vec<OperatorPort>,
}

impl Operator {
    pub fn new(id: impl Into<String>, kind: OperatorKind) -> Self {
        Self { id: id.into(), kind, inputs: Vec::new(), outputs: Vec::new() }
    }

    pub fn with_input(mut self, name: &str, data_type: &str) -> Self {
        self.inputs.push(OperatorPort::new(name, data_type));
        self
    }

    pub fn with_output(mut self, name: &str, data_type: &str) -> Self {
        self.outputs.push(OperatorPort::new(name, data_type));
        self
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.id, self.kind)
    }
}
