//! Property mapping analysis for joined data models.
//!
//! A joined model is a record type declared as the combination of two constituent record
//! types. `MasterJoin` operators build one from a master and a transaction record; `Split`
//! operators break one back into its left and right parts. This crate turns the declaration
//! into the explicit list of `port.property -> port.property` mappings the operator implies.

pub mod core;
pub mod mapping;

pub use crate::core::analyzer::{get_property_mappings, is_supported};
pub use crate::core::assemble::PropertyMapping;
pub use crate::core::decomposition::{
    CompositeDecomposition, DecompositionProvider, MappingElement, Term, decompose, is_composite,
};
pub use crate::core::error::{AnalysisError, DecompositionError, MismatchReason};
pub use crate::core::graph::{Operator, OperatorKind, OperatorPort};
pub use crate::core::shape::ShapeKind;
pub use crate::core::types::{PortDirection, PortRef, PortRole, PropertyName, TypeRef};
pub use crate::mapping::catalog::DecompositionCatalog;
