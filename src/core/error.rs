use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::shape::ShapeKind;
use crate::core::types::TypeRef;

/// Invalid or unreadable decomposition metadata.
#[derive(Debug, Error)]
pub enum DecompositionError {
    #[error("joined model {composite} declares term {term} more than once")]
    DuplicateTerm { composite: TypeRef, term: TypeRef },

    #[error("joined model {composite} maps properties of undeclared term {term}")]
    UnknownTerm { composite: TypeRef, term: TypeRef },

    #[error("failed to parse joined model schema: {0}")]
    Parse(String),

    #[error("failed to read joined model schema {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a property mapping analysis.
///
/// Every variant names the operator or type at fault so the caller can build a diagnostic.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("operator must be using joined models: {operator} ({kind})")]
    UnsupportedOperator { operator: String, kind: String },

    #[error(
        "operator {operator} ({shape}) must have {expected_inputs} input(s) and {expected_outputs} output(s), found {actual_inputs} and {actual_outputs}"
    )]
    Arity {
        operator: String,
        shape: ShapeKind,
        expected_inputs: usize,
        expected_outputs: usize,
        actual_inputs: usize,
        actual_outputs: usize,
    },

    #[error("class must be a joined data model: {data_type}")]
    NotComposite { data_type: TypeRef },

    #[error(
        "invalid joined model {composite} used in {operator} ({reason}): {}",
        type_list(.unmatched)
    )]
    StructureMismatch {
        operator: String,
        composite: TypeRef,
        reason: MismatchReason,
        //terms left unbound when the mismatch was found, declaration order
        unmatched: Vec<TypeRef>,
    },

    #[error(transparent)]
    Decomposition(#[from] DecompositionError),
}

/// Which side of the term/port bijection broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MismatchReason {
    /// A port's declared type has no term.
    MissingTerm(TypeRef),
    /// Terms remain after both ports were bound.
    ExtraTerms,
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MismatchReason::MissingTerm(port_type) => write!(f, "must consist of {port_type}"),
            MismatchReason::ExtraTerms => f.write_str("extra terms not bound to any port"),
        }
    }
}

fn type_list(types: &[TypeRef]) -> String {
    let names: Vec<&str> = types.iter().map(TypeRef::name).collect();
    format!("[{}]", names.join(", "))
}
