// joined model declarations: terms + their property pairs
use std::collections::HashSet;

use crate::core::error::{AnalysisError, DecompositionError};
use crate::core::types::{PropertyName, TypeRef};

/// One `source -> destination` pair of a term.
///
/// `source` is a property of the term's constituent type, `destination` a property of the
/// joined model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingElement {
    pub source: PropertyName,
    pub destination: PropertyName,
}

impl MappingElement {
    pub fn new(source: impl Into<PropertyName>, destination: impl Into<PropertyName>) -> Self {
        Self { source: source.into(), destination: destination.into() }
    }
}

/// A constituent type's contribution to a joined model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub source: TypeRef,
    pub mappings: Vec<MappingElement>,
}

impl Term {
    pub fn new(source: impl Into<TypeRef>) -> Self {
        Self { source: source.into(), mappings: Vec::new() }
    }

    pub fn with_mapping(mut self, source: &str, destination: &str) -> Self {
        self.mappings.push(MappingElement::new(source, destination));
        self
    }
}

/// Declared decomposition of one joined model, terms in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDecomposition {
    composite: TypeRef,
    terms: Vec<Term>,
}

impl CompositeDecomposition {
    /// Builds a decomposition; each constituent type may appear in at most one term.
    pub fn new(composite: TypeRef, terms: Vec<Term>) -> Result<Self, DecompositionError> {
        let mut seen = HashSet::new();
        for term in &terms {
            if !seen.insert(&term.source) {
                return Err(DecompositionError::DuplicateTerm {
                    composite,
                    term: term.source.clone(),
                });
            }
        }
        Ok(Self { composite, terms })
    }

    pub fn composite(&self) -> &TypeRef {
        &self.composite
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term_for(&self, data_type: &TypeRef) -> Option<&Term> {
        self.terms.iter().find(|t| &t.source == data_type)
    }

    //constituent types, declaration order
    pub fn types(&self) -> impl Iterator<Item = &TypeRef> + '_ {
        self.terms.iter().map(|t| &t.source)
    }
}

/// Source of joined model declarations.
///
/// Implementations own any lookup caching; the analyzer only reads.
pub trait DecompositionProvider: Send + Sync {
    fn lookup_decomposition(&self, data_type: &TypeRef) -> Option<CompositeDecomposition>;
}

/// Returns the declared decomposition of `data_type`, or `NotComposite`.
pub fn decompose(
    provider: &dyn DecompositionProvider,
    data_type: &TypeRef,
) -> Result<CompositeDecomposition, AnalysisError> {
    provider
        .lookup_decomposition(data_type)
        .ok_or_else(|| AnalysisError::NotComposite { data_type: data_type.clone() })
}

/// Whether `data_type` is declared as a joined model.
pub fn is_composite(provider: &dyn DecompositionProvider, data_type: &TypeRef) -> bool {
    provider.lookup_decomposition(data_type).is_some()
}
