/*
Inputs:

    joined_models.toon (terms + mappings per joined model)

Outputs:

    DecompositionCatalog: TypeRef -> CompositeDecomposition

Responsibilities:

    Keep term order and pair order exactly as written

    Reject a term declared twice for the same model

    Reject mapping rows for terms that were never declared

    Read every cell as a name, even when TOON would type it (true, null, 42, 1.5).
    Numbers come back in canonical form, so quote a name to keep e.g. 1.50 verbatim.
*/
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::core::decomposition::{
    CompositeDecomposition, DecompositionProvider, MappingElement, Term,
};
use crate::core::error::DecompositionError;
use crate::core::types::{PropertyName, TypeRef};

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    terms: Vec<TermRow>,
    #[serde(default)]
    mappings: Vec<MappingRow>,
}

#[derive(Debug, Deserialize)]
struct TermRow {
    #[serde(deserialize_with = "scalar_name")]
    model: String,
    #[serde(deserialize_with = "scalar_name")]
    source: String,
}

#[derive(Debug, Deserialize)]
struct MappingRow {
    #[serde(deserialize_with = "scalar_name")]
    model: String,
    #[serde(deserialize_with = "scalar_name")]
    term: String,
    #[serde(deserialize_with = "scalar_name")]
    source: String,
    #[serde(deserialize_with = "scalar_name")]
    destination: String,
}

//any primitive cell -> its text
fn scalar_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScalarName;

    impl<'de> Visitor<'de> for ScalarName {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a type or property name")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok("null".to_string())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok("null".to_string())
        }
    }

    deserializer.deserialize_any(ScalarName)
}

/// In-memory set of joined model declarations, looked up by composite type.
#[derive(Debug, Clone, Default)]
pub struct DecompositionCatalog {
    models: HashMap<TypeRef, CompositeDecomposition>,
}

impl DecompositionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a decomposition, replacing any previous one for the same composite type.
    pub fn insert(&mut self, decomposition: CompositeDecomposition) -> Option<CompositeDecomposition> {
        self.models.insert(decomposition.composite().clone(), decomposition)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Loads a catalog from a TOON schema document.
    pub fn from_toon(text: &str) -> Result<Self, DecompositionError> {
        let doc: SchemaDocument = toon_format::decode_default(text)
            .map_err(|e| DecompositionError::Parse(e.to_string()))?;
        Self::from_document(doc)
    }

    pub fn from_toon_file(path: impl AsRef<Path>) -> Result<Self, DecompositionError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DecompositionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toon(&text)?;
        tracing::debug!(path = %path.display(), models = catalog.len(), "loaded joined model schema");
        Ok(catalog)
    }

    fn from_document(doc: SchemaDocument) -> Result<Self, DecompositionError> {
        //model -> terms, both in first-seen order
        let mut order: Vec<TypeRef> = Vec::new();
        let mut terms: HashMap<TypeRef, Vec<Term>> = HashMap::new();

        for row in doc.terms {
            let model = TypeRef::new(row.model);
            let entry = terms.entry(model.clone()).or_insert_with(|| {
                order.push(model.clone());
                Vec::new()
            });
            entry.push(Term::new(TypeRef::new(row.source)));
        }

        for row in doc.mappings {
            let model = TypeRef::new(row.model);
            let term_type = TypeRef::new(row.term);
            let term = terms
                .get_mut(&model)
                .and_then(|ts| ts.iter_mut().find(|t| t.source == term_type));
            let Some(term) = term else {
                return Err(DecompositionError::UnknownTerm { composite: model, term: term_type });
            };
            term.mappings.push(MappingElement {
                source: PropertyName::new(row.source),
                destination: PropertyName::new(row.destination),
            });
        }

        let mut catalog = Self::new();
        for model in order {
            let model_terms = terms.remove(&model).unwrap_or_default();
            catalog.insert(CompositeDecomposition::new(model, model_terms)?);
        }
        Ok(catalog)
    }
}

impl DecompositionProvider for DecompositionCatalog {
    fn lookup_decomposition(&self, data_type: &TypeRef) -> Option<CompositeDecomposition> {
        self.models.get(data_type).cloned()
    }
}
