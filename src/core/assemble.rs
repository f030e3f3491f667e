// turns resolved terms into property mappings
use std::collections::HashSet;
use std::fmt;

use crate::core::resolve::ResolvedTerms;
use crate::core::types::{PortRef, PropertyName};

/// `source_port.source_property -> destination_port.destination_property`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyMapping {
    pub source_port: PortRef,
    pub source_property: PropertyName,
    pub destination_port: PortRef,
    pub destination_property: PropertyName,
}

impl PropertyMapping {
    pub fn new(
        source_port: PortRef,
        source_property: PropertyName,
        destination_port: PortRef,
        destination_property: PropertyName,
    ) -> Self {
        Self { source_port, source_property, destination_port, destination_property }
    }
}

impl fmt::Display for PropertyMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.source_port, self.source_property, self.destination_port, self.destination_property
        )
    }
}

//joined-side names already written; claim order is the order of the emitted mappings
#[derive(Debug, Default)]
struct DestinationLedger {
    seen: HashSet<PropertyName>,
}

impl DestinationLedger {
    fn new() -> Self {
        Self::default()
    }

    //false if `name` was already claimed
    fn claim(&mut self, name: &PropertyName) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.clone());
        true
    }
}

/// Join direction: constituent ports write into `joined`.
///
/// Ports are visited in resolved order (master, then transaction) and pairs in declaration
/// order. The first pair to claim a destination wins; later ones are dropped.
pub fn assemble_join(joined: PortRef, terms: &ResolvedTerms<'_>) -> Vec<PropertyMapping> {
    let mut ledger = DestinationLedger::new();
    let mut results = Vec::new();
    for (port, term) in terms.iter() {
        for element in &term.mappings {
            if !ledger.claim(&element.destination) {
                tracing::trace!(
                    port = %port,
                    source = %element.source,
                    destination = %element.destination,
                    "destination already mapped, skipping"
                );
                continue;
            }
            results.push(PropertyMapping::new(
                port,
                element.source.clone(),
                joined,
                element.destination.clone(),
            ));
        }
    }
    results
}

/// Split direction: `joined` feeds each constituent port, every pair kept.
pub fn assemble_split(joined: PortRef, terms: &ResolvedTerms<'_>) -> Vec<PropertyMapping> {
    let mut results = Vec::new();
    for (port, term) in terms.iter() {
        for element in &term.mappings {
            results.push(PropertyMapping::new(
                joined,
                element.destination.clone(),
                port,
                element.source.clone(),
            ));
        }
    }
    results
}
