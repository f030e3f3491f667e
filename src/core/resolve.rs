// binds each constituent port to exactly one term
use crate::core::decomposition::{CompositeDecomposition, Term};
use crate::core::error::{AnalysisError, MismatchReason};
use crate::core::types::{PortRef, TypeRef};

/// Two ports with their matched terms, in the order the ports were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTerms<'a> {
    entries: [(PortRef, &'a Term); 2],
}

impl<'a> ResolvedTerms<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (PortRef, &'a Term)> + '_ {
        self.entries.iter().copied()
    }
}

/// Matches `(port, declared type)` pairs against the decomposition's terms.
///
/// Every term must be claimed by exactly one port; a port type with no term and a term
/// with no port are both structure mismatches.
pub fn resolve_terms<'a>(
    operator: &str,
    decomposition: &'a CompositeDecomposition,
    a: (PortRef, &TypeRef),
    b: (PortRef, &TypeRef),
) -> Result<ResolvedTerms<'a>, AnalysisError> {
    //terms not yet claimed by a port, declaration order
    let mut remaining: Vec<&'a Term> = decomposition.terms().iter().collect();

    let mut claim = |(port, data_type): (PortRef, &TypeRef)| -> Result<(PortRef, &'a Term), AnalysisError> {
        match remaining.iter().position(|t| &t.source == data_type) {
            Some(index) => Ok((port, remaining.remove(index))),
            None => Err(AnalysisError::StructureMismatch {
                operator: operator.to_string(),
                composite: decomposition.composite().clone(),
                reason: MismatchReason::MissingTerm(data_type.clone()),
                unmatched: remaining.iter().map(|t| t.source.clone()).collect(),
            }),
        }
    };

    let first = claim(a)?;
    let second = claim(b)?;

    if !remaining.is_empty() {
        return Err(AnalysisError::StructureMismatch {
            operator: operator.to_string(),
            composite: decomposition.composite().clone(),
            reason: MismatchReason::ExtraTerms,
            unmatched: remaining.iter().map(|t| t.source.clone()).collect(),
        });
    }

    Ok(ResolvedTerms { entries: [first, second] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::PortRole;

    fn mk_decomposition(types: &[&str]) -> CompositeDecomposition {
        let terms = types.iter().map(|&t| Term::new(t)).collect();
        CompositeDecomposition::new(TypeRef::from("J"), terms).unwrap()
    }

    fn master() -> PortRef {
        PortRef::input(0, PortRole::Master)
    }

    fn transaction() -> PortRef {
        PortRef::input(1, PortRole::Transaction)
    }

    #[test]
    fn binds_ports_regardless_of_term_order() {
        let d = mk_decomposition(&["Y", "X"]);
        let (x, y) = (TypeRef::from("X"), TypeRef::from("Y"));
        let resolved = resolve_terms("op", &d, (master(), &x), (transaction(), &y)).unwrap();

        let order: Vec<(PortRole, &str)> =
            resolved.iter().map(|(p, t)| (p.role, t.source.name())).collect();
        assert_eq!(order, vec![(PortRole::Master, "X"), (PortRole::Transaction, "Y")]);
    }

    #[test]
    fn port_type_without_term_is_mismatch() {
        let d = mk_decomposition(&["X", "Y"]);
        let (x, z) = (TypeRef::from("X"), TypeRef::from("Z"));
        let err = resolve_terms("op", &d, (master(), &x), (transaction(), &z)).unwrap_err();
        match err {
            AnalysisError::StructureMismatch { reason, unmatched, .. } => {
                assert_eq!(reason, MismatchReason::MissingTerm(z));
                assert_eq!(unmatched, vec![TypeRef::from("Y")]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn both_ports_with_same_type_cannot_share_a_term() {
        let d = mk_decomposition(&["X", "Y"]);
        let x = TypeRef::from("X");
        let err = resolve_terms("op", &d, (master(), &x), (transaction(), &x)).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::StructureMismatch { reason: MismatchReason::MissingTerm(ref t), .. } if *t == x
        ));
    }

    #[test]
    fn extra_terms_are_mismatch() {
        let d = mk_decomposition(&["X", "W", "Y"]);
        let (x, y) = (TypeRef::from("X"), TypeRef::from("Y"));
        let err = resolve_terms("op", &d, (master(), &x), (transaction(), &y)).unwrap_err();
        match err {
            AnalysisError::StructureMismatch { reason, unmatched, .. } => {
                assert_eq!(reason, MismatchReason::ExtraTerms);
                assert_eq!(unmatched, vec![TypeRef::from("W")]);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
