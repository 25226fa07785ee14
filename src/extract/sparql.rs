// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

use crate::access::AccessMode;
use crate::algebra::Update;
use crate::operation::Operation;

use super::ModeExtractor;

/// Derives modes for PATCH requests carrying parsed SPARQL Update algebra.
///
/// A patch that only inserts triples needs append access; one that deletes anything needs the
/// full write set; a no-op patch needs nothing at all. The walk is a pure recursion over the
/// update tree, composites require whatever any of their children require.
#[derive(Clone, Copy, Debug, Default)]
pub struct SparqlUpdateModeExtractor;

impl ModeExtractor for SparqlUpdateModeExtractor {
    fn required_modes(&self, operation: &Operation) -> Option<BTreeSet<AccessMode>> {
        if operation.method != "PATCH" {
            return None;
        }
        let body = operation.body.as_ref()?;

        let modes = if needs_write(body) {
            AccessMode::write_set()
        } else if needs_append(body) {
            BTreeSet::from([AccessMode::Append])
        } else {
            BTreeSet::new()
        };

        Some(modes)
    }
}

fn needs_append(update: &Update) -> bool {
    match update {
        Update::Nop => false,
        Update::DeleteInsert { insert, .. } => !insert.is_empty(),
        Update::Composite(children) => children.iter().any(needs_append),
    }
}

fn needs_write(update: &Update) -> bool {
    match update {
        Update::Nop => false,
        Update::DeleteInsert { delete, .. } => !delete.is_empty(),
        Update::Composite(children) => children.iter().any(needs_write),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{PatternTerm, TriplePattern};
    use crate::rdf::Term;

    fn pattern() -> TriplePattern {
        TriplePattern::new(
            PatternTerm::Variable("s".to_owned()),
            PatternTerm::Term(Term::named("http://example.org/p")),
            PatternTerm::Variable("o".to_owned()),
        )
    }

    fn patch(body: Update) -> Operation {
        Operation::new("PATCH").with_body(body)
    }

    #[test]
    fn insert_only_needs_append() {
        let operation = patch(Update::insert(vec![pattern()]));
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&operation),
            Some(BTreeSet::from([AccessMode::Append]))
        );
    }

    #[test]
    fn delete_needs_full_write_set() {
        let operation = patch(Update::delete(vec![pattern()]));
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&operation),
            Some(AccessMode::write_set())
        );

        let operation = patch(Update::DeleteInsert {
            delete: vec![pattern()],
            insert: vec![pattern()],
        });
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&operation),
            Some(AccessMode::write_set())
        );
    }

    #[test]
    fn nop_needs_nothing() {
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&patch(Update::Nop)),
            Some(BTreeSet::new())
        );
        let composite = patch(Update::Composite(vec![Update::Nop, Update::Nop]));
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&composite),
            Some(BTreeSet::new())
        );
    }

    #[test]
    fn write_dominates_in_composites() {
        let composite = patch(Update::Composite(vec![
            Update::insert(vec![pattern()]),
            Update::delete(vec![pattern()]),
        ]));
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&composite),
            Some(AccessMode::write_set())
        );
    }

    #[test]
    fn nested_composites_are_walked_recursively() {
        let nested = patch(Update::Composite(vec![
            Update::Nop,
            Update::Composite(vec![Update::insert(vec![pattern()])]),
        ]));
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&nested),
            Some(BTreeSet::from([AccessMode::Append]))
        );
    }

    #[test]
    fn declines_non_patch_and_missing_body() {
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&Operation::new("GET")),
            None
        );
        assert_eq!(
            SparqlUpdateModeExtractor.required_modes(&Operation::new("PATCH")),
            None
        );
    }
}
