// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsed SPARQL Update algebra.
//!
//! Produced by the (external) PATCH body parser and consumed read-only by the mode extractor.
//! The sum is deliberately closed: update operations outside this set (`ADD`, `MOVE`, `LOAD`,
//! ...) cannot be represented, so the parser has to reject them before an [`Update`] reaches the
//! decision engine. Adding a variant here forces every consumer through an exhaustiveness check.

use crate::rdf::Term;

/// One position of a SPARQL triple pattern, either bound to a term or a variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternTerm {
    Term(Term),
    Variable(String),
}

/// A triple pattern inside a delete or insert clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: PatternTerm,
    pub predicate: PatternTerm,
    pub object: PatternTerm,
}

impl TriplePattern {
    pub fn new(subject: PatternTerm, predicate: PatternTerm, object: PatternTerm) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// A SPARQL Update operation tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Update {
    /// An update without any effect.
    Nop,

    /// A `DELETE ... INSERT ...` operation; either clause may be empty.
    DeleteInsert {
        delete: Vec<TriplePattern>,
        insert: Vec<TriplePattern>,
    },

    /// An ordered sequence of updates, executed as one request.
    Composite(Vec<Update>),
}

impl Update {
    /// A `DELETE`/`INSERT` operation with only an insert clause.
    pub fn insert(patterns: Vec<TriplePattern>) -> Self {
        Self::DeleteInsert {
            delete: Vec::new(),
            insert: patterns,
        }
    }

    /// A `DELETE`/`INSERT` operation with only a delete clause.
    pub fn delete(patterns: Vec<TriplePattern>) -> Self {
        Self::DeleteInsert {
            delete: patterns,
            insert: Vec::new(),
        }
    }
}
