// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal RDF term and triple-store types.
//!
//! The decision engine only needs two queries against an in-memory graph: counting the triples
//! matching a pattern and enumerating the objects of a subject-predicate pair. Parsing and
//! serialisation live in the (external) representation layer.

/// An RDF term.
///
/// Term equality is plain structural equality; IRIs are compared as strings without any
/// normalisation beyond what the parser already applied.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Term {
    NamedNode(String),
    BlankNode(String),
    Literal(String),
}

impl Term {
    pub fn named(iri: impl Into<String>) -> Self {
        Self::NamedNode(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Self::BlankNode(label.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// The IRI of a named node, `None` for blank nodes and literals.
    pub fn iri(&self) -> Option<&str> {
        match self {
            Self::NamedNode(iri) => Some(iri),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

/// In-memory triple store.
///
/// Backed by a plain vector; ACL graphs and group documents are small, so pattern scans are
/// cheaper than maintaining indexes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    triples: Vec<Triple>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Number of triples matching the pattern. `None` in any position is a wildcard.
    pub fn count_matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> usize {
        self.triples
            .iter()
            .filter(|triple| matches(triple, subject, predicate, object))
            .count()
    }

    /// Objects of all triples matching the subject and predicate.
    pub fn objects(&self, subject: Option<&Term>, predicate: Option<&Term>) -> Vec<Term> {
        self.triples
            .iter()
            .filter(|triple| matches(triple, subject, predicate, None))
            .map(|triple| triple.object.clone())
            .collect()
    }
}

impl FromIterator<Triple> for Dataset {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

fn matches(
    triple: &Triple,
    subject: Option<&Term>,
    predicate: Option<&Term>,
    object: Option<&Term>,
) -> bool {
    subject.is_none_or(|term| &triple.subject == term)
        && predicate.is_none_or(|term| &triple.predicate == term)
        && object.is_none_or(|term| &triple.object == term)
}
