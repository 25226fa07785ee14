// SPDX-License-Identifier: MIT OR Apache-2.0

//! Derivation of the access modes an operation requires.

mod method;
mod sparql;

use std::collections::BTreeSet;

use crate::access::AccessMode;
use crate::operation::Operation;

pub use method::MethodModeExtractor;
pub use sparql::SparqlUpdateModeExtractor;

/// Derives the access modes an operation requires.
///
/// `None` means the extractor does not recognise the operation; callers try the next extractor
/// in the chain. A recognised operation may still require no modes at all (empty set).
pub trait ModeExtractor: Send + Sync {
    fn required_modes(&self, operation: &Operation) -> Option<BTreeSet<AccessMode>>;
}

/// Ordered chain of extractors, first one recognising the operation wins.
#[derive(Default)]
pub struct ExtractorChain {
    extractors: Vec<Box<dyn ModeExtractor>>,
}

impl ExtractorChain {
    pub fn new(extractors: Vec<Box<dyn ModeExtractor>>) -> Self {
        Self { extractors }
    }

    /// Chain covering all operations the engine understands: plain HTTP methods first, then
    /// SPARQL Update PATCH requests.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(MethodModeExtractor),
            Box::new(SparqlUpdateModeExtractor),
        ])
    }
}

impl ModeExtractor for ExtractorChain {
    fn required_modes(&self, operation: &Operation) -> Option<BTreeSet<AccessMode>> {
        self.extractors
            .iter()
            .find_map(|extractor| extractor.required_modes(operation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Update;

    #[test]
    fn chain_dispatches_to_first_accepting_extractor() {
        let chain = ExtractorChain::standard();

        let get = Operation::new("GET");
        assert_eq!(
            chain.required_modes(&get),
            Some(BTreeSet::from([AccessMode::Read]))
        );

        let patch = Operation::new("PATCH").with_body(Update::Nop);
        assert_eq!(chain.required_modes(&patch), Some(BTreeSet::new()));
    }

    #[test]
    fn chain_declines_unknown_operations() {
        let chain = ExtractorChain::standard();
        assert_eq!(chain.required_modes(&Operation::new("OPTIONS")), None);
    }
}
