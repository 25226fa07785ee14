// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;
use thiserror::Error;

use crate::rdf::Dataset;

/// Failure to resolve a remote RDF document.
///
/// Cloneable so that a shared in-flight fetch can hand the same failure to every waiter.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("could not fetch {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("could not parse document at {url}: {reason}")]
    Parse { url: String, reason: String },
}

/// Resolves a remote RDF document into parsed triples.
///
/// Implemented by the HTTP client plus representation-conversion layer of the server; the
/// decision engine only sees the resulting dataset. Used for vCard group membership documents.
#[async_trait]
pub trait DatasetFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Dataset, FetchError>;
}
