// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use futures_util::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, warn};

use crate::cache::{ExpiringStorage, MemoryExpiringStorage};
use crate::fetch::{DatasetFetcher, FetchError};
use crate::rdf::{Dataset, Term};
use crate::vocab;

use super::{AccessCheck, AccessChecker};

/// How long a fetched group document is served from the cache.
pub const DEFAULT_GROUP_CACHE_TTL: Duration = Duration::from_secs(3600);

/// What the cache stores: the in-flight fetch itself, not its result. Concurrent membership
/// checks against the same document await one shared fetch instead of issuing duplicates.
type SharedFetch = Shared<BoxFuture<'static, Result<Arc<Dataset>, FetchError>>>;

/// Matches rules addressing members of a vCard group (`acl:agentGroup`).
///
/// Group membership is an indirection: the rule names a group node, the node lives in a remote
/// membership document which has to be fetched and parsed before `vcard:hasMember` can be
/// tested. Documents are cached until a TTL runs out; there is no invalidation on remote
/// change, staleness is bounded by the TTL alone.
pub struct AgentGroupAccessChecker {
    fetcher: Arc<dyn DatasetFetcher>,
    cache: Arc<dyn ExpiringStorage<String, SharedFetch>>,
    ttl: Duration,
}

impl AgentGroupAccessChecker {
    pub fn new(fetcher: Arc<dyn DatasetFetcher>) -> Self {
        Self::with_cache(
            fetcher,
            Arc::new(MemoryExpiringStorage::new()),
            DEFAULT_GROUP_CACHE_TTL,
        )
    }

    pub fn with_cache(
        fetcher: Arc<dyn DatasetFetcher>,
        cache: Arc<dyn ExpiringStorage<String, SharedFetch>>,
        ttl: Duration,
    ) -> Self {
        Self {
            fetcher,
            cache,
            ttl,
        }
    }

    /// Whether the WebID is listed as a member of the given group.
    ///
    /// Any failure to resolve the membership document counts as "not a member" for this one
    /// group; a broken document must neither block the overall access check nor grant access.
    async fn is_member(&self, web_id: &str, group: &Term) -> bool {
        let Some(group_iri) = group.iri() else {
            return false;
        };
        let document_url = strip_fragment(group_iri);

        match self.cached_document(document_url).await {
            Ok(document) => {
                document.count_matches(
                    Some(group),
                    Some(&Term::named(vocab::VCARD_HAS_MEMBER)),
                    Some(&Term::named(web_id)),
                ) > 0
            }
            Err(err) => {
                warn!(%err, "could not resolve group membership document");
                false
            }
        }
    }

    /// Returns the parsed group document, sharing one in-flight fetch between concurrent
    /// callers.
    ///
    /// There is no await point between the cache miss and the insert, so two checks racing for
    /// the same document end up awaiting the same future.
    async fn cached_document(&self, url: String) -> Result<Arc<Dataset>, FetchError> {
        let fetch = match self.cache.get(&url) {
            Some(fetch) => fetch,
            None => {
                debug!(url = %url, "fetching group membership document");
                let fetcher = self.fetcher.clone();
                let target = url.clone();
                let fetch: SharedFetch = async move {
                    fetcher.fetch(&target).await.map(Arc::new)
                }
                .boxed()
                .shared();
                self.cache.set(url.clone(), fetch.clone(), self.ttl);
                fetch
            }
        };

        let result = fetch.await;
        if result.is_err() {
            // A failed fetch must not occupy the cache until the TTL runs out.
            self.cache.delete(&url);
        }
        result
    }
}

#[async_trait]
impl AccessChecker for AgentGroupAccessChecker {
    async fn check(&self, input: &AccessCheck<'_>) -> bool {
        let Some(web_id) = &input.credential.web_id else {
            return false;
        };

        let groups = input
            .acl
            .objects(Some(input.rule), Some(&Term::named(vocab::ACL_AGENT_GROUP)));
        if groups.is_empty() {
            return false;
        }

        // Membership documents live on independent servers; check them concurrently so one
        // slow or unreachable document does not block the others.
        let mut checks: FuturesUnordered<_> = groups
            .iter()
            .map(|group| self.is_member(web_id, group))
            .collect();
        while let Some(matched) = checks.next().await {
            if matched {
                return true;
            }
        }

        false
    }
}

/// Group IRIs name a node inside a membership document; the document itself is identified by
/// the IRI without its fragment.
fn strip_fragment(iri: &str) -> String {
    match iri.split_once('#') {
        Some((document, _)) => document.to_owned(),
        None => iri.to_owned(),
    }
}
