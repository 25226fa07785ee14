// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::access::{AccessMode, Permission, PermissionSet};
use crate::check::{
    AccessCheck, AccessChecker, AgentAccessChecker, AgentClassAccessChecker,
    AgentGroupAccessChecker, AnyAccessChecker,
};
use crate::credentials::Credential;
use crate::fetch::DatasetFetcher;
use crate::rdf::{Dataset, Term};
use crate::vocab;

/// The ACL rules applying to one target resource.
///
/// Locating the effective ACL document (walking up the container hierarchy) happens outside
/// this crate; by the time a `ResolvedAcl` exists, every rule in it is known to be about the
/// target.
#[derive(Clone, Debug)]
pub struct ResolvedAcl {
    pub dataset: Arc<Dataset>,
    pub rules: Vec<Term>,
}

impl ResolvedAcl {
    pub fn new(dataset: Arc<Dataset>, rules: Vec<Term>) -> Self {
        Self { dataset, rules }
    }
}

/// Derives which modes a requester context holds on a target.
#[async_trait]
pub trait PermissionReader: Send + Sync {
    async fn read(&self, credential: &Credential, acl: &ResolvedAcl) -> PermissionSet;
}

/// Evaluates WAC rules against a credential.
///
/// Every rule is matched twice: once for a synthesized public credential and once for the
/// actual requester. A matching rule contributes its `acl:mode` objects to the permission of
/// the respective credential group; grants are unioned across rules.
pub struct WebAclReader {
    checker: AnyAccessChecker,
}

impl WebAclReader {
    /// Reader with the standard checker combination: agent, agent class and agent group.
    pub fn new(fetcher: Arc<dyn DatasetFetcher>) -> Self {
        Self::with_checker(AnyAccessChecker::new(vec![
            Box::new(AgentAccessChecker),
            Box::new(AgentClassAccessChecker),
            Box::new(AgentGroupAccessChecker::new(fetcher)),
        ]))
    }

    pub fn with_checker(checker: AnyAccessChecker) -> Self {
        Self { checker }
    }

    async fn permission_for(&self, credential: &Credential, acl: &ResolvedAcl) -> Permission {
        let mut permission = Permission::default();
        for rule in &acl.rules {
            let input = AccessCheck {
                acl: &acl.dataset,
                rule,
                credential,
            };
            if self.checker.check(&input).await {
                for mode in rule_modes(&acl.dataset, rule) {
                    permission.grant(mode);
                }
            }
        }

        permission
    }
}

#[async_trait]
impl PermissionReader for WebAclReader {
    async fn read(&self, credential: &Credential, acl: &ResolvedAcl) -> PermissionSet {
        let public = self.permission_for(&Credential::public(), acl).await;
        let agent = if credential.is_authenticated() {
            self.permission_for(credential, acl).await
        } else {
            Permission::default()
        };

        debug!(?public, ?agent, "aggregated permissions from ACL rules");
        PermissionSet { public, agent }
    }
}

/// The access modes granted by a rule's `acl:mode` triples.
///
/// `acl:Write` covers the whole write set, everything else maps one to one. Unknown mode IRIs
/// (including `acl:Control`, which guards ACL documents themselves and is handled by the ACL
/// resource path outside this crate) grant nothing.
fn rule_modes(dataset: &Dataset, rule: &Term) -> BTreeSet<AccessMode> {
    let mut modes = BTreeSet::new();
    for object in dataset.objects(Some(rule), Some(&Term::named(vocab::ACL_MODE))) {
        match object.iri() {
            Some(vocab::ACL_READ) => {
                modes.insert(AccessMode::Read);
            }
            Some(vocab::ACL_APPEND) => {
                modes.insert(AccessMode::Append);
            }
            Some(vocab::ACL_WRITE) => {
                modes.extend(AccessMode::write_set());
            }
            _ => (),
        }
    }

    modes
}
