// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;

use crate::rdf::Term;
use crate::vocab;

use super::{AccessCheck, AccessChecker};

/// Matches rules naming one specific agent (`acl:agent`).
///
/// Unauthenticated requesters never match, regardless of rule contents.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgentAccessChecker;

#[async_trait]
impl AccessChecker for AgentAccessChecker {
    async fn check(&self, input: &AccessCheck<'_>) -> bool {
        let Some(web_id) = &input.credential.web_id else {
            return false;
        };

        input.acl.count_matches(
            Some(input.rule),
            Some(&Term::named(vocab::ACL_AGENT)),
            Some(&Term::named(web_id.clone())),
        ) > 0
    }
}
