// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matching of WAC identity clauses against requester credentials.

mod agent;
mod agent_class;
mod agent_group;

use async_trait::async_trait;

use crate::credentials::Credential;
use crate::rdf::{Dataset, Term};

pub use agent::AgentAccessChecker;
pub use agent_class::AgentClassAccessChecker;
pub use agent_group::{AgentGroupAccessChecker, DEFAULT_GROUP_CACHE_TTL};

/// One ACL rule within its graph, paired with the requester credential to match it against.
#[derive(Clone, Copy, Debug)]
pub struct AccessCheck<'a> {
    pub acl: &'a Dataset,
    pub rule: &'a Term,
    pub credential: &'a Credential,
}

/// Decides whether one kind of identity clause of a WAC rule applies to a requester.
///
/// A non-match is `false`, never an error: checkers run as an OR-combination over a rule, so an
/// individual checker not applying is the expected case, not an exceptional one.
#[async_trait]
pub trait AccessChecker: Send + Sync {
    async fn check(&self, input: &AccessCheck<'_>) -> bool;
}

/// OR fan-out over checkers.
///
/// A single WAC rule may carry `acl:agent`, `acl:agentClass` and `acl:agentGroup` clauses at
/// once; the rule applies as soon as any one clause matches.
pub struct AnyAccessChecker {
    checkers: Vec<Box<dyn AccessChecker>>,
}

impl AnyAccessChecker {
    pub fn new(checkers: Vec<Box<dyn AccessChecker>>) -> Self {
        Self { checkers }
    }
}

#[async_trait]
impl AccessChecker for AnyAccessChecker {
    async fn check(&self, input: &AccessCheck<'_>) -> bool {
        for checker in &self.checkers {
            if checker.check(input).await {
                return true;
            }
        }

        false
    }
}
