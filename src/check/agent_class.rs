// SPDX-License-Identifier: MIT OR Apache-2.0

use async_trait::async_trait;

use crate::rdf::Term;
use crate::vocab;

use super::{AccessCheck, AccessChecker};

/// Matches rules addressing a class of agents (`acl:agentClass`).
///
/// `foaf:Agent` covers everyone and is checked before any authentication requirement, so
/// unauthenticated requesters still match such rules. `acl:AuthenticatedAgent` covers
/// requesters with a WebID only.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgentClassAccessChecker;

#[async_trait]
impl AccessChecker for AgentClassAccessChecker {
    async fn check(&self, input: &AccessCheck<'_>) -> bool {
        let predicate = Term::named(vocab::ACL_AGENT_CLASS);

        if input.acl.count_matches(
            Some(input.rule),
            Some(&predicate),
            Some(&Term::named(vocab::FOAF_AGENT)),
        ) > 0
        {
            return true;
        }

        input.credential.is_authenticated()
            && input.acl.count_matches(
                Some(input.rule),
                Some(&predicate),
                Some(&Term::named(vocab::ACL_AUTHENTICATED_AGENT)),
            ) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credential;
    use crate::rdf::{Dataset, Triple};

    fn acl_with_class(class: &str) -> (Dataset, Term) {
        let rule = Term::blank("rule");
        let acl = Dataset::from_iter([Triple::new(
            rule.clone(),
            Term::named(vocab::ACL_AGENT_CLASS),
            Term::named(class),
        )]);
        (acl, rule)
    }

    #[tokio::test]
    async fn foaf_agent_matches_everyone() {
        let (acl, rule) = acl_with_class(vocab::FOAF_AGENT);

        for credential in [
            Credential::public(),
            Credential::from_web_id("https://example.org/alice/profile#me"),
        ] {
            let input = AccessCheck {
                acl: &acl,
                rule: &rule,
                credential: &credential,
            };
            assert!(AgentClassAccessChecker.check(&input).await);
        }
    }

    #[tokio::test]
    async fn authenticated_agent_requires_a_web_id() {
        let (acl, rule) = acl_with_class(vocab::ACL_AUTHENTICATED_AGENT);

        let credential = Credential::from_web_id("https://example.org/alice/profile#me");
        let input = AccessCheck {
            acl: &acl,
            rule: &rule,
            credential: &credential,
        };
        assert!(AgentClassAccessChecker.check(&input).await);

        let credential = Credential::public();
        let input = AccessCheck {
            acl: &acl,
            rule: &rule,
            credential: &credential,
        };
        assert!(!AgentClassAccessChecker.check(&input).await);
    }

    #[tokio::test]
    async fn unknown_classes_never_match() {
        let (acl, rule) = acl_with_class("https://example.org/vocab#Staff");
        let credential = Credential::from_web_id("https://example.org/alice/profile#me");
        let input = AccessCheck {
            acl: &acl,
            rule: &rule,
            credential: &credential,
        };
        assert!(!AgentClassAccessChecker.check(&input).await);
    }
}
