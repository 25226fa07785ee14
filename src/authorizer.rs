// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

use crate::access::{AccessMode, PermissionSet};
use crate::credentials::Credential;

/// Denial of an operation.
///
/// Carries no rule contents: an unauthorized requester must not learn why a rule did or did
/// not match, only the aggregate decision.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    /// The requester is unauthenticated; authenticating may change the decision. Maps to HTTP
    /// 401 at the boundary.
    #[error("unauthorized, authentication is required")]
    Unauthorized,

    /// The operation is not permitted for this requester. Maps to HTTP 403.
    #[error("forbidden")]
    Forbidden,
}

/// Final gate comparing the modes an operation requires against the modes a requester holds.
pub trait Authorizer: Send + Sync {
    fn authorize(
        &self,
        credential: &Credential,
        required: &BTreeSet<AccessMode>,
        available: &PermissionSet,
    ) -> Result<(), AuthorizationError>;
}

/// Permits an operation when every required mode is granted to the public group or, for
/// authenticated requesters, to the agent group.
///
/// An empty required set always passes; an empty permission set denies everything that
/// requires a mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct PermissionBasedAuthorizer;

impl Authorizer for PermissionBasedAuthorizer {
    fn authorize(
        &self,
        credential: &Credential,
        required: &BTreeSet<AccessMode>,
        available: &PermissionSet,
    ) -> Result<(), AuthorizationError> {
        for mode in required {
            let granted = available.public.grants(*mode)
                || (credential.is_authenticated() && available.agent.grants(*mode));
            if !granted {
                debug!(%mode, "required mode is not granted");
                return Err(if credential.is_authenticated() {
                    AuthorizationError::Forbidden
                } else {
                    AuthorizationError::Unauthorized
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::access::Permission;

    use super::*;

    const WEB_ID: &str = "https://example.org/alice/profile#me";

    fn granting(modes: &[AccessMode]) -> Permission {
        let mut permission = Permission::default();
        for mode in modes {
            permission.grant(*mode);
        }
        permission
    }

    #[test]
    fn public_grants_satisfy_everyone() {
        let available = PermissionSet {
            public: granting(&[AccessMode::Read]),
            agent: Permission::default(),
        };
        let required = BTreeSet::from([AccessMode::Read]);

        for credential in [Credential::public(), Credential::from_web_id(WEB_ID)] {
            assert_eq!(
                PermissionBasedAuthorizer.authorize(&credential, &required, &available),
                Ok(())
            );
        }
    }

    #[test]
    fn agent_grants_require_authentication() {
        let available = PermissionSet {
            public: Permission::default(),
            agent: granting(&[AccessMode::Read]),
        };
        let required = BTreeSet::from([AccessMode::Read]);

        assert_eq!(
            PermissionBasedAuthorizer.authorize(
                &Credential::from_web_id(WEB_ID),
                &required,
                &available
            ),
            Ok(())
        );
        assert_eq!(
            PermissionBasedAuthorizer.authorize(&Credential::public(), &required, &available),
            Err(AuthorizationError::Unauthorized)
        );
    }

    #[test]
    fn missing_modes_are_forbidden_for_authenticated_requesters() {
        let available = PermissionSet {
            public: granting(&[AccessMode::Read]),
            agent: granting(&[AccessMode::Read]),
        };
        let required = AccessMode::write_set();

        assert_eq!(
            PermissionBasedAuthorizer.authorize(
                &Credential::from_web_id(WEB_ID),
                &required,
                &available
            ),
            Err(AuthorizationError::Forbidden)
        );
    }

    #[test]
    fn empty_required_set_always_passes() {
        assert_eq!(
            PermissionBasedAuthorizer.authorize(
                &Credential::public(),
                &BTreeSet::new(),
                &PermissionSet::default()
            ),
            Ok(())
        );
    }

    #[test]
    fn every_required_mode_must_be_granted() {
        let available = PermissionSet {
            public: granting(&[AccessMode::Append]),
            agent: Permission::default(),
        };
        let required = BTreeSet::from([AccessMode::Append, AccessMode::Write]);

        assert_eq!(
            PermissionBasedAuthorizer.authorize(&Credential::public(), &required, &available),
            Err(AuthorizationError::Unauthorized)
        );
    }
}
