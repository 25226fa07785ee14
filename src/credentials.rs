// SPDX-License-Identifier: MIT OR Apache-2.0

/// The identity of a requester as established by the (external) authentication layer.
///
/// An absent WebID means the requester is unauthenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credential {
    pub web_id: Option<String>,
}

impl Credential {
    /// The credential of an unauthenticated requester.
    pub fn public() -> Self {
        Self::default()
    }

    /// A credential authenticated as the given WebID.
    pub fn from_web_id(web_id: impl Into<String>) -> Self {
        Self {
            web_id: Some(web_id.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.web_id.is_some()
    }
}
