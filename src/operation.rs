// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::algebra::Update;

/// An inbound operation as seen by the authorization layer.
///
/// Only the HTTP method and, for PATCH requests, the parsed update body matter for deriving
/// required access modes; target resolution and content negotiation happened earlier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    pub method: String,
    pub body: Option<Update>,
}

impl Operation {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Update) -> Self {
        self.body = Some(body);
        self
    }
}
