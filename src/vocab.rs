// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed IRIs of the vocabularies the decision engine understands.
//!
//! Comparison is exact string equality against these constants; no prefix expansion or IRI
//! normalisation happens here.

pub const ACL_AGENT: &str = "http://www.w3.org/ns/auth/acl#agent";
pub const ACL_AGENT_CLASS: &str = "http://www.w3.org/ns/auth/acl#agentClass";
pub const ACL_AGENT_GROUP: &str = "http://www.w3.org/ns/auth/acl#agentGroup";
pub const ACL_MODE: &str = "http://www.w3.org/ns/auth/acl#mode";

pub const ACL_AUTHENTICATED_AGENT: &str = "http://www.w3.org/ns/auth/acl#AuthenticatedAgent";
pub const FOAF_AGENT: &str = "http://xmlns.com/foaf/0.1/Agent";

pub const ACL_READ: &str = "http://www.w3.org/ns/auth/acl#Read";
pub const ACL_APPEND: &str = "http://www.w3.org/ns/auth/acl#Append";
pub const ACL_WRITE: &str = "http://www.w3.org/ns/auth/acl#Write";

pub const VCARD_HAS_MEMBER: &str = "http://www.w3.org/2006/vcard/ns#hasMember";
