// SPDX-License-Identifier: MIT OR Apache-2.0

//! Access-control decision engine for Solid storage servers.
//!
//! Given an inbound operation and the credentials of the requester, this crate decides whether
//! the operation is permitted under Web Access Control (WAC) rules expressed as RDF triples.
//! The decision splits into two halves:
//!
//! - **Mode extraction** ([`extract`]): which access modes does the operation require? Plain
//!   HTTP methods are a table lookup; SPARQL Update PATCH bodies are walked recursively, since
//!   an insert-only patch needs weaker rights than one that deletes triples.
//! - **Access checking** ([`check`]): does a WAC rule's identity clause apply to the
//!   requester? Rules can name an agent directly, address a class of agents or point at a
//!   vCard group whose membership document is fetched over the network and cached.
//!
//! A [`PermissionReader`] aggregates the grants of all matching rules into a [`PermissionSet`]
//! per credential group (public vs. authenticated agent) and an [`Authorizer`] compares it
//! against the required modes, distinguishing "authenticate and try again" from "forbidden".
//!
//! HTTP handling, RDF parsing, ACL document discovery and authentication are external; this
//! crate defines traits at those seams ([`DatasetFetcher`], [`cache::ExpiringStorage`]) and
//! consumes their results ([`rdf::Dataset`], [`Credential`], [`ResolvedAcl`]).

pub mod access;
pub mod algebra;
mod authorizer;
pub mod cache;
pub mod check;
mod credentials;
pub mod extract;
mod fetch;
mod operation;
pub mod rdf;
mod reader;
pub mod vocab;

pub use access::{AccessMode, CredentialGroup, Permission, PermissionSet};
pub use authorizer::{AuthorizationError, Authorizer, PermissionBasedAuthorizer};
pub use credentials::Credential;
pub use extract::{ExtractorChain, ModeExtractor};
pub use fetch::{DatasetFetcher, FetchError};
pub use operation::Operation;
pub use reader::{PermissionReader, ResolvedAcl, WebAclReader};
