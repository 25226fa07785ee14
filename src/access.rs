// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::fmt::Display;

/// The five access modes of the Web Access Control vocabulary.
///
/// Modes are not ordered by strength; an operation requiring full write access is expressed by
/// extractors emitting all of `Write`, `Append`, `Create` and `Delete` explicitly rather than by
/// consumers inferring implications at check time.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessMode {
    Read,
    Append,
    Write,
    Create,
    Delete,
}

impl AccessMode {
    /// The modes required to overwrite or remove existing data.
    ///
    /// Deleting state is a stronger operation than appending to it, so full write access always
    /// carries append, create and delete alongside write itself.
    pub fn write_set() -> BTreeSet<AccessMode> {
        BTreeSet::from([Self::Write, Self::Append, Self::Create, Self::Delete])
    }
}

impl Display for AccessMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AccessMode::Read => "read",
            AccessMode::Append => "append",
            AccessMode::Write => "write",
            AccessMode::Create => "create",
            AccessMode::Delete => "delete",
        };

        write!(f, "{}", s)
    }
}

/// A per-mode opinion on access.
///
/// An absent entry means "no opinion" and is distinct from an explicit denial. The same shape
/// describes both the modes an operation requires and the modes a credential group holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Permission {
    pub read: Option<bool>,
    pub append: Option<bool>,
    pub write: Option<bool>,
    pub create: Option<bool>,
    pub delete: Option<bool>,
}

impl Permission {
    /// Opinion on a single mode, if any.
    pub fn get(&self, mode: AccessMode) -> Option<bool> {
        match mode {
            AccessMode::Read => self.read,
            AccessMode::Append => self.append,
            AccessMode::Write => self.write,
            AccessMode::Create => self.create,
            AccessMode::Delete => self.delete,
        }
    }

    /// Records an explicit opinion on a single mode.
    pub fn set(&mut self, mode: AccessMode, value: bool) {
        let entry = match mode {
            AccessMode::Read => &mut self.read,
            AccessMode::Append => &mut self.append,
            AccessMode::Write => &mut self.write,
            AccessMode::Create => &mut self.create,
            AccessMode::Delete => &mut self.delete,
        };
        *entry = Some(value);
    }

    /// Marks a mode as granted.
    pub fn grant(&mut self, mode: AccessMode) {
        self.set(mode, true);
    }

    /// True when the mode is explicitly granted.
    pub fn grants(&self, mode: AccessMode) -> bool {
        self.get(mode) == Some(true)
    }
}

/// Separates grants by the origin of the matching rule.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum CredentialGroup {
    /// Rules matching everyone, including unauthenticated requesters.
    Public,

    /// Rules matching the specific authenticated requester.
    Agent,
}

/// What a requester context is allowed to do, per credential group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionSet {
    pub public: Permission,
    pub agent: Permission,
}

impl PermissionSet {
    pub fn get(&self, group: CredentialGroup) -> &Permission {
        match group {
            CredentialGroup::Public => &self.public,
            CredentialGroup::Agent => &self.agent,
        }
    }

    pub fn get_mut(&mut self, group: CredentialGroup) -> &mut Permission {
        match group {
            CredentialGroup::Public => &mut self.public,
            CredentialGroup::Agent => &mut self.agent,
        }
    }
}
