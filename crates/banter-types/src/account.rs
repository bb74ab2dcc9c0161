//! Account identifiers and the account → archetype assignment.

use serde::{Deserialize, Serialize};

use std::fmt;

use crate::persona::ArchetypeId;

/// Opaque identifier of a conversation participant.
///
/// Account lifecycle (registration, login, sessions) is owned by the chat
/// transport; the engine only ever compares and displays these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One account's persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSlot {
    pub account: AccountId,
    pub archetype: ArchetypeId,
}

/// Mapping from account to archetype, in the order accounts were supplied.
///
/// Always rebuilt wholesale; there is no API to patch a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaAssignment {
    slots: Vec<PersonaSlot>,
}

impl PersonaAssignment {
    pub fn new(slots: Vec<PersonaSlot>) -> Self {
        Self { slots }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[PersonaSlot] {
        &self.slots
    }

    pub fn accounts(&self) -> impl Iterator<Item = &AccountId> {
        self.slots.iter().map(|s| &s.account)
    }

    /// Archetype assigned to `account`, if any.
    pub fn archetype_for(&self, account: &AccountId) -> Option<ArchetypeId> {
        self.slots
            .iter()
            .find(|s| &s.account == account)
            .map(|s| s.archetype)
    }

    /// Whether any account plays `archetype`.
    pub fn contains(&self, archetype: ArchetypeId) -> bool {
        self.slots.iter().any(|s| s.archetype == archetype)
    }

    /// First account (in assignment order) playing `archetype`.
    pub fn first_with(&self, archetype: ArchetypeId) -> Option<&AccountId> {
        self.slots
            .iter()
            .find(|s| s.archetype == archetype)
            .map(|s| &s.account)
    }
}
