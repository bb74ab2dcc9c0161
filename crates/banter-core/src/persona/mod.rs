//! Personas: the archetype catalog, account assignment, and conversation
//! starters.

pub mod assigner;
pub mod catalog;
pub mod starter;

use banter_types::account::{AccountId, PersonaAssignment};
use banter_types::persona::{Archetype, ArchetypeId};

/// Profile of the persona `account` plays, defaulting to the default
/// archetype when the account is unassigned.
pub fn persona_for(assignment: &PersonaAssignment, account: &AccountId) -> &'static Archetype {
    catalog::profile(
        assignment
            .archetype_for(account)
            .unwrap_or(ArchetypeId::DEFAULT),
    )
}
