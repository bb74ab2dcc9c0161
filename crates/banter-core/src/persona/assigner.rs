//! Account → archetype assignment by account count.

use banter_types::account::{AccountId, PersonaAssignment, PersonaSlot};
use banter_types::persona::ArchetypeId;

use crate::random::Randomness;

/// Minimum number of accounts for a meaningful group.
pub const MIN_ACCOUNTS: usize = 2;

/// Priority list of archetypes for a group of `count` accounts.
///
/// Two accounts form the couple; each additional account adds the next
/// dynamic (curious teen, then mentor/student, then the hustlers).
pub fn priority_for(count: usize) -> &'static [ArchetypeId] {
    use ArchetypeId::*;

    match count {
        0 | 1 => &[],
        2 => &[FlirtyBoy, Girl],
        3 => &[FlirtyBoy, Girl, CuriousTeen],
        4 => &[FlirtyBoy, Girl, MatureGuy, CuriousTeen],
        5 => &[FlirtyBoy, Girl, MatureGuy, CuriousTeen, Hustler1],
        _ => &ArchetypeId::ALL,
    }
}

/// Assign archetypes to `accounts` positionally.
///
/// Accounts beyond the priority list (seven or more accounts) get a
/// uniformly random archetype, repeats allowed. Fewer than
/// [`MIN_ACCOUNTS`] yields an empty assignment.
pub fn assign(accounts: &[AccountId], rng: &mut dyn Randomness) -> PersonaAssignment {
    if accounts.len() < MIN_ACCOUNTS {
        return PersonaAssignment::default();
    }

    let priority = priority_for(accounts.len());
    let slots = accounts
        .iter()
        .enumerate()
        .map(|(i, account)| {
            let archetype = match priority.get(i) {
                Some(id) => *id,
                None => ArchetypeId::ALL[rng.index(ArchetypeId::ALL.len())],
            };
            PersonaSlot {
                account: account.clone(),
                archetype,
            }
        })
        .collect();

    PersonaAssignment::new(slots)
}
