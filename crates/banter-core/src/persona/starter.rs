//! Conversation openers and group-dynamics summary.

use serde::Serialize;

use banter_types::account::{AccountId, PersonaAssignment};
use banter_types::persona::ArchetypeId;

use crate::random::{self, Randomness};

/// Archetypes in the order they are asked to open a conversation.
pub const STARTER_PRIORITY: [ArchetypeId; 6] = [
    ArchetypeId::FlirtyBoy,
    ArchetypeId::CuriousTeen,
    ArchetypeId::Hustler1,
    ArchetypeId::MatureGuy,
    ArchetypeId::Girl,
    ArchetypeId::Hustler2,
];

/// Opening lines for `archetype`.
pub fn starters(archetype: ArchetypeId) -> &'static [&'static str] {
    match archetype {
        ArchetypeId::FlirtyBoy => &[
            "hey beautiful whats up",
            "thinking about you",
            "you free today",
            "wanna hang out",
        ],
        ArchetypeId::Girl => &[
            "hey guys",
            "whats everyone doing",
            "so bored rn",
            "anyone online",
        ],
        ArchetypeId::MatureGuy => &[
            "listen guys important thing",
            "got some advice",
            "heres a good tip",
            "trust me on this",
        ],
        ArchetypeId::CuriousTeen => &[
            "can someone explain this",
            "how does that work",
            "guys i have question",
            "teach me something new",
        ],
        ArchetypeId::Hustler1 => &[
            "guys new opportunity",
            "found easy money method",
            "lets start something",
            "business idea guys",
        ],
        ArchetypeId::Hustler2 => &[
            "whats the plan today",
            "any new ideas",
            "im down for anything",
            "lets make some money",
        ],
    }
}

/// Account that should open the conversation, with its archetype.
///
/// Walks [`STARTER_PRIORITY`] and returns the first assigned account playing
/// that archetype. Only an empty assignment yields `None`.
pub fn pick_starter(
    assignment: &PersonaAssignment,
    rng: &mut dyn Randomness,
) -> Option<(AccountId, ArchetypeId)> {
    for archetype in STARTER_PRIORITY {
        if let Some(account) = assignment.first_with(archetype) {
            return Some((account.clone(), archetype));
        }
    }

    random::choose(rng, assignment.slots()).map(|s| (s.account.clone(), s.archetype))
}

/// A relationship dynamic active in the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupDynamic {
    /// Flirty boy chasing the girl.
    Couple,
    /// Mature guy teaching the curious teen.
    MentorStudent,
    /// At least one hustler talking business.
    Hustlers,
}

impl GroupDynamic {
    pub fn describe(&self) -> &'static str {
        match self {
            GroupDynamic::Couple => "Couple: Flirty Boy <-> Girl (romantic tension)",
            GroupDynamic::MentorStudent => {
                "Mentor-Student: Mature Guy -> Curious Teen (teaching/learning)"
            }
            GroupDynamic::Hustlers => "Hustler Friends: business, earning, opportunities",
        }
    }
}

/// Dynamics present in `assignment`.
pub fn group_dynamics(assignment: &PersonaAssignment) -> Vec<GroupDynamic> {
    let mut dynamics = Vec::new();
    if assignment.contains(ArchetypeId::FlirtyBoy) && assignment.contains(ArchetypeId::Girl) {
        dynamics.push(GroupDynamic::Couple);
    }
    if assignment.contains(ArchetypeId::MatureGuy) && assignment.contains(ArchetypeId::CuriousTeen)
    {
        dynamics.push(GroupDynamic::MentorStudent);
    }
    if assignment.contains(ArchetypeId::Hustler1) || assignment.contains(ArchetypeId::Hustler2) {
        dynamics.push(GroupDynamic::Hustlers);
    }
    dynamics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::assigner::assign;
    use crate::random::testing::Scripted;
    use banter_types::account::PersonaSlot;

    fn accounts(n: usize) -> Vec<AccountId> {
        (0..n).map(|i| AccountId::new(format!("acct{i}"))).collect()
    }

    #[test]
    fn flirty_boy_opens_when_present() {
        let mut rng = Scripted::new();
        let assignment = assign(&accounts(3), &mut rng);
        let (account, archetype) = pick_starter(&assignment, &mut rng).unwrap();
        assert_eq!(archetype, ArchetypeId::FlirtyBoy);
        assert_eq!(account, AccountId::new("acct0"));
    }

    #[test]
    fn priority_skips_missing_archetypes() {
        let assignment = PersonaAssignment::new(vec![
            PersonaSlot {
                account: "a".into(),
                archetype: ArchetypeId::Girl,
            },
            PersonaSlot {
                account: "b".into(),
                archetype: ArchetypeId::MatureGuy,
            },
        ]);
        let mut rng = Scripted::new();
        let (account, archetype) = pick_starter(&assignment, &mut rng).unwrap();
        assert_eq!(archetype, ArchetypeId::MatureGuy);
        assert_eq!(account.as_str(), "b");
    }

    #[test]
    fn empty_assignment_has_no_starter() {
        let mut rng = Scripted::new();
        assert!(pick_starter(&PersonaAssignment::default(), &mut rng).is_none());
    }

    #[test]
    fn every_archetype_has_starters() {
        for id in ArchetypeId::ALL {
            assert!(!starters(id).is_empty());
        }
    }

    #[test]
    fn dynamics_by_group_size() {
        let mut rng = Scripted::new();
        let two = assign(&accounts(2), &mut rng);
        assert_eq!(group_dynamics(&two), vec![GroupDynamic::Couple]);

        let three = assign(&accounts(3), &mut rng);
        assert_eq!(group_dynamics(&three), vec![GroupDynamic::Couple]);

        let five = assign(&accounts(5), &mut rng);
        assert_eq!(
            group_dynamics(&five),
            vec![
                GroupDynamic::Couple,
                GroupDynamic::MentorStudent,
                GroupDynamic::Hustlers
            ]
        );
    }
}
