//! Static registry of the six archetypes.
//!
//! Two tables live here: the character profiles (who the persona is) and
//! the prompt styles (how the persona sounds). Both are total over
//! [`ArchetypeId`], so lookups by id cannot miss; only string lookups fall
//! back to the default archetype.

use banter_types::persona::{Archetype, ArchetypeId, Style};

static CATALOG: [Archetype; 6] = [
    Archetype {
        id: ArchetypeId::FlirtyBoy,
        name: "Flirty Boy",
        age: "18-19",
        role: "always chasing the girl, tries hard to get her attention",
        style: "flirty, romantic, trying to impress",
        examples: &[
            "hey beautiful",
            "you look nice today",
            "wanna hang out",
            "thinking about you",
        ],
    },
    Archetype {
        id: ArchetypeId::Girl,
        name: "Girl",
        age: "18-19",
        role: "sometimes gives him attention, sometimes ignores him",
        style: "sometimes flirty back, sometimes cold, mood-based",
        examples: &["haha thanks", "maybe later", "busy right now", "aww thats sweet"],
    },
    Archetype {
        id: ArchetypeId::MatureGuy,
        name: "Mature Guy",
        age: "21",
        role: "experienced one of the group, gives advice",
        style: "wise, helpful, shares knowledge and tips",
        examples: &["listen bro", "heres the trick", "trust me", "from experience"],
    },
    Archetype {
        id: ArchetypeId::CuriousTeen,
        name: "Curious Teen",
        age: "18",
        role: "asks lots of questions, wants to learn",
        style: "asks questions, eager to learn, innocent",
        examples: &[
            "how does that work",
            "can you explain",
            "really",
            "teach me bro",
        ],
    },
    Archetype {
        id: ArchetypeId::Hustler1,
        name: "Hustler 1",
        age: "20",
        role: "brings new business ideas and ways to earn",
        style: "entrepreneur mindset, talks about money, opportunities",
        examples: &[
            "new opportunity bro",
            "easy money method",
            "lets start something",
            "affiliate marketing",
        ],
    },
    Archetype {
        id: ArchetypeId::Hustler2,
        name: "Hustler 2",
        age: "20",
        role: "partner in crime, discusses side hustles",
        style: "supportive, also into making money, realistic",
        examples: &["sounds good", "whats the plan", "im down", "investment needed"],
    },
];

/// Profile of `id`.
pub fn profile(id: ArchetypeId) -> &'static Archetype {
    match id {
        ArchetypeId::FlirtyBoy => &CATALOG[0],
        ArchetypeId::Girl => &CATALOG[1],
        ArchetypeId::MatureGuy => &CATALOG[2],
        ArchetypeId::CuriousTeen => &CATALOG[3],
        ArchetypeId::Hustler1 => &CATALOG[4],
        ArchetypeId::Hustler2 => &CATALOG[5],
    }
}

/// Profile for a string key; unknown keys resolve to the default archetype.
pub fn lookup(key: &str) -> &'static Archetype {
    key.parse::<ArchetypeId>()
        .map(profile)
        .unwrap_or_else(|_| profile(ArchetypeId::DEFAULT))
}

/// All profiles in catalog order.
pub fn all() -> &'static [Archetype] {
    &CATALOG
}

/// Prompt style of `id`.
pub fn style(id: ArchetypeId) -> &'static Style {
    static FLIRTY_BOY: Style = Style {
        tone: "flirty and trying to impress",
        examples: &[
            "hey beautiful",
            "you look nice",
            "wanna hang out",
            "thinking of you",
        ],
    };
    static GIRL: Style = Style {
        tone: "sometimes interested, sometimes cold",
        examples: &[
            "haha thanks",
            "maybe later",
            "busy rn",
            "aww thats sweet",
            "not interested",
        ],
    };
    static MATURE_GUY: Style = Style {
        tone: "wise and helpful",
        examples: &[
            "listen bro",
            "heres the thing",
            "trust me",
            "from my experience",
        ],
    };
    static CURIOUS_TEEN: Style = Style {
        tone: "curious and asking questions",
        examples: &[
            "how does that work",
            "can you teach me",
            "really bro",
            "i dont get it",
        ],
    };
    static HUSTLER_1: Style = Style {
        tone: "entrepreneur mindset",
        examples: &[
            "new opportunity bro",
            "easy money",
            "lets start this",
            "dropshipping idea",
        ],
    };
    static HUSTLER_2: Style = Style {
        tone: "supportive hustler",
        examples: &[
            "sounds good",
            "whats the plan",
            "im down",
            "how much investment",
        ],
    };

    match id {
        ArchetypeId::FlirtyBoy => &FLIRTY_BOY,
        ArchetypeId::Girl => &GIRL,
        ArchetypeId::MatureGuy => &MATURE_GUY,
        ArchetypeId::CuriousTeen => &CURIOUS_TEEN,
        ArchetypeId::Hustler1 => &HUSTLER_1,
        ArchetypeId::Hustler2 => &HUSTLER_2,
    }
}
