//! Canned in-character replies used when generation fails.

use banter_types::persona::{ArchetypeId, SenderKind};

use crate::random::{self, Randomness};

/// Probability that the girl brushes off the flirty boy.
pub const DEFLECT_PROBABILITY: f64 = 0.6;

/// Reply used if a phrase set ever comes back empty.
const LAST_RESORT: &str = "yeah okay";

/// Phrase set for the acting archetype in this situation.
///
/// The girl's mood coin is the only draw made here.
pub fn phrases(
    acting: ArchetypeId,
    original_message: &str,
    sender: SenderKind,
    rng: &mut dyn Randomness,
) -> &'static [&'static str] {
    let msg = original_message.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| msg.contains(w));

    match acting {
        ArchetypeId::FlirtyBoy if sender == SenderKind::Girl => &[
            "you look nice",
            "wanna meet up",
            "thinking about you",
            "hey beautiful",
        ],
        ArchetypeId::FlirtyBoy => &["yeah bro", "sounds cool", "im good"],

        ArchetypeId::Girl if sender == SenderKind::FlirtyBoy => {
            if rng.unit() < DEFLECT_PROBABILITY {
                &["busy rn", "maybe later", "not now", "lol okay"]
            } else {
                &["haha thanks", "aww sweet", "sure why not"]
            }
        }
        ArchetypeId::Girl => &["yeah sure", "okay cool", "sounds good"],

        ArchetypeId::MatureGuy if sender == SenderKind::CuriousTeen || msg.contains('?') => &[
            "listen bro",
            "heres the thing",
            "trust me",
            "from experience",
        ],
        ArchetypeId::MatureGuy => &["makes sense", "true that", "i agree"],

        ArchetypeId::CuriousTeen if sender == SenderKind::MatureGuy => &[
            "how does that work",
            "can you explain",
            "teach me bro",
            "really bro",
        ],
        ArchetypeId::CuriousTeen => &["interesting bro", "nice one", "cool bro"],

        ArchetypeId::Hustler1 if mentions(&["money", "business", "idea"]) => &[
            "new opportunity bro",
            "easy money method",
            "lets do this",
            "im thinking dropshipping",
        ],
        ArchetypeId::Hustler1 => &["yeah man", "sounds good", "im down"],

        ArchetypeId::Hustler2 if mentions(&["opportunity", "business", "start"]) => &[
            "whats the plan",
            "how much investment",
            "im interested",
            "lets try it",
        ],
        ArchetypeId::Hustler2 => &["cool bro", "makes sense", "true bro"],
    }
}

/// Pick a fallback reply uniformly from the matching phrase set.
pub fn select(
    acting: ArchetypeId,
    original_message: &str,
    sender: SenderKind,
    rng: &mut dyn Randomness,
) -> &'static str {
    let set = phrases(acting, original_message, sender, rng);
    random::choose(rng, set).copied().unwrap_or(LAST_RESORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;
    use crate::random::testing::Scripted;

    #[test]
    fn girl_deflects_flirty_boy_below_threshold() {
        let mut rng = Scripted::new().with_units(&[0.59]).with_indices(&[0]);
        let reply = select(
            ArchetypeId::Girl,
            "hey beautiful",
            SenderKind::FlirtyBoy,
            &mut rng,
        );
        assert_eq!(reply, "busy rn");
    }

    #[test]
    fn girl_engages_flirty_boy_above_threshold() {
        let mut rng = Scripted::new().with_units(&[0.6]).with_indices(&[2]);
        let reply = select(
            ArchetypeId::Girl,
            "hey beautiful",
            SenderKind::FlirtyBoy,
            &mut rng,
        );
        assert_eq!(reply, "sure why not");
    }

    #[test]
    fn mature_guy_answers_questions() {
        let mut rng = Scripted::new();
        let set = phrases(
            ArchetypeId::MatureGuy,
            "ok?",
            SenderKind::Unknown,
            &mut rng,
        );
        assert!(set.contains(&"heres the thing"));
        let set = phrases(
            ArchetypeId::MatureGuy,
            "nice",
            SenderKind::Unknown,
            &mut rng,
        );
        assert!(set.contains(&"i agree"));
    }

    #[test]
    fn hustlers_react_to_keywords() {
        let mut rng = Scripted::new();
        let set = phrases(
            ArchetypeId::Hustler1,
            "got an IDEA",
            SenderKind::Unknown,
            &mut rng,
        );
        assert!(set.contains(&"easy money method"));
        let set = phrases(
            ArchetypeId::Hustler2,
            "lets start",
            SenderKind::Unknown,
            &mut rng,
        );
        assert!(set.contains(&"how much investment"));
        let set = phrases(
            ArchetypeId::Hustler2,
            "lol",
            SenderKind::Unknown,
            &mut rng,
        );
        assert!(set.contains(&"true bro"));
    }

    #[test]
    fn curious_teen_asks_the_mature_guy() {
        let mut rng = Scripted::new().with_indices(&[2]);
        assert_eq!(
            select(
                ArchetypeId::CuriousTeen,
                "listen bro trust me",
                SenderKind::MatureGuy,
                &mut rng
            ),
            "teach me bro"
        );
    }

    #[test]
    fn every_phrase_has_two_to_five_words() {
        let mut rng = RngSource::seeded(3);
        let senders = [
            SenderKind::Girl,
            SenderKind::FlirtyBoy,
            SenderKind::MatureGuy,
            SenderKind::CuriousTeen,
            SenderKind::Hustler,
            SenderKind::Unknown,
        ];
        let messages = ["money business idea", "start opportunity", "why?", "hey"];
        for archetype in ArchetypeId::ALL {
            for sender in senders {
                for message in messages {
                    for _ in 0..4 {
                        for phrase in phrases(archetype, message, sender, &mut rng) {
                            let words = phrase.split_whitespace().count();
                            assert!((2..=5).contains(&words), "{phrase:?}");
                        }
                    }
                }
            }
        }
    }
}
