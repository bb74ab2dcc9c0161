//! Keyword heuristic for guessing who wrote an inbound message.
//!
//! Purely advisory: the result only steers the prompt's relationship line
//! and the fallback table. Rules are checked in order and the first hit
//! wins.

use banter_types::persona::SenderKind;

const RULES: &[(SenderKind, &[&str])] = &[
    (
        SenderKind::Girl,
        &["aww", "cute", "sweet", "maybe later", "busy"],
    ),
    (
        SenderKind::FlirtyBoy,
        &["beautiful", "pretty", "wanna hang", "thinking about you"],
    ),
    (
        SenderKind::MatureGuy,
        &["listen", "trust me", "from experience", "heres the trick"],
    ),
    (
        SenderKind::CuriousTeen,
        &["?", "how", "why", "what", "can you explain"],
    ),
    (
        SenderKind::Hustler,
        &["money", "business", "opportunity", "earning", "investment"],
    ),
];

/// Classify `text` by lower-cased substring membership.
pub fn classify(text: &str) -> SenderKind {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| lower.contains(n)))
        .map(|(kind, _)| *kind)
        .unwrap_or(SenderKind::Unknown)
}
