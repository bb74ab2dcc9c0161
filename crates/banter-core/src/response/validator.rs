//! Acceptance rules for cleaned candidate replies.

use std::collections::HashSet;

use thiserror::Error;

/// Words that make a reply sound stiff.
const FORMAL_WORDS: [&str; 5] = ["indeed", "perhaps", "absolutely", "marvelous", "wonderful"];

/// Fragments that show the model echoing its instructions.
const PROMPT_LEAKS: [&str; 2] = ["rule", "example"];

/// Why a candidate reply was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("reply is empty or too short")]
    TooShort,

    #[error("reply has {0} words, expected 2 to 5")]
    WordCount(usize),

    #[error("reply contains formal word '{0}'")]
    Formal(&'static str),

    #[error("reply leaks prompt wording '{0}'")]
    PromptLeak(&'static str),

    #[error("reply copies {0} words from the original message")]
    Echo(usize),

    #[error("reply repeats a recent reply")]
    Repeat,
}

/// Check `candidate` against the acceptance rules.
///
/// `recent_replies` is the acting account's reply history, oldest first,
/// already lower-cased; only the last two entries are compared.
pub fn validate(
    candidate: &str,
    original_message: &str,
    recent_replies: &[String],
) -> Result<(), Rejection> {
    if candidate.trim().len() < 2 {
        return Err(Rejection::TooShort);
    }

    let word_count = candidate.split_whitespace().count();
    if !(2..=5).contains(&word_count) {
        return Err(Rejection::WordCount(word_count));
    }

    let lower = candidate.to_lowercase();
    if let Some(word) = FORMAL_WORDS.iter().find(|w| lower.contains(*w)) {
        return Err(Rejection::Formal(*word));
    }
    if let Some(leak) = PROMPT_LEAKS.iter().find(|w| lower.contains(*w)) {
        return Err(Rejection::PromptLeak(*leak));
    }

    let original_lower = original_message.to_lowercase();
    let original_words: HashSet<&str> = original_lower.split_whitespace().collect();
    let shared = lower
        .split_whitespace()
        .collect::<HashSet<&str>>()
        .intersection(&original_words)
        .count();
    if shared >= 2 {
        return Err(Rejection::Echo(shared));
    }

    let tail = &recent_replies[recent_replies.len().saturating_sub(2)..];
    if tail.iter().any(|r| *r == lower) {
        return Err(Rejection::Repeat);
    }

    Ok(())
}

/// Whether `candidate` passes every acceptance rule.
pub fn is_valid(candidate: &str, original_message: &str, recent_replies: &[String]) -> bool {
    validate(candidate, original_message, recent_replies).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_short_casual_reply() {
        assert!(is_valid("haha thanks bro", "you look nice", &[]));
    }

    #[test]
    fn rejects_too_short_and_bad_word_counts() {
        assert_eq!(validate(" a ", "hi", &[]), Err(Rejection::TooShort));
        assert_eq!(validate("yeah", "hi", &[]), Err(Rejection::WordCount(1)));
        assert_eq!(
            validate("one two three four five six", "hi", &[]),
            Err(Rejection::WordCount(6))
        );
    }

    #[test]
    fn rejects_formal_words_and_prompt_leaks() {
        assert_eq!(
            validate("that is wonderful", "hi", &[]),
            Err(Rejection::Formal("wonderful"))
        );
        assert_eq!(
            validate("for example bro", "hi", &[]),
            Err(Rejection::PromptLeak("example"))
        );
        // substring match: "rules" contains "rule"
        assert!(!is_valid("those rules suck", "hi", &[]));
    }

    #[test]
    fn rejects_echo_of_two_words() {
        assert_eq!(
            validate("you look great", "You LOOK nice", &[]),
            Err(Rejection::Echo(2))
        );
        assert!(is_valid("you seem happy", "you look nice", &[]));
    }

    #[test]
    fn rejects_repeat_of_last_two_replies_only() {
        let recent = history(&["im down", "sounds good", "lets go"]);
        assert_eq!(
            validate("Sounds Good", "what now", &recent),
            Err(Rejection::Repeat)
        );
        assert_eq!(validate("lets go", "what now", &recent), Err(Rejection::Repeat));
        assert!(is_valid("im down", "what now", &recent));
    }
}
