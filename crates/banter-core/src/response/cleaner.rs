//! Normalization of raw generator output.

use std::sync::LazyLock;

use regex::Regex;

static NON_ASCII_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").expect("valid regex"));
static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

/// Longest reply kept, in words.
pub const MAX_WORDS: usize = 5;

/// Words a reply must not end on.
const DANGLING: [&str; 7] = ["the", "a", "to", "of", "in", "and", "or"];

/// Clean raw generator output into a short chat line.
///
/// Strips emoji and other non-ASCII, hashtags, surrounding quotes, excess
/// whitespace, trailing commas and a dangling final article or conjunction,
/// and cuts the text to [`MAX_WORDS`] words. The pass is repeated until the
/// text stops changing, so `clean(clean(x)) == clean(x)`.
pub fn clean(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let next = clean_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn clean_once(text: &str) -> String {
    let text = NON_ASCII_RE.replace_all(text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    let text = text.trim_matches(['"', '\'', '`']);

    let mut words: Vec<&str> = text.split_whitespace().take(MAX_WORDS).collect();

    if let Some(last) = words.pop() {
        let last = last.trim_end_matches(',');
        if !last.is_empty() {
            words.push(last);
        }
    }

    let dangling = words
        .last()
        .is_some_and(|last| DANGLING.iter().any(|d| last.eq_ignore_ascii_case(d)));
    if dangling && words.len() > 1 {
        words.pop();
    }

    words.join(" ")
}
