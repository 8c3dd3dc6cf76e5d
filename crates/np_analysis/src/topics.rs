use std::collections::HashSet;
use std::sync::OnceLock;

use np_core::TopicSet;

pub const DEFAULT_TOPIC_LIMIT: usize = 5;

/// Standard English stopword list (NLTK's, minus apostrophe forms the
/// tokenizer can never produce).
const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
    "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
    "will", "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
    "aren", "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn",
    "mustn", "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn stop_words() -> &'static HashSet<&'static str> {
    STOP_WORD_SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Returns the `limit` most frequent non-stopword alphanumeric tokens of
/// `text` with their counts. Ties keep first-encountered order.
pub fn extract_topics(text: &str, limit: usize) -> TopicSet {
    let lowered = text.to_lowercase();

    // Count in first-encountered order so the stable sort below preserves it
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for token in lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
    {
        if stop_words().contains(token) {
            continue;
        }
        match counts.iter_mut().find(|(t, _)| *t == token) {
            Some(entry) => entry.1 += 1,
            None => counts.push((token, 1)),
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count))
        .collect()
}
