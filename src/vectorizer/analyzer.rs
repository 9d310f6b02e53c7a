use crate::config::MIN_TOKEN_CHARS;
use crate::vectorizer::stop_words::is_stop_word;
use crate::vectorizer::term::TermFrequency;

/// Split text into vocabulary terms.
///
/// Lowercases, splits on every character that is not alphanumeric or `_`,
/// drops tokens shorter than two characters and stop words.
/// `"Sci-Fi"` becomes `["sci", "fi"]`.
pub fn analyze(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|tok| tok.chars().count() >= MIN_TOKEN_CHARS)
        .filter(|tok| !is_stop_word(tok))
        .map(str::to_string)
        .collect()
}

/// Analyze a document straight into term counts
pub fn term_frequency(text: &str) -> TermFrequency {
    let mut freq = TermFrequency::new();
    freq.add_terms(&analyze(text));
    freq
}
