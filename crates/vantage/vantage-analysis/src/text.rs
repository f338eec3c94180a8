//! Title tokenization and keyword extraction.

use vantage_core::types::collections::FxHashSet;

/// Lower-cased words of a title, with surrounding punctuation stripped.
pub fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Stop-word-filtered keyword set used for lexical similarity.
///
/// Splits on any non-alphanumeric character, drops stop words and single
/// characters, and folds simple plurals (`hashtags` → `hashtag`).
pub fn keywords(text: &str) -> FxHashSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() > 1 && !is_stop_word(w))
        .map(|w| fold_plural(&w))
        .collect()
}

/// Keyword union over several texts.
pub fn keywords_of<'a>(texts: impl IntoIterator<Item = &'a String>) -> FxHashSet<String> {
    texts.into_iter().flat_map(|t| keywords(t)).collect()
}

fn fold_plural(word: &str) -> String {
    if word.len() > 4 && word.ends_with('s') && !word.ends_with("ss") {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

pub fn is_stop_word(word: &str) -> bool {
    matches!(
        word,
        "a" | "an"
            | "the"
            | "and"
            | "or"
            | "but"
            | "for"
            | "nor"
            | "of"
            | "to"
            | "in"
            | "on"
            | "at"
            | "by"
            | "with"
            | "from"
            | "is"
            | "are"
            | "was"
            | "were"
            | "be"
            | "it"
            | "its"
            | "this"
            | "that"
            | "my"
            | "your"
            | "you"
            | "i"
            | "we"
            | "our"
            | "me"
            | "so"
            | "as"
            | "if"
            | "do"
            | "not"
            | "no"
            | "vs"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_strip_edge_punctuation() {
        assert_eq!(
            words("Day Trading: 5 Rules (Explained)!"),
            vec!["day", "trading", "5", "rules", "explained"]
        );
    }

    #[test]
    fn keywords_drop_stop_words_and_fold_plurals() {
        let k = keywords("Hashtags in the Title");
        assert!(k.contains("hashtag"));
        assert!(k.contains("title"));
        assert!(!k.contains("in"));
        assert!(!k.contains("the"));
    }

    #[test]
    fn keywords_keep_double_s_words() {
        assert!(keywords("business class").contains("business"));
    }
}
