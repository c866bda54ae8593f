//! Case-insensitive phrase matching over raw transcript text.

/// True when any phrase occurs anywhere in `text`, case-insensitively.
/// Empty text matches nothing.
pub fn contains_any(text: &str, phrases: &[&str]) -> bool {
    let lower = text.to_lowercase();
    phrases.iter().any(|phrase| lower.contains(phrase))
}

/// True when the trimmed, lowercased text starts with any phrase, or
/// contains the phrase followed by a space anywhere. The second clause
/// accepts greetings that arrive mid-sentence ("well, hi everyone").
pub fn starts_with_any(text: &str, phrases: &[&str]) -> bool {
    let lower = text.trim().to_lowercase();
    phrases.iter().any(|phrase| {
        lower.starts_with(phrase) || lower.contains(&format!("{phrase} "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_any_is_case_insensitive() {
        assert!(contains_any("GOOD MORNING everyone", &["good morning"]));
        assert!(contains_any("I am Excited To Introduce myself", &["excited to introduce"]));
    }

    #[test]
    fn contains_any_misses_absent_phrases() {
        assert!(!contains_any("my name is Alex", &["good morning", "good evening"]));
    }

    #[test]
    fn contains_any_matches_substrings_inside_words() {
        // Substring semantics: "parent" matches "parents" too.
        assert!(contains_any("my parents are teachers", &["parent"]));
    }

    #[test]
    fn empty_text_matches_nothing() {
        assert!(!contains_any("", &["hello"]));
        assert!(!starts_with_any("", &["hello"]));
    }

    #[test]
    fn starts_with_any_accepts_a_leading_greeting() {
        assert!(starts_with_any("  Hi, my name is Alex", &["hi", "hello"]));
    }

    #[test]
    fn starts_with_any_accepts_a_mid_sentence_greeting() {
        assert!(starts_with_any("well, hi everyone out there", &["hi"]));
    }

    #[test]
    fn starts_with_any_rejects_embedded_fragments() {
        // "this is..." contains "hi" only inside another word.
        assert!(!starts_with_any("this is my introduction", &["hi"]));
    }
}
