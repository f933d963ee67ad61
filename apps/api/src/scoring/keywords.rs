//! Keyword extraction from a job description and whole-word matching in resume text.

use regex::RegexBuilder;
use tracing::warn;

/// Maximum number of keywords taken from a job description.
pub const MAX_KEYWORDS: usize = 20;

/// Shortest token, in characters, that counts as a keyword.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Lower-cases the job description, splits it on whitespace, and keeps the
/// first `MAX_KEYWORDS` distinct tokens of at least `MIN_KEYWORD_CHARS`
/// characters, in order of first appearance.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let lowered = job_description.to_lowercase();
    let mut keywords: Vec<String> = Vec::new();

    for token in lowered.split_whitespace() {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if token.chars().count() < MIN_KEYWORD_CHARS {
            continue;
        }
        if keywords.iter().any(|k| k == token) {
            continue;
        }
        keywords.push(token.to_string());
    }

    keywords
}

/// Counts case-insensitive, non-overlapping whole-word occurrences of
/// `keyword` in `text`. The keyword is matched literally.
pub fn count_keyword_matches(text: &str, keyword: &str) -> u32 {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.find_iter(text).count() as u32,
        Err(e) => {
            // Only reachable if the escaped pattern exceeds the size limit
            warn!("Could not build matcher for keyword '{keyword}': {e}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_dedups_and_filters_short_tokens() {
        let keywords = extract_keywords("Looking for Python developer with Python experience");
        assert_eq!(
            keywords,
            vec!["looking", "python", "developer", "with", "experience"]
        );
    }

    #[test]
    fn test_truncates_to_twenty() {
        let jd: Vec<String> = (0..30).map(|i| format!("word{i:02}")).collect();
        let keywords = extract_keywords(&jd.join(" "));
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "word00");
        assert_eq!(keywords[19], "word19");
    }

    #[test]
    fn test_dedup_happens_before_truncation() {
        // 25 repeats of one token followed by 20 distinct ones
        let mut jd = vec!["repeat"; 25].join(" ");
        for i in 0..20 {
            jd.push_str(&format!(" token{i:02}"));
        }
        let keywords = extract_keywords(&jd);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "repeat");
        assert_eq!(keywords[19], "token18");
    }

    #[test]
    fn test_no_duplicates_and_idempotent() {
        let jd = "Rust rust RUST Tokio tokio axum Axum serde";
        let first = extract_keywords(jd);
        let second = extract_keywords(jd);
        assert_eq!(first, second);
        assert_eq!(first, vec!["rust", "tokio", "axum", "serde"]);
    }

    #[test]
    fn test_punctuation_stays_attached_to_tokens() {
        let keywords = extract_keywords("Skills: Rust, Go.");
        assert_eq!(keywords, vec!["skills:", "rust,"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "café" is four characters but five bytes
        assert_eq!(extract_keywords("café été"), vec!["café"]);
    }

    #[test]
    fn test_empty_description_yields_no_keywords() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
    }

    #[test]
    fn test_counts_whole_words_case_insensitively() {
        let text = "Python, python and PYTHON. Pythonic code is not counted.";
        assert_eq!(count_keyword_matches(text, "python"), 3);
    }

    #[test]
    fn test_partial_word_is_not_a_match() {
        assert_eq!(count_keyword_matches("Experienced engineer", "experience"), 0);
    }

    #[test]
    fn test_metacharacters_are_literal() {
        assert_eq!(count_keyword_matches("Built with node.js", "node.js"), 1);
        assert_eq!(count_keyword_matches("Built with nodexjs", "node.js"), 0);
    }

    #[test]
    fn test_trailing_punctuation_keyword_needs_word_after() {
        // "rust," ends in a non-word char, so \b after it requires a following word char
        assert_eq!(count_keyword_matches("Rust, Go", "rust,"), 0);
        assert_eq!(count_keyword_matches("rust,go", "rust,"), 1);
    }

    #[test]
    fn test_no_match_in_empty_text() {
        assert_eq!(count_keyword_matches("", "rust"), 0);
    }
}
