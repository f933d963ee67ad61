use crate::scoring::{KeywordRecord, Suggestion};

/// Maximum number of unfound keywords listed under "Missing Keywords".
pub const MAX_MISSING_KEYWORDS: usize = 5;

const FORMAT_IMPROVEMENTS: [&str; 3] = [
    "Use standard section headings like 'Experience', 'Education', and 'Skills'",
    "Avoid tables and complex formatting that ATS may struggle with",
    "Use a clean, single-column layout for better parsing",
];

const CONTENT_RECOMMENDATIONS: [&str; 3] = [
    "Quantify achievements with specific metrics and numbers",
    "Focus on results and impact rather than just responsibilities",
    "Tailor your skills section to match job requirements",
];

/// Builds the three suggestion groups. Only "Missing Keywords" depends on the
/// match results; the other two are fixed.
pub fn build_suggestions(keywords: &[KeywordRecord]) -> Vec<Suggestion> {
    let missing = keywords
        .iter()
        .filter(|k| !k.found)
        .take(MAX_MISSING_KEYWORDS)
        .map(|k| k.keyword.clone())
        .collect();

    vec![
        Suggestion {
            category: "Missing Keywords".to_string(),
            items: missing,
        },
        Suggestion {
            category: "Format Improvement".to_string(),
            items: to_owned_items(&FORMAT_IMPROVEMENTS),
        },
        Suggestion {
            category: "Content Recommendations".to_string(),
            items: to_owned_items(&CONTENT_RECOMMENDATIONS),
        },
    ]
}

fn to_owned_items(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(keyword: &str, matches: u32) -> KeywordRecord {
        KeywordRecord {
            keyword: keyword.to_string(),
            matches,
            found: matches > 0,
        }
    }

    #[test]
    fn test_missing_keywords_capped_at_five_in_order() {
        let names = ["one1", "two2", "three", "four", "five", "six6", "seven"];
        let keywords: Vec<KeywordRecord> = names.iter().map(|k| kw(k, 0)).collect();
        let suggestions = build_suggestions(&keywords);
        assert_eq!(
            suggestions[0].items,
            vec!["one1", "two2", "three", "four", "five"]
        );
    }

    #[test]
    fn test_found_keywords_are_not_missing() {
        let keywords = vec![kw("rust", 2), kw("kafka", 0), kw("tokio", 1), kw("redis", 0)];
        let suggestions = build_suggestions(&keywords);
        assert_eq!(suggestions[0].items, vec!["kafka", "redis"]);
    }

    #[test]
    fn test_static_categories_are_constant() {
        let a = build_suggestions(&[kw("rust", 0)]);
        let b = build_suggestions(&[]);
        assert_eq!(a[1], b[1]);
        assert_eq!(a[2], b[2]);
        assert_eq!(a[1].category, "Format Improvement");
        assert_eq!(a[1].items.len(), 3);
        assert_eq!(a[2].category, "Content Recommendations");
        assert_eq!(a[2].items.len(), 3);
    }

    #[test]
    fn test_all_found_leaves_missing_group_empty() {
        let suggestions = build_suggestions(&[kw("rust", 1)]);
        assert_eq!(suggestions[0].category, "Missing Keywords");
        assert!(suggestions[0].items.is_empty());
    }
}
