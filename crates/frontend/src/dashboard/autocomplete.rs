//! Suggestion filtering for the company search box

/// Minimum query length before suggestions appear
pub const MIN_QUERY_LEN: usize = 3;
/// Maximum number of suggestions shown at once
pub const MAX_SUGGESTIONS: usize = 5;

/// Case-insensitive substring filter over the known company list
///
/// Queries shorter than `MIN_QUERY_LEN` (after trimming) produce no
/// suggestions; matches beyond `MAX_SUGGESTIONS` are cut off.
pub fn filter_suggestions(companies: &[String], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    companies
        .iter()
        .filter(|company| company.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn companies() -> Vec<String> {
        vec![
            "Amalfi midco Ltd 14185820".to_string(),
            "CompanyB1234".to_string(),
            "CompanyC789".to_string(),
            "CompanyD012".to_string(),
        ]
    }

    #[test]
    fn short_queries_produce_nothing() {
        assert!(filter_suggestions(&companies(), "").is_empty());
        assert!(filter_suggestions(&companies(), "co").is_empty());
        assert!(filter_suggestions(&companies(), "  co  ").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let matches = filter_suggestions(&companies(), "company");
        assert_eq!(matches.len(), 3);
        assert_eq!(filter_suggestions(&companies(), "AMALFI").len(), 1);
        assert_eq!(filter_suggestions(&companies(), "b12"), vec!["CompanyB1234"]);
    }

    #[test]
    fn whitespace_around_the_query_is_ignored() {
        assert_eq!(
            filter_suggestions(&companies(), "  amalfi  "),
            vec!["Amalfi midco Ltd 14185820"]
        );
    }

    #[test]
    fn at_most_five_suggestions() {
        let many: Vec<String> = (0..20).map(|i| format!("Company {i}")).collect();
        let matches = filter_suggestions(&many, "company");
        assert_eq!(matches.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn no_match_means_empty() {
        assert!(filter_suggestions(&companies(), "acme").is_empty());
    }
}
