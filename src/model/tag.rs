//! Outfit tag parsing.
//!
//! The editor form collects tags as one comma-separated string; the
//! persistence boundary wants a list.

/// Split a comma-separated tag string into individual tags.
///
/// Each tag is trimmed; empty results are dropped. Order is preserved and
/// duplicates are kept, matching what the outfit service stores.
pub fn parse_tag_string(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into the editor form's comma-separated representation.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_yields_no_tags() {
        assert!(parse_tag_string("").is_empty());
        assert!(parse_tag_string("  ,  , ").is_empty());
    }

    #[test]
    fn test_tags_trimmed_in_order() {
        let tags = parse_tag_string(" comfy, trendy ,minimalist");
        assert_eq!(tags, vec!["comfy", "trendy", "minimalist"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let tags = parse_tag_string("cozy, winter, cozy");
        assert_eq!(tags, vec!["cozy", "winter", "cozy"]);
    }

    #[test]
    fn test_join_round_trip() {
        let raw = "comfy, trendy, minimalist";
        assert_eq!(join_tags(&parse_tag_string(raw)), raw);
    }
}
