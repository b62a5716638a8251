use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Runs of anything outside lowercase ASCII alphanumerics
    static ref NON_ALNUM_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derive a URL-safe slug from a display name.
///
/// Lowercases the name, collapses non-alphanumeric runs to single hyphens
/// and strips leading/trailing hyphens. Returns `None` when nothing
/// slug-worthy remains.
pub fn slugify(name: &str) -> Option<String> {
    let lowered = name.to_lowercase();
    let hyphenated = NON_ALNUM_RUN.replace_all(&lowered, "-");
    let trimmed = hyphenated.trim_matches('-');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple_name() {
        assert_eq!(slugify("Tact Mirror"), Some("tact-mirror".to_string()));
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(
            slugify("Bamboo   Silk & Wool Rug"),
            Some("bamboo-silk-wool-rug".to_string())
        );
    }

    #[test]
    fn test_slugify_strips_edge_hyphens() {
        assert_eq!(slugify("  Tact Mirror!  "), Some("tact-mirror".to_string()));
        assert_eq!(slugify("--rugs--"), Some("rugs".to_string()));
    }

    #[test]
    fn test_slugify_keeps_digits() {
        assert_eq!(slugify("Mirror 2024"), Some("mirror-2024".to_string()));
    }

    #[test]
    fn test_slugify_nothing_left() {
        assert_eq!(slugify("!!!"), None);
        assert_eq!(slugify(""), None);
    }
}
