//! Static lookup tables driving identifier resolution.
//!
//! These are configuration, not control flow: the resolver walks them so
//! the precedence order stays auditable and testable independent of the
//! table contents.

/// What a known page filename maps to when no query parameter is present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Slug(&'static str),
    Article(&'static str),
    Category(&'static str),
}

/// Known page filenames and the product identifier each represents
pub const PAGE_PRODUCT_TABLE: &[(&str, PageEntry)] = &[
    ("index_tact-mirror.html", PageEntry::Slug("tact-mirror")),
    ("index_tact.html", PageEntry::Slug("tact-mirror")),
    ("index_mirrors.html", PageEntry::Category("mirrors")),
    ("index_rugs.html", PageEntry::Category("rugs")),
    ("index_decor.html", PageEntry::Category("decor")),
    (
        "index_newzealand-wool.html",
        PageEntry::Article("NZ-WOOL-RUNNER-001"),
    ),
];

/// (category, selector index) to article number; index 0 is the page's
/// default product and has no entry
pub const CATEGORY_ARTICLE_TABLE: &[(&str, &[(usize, &str)])] = &[
    (
        "mirrors",
        &[
            (1, "FAM-ALU-2024"),
            (2, "TTBM-BRASS-5678"),
            (3, "UFM-SOTTSASS-9012"),
        ],
    ),
    (
        "rugs",
        &[
            (1, "RPR-PET-2024"),
            (2, "STR-TAPE-7890"),
            (3, "BSW-NAT-4567"),
        ],
    ),
    ("decor", &[]),
];

/// Category landing page filenames and their category slug
pub const PAGE_CATEGORY_TABLE: &[(&str, &str)] = &[
    ("index_decor.html", "decor"),
    ("index_mirrors.html", "mirrors"),
    ("index_rugs.html", "rugs"),
];

pub fn page_entry(filename: &str) -> Option<PageEntry> {
    PAGE_PRODUCT_TABLE
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, entry)| *entry)
}

pub fn article_for(category: &str, index: usize) -> Option<&'static str> {
    CATEGORY_ARTICLE_TABLE
        .iter()
        .find(|(cat, _)| *cat == category)
        .and_then(|(_, entries)| {
            entries
                .iter()
                .find(|(i, _)| *i == index)
                .map(|(_, article)| *article)
        })
}

pub fn category_page_slug(filename: &str) -> Option<&'static str> {
    PAGE_CATEGORY_TABLE
        .iter()
        .find(|(name, _)| *name == filename)
        .map(|(_, slug)| *slug)
}

/// Filename-substring heuristic used when a page isn't in the tables:
/// "mirror" (but not "wool") wins over "rug"/"wool", then "decor".
pub fn category_from_filename(filename: &str) -> Option<&'static str> {
    if filename.contains("mirror") && !filename.contains("wool") {
        Some("mirrors")
    } else if filename.contains("rug") || filename.contains("wool") {
        Some("rugs")
    } else if filename.contains("decor") {
        Some("decor")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_entry_lookup() {
        assert_eq!(
            page_entry("index_tact-mirror.html"),
            Some(PageEntry::Slug("tact-mirror"))
        );
        assert_eq!(
            page_entry("index_rugs.html"),
            Some(PageEntry::Category("rugs"))
        );
        assert_eq!(
            page_entry("index_newzealand-wool.html"),
            Some(PageEntry::Article("NZ-WOOL-RUNNER-001"))
        );
        assert_eq!(page_entry("unknown.html"), None);
    }

    #[test]
    fn test_article_for_category_and_index() {
        assert_eq!(article_for("mirrors", 1), Some("FAM-ALU-2024"));
        assert_eq!(article_for("rugs", 3), Some("BSW-NAT-4567"));
        // index 0 is the default product, never in the table
        assert_eq!(article_for("mirrors", 0), None);
        assert_eq!(article_for("decor", 1), None);
        assert_eq!(article_for("vases", 1), None);
    }

    #[test]
    fn test_category_page_slug() {
        assert_eq!(category_page_slug("index_mirrors.html"), Some("mirrors"));
        assert_eq!(category_page_slug("index_tact.html"), None);
    }

    #[test]
    fn test_category_from_filename_heuristic() {
        assert_eq!(category_from_filename("index_tact-mirror.html"), Some("mirrors"));
        // "wool" beats "mirror"
        assert_eq!(
            category_from_filename("index_newzealand-wool.html"),
            Some("rugs")
        );
        assert_eq!(category_from_filename("index_shag-rug.html"), Some("rugs"));
        assert_eq!(category_from_filename("index_decor.html"), Some("decor"));
        assert_eq!(category_from_filename("index_lamps.html"), None);
    }
}
