use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Where on the page a product/category landed: filename plus query
/// parameters, parsed from the page location.
#[derive(Debug, Clone)]
pub struct PageContext {
    filename: String,
    params: HashMap<String, String>,
}

impl PageContext {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            params: HashMap::new(),
        }
    }

    /// Parse a page location: a full URL, a path, or a bare filename,
    /// with optional query string and fragment.
    pub fn from_location(location: &str) -> Self {
        let without_fragment = location.split('#').next().unwrap_or("");
        let mut parts = without_fragment.splitn(2, '?');
        let path = parts.next().unwrap_or("");
        let query = parts.next().unwrap_or("");

        let filename = path.rsplit('/').next().unwrap_or("").to_string();

        let mut params = HashMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let mut kv = pair.splitn(2, '=');
            let key = kv.next().unwrap_or("");
            let value = kv.next().unwrap_or("");
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            params.insert(key.to_string(), decoded.replace('+', " "));
        }

        Self { filename, params }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(|s| s.as_str())
    }
}

/// The fixed vocabulary of named DOM locations the hydrator may write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Anchor {
    ProductName,
    PageTitle,
    OgTitle,
    OgDescription,
    OgImage,
    Price,
    Features,
    Description,
    Designer,
    CountryOfOrigin,
    ImporterPackerMarketer,
    ArticleNumber,
    Dimensions,
    Materials,
    Finish,
    ReviewList,
    ReviewSummary,
    CategoryTitle,
    CategoryDescription,
}

impl Anchor {
    /// Anchors present on a product detail page template
    pub const PRODUCT_PAGE: &'static [Anchor] = &[
        Anchor::ProductName,
        Anchor::PageTitle,
        Anchor::OgTitle,
        Anchor::OgDescription,
        Anchor::OgImage,
        Anchor::Price,
        Anchor::Features,
        Anchor::Description,
        Anchor::Designer,
        Anchor::CountryOfOrigin,
        Anchor::ImporterPackerMarketer,
        Anchor::ArticleNumber,
        Anchor::Dimensions,
        Anchor::Materials,
        Anchor::Finish,
        Anchor::ReviewList,
        Anchor::ReviewSummary,
    ];

    /// Anchors present on a category landing page template
    pub const CATEGORY_PAGE: &'static [Anchor] =
        &[Anchor::PageTitle, Anchor::CategoryTitle, Anchor::CategoryDescription];
}

/// One positional gallery image element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GallerySlot {
    pub src: Option<String>,
    pub alt: Option<String>,
    pub thumb: Option<String>,
    pub full: Option<String>,
    pub srcset: Option<String>,
}

/// Structured stand-in for the page being hydrated.
///
/// A document knows which anchors its template actually has; writing to
/// an absent anchor is a no-op, so hydration can run against partial
/// templates without raising.
#[derive(Debug, Clone, PartialEq)]
pub struct PageDocument {
    anchors: BTreeSet<Anchor>,
    slots: BTreeMap<Anchor, String>,
    gallery: Vec<GallerySlot>,
}

impl PageDocument {
    pub fn with_anchors(
        anchors: impl IntoIterator<Item = Anchor>,
        gallery_slots: usize,
    ) -> Self {
        Self {
            anchors: anchors.into_iter().collect(),
            slots: BTreeMap::new(),
            gallery: vec![GallerySlot::default(); gallery_slots],
        }
    }

    /// A full product detail page
    pub fn product_page(gallery_slots: usize) -> Self {
        Self::with_anchors(Anchor::PRODUCT_PAGE.iter().copied(), gallery_slots)
    }

    /// A category landing page
    pub fn category_page() -> Self {
        Self::with_anchors(Anchor::CATEGORY_PAGE.iter().copied(), 0)
    }

    pub fn has_anchor(&self, anchor: Anchor) -> bool {
        self.anchors.contains(&anchor)
    }

    /// Overwrite an anchor's content; no-op when the template lacks it
    pub fn set(&mut self, anchor: Anchor, value: impl Into<String>) {
        if self.anchors.contains(&anchor) {
            self.slots.insert(anchor, value.into());
        }
    }

    pub fn get(&self, anchor: Anchor) -> Option<&str> {
        self.slots.get(&anchor).map(|s| s.as_str())
    }

    pub fn gallery(&self) -> &[GallerySlot] {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut [GallerySlot] {
        &mut self.gallery
    }

    /// Anchors that currently hold hydrated content, in stable order
    pub fn hydrated(&self) -> impl Iterator<Item = (Anchor, &str)> {
        self.slots.iter().map(|(a, v)| (*a, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_location_bare_filename() {
        let ctx = PageContext::from_location("index_rugs.html");
        assert_eq!(ctx.filename(), "index_rugs.html");
        assert_eq!(ctx.param("product"), None);
    }

    #[test]
    fn test_from_location_full_url_with_query_and_fragment() {
        let ctx = PageContext::from_location(
            "https://shop.example.com/pages/index_mirrors.html?product=product2&x=a%20b#reviews",
        );
        assert_eq!(ctx.filename(), "index_mirrors.html");
        assert_eq!(ctx.param("product"), Some("product2"));
        assert_eq!(ctx.param("x"), Some("a b"));
    }

    #[test]
    fn test_from_location_plus_decodes_to_space() {
        let ctx = PageContext::from_location("p.html?slug=tact+mirror");
        assert_eq!(ctx.param("slug"), Some("tact mirror"));
    }

    #[test]
    fn test_set_ignores_absent_anchor() {
        let mut doc = PageDocument::with_anchors([Anchor::ProductName], 0);
        doc.set(Anchor::Designer, "Tacchini");
        assert_eq!(doc.get(Anchor::Designer), None);

        doc.set(Anchor::ProductName, "Tact Mirror");
        assert_eq!(doc.get(Anchor::ProductName), Some("Tact Mirror"));
    }

    #[test]
    fn test_gallery_slots_fixed_count() {
        let doc = PageDocument::product_page(3);
        assert_eq!(doc.gallery().len(), 3);
        assert!(doc.gallery().iter().all(|s| s.src.is_none()));
    }
}
