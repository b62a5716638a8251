use minijinja::{context, Environment};

use crate::features::hydrator::models::{
    Anchor, CategoryData, PageDocument, ProductData, ReviewData,
};
use crate::shared::constants::PAGE_TITLE_SUFFIX;

/// Mean review rating rounded to one decimal place
pub fn average_rating(reviews: &[ReviewData]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: i32 = reviews.iter().map(|r| r.rating).sum();
    let mean = f64::from(sum) / reviews.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// "Based on N review(s)" line under the summary stars
pub fn review_count_line(count: usize) -> String {
    if count == 1 {
        "Based on 1 review".to_string()
    } else {
        format!("Based on {} reviews", count)
    }
}

/// Renders product, review, and category content into a [`PageDocument`].
///
/// All markup goes through named templates so user-sourced text (review
/// comments, product names) is escaped on the way in.
pub struct HydrationEngine {
    env: Environment<'static>,
}

impl HydrationEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // The .html names opt the templates into autoescaping.
        for (name, source) in [
            ("price_regular.html", include_str!("../templates/price_regular.html")),
            ("price_sale.html", include_str!("../templates/price_sale.html")),
            ("review_item.html", include_str!("../templates/review_item.html")),
            ("review_summary.html", include_str!("../templates/review_summary.html")),
        ] {
            env.add_template(name, source)
                .unwrap_or_else(|e| panic!("Invalid template {}: {}", name, e));
        }
        Self { env }
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Option<String> {
        match self.env.get_template(name).and_then(|t| t.render(ctx)) {
            Ok(html) => Some(html),
            Err(e) => {
                tracing::error!("Failed to render {}: {}", name, e);
                None
            }
        }
    }

    /// Patch every product anchor the document has.
    ///
    /// Optional fields that the record lacks leave their anchors alone,
    /// so the template's own placeholder text survives.
    pub fn hydrate_product(&self, doc: &mut PageDocument, product: &ProductData) {
        doc.set(Anchor::ProductName, &product.name);

        doc.set(
            Anchor::PageTitle,
            format!("{}{}", product.name, PAGE_TITLE_SUFFIX),
        );
        // og:title carries the bare name, og:description the features text
        doc.set(Anchor::OgTitle, &product.name);
        doc.set(Anchor::OgDescription, &product.features);

        if let Some(price) = self.render_price(product) {
            doc.set(Anchor::Price, price);
        }

        doc.set(Anchor::Features, &product.features);
        doc.set(Anchor::Description, &product.description);

        let optional = [
            (Anchor::Designer, &product.designer),
            (Anchor::CountryOfOrigin, &product.country_of_origin),
            (
                Anchor::ImporterPackerMarketer,
                &product.importer_packer_marketer,
            ),
            (Anchor::ArticleNumber, &product.article_number),
            (Anchor::Dimensions, &product.dimensions),
            (Anchor::Materials, &product.materials),
            (Anchor::Finish, &product.finish),
        ];
        for (anchor, value) in optional {
            if let Some(value) = value {
                doc.set(anchor, value);
            }
        }

        if let Some(image) = product.images.first() {
            doc.set(Anchor::OgImage, &image.src);
        }

        self.hydrate_gallery(doc, product);
        self.hydrate_reviews(doc, &product.reviews);
    }

    fn render_price(&self, product: &ProductData) -> Option<String> {
        match &product.original_price {
            Some(original_price) => self.render(
                "price_sale.html",
                context! {
                    symbol => product.currency_symbol,
                    price => product.price,
                    original_price => original_price,
                },
            ),
            None => self.render(
                "price_regular.html",
                context! {
                    symbol => product.currency_symbol,
                    price => product.price,
                },
            ),
        }
    }

    /// Bind images to gallery slots positionally; extra images are
    /// dropped, extra slots are left untouched.
    fn hydrate_gallery(&self, doc: &mut PageDocument, product: &ProductData) {
        for (slot, image) in doc.gallery_mut().iter_mut().zip(&product.images) {
            let alt = image
                .alt
                .clone()
                .unwrap_or_else(|| product.name.clone());
            slot.src = Some(image.src.clone());
            slot.alt = Some(alt);
            slot.thumb = Some(image.thumb.clone().unwrap_or_else(|| image.src.clone()));
            slot.full = Some(image.src.clone());
            slot.srcset = Some(format!("{} 858w", image.src));
        }
    }

    /// Rebuild the review list and summary from scratch.
    ///
    /// With no reviews both anchors are left untouched, keeping the
    /// template's "no reviews yet" state.
    pub fn hydrate_reviews(&self, doc: &mut PageDocument, reviews: &[ReviewData]) {
        if reviews.is_empty() {
            return;
        }

        let mut items = String::new();
        for (index, review) in reviews.iter().enumerate() {
            let zebra = if index % 2 == 0 {
                "even thread-even"
            } else {
                "odd thread-odd"
            };
            let rendered = self.render(
                "review_item.html",
                context! {
                    number => index + 1,
                    zebra => zebra,
                    rating => review.rating,
                    percent => review.rating * 20,
                    author => review.author,
                    datetime => review.date.to_rfc3339(),
                    date => review.date.format("%B %-d, %Y").to_string(),
                    comment => review.comment,
                },
            );
            if let Some(html) = rendered {
                items.push_str(&html);
            }
        }
        doc.set(Anchor::ReviewList, items);

        let average = average_rating(reviews);
        if let Some(summary) = self.render(
            "review_summary.html",
            context! {
                average => format!("{:.1}", average),
                percent => (average * 20.0).round() as i64,
                count_line => review_count_line(reviews.len()),
            },
        ) {
            doc.set(Anchor::ReviewSummary, summary);
        }
    }

    /// Patch the category anchors on a landing page
    pub fn hydrate_category(&self, doc: &mut PageDocument, category: &CategoryData) {
        doc.set(Anchor::PageTitle, format!("{}{}", category.name, PAGE_TITLE_SUFFIX));
        doc.set(Anchor::CategoryTitle, &category.name);
        if let Some(description) = &category.description {
            doc.set(Anchor::CategoryDescription, description);
        }
    }
}

impl Default for HydrationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::hydrator::models::ImageData;
    use chrono::TimeZone;
    use chrono::Utc;

    fn review(author: &str, rating: i32) -> ReviewData {
        ReviewData {
            author: author.to_string(),
            rating,
            comment: format!("Review by {}", author),
            date: Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap(),
        }
    }

    fn tact_mirror() -> ProductData {
        ProductData {
            id: "id-tact-mirror".to_string(),
            name: "Tact Mirror".to_string(),
            price: "249.00".to_string(),
            original_price: None,
            currency_symbol: "$".to_string(),
            features: "Bevelled edge".to_string(),
            description: "A wall mirror with a rounded frame.".to_string(),
            dimensions: Some("60 x 60 cm".to_string()),
            materials: Some("Glass, oak".to_string()),
            finish: None,
            designer: Some("Tacchini Studio".to_string()),
            country_of_origin: Some("Italy".to_string()),
            importer_packer_marketer: None,
            article_number: Some("TAC-MIR-001".to_string()),
            images: vec![
                ImageData {
                    src: "/img/tact-1.jpg".to_string(),
                    thumb: Some("/img/tact-1-thumb.jpg".to_string()),
                    alt: Some("Tact Mirror front".to_string()),
                },
                ImageData {
                    src: "/img/tact-2.jpg".to_string(),
                    thumb: None,
                    alt: None,
                },
            ],
            reviews: vec![review("Astrid", 5), review("Jonas", 4)],
            category: "mirrors".to_string(),
            slug: Some("tact-mirror".to_string()),
        }
    }

    #[test]
    fn test_average_rating_rounds_to_one_decimal() {
        let reviews = [review("a", 5), review("b", 4), review("c", 5)];
        assert_eq!(average_rating(&reviews), 4.7);
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn test_review_count_line_singular_plural() {
        assert_eq!(review_count_line(1), "Based on 1 review");
        assert_eq!(review_count_line(3), "Based on 3 reviews");
    }

    #[test]
    fn test_regular_price_markup() {
        let engine = HydrationEngine::new();
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_product(&mut doc, &tact_mirror());

        let price = doc.get(Anchor::Price).unwrap();
        assert!(price.contains("woocommerce-Price-currencySymbol\">$</span>249.00"));
        assert!(!price.contains("<del"));
    }

    #[test]
    fn test_sale_price_markup_carries_both_amounts() {
        let engine = HydrationEngine::new();
        let mut product = tact_mirror();
        product.original_price = Some("299.00".to_string());
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_product(&mut doc, &product);

        let price = doc.get(Anchor::Price).unwrap();
        assert!(price.contains("<del"));
        assert!(price.contains("299.00"));
        assert!(price.contains("<ins"));
        assert!(price.contains("249.00"));
        assert!(price.contains("Original price was: $299.00."));
        assert!(price.contains("Current price is: $249.00."));
    }

    #[test]
    fn test_page_title_gets_store_suffix() {
        let engine = HydrationEngine::new();
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_product(&mut doc, &tact_mirror());

        assert_eq!(
            doc.get(Anchor::PageTitle),
            Some("Tact Mirror – Furnistør")
        );
        // The open-graph title stays the bare product name
        assert_eq!(doc.get(Anchor::OgTitle), Some("Tact Mirror"));
    }

    #[test]
    fn test_og_description_carries_features_text() {
        let engine = HydrationEngine::new();
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_product(&mut doc, &tact_mirror());

        assert_eq!(doc.get(Anchor::OgDescription), Some("Bevelled edge"));
        assert_eq!(doc.get(Anchor::Features), Some("Bevelled edge"));
    }

    #[test]
    fn test_missing_optional_field_leaves_anchor_alone() {
        let engine = HydrationEngine::new();
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_product(&mut doc, &tact_mirror());

        // tact_mirror has no finish and no importer line
        assert_eq!(doc.get(Anchor::Finish), None);
        assert_eq!(doc.get(Anchor::ImporterPackerMarketer), None);
        assert_eq!(doc.get(Anchor::Dimensions), Some("60 x 60 cm"));
    }

    #[test]
    fn test_review_list_zebra_and_escaping() {
        let engine = HydrationEngine::new();
        let mut reviews = vec![review("Astrid", 5), review("Jonas", 4)];
        reviews[1].comment = "Nice <b>frame</b>".to_string();
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_reviews(&mut doc, &reviews);

        let list = doc.get(Anchor::ReviewList).unwrap();
        assert!(list.contains("class=\"review even thread-even depth-1\""));
        assert!(list.contains("class=\"review odd thread-odd depth-1\""));
        assert!(list.contains("id=\"li-comment-1\""));
        assert!(list.contains("id=\"comment-2\""));
        assert!(list.contains("width:100%"));
        assert!(list.contains("width:80%"));
        assert!(list.contains("March 5, 2024"));
        // Review text is escaped, not injected as markup
        assert!(!list.contains("<b>"));
        assert!(list.contains("Nice &lt;b&gt;frame"));
    }

    #[test]
    fn test_review_summary_average_and_count() {
        let engine = HydrationEngine::new();
        let reviews = [review("a", 5), review("b", 4), review("c", 5)];
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_reviews(&mut doc, &reviews);

        let summary = doc.get(Anchor::ReviewSummary).unwrap();
        assert!(summary.contains("4.7"));
        assert!(summary.contains("width:94%"));
        assert!(summary.contains("Based on 3 reviews"));
    }

    #[test]
    fn test_single_review_summary_is_singular() {
        let engine = HydrationEngine::new();
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_reviews(&mut doc, &[review("Astrid", 5)]);

        let summary = doc.get(Anchor::ReviewSummary).unwrap();
        assert!(summary.contains("Based on 1 review"));
        assert!(!summary.contains("reviews"));
    }

    #[test]
    fn test_no_reviews_leaves_anchors_untouched() {
        let engine = HydrationEngine::new();
        let mut doc = PageDocument::product_page(0);
        engine.hydrate_reviews(&mut doc, &[]);

        assert_eq!(doc.get(Anchor::ReviewList), None);
        assert_eq!(doc.get(Anchor::ReviewSummary), None);
    }

    #[test]
    fn test_gallery_binds_positionally_and_clamps() {
        let engine = HydrationEngine::new();
        let product = tact_mirror();

        // More slots than images: trailing slot stays empty
        let mut doc = PageDocument::product_page(3);
        engine.hydrate_product(&mut doc, &product);
        let gallery = doc.gallery();
        assert_eq!(gallery[0].src.as_deref(), Some("/img/tact-1.jpg"));
        assert_eq!(gallery[0].thumb.as_deref(), Some("/img/tact-1-thumb.jpg"));
        assert_eq!(gallery[0].srcset.as_deref(), Some("/img/tact-1.jpg 858w"));
        // Second image has no alt or thumb; both default from the image
        assert_eq!(gallery[1].alt.as_deref(), Some("Tact Mirror"));
        assert_eq!(gallery[1].thumb.as_deref(), Some("/img/tact-2.jpg"));
        assert_eq!(gallery[2], Default::default());

        // More images than slots: extras are dropped
        let mut doc = PageDocument::product_page(1);
        engine.hydrate_product(&mut doc, &product);
        assert_eq!(doc.gallery().len(), 1);
        assert_eq!(doc.gallery()[0].src.as_deref(), Some("/img/tact-1.jpg"));
    }

    #[test]
    fn test_hydration_is_idempotent() {
        let engine = HydrationEngine::new();
        let product = tact_mirror();

        let mut doc = PageDocument::product_page(2);
        engine.hydrate_product(&mut doc, &product);
        let first_pass = doc.clone();
        engine.hydrate_product(&mut doc, &product);

        assert_eq!(doc, first_pass);
    }

    #[test]
    fn test_category_anchors() {
        let engine = HydrationEngine::new();
        let category = CategoryData {
            id: "id-mirrors".to_string(),
            name: "Mirrors".to_string(),
            slug: "mirrors".to_string(),
            description: Some("Wall and table mirrors.".to_string()),
        };
        let mut doc = PageDocument::category_page();
        engine.hydrate_category(&mut doc, &category);

        assert_eq!(doc.get(Anchor::PageTitle), Some("Mirrors – Furnistør"));
        assert_eq!(doc.get(Anchor::CategoryTitle), Some("Mirrors"));
        assert_eq!(
            doc.get(Anchor::CategoryDescription),
            Some("Wall and table mirrors.")
        );
        // Product anchors are absent on a category page
        assert_eq!(doc.get(Anchor::Price), None);
    }
}
