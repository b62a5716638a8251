use crate::features::hydrator::clients::CatalogApi;
use crate::features::hydrator::models::{Anchor, PageContext, PageDocument};
use crate::features::hydrator::services::{HydrationEngine, ProductResolver};
use crate::features::hydrator::tables;

/// Ties resolution and rendering together for one page.
///
/// A page may carry product anchors, category anchors, or both; each
/// block hydrates independently and a miss on one never blocks the
/// other.
pub struct PageHydrator<'a> {
    api: &'a dyn CatalogApi,
    engine: HydrationEngine,
}

impl<'a> PageHydrator<'a> {
    pub fn new(api: &'a dyn CatalogApi) -> Self {
        Self {
            api,
            engine: HydrationEngine::new(),
        }
    }

    /// One full hydration pass over the document
    pub async fn run(&self, ctx: &PageContext, doc: &mut PageDocument) {
        self.hydrate_product_page(ctx, doc).await;
        self.hydrate_category_page(ctx, doc).await;
    }

    /// Resolve the page's product and patch the product anchors
    pub async fn hydrate_product_page(&self, ctx: &PageContext, doc: &mut PageDocument) {
        if !doc.has_anchor(Anchor::ProductName) {
            return;
        }
        let resolver = ProductResolver::new(self.api);
        if let Some(product) = resolver.resolve(ctx).await {
            self.engine.hydrate_product(doc, &product);
        }
    }

    /// Patch the category anchors when the filename maps to a category
    /// landing page
    pub async fn hydrate_category_page(&self, ctx: &PageContext, doc: &mut PageDocument) {
        if !doc.has_anchor(Anchor::CategoryTitle) {
            return;
        }
        let Some(slug) = tables::category_page_slug(ctx.filename()) else {
            return;
        };
        match self.api.category_by_slug(slug).await {
            Ok(Some(category)) => self.engine.hydrate_category(doc, &category),
            Ok(None) => {
                tracing::warn!("No category record for slug {}", slug);
            }
            Err(e) => {
                tracing::warn!("Category fetch for {} failed: {}", slug, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::hydrator::clients::ClientError;
    use crate::features::hydrator::models::{CategoryData, ProductData};
    use async_trait::async_trait;

    struct FixedApi {
        product: Option<ProductData>,
        category: Option<CategoryData>,
    }

    #[async_trait]
    impl CatalogApi for FixedApi {
        async fn product_by_id(&self, _id: &str) -> Result<Option<ProductData>, ClientError> {
            Ok(self.product.clone())
        }

        async fn product_by_slug(&self, _slug: &str) -> Result<Option<ProductData>, ClientError> {
            Ok(self.product.clone())
        }

        async fn product_by_article(
            &self,
            _article: &str,
        ) -> Result<Option<ProductData>, ClientError> {
            Ok(self.product.clone())
        }

        async fn active_products(
            &self,
            _category: Option<&str>,
        ) -> Result<Vec<ProductData>, ClientError> {
            Ok(self.product.clone().into_iter().collect())
        }

        async fn category_by_slug(
            &self,
            _slug: &str,
        ) -> Result<Option<CategoryData>, ClientError> {
            Ok(self.category.clone())
        }
    }

    fn wool_runner() -> ProductData {
        ProductData {
            id: "id-wool".to_string(),
            name: "New Zealand Wool Runner".to_string(),
            price: "189.00".to_string(),
            original_price: None,
            currency_symbol: "$".to_string(),
            features: String::new(),
            description: "Hand-loomed wool runner.".to_string(),
            dimensions: None,
            materials: None,
            finish: None,
            designer: None,
            country_of_origin: None,
            importer_packer_marketer: None,
            article_number: Some("NZ-WOOL-RUNNER-001".to_string()),
            images: vec![],
            reviews: vec![],
            category: "rugs".to_string(),
            slug: Some("new-zealand-wool-runner".to_string()),
        }
    }

    #[tokio::test]
    async fn test_product_page_hydrates_product_anchors() {
        let api = FixedApi {
            product: Some(wool_runner()),
            category: None,
        };
        let hydrator = PageHydrator::new(&api);
        let ctx = PageContext::new("index_newzealand-wool.html");
        let mut doc = PageDocument::product_page(0);

        hydrator.run(&ctx, &mut doc).await;

        assert_eq!(
            doc.get(Anchor::ProductName),
            Some("New Zealand Wool Runner")
        );
        assert_eq!(
            doc.get(Anchor::ArticleNumber),
            Some("NZ-WOOL-RUNNER-001")
        );
    }

    #[tokio::test]
    async fn test_unresolved_product_leaves_document_untouched() {
        let api = FixedApi {
            product: None,
            category: None,
        };
        let hydrator = PageHydrator::new(&api);
        let ctx = PageContext::new("index_unknown.html");
        let mut doc = PageDocument::product_page(0);
        let before = doc.clone();

        hydrator.run(&ctx, &mut doc).await;

        assert_eq!(doc, before);
    }

    #[tokio::test]
    async fn test_category_page_hydrates_category_anchors() {
        let api = FixedApi {
            product: None,
            category: Some(CategoryData {
                id: "id-rugs".to_string(),
                name: "Rugs".to_string(),
                slug: "rugs".to_string(),
                description: Some("Runners and area rugs.".to_string()),
            }),
        };
        let hydrator = PageHydrator::new(&api);
        let ctx = PageContext::new("index_rugs.html");
        let mut doc = PageDocument::category_page();

        hydrator.run(&ctx, &mut doc).await;

        assert_eq!(doc.get(Anchor::CategoryTitle), Some("Rugs"));
        assert_eq!(
            doc.get(Anchor::CategoryDescription),
            Some("Runners and area rugs.")
        );
    }

    #[tokio::test]
    async fn test_category_block_skipped_on_non_category_page() {
        let api = FixedApi {
            product: None,
            category: Some(CategoryData {
                id: "id-rugs".to_string(),
                name: "Rugs".to_string(),
                slug: "rugs".to_string(),
                description: None,
            }),
        };
        let hydrator = PageHydrator::new(&api);
        // A slug-table page, not a category landing page
        let ctx = PageContext::new("index_tact-mirror.html");
        let mut doc = PageDocument::category_page();

        hydrator.run(&ctx, &mut doc).await;

        assert_eq!(doc.get(Anchor::CategoryTitle), None);
    }
}
