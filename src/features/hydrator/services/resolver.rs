use lazy_static::lazy_static;
use regex::Regex;

use crate::features::hydrator::clients::CatalogApi;
use crate::features::hydrator::models::{PageContext, ProductData};
use crate::features::hydrator::tables::{self, PageEntry};

lazy_static! {
    /// Indexed product selector, e.g. "product2"
    static ref PRODUCT_PARAM: Regex = Regex::new(r"^product(\d+)$").unwrap();
}

/// Ordered resolution strategies; the first one that resolves wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `id` query parameter, looked up by id
    ExplicitId,
    /// `slug` query parameter, looked up by slug
    ExplicitSlug,
    /// `article` query parameter, looked up by article number
    ExplicitArticle,
    /// `product=product<N>` selector resolved through the static
    /// (category, index) table, with a positional list fallback
    IndexedSelector,
    /// Static page-filename table, with a first-of-catalog fallback
    PageDefault,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::ExplicitId,
        Strategy::ExplicitSlug,
        Strategy::ExplicitArticle,
        Strategy::IndexedSelector,
        Strategy::PageDefault,
    ];
}

/// Resolves "which product does this page represent".
///
/// Every strategy degrades silently: a failed fetch or a missing record
/// is "unresolved" and the next strategy (or fallback step) runs.
pub struct ProductResolver<'a> {
    api: &'a dyn CatalogApi,
}

impl<'a> ProductResolver<'a> {
    pub fn new(api: &'a dyn CatalogApi) -> Self {
        Self { api }
    }

    /// Walk the strategies in priority order, stopping at the first match
    pub async fn resolve(&self, ctx: &PageContext) -> Option<ProductData> {
        for strategy in Strategy::ALL {
            if let Some(product) = self.apply(strategy, ctx).await {
                tracing::debug!(
                    "Resolved product '{}' via {:?} on {}",
                    product.name,
                    strategy,
                    ctx.filename()
                );
                return Some(product);
            }
        }
        tracing::warn!("No product data found for {}", ctx.filename());
        None
    }

    /// Apply one strategy in isolation
    pub async fn apply(&self, strategy: Strategy, ctx: &PageContext) -> Option<ProductData> {
        match strategy {
            Strategy::ExplicitId => {
                let id = ctx.param("id")?;
                self.fetch(self.api.product_by_id(id).await, "id")
            }
            Strategy::ExplicitSlug => {
                let slug = ctx.param("slug")?;
                self.fetch(self.api.product_by_slug(slug).await, "slug")
            }
            Strategy::ExplicitArticle => {
                let article = ctx.param("article")?;
                self.fetch(self.api.product_by_article(article).await, "article")
            }
            Strategy::IndexedSelector => self.indexed_selector(ctx).await,
            Strategy::PageDefault => self.page_default(ctx).await,
        }
    }

    fn fetch(
        &self,
        result: Result<Option<ProductData>, crate::features::hydrator::clients::ClientError>,
        key: &str,
    ) -> Option<ProductData> {
        match result {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!("Lookup by {} failed: {}", key, e);
                None
            }
        }
    }

    /// Which category an indexed selector on this page refers to
    fn selector_category(ctx: &PageContext) -> Option<&'static str> {
        match tables::page_entry(ctx.filename()) {
            Some(PageEntry::Category(category)) => Some(category),
            // Slug/article pages and unknown pages fall back to the
            // filename-substring heuristic
            _ => tables::category_from_filename(ctx.filename()),
        }
    }

    async fn indexed_selector(&self, ctx: &PageContext) -> Option<ProductData> {
        let param = ctx.param("product")?;
        let index: usize = PRODUCT_PARAM
            .captures(param)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())?;

        let category = Self::selector_category(ctx);

        // The (category, index) table is the reliable path: it pins a
        // concrete article number and rejects mismatched records.
        if let Some(category) = category {
            if let Some(article) = tables::article_for(category, index) {
                if let Some(product) = self.fetch(
                    self.api.product_by_article(article).await,
                    "selector article",
                ) {
                    if product.article_number.as_deref() == Some(article) {
                        return Some(product);
                    }
                    tracing::warn!(
                        "Article lookup for {} returned mismatched record {:?}",
                        article,
                        product.article_number
                    );
                }
            }
        }

        // Positional fallback: index straight into the category list,
        // clamping to the first product when out of range.
        let products = match self.api.active_products(category).await {
            Ok(products) => products,
            Err(e) => {
                tracing::warn!("Category list fetch failed: {}", e);
                return None;
            }
        };

        products
            .get(index)
            .or_else(|| products.first())
            .cloned()
    }

    async fn page_default(&self, ctx: &PageContext) -> Option<ProductData> {
        let from_table = match tables::page_entry(ctx.filename()) {
            Some(PageEntry::Slug(slug)) => {
                self.fetch(self.api.product_by_slug(slug).await, "page slug")
            }
            Some(PageEntry::Article(article)) => {
                self.fetch(self.api.product_by_article(article).await, "page article")
            }
            Some(PageEntry::Category(category)) => self
                .api
                .active_products(Some(category))
                .await
                .ok()
                .and_then(|products| products.into_iter().next()),
            None => None,
        };

        if from_table.is_some() {
            return from_table;
        }

        // Last resort: first product of the whole active catalog
        self.api
            .active_products(None)
            .await
            .ok()
            .and_then(|products| products.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::hydrator::clients::ClientError;
    use async_trait::async_trait;

    fn product(name: &str, slug: &str, article: Option<&str>, category: &str) -> ProductData {
        ProductData {
            id: format!("id-{}", slug),
            name: name.to_string(),
            price: "100.00".to_string(),
            original_price: None,
            currency_symbol: "$".to_string(),
            features: String::new(),
            description: String::new(),
            dimensions: None,
            materials: None,
            finish: None,
            designer: None,
            country_of_origin: None,
            importer_packer_marketer: None,
            article_number: article.map(|a| a.to_string()),
            images: vec![],
            reviews: vec![],
            category: category.to_string(),
            slug: Some(slug.to_string()),
        }
    }

    /// In-memory catalog over a fixed product list
    struct StubApi {
        products: Vec<ProductData>,
        fail_article_lookups: bool,
    }

    impl StubApi {
        fn catalog() -> Self {
            Self {
                products: vec![
                    product("Tact Mirror", "tact-mirror", Some("TAC-MIR-001"), "mirrors"),
                    product(
                        "Freestanding Aluminium Mirror",
                        "freestanding-aluminium-mirror",
                        Some("FAM-ALU-2024"),
                        "mirrors",
                    ),
                    product(
                        "Tilting Table-Top Brass Mirror",
                        "tilting-table-top-brass-mirror",
                        Some("TTBM-BRASS-5678"),
                        "mirrors",
                    ),
                    product(
                        "New Zealand Wool Runner",
                        "new-zealand-wool-runner",
                        Some("NZ-WOOL-RUNNER-001"),
                        "rugs",
                    ),
                    product(
                        "Rectangular PET Rug",
                        "rectangular-pet-rug",
                        Some("RPR-PET-2024"),
                        "rugs",
                    ),
                ],
                fail_article_lookups: false,
            }
        }
    }

    #[async_trait]
    impl CatalogApi for StubApi {
        async fn product_by_id(&self, id: &str) -> Result<Option<ProductData>, ClientError> {
            Ok(self.products.iter().find(|p| p.id == id).cloned())
        }

        async fn product_by_slug(&self, slug: &str) -> Result<Option<ProductData>, ClientError> {
            Ok(self
                .products
                .iter()
                .find(|p| p.slug.as_deref() == Some(slug))
                .cloned())
        }

        async fn product_by_article(
            &self,
            article: &str,
        ) -> Result<Option<ProductData>, ClientError> {
            if self.fail_article_lookups {
                return Ok(None);
            }
            Ok(self
                .products
                .iter()
                .find(|p| p.article_number.as_deref() == Some(article))
                .cloned())
        }

        async fn active_products(
            &self,
            category: Option<&str>,
        ) -> Result<Vec<ProductData>, ClientError> {
            Ok(self
                .products
                .iter()
                .filter(|p| category.is_none_or(|c| p.category == c))
                .cloned()
                .collect())
        }

        async fn category_by_slug(
            &self,
            _slug: &str,
        ) -> Result<Option<crate::features::hydrator::models::CategoryData>, ClientError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn test_explicit_id_wins_over_slug() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("whatever.html")
            .with_param("id", "id-rectangular-pet-rug")
            .with_param("slug", "tact-mirror");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "Rectangular PET Rug");
    }

    #[tokio::test]
    async fn test_explicit_slug() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("whatever.html").with_param("slug", "tact-mirror");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "Tact Mirror");
    }

    #[tokio::test]
    async fn test_explicit_article_number() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("whatever.html").with_param("article", "NZ-WOOL-RUNNER-001");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "New Zealand Wool Runner");
    }

    #[tokio::test]
    async fn test_indexed_selector_uses_article_table() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_mirrors.html").with_param("product", "product2");

        // mirrors index 2 pins TTBM-BRASS-5678
        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.article_number.as_deref(), Some("TTBM-BRASS-5678"));
    }

    #[tokio::test]
    async fn test_indexed_selector_falls_back_to_position() {
        let mut api = StubApi::catalog();
        api.fail_article_lookups = true;
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_mirrors.html").with_param("product", "product1");

        // Article lookups unavailable; mirrors list index 1 is the
        // freestanding mirror.
        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "Freestanding Aluminium Mirror");
    }

    #[tokio::test]
    async fn test_indexed_selector_out_of_range_clamps_to_first() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_rugs.html").with_param("product", "product9");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "New Zealand Wool Runner");
    }

    #[tokio::test]
    async fn test_malformed_selector_falls_through_to_page_default() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_tact-mirror.html").with_param("product", "garbage");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "Tact Mirror");
    }

    #[tokio::test]
    async fn test_page_default_slug_entry() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_tact.html");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "Tact Mirror");
    }

    #[tokio::test]
    async fn test_page_default_category_entry_takes_first() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_rugs.html");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "New Zealand Wool Runner");
    }

    #[tokio::test]
    async fn test_unknown_page_takes_first_of_catalog() {
        let api = StubApi::catalog();
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_unknown.html");

        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "Tact Mirror");
    }

    #[tokio::test]
    async fn test_empty_catalog_resolves_nothing() {
        let api = StubApi {
            products: vec![],
            fail_article_lookups: false,
        };
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_unknown.html");

        assert!(resolver.resolve(&ctx).await.is_none());
    }

    #[tokio::test]
    async fn test_mismatched_article_record_falls_back() {
        // The stub answers article lookups with a record for a different
        // article number; the resolver must reject it and use position.
        struct MismatchApi(StubApi);

        #[async_trait]
        impl CatalogApi for MismatchApi {
            async fn product_by_id(&self, id: &str) -> Result<Option<ProductData>, ClientError> {
                self.0.product_by_id(id).await
            }
            async fn product_by_slug(
                &self,
                slug: &str,
            ) -> Result<Option<ProductData>, ClientError> {
                self.0.product_by_slug(slug).await
            }
            async fn product_by_article(
                &self,
                _article: &str,
            ) -> Result<Option<ProductData>, ClientError> {
                self.0.product_by_article("TAC-MIR-001").await
            }
            async fn active_products(
                &self,
                category: Option<&str>,
            ) -> Result<Vec<ProductData>, ClientError> {
                self.0.active_products(category).await
            }
            async fn category_by_slug(
                &self,
                slug: &str,
            ) -> Result<Option<crate::features::hydrator::models::CategoryData>, ClientError>
            {
                self.0.category_by_slug(slug).await
            }
        }

        let api = MismatchApi(StubApi::catalog());
        let resolver = ProductResolver::new(&api);
        let ctx = PageContext::new("index_rugs.html").with_param("product", "product1");

        // rugs index 1 positionally is the Rectangular PET Rug
        let found = resolver.resolve(&ctx).await.unwrap();
        assert_eq!(found.name, "Rectangular PET Rug");
    }
}
