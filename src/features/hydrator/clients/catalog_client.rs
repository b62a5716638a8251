use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::features::hydrator::models::{CategoryData, ProductData};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// The HTTP JSON contract the hydrator consumes.
///
/// Single-entity lookups return `Ok(None)` for "not found" and for
/// non-success statuses; only transport and decode failures error.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn product_by_id(&self, id: &str) -> Result<Option<ProductData>, ClientError>;
    async fn product_by_slug(&self, slug: &str) -> Result<Option<ProductData>, ClientError>;
    async fn product_by_article(&self, article: &str) -> Result<Option<ProductData>, ClientError>;
    /// Active products, optionally restricted to one category
    async fn active_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ProductData>, ClientError>;
    async fn category_by_slug(&self, slug: &str) -> Result<Option<CategoryData>, ClientError>;
}

/// reqwest-backed catalog API client
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("KaliumHydrator/1.0")
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Option<T>, ClientError> {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            if status != reqwest::StatusCode::NOT_FOUND {
                tracing::warn!("Catalog returned status {} for {}", status, url);
            }
            return Ok(None);
        }

        Ok(Some(response.json::<T>().await?))
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn product_by_id(&self, id: &str) -> Result<Option<ProductData>, ClientError> {
        let url = format!("{}/products/{}", self.base_url, urlencoding::encode(id));
        self.get_json(&url).await
    }

    async fn product_by_slug(&self, slug: &str) -> Result<Option<ProductData>, ClientError> {
        let url = format!("{}/products/slug/{}", self.base_url, urlencoding::encode(slug));
        self.get_json(&url).await
    }

    async fn product_by_article(&self, article: &str) -> Result<Option<ProductData>, ClientError> {
        let url = format!(
            "{}/products/article/{}",
            self.base_url,
            urlencoding::encode(article)
        );
        self.get_json(&url).await
    }

    async fn active_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ProductData>, ClientError> {
        let mut url = format!("{}/products?isActive=true", self.base_url);
        if let Some(category) = category {
            url.push_str("&category=");
            url.push_str(&urlencoding::encode(category));
        }
        Ok(self.get_json(&url).await?.unwrap_or_default())
    }

    async fn category_by_slug(&self, slug: &str) -> Result<Option<CategoryData>, ClientError> {
        let url = format!("{}/categories/{}", self.base_url, urlencoding::encode(slug));
        self.get_json(&url).await
    }
}
