//! Hydrates one catalog page against a running API.
//!
//! Takes the page location (URL, path, or bare filename) as the single
//! argument, resolves the product or category it represents, and prints
//! the patched content. A second pass runs after a short delay to pick
//! up data that was still loading on the first one.
//!
//! ```text
//! hydrate "index_mirrors.html?product=product2"
//! ```

use kalium_catalog::core::config::Config;
use kalium_catalog::features::hydrator::models::{PageContext, PageDocument};
use kalium_catalog::features::hydrator::tables;
use kalium_catalog::features::hydrator::{CatalogClient, PageHydrator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const GALLERY_SLOTS: usize = 4;

fn print_document(doc: &PageDocument) {
    for (anchor, value) in doc.hydrated() {
        println!("[{:?}]", anchor);
        println!("{}", value);
        println!();
    }
    for (index, slot) in doc.gallery().iter().enumerate() {
        if let Some(src) = &slot.src {
            println!(
                "[Gallery {}] src={} srcset={}",
                index,
                src,
                slot.srcset.as_deref().unwrap_or("")
            );
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let location = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("Usage: hydrate <page location>"))?;

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let client = CatalogClient::new(&config.hydrator.api_base_url);
    let hydrator = PageHydrator::new(&client);

    let ctx = PageContext::from_location(&location);

    // Category landing pages carry category anchors on top of the
    // product ones.
    let mut doc = if tables::category_page_slug(ctx.filename()).is_some() {
        let mut anchors: Vec<_> = kalium_catalog::features::hydrator::models::Anchor::PRODUCT_PAGE
            .to_vec();
        anchors.extend_from_slice(kalium_catalog::features::hydrator::models::Anchor::CATEGORY_PAGE);
        PageDocument::with_anchors(anchors, GALLERY_SLOTS)
    } else {
        PageDocument::product_page(GALLERY_SLOTS)
    };

    hydrator.run(&ctx, &mut doc).await;

    // Second pass mirrors the double-patch the storefront pages do for
    // late-loading content.
    tokio::time::sleep(std::time::Duration::from_millis(
        config.hydrator.repass_delay_ms,
    ))
    .await;
    hydrator.run(&ctx, &mut doc).await;

    print_document(&doc);
    Ok(())
}
