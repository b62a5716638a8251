//! Seeds the catalog with the sample furniture data.
//!
//! Idempotent: products are matched by article number, categories by
//! slug. Existing products only get their review list refreshed,
//! existing categories are updated in place.

use chrono::{TimeZone, Utc};
use kalium_catalog::core::config::Config;
use kalium_catalog::core::database;
use kalium_catalog::core::error::AppError;
use kalium_catalog::features::categories::dtos::{CreateCategoryDto, UpdateCategoryDto};
use kalium_catalog::features::categories::CategoryService;
use kalium_catalog::features::products::dtos::{
    CreateProductDto, ReviewInputDto, UpdateProductDto,
};
use kalium_catalog::features::products::models::ProductImage;
use kalium_catalog::features::products::ProductService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const IMAGE_BASE: &str =
    "https://sites.kaliumtheme.com/elementor/furniture/wp-content/uploads/2025/05";

fn image(file: &str, thumb: Option<&str>, alt: &str) -> ProductImage {
    ProductImage {
        src: format!("{}/{}", IMAGE_BASE, file),
        thumb: thumb.map(|t| format!("{}/{}", IMAGE_BASE, t)),
        alt: Some(alt.to_string()),
    }
}

fn review(author: &str, rating: i32, comment: &str, (y, m, d): (i32, u32, u32)) -> ReviewInputDto {
    ReviewInputDto {
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        date: Some(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    price: &str,
    original_price: Option<&str>,
    currency_symbol: &str,
    features: &str,
    description: &str,
    dimensions: &str,
    materials: &str,
    finish: &str,
    designer: &str,
    country_of_origin: &str,
    importer_packer_marketer: &str,
    article_number: &str,
    category: &str,
    images: Vec<ProductImage>,
    reviews: Vec<ReviewInputDto>,
) -> CreateProductDto {
    CreateProductDto {
        name: name.to_string(),
        price: price.to_string(),
        original_price: original_price.map(str::to_string),
        currency_symbol: Some(currency_symbol.to_string()),
        features: features.to_string(),
        description: description.to_string(),
        dimensions: Some(dimensions.to_string()),
        materials: Some(materials.to_string()),
        finish: Some(finish.to_string()),
        designer: Some(designer.to_string()),
        country_of_origin: Some(country_of_origin.to_string()),
        importer_packer_marketer: Some(importer_packer_marketer.to_string()),
        article_number: Some(article_number.to_string()),
        images,
        reviews,
        category: Some(category.to_string()),
        slug: None,
        is_active: Some(true),
    }
}

fn sample_products() -> Vec<CreateProductDto> {
    vec![
        // Mirrors
        product(
            "Tact Mirror",
            "199.00",
            Some("245.00"),
            "$",
            "Resin mirror with prismatic design.",
            "The Tact Mirror by Tacchini features prismatic surfaces that reflect light and \
             emotions with delicate intensity. Made of colored resin, it adds a contemporary \
             touch to any space.",
            "50 × 7 × 70 cm",
            "Colored resin",
            "Prismatic resin finish",
            "Tacchini",
            "Italy",
            "Furnistør Inc.",
            "TAC-MIR-001",
            "mirrors",
            vec![image(
                "tact-mirror-1.jpeg",
                Some("tact-mirror-1-220x220.jpeg"),
                "Tact Mirror",
            )],
            vec![
                review(
                    "Sarah Mitchell",
                    5,
                    "Absolutely stunning mirror! The prismatic design creates such beautiful \
                     light reflections throughout my living room.",
                    (2024, 10, 15),
                ),
                review(
                    "James Chen",
                    4,
                    "Love the modern aesthetic of this mirror. The resin finish is unique and \
                     adds character to my space.",
                    (2024, 11, 2),
                ),
            ],
        ),
        product(
            "Freestanding Aluminium Mirror",
            "349.00",
            Some("425.00"),
            "$",
            "Modern freestanding mirror with sleek aluminium frame. Versatile design that can \
             be placed anywhere in your home for functional elegance.",
            "The Freestanding Aluminium Mirror is a contemporary masterpiece that combines \
             functionality with minimalist design. Crafted from lightweight yet durable \
             aluminium, its freestanding design offers maximum flexibility.",
            "80 × 5 × 100 cm",
            "Aluminium frame with premium glass",
            "Polished aluminium finish",
            "Modern Design Studio",
            "Germany",
            "European Home Collections",
            "FAM-ALU-2024",
            "mirrors",
            vec![
                image(
                    "freestanding-mirror-3.jpeg",
                    Some("freestanding-mirror-3-220x220.jpeg"),
                    "Freestanding Aluminium Mirror",
                ),
                image(
                    "freestanding-aluminium-mirror-2.jpeg",
                    Some("freestanding-aluminium-mirror-2-220x220.jpeg"),
                    "Freestanding Aluminium Mirror Detail",
                ),
            ],
            vec![
                review(
                    "Emma Thompson",
                    5,
                    "Perfect mirror for my bedroom! The freestanding design is so convenient \
                     and the reflection is crystal clear.",
                    (2024, 9, 20),
                ),
                review(
                    "Michael Rodriguez",
                    4,
                    "Great quality mirror with a sleek modern look. Only wish it was slightly \
                     taller, but overall very satisfied.",
                    (2024, 10, 8),
                ),
            ],
        ),
        product(
            "Tilting Table-Top Brass Mirror",
            "279.00",
            None,
            "$",
            "Elegant table-top mirror with tilting mechanism and handcrafted brass frame. \
             Perfect for vanities, desks, or bedside tables.",
            "The Tilting Table-Top Brass Mirror combines classic elegance with practical \
             functionality. The handcrafted brass frame features a smooth tilting mechanism \
             that allows you to adjust the angle for optimal viewing.",
            "45 × 8 × 60 cm",
            "Brass frame with premium glass",
            "Polished brass finish",
            "Heritage Design Studio",
            "Italy",
            "Mediterranean Home Furnishings",
            "TTBM-BRASS-5678",
            "mirrors",
            vec![image(
                "tilting-mirror-1.jpeg",
                Some("tilting-mirror-1.jpeg"),
                "Tilting Table-Top Brass Mirror",
            )],
            vec![
                review(
                    "Olivia Williams",
                    5,
                    "This mirror is absolutely perfect for my vanity! The tilting mechanism \
                     works smoothly and the brass finish is gorgeous.",
                    (2024, 10, 25),
                ),
                review(
                    "David Park",
                    4,
                    "Beautiful craftsmanship and the brass has a lovely warm tone. A bit \
                     heavy, but that makes it feel more premium.",
                    (2024, 11, 10),
                ),
            ],
        ),
        product(
            "Ultrafragola Mirror",
            "1,299.00",
            Some("1,599.00"),
            "$",
            "Iconic wavy mirror design by Ettore Sottsass. A legendary piece that combines \
             art and functionality in a stunning statement mirror.",
            "The Ultrafragola Mirror is an iconic design masterpiece by Ettore Sottsass. The \
             undulating curves create a soft silhouette that transforms any space into a work \
             of art, making it a true collector's item.",
            "100 × 10 × 140 cm",
            "Resin frame with premium glass",
            "White resin with glossy finish",
            "Ettore Sottsass",
            "Italy",
            "Italian Design Imports Ltd.",
            "UFM-SOTTSASS-9012",
            "mirrors",
            vec![image(
                "ultrafragola-13.jpeg",
                Some("ultrafragola-mirror-1-220x220.jpeg"),
                "Ultrafragola Mirror",
            )],
            vec![
                review(
                    "Sophie Anderson",
                    5,
                    "An absolute masterpiece! This is more than a mirror, it becomes the focal \
                     point of any room.",
                    (2024, 8, 15),
                ),
                review(
                    "Robert Kim",
                    5,
                    "Incredible design piece that exceeded all expectations. The resin finish \
                     is flawless.",
                    (2024, 9, 30),
                ),
            ],
        ),
        // Rugs
        product(
            "New Zealand Wool Runner",
            "1,299.00",
            None,
            "$",
            "A handwoven runner crafted from 100% New Zealand wool, featuring subtle \
             monochrome contrasts and a broken twill pattern.",
            "The New Zealand Wool Runner by Bomat is part of the Clayscape Collection, \
             inspired by the rich diversity found in nature. The broken twill pattern refers \
             to traditional weaving techniques, adding a touch of heritage to its design.",
            "300 × 80 × 0.8 cm",
            "100% New Zealand wool",
            "Natural wool finish with protective treatment",
            "Bomat",
            "New Zealand",
            "Furnistør Inc.",
            "NZ-WOOL-RUNNER-001",
            "rugs",
            vec![
                image(
                    "nz-rug-1.jpeg",
                    Some("nz-rug-1-220x220.jpeg"),
                    "New Zealand Wool Runner",
                ),
                image(
                    "nz-rug-2.jpeg",
                    Some("nz-rug-2-220x220.jpeg"),
                    "New Zealand Wool Runner Detail",
                ),
            ],
            vec![
                review(
                    "Charlotte Brown",
                    5,
                    "Beautiful handwoven runner that adds warmth and texture to my hallway. \
                     The quality of the New Zealand wool is exceptional.",
                    (2024, 10, 12),
                ),
                review(
                    "Thomas Wilson",
                    4,
                    "Great quality rug with a classic design. The wool has held up well in a \
                     high-traffic area.",
                    (2024, 11, 5),
                ),
            ],
        ),
        product(
            "Handcrafted Jute Accent Rug",
            "1,299.00",
            None,
            "₹",
            "Eco-friendly hand-braided jute rug with a natural texture and durable build. \
             Ideal for living rooms, hallways, and minimalistic home décor settings.",
            "This handcrafted jute accent rug is part of our Sustainable Living Collection. \
             Each rug is handwoven by skilled artisans using traditional techniques passed \
             down through generations.",
            "200 × 150 × 0.8 cm",
            "100% Natural Jute",
            "Natural jute finish with protective coating",
            "Urban Artisan Studio",
            "India",
            "EarthWeave Home Furnishings Pvt. Ltd.",
            "JW-ACCENT-5721",
            "rugs",
            vec![],
            vec![
                review(
                    "Lisa Martinez",
                    4,
                    "Love the natural jute texture! The neutral color works perfectly with my \
                     minimalist decor. Great value for money.",
                    (2024, 9, 18),
                ),
                review(
                    "Kevin Johnson",
                    5,
                    "Perfect eco-friendly addition to my home. The hand-braided construction \
                     is evident in the quality.",
                    (2024, 10, 22),
                ),
            ],
        ),
        product(
            "Rectangular PET Rug",
            "1,850.00",
            None,
            "$",
            "Eco-friendly rectangular rug made from recycled PET fibers. Durable, \
             stain-resistant, and perfect for high-traffic areas.",
            "The Rectangular PET Rug is crafted entirely from recycled PET fibers, \
             transforming plastic bottles into a beautiful, durable floor covering that's \
             both stylish and environmentally responsible.",
            "300 × 100 × 1.2 cm",
            "100% Recycled PET Fibers",
            "PET fiber finish with stain-resistant treatment",
            "Eco Design Studio",
            "United States",
            "Sustainable Home Solutions Inc.",
            "RPR-PET-2024",
            "rugs",
            vec![image("pet-rug-5.jpeg", None, "Rectangular PET Rug")],
            vec![
                review(
                    "Amanda Foster",
                    5,
                    "Amazing eco-friendly rug! My kids and pets have been playing on it for \
                     months and it still looks brand new.",
                    (2024, 9, 5),
                ),
                review(
                    "Daniel Lee",
                    4,
                    "Great sustainable choice for our home. It's easy to clean and maintains \
                     its color well.",
                    (2024, 10, 18),
                ),
            ],
        ),
        product(
            "Sticky Tape Rug",
            "3,500.00",
            None,
            "$",
            "Innovative rug design featuring adhesive tape construction. Unique modular \
             approach that allows for easy installation and creative customization.",
            "The Sticky Tape Rug utilizes a unique adhesive tape construction method that \
             creates a distinctive texture and visual appeal. The modular design allows for \
             creative installation patterns, making each installation a unique work of art.",
            "400 × 300 × 1.5 cm",
            "Adhesive Tape with Synthetic Backing",
            "Tape construction with protective coating",
            "Innovative Design Collective",
            "Japan",
            "Modern Floor Solutions Ltd.",
            "STR-TAPE-7890",
            "rugs",
            vec![image(
                "sticky-tape-rug-4.jpeg",
                Some("sticky-tape-rug-1-220x220.jpeg"),
                "Sticky Tape Rug",
            )],
            vec![
                review(
                    "Rachel Green",
                    5,
                    "This is the most unique and conversation-starting rug I've ever owned! A \
                     true statement piece!",
                    (2024, 8, 22),
                ),
                review(
                    "Mark Stevens",
                    4,
                    "Fascinating design that really stands out. It took a bit to get used to \
                     the look, but now I love how unique it is.",
                    (2024, 9, 28),
                ),
            ],
        ),
        product(
            "Bamboo Silk and Wool Rug",
            "899.00",
            None,
            "€",
            "Luxurious blend of bamboo silk and premium wool. Combines the softness of silk \
             with the durability of wool.",
            "The Bamboo Silk and Wool Rug is a harmonious blend of two exceptional natural \
             fibers. Bamboo silk provides an incredibly soft texture and natural sheen, \
             while premium wool adds durability, warmth, and natural stain resistance.",
            "250 × 180 × 1.0 cm",
            "60% Bamboo Silk, 40% Premium Wool",
            "Natural fiber finish with protective treatment",
            "Natural Living Design",
            "China",
            "Asian Home Textiles Ltd.",
            "BSW-NAT-4567",
            "rugs",
            vec![image(
                "bam-boo-rug-3.jpeg",
                Some("bamboo-silk-wool-rug-1-220x220.jpeg"),
                "Bamboo Silk and Wool Rug",
            )],
            vec![
                review(
                    "Jennifer Taylor",
                    5,
                    "Absolutely luxurious! The natural sheen from the bamboo silk is \
                     beautiful. This rug elevates my entire bedroom!",
                    (2024, 10, 30),
                ),
                review(
                    "Christopher Moore",
                    5,
                    "Exceptional quality and comfort. The natural fibers are hypoallergenic \
                     which is perfect for my family.",
                    (2024, 11, 12),
                ),
            ],
        ),
    ]
}

fn sample_categories() -> Vec<CreateCategoryDto> {
    vec![
        CreateCategoryDto {
            name: "Home Decor".to_string(),
            slug: Some("decor".to_string()),
            description: Some(
                "Transform your living space with our curated collection of home decor. From \
                 elegant mirrors that reflect your style to handwoven rugs that add warmth, \
                 discover pieces that make your house a home."
                    .to_string(),
            ),
            is_active: Some(true),
        },
        CreateCategoryDto {
            name: "Mirrors".to_string(),
            slug: Some("mirrors".to_string()),
            description: Some(
                "Discover our collection of elegant mirrors designed to enhance any room. \
                 From modern prismatic designs to classic decorative pieces, our mirrors \
                 combine functionality with artistic beauty."
                    .to_string(),
            ),
            is_active: Some(true),
        },
        CreateCategoryDto {
            name: "Rugs".to_string(),
            slug: Some("rugs".to_string()),
            description: Some(
                "Explore our premium collection of handwoven rugs and runners crafted from \
                 the finest materials. Each piece combines traditional weaving techniques \
                 with contemporary design."
                    .to_string(),
            ),
            is_active: Some(true),
        },
    ]
}

async fn seed_products(service: &ProductService) -> anyhow::Result<()> {
    for dto in sample_products() {
        let article = dto
            .article_number
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Seed product without article number"))?;

        match service.get_by_article_number(&article).await {
            Ok(existing) => {
                if dto.reviews.is_empty() {
                    tracing::info!("Product already exists: {}", dto.name);
                } else {
                    let update = UpdateProductDto {
                        reviews: Some(dto.reviews.clone()),
                        ..Default::default()
                    };
                    service.update(existing.id, update).await?;
                    tracing::info!("Updated product with reviews: {}", dto.name);
                }
            }
            Err(AppError::NotFound(_)) => {
                let name = dto.name.clone();
                service.create(dto).await?;
                tracing::info!("Created product: {}", name);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

async fn seed_categories(service: &CategoryService) -> anyhow::Result<()> {
    for dto in sample_categories() {
        let slug = dto
            .slug
            .clone()
            .ok_or_else(|| anyhow::anyhow!("Seed category without slug"))?;

        match service.get_by_slug(&slug).await {
            Ok(existing) => {
                let update = UpdateCategoryDto {
                    name: Some(dto.name.clone()),
                    description: dto.description.clone(),
                    is_active: dto.is_active,
                    ..Default::default()
                };
                service.update(existing.id, update).await?;
                tracing::info!("Updated category: {}", dto.name);
            }
            Err(AppError::NotFound(_)) => {
                let name = dto.name.clone();
                service.create(dto).await?;
                tracing::info!("Created category: {}", name);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let pool = database::create_pool(&config.database).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    let product_service = ProductService::new(pool.clone());
    let category_service = CategoryService::new(pool.clone());

    seed_products(&product_service).await?;
    seed_categories(&category_service).await?;

    tracing::info!("Database seeding completed");
    Ok(())
}
