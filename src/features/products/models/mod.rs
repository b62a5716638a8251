mod product;

pub use product::{Product, ProductImage, ProductReview};
