mod page;
mod wire;

pub use page::{Anchor, GallerySlot, PageContext, PageDocument};
pub use wire::{CategoryData, ImageData, ProductData, ReviewData};
