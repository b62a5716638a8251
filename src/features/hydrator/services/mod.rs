mod hydration;
mod page_hydrator;
mod resolver;

pub use hydration::{average_rating, review_count_line, HydrationEngine};
pub use page_hydrator::PageHydrator;
pub use resolver::{ProductResolver, Strategy};
