pub mod categories;
pub mod hydrator;
pub mod meta;
pub mod products;
