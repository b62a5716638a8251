//! Page hydrator.
//!
//! The browser-side half of the catalog: resolves which product or
//! category a page represents (query parameters first, then static page
//! tables, then positional fallbacks), fetches it over the HTTP JSON
//! contract, and writes the fetched data into the page's named anchor
//! slots. All markup fragments are rendered through minijinja templates
//! with explicit data bindings; fetch failures degrade silently, leaving
//! the template defaults in place.

pub mod clients;
pub mod models;
pub mod services;
pub mod tables;

pub use clients::{CatalogApi, CatalogClient};
pub use services::{HydrationEngine, PageHydrator, ProductResolver};
