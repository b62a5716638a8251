//! Product catalog feature.
//!
//! CRUD over product documents with three distinct lookup keys (id, slug,
//! article number) and an active/category listing filter.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/products` | List products (filter by `isActive`, `category`) |
//! | GET | `/api/products/{id}` | Get product by id |
//! | GET | `/api/products/slug/{slug}` | Get product by slug |
//! | GET | `/api/products/article/{articleNumber}` | Get product by article number |
//! | POST | `/api/products` | Create product |
//! | PUT | `/api/products/{id}` | Update product |
//! | DELETE | `/api/products/{id}` | Delete product |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::ProductService;
