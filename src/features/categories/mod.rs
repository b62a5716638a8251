//! Category feature.
//!
//! Categories are looked up by slug; products reference them by value
//! through their `category` tag, without a foreign key.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List active categories |
//! | GET | `/api/categories/{slug}` | Get category by slug |
//! | POST | `/api/categories` | Create category |
//! | PUT | `/api/categories/{id}` | Update category |
//! | DELETE | `/api/categories/{id}` | Delete category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::CategoryService;
