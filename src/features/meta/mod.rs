//! Service metadata endpoints: root endpoint directory, health check and
//! the catch-all 404 envelope.

pub mod dtos;
pub mod handlers;
pub mod routes;

pub use routes::routes;
