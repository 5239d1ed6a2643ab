//! Axum route handlers.

pub mod health;
pub mod index;

pub use health::health;
pub use index::index;
