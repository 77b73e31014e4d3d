//! Credit management backend
//!
//! Customers apply for credits; the credit service enforces the creation rules and
//! owner-scoped lookups, and the actix-web controllers expose them under `/api`.

pub mod app;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use app::AppServices;
pub use modules::credits;
pub use modules::customers;
