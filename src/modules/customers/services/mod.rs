pub mod customer_service;
pub mod password;

pub use customer_service::CustomerService;
pub use password::{hash_password, verify_password};
