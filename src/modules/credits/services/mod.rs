pub mod credit_code;
pub mod credit_service;

pub use credit_code::{CreditCodeGenerator, RandomCreditCode};
pub use credit_service::CreditService;
