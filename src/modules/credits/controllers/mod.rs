pub mod credit_controller;

pub use credit_controller::{configure, find_all_by_customer_id, find_by_credit_code, save_credit};
