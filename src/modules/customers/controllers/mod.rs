pub mod customer_controller;

pub use customer_controller::{
    configure, delete_customer, find_customer, save_customer, update_customer, CustomerIdQuery,
};
