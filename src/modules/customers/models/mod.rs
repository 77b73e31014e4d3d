pub mod customer;
pub mod customer_dto;

pub use customer::{is_valid_cpf, Address, Customer, CustomerUpdate, NewCustomer};
pub use customer_dto::{CustomerRequest, CustomerUpdateRequest, CustomerView};
