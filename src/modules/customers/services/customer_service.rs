use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::customers::models::{Customer, CustomerUpdate, NewCustomer};
use crate::modules::customers::repositories::CustomerRepository;

use super::password::hash_password;

/// Customer registration and lookup
pub struct CustomerService {
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }

    /// Register a new customer, storing only a hash of the password
    pub async fn save(&self, customer: NewCustomer) -> Result<Customer> {
        let password_hash = hash_password(&customer.password)?;
        let created = self.customer_repo.create(&customer, &password_hash).await?;

        tracing::info!(customer_id = created.id, "Customer registered");

        Ok(created)
    }

    /// Resolve a customer id, failing with `CustomerNotFound` when it does not exist
    pub async fn find_by_id(&self, id: i64) -> Result<Customer> {
        self.customer_repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::CustomerNotFound(id))
    }

    /// Replace the profile fields of an existing customer
    pub async fn update(&self, id: i64, update: CustomerUpdate) -> Result<Customer> {
        let mut customer = self.find_by_id(id).await?;
        customer.apply(update);

        let updated = self.customer_repo.update(&customer).await?;
        tracing::info!(customer_id = id, "Customer updated");

        Ok(updated)
    }

    /// Delete a customer along with its credits
    pub async fn delete(&self, id: i64) -> Result<()> {
        let customer = self.find_by_id(id).await?;
        self.customer_repo.delete(customer.id).await?;

        tracing::info!(customer_id = id, "Customer deleted");

        Ok(())
    }
}
