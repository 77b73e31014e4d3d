// CustomerRepository
// MySQL persistence for customers.
//
// Expected table:
//   customers (
//     id BIGINT AUTO_INCREMENT PRIMARY KEY,
//     first_name VARCHAR(100) NOT NULL, last_name VARCHAR(100) NOT NULL,
//     cpf CHAR(11) NOT NULL UNIQUE, email VARCHAR(255) NOT NULL UNIQUE,
//     password_hash VARCHAR(255) NOT NULL,
//     zip_code VARCHAR(20) NOT NULL, street VARCHAR(255) NOT NULL,
//     income DECIMAL(19, 2) NOT NULL DEFAULT 0
//   )

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::customers::models::{Customer, NewCustomer};

/// Customer store
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find customer by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    /// Insert a customer and return it with its assigned id
    async fn create(&self, customer: &NewCustomer, password_hash: &str) -> Result<Customer>;

    /// Overwrite the stored profile of an existing customer
    async fn update(&self, customer: &Customer) -> Result<Customer>;

    /// Delete a customer and every credit that references it
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Repository for customer database operations
#[derive(Clone)]
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, cpf, email, password_hash,
                   zip_code, street, income
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn create(&self, customer: &NewCustomer, password_hash: &str) -> Result<Customer> {
        let result = sqlx::query(
            r#"
            INSERT INTO customers (
                first_name, last_name, cpf, email, password_hash, zip_code, street, income
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.cpf)
        .bind(&customer.email)
        .bind(password_hash)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .bind(customer.income)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_write(e, || {
                "Customer with this CPF or email already exists".to_string()
            })
        })?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Customer id out of range"))?;

        Ok(Customer {
            id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            cpf: customer.cpf.clone(),
            email: customer.email.clone(),
            password_hash: password_hash.to_string(),
            address: customer.address.clone(),
            income: customer.income,
        })
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        sqlx::query(
            r#"
            UPDATE customers
            SET first_name = ?, last_name = ?, zip_code = ?, street = ?, income = ?
            WHERE id = ?
            "#,
        )
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.address.zip_code)
        .bind(&customer.address.street)
        .bind(customer.income)
        .bind(customer.id)
        .execute(&self.pool)
        .await?;

        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM credits WHERE customer_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
