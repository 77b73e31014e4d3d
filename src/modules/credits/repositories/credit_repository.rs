// CreditRepository
// MySQL persistence for credits.
//
// Expected table:
//   credits (
//     id BIGINT AUTO_INCREMENT PRIMARY KEY,
//     credit_code CHAR(36) NOT NULL UNIQUE,
//     credit_value DECIMAL(19, 2) NOT NULL DEFAULT 0,
//     day_first_installment DATE NOT NULL,
//     number_of_installments INT NOT NULL,
//     status VARCHAR(20) NOT NULL,
//     customer_id BIGINT NOT NULL REFERENCES customers (id),
//     INDEX idx_credits_customer_id (customer_id)
//   )

use async_trait::async_trait;
use sqlx::MySqlPool;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{Credit, CreditRow};

/// Credit store
#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Persist a new credit and return it with its storage id
    async fn save(&self, credit: &Credit) -> Result<Credit>;

    /// Find credit by its unique code
    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>>;

    /// All credits owned by a customer, in storage order
    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>>;
}

/// Repository for credit database operations
#[derive(Clone)]
pub struct MySqlCreditRepository {
    pool: MySqlPool,
}

impl MySqlCreditRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditRepository for MySqlCreditRepository {
    async fn save(&self, credit: &Credit) -> Result<Credit> {
        let result = sqlx::query(
            r#"
            INSERT INTO credits (
                credit_code, credit_value, day_first_installment,
                number_of_installments, status, customer_id
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credit.credit_code.to_string())
        .bind(credit.credit_value)
        .bind(credit.day_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.status.as_str())
        .bind(credit.customer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::from_write(e, || {
                format!("Credit with code '{}' already exists", credit.credit_code)
            })
        })?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| AppError::internal("Credit id out of range"))?;

        let mut saved = credit.clone();
        saved.id = Some(id);

        Ok(saved)
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id
            FROM credits
            WHERE credit_code = ?
            "#,
        )
        .bind(credit_code.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Credit::try_from).transpose()
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let rows = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, status, customer_id
            FROM credits
            WHERE customer_id = ?
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Credit::try_from).collect()
    }
}
