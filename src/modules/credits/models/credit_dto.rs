use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::credit::{Credit, CreditStatus, NewCredit};
use crate::core::{check_money, AppError, Result};
use crate::modules::customers::models::Customer;

/// Upper bound on installments accepted from clients
pub const MAX_INSTALLMENTS: i32 = 48;

/// Body of POST /api/credits
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditRequest {
    pub credit_value: Decimal,
    pub day_first_of_installment: NaiveDate,
    pub number_of_installments: i32,
    pub customer_id: i64,
}

impl CreditRequest {
    /// Field checks made before the request reaches the credit service
    pub fn validate(&self, today: NaiveDate) -> Result<()> {
        let mut errors = BTreeMap::new();

        if self.credit_value < Decimal::ZERO {
            errors.insert("creditValue".to_string(), "must not be negative".to_string());
        } else if let Err(reason) = check_money(self.credit_value) {
            errors.insert("creditValue".to_string(), reason);
        }
        if !(1..=MAX_INSTALLMENTS).contains(&self.number_of_installments) {
            errors.insert(
                "numberOfInstallments".to_string(),
                format!("must be between 1 and {}", MAX_INSTALLMENTS),
            );
        }
        if self.day_first_of_installment <= today {
            errors.insert(
                "dayFirstOfInstallment".to_string(),
                "must be a future date".to_string(),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }

    pub fn into_new_credit(self) -> NewCredit {
        NewCredit {
            customer_id: self.customer_id,
            credit_value: self.credit_value,
            day_first_installment: self.day_first_of_installment,
            number_of_installments: self.number_of_installments,
            credit_code: None,
        }
    }
}

/// Full credit detail, including contact data of the owning customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub credit_value: Decimal,
    pub number_of_installment: i32,
    pub status: CreditStatus,
    pub email_customer: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub income_customer: Decimal,
    pub customer_id: i64,
}

impl CreditView {
    pub fn new(credit: &Credit, customer: &Customer) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installment: credit.number_of_installments,
            status: credit.status,
            email_customer: customer.email.clone(),
            income_customer: customer.income,
            customer_id: credit.customer_id,
        }
    }
}

/// Credit summary used in listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditViewList {
    pub credit_code: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub credit_value: Decimal,
    pub number_of_installments: i32,
}

impl From<Credit> for CreditViewList {
    fn from(credit: Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            number_of_installments: credit.number_of_installments,
        }
    }
}
