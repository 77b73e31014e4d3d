// Credit model
//
// A credit belongs to exactly one customer and is addressed externally by its
// credit code. Code and customer never change once the credit is stored.

use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::{check_money, AppError, Result};

/// Furthest the first installment may be scheduled after the creation date
pub const MAX_FIRST_INSTALLMENT_MONTHS: u32 = 3;

/// Credit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// Under analysis, the status of every new credit
    #[default]
    InProgress,
    Approved,
    Reject,
}

impl CreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Approved => "APPROVED",
            Self::Reject => "REJECT",
        }
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for CreditStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "IN_PROGRESS" => Ok(Self::InProgress),
            "APPROVED" => Ok(Self::Approved),
            "REJECT" => Ok(Self::Reject),
            _ => Err(format!("Invalid credit status: {}", value)),
        }
    }
}

/// Persisted credit
#[derive(Debug, Clone, PartialEq)]
pub struct Credit {
    /// Store-assigned identity, `None` until saved
    pub id: Option<i64>,
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub status: CreditStatus,
    pub customer_id: i64,
}

impl Credit {
    /// Build an unsaved credit, checking value and installment count
    pub fn new(
        credit_code: Uuid,
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installments: i32,
        customer_id: i64,
    ) -> Result<Self> {
        if credit_value < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Credit value must not be negative, got {}",
                credit_value
            )));
        }

        check_money(credit_value)
            .map_err(|reason| AppError::validation(format!("Credit value {}", reason)))?;

        if number_of_installments < 1 {
            return Err(AppError::validation(format!(
                "Number of installments must be positive, got {}",
                number_of_installments
            )));
        }

        Ok(Self {
            id: None,
            credit_code,
            credit_value,
            day_first_installment,
            number_of_installments,
            status: CreditStatus::InProgress,
            customer_id,
        })
    }

    pub fn belongs_to(&self, customer_id: i64) -> bool {
        self.customer_id == customer_id
    }
}

/// Latest allowed first-installment date for a credit created on `today`.
///
/// Month arithmetic clamps to the last day of the month (Nov 30 + 3 months = Feb 28/29).
pub fn latest_first_installment(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(MAX_FIRST_INSTALLMENT_MONTHS))
        .unwrap_or(NaiveDate::MAX)
}

/// Check the first-installment date against the creation date
pub fn validate_first_installment(day_first_installment: NaiveDate, today: NaiveDate) -> Result<()> {
    if day_first_installment > latest_first_installment(today) {
        return Err(AppError::InvalidInstallmentDate(day_first_installment));
    }
    Ok(())
}

/// Input of a credit application
#[derive(Debug, Clone)]
pub struct NewCredit {
    pub customer_id: i64,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    /// Generated when absent
    pub credit_code: Option<Uuid>,
}

/// Row shape of the `credits` table
#[derive(Debug, Clone, FromRow)]
pub struct CreditRow {
    pub id: i64,
    pub credit_code: String,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    #[sqlx(try_from = "String")]
    pub status: CreditStatus,
    pub customer_id: i64,
}

impl TryFrom<CreditRow> for Credit {
    type Error = AppError;

    fn try_from(row: CreditRow) -> Result<Self> {
        let credit_code = Uuid::parse_str(&row.credit_code).map_err(|e| {
            AppError::internal(format!("Stored credit code '{}' is invalid: {}", row.credit_code, e))
        })?;

        Ok(Self {
            id: Some(row.id),
            credit_code,
            credit_value: row.credit_value,
            day_first_installment: row.day_first_installment,
            number_of_installments: row.number_of_installments,
            status: row.status,
            customer_id: row.customer_id,
        })
    }
}
