use std::collections::BTreeMap;

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use chrono::NaiveDate;
use uuid::Uuid;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The first four variants are the credit domain errors. They are raised where the
/// rule is violated and reach the HTTP boundary unchanged.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Customer id does not resolve to a stored customer
    #[error("Id {0} not found")]
    CustomerNotFound(i64),

    /// No credit carries the requested credit code
    #[error("Creditcode {0} not found")]
    CreditNotFound(Uuid),

    /// Credit code exists but belongs to another customer
    #[error("Illegal access: credit {credit_code} does not belong to customer {customer_id}, contact admin")]
    IllegalAccess { credit_code: Uuid, customer_id: i64 },

    /// First installment scheduled too far after the credit creation date
    #[error("Invalid date: first installment {0} must be at most 3 months from today")]
    InvalidInstallmentDate(NaiveDate),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request fields that failed validation, keyed by field name
    #[error("Invalid request fields: {}", format_fields(.0))]
    InvalidFields(BTreeMap<String, String>),

    /// Unique constraint violations (duplicate CPF, email or credit code)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl AppError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::CustomerNotFound(_) => "customer_not_found",
            AppError::CreditNotFound(_) => "credit_not_found",
            AppError::IllegalAccess { .. } => "illegal_access",
            AppError::InvalidInstallmentDate(_) => "invalid_installment_date",
            AppError::Validation(_) => "validation",
            AppError::InvalidFields(_) => "invalid_fields",
            AppError::Conflict(_) => "conflict",
            AppError::Database(_) => "database",
            AppError::Configuration(_) => "configuration",
            AppError::Internal(_) => "internal",
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::InvalidInstallmentDate(date) => Some(serde_json::json!({
                "dayFirstInstallment": date,
            })),
            AppError::InvalidFields(fields) => Some(serde_json::json!(fields)),
            AppError::CreditNotFound(code) => Some(serde_json::json!({ "creditCode": code })),
            AppError::CustomerNotFound(id) => Some(serde_json::json!({ "customerId": id })),
            _ => None,
        }
    }

    // Infrastructure details stay in the logs, not in client responses
    fn client_message(&self) -> String {
        match self {
            AppError::Database(_) => "Database error".to_string(),
            AppError::Configuration(_) | AppError::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let mut body = serde_json::json!({
            "code": status_code.as_u16(),
            "kind": self.kind(),
            "message": self.client_message(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });
        if let Some(details) = self.details() {
            body["details"] = details;
        }

        HttpResponse::build(status_code).json(serde_json::json!({ "error": body }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
            AppError::CreditNotFound(_) => StatusCode::NOT_FOUND,
            AppError::IllegalAccess { .. } => StatusCode::FORBIDDEN,
            AppError::InvalidInstallmentDate(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Map a sqlx error, turning unique-key violations into `Conflict`
    pub fn from_write(err: sqlx::Error, what: impl FnOnce() -> String) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return AppError::Conflict(what());
            }
        }
        AppError::Database(err)
    }
}
