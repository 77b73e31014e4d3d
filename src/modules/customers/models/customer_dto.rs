use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::customer::{is_valid_cpf, normalize_cpf, Address, Customer, CustomerUpdate, NewCustomer};
use crate::core::{check_money, AppError, Result};

/// Body of POST /api/customers
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub income: Decimal,
    pub email: String,
    pub password: String,
    pub zip_code: String,
    pub street: String,
}

impl CustomerRequest {
    /// Validate every field and collect all failures at once
    pub fn validate(&self) -> Result<()> {
        let mut errors = BTreeMap::new();

        require_text(&mut errors, "firstName", &self.first_name);
        require_text(&mut errors, "lastName", &self.last_name);
        require_text(&mut errors, "password", &self.password);
        require_text(&mut errors, "zipCode", &self.zip_code);
        require_text(&mut errors, "street", &self.street);

        if !is_valid_cpf(&self.cpf) {
            errors.insert("cpf".to_string(), "invalid CPF".to_string());
        }
        if !looks_like_email(&self.email) {
            errors.insert("email".to_string(), "invalid email".to_string());
        }
        check_income(&mut errors, self.income);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }

    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            cpf: normalize_cpf(&self.cpf),
            email: self.email.trim().to_lowercase(),
            password: self.password,
            address: Address {
                zip_code: self.zip_code.trim().to_string(),
                street: self.street.trim().to_string(),
            },
            income: self.income,
        }
    }
}

/// Body of PATCH /api/customers?customerId=ID
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdateRequest {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub zip_code: String,
    pub street: String,
}

impl CustomerUpdateRequest {
    pub fn validate(&self) -> Result<()> {
        let mut errors = BTreeMap::new();

        require_text(&mut errors, "firstName", &self.first_name);
        require_text(&mut errors, "lastName", &self.last_name);
        require_text(&mut errors, "zipCode", &self.zip_code);
        require_text(&mut errors, "street", &self.street);

        check_income(&mut errors, self.income);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }

    pub fn into_update(self) -> CustomerUpdate {
        CustomerUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            income: self.income,
            address: Address {
                zip_code: self.zip_code.trim().to_string(),
                street: self.street.trim().to_string(),
            },
        }
    }
}

/// Customer as returned to clients; the password hash is never exposed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    pub email: String,
    pub zip_code: String,
    pub street: String,
}

impl From<Customer> for CustomerView {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            cpf: customer.cpf,
            income: customer.income,
            email: customer.email,
            zip_code: customer.address.zip_code,
            street: customer.address.street,
        }
    }
}

fn check_income(errors: &mut BTreeMap<String, String>, income: Decimal) {
    if income < Decimal::ZERO {
        errors.insert("income".to_string(), "must not be negative".to_string());
    } else if let Err(reason) = check_money(income) {
        errors.insert("income".to_string(), reason);
    }
}

fn require_text(errors: &mut BTreeMap<String, String>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), "must not be empty".to_string());
    }
}

fn looks_like_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
