// Customer model
//
// A customer applies for credits. Credits point at their customer by id; the
// customer record carries no list of credits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Postal address embedded in a customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub zip_code: String,
    pub street: String,
}

/// Persisted customer
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Customer {
    /// Store-assigned identity, never changes
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Brazilian taxpayer id, digits only, unique per customer
    pub cpf: String,
    pub email: String,
    /// Argon2 PHC string
    pub password_hash: String,
    #[sqlx(flatten)]
    pub address: Address,
    pub income: Decimal,
}

impl Customer {
    /// Replace the mutable profile fields
    pub fn apply(&mut self, update: CustomerUpdate) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.income = update.income;
        self.address = update.address;
    }
}

/// Customer about to be registered, with the password still in clear text
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub cpf: String,
    pub email: String,
    pub password: String,
    pub address: Address,
    pub income: Decimal,
}

/// Profile fields a customer may change after registration
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub first_name: String,
    pub last_name: String,
    pub income: Decimal,
    pub address: Address,
}

/// Check a CPF number: eleven digits, not all equal, with both check digits valid.
/// Dots and dashes are ignored.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = cpf
        .chars()
        .filter(|c| *c != '.' && *c != '-')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();

    if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let check_digit = |len: usize| -> u32 {
        let sum: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (len as u32 + 1 - i as u32))
            .sum();
        match (sum * 10) % 11 {
            10 => 0,
            d => d,
        }
    };

    check_digit(9) == digits[9] && check_digit(10) == digits[10]
}

/// Strip formatting from a CPF, keeping digits only
pub fn normalize_cpf(cpf: &str) -> String {
    cpf.chars().filter(|c| c.is_ascii_digit()).collect()
}
