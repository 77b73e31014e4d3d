// Credits module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Credit, CreditStatus, NewCredit};
pub use repositories::{CreditRepository, MySqlCreditRepository};
pub use services::{CreditCodeGenerator, CreditService, RandomCreditCode};
