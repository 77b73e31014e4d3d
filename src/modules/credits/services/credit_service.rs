use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use super::credit_code::{CreditCodeGenerator, RandomCreditCode};
use crate::core::{AppError, Clock, Result, SystemClock};
use crate::modules::credits::models::{validate_first_installment, Credit, NewCredit};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::customers::models::Customer;
use crate::modules::customers::services::CustomerService;

/// Credit business rules: creation checks and owner-scoped lookups
pub struct CreditService {
    credit_repo: Arc<dyn CreditRepository>,
    customer_service: Arc<CustomerService>,
    code_generator: Arc<dyn CreditCodeGenerator>,
    clock: Arc<dyn Clock>,
}

impl CreditService {
    pub fn new(credit_repo: Arc<dyn CreditRepository>, customer_service: Arc<CustomerService>) -> Self {
        Self {
            credit_repo,
            customer_service,
            code_generator: Arc::new(RandomCreditCode),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the credit code source
    pub fn with_code_generator(mut self, code_generator: Arc<dyn CreditCodeGenerator>) -> Self {
        self.code_generator = code_generator;
        self
    }

    /// Replace the date source used by the first-installment rule
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current date as seen by the credit rules
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Create a credit for an existing customer.
    ///
    /// Fails with `CustomerNotFound` if the customer does not exist and with
    /// `InvalidInstallmentDate` if the first installment falls more than three months
    /// after today. The store is written exactly once, and only when every check passes.
    pub async fn create(&self, new_credit: NewCredit) -> Result<Credit> {
        self.create_with_owner(new_credit)
            .await
            .map(|(credit, _)| credit)
    }

    /// Same as [`create`](Self::create), also returning the owner resolved for the checks
    pub async fn create_with_owner(&self, new_credit: NewCredit) -> Result<(Credit, Customer)> {
        let customer = self.customer_service.find_by_id(new_credit.customer_id).await?;

        validate_first_installment(new_credit.day_first_installment, self.today())?;

        let credit_code = new_credit
            .credit_code
            .unwrap_or_else(|| self.code_generator.generate());

        let credit = Credit::new(
            credit_code,
            new_credit.credit_value,
            new_credit.day_first_installment,
            new_credit.number_of_installments,
            customer.id,
        )?;

        let saved = self.credit_repo.save(&credit).await?;

        tracing::info!(
            credit_code = %saved.credit_code,
            customer_id = saved.customer_id,
            installments = saved.number_of_installments,
            "Credit created"
        );

        Ok((saved, customer))
    }

    /// All credits of a customer; empty when there are none
    pub async fn find_all_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>> {
        self.credit_repo.find_all_by_customer_id(customer_id).await
    }

    /// Credit with the given code, provided it belongs to `customer_id`
    pub async fn find_by_credit_code(&self, customer_id: i64, credit_code: Uuid) -> Result<Credit> {
        let credit = self
            .credit_repo
            .find_by_credit_code(credit_code)
            .await?
            .ok_or(AppError::CreditNotFound(credit_code))?;

        if !credit.belongs_to(customer_id) {
            tracing::warn!(
                credit_code = %credit_code,
                customer_id,
                owner_id = credit.customer_id,
                "Credit requested by a customer that does not own it"
            );
            return Err(AppError::IllegalAccess {
                credit_code,
                customer_id,
            });
        }

        Ok(credit)
    }

    /// Customer that owns a credit
    pub async fn owner_of(&self, credit: &Credit) -> Result<Customer> {
        self.customer_service.find_by_id(credit.customer_id).await
    }
}
