// In-Memory Store
//
// Implements both repository traits over shared vectors so service and HTTP
// tests run without MySQL. Enforces the same unique keys as the real tables
// and counts credit writes.

use async_trait::async_trait;
use credit_system::core::{AppError, Result};
use credit_system::credits::{Credit, CreditRepository};
use credit_system::customers::{Customer, CustomerRepository, NewCustomer};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryStore {
    customers: Mutex<Vec<Customer>>,
    credits: Mutex<Vec<Credit>>,
    next_customer_id: AtomicUsize,
    next_credit_id: AtomicUsize,
    credit_writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful credit inserts
    pub fn credit_writes(&self) -> usize {
        self.credit_writes.load(Ordering::SeqCst)
    }

    // Ids are never reused, even after a cascade delete
    fn next_credit_id(&self) -> i64 {
        self.next_credit_id.fetch_add(1, Ordering::SeqCst) as i64 + 1
    }

    pub fn credit_count(&self) -> usize {
        self.credits.lock().unwrap().len()
    }

    /// Insert a credit directly, bypassing the service rules
    pub fn insert_credit(&self, credit: Credit) -> Credit {
        let mut credits = self.credits.lock().unwrap();
        let mut stored = credit;
        stored.id = Some(self.next_credit_id());
        credits.push(stored.clone());
        stored
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        Ok(self
            .customers
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn create(&self, customer: &NewCustomer, password_hash: &str) -> Result<Customer> {
        let mut customers = self.customers.lock().unwrap();

        if customers
            .iter()
            .any(|c| c.cpf == customer.cpf || c.email == customer.email)
        {
            return Err(AppError::conflict(
                "Customer with this CPF or email already exists",
            ));
        }

        let id = self.next_customer_id.fetch_add(1, Ordering::SeqCst) as i64 + 1;
        let created = Customer {
            id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
            cpf: customer.cpf.clone(),
            email: customer.email.clone(),
            password_hash: password_hash.to_string(),
            address: customer.address.clone(),
            income: customer.income,
        };
        customers.push(created.clone());

        Ok(created)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer> {
        let mut customers = self.customers.lock().unwrap();
        if let Some(stored) = customers.iter_mut().find(|c| c.id == customer.id) {
            *stored = customer.clone();
        }
        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.credits.lock().unwrap().retain(|c| c.customer_id != id);
        self.customers.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl CreditRepository for InMemoryStore {
    async fn save(&self, credit: &Credit) -> Result<Credit> {
        let mut credits = self.credits.lock().unwrap();

        if credits.iter().any(|c| c.credit_code == credit.credit_code) {
            return Err(AppError::conflict(format!(
                "Credit with code '{}' already exists",
                credit.credit_code
            )));
        }

        let mut saved = credit.clone();
        saved.id = Some(self.next_credit_id());
        credits.push(saved.clone());
        self.credit_writes.fetch_add(1, Ordering::SeqCst);

        Ok(saved)
    }

    async fn find_by_credit_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        Ok(self
            .credits
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.credit_code == credit_code)
            .cloned())
    }

    async fn find_all_by_customer_id(&self, customer_id: i64) -> Result<Vec<Credit>> {
        Ok(self
            .credits
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }
}
