// Customer service lifecycle over the in-memory store

use std::sync::Arc;

use credit_system::core::AppError;
use credit_system::credits::{Credit, CreditStatus};
use credit_system::customers::services::password::verify_password;
use credit_system::customers::{Address, CustomerUpdate};
use rust_decimal_macros::dec;
use uuid::Uuid;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;

#[tokio::test]
async fn test_save_hashes_password() {
    let store = Arc::new(InMemoryStore::new());
    let services = test_services(&store);

    let input = TestDataFactory::new_customer();
    let customer = services.customers.save(input.clone()).await.unwrap();

    assert_ne!(customer.password_hash, input.password);
    assert!(verify_password(&input.password, &customer.password_hash).unwrap());
    assert!(!verify_password("wrong", &customer.password_hash).unwrap());
    assert_eq!(customer.first_name, "Cami");
}

#[tokio::test]
async fn test_duplicate_cpf_or_email_is_conflict() {
    let store = Arc::new(InMemoryStore::new());
    let services = test_services(&store);

    let first = services
        .customers
        .save(TestDataFactory::new_customer())
        .await
        .unwrap();

    let mut same_cpf = TestDataFactory::new_customer();
    same_cpf.cpf = first.cpf.clone();
    assert!(matches!(
        services.customers.save(same_cpf).await,
        Err(AppError::Conflict(_))
    ));

    let mut same_email = TestDataFactory::new_customer();
    same_email.email = first.email.clone();
    assert!(matches!(
        services.customers.save(same_email).await,
        Err(AppError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_update_keeps_identity_fields() {
    let store = Arc::new(InMemoryStore::new());
    let services = test_services(&store);
    let customer = services
        .customers
        .save(TestDataFactory::new_customer())
        .await
        .unwrap();

    let updated = services
        .customers
        .update(
            customer.id,
            CustomerUpdate {
                first_name: "Camila".to_string(),
                last_name: "Cavalcante".to_string(),
                income: dec!(5000.0),
                address: Address {
                    zip_code: "45656".to_string(),
                    street: "Rua Updated".to_string(),
                },
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.first_name, "Camila");
    assert_eq!(updated.income, dec!(5000.0));
    assert_eq!(updated.cpf, customer.cpf);
    assert_eq!(updated.email, customer.email);
    assert_eq!(updated.password_hash, customer.password_hash);

    let reloaded = services.customers.find_by_id(customer.id).await.unwrap();
    assert_eq!(reloaded, updated);
}

#[tokio::test]
async fn test_delete_removes_customer_and_credits() {
    let store = Arc::new(InMemoryStore::new());
    let services = test_services(&store);
    let owner = services
        .customers
        .save(TestDataFactory::new_customer())
        .await
        .unwrap();
    let other = services
        .customers
        .save(TestDataFactory::new_customer())
        .await
        .unwrap();

    for customer_id in [owner.id, owner.id, other.id] {
        store.insert_credit(
            Credit::new(
                Uuid::new_v4(),
                dec!(300.0),
                TestDataFactory::today(),
                6,
                customer_id,
            )
            .unwrap(),
        );
    }
    assert_eq!(store.credit_count(), 3);

    services.customers.delete(owner.id).await.unwrap();

    assert!(matches!(
        services.customers.find_by_id(owner.id).await,
        Err(AppError::CustomerNotFound(id)) if id == owner.id
    ));
    assert!(services
        .credits
        .find_all_by_customer(owner.id)
        .await
        .unwrap()
        .is_empty());

    let remaining = services.credits.find_all_by_customer(other.id).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].status, CreditStatus::InProgress);
}

#[tokio::test]
async fn test_delete_unknown_customer() {
    let store = Arc::new(InMemoryStore::new());
    let services = test_services(&store);

    assert!(matches!(
        services.customers.delete(5).await,
        Err(AppError::CustomerNotFound(5))
    ));
}

#[tokio::test]
async fn test_credit_ids_stay_unique_after_cascade_delete() {
    let store = Arc::new(InMemoryStore::new());
    let services = test_services(&store);
    let gone = services
        .customers
        .save(TestDataFactory::new_customer())
        .await
        .unwrap();
    let kept = services
        .customers
        .save(TestDataFactory::new_customer())
        .await
        .unwrap();
    let today = TestDataFactory::today();

    services
        .credits
        .create(TestDataFactory::new_credit(gone.id, dec!(100.0), today, 2))
        .await
        .unwrap();
    let first = services
        .credits
        .create(TestDataFactory::new_credit(kept.id, dec!(200.0), today, 2))
        .await
        .unwrap();

    services.customers.delete(gone.id).await.unwrap();

    let second = services
        .credits
        .create(TestDataFactory::new_credit(kept.id, dec!(300.0), today, 2))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    let ids: Vec<_> = services
        .credits
        .find_all_by_customer(kept.id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}
