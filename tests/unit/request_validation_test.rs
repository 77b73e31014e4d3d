// Request boundary validation for credit and customer payloads

use chrono::{Duration, NaiveDate};
use credit_system::core::AppError;
use credit_system::credits::models::{CreditRequest, MAX_INSTALLMENTS};
use credit_system::customers::models::{is_valid_cpf, CustomerRequest, CustomerUpdateRequest};
use proptest::prelude::*;
use rust_decimal_macros::dec;

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::TestDataFactory;

fn today() -> NaiveDate {
    TestDataFactory::today()
}

fn credit_request(first: NaiveDate, installments: i32) -> CreditRequest {
    CreditRequest {
        credit_value: dec!(2000.0),
        day_first_of_installment: first,
        number_of_installments: installments,
        customer_id: 1,
    }
}

fn field_names(err: AppError) -> Vec<String> {
    match err {
        AppError::InvalidFields(fields) => fields.into_keys().collect(),
        other => panic!("expected InvalidFields, got {:?}", other),
    }
}

#[test]
fn test_credit_request_reports_every_bad_field() {
    let mut req = credit_request(today() - Duration::days(1), 0);
    req.credit_value = dec!(-1);

    let fields = field_names(req.validate(today()).unwrap_err());

    assert_eq!(
        fields,
        vec!["creditValue", "dayFirstOfInstallment", "numberOfInstallments"]
    );
}

#[test]
fn test_credit_request_tomorrow_is_valid() {
    assert!(credit_request(today() + Duration::days(1), 1)
        .validate(today())
        .is_ok());
}

#[test]
fn test_credit_value_with_sub_cent_digits_is_rejected() {
    let body = serde_json::json!({
        "creditValue": 1000.555,
        "dayFirstOfInstallment": today() + Duration::days(7),
        "numberOfInstallments": 12,
        "customerId": 1
    });
    let req: CreditRequest = serde_json::from_value(body).unwrap();

    match req.validate(today()) {
        Err(AppError::InvalidFields(fields)) => {
            assert_eq!(fields.len(), 1);
            assert!(fields["creditValue"].contains("decimal places"));
        }
        other => panic!("expected InvalidFields, got {:?}", other),
    }
}

#[test]
fn test_credit_value_beyond_column_is_rejected() {
    let mut req = credit_request(today() + Duration::days(7), 12);
    req.credit_value = dec!(100000000000000000);

    assert_eq!(
        field_names(req.validate(today()).unwrap_err()),
        vec!["creditValue"]
    );

    req.credit_value = dec!(99999999999999999.99);
    assert!(req.validate(today()).is_ok());
}

#[test]
fn test_customer_income_with_sub_cent_digits_is_rejected() {
    let mut payload = TestDataFactory::customer_payload();
    payload["income"] = serde_json::json!(2500.999);
    let req: CustomerRequest = serde_json::from_value(payload).unwrap();

    assert_eq!(field_names(req.validate().unwrap_err()), vec!["income"]);
}

#[test]
fn test_customer_request_accepts_generated_cpf() {
    let payload = TestDataFactory::customer_payload();
    let req: CustomerRequest = serde_json::from_value(payload).unwrap();

    assert!(req.validate().is_ok());
}

#[test]
fn test_customer_request_rejects_bad_cpf_and_email() {
    let mut payload = TestDataFactory::customer_payload();
    payload["cpf"] = "11111111111".into();
    payload["email"] = "camila.email.com".into();
    let req: CustomerRequest = serde_json::from_value(payload).unwrap();

    assert_eq!(field_names(req.validate().unwrap_err()), vec!["cpf", "email"]);
}

#[test]
fn test_customer_update_request_rejects_negative_income() {
    let req: CustomerUpdateRequest = serde_json::from_value(serde_json::json!({
        "firstName": "Cami",
        "lastName": "Cavalcante",
        "income": -5.0,
        "zipCode": "45656",
        "street": "Rua Updated"
    }))
    .unwrap();

    assert_eq!(field_names(req.validate().unwrap_err()), vec!["income"]);
}

proptest! {
    #[test]
    fn prop_installments_in_range_are_accepted(n in 1i32..=MAX_INSTALLMENTS) {
        prop_assert!(credit_request(today() + Duration::days(7), n).validate(today()).is_ok());
    }

    #[test]
    fn prop_installments_out_of_range_are_rejected(n in prop_oneof![i32::MIN..1i32, (MAX_INSTALLMENTS + 1)..i32::MAX]) {
        prop_assert!(credit_request(today() + Duration::days(7), n).validate(today()).is_err());
    }

    #[test]
    fn prop_generated_cpfs_are_valid(_i in 0u8..50) {
        prop_assert!(is_valid_cpf(&TestDataFactory::unique_cpf()));
    }
}
