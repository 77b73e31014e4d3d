pub mod credit;
pub mod credit_dto;

pub use credit::{
    latest_first_installment, validate_first_installment, Credit, CreditRow, CreditStatus,
    NewCredit, MAX_FIRST_INSTALLMENT_MONTHS,
};
pub use credit_dto::{CreditRequest, CreditView, CreditViewList, MAX_INSTALLMENTS};
