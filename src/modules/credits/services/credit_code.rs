use uuid::Uuid;

/// Source of credit codes for new credits
pub trait CreditCodeGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

/// Random 128-bit codes (UUID v4)
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCreditCode;

impl CreditCodeGenerator for RandomCreditCode {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}
