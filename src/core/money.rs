// Monetary amounts
//
// Money columns are DECIMAL(19, 2): at most two fractional digits and
// seventeen integer digits.

use rust_decimal::Decimal;

/// Fractional digits kept by the money columns
pub const MONEY_SCALE: u32 = 2;

/// Largest magnitude a money column can hold (99999999999999999.99)
pub fn money_max() -> Decimal {
    Decimal::from_i128_with_scale(9_999_999_999_999_999_999, MONEY_SCALE)
}

/// Check that `value` is stored unchanged by a money column.
///
/// Trailing zeros are ignored, so `1000.500` is accepted as `1000.50`.
pub fn check_money(value: Decimal) -> std::result::Result<(), String> {
    if value.normalize().scale() > MONEY_SCALE {
        return Err(format!("must have at most {} decimal places", MONEY_SCALE));
    }
    if value.abs() > money_max() {
        return Err(format!("must not exceed {}", money_max()));
    }
    Ok(())
}
