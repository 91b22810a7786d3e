//! IVA percentage rates per category.
//!
//! Centralized so that no other module carries its own rate constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::TaxCategory;

/// Percentage rate applied to prices under `category`.
pub fn rate_percent(category: TaxCategory) -> Decimal {
    match category {
        TaxCategory::General => dec!(21),
        TaxCategory::Reduced => dec!(10),
        TaxCategory::SuperReducedA => dec!(5),
        TaxCategory::SuperReducedB => dec!(4),
        TaxCategory::SuperReducedC => dec!(0),
        TaxCategory::NoTax => dec!(0),
    }
}
