//! Post-hoc arithmetic checks over a finalized receipt.
//!
//! Useful at trust boundaries, e.g. before handing a receipt produced
//! elsewhere to a renderer. Returns all findings, not just the first.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ValidationError;
use crate::types::Receipt;

/// Check a finalized receipt for internal consistency.
///
/// Rounding the three totals independently can leave `pre_tax + tax` and
/// `post_tax` a cent apart when unit prices carry more than two decimal
/// places, so the sum checks allow a tolerance of 0.01.
pub fn verify_arithmetic(receipt: &Receipt) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let totals = &receipt.totals;
    let drift = (totals.pre_tax + totals.tax - totals.post_tax).abs();
    if drift > dec!(0.01) {
        errors.push(ValidationError::new(
            "totals.post_tax",
            format!(
                "pre-tax {} + tax {} does not match post-tax {}",
                totals.pre_tax, totals.tax, totals.post_tax
            ),
        ));
    }

    let breakdown_total: Decimal = receipt.breakdown.iter().map(|entry| entry.amount).sum();
    if (breakdown_total - totals.tax).abs() > dec!(0.01) {
        errors.push(ValidationError::new(
            "breakdown",
            format!(
                "breakdown amounts sum to {} but the tax total is {}",
                breakdown_total, totals.tax
            ),
        ));
    }

    for (i, line) in receipt.lines.iter().enumerate() {
        if line.post_tax_price < line.pre_tax_price {
            errors.push(ValidationError::new(
                format!("lines[{i}].post_tax_price"),
                format!(
                    "post-tax price {} is below pre-tax price {}",
                    line.post_tax_price, line.pre_tax_price
                ),
            ));
        }
    }

    let mut seen = HashSet::new();
    for (i, entry) in receipt.breakdown.iter().enumerate() {
        if !seen.insert(entry.tax_category) {
            errors.push(ValidationError::new(
                format!("breakdown[{i}]"),
                format!("duplicate entry for category '{}'", entry.tax_category.code()),
            ));
        }
    }

    errors
}
