//! The receipt calculation pipeline.
//!
//! Per-line amounts accumulate at full precision; rounding to two decimals
//! happens once per displayed line price and once for the three grand totals
//! at finalization. Rounding before accumulation would let per-line rounding
//! drift into the totals.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::ReciboError;
use crate::rates::rate_percent;
use crate::types::{PricedLine, Receipt, ReceiptLine, TaxBreakdownEntry, TaxCategory, Totals};

/// Round a monetary amount to 2 decimal places, midpoint away from zero
/// (commercial rounding).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Tax-inclusive price for `pre_tax` under `category`.
///
/// No rounding is applied here; callers round once, for display or at
/// finalization.
pub fn price_with_tax(pre_tax: Decimal, category: TaxCategory) -> Decimal {
    pre_tax + pre_tax * rate_percent(category) / dec!(100)
}

/// Fold one line's tax into the breakdown, keeping a single entry per
/// category in first-seen order.
fn apply_breakdown(
    receipt: &mut Receipt,
    category: TaxCategory,
    pre_tax: Decimal,
    post_tax: Decimal,
) {
    let tax_amount = post_tax - pre_tax;

    match receipt
        .breakdown
        .iter_mut()
        .find(|entry| entry.tax_category == category)
    {
        Some(entry) => entry.amount += tax_amount,
        None => receipt.breakdown.push(TaxBreakdownEntry {
            tax_category: category,
            amount: tax_amount,
        }),
    }
}

/// Price one line and fold its contribution into the accumulating receipt.
fn process_line(receipt: &mut Receipt, line: &ReceiptLine) {
    let pre_tax = line.product.unit_price * Decimal::from(line.quantity);
    let post_tax = price_with_tax(pre_tax, line.product.tax_category);

    receipt.lines.push(PricedLine {
        name: line.product.name.clone(),
        quantity: line.quantity,
        pre_tax_price: round2(pre_tax),
        tax_category: line.product.tax_category,
        post_tax_price: round2(post_tax),
    });

    // Totals take the unrounded amounts; the displayed line prices above
    // are the only place per-line rounding happens.
    receipt.totals.pre_tax += pre_tax;
    receipt.totals.tax += post_tax - pre_tax;
    receipt.totals.post_tax += post_tax;

    apply_breakdown(receipt, line.product.tax_category, pre_tax, post_tax);
}

/// Compute a finalized receipt from `lines`, in input order.
///
/// The first line with a zero quantity or a negative unit price aborts the
/// whole computation. An empty slice is valid and yields a receipt with no
/// lines, no breakdown, and zero totals.
pub fn compute_receipt(lines: &[ReceiptLine]) -> Result<Receipt, ReciboError> {
    for (index, line) in lines.iter().enumerate() {
        if line.quantity == 0 {
            return Err(ReciboError::InvalidQuantity { index });
        }
        if line.product.unit_price.is_sign_negative() {
            return Err(ReciboError::InvalidPrice {
                index,
                price: line.product.unit_price,
            });
        }
    }

    let mut receipt = Receipt {
        lines: Vec::with_capacity(lines.len()),
        totals: Totals {
            pre_tax: Decimal::ZERO,
            tax: Decimal::ZERO,
            post_tax: Decimal::ZERO,
        },
        breakdown: Vec::new(),
    };

    for line in lines {
        process_line(&mut receipt, line);
    }

    receipt.totals.pre_tax = round2(receipt.totals.pre_tax);
    receipt.totals.tax = round2(receipt.totals.tax);
    receipt.totals.post_tax = round2(receipt.totals.post_tax);

    Ok(receipt)
}
