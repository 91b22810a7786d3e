use crate::engine::compute_receipt;
use crate::error::ReciboError;
use crate::types::{Product, Receipt, ReceiptLine};

/// Upper bound on lines per receipt.
const MAX_LINES: usize = 10_000;

/// Builder for assembling a receipt line by line.
///
/// The builder owns its lines exclusively; nothing is computed until
/// [`build`](ReceiptBuilder::build), which prices every line, accumulates the
/// totals at full precision, and rounds them exactly once.
///
/// ```
/// use recibo::{Product, ReceiptBuilder, TaxCategory};
/// use rust_decimal_macros::dec;
///
/// let receipt = ReceiptBuilder::new()
///     .line(Product::new("Camiseta", dec!(20), TaxCategory::General), 2)
///     .line(Product::new("Libro", dec!(15), TaxCategory::SuperReducedB), 1)
///     .build()
///     .unwrap();
///
/// assert_eq!(receipt.totals.post_tax, dec!(64));
/// ```
#[derive(Debug, Default)]
pub struct ReceiptBuilder {
    lines: Vec<ReceiptLine>,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a line for `quantity` units of `product`.
    pub fn line(mut self, product: Product, quantity: u32) -> Self {
        self.lines.push(ReceiptLine { product, quantity });
        self
    }

    /// Add an already-assembled line.
    pub fn add_line(mut self, line: ReceiptLine) -> Self {
        self.lines.push(line);
        self
    }

    /// Compute and finalize the receipt.
    ///
    /// Fails on the first line with a zero quantity or negative unit price,
    /// or when the line count limit is exceeded.
    pub fn build(self) -> Result<Receipt, ReciboError> {
        if self.lines.len() > MAX_LINES {
            return Err(ReciboError::TooManyLines {
                count: self.lines.len(),
                limit: MAX_LINES,
            });
        }

        compute_receipt(&self.lines)
    }
}
