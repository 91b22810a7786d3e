//! # recibo
//!
//! Sales receipt engine for Spanish IVA: tax-inclusive line prices, grand
//! totals, and a per-category tax breakdown.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Per-line amounts accumulate at full precision; rounding to two decimals
//! happens once per displayed line price and once for the final totals.
//!
//! ## Quick Start
//!
//! ```rust
//! use recibo::{Product, ReceiptBuilder, TaxCategory};
//! use rust_decimal_macros::dec;
//!
//! let receipt = ReceiptBuilder::new()
//!     .line(Product::new("Camiseta", dec!(20), TaxCategory::General), 2)
//!     .line(Product::new("Libro", dec!(15), TaxCategory::SuperReducedB), 1)
//!     .line(Product::new("Medicamento", dec!(30), TaxCategory::NoTax), 1)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(receipt.totals.pre_tax, dec!(85));
//! assert_eq!(receipt.totals.tax, dec!(9));
//! assert_eq!(receipt.totals.post_tax, dec!(94));
//! ```

mod builder;
mod engine;
mod error;
mod rates;
mod types;
mod validation;

pub use builder::*;
pub use engine::{compute_receipt, price_with_tax, round2};
pub use error::*;
pub use rates::rate_percent;
pub use types::*;
pub use validation::*;
