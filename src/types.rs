use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ReciboError;

/// Spanish IVA category. Determines which percentage rate applies to a price.
///
/// The set is closed: a category outside it cannot be represented. Goods that
/// carry no tax use [`TaxCategory::NoTax`] explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxCategory {
    /// Tipo general — 21%.
    General,
    /// Tipo reducido — 10%.
    Reduced,
    /// Tipo superreducido A — 5%.
    SuperReducedA,
    /// Tipo superreducido B — 4%.
    SuperReducedB,
    /// Tipo superreducido C — 0%.
    SuperReducedC,
    /// Goods outside the IVA regime — 0%.
    NoTax,
}

impl TaxCategory {
    /// Category code as exchanged with host programs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Reduced => "reduced",
            Self::SuperReducedA => "superReducedA",
            Self::SuperReducedB => "superReducedB",
            Self::SuperReducedC => "superReducedC",
            Self::NoTax => "noTax",
        }
    }

    /// Parse from a category code string.
    ///
    /// A code outside the known set is a data error, not an implicit
    /// zero-rate category.
    pub fn from_code(code: &str) -> Result<Self, ReciboError> {
        match code {
            "general" => Ok(Self::General),
            "reduced" => Ok(Self::Reduced),
            "superReducedA" => Ok(Self::SuperReducedA),
            "superReducedB" => Ok(Self::SuperReducedB),
            "superReducedC" => Ok(Self::SuperReducedC),
            "noTax" => Ok(Self::NoTax),
            _ => Err(ReciboError::UnknownTaxCategory(code.to_string())),
        }
    }
}

/// A purchasable item: name, unit price before tax, and its IVA category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    /// Unit price before tax. Must not be negative.
    pub unit_price: Decimal,
    pub tax_category: TaxCategory,
}

impl Product {
    pub fn new(name: impl Into<String>, unit_price: Decimal, tax_category: TaxCategory) -> Self {
        Self {
            name: name.into(),
            unit_price,
            tax_category,
        }
    }
}

/// One input line of a receipt: a product and how many units were bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub product: Product,
    /// Units bought. Must be at least 1.
    pub quantity: u32,
}

impl ReceiptLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }
}

/// A priced output line of a finalized receipt.
///
/// Both prices are rounded to 2 decimal places for display; the receipt's
/// totals are accumulated from the unrounded amounts instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLine {
    pub name: String,
    pub quantity: u32,
    /// Line price before tax (unit price × quantity), rounded to 2 dp.
    pub pre_tax_price: Decimal,
    pub tax_category: TaxCategory,
    /// Line price with tax applied, rounded to 2 dp.
    pub post_tax_price: Decimal,
}

/// Tax collected under one category across the whole receipt.
///
/// Amounts accumulate at full precision; entries keep the order in which
/// their category was first seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBreakdownEntry {
    pub tax_category: TaxCategory,
    pub amount: Decimal,
}

/// The receipt's three grand totals, rounded once at finalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of all line amounts before tax.
    pub pre_tax: Decimal,
    /// Total tax collected.
    pub tax: Decimal,
    /// Sum of all line amounts with tax = pre_tax + tax.
    pub post_tax: Decimal,
}

/// A finalized sales receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Priced lines, in input order.
    pub lines: Vec<PricedLine>,
    pub totals: Totals,
    /// Tax per category, in first-seen order.
    pub breakdown: Vec<TaxBreakdownEntry>,
}
