use recibo::*;
use rust_decimal_macros::dec;

fn line(name: &str, price: rust_decimal::Decimal, category: TaxCategory, qty: u32) -> ReceiptLine {
    ReceiptLine::new(Product::new(name, price, category), qty)
}

// --- Worked scenario ---

#[test]
fn receipt_with_mixed_categories() {
    let lines = vec![
        line("Camiseta", dec!(20), TaxCategory::General, 2),
        line("Libro", dec!(15), TaxCategory::SuperReducedB, 1),
        line("Medicamento", dec!(30), TaxCategory::NoTax, 1),
    ];

    let receipt = compute_receipt(&lines).unwrap();

    assert_eq!(receipt.lines.len(), 3);

    // Camiseta: 2 × 20 = 40, +21% = 48.40
    assert_eq!(receipt.lines[0].name, "Camiseta");
    assert_eq!(receipt.lines[0].quantity, 2);
    assert_eq!(receipt.lines[0].pre_tax_price, dec!(40));
    assert_eq!(receipt.lines[0].post_tax_price, dec!(48.40));
    assert_eq!(receipt.lines[0].tax_category, TaxCategory::General);

    // Libro: 15, +4% = 15.60
    assert_eq!(receipt.lines[1].pre_tax_price, dec!(15));
    assert_eq!(receipt.lines[1].post_tax_price, dec!(15.60));

    // Medicamento: 30, no tax
    assert_eq!(receipt.lines[2].pre_tax_price, dec!(30));
    assert_eq!(receipt.lines[2].post_tax_price, dec!(30));

    assert_eq!(receipt.totals.pre_tax, dec!(85));
    assert_eq!(receipt.totals.tax, dec!(9));
    assert_eq!(receipt.totals.post_tax, dec!(94));

    // Breakdown entries keep first-seen category order.
    assert_eq!(receipt.breakdown.len(), 3);
    assert_eq!(receipt.breakdown[0].tax_category, TaxCategory::General);
    assert_eq!(receipt.breakdown[0].amount, dec!(8.4));
    assert_eq!(receipt.breakdown[1].tax_category, TaxCategory::SuperReducedB);
    assert_eq!(receipt.breakdown[1].amount, dec!(0.6));
    assert_eq!(receipt.breakdown[2].tax_category, TaxCategory::NoTax);
    assert_eq!(receipt.breakdown[2].amount, dec!(0));
}

#[test]
fn repeated_categories_share_one_breakdown_entry() {
    let lines = vec![
        line("Vino", dec!(8), TaxCategory::General, 1),
        line("Aceite", dec!(4.50), TaxCategory::Reduced, 2),
        line("Queso", dec!(12), TaxCategory::General, 1),
    ];

    let receipt = compute_receipt(&lines).unwrap();

    assert_eq!(receipt.breakdown.len(), 2);
    assert_eq!(receipt.breakdown[0].tax_category, TaxCategory::General);
    // (8 + 12) × 21% = 4.20
    assert_eq!(receipt.breakdown[0].amount, dec!(4.20));
    assert_eq!(receipt.breakdown[1].tax_category, TaxCategory::Reduced);
    // 9 × 10% = 0.90
    assert_eq!(receipt.breakdown[1].amount, dec!(0.90));
}

// --- Rounding discipline ---

#[test]
fn totals_accumulate_unrounded_amounts() {
    // Each line carries 0.0735 of tax; rounding per line first would give
    // 0.07 × 3 = 0.21 and a post-tax total of 1.26.
    let lines = vec![
        line("Chicle", dec!(0.35), TaxCategory::General, 1),
        line("Chicle", dec!(0.35), TaxCategory::General, 1),
        line("Chicle", dec!(0.35), TaxCategory::General, 1),
    ];

    let receipt = compute_receipt(&lines).unwrap();

    for priced in &receipt.lines {
        assert_eq!(priced.post_tax_price, dec!(0.42));
    }

    assert_eq!(receipt.totals.pre_tax, dec!(1.05));
    assert_eq!(receipt.totals.tax, dec!(0.22));
    assert_eq!(receipt.totals.post_tax, dec!(1.27));
    assert_eq!(
        receipt.totals.pre_tax + receipt.totals.tax,
        receipt.totals.post_tax
    );
}

// --- Empty input ---

#[test]
fn empty_input_yields_an_empty_receipt() {
    let receipt = compute_receipt(&[]).unwrap();

    assert!(receipt.lines.is_empty());
    assert!(receipt.breakdown.is_empty());
    assert_eq!(receipt.totals.pre_tax, dec!(0));
    assert_eq!(receipt.totals.tax, dec!(0));
    assert_eq!(receipt.totals.post_tax, dec!(0));
    assert!(verify_arithmetic(&receipt).is_empty());
}

// --- Error display ---

#[test]
fn validation_errors_carry_the_offending_line() {
    let lines = vec![
        line("Pan", dec!(1.50), TaxCategory::SuperReducedA, 2),
        line("Leche", dec!(1.20), TaxCategory::SuperReducedA, 0),
    ];

    let err = compute_receipt(&lines).unwrap_err();
    assert_eq!(err.to_string(), "line 1: quantity must be at least 1");

    let lines = vec![line("Abono", dec!(-2.50), TaxCategory::General, 1)];
    let err = compute_receipt(&lines).unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 0: unit price must not be negative, got -2.50"
    );
}

// --- Serde boundary ---

#[test]
fn receipt_serializes_with_the_external_field_names() {
    let receipt = compute_receipt(&[line("Camiseta", dec!(20), TaxCategory::General, 2)]).unwrap();

    let value = serde_json::to_value(&receipt).unwrap();

    assert_eq!(value["lines"][0]["taxCategory"], "general");
    assert!(value["lines"][0].get("preTaxPrice").is_some());
    assert!(value["lines"][0].get("postTaxPrice").is_some());
    assert!(value["totals"].get("preTax").is_some());
    assert!(value["totals"].get("postTax").is_some());
    assert!(value["breakdown"][0].get("amount").is_some());

    let round_tripped: Receipt = serde_json::from_value(value).unwrap();
    assert_eq!(round_tripped, receipt);
}

#[test]
fn input_lines_deserialize_from_the_external_shape() {
    let json = r#"[
        {"product": {"name": "Pan", "unitPrice": "1.50", "taxCategory": "superReducedA"}, "quantity": 2}
    ]"#;

    let lines: Vec<ReceiptLine> = serde_json::from_str(json).unwrap();
    let receipt = compute_receipt(&lines).unwrap();

    assert_eq!(receipt.totals.pre_tax, dec!(3.00));
    assert_eq!(receipt.totals.tax, dec!(0.15));
    assert_eq!(receipt.totals.post_tax, dec!(3.15));
}
