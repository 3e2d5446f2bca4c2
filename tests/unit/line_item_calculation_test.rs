// Property-based tests for line item figures and draft editing
//
// Properties tested:
// 1. line_subtotal = quantity × unit_rate, line_total = subtotal + taxes
// 2. a line's figures depend only on quantity, rate and tax rates
// 3. catalog snapshots start at quantity 1 and keep the catalog's rates
// 4. draft totals always equal a fresh aggregate of the draft's rows

use hub_invoicing::core::RoundingPolicy;
use hub_invoicing::invoices::{CatalogItem, InvoiceCalculator, InvoiceDraft, LineItem};
use hub_invoicing::taxes::TaxRates;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn arb_gst() -> impl Strategy<Value = TaxRates> {
    prop_oneof![
        Just(TaxRates::new()),
        Just(TaxRates::gst(dec!(5))),
        Just(TaxRates::gst(dec!(12))),
        Just(TaxRates::gst(dec!(18))),
    ]
}

proptest! {
    #[test]
    fn test_line_item_figures(
        quantity in 0u32..=10_000,
        unit_rate_cents in 0u64..=1_000_000u64,
        tax_rates in arb_gst()
    ) {
        let calculator = InvoiceCalculator::default();
        let quantity = Decimal::from(quantity);
        let unit_rate = Decimal::new(unit_rate_cents as i64, 2);

        let result = calculator.compute_line_item(quantity, unit_rate, &tax_rates).unwrap();

        prop_assert_eq!(result.line_subtotal, quantity * unit_rate);
        prop_assert_eq!(result.line_total, result.line_subtotal + result.tax_total());
        prop_assert_eq!(result.tax_amounts.len(), tax_rates.len());
        prop_assert!(result.line_total >= result.line_subtotal);
    }

    #[test]
    fn test_line_total_is_reconstructable(
        quantity_tenths in 0u32..=1000,
        unit_rate_cents in 0u64..=1_000_000u64,
        tax_rates in arb_gst()
    ) {
        let calculator = InvoiceCalculator::default();
        let item = LineItem::new(
            "Item",
            Decimal::new(quantity_tenths as i64, 1),
            Decimal::new(unit_rate_cents as i64, 2),
            tax_rates,
        )
        .unwrap();

        let from_item = calculator.compute(&item).unwrap();
        let from_parts = calculator
            .compute_line_item(item.quantity(), item.unit_rate(), item.tax_rates())
            .unwrap();

        prop_assert_eq!(from_item, from_parts);
    }

    #[test]
    fn test_rounded_line_is_within_half_unit(
        quantity in 1u32..=100,
        unit_rate_mills in 0u64..=10_000_000u64,
        tax_rates in arb_gst()
    ) {
        let calculator = InvoiceCalculator::default();
        let policy = RoundingPolicy::default();
        let result = calculator
            .compute_line_item(Decimal::from(quantity), Decimal::new(unit_rate_mills as i64, 3), &tax_rates)
            .unwrap();

        let rounded = result.rounded(&policy);

        prop_assert!((rounded.line_total - result.line_total).abs() <= dec!(0.005));
        prop_assert!(rounded.line_total.scale() <= 2);
    }

    #[test]
    fn test_draft_totals_match_fresh_aggregate(
        rates in prop::collection::vec(1u64..1_000_000u64, 1..8),
        quantities in prop::collection::vec(0u32..50, 8)
    ) {
        let calculator = InvoiceCalculator::default();
        let mut draft = InvoiceDraft::new();

        for (idx, rate) in rates.iter().enumerate() {
            let catalog = CatalogItem::new(
                format!("SKU-{}", idx),
                format!("Item {}", idx),
                Decimal::new(*rate as i64, 2),
                TaxRates::gst(dec!(18)),
            )
            .unwrap();
            let id = draft.add_item(&catalog).unwrap();
            draft.set_quantity(id, Decimal::from(quantities[idx])).unwrap();
        }

        let draft_totals = draft.totals(&calculator).unwrap();
        let fresh = calculator.aggregate_invoice(draft.line_items()).unwrap();

        prop_assert_eq!(draft_totals, fresh);
    }
}

#[test]
fn test_catalog_snapshot_defaults() {
    let catalog = CatalogItem::new("SKU-1", "Steel Bolt", dec!(12.50), TaxRates::gst(dec!(18)))
        .unwrap()
        .with_hsn_code("7318");

    let item = LineItem::from_catalog(&catalog).unwrap();
    let result = InvoiceCalculator::default().compute(&item).unwrap();

    assert_eq!(item.quantity(), Decimal::ONE);
    assert_eq!(item.hsn_code.as_deref(), Some("7318"));
    assert_eq!(result.line_subtotal, dec!(12.50));
    assert_eq!(result.line_total, dec!(14.75));
}

#[test]
fn test_zero_quantity_line_is_valid() {
    let calculator = InvoiceCalculator::default();
    let item = LineItem::new("Item", Decimal::ZERO, dec!(100), TaxRates::gst(dec!(18))).unwrap();

    let result = calculator.compute(&item).unwrap();

    assert_eq!(result.line_total, Decimal::ZERO);
    assert_eq!(result.tax_amounts.len(), 2);
}
