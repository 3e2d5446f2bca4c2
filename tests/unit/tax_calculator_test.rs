// Property-based tests for per-line-item tax calculation
//
// - tax_amount = subtotal × rate / 100, per named component
// - amounts are kept at full precision until the invoice is rounded
// - negative rates are rejected, never coerced

use hub_invoicing::core::AppError;
use hub_invoicing::taxes::{TaxCalculator, TaxRates};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

proptest! {
    #[test]
    fn test_tax_calculation_is_deterministic(
        subtotal in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8
    ) {
        let calculator = TaxCalculator::new();
        let subtotal = Decimal::from(subtotal);
        let rate = Decimal::from(rate_percent);

        let tax1 = calculator.calculate_tax(subtotal, rate).unwrap();
        let tax2 = calculator.calculate_tax(subtotal, rate).unwrap();

        prop_assert_eq!(tax1, tax2, "Tax calculation must be deterministic");
    }

    #[test]
    fn test_tax_is_non_negative(
        subtotal in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8
    ) {
        let tax = TaxCalculator::new()
            .calculate_tax(Decimal::from(subtotal), Decimal::from(rate_percent))
            .unwrap();

        prop_assert!(tax >= Decimal::ZERO, "Tax must be non-negative: got {}", tax);
    }

    #[test]
    fn test_tax_never_exceeds_subtotal_up_to_hundred_percent(
        subtotal in 0u64..1_000_000_000u64,
        rate_percent in 0u8..=100u8
    ) {
        let subtotal = Decimal::from(subtotal);
        let tax = TaxCalculator::new()
            .calculate_tax(subtotal, Decimal::from(rate_percent))
            .unwrap();

        prop_assert!(tax <= subtotal, "Tax {} should not exceed subtotal {}", tax, subtotal);
    }

    #[test]
    fn test_zero_rate_produces_zero_tax(subtotal in 0u64..1_000_000_000u64) {
        let tax = TaxCalculator::new()
            .calculate_tax(Decimal::from(subtotal), Decimal::ZERO)
            .unwrap();

        prop_assert_eq!(tax, Decimal::ZERO, "0% tax rate must produce zero tax");
    }

    #[test]
    fn test_tax_scales_linearly_with_subtotal(
        base_subtotal in 1u64..1_000_000u64,
        multiplier in 2u64..10u64,
        rate_bp in 1u32..=5000u32
    ) {
        let calculator = TaxCalculator::new();
        let rate = Decimal::new(rate_bp as i64, 2);

        let tax1 = calculator.calculate_tax(Decimal::from(base_subtotal), rate).unwrap();
        let tax2 = calculator
            .calculate_tax(Decimal::from(base_subtotal * multiplier), rate)
            .unwrap();

        // Unrounded, so proportionality is exact
        prop_assert_eq!(tax2, tax1 * Decimal::from(multiplier));
    }

    #[test]
    fn test_split_gst_equals_combined_rate(
        subtotal_cents in 0i64..100_000_000i64,
        total_percent in prop_oneof![Just(5u32), Just(12u32), Just(18u32), Just(28u32)]
    ) {
        let calculator = TaxCalculator::new();
        let subtotal = Decimal::new(subtotal_cents, 2);
        let total_percent = Decimal::from(total_percent);

        let split = calculator
            .calculate_taxes(subtotal, &TaxRates::gst(total_percent))
            .unwrap();
        let combined = calculator.calculate_tax(subtotal, total_percent).unwrap();

        prop_assert_eq!(split.values().copied().sum::<Decimal>(), combined);
        prop_assert_eq!(split["CGST"], split["SGST"]);
    }

    #[test]
    fn test_negative_rates_rejected(
        subtotal in 0u64..1_000_000u64,
        rate_bp in 1i64..100_000i64
    ) {
        let result = TaxCalculator::new()
            .calculate_tax(Decimal::from(subtotal), Decimal::new(-rate_bp, 2));

        prop_assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}

#[test]
fn test_specific_tax_calculations() {
    let calculator = TaxCalculator::new();

    // 9% of 300 = 27
    assert_eq!(calculator.calculate_tax(dec!(300), dec!(9)).unwrap(), dec!(27));

    // 11% of 1000 = 110
    assert_eq!(calculator.calculate_tax(dec!(1000), dec!(11)).unwrap(), dec!(110));

    // 10% of 333 = 33.3, not yet rounded
    assert_eq!(calculator.calculate_tax(dec!(333), dec!(10)).unwrap(), dec!(33.3));

    // 18% of 0.05 = 0.009
    assert_eq!(calculator.calculate_tax(dec!(0.05), dec!(18)).unwrap(), dec!(0.009));
}

#[test]
fn test_per_component_independence() {
    let calculator = TaxCalculator::new();
    let rates = TaxRates::new()
        .with("CGST", dec!(2.5))
        .with("SGST", dec!(2.5))
        .with("Cess", dec!(0.5));

    let taxes = calculator.calculate_taxes(dec!(1000), &rates).unwrap();

    assert_eq!(taxes["CGST"], dec!(25));
    assert_eq!(taxes["SGST"], dec!(25));
    assert_eq!(taxes["Cess"], dec!(5));
    assert_eq!(taxes.values().copied().sum::<Decimal>(), dec!(55));
}

#[test]
fn test_empty_rates_produce_no_components() {
    let taxes = TaxCalculator::new()
        .calculate_taxes(dec!(1000), &TaxRates::new())
        .unwrap();

    assert!(taxes.is_empty());
}
