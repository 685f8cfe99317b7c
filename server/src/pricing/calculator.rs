use rust_decimal::prelude::*;

use shared::cart::CartItem;

/// Parse a price string as entered in the back office.
///
/// Empty or whitespace-only input means "no price" and parses to 0.0.
/// Malformed input yields NaN, which then poisons every total built
/// from it; callers surface that instead of silently charging wrong
/// amounts.
pub fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Round to 2 decimal places, half away from zero. NaN passes through.
pub fn round_money(value: f64) -> f64 {
    match Decimal::from_f64(value) {
        Some(d) => d
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            .to_f64()
            .unwrap_or(f64::NAN),
        None => f64::NAN,
    }
}

/// Unit price for one cart line: the size is a surcharge on the base
/// price, add-ons stack on top.
pub fn unit_price(item: &CartItem) -> f64 {
    let mut unit = parse_price(&item.base_price);
    if let Some(size) = &item.selected_size {
        unit += parse_price(&size.price);
    }
    let add_ons: f64 = item
        .selected_add_ons
        .iter()
        .map(|a| parse_price(&a.price))
        .sum();
    unit + add_ons
}

pub fn line_total(item: &CartItem) -> f64 {
    round_money(unit_price(item) * item.quantity as f64)
}

pub fn cart_total(items: &[CartItem]) -> f64 {
    round_money(items.iter().map(line_total).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::types::PriceOption;

    #[test]
    fn empty_price_is_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("   "), 0.0);
    }

    #[test]
    fn malformed_price_is_nan() {
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("12.5.0").is_nan());
    }

    #[test]
    fn size_and_add_ons_stack_on_the_base_price() {
        let mut item = CartItem::basic("m1", "Fish Head Curry", "18.00", 2);
        item.selected_size = Some(PriceOption::new("Large", "4.00"));
        item.selected_add_ons = vec![
            PriceOption::new("Extra Rice", "1.50"),
            PriceOption::new("Tofu", "2.00"),
        ];

        // (18.00 + 4.00 + 1.50 + 2.00) * 2 = 51.00
        assert_eq!(unit_price(&item), 25.5);
        assert_eq!(line_total(&item), 51.0);
    }

    #[test]
    fn worked_example_totals_40_50() {
        // base 10.00 + size 2.00 + add-on 1.50, three of them
        let mut item = CartItem::basic("m1", "Burger", "10.00", 3);
        item.selected_size = Some(PriceOption::new("Large", "2.00"));
        item.selected_add_ons = vec![PriceOption::new("Cheese", "1.50")];

        assert_eq!(unit_price(&item), 13.50);
        assert_eq!(line_total(&item), 40.50);
        assert_eq!(cart_total(&[item]), 40.50);
    }

    #[test]
    fn nan_poisons_the_cart_total() {
        let good = CartItem::basic("m1", "Tea", "1.80", 1);
        let bad = CartItem::basic("m2", "Mystery", "oops", 1);
        assert!(cart_total(&[good, bad]).is_nan());
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_money(2.005), 2.01);
        assert_eq!(round_money(2.675), 2.68);
        assert_eq!(round_money(-2.005), -2.01);
    }
}
