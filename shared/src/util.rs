//! Money helpers
//!
//! All amounts are `Decimal`. Rounding happens only at presentation / export
//! boundaries, never while accumulating.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format as `$1234.50` (negative values as `-$12.00`)
pub fn format_money(value: Decimal) -> String {
    let rounded = round_money(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Format a fraction (0.18) as a whole percentage (`18%`)
pub fn format_percentage(fraction: Decimal) -> String {
    let pct = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    format!("{}%", pct.normalize())
}

/// Parse a money cell: trims whitespace and a leading `$`; empty means zero
pub fn parse_money(raw: &str) -> Result<Decimal, rust_decimal::Error> {
    let trimmed = raw.trim().trim_start_matches('$').replace(',', "");
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(&trimmed)
}
