//! Order summaries

use std::time::Duration;

use rust_decimal::Decimal;
use shared::models::{OrderDetail, OrderSummary};

/// Summarize a set of orders.
///
/// Voided orders are only counted. Orders without a paid timestamp never
/// reach the totals; the ones with a positive total are kept as missed
/// payments. Tips are net of `tips_withheld_percentage`.
pub fn summarize<'a>(
    orders: impl IntoIterator<Item = &'a OrderDetail>,
    tips_withheld_percentage: Decimal,
) -> OrderSummary {
    let tip_factor = Decimal::ONE - tips_withheld_percentage;
    let mut summary = OrderSummary::default();
    let mut durations: Vec<Duration> = Vec::new();

    for order in orders {
        if order.voided {
            summary.voids += 1;
            continue;
        }

        if !order.is_paid() {
            if order.total > Decimal::ZERO {
                summary.missed_payments.push(order.clone());
            }
            continue;
        }

        summary.total_sales += order.amount;
        summary.total_taxes += order.tax;
        summary.total_tips += order.tip * tip_factor;
        durations.push(order.duration);
    }

    summary.avg_duration = average_duration(&durations);
    summary
}

/// Arithmetic mean, zero for an empty set
fn average_duration(durations: &[Duration]) -> Duration {
    if durations.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = durations.iter().sum();
    total / durations.len() as u32
}
