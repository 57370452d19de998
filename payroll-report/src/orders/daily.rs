//! Daily summaries

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{DailySummary, OrderDetail, OrderGroup};

use super::summary::summarize;

/// Group one date's orders and total them.
///
/// Orders are grouped by server unless the dining option names a delivery
/// platform, in which case the platform is the group. Delivery tax is left
/// out of the daily sales tax; delivery sales and tips still count.
pub fn build_daily_summary(
    date: NaiveDate,
    orders: Vec<OrderDetail>,
    tips_withheld_percentage: Decimal,
) -> DailySummary {
    let mut daily = DailySummary::empty(date);

    let mut groups: BTreeMap<OrderGroup, Vec<OrderDetail>> = BTreeMap::new();
    for order in orders {
        groups.entry(OrderGroup::of(&order)).or_default().push(order);
    }

    for (group, orders) in &groups {
        let summary = summarize(orders, tips_withheld_percentage);

        daily.sales += summary.total_sales;
        daily.tips += summary.total_tips;

        match group.merchant() {
            Some(merchant) => daily.third_party_orders.bulk_add(merchant, orders.iter().cloned()),
            None => daily.sales_tax += summary.total_taxes,
        }

        tracing::debug!(
            %date,
            group = %group,
            sales = %summary.total_sales,
            tips = %summary.total_tips,
            voids = summary.voids,
            missed = summary.missed_payments.len(),
            "Summarized order group"
        );
    }

    daily.order_groups = groups;
    daily
}
