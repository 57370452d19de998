//! Delivery order reconciliation
//!
//! Delivery platforms pay out separately from the register, so every
//! delivery order that made it into the sales totals is confirmed with the
//! operator. Orders confirmed unpaid are taken back out of weekly sales.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{DailySummary, OrderDetail, ThirdPartyMerchant, ThirdPartyMerchantOrders};
use shared::util::format_money;

use crate::operator::OperatorInput;
use crate::orders::summarize;

/// Payment state of one delivery order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    ConfirmedPaid,
    ConfirmedUnpaid,
}

impl PaymentStatus {
    /// Apply the operator's answer; confirmed states are terminal
    pub fn confirm(self, paid: bool) -> Self {
        match self {
            Self::Pending if paid => Self::ConfirmedPaid,
            Self::Pending => Self::ConfirmedUnpaid,
            confirmed => confirmed,
        }
    }
}

/// Paid and unpaid delivery orders per date, dates in chronological order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryLedger {
    pub paid: BTreeMap<NaiveDate, ThirdPartyMerchantOrders>,
    pub unpaid: BTreeMap<NaiveDate, ThirdPartyMerchantOrders>,
}

impl DeliveryLedger {
    fn record(&mut self, date: NaiveDate, merchant: ThirdPartyMerchant, order: OrderDetail, status: PaymentStatus) {
        let book = match status {
            PaymentStatus::ConfirmedPaid => &mut self.paid,
            PaymentStatus::ConfirmedUnpaid => &mut self.unpaid,
            PaymentStatus::Pending => return,
        };
        book.entry(date).or_default().add(merchant, order);
    }

    /// Sales + tax + tips of every unpaid order, subtracted once from weekly sales
    pub fn unpaid_total(&self, tips_withheld_percentage: Decimal) -> Decimal {
        self.unpaid
            .values()
            .flat_map(|orders| orders.iter())
            .map(|(_, orders)| summarize(orders, tips_withheld_percentage).gross())
            .sum()
    }

    pub fn unpaid_count(&self) -> usize {
        self.unpaid.values().map(ThirdPartyMerchantOrders::len).sum()
    }

    pub fn paid_count(&self) -> usize {
        self.paid.values().map(ThirdPartyMerchantOrders::len).sum()
    }
}

/// Ask the operator about every delivery order that contributed to totals.
///
/// Dates are visited in chronological order, merchants in a stable order
/// within each date.
pub fn reconcile_deliveries(
    dailies: &BTreeMap<NaiveDate, DailySummary>,
    operator: &mut dyn OperatorInput,
) -> AppResult<DeliveryLedger> {
    let mut ledger = DeliveryLedger::default();

    for (date, daily) in dailies {
        for (merchant, orders) in daily.third_party_orders.iter() {
            for order in orders.iter().filter(|o| o.contributes_to_totals()) {
                let question = format!(
                    "{} {} order #{} ({}): was it paid?",
                    date.format("%m/%d"),
                    merchant,
                    order.order_number,
                    format_money(order.total)
                );
                let status = PaymentStatus::Pending.confirm(operator.confirm(&question)?);
                ledger.record(*date, merchant, order.clone(), status);
            }
        }
    }

    tracing::info!(
        paid = ledger.paid_count(),
        unpaid = ledger.unpaid_count(),
        "Delivery orders reconciled"
    );
    Ok(ledger)
}
