//! Order Model

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::merchant::ThirdPartyMerchant;

/// One point-of-sale transaction line from the daily order export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_id: String,
    pub order_number: i64,
    pub server: String,
    /// Free-form dining option ("Dine In", "Uber Eats - Delivery", ...)
    pub dining_options: String,
    pub amount: Decimal,
    pub tax: Decimal,
    pub tip: Decimal,
    pub total: Decimal,
    pub voided: bool,
    /// Absent when the order was never paid
    pub paid_at: Option<NaiveDateTime>,
    /// Opened to paid
    pub duration: Duration,
}

impl OrderDetail {
    /// Delivery platform named by the dining option, if any
    pub fn delivery_merchant(&self) -> Option<ThirdPartyMerchant> {
        ThirdPartyMerchant::from_dining_option(&self.dining_options)
    }

    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }

    /// Whether the order counts toward sales totals
    pub fn contributes_to_totals(&self) -> bool {
        !self.voided && self.is_paid()
    }
}

/// Aggregate over a set of orders
///
/// Voided orders only bump `voids`. Unpaid orders never reach the totals;
/// those with a positive total are kept in `missed_payments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total_sales: Decimal,
    pub total_taxes: Decimal,
    /// Net of the withheld card-fee percentage
    pub total_tips: Decimal,
    pub avg_duration: Duration,
    pub voids: usize,
    pub missed_payments: Vec<OrderDetail>,
}

impl OrderSummary {
    /// Sales + tax + tips, the amount a delivery platform owes for these orders
    pub fn gross(&self) -> Decimal {
        self.total_sales + self.total_taxes + self.total_tips
    }

    /// Average order time split into whole minutes and remaining seconds
    pub fn avg_minutes_seconds(&self) -> (u64, u64) {
        let secs = self.avg_duration.as_secs();
        (secs / 60, secs % 60)
    }
}
