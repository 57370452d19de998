//! Daily sales summary

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::merchant::{ThirdPartyMerchant, ThirdPartyMerchantOrders};
use super::order::OrderDetail;

/// Key orders are grouped under: the server, or the delivery platform
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderGroup {
    Server(String),
    Merchant(ThirdPartyMerchant),
}

impl OrderGroup {
    /// Group for an order
    pub fn of(order: &OrderDetail) -> Self {
        match order.delivery_merchant() {
            Some(merchant) => Self::Merchant(merchant),
            None => Self::Server(order.server.clone()),
        }
    }

    pub fn merchant(&self) -> Option<ThirdPartyMerchant> {
        match self {
            Self::Merchant(m) => Some(*m),
            Self::Server(_) => None,
        }
    }
}

impl fmt::Display for OrderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server(name) => f.write_str(name),
            Self::Merchant(merchant) => write!(f, "{}", merchant),
        }
    }
}

/// One calendar date's aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Net sales from every group
    pub sales: Decimal,
    /// Sales tax, delivery-platform tax excluded
    pub sales_tax: Decimal,
    /// Tips net of the withheld percentage
    pub tips: Decimal,
    pub order_groups: BTreeMap<OrderGroup, Vec<OrderDetail>>,
    pub third_party_orders: ThirdPartyMerchantOrders,
}

impl DailySummary {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            sales: Decimal::ZERO,
            sales_tax: Decimal::ZERO,
            tips: Decimal::ZERO,
            order_groups: BTreeMap::new(),
            third_party_orders: ThirdPartyMerchantOrders::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn order(server: &str, dining: &str) -> OrderDetail {
        OrderDetail {
            order_id: "1".to_string(),
            order_number: 1,
            server: server.to_string(),
            dining_options: dining.to_string(),
            amount: Decimal::ZERO,
            tax: Decimal::ZERO,
            tip: Decimal::ZERO,
            total: Decimal::ZERO,
            voided: false,
            paid_at: None,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_order_group_of() {
        assert_eq!(
            OrderGroup::of(&order("Alice", "Dine In")),
            OrderGroup::Server("Alice".to_string())
        );
        assert_eq!(
            OrderGroup::of(&order("Alice", "DoorDash Delivery")),
            OrderGroup::Merchant(ThirdPartyMerchant::DoorDash)
        );
    }

    #[test]
    fn test_order_group_display() {
        assert_eq!(OrderGroup::Server("Bob".to_string()).to_string(), "Bob");
        assert_eq!(
            OrderGroup::Merchant(ThirdPartyMerchant::UberEats).to_string(),
            "Uber Eats"
        );
    }
}
