//! Third-party delivery merchants

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::order::OrderDetail;

/// Delivery platform an order came through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdPartyMerchant {
    UberEats,
    Grubhub,
    DoorDash,
}

impl ThirdPartyMerchant {
    /// Classify a dining-option string.
    ///
    /// Case-insensitive substring scan; "grubhub" is checked first, then
    /// "uber eats", then "doordash". `None` means not a delivery order.
    pub fn from_dining_option(dining_option: &str) -> Option<Self> {
        let lower = dining_option.to_lowercase();
        if lower.contains("grubhub") {
            Some(Self::Grubhub)
        } else if lower.contains("uber eats") {
            Some(Self::UberEats)
        } else if lower.contains("doordash") {
            Some(Self::DoorDash)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::UberEats => "Uber Eats",
            Self::Grubhub => "Grubhub",
            Self::DoorDash => "DoorDash",
        }
    }
}

impl fmt::Display for ThirdPartyMerchant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Merchant -> orders placed through it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThirdPartyMerchantOrders {
    orders: BTreeMap<ThirdPartyMerchant, Vec<OrderDetail>>,
}

impl ThirdPartyMerchantOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, merchant: ThirdPartyMerchant, order: OrderDetail) {
        self.orders.entry(merchant).or_default().push(order);
    }

    pub fn bulk_add(&mut self, merchant: ThirdPartyMerchant, orders: impl IntoIterator<Item = OrderDetail>) {
        self.orders.entry(merchant).or_default().extend(orders);
    }

    pub fn get(&self, merchant: ThirdPartyMerchant) -> &[OrderDetail] {
        self.orders.get(&merchant).map(Vec::as_slice).unwrap_or_default()
    }

    /// Merchants with at least one order, in stable order
    pub fn iter(&self) -> impl Iterator<Item = (ThirdPartyMerchant, &[OrderDetail])> {
        self.orders
            .iter()
            .filter(|(_, orders)| !orders.is_empty())
            .map(|(merchant, orders)| (*merchant, orders.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.orders.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn order(number: i64) -> OrderDetail {
        OrderDetail {
            order_id: number.to_string(),
            order_number: number,
            server: "Online Ordering".to_string(),
            dining_options: "Delivery".to_string(),
            amount: Decimal::ONE,
            tax: Decimal::ZERO,
            tip: Decimal::ZERO,
            total: Decimal::ONE,
            voided: false,
            paid_at: None,
            duration: Duration::ZERO,
        }
    }

    #[test]
    fn test_classify_case_insensitive() {
        assert_eq!(
            ThirdPartyMerchant::from_dining_option("Uber Eats"),
            Some(ThirdPartyMerchant::UberEats)
        );
        assert_eq!(
            ThirdPartyMerchant::from_dining_option("  uBeR eAtS - Delivery"),
            Some(ThirdPartyMerchant::UberEats)
        );
        assert_eq!(
            ThirdPartyMerchant::from_dining_option("DOORDASH"),
            Some(ThirdPartyMerchant::DoorDash)
        );
        assert_eq!(
            ThirdPartyMerchant::from_dining_option("Grubhub Pickup"),
            Some(ThirdPartyMerchant::Grubhub)
        );
    }

    #[test]
    fn test_classify_not_delivery() {
        assert_eq!(ThirdPartyMerchant::from_dining_option("Dine In"), None);
        assert_eq!(ThirdPartyMerchant::from_dining_option("UberEats"), None);
        assert_eq!(ThirdPartyMerchant::from_dining_option(""), None);
    }

    #[test]
    fn test_classify_grubhub_wins() {
        assert_eq!(
            ThirdPartyMerchant::from_dining_option("doordash via grubhub"),
            Some(ThirdPartyMerchant::Grubhub)
        );
    }

    #[test]
    fn test_bulk_add_appends() {
        let mut day1 = ThirdPartyMerchantOrders::new();
        day1.add(ThirdPartyMerchant::UberEats, order(1));
        day1.bulk_add(ThirdPartyMerchant::UberEats, vec![order(2), order(3)]);
        day1.add(ThirdPartyMerchant::DoorDash, order(4));

        let uber: Vec<i64> = day1
            .get(ThirdPartyMerchant::UberEats)
            .iter()
            .map(|o| o.order_number)
            .collect();
        assert_eq!(uber, vec![1, 2, 3]);
        assert_eq!(day1.get(ThirdPartyMerchant::DoorDash).len(), 1);
        assert!(day1.get(ThirdPartyMerchant::Grubhub).is_empty());
        assert_eq!(day1.len(), 4);
    }
}
