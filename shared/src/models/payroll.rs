//! Payroll export rows
//!
//! One row per pay item in the payroll provider's CSV import format:
//! `type, id, emp_num, hours, rate, treat_as_cash, cash_amount`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Row type; only pay items are produced
pub const PAY_ITEM: u8 = 1;

/// Pay item id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum PayId {
    Regular = 1,
    ControlledTips = 208,
}

impl From<PayId> for u16 {
    fn from(id: PayId) -> Self {
        id as u16
    }
}

impl TryFrom<u16> for PayId {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Regular),
            208 => Ok(Self::ControlledTips),
            other => Err(format!("unknown pay id {}", other)),
        }
    }
}

/// Whether the row is hours based or a cash amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TreatAsCash {
    /// Written as an empty cell
    RequiresHours,
    /// Written as `1`
    DoesNotRequireHours,
}

impl From<TreatAsCash> for String {
    fn from(value: TreatAsCash) -> Self {
        match value {
            TreatAsCash::RequiresHours => String::new(),
            TreatAsCash::DoesNotRequireHours => "1".to_string(),
        }
    }
}

impl TryFrom<String> for TreatAsCash {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim() {
            "" => Ok(Self::RequiresHours),
            "1" => Ok(Self::DoesNotRequireHours),
            other => Err(format!("invalid treat_as_cash value {:?}", other)),
        }
    }
}

/// Decimal cells as exact text; csv would otherwise read numbers back as f64
mod decimal_text {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Decimal::from_str(raw.trim())
            .map_err(|e| serde::de::Error::custom(format!("invalid decimal {:?}: {}", raw, e)))
    }
}

/// One payroll CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    #[serde(rename = "type")]
    pub item_type: u8,
    #[serde(rename = "id")]
    pub pay_id: PayId,
    #[serde(rename = "emp_num")]
    pub employee_number: String,
    /// Written at full precision
    #[serde(with = "decimal_text")]
    pub hours: Decimal,
    #[serde(with = "decimal_text")]
    pub rate: Decimal,
    pub treat_as_cash: TreatAsCash,
    /// Two-decimal amount on cash rows, empty on hours rows
    pub cash_amount: String,
}

impl PayrollEntry {
    /// Hours-based regular pay row
    pub fn regular(employee_number: impl Into<String>, hours: Decimal, rate: Decimal) -> Self {
        Self {
            item_type: PAY_ITEM,
            pay_id: PayId::Regular,
            employee_number: employee_number.into(),
            hours,
            rate,
            treat_as_cash: TreatAsCash::RequiresHours,
            cash_amount: String::new(),
        }
    }

    /// Cash-only pooled tips row
    pub fn controlled_tips(employee_number: impl Into<String>, amount: Decimal) -> Self {
        Self {
            item_type: PAY_ITEM,
            pay_id: PayId::ControlledTips,
            employee_number: employee_number.into(),
            hours: Decimal::ZERO,
            rate: Decimal::ZERO,
            treat_as_cash: TreatAsCash::DoesNotRequireHours,
            cash_amount: format!("{:.2}", crate::util::round_money(amount)),
        }
    }
}
