//! Commission tiers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AppError, AppResult, ErrorKind};
use crate::util::{format_money, format_percentage};

/// One commission tier over weekly net sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionTier {
    LessThan { threshold: Decimal, percentage: Decimal },
    GreaterThanOrEqual { threshold: Decimal, percentage: Decimal },
}

impl CommissionTier {
    pub fn is_satisfied(&self, sales: Decimal) -> bool {
        match self {
            Self::LessThan { threshold, .. } => sales < *threshold,
            Self::GreaterThanOrEqual { threshold, .. } => sales >= *threshold,
        }
    }

    /// Commission rate as a fraction (0.18)
    pub fn percentage(&self) -> Decimal {
        match self {
            Self::LessThan { percentage, .. } | Self::GreaterThanOrEqual { percentage, .. } => {
                *percentage
            }
        }
    }
}

impl fmt::Display for CommissionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LessThan { threshold, percentage } => write!(
                f,
                "{} if net sales < {}",
                format_percentage(*percentage),
                format_money(*threshold)
            ),
            Self::GreaterThanOrEqual { threshold, percentage } => write!(
                f,
                "{} if net sales >= {}",
                format_percentage(*percentage),
                format_money(*threshold)
            ),
        }
    }
}

/// Ordered tiers; the first satisfied tier wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommissionSalesStructure(pub Vec<CommissionTier>);

impl CommissionSalesStructure {
    pub fn new(tiers: Vec<CommissionTier>) -> Self {
        Self(tiers)
    }

    /// Commission rate for `sales`.
    ///
    /// Fails with [`ErrorKind::NoCommissionTierMatched`] when no tier applies.
    pub fn percentage_for(&self, sales: Decimal) -> AppResult<Decimal> {
        self.0
            .iter()
            .find(|tier| tier.is_satisfied(sales))
            .map(CommissionTier::percentage)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorKind::NoCommissionTierMatched,
                    format!("sales of {} did not satisfy any commission tier: {}", format_money(sales), self),
                )
                .with_detail("sales", sales.to_string())
            })
    }
}

impl fmt::Display for CommissionSalesStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tiers: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", tiers.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn standard_tiers() -> CommissionSalesStructure {
        CommissionSalesStructure::new(vec![
            CommissionTier::LessThan { threshold: dec("2800"), percentage: dec("0.15") },
            CommissionTier::LessThan { threshold: dec("3300"), percentage: dec("0.18") },
            CommissionTier::GreaterThanOrEqual { threshold: dec("3300"), percentage: dec("0.20") },
        ])
    }

    #[test]
    fn test_first_satisfied_tier_wins() {
        let tiers = standard_tiers();
        assert_eq!(tiers.percentage_for(dec("1000")).unwrap(), dec("0.15"));
        assert_eq!(tiers.percentage_for(dec("2799.99")).unwrap(), dec("0.15"));
        assert_eq!(tiers.percentage_for(dec("2800")).unwrap(), dec("0.18"));
        assert_eq!(tiers.percentage_for(dec("3300")).unwrap(), dec("0.20"));
    }

    #[test]
    fn test_no_tier_matched() {
        let tiers = CommissionSalesStructure::new(vec![CommissionTier::LessThan {
            threshold: dec("1000"),
            percentage: dec("0.10"),
        }]);
        let err = tiers.percentage_for(dec("1500")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NoCommissionTierMatched);
        assert!(err.message.contains("$1500.00"));

        let empty = CommissionSalesStructure::default();
        assert!(empty.percentage_for(Decimal::ZERO).is_err());
    }

    #[test]
    fn test_tier_display() {
        let tiers = standard_tiers();
        assert_eq!(tiers.0[0].to_string(), "15% if net sales < $2800.00");
        assert_eq!(tiers.0[2].to_string(), "20% if net sales >= $3300.00");
    }

    #[test]
    fn test_tiers_deserialize() {
        let json = r#"[
            {"less_than": {"threshold": "2800", "percentage": "0.15"}},
            {"greater_than_or_equal": {"threshold": "2800", "percentage": "0.2"}}
        ]"#;
        let tiers: CommissionSalesStructure = serde_json::from_str(json).unwrap();
        assert_eq!(tiers.0.len(), 2);
        assert_eq!(tiers.percentage_for(dec("5000")).unwrap(), dec("0.2"));
    }
}
