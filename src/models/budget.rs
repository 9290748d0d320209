//! Budget models
//!
//! A budget entry is a ceiling on spend for one calendar month or for the
//! whole year. The remaining amount is decremented as matching expenses are
//! recorded and restored when they are deleted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// The period a budget entry covers: one month (1-12) or the whole year.
///
/// Serialized as the string `"1"`..`"12"` or `"year"`, matching the keys of
/// the persisted budget file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum BudgetPeriod {
    Month(u32),
    Year,
}

impl BudgetPeriod {
    /// Build a month period, validating the 1-12 range
    pub fn month(month: u32) -> Result<Self, BudgetPeriodError> {
        if (1..=12).contains(&month) {
            Ok(Self::Month(month))
        } else {
            Err(BudgetPeriodError::MonthOutOfRange(month))
        }
    }

    /// True if this entry applies to an expense recorded in `month`.
    ///
    /// The yearly ceiling matches every month.
    pub fn matches_month(&self, month: u32) -> bool {
        match self {
            Self::Month(m) => *m == month,
            Self::Year => true,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month(m) => write!(f, "{}", m),
            Self::Year => write!(f, "year"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = BudgetPeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("year") {
            return Ok(Self::Year);
        }
        let month: u32 = s
            .parse()
            .map_err(|_| BudgetPeriodError::InvalidPeriod(s.to_string()))?;
        Self::month(month)
    }
}

impl From<BudgetPeriod> for String {
    fn from(period: BudgetPeriod) -> Self {
        period.to_string()
    }
}

impl TryFrom<String> for BudgetPeriod {
    type Error = BudgetPeriodError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Error type for budget period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetPeriodError {
    MonthOutOfRange(u32),
    InvalidPeriod(String),
}

impl fmt::Display for BudgetPeriodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthOutOfRange(m) => write!(f, "Please provide a valid month (1-12), got {}", m),
            Self::InvalidPeriod(s) => write!(f, "Invalid budget period: {}", s),
        }
    }
}

impl std::error::Error for BudgetPeriodError {}

/// A ceiling on spend for a month or for the year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// The period this ceiling covers
    pub period: BudgetPeriod,

    /// The remaining amount; never negative
    pub remaining: Money,
}

impl BudgetEntry {
    /// Create a new budget entry
    pub fn new(period: BudgetPeriod, remaining: Money) -> Self {
        Self { period, remaining }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range_validation() {
        assert!(BudgetPeriod::month(1).is_ok());
        assert!(BudgetPeriod::month(12).is_ok());
        assert_eq!(
            BudgetPeriod::month(0),
            Err(BudgetPeriodError::MonthOutOfRange(0))
        );
        assert_eq!(
            BudgetPeriod::month(13),
            Err(BudgetPeriodError::MonthOutOfRange(13))
        );
    }

    #[test]
    fn test_matches_month() {
        assert!(BudgetPeriod::Month(3).matches_month(3));
        assert!(!BudgetPeriod::Month(3).matches_month(4));
        assert!(BudgetPeriod::Year.matches_month(1));
        assert!(BudgetPeriod::Year.matches_month(12));
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("7".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Month(7));
        assert_eq!("year".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Year);
        assert_eq!("YEAR".parse::<BudgetPeriod>().unwrap(), BudgetPeriod::Year);
        assert!("13".parse::<BudgetPeriod>().is_err());
        assert!("march".parse::<BudgetPeriod>().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let entry = BudgetEntry::new(BudgetPeriod::Month(3), Money::from_cents(10000));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""period":"3""#));

        let back: BudgetEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.period, BudgetPeriod::Month(3));
        assert_eq!(back.remaining.cents(), 10000);

        let yearly = BudgetEntry::new(BudgetPeriod::Year, Money::from_cents(100000));
        let json = serde_json::to_string(&yearly).unwrap();
        assert!(json.contains(r#""period":"year""#));
    }
}
