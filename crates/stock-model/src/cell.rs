//! Typed cell values for export tables.
//!
//! Extractors decide how a value is presented (date pattern, money style);
//! the encoder only turns the chosen presentation into text.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Date presentation chosen by a report's base column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `YYYY-MM-DD`
    Iso,
    /// `MM/DD/YYYY`
    MonthDayYearSlash,
    /// `MM-DD-YYYY`
    MonthDayYearDash,
}

impl DateStyle {
    /// strftime pattern for this style.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Iso => "%Y-%m-%d",
            Self::MonthDayYearSlash => "%m/%d/%Y",
            Self::MonthDayYearDash => "%m-%d-%Y",
        }
    }
}

/// Money presentation chosen by a report's base column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoneyStyle {
    /// Two decimals, no symbol: `1234.56`.
    Plain,
    /// Literal `$` then the amount with at least one fractional digit: `$12.09`, `$0.0`.
    DollarPrefixed,
    /// `$` with thousands separators and two decimals: `$1,234.56`.
    Currency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    /// Plain decimal with at least one fractional digit (`12.5`, `0.0`).
    Decimal(Decimal),
    Money {
        amount: Decimal,
        style: MoneyStyle,
    },
    Date {
        value: NaiveDate,
        style: DateStyle,
    },
    Blank,
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Text when present, blank otherwise.
    pub fn optional_text(value: Option<&str>) -> Self {
        value.map_or(Self::Blank, Self::text)
    }

    pub fn integer(value: i64) -> Self {
        Self::Integer(value)
    }

    pub fn money(amount: Decimal, style: MoneyStyle) -> Self {
        Self::Money { amount, style }
    }

    pub fn date(value: NaiveDate, style: DateStyle) -> Self {
        Self::Date { value, style }
    }

    /// Date when present, blank otherwise.
    pub fn optional_date(value: Option<NaiveDate>, style: DateStyle) -> Self {
        value.map_or(Self::Blank, |value| Self::date(value, style))
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

/// Convert integer cents into a two-decimal dollar amount.
pub fn cents_to_dollars(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}
