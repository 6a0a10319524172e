//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On disk an amount is a plain JSON decimal number (`200.5`), which is
//! the format the planner's data file has always used. Amounts are capped at
//! `Money::MAX` so every value survives the trip through `f64` exactly.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest amount that can be entered or stored (9,999,999,999,999.99)
    pub const MAX: Money = Money(999_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use trip_planner::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Whether the amount lies within `-MAX..=MAX`
    pub const fn in_range(&self) -> bool {
        self.0.unsigned_abs() <= Self::MAX.0 as u64
    }

    /// Add two amounts, returning `None` if the sum leaves the storable range
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .filter(Self::in_range)
    }

    /// Convert a decimal number of units into cents, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values beyond `Money::MAX`.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents.abs() > Self::MAX.0 as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// The amount as a decimal number of units
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Share of `total` this amount represents, as a percentage
    ///
    /// A zero total yields 0.0 rather than NaN.
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            return 0.0;
        }
        (self.0 as f64 * 100.0) / total.0 as f64
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "10", ".5", "10." and rounds
    /// anything past the second fractional digit to the nearest cent.
    /// Amounts beyond `Money::MAX` are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        // Handle sign at start
        let (negative, body) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        let (whole, fraction) = match body.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (body, None),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !fraction.map_or(true, all_digits) {
            return Err(invalid());
        }
        if whole.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // First two fractional digits are cents, the third decides rounding
        let digits: Vec<i64> = fraction
            .unwrap_or("")
            .bytes()
            .take(3)
            .map(|b| i64::from(b - b'0'))
            .collect();
        let digit = |i: usize| digits.get(i).copied().unwrap_or(0);
        let round_up = i64::from(digit(2) >= 5);
        let fraction_cents = digit(0) * 10 + digit(1) + round_up;

        let cents = units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .map(Self)
            .filter(Self::in_range)
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(if negative { -cents } else { cents })
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.is_negative() {
            format!("-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.units(), self.cents_part())
        };
        // Honour width/alignment so amounts line up in reports
        f.pad(&text)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Saturates at `Money::MAX` in either direction
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| {
            Self(acc.0.saturating_add(m.0).clamp(-Self::MAX.0, Self::MAX.0))
        })
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_decimal(value)
            .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value)))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount too large: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
