//! Amount type for handling monetary values as a whole number of hundredths.
//!
//! OFX amounts arrive as decimal text such as `-42.5` or `1234.56`. They are stored as an integer
//! count of minor units (cents) so that a value never drifts when it is formatted and re-parsed.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::num::ParseFloatError;
use std::str::FromStr;

/// Number of minor units in one major unit.
const SCALE: f64 = 100.0;

/// Represents a monetary amount in hundredths.
///
/// Conversion from text goes through an `f64` intermediate which is multiplied by 100 and
/// truncated toward zero. Values whose decimal form has no exact binary representation can land
/// one cent low, e.g. `0.29` becomes 28 cents.
///
/// # Examples
///
/// ```
/// # use ofx2json::Amount;
/// let amount = Amount::parse_lossy("-42.5");
/// assert_eq!(amount.cents(), -4250);
/// assert_eq!(amount.to_string(), "-42.50");
/// ```
///
/// Malformed text is read as zero:
/// ```
/// # use ofx2json::Amount;
/// assert!(Amount::parse_lossy("12,50").is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    cents: i64,
}

impl Amount {
    /// Creates a new Amount from a count of hundredths.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns the number of hundredths.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the value as a `Decimal` with a scale of two.
    pub fn value(&self) -> Decimal {
        Decimal::new(self.cents, 2)
    }

    /// Parses `s`, reading anything that is not a number as zero.
    pub fn parse_lossy(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub struct AmountError(ParseFloatError);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = f64::from_str(s.trim()).map_err(AmountError)?;
        // `as` truncates toward zero and saturates at the i64 bounds.
        Ok(Self::from_cents((value * SCALE) as i64))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
