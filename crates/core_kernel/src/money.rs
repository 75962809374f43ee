//! Money type with precise decimal arithmetic
//!
//! Monetary values are carried as `rust_decimal::Decimal` to avoid
//! floating-point drift during accumulation. Display formatting follows the
//! ledger convention: thousands separators, exactly two decimal places, and
//! an empty cell for zero debit/credit amounts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A monetary amount in the ledger's single operating currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a new amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Parses a raw cell value, treating anything unparsable as zero.
    ///
    /// Spreadsheet amount columns routinely contain blanks and stray text;
    /// those cells contribute nothing to the total rather than failing the
    /// whole ingestion.
    pub fn parse_lenient(raw: &str) -> Self {
        Decimal::from_str(raw.trim()).map(Self).unwrap_or_default()
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Formats with thousands separators and exactly two decimal places,
    /// e.g. `1234.5` becomes `"1,234.50"`.
    pub fn grouped(&self) -> String {
        let rounded = self.0.round_dp(2);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().to_string();
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, format!("{f:0<2}")),
            None => (digits.as_str(), "00".to_string()),
        };

        let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
        if negative {
            out.push('-');
        }
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out.push('.');
        out.push_str(&frac_part);
        out
    }

    /// Formats for a ledger debit/credit cell: zero renders as an empty
    /// string so the row's direction stays visually unambiguous.
    pub fn ledger_cell(&self) -> String {
        if self.is_zero() {
            String::new()
        } else {
            self.grouped()
        }
    }

    /// Rounds to the nearest whole unit, for the spelled-out documentary
    /// total. Returns `None` if the amount does not fit in an `i64`.
    pub fn round_whole(&self) -> Option<i64> {
        self.0.round().to_i64()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grouped())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grouped_always_has_two_decimals(cents in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::new(Decimal::new(cents, 2));
            let text = money.grouped();
            let (_, frac) = text.rsplit_once('.').unwrap();
            prop_assert_eq!(frac.len(), 2);
        }

        #[test]
        fn grouped_round_trips_through_ungrouping(cents in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::new(Decimal::new(cents, 2));
            let stripped: String = money.grouped().chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(Money::parse_lenient(&stripped), money);
        }
    }
}
