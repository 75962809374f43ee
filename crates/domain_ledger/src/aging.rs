//! Aging classification
//!
//! Outstanding amounts are bucketed into five fixed windows by days elapsed
//! since the transaction date. Bucket upper bounds are inclusive: an entry
//! aged exactly 30 days is still `Current`, exactly 60 days still one month,
//! and so on.

use chrono::NaiveDate;
use core_kernel::{age_days, parse_date_or, Money};
use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// The five fixed aging windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBucket {
    /// 30 days or less (including future-dated entries)
    Current,
    /// 31 to 60 days
    OneMonth,
    /// 61 to 90 days
    TwoMonths,
    /// 91 to 120 days
    ThreeMonths,
    /// Over 120 days
    FourPlus,
}

impl AgeBucket {
    /// Classifies an age in days.
    pub fn for_age(days: i64) -> Self {
        match days {
            d if d <= 30 => AgeBucket::Current,
            d if d <= 60 => AgeBucket::OneMonth,
            d if d <= 90 => AgeBucket::TwoMonths,
            d if d <= 120 => AgeBucket::ThreeMonths,
            _ => AgeBucket::FourPlus,
        }
    }

    /// Column heading used in the report's aging strip.
    pub fn label(&self) -> &'static str {
        match self {
            AgeBucket::Current => "Current Month",
            AgeBucket::OneMonth => "1 Month",
            AgeBucket::TwoMonths => "2 Months",
            AgeBucket::ThreeMonths => "3 Months",
            AgeBucket::FourPlus => "4 Months & Above",
        }
    }
}

/// Net amount per aging bucket for one transaction list.
///
/// Computed fresh from the transactions each time, never persisted. The
/// grand total is derived from the five buckets, so the two can never drift
/// apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingSummary {
    pub current: Money,
    pub one_month: Money,
    pub two_months: Money,
    pub three_months: Money,
    pub four_plus: Money,
}

impl AgingSummary {
    /// Buckets each transaction's net amount by its age relative to `as_of`.
    ///
    /// A transaction whose date fails to parse is treated as dated `as_of`
    /// (age zero, `Current`) rather than failing the whole computation.
    pub fn classify(transactions: &[Transaction], as_of: NaiveDate) -> Self {
        let mut summary = AgingSummary::default();
        for tx in transactions {
            let date = parse_date_or(&tx.date, as_of);
            summary.add(AgeBucket::for_age(age_days(date, as_of)), tx.net());
        }
        summary
    }

    fn add(&mut self, bucket: AgeBucket, net: Money) {
        *self.slot_mut(bucket) += net;
    }

    fn slot_mut(&mut self, bucket: AgeBucket) -> &mut Money {
        match bucket {
            AgeBucket::Current => &mut self.current,
            AgeBucket::OneMonth => &mut self.one_month,
            AgeBucket::TwoMonths => &mut self.two_months,
            AgeBucket::ThreeMonths => &mut self.three_months,
            AgeBucket::FourPlus => &mut self.four_plus,
        }
    }

    /// Bucket value lookup.
    pub fn bucket(&self, bucket: AgeBucket) -> Money {
        match bucket {
            AgeBucket::Current => self.current,
            AgeBucket::OneMonth => self.one_month,
            AgeBucket::TwoMonths => self.two_months,
            AgeBucket::ThreeMonths => self.three_months,
            AgeBucket::FourPlus => self.four_plus,
        }
    }

    /// Grand total, by construction the sum of the five buckets.
    pub fn total(&self) -> Money {
        self.current + self.one_month + self.two_months + self.three_months + self.four_plus
    }

    /// Buckets in report column order.
    pub fn in_order(&self) -> [(AgeBucket, Money); 5] {
        [
            (AgeBucket::Current, self.current),
            (AgeBucket::OneMonth, self.one_month),
            (AgeBucket::TwoMonths, self.two_months),
            (AgeBucket::ThreeMonths, self.three_months),
            (AgeBucket::FourPlus, self.four_plus),
        ]
    }
}
