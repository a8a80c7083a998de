//! Rate conversion and currency rounding.
//!
//! Converts bucketed hours into currency amounts by pure multiplication
//! against the rate table. Per-statement amounts stay exact; rounding is
//! applied only where statements are summed across projects, using
//! half-to-even at two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RateTable;
use crate::models::BucketHours;

/// Currency amounts for the four buckets, before statement assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BucketAmounts {
    pub regular: Decimal,
    pub workday_ot: Decimal,
    pub rest_day_ot: Decimal,
    pub holiday_ot: Decimal,
}

impl BucketAmounts {
    pub fn total(&self) -> Decimal {
        self.regular + self.workday_ot + self.rest_day_ot + self.holiday_ot
    }
}

/// Multiplies bucket hours by the base rate and per-bucket multipliers.
///
/// Regular hours use an implicit multiplier of 1.0. No rounding is applied
/// here; results are exact Decimal products. The rate table is not
/// validated (policy correctness is the settings layer's contract), so
/// negative inputs simply propagate.
pub(crate) fn convert(hours: &BucketHours, rate_table: &RateTable) -> BucketAmounts {
    let base = rate_table.base_per_hour;
    let m = &rate_table.multipliers;
    BucketAmounts {
        regular: hours.regular * base,
        workday_ot: hours.workday_ot * base * m.workday,
        rest_day_ot: hours.rest_day_ot * base * m.rest_day,
        holiday_ot: hours.holiday_ot * base * m.holiday,
    }
}

/// Converts bucket hours into the four currency amounts plus their total.
///
/// Returned in bucket order: regular, workday OT, rest-day OT, holiday OT,
/// total.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::convert_to_amounts;
/// use compensation_engine::config::RateTable;
/// use compensation_engine::models::{BucketHours, PayBucket};
/// use rust_decimal::Decimal;
///
/// let mut hours = BucketHours::default();
/// hours.add(PayBucket::Regular, Decimal::new(8, 0));
/// hours.add(PayBucket::WorkdayOvertime, Decimal::new(1, 0));
///
/// let (reg, wot, rot, hot, total) = convert_to_amounts(&hours, &RateTable::demo());
/// assert_eq!(reg, Decimal::new(240, 0));
/// assert_eq!(wot, Decimal::new(450, 1)); // 45.0
/// assert_eq!(rot, Decimal::ZERO);
/// assert_eq!(hot, Decimal::ZERO);
/// assert_eq!(total, Decimal::new(285, 0));
/// ```
pub fn convert_to_amounts(
    hours: &BucketHours,
    rate_table: &RateTable,
) -> (Decimal, Decimal, Decimal, Decimal, Decimal) {
    let amounts = convert(hours, rate_table);
    (
        amounts.regular,
        amounts.workday_ot,
        amounts.rest_day_ot,
        amounts.holiday_ot,
        amounts.total(),
    )
}

/// Rounds a currency amount half-to-even at two decimal places.
///
/// # Example
///
/// ```
/// use compensation_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("2.125").unwrap()), Decimal::from_str("2.12").unwrap());
/// assert_eq!(round_money(Decimal::from_str("2.135").unwrap()), Decimal::from_str("2.14").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}
