//! Price estimation for a booking time range.

use rust_decimal::{Decimal, RoundingStrategy};

use super::{HourlyRate, TimeRange};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Estimated cost of a booking.
///
/// Derived on every input change and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceQuote {
    pub duration_hours: Decimal,
    pub rate_per_hour: Decimal,
    /// Rounded to two decimal places
    pub total: Decimal,
}

impl PriceQuote {
    /// Price `range` at `rate`.
    ///
    /// Returns `None` only if the product does not fit in a `Decimal`.
    pub fn calculate(range: &TimeRange, rate: HourlyRate) -> Option<Self> {
        let duration_hours =
            Decimal::from(range.duration_millis()).checked_div(Decimal::from(MILLIS_PER_HOUR))?;
        let total = duration_hours
            .checked_mul(rate.value())?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Some(Self {
            duration_hours,
            rate_per_hour: rate.value(),
            total,
        })
    }

    /// Total with exactly two fractional digits, e.g. `"250.00"`.
    pub fn display_total(&self) -> String {
        let mut total = self.total;
        total.rescale(2);
        total.to_string()
    }
}
