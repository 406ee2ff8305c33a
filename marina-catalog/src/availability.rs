use chrono::NaiveDate;
use marina_shared::DateRange;
use serde::{Deserialize, Serialize};

/// A span of dates a boat cannot be booked for: either the past-dates
/// barrier or an existing reservation's occupied nights. Sourced from the
/// availability service per boat; read-only here. End-exclusive, like
/// [`DateRange`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlockedInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
#[error("blocked interval start {start} is not before end {end}")]
pub struct InvalidInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl BlockedInterval {
    /// Intervals come off the wire; reject inverted or empty ones.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidInterval> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(InvalidInterval { start, end })
        }
    }

    pub fn overlaps(&self, range: &DateRange) -> bool {
        self.start < range.end && range.start < self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}

impl From<DateRange> for BlockedInterval {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Advisory availability check over a listing's blocked calendar.
///
/// "Today" is injected rather than read from the clock, so checks are
/// deterministic under test. The client-side answer is advisory only; the
/// reservation store makes the authoritative call at insert time.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityChecker {
    today: NaiveDate,
}

impl AvailabilityChecker {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// A candidate range is available iff it starts today or later and
    /// overlaps no blocked interval. Starting exactly on another booking's
    /// end date is allowed (same-day checkout/check-in).
    pub fn is_available(&self, range: &DateRange, blocked: &[BlockedInterval]) -> bool {
        if range.start < self.today {
            return false;
        }
        !blocked.iter().any(|interval| interval.overlaps(range))
    }

    /// Predicate for disabling calendar cells: past dates and occupied
    /// nights. A blocked interval's end date stays selectable so the
    /// renter can check in on someone else's checkout day.
    pub fn disabled_predicate<'a>(
        &self,
        blocked: &'a [BlockedInterval],
    ) -> impl Fn(NaiveDate) -> bool + 'a {
        let today = self.today;
        move |date| date < today || blocked.iter().any(|interval| interval.contains(date))
    }
}
