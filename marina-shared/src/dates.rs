use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A span of calendar dates: check-in on `start`, check-out on `end`.
/// Date-only, no time component. For overlap purposes the range is
/// half-open at the end, so a rental may start on the day another one
/// checks out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns `None` for inverted or zero-night ranges.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Number of nights spanned. Positive for any range built via `new`.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Half-open overlap test: `[s1, e1)` and `[s2, e2)` overlap iff
    /// `s1 < e2 && s2 < e1`. Adjacent ranges do not overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `date` is an occupied night of this range. The end date is
    /// excluded: it is checkout day, not an occupied night.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }
}
