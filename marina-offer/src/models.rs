use marina_catalog::RentalType;
use marina_shared::{DateRange, Masked, Money};
use serde::{Deserialize, Serialize};

/// Everything the renter has chosen in the booking flow. Mutated only by
/// the renter while the form is open; once a reservation is created, the
/// stored snapshot becomes the source of truth and this value is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSelections {
    pub date_range: DateRange,
    pub guests: i32,
    pub rental_type: RentalType,
    pub flexible_cancellation: bool,
    /// Requested extras. Charged only when the listing enables them.
    pub captain: bool,
    pub fuel: bool,
    pub contact_phone: Masked<String>,
    pub children_count: i32,
    pub nautical_cv: Option<String>,
    /// Final "I confirm this booking" acknowledgment.
    pub confirmed: bool,
}

/// Itemized price breakdown. Derived and immutable: recomputed from the
/// pricing configuration and selections on every render, never cached, so
/// a mid-session configuration change cannot leave a stale price on
/// screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub nights: i64,
    /// Nights for day-priced boats, ceil(nights / 7) for week-priced ones.
    pub billed_units: i64,
    pub base: Money,
    pub rental_surcharge: Money,
    pub extras_total: Money,
    pub service_fee: Money,
    pub flexible_surcharge: Money,
    pub total: Money,
}
