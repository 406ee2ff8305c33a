use chrono::{DateTime, Utc};
use marina_offer::BookingSelections;
use marina_shared::{DateRange, Money};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation status in the lifecycle. `Confirmed` and `Cancelled` are
/// terminal: no transition leaves them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    /// Client-side only; an abandoned draft leaves no trace in the store.
    Draft,
    PendingPayment,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Confirmed | ReservationStatus::Cancelled)
    }
}

/// A booking request driven through payment to a terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub boat_id: Uuid,
    pub renter_id: String,
    pub date_range: DateRange,
    /// Snapshot of what the renter chose at submission time.
    pub selections: BookingSelections,
    pub status: ReservationStatus,
    /// Captured from the quote when the reservation was created and never
    /// recomputed, so a later price change on the boat cannot touch it.
    pub total_amount: Money,
    pub payment_intent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(
        boat_id: Uuid,
        renter_id: String,
        selections: BookingSelections,
        total_amount: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            boat_id,
            renter_id,
            date_range: selections.date_range,
            selections,
            status: ReservationStatus::Draft,
            total_amount,
            payment_intent_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, new_status: ReservationStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(!ReservationStatus::Draft.is_terminal());
        assert!(!ReservationStatus::PendingPayment.is_terminal());
        assert!(ReservationStatus::Confirmed.is_terminal());
        assert!(ReservationStatus::Cancelled.is_terminal());
    }

    #[test]
    fn status_wire_format() {
        let json = serde_json::to_string(&ReservationStatus::PendingPayment).unwrap();
        assert_eq!(json, "\"PENDING_PAYMENT\"");
    }
}
