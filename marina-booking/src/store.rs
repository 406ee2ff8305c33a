use crate::models::{Reservation, ReservationStatus};
use async_trait::async_trait;
use chrono::NaiveDate;
use marina_catalog::BlockedInterval;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("reservation not found: {0}")]
    NotFound(Uuid),

    #[error("boat {boat_id} already has a reservation between {start} and {end}")]
    Conflict {
        boat_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Where reservations live. The insert is the authoritative availability
/// decision: an implementation must accept at most one non-cancelled
/// reservation per overlapping date range per boat, atomically, and answer
/// a losing insert with `Conflict`. Callers never assume success until the
/// id comes back.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn insert(&self, reservation: Reservation) -> Result<Uuid, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Reservation, StoreError>;

    async fn update_status(&self, id: Uuid, status: ReservationStatus) -> Result<(), StoreError>;

    async fn set_payment_intent(&self, id: Uuid, intent_id: String) -> Result<(), StoreError>;

    /// Occupied spans for a boat, for refreshing the calendar after a
    /// conflict or a successful creation.
    async fn blocked_intervals(&self, boat_id: Uuid) -> Vec<BlockedInterval>;
}

/// HashMap-backed store. The overlap scan and the insert run under one
/// write lock, which is what makes the arbitration atomic when two renters
/// race for the same dates.
pub struct InMemoryReservationStore {
    reservations: RwLock<HashMap<Uuid, Reservation>>,
}

impl InMemoryReservationStore {
    pub fn new() -> Self {
        Self {
            reservations: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReservationStore for InMemoryReservationStore {
    async fn insert(&self, reservation: Reservation) -> Result<Uuid, StoreError> {
        let mut reservations = self.reservations.write().await;

        // Cancelled rows do not occupy dates; their span is immediately
        // bookable again.
        let taken = reservations.values().any(|existing| {
            existing.boat_id == reservation.boat_id
                && existing.status != ReservationStatus::Cancelled
                && existing.date_range.overlaps(&reservation.date_range)
        });
        if taken {
            return Err(StoreError::Conflict {
                boat_id: reservation.boat_id,
                start: reservation.date_range.start,
                end: reservation.date_range.end,
            });
        }

        let id = reservation.id;
        reservations.insert(id, reservation);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Reservation, StoreError> {
        self.reservations
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_status(&self, id: Uuid, status: ReservationStatus) -> Result<(), StoreError> {
        let mut reservations = self.reservations.write().await;
        let reservation = reservations.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        reservation.update_status(status);
        Ok(())
    }

    async fn set_payment_intent(&self, id: Uuid, intent_id: String) -> Result<(), StoreError> {
        let mut reservations = self.reservations.write().await;
        let reservation = reservations.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        reservation.payment_intent_id = Some(intent_id);
        Ok(())
    }

    async fn blocked_intervals(&self, boat_id: Uuid) -> Vec<BlockedInterval> {
        self.reservations
            .read()
            .await
            .values()
            .filter(|r| r.boat_id == boat_id && r.status != ReservationStatus::Cancelled)
            .map(|r| BlockedInterval::from(r.date_range))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marina_catalog::RentalType;
    use marina_offer::BookingSelections;
    use marina_shared::{DateRange, Masked};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
    }

    fn reservation(boat_id: Uuid, start: u32, end: u32) -> Reservation {
        let date_range = DateRange::new(d(start), d(end)).unwrap();
        let selections = BookingSelections {
            date_range,
            guests: 2,
            rental_type: RentalType::BoatOnly,
            flexible_cancellation: false,
            captain: false,
            fuel: false,
            contact_phone: Masked::new("0612345678".to_string()),
            children_count: 0,
            nautical_cv: None,
            confirmed: true,
        };
        let mut r = Reservation::new(boat_id, "renter@example.com".to_string(), selections, 336);
        r.update_status(ReservationStatus::PendingPayment);
        r
    }

    #[tokio::test]
    async fn overlapping_insert_conflicts() {
        let store = InMemoryReservationStore::new();
        let boat_id = Uuid::new_v4();

        store.insert(reservation(boat_id, 10, 13)).await.unwrap();
        let err = store.insert(reservation(boat_id, 12, 15)).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict { .. }));
    }

    #[tokio::test]
    async fn adjacent_insert_is_accepted() {
        let store = InMemoryReservationStore::new();
        let boat_id = Uuid::new_v4();

        store.insert(reservation(boat_id, 10, 13)).await.unwrap();
        // Check-in on the earlier booking's checkout day.
        store.insert(reservation(boat_id, 13, 15)).await.unwrap();
    }

    #[tokio::test]
    async fn other_boats_are_unaffected() {
        let store = InMemoryReservationStore::new();
        store
            .insert(reservation(Uuid::new_v4(), 10, 13))
            .await
            .unwrap();
        store
            .insert(reservation(Uuid::new_v4(), 10, 13))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn cancelled_reservations_free_their_dates() {
        let store = InMemoryReservationStore::new();
        let boat_id = Uuid::new_v4();

        let id = store.insert(reservation(boat_id, 10, 13)).await.unwrap();
        store
            .update_status(id, ReservationStatus::Cancelled)
            .await
            .unwrap();

        store.insert(reservation(boat_id, 11, 14)).await.unwrap();
        assert_eq!(store.blocked_intervals(boat_id).await.len(), 1);
    }

    #[tokio::test]
    async fn racing_inserts_admit_exactly_one_winner() {
        let store = std::sync::Arc::new(InMemoryReservationStore::new());
        let boat_id = Uuid::new_v4();

        let first = {
            let store = store.clone();
            tokio::spawn(async move { store.insert(reservation(boat_id, 10, 13)).await })
        };
        let second = {
            let store = store.clone();
            tokio::spawn(async move { store.insert(reservation(boat_id, 11, 14)).await })
        };

        let outcomes = [first.await.unwrap(), second.await.unwrap()];
        let winners = outcomes.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
    }
}
