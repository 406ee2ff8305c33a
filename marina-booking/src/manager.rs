use crate::models::{Reservation, ReservationStatus};
use crate::orchestrator::PaymentOrchestrator;
use crate::store::{ReservationStore, StoreError};
use crate::validator::{self, ValidationError};
use chrono::NaiveDate;
use marina_catalog::{AvailabilityChecker, BlockedInterval, PricingConfig};
use marina_core::payment::PaymentStatus;
use marina_offer::{quote, BookingSelections, QuoteError};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("invalid date range: {nights} nights")]
    InvalidRange { nights: i64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Raised when the store (not the advisory client check) refuses the
    /// dates. The caller must refetch blocked intervals and re-prompt.
    #[error("the requested dates are no longer available")]
    DatesUnavailable,

    /// The reservation stays `PendingPayment`; retrying is up to the user.
    #[error("payment failed for reservation {0}")]
    PaymentFailed(Uuid),

    #[error("reservation {0} has no payment intent to settle")]
    MissingPaymentIntent(Uuid),

    #[error("reservation not found: {0}")]
    NotFound(Uuid),

    #[error("invalid state transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: ReservationStatus,
        to: ReservationStatus,
    },
}

impl From<StoreError> for BookingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => BookingError::NotFound(id),
            StoreError::Conflict { .. } => BookingError::DatesUnavailable,
        }
    }
}

impl From<QuoteError> for BookingError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::InvalidRange { nights } => BookingError::InvalidRange { nights },
        }
    }
}

/// Drives a reservation from selections through payment to a terminal
/// state. Every transition funnels through here and invalid ones are
/// rejected outright, instead of trusting the UI to hide the wrong
/// buttons.
pub struct ReservationManager {
    store: Arc<dyn ReservationStore>,
    payments: PaymentOrchestrator,
}

impl ReservationManager {
    pub fn new(store: Arc<dyn ReservationStore>, payments: PaymentOrchestrator) -> Self {
        Self { store, payments }
    }

    /// Validator gate, advisory availability gate, quote, then the
    /// authoritative insert (Draft → PendingPayment). The total is
    /// captured from the quote here and never recomputed. A store conflict
    /// surfaces as `DatesUnavailable` and produces no reservation;
    /// `blocked_intervals` gives the refreshed calendar to re-prompt with.
    pub async fn create(
        &self,
        boat_id: Uuid,
        renter_id: &str,
        config: &PricingConfig,
        blocked: &[BlockedInterval],
        selections: BookingSelections,
        today: NaiveDate,
    ) -> Result<Reservation, BookingError> {
        validator::validate(config, &selections)?;

        let checker = AvailabilityChecker::new(today);
        if !checker.is_available(&selections.date_range, blocked) {
            return Err(BookingError::DatesUnavailable);
        }

        let priced = quote(config, &selections)?;
        let mut reservation =
            Reservation::new(boat_id, renter_id.to_string(), selections, priced.total);
        reservation.update_status(ReservationStatus::PendingPayment);

        let id = self.store.insert(reservation).await?;

        let intent = self
            .payments
            .open_intent(id, priced.total)
            .await
            .map_err(|_| BookingError::PaymentFailed(id))?;
        self.store.set_payment_intent(id, intent.id).await?;

        tracing::info!(
            reservation_id = %id,
            boat_id = %boat_id,
            total = priced.total,
            "reservation awaiting payment"
        );
        self.store.get(id).await.map_err(Into::into)
    }

    /// Apply a payment outcome. Success: PendingPayment → Confirmed.
    /// Failure: the reservation stays `PendingPayment` and the error is
    /// retryable; nothing is deleted.
    pub async fn simulate_payment_outcome(
        &self,
        id: Uuid,
        success: bool,
    ) -> Result<Reservation, BookingError> {
        let reservation = self.store.get(id).await?;
        if reservation.status != ReservationStatus::PendingPayment {
            return Err(BookingError::InvalidTransition {
                from: reservation.status,
                to: if success {
                    ReservationStatus::Confirmed
                } else {
                    ReservationStatus::Cancelled
                },
            });
        }

        if success {
            self.store
                .update_status(id, ReservationStatus::Confirmed)
                .await?;
            tracing::info!(reservation_id = %id, "reservation confirmed");
            self.store.get(id).await.map_err(Into::into)
        } else {
            tracing::warn!(reservation_id = %id, "simulated payment declined");
            Err(BookingError::PaymentFailed(id))
        }
    }

    /// Resolve the reservation's intent with the payment provider and
    /// apply the outcome.
    pub async fn settle_payment(&self, id: Uuid) -> Result<Reservation, BookingError> {
        let reservation = self.store.get(id).await?;
        let intent_id = reservation
            .payment_intent_id
            .as_deref()
            .ok_or(BookingError::MissingPaymentIntent(id))?;

        let status = self
            .payments
            .resolve(intent_id)
            .await
            .map_err(|_| BookingError::PaymentFailed(id))?;
        self.simulate_payment_outcome(id, status == PaymentStatus::Succeeded)
            .await
    }

    /// Owner's manual counterpart of a successful payment outcome.
    pub async fn owner_confirm(&self, id: Uuid) -> Result<Reservation, BookingError> {
        self.transition_from_pending(id, ReservationStatus::Confirmed)
            .await
    }

    /// Owner's manual cancellation of a pending reservation.
    pub async fn owner_cancel(&self, id: Uuid) -> Result<Reservation, BookingError> {
        self.transition_from_pending(id, ReservationStatus::Cancelled)
            .await
    }

    /// Occupied spans for the boat, straight from the store. Called after
    /// a conflict or a successful creation to refresh the calendar.
    pub async fn blocked_intervals(&self, boat_id: Uuid) -> Vec<BlockedInterval> {
        self.store.blocked_intervals(boat_id).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Reservation, BookingError> {
        self.store.get(id).await.map_err(Into::into)
    }

    async fn transition_from_pending(
        &self,
        id: Uuid,
        to: ReservationStatus,
    ) -> Result<Reservation, BookingError> {
        let reservation = self.store.get(id).await?;
        if reservation.status != ReservationStatus::PendingPayment {
            return Err(BookingError::InvalidTransition {
                from: reservation.status,
                to,
            });
        }
        self.store.update_status(id, to).await?;
        tracing::info!(reservation_id = %id, status = ?to, "owner transition applied");
        self.store.get(id).await.map_err(Into::into)
    }
}
