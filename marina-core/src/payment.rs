use async_trait::async_trait;
use chrono::{DateTime, Utc};
use marina_shared::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    RequiresPaymentMethod,
    Processing,
    Succeeded,
    Failed,
}

/// A provider-side record of an attempted charge for one reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntent {
    /// Provider's id (e.g. sim_pi_...).
    pub id: String,
    pub reservation_id: Uuid,
    pub amount: Money,
    pub currency: String,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

pub type PaymentResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Seam to the payment provider. The booking engine only opens an intent
/// for a reservation's captured total and asks for its outcome; everything
/// else (3DS, capture, refunds) is the provider's business.
#[async_trait]
pub trait PaymentAdapter: Send + Sync {
    /// Open an intent for the reservation's total.
    async fn create_intent(
        &self,
        reservation_id: Uuid,
        amount: Money,
        currency: &str,
    ) -> PaymentResult<PaymentIntent>;

    /// Resolve an intent to a terminal outcome.
    async fn resolve_intent(&self, intent_id: &str) -> PaymentResult<PaymentStatus>;
}
