use async_trait::async_trait;
use chrono::Utc;
use marina_core::payment::{PaymentAdapter, PaymentIntent, PaymentResult, PaymentStatus};
use marina_shared::{Money, CURRENCY};
use std::sync::Arc;
use uuid::Uuid;

/// Fronts the payment adapter for the booking flow. One seam where a real
/// gateway would be selected; the demo wiring uses the simulator below.
pub struct PaymentOrchestrator {
    adapter: Arc<dyn PaymentAdapter>,
}

impl PaymentOrchestrator {
    pub fn new(adapter: Arc<dyn PaymentAdapter>) -> Self {
        Self { adapter }
    }

    /// Open an intent for a reservation's captured total.
    pub async fn open_intent(
        &self,
        reservation_id: Uuid,
        amount: Money,
    ) -> PaymentResult<PaymentIntent> {
        self.adapter.create_intent(reservation_id, amount, CURRENCY).await
    }

    /// Ask the provider for the intent's outcome.
    pub async fn resolve(&self, intent_id: &str) -> PaymentResult<PaymentStatus> {
        self.adapter.resolve_intent(intent_id).await
    }
}

/// Test/demo gateway: an opaque oracle that answers every resolve with a
/// scripted outcome. No card data, no network.
pub struct SimulatedPaymentGateway {
    succeed: bool,
}

impl SimulatedPaymentGateway {
    pub fn succeeding() -> Self {
        Self { succeed: true }
    }

    pub fn failing() -> Self {
        Self { succeed: false }
    }
}

#[async_trait]
impl PaymentAdapter for SimulatedPaymentGateway {
    async fn create_intent(
        &self,
        reservation_id: Uuid,
        amount: Money,
        currency: &str,
    ) -> PaymentResult<PaymentIntent> {
        Ok(PaymentIntent {
            // Reservation id baked into the intent id so the simulator
            // needs no storage of its own.
            id: format!("sim_pi_{}", reservation_id.simple()),
            reservation_id,
            amount,
            currency: currency.to_string(),
            status: PaymentStatus::RequiresPaymentMethod,
            created_at: Utc::now(),
        })
    }

    async fn resolve_intent(&self, _intent_id: &str) -> PaymentResult<PaymentStatus> {
        Ok(if self.succeed {
            PaymentStatus::Succeeded
        } else {
            PaymentStatus::Failed
        })
    }
}
