use marina_shared::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Commission applied when a listing carries no usable fee percentage.
pub const DEFAULT_SERVICE_FEE_PCT: f64 = 0.12;

/// Mode of a rental. Each mode carries a flat surcharge per booking,
/// independent of trip length; only the flexible-cancellation term scales
/// with trip cost.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalType {
    BoatOnly,
    WithCaptain,
    OwnerOnboard,
}

impl RentalType {
    pub fn surcharge(&self) -> Money {
        match self {
            RentalType::BoatOnly => 0,
            RentalType::WithCaptain => 200,
            RentalType::OwnerOnboard => 150,
        }
    }
}

/// Whether the base price covers one night or one charter week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriceUnit {
    Day,
    Week,
}

/// An optional add-on the owner may offer. A renter selecting an extra
/// that is not enabled is never charged for it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ExtraConfig {
    pub enabled: bool,
    pub price: Money,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Extras {
    pub captain: ExtraConfig,
    pub fuel: ExtraConfig,
}

/// Per-boat pricing configuration, owned by the listing service and
/// immutable for the duration of a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub base_price: Money,
    pub price_unit: PriceUnit,
    pub capacity: i32,
    pub allows_flexible_cancellation: bool,
    /// Empty list means every rental type is accepted.
    pub allowed_rental_types: Vec<RentalType>,
    pub extras: Extras,
    /// Raw configured value; read it through `normalized_service_fee_pct`.
    pub service_fee_pct: Option<f64>,
}

impl PricingConfig {
    /// Normalizes the configured fee percentage. Values in `[0, 1]` are
    /// used as-is; values in `(1, 100)` are whole-number percentages and
    /// divided by 100; anything else (unset, negative, >= 100) falls back
    /// to [`DEFAULT_SERVICE_FEE_PCT`]. This governs real money, so the
    /// rules are exact.
    pub fn normalized_service_fee_pct(&self) -> f64 {
        match self.service_fee_pct {
            Some(pct) if (0.0..=1.0).contains(&pct) => pct,
            Some(pct) if pct > 1.0 && pct < 100.0 => pct / 100.0,
            _ => DEFAULT_SERVICE_FEE_PCT,
        }
    }

    pub fn allows_rental_type(&self, rental_type: RentalType) -> bool {
        self.allowed_rental_types.is_empty() || self.allowed_rental_types.contains(&rental_type)
    }
}

/// A boat as the listing service hands it to the booking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoatListing {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub pricing: PricingConfig,
}
