pub mod availability;
pub mod listing;

pub use availability::{AvailabilityChecker, BlockedInterval, InvalidInterval};
pub use listing::{
    BoatListing, ExtraConfig, Extras, PriceUnit, PricingConfig, RentalType,
    DEFAULT_SERVICE_FEE_PCT,
};
