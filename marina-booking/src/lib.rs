pub mod manager;
pub mod models;
pub mod orchestrator;
pub mod store;
pub mod validator;

pub use manager::{BookingError, ReservationManager};
pub use models::{Reservation, ReservationStatus};
pub use orchestrator::{PaymentOrchestrator, SimulatedPaymentGateway};
pub use store::{InMemoryReservationStore, ReservationStore, StoreError};
pub use validator::{validate, FieldError, ValidationError};
