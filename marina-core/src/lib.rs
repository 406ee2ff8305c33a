pub mod payment;

pub use payment::{PaymentAdapter, PaymentIntent, PaymentResult, PaymentStatus};
