pub mod calculator;
pub mod models;
pub mod summary;

pub use calculator::{quote, QuoteError};
pub use models::{BookingSelections, Quote};
pub use summary::{QuoteLine, QuoteSummary};
