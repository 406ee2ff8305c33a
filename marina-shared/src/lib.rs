pub mod dates;
pub mod money;
pub mod pii;

pub use dates::DateRange;
pub use money::{round_half_up, Money, CURRENCY};
pub use pii::Masked;
