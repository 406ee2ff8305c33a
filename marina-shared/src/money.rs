/// Amounts are whole currency units in a single fixed currency.
pub type Money = i64;

/// The marketplace trades in one currency only.
pub const CURRENCY: &str = "EUR";

/// Round a non-negative amount to the nearest whole unit, halves up.
/// Percentage-derived charges (service fee, flexible-cancellation
/// surcharge) are rounded exactly once through here, never accumulated
/// from rounded sub-parts.
pub fn round_half_up(amount: f64) -> Money {
    (amount + 0.5).floor() as Money
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_halves_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(36.0), 36);
        assert_eq!(round_half_up(0.0), 0);
    }
}
