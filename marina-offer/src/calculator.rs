use crate::models::{BookingSelections, Quote};
use marina_catalog::{PriceUnit, PricingConfig};
use marina_shared::{round_half_up, Money};

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("invalid date range: {nights} nights")]
    InvalidRange { nights: i64 },
}

/// Computes the itemized quote for one set of selections against a boat's
/// pricing configuration. Pure and stateless; the pre-booking widget and
/// the full booking page both call this, so the two screens cannot
/// disagree on price.
///
/// The steps run in a fixed order: the service fee is a percentage of the
/// post-surcharge, pre-flexible-surcharge subtotal, and the
/// flexible-cancellation surcharge is 10% of the base alone. Rental-type
/// surcharges are flat amounts that do not scale with trip length.
pub fn quote(config: &PricingConfig, selections: &BookingSelections) -> Result<Quote, QuoteError> {
    let nights = selections.date_range.nights();
    if nights <= 0 {
        return Err(QuoteError::InvalidRange { nights });
    }

    let billed_units = match config.price_unit {
        PriceUnit::Day => nights,
        PriceUnit::Week => (nights + 6) / 7,
    };
    let base = config.base_price * billed_units;

    // Extras the listing has not enabled are silently ignored, never
    // charged: the booking UI only shows them when enabled.
    let mut extras_total: Money = 0;
    if selections.captain && config.extras.captain.enabled {
        extras_total += config.extras.captain.price;
    }
    if selections.fuel && config.extras.fuel.enabled {
        extras_total += config.extras.fuel.price;
    }

    // A disallowed rental type is the validator's problem, upstream of
    // here; the calculator charges whatever type was selected.
    let rental_surcharge = selections.rental_type.surcharge();

    let fee_subtotal = base + extras_total + rental_surcharge;
    let service_fee = round_half_up(config.normalized_service_fee_pct() * fee_subtotal as f64);

    // 10% of the base alone, outside the service-fee subtotal.
    let flexible_surcharge = if selections.flexible_cancellation {
        round_half_up(0.10 * base as f64)
    } else {
        0
    };

    Ok(Quote {
        nights,
        billed_units,
        base,
        rental_surcharge,
        extras_total,
        service_fee,
        flexible_surcharge,
        total: fee_subtotal + service_fee + flexible_surcharge,
    })
}
