use crate::models::{BookingSelections, Quote};
use marina_catalog::RentalType;
use marina_shared::Money;
use serde::{Deserialize, Serialize};

/// One row of the displayed price breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteLine {
    pub label: String,
    pub amount: Money,
}

/// Displayable projection of a quote. No business logic: every amount is
/// lifted verbatim from the quote, optional zero-amount lines are simply
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSummary {
    pub lines: Vec<QuoteLine>,
    pub total: Money,
}

impl QuoteSummary {
    pub fn from_quote(quote: &Quote, selections: &BookingSelections) -> Self {
        let mut lines = vec![QuoteLine {
            label: if quote.billed_units == quote.nights {
                format!("Base price ({} nights)", quote.nights)
            } else {
                format!("Base price ({} weeks)", quote.billed_units)
            },
            amount: quote.base,
        }];

        if quote.rental_surcharge > 0 {
            let label = match selections.rental_type {
                RentalType::WithCaptain => "Captain",
                RentalType::OwnerOnboard => "Owner on board",
                RentalType::BoatOnly => "Rental type",
            };
            lines.push(QuoteLine {
                label: label.to_string(),
                amount: quote.rental_surcharge,
            });
        }

        if quote.extras_total > 0 {
            lines.push(QuoteLine {
                label: "Extras".to_string(),
                amount: quote.extras_total,
            });
        }

        lines.push(QuoteLine {
            label: "Service fee".to_string(),
            amount: quote.service_fee,
        });

        if quote.flexible_surcharge > 0 {
            lines.push(QuoteLine {
                label: "Flexible cancellation".to_string(),
                amount: quote.flexible_surcharge,
            });
        }

        Self {
            lines,
            total: quote.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::quote;
    use chrono::NaiveDate;
    use marina_catalog::{Extras, PriceUnit, PricingConfig};
    use marina_shared::{DateRange, Masked};

    fn fixtures() -> (PricingConfig, BookingSelections) {
        let config = PricingConfig {
            base_price: 100,
            price_unit: PriceUnit::Day,
            capacity: 6,
            allows_flexible_cancellation: true,
            allowed_rental_types: vec![],
            extras: Extras::default(),
            service_fee_pct: None,
        };
        let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let selections = BookingSelections {
            date_range: DateRange::new(start, end).unwrap(),
            guests: 4,
            rental_type: RentalType::WithCaptain,
            flexible_cancellation: true,
            captain: false,
            fuel: false,
            contact_phone: Masked::new("0612345678".to_string()),
            children_count: 1,
            nautical_cv: None,
            confirmed: true,
        };
        (config, selections)
    }

    #[test]
    fn lines_mirror_the_quote() {
        let (config, selections) = fixtures();
        let q = quote(&config, &selections).unwrap();
        let summary = QuoteSummary::from_quote(&q, &selections);

        let labels: Vec<&str> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Base price (3 nights)",
                "Captain",
                "Service fee",
                "Flexible cancellation"
            ]
        );
        assert_eq!(summary.total, q.total);
        let sum: Money = summary.lines.iter().map(|l| l.amount).sum();
        assert_eq!(sum, summary.total);
    }

    #[test]
    fn zero_amount_optional_lines_are_omitted() {
        let (config, mut selections) = fixtures();
        selections.rental_type = RentalType::BoatOnly;
        selections.flexible_cancellation = false;
        let q = quote(&config, &selections).unwrap();
        let summary = QuoteSummary::from_quote(&q, &selections);
        let labels: Vec<&str> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Base price (3 nights)", "Service fee"]);
    }

    #[test]
    fn summary_serializes_for_the_ui() {
        let (config, selections) = fixtures();
        let q = quote(&config, &selections).unwrap();
        let summary = QuoteSummary::from_quote(&q, &selections);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], q.total);
        assert_eq!(json["lines"][0]["label"], "Base price (3 nights)");
    }
}
