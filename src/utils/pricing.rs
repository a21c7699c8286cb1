//! Event price labels
//!
//! Reduces the ticket categories of an event to a single label shown on
//! cards and detail pages.

use crate::models::TicketCategory;

/// Literal prefix put in front of every amount
pub const CURRENCY_PREFIX: &str = "Php";

/// Label used when nothing costs money
pub const FREE_LABEL: &str = "Free";

/// Format an amount with the currency prefix and two decimals
pub fn format_amount(amount: f64) -> String {
    format!("{} {:.2}", CURRENCY_PREFIX, amount)
}

/// Price label for an event's ticket categories
pub fn price_display(categories: &[TicketCategory]) -> String {
    price_display_for(categories.iter().map(|c| c.price))
}

/// Price label for a list of raw prices.
///
/// Non-finite values are ignored, an empty list is free.
pub fn price_display_for<I>(prices: I) -> String
where
    I: IntoIterator<Item = f64>,
{
    let mut bounds: Option<(f64, f64)> = None;
    for price in prices.into_iter().filter(|p| p.is_finite()) {
        bounds = Some(match bounds {
            None => (price, price),
            Some((min, max)) => (min.min(price), max.max(price)),
        });
    }

    let Some((min, max)) = bounds else {
        return FREE_LABEL.to_string();
    };

    if max == 0.0 {
        return FREE_LABEL.to_string();
    }
    if min == max {
        return format_amount(min);
    }
    if min == 0.0 {
        return format!("{} - {}", FREE_LABEL, format_amount(max));
    }
    format!("{} - {:.2}", format_amount(min), max)
}

/// Label for a single ticket category
pub fn ticket_price_label(price: f64) -> String {
    if price == 0.0 {
        FREE_LABEL.to_string()
    } else {
        format_amount(price)
    }
}
