//! Currency display formatting and masked digit entry.
//!
//! Display formatting rounds to two decimal places and groups thousands
//! with commas. Masked entry interprets a run of typed digits as cents, the
//! way a point-of-sale amount field fills from the right: `"1"` → `0.01`,
//! `"1425"` → `14.25`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount for display, e.g. `1234.5` → `"1,234.50"`.
///
/// Rounds half-up (away from zero) to two decimal places and keeps the
/// sign for negative amounts.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let unsigned = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));

    let mut out = String::with_capacity(unsigned.len() + int_part.len() / 3 + 1);
    if rounded < Decimal::ZERO {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);
    out
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Interprets masked digit entry as an amount in cents.
///
/// Every non-digit character is dropped first, so already-formatted text
/// such as `"$1,234.56"` parses back to `1234.56`. No digits at all (or a
/// digit run too long to be a currency amount) normalizes to zero.
pub fn digits_to_amount(text: &str) -> Decimal {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    match digits.parse::<i64>() {
        Ok(cents) => Decimal::new(cents, 2),
        Err(e) => {
            tracing::warn!(input = %text, "digit run is not a currency amount: {}", e);
            Decimal::ZERO
        }
    }
}
