use rust_decimal::Decimal;

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a price field, falling back to zero.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
/// Empty or whitespace-only input is treated as 0.
/// Unparseable or negative input is normalized to 0 with a logged warning,
/// so invalid text can never reach the document.
pub fn parse_amount_or_zero(s: &str) -> Decimal {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    match normalized.parse::<Decimal>() {
        Ok(value) if value >= Decimal::ZERO => value,
        Ok(value) => {
            tracing::warn!(input = %s, amount = %value, "negative amount normalized to zero");
            Decimal::ZERO
        }
        Err(e) => {
            tracing::warn!(input = %s, "invalid amount normalized to zero: {}", e);
            Decimal::ZERO
        }
    }
}

/// Parses a quantity field, falling back to one.
///
/// Positive decimal quantities pass through unchanged. Empty input resets
/// to 1; unparseable, zero, or negative input is normalized to 1 with a
/// logged warning.
pub fn parse_quantity_or_one(s: &str) -> Decimal {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Decimal::ONE;
    }
    match trimmed.parse::<Decimal>() {
        Ok(value) if value > Decimal::ZERO => value,
        Ok(value) => {
            tracing::warn!(input = %s, quantity = %value, "non-positive quantity reset to one");
            Decimal::ONE
        }
        Err(e) => {
            tracing::warn!(input = %s, "invalid quantity normalized to one: {}", e);
            Decimal::ONE
        }
    }
}
