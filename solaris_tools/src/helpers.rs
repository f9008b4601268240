use serde::{Deserialize, Deserializer};

use crate::SolarisApiError;

/// Shopify uses floating point number expressed as strings. Returns the amount in cents.
pub fn parse_shopify_price(price: &str) -> Result<i64, SolarisApiError> {
    let invalid = |e: String| SolarisApiError::InvalidCurrencyAmount(format!("Invalid price value: {price}. {e}"));
    let trimmed = price.trim();
    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed),
    };
    if unsigned.starts_with(['-', '+']) {
        return Err(invalid("more than one sign".to_string()));
    }
    let mut parts = unsigned.splitn(2, '.');
    let whole_units = parts.next().unwrap_or_default().parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    let cents = match parts.next() {
        None | Some("") => 0,
        Some(frac) if frac.len() <= 2 && frac.chars().all(|c| c.is_ascii_digit()) => {
            let scale = if frac.len() == 1 { 10 } else { 1 };
            frac.parse::<i64>().map_err(|e| invalid(e.to_string()))? * scale
        },
        Some(frac) => return Err(invalid(format!("'{frac}' is not a valid fraction of a unit"))),
    };
    Ok(sign * (100 * whole_units + cents))
}

/// The product feed sends `null` for unset strings and numbers. Treat those the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
