use std::{collections::BTreeMap, sync::LazyLock};

use log::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::SolarisApiError;

static CURRENCY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+):(\d*\.*\d+)").expect("currency pattern is a valid regex"));

/// Exchange rates published by the storefront, keyed by currency code. Every rate is expressed in USD per unit of the
/// currency and is strictly positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable {
    rates: BTreeMap<String, f64>,
}

impl CurrencyTable {
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Converts `amount` of `from` into `to`. `None` if either currency is unknown.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        let from = self.rate(from)?;
        let to = self.rate(to)?;
        Some(amount * from / to)
    }

    pub fn into_inner(self) -> BTreeMap<String, f64> {
        self.rates
    }
}

/// Parses a rate as it appears in `currencies.js`, where values below one drop the leading zero (`.808357`).
/// Returns `None` for anything that is not a positive number.
pub fn parse_currency_rate(rate: &str) -> Option<f64> {
    let parsed = if rate.starts_with('.') { format!("0{rate}").parse::<f64>() } else { rate.parse::<f64>() };
    match parsed {
        Ok(r) if r > 0.0 && r.is_finite() => Some(r),
        Ok(r) => {
            debug!("Ignoring non-positive currency rate {r}");
            None
        },
        Err(e) => {
            debug!("Ignoring unparseable currency rate '{rate}'. {e}");
            None
        },
    }
}

/// Extracts every `CODE:rate` pair from the currency script.
///
/// Entries whose rate cannot be parsed are skipped. If the text contains no pairs at all, the result is
/// [`SolarisApiError::NotFoundOrEmpty`].
pub fn parse_currency_table(text: &str) -> Result<CurrencyTable, SolarisApiError> {
    let mut matched = 0usize;
    let mut rates = BTreeMap::new();
    for c in CURRENCY_RE.captures_iter(text) {
        matched += 1;
        if let Some(rate) = parse_currency_rate(&c[2]) {
            rates.insert(c[1].to_string(), rate);
        }
    }
    if matched == 0 {
        return Err(SolarisApiError::NotFoundOrEmpty("no currencies found".to_string()));
    }
    debug!("Parsed {} of {matched} currency rates", rates.len());
    Ok(CurrencyTable { rates })
}
