//! Currency codes, exchange-rate tables and the currency converter.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::decimal::DecimalValue;
use super::engine::PairConverter;
use super::error::ConversionError;
use super::record::PartitionKey;

/// Codes offered by the currency picker, in display order.
pub const MAJOR_CURRENCY_CODES: [&str; 32] = [
    "USD", "EUR", "JPY", "GBP", "CHF", "CAD", "AUD", "CNY", "HKD", "SGD", "SEK", "NOK", "DKK",
    "NZD", "KRW", "BRL", "MXN", "INR", "ZAR", "TRY", "RUB", "PLN", "CZK", "HUF", "RON", "BGN",
    "THB", "MYR", "PHP", "IDR", "ILS", "ISK",
];

const CATEGORY_NAME: &str = "Currency";

/// An ISO 4217-style code: three uppercase ASCII letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    pub const USD: Self = Self(*b"USD");
    pub const EUR: Self = Self(*b"EUR");

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever built from ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

/// Error for text that is not a three-letter code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid currency code: {0:?}")]
pub struct InvalidCurrencyCode(pub String);

impl FromStr for CurrencyCode {
    type Err = InvalidCurrencyCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(|x| x.is_ascii_alphabetic()) => Ok(Self([
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
                c.to_ascii_uppercase(),
            ])),
            _ => Err(InvalidCurrencyCode(s.to_string())),
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = InvalidCurrencyCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({})", self.as_str())
    }
}

/// Exchange rates quoted per one unit of `base`.
///
/// ```json
/// { "base": "USD", "as_of_ms": 1700000000000, "rates": { "EUR": "0.92", "JPY": 150 } }
/// ```
///
/// Rates are strings or integers; JSON floats are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub base: CurrencyCode,
    #[serde(default)]
    pub rates: HashMap<CurrencyCode, DecimalValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_ms: Option<i64>,
}

impl ExchangeRates {
    #[must_use]
    pub fn new(base: CurrencyCode) -> Self {
        Self {
            base,
            rates: HashMap::new(),
            as_of_ms: None,
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with_rate(mut self, code: CurrencyCode, rate: DecimalValue) -> Self {
        self.rates.insert(code, rate);
        self
    }

    /// Parse a rate table from JSON.
    ///
    /// # Errors
    /// Returns the JSON error for malformed documents, bad codes or float rates.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Rate of `code` against the base. The base itself is always 1.
    #[must_use]
    pub fn rate(&self, code: CurrencyCode) -> Option<DecimalValue> {
        if code == self.base {
            return Some(DecimalValue::one());
        }
        self.rates.get(&code).cloned()
    }

    #[must_use]
    pub fn contains(&self, code: CurrencyCode) -> bool {
        self.rate(code).is_some()
    }

    /// Every known code, sorted, base included.
    #[must_use]
    pub fn codes(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self.rates.keys().copied().collect();
        if !self.rates.contains_key(&self.base) {
            codes.push(self.base);
        }
        codes.sort();
        codes
    }
}

/// [`PairConverter`] over currency codes: `amount × rate(to) ÷ rate(from)`.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: ExchangeRates,
}

impl CurrencyConverter {
    #[must_use]
    pub fn new(rates: ExchangeRates) -> Self {
        Self { rates }
    }

    #[must_use]
    pub fn rates(&self) -> &ExchangeRates {
        &self.rates
    }

    /// Convert a parsed amount.
    ///
    /// # Errors
    /// [`ConversionError::InvalidUnitForCategory`] for codes without a rate,
    /// [`ConversionError::DivisionByZero`] when `from` has a zero rate, and
    /// [`ConversionError::Overflow`] when the result is out of range.
    pub fn try_convert(
        &self,
        amount: DecimalValue,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<DecimalValue, ConversionError> {
        let rate_from = self.rates.rate(from).ok_or_else(|| unknown_currency(from))?;
        let rate_to = self.rates.rate(to).ok_or_else(|| unknown_currency(to))?;
        if from == to {
            return Ok(amount);
        }
        amount.multiply(&rate_to)?.divide(&rate_from)
    }
}

impl PairConverter for CurrencyConverter {
    type Unit = CurrencyCode;

    fn partition(&self) -> PartitionKey {
        PartitionKey::Currency
    }

    fn label(&self, unit: &Self::Unit) -> String {
        unit.to_string()
    }

    fn resolve(&self, label: &str) -> Option<Self::Unit> {
        label
            .parse::<CurrencyCode>()
            .ok()
            .filter(|code| self.rates.contains(*code))
    }

    /// `USD → EUR` when both are quoted, else the first two known codes.
    fn default_pair(&self) -> (Self::Unit, Self::Unit) {
        if self.rates.contains(CurrencyCode::USD) && self.rates.contains(CurrencyCode::EUR) {
            return (CurrencyCode::USD, CurrencyCode::EUR);
        }
        let codes = self.rates.codes();
        match codes.as_slice() {
            [first, second, ..] => (*first, *second),
            _ => (self.rates.base, self.rates.base),
        }
    }

    fn validate(&self, unit: &Self::Unit) -> Result<(), ConversionError> {
        if self.rates.contains(*unit) {
            Ok(())
        } else {
            Err(unknown_currency(*unit))
        }
    }

    fn convert(
        &self,
        input: &str,
        from: &Self::Unit,
        to: &Self::Unit,
    ) -> Result<String, ConversionError> {
        let Ok(amount) = DecimalValue::parse(input) else {
            return Ok(String::new());
        };

        match self.try_convert(amount, *from, *to) {
            Ok(result) => Ok(result.to_normalized_string()),
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, from = %from, to = %to, "Currency conversion produced no value");
                Ok(String::new())
            }
            Err(e) => {
                error!(error = %e, "Currency has no exchange rate");
                Err(e)
            }
        }
    }
}

fn unknown_currency(code: CurrencyCode) -> ConversionError {
    ConversionError::InvalidUnitForCategory {
        unit: code.to_string(),
        category: CATEGORY_NAME.to_string(),
    }
}
