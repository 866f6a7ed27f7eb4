//! Category-aware conversion over exact decimals.
//!
//! Dispatch is on [`UnitKind`]: linear units scale through the category base,
//! temperatures chain through Celsius, and fuel-economy units use harmonic
//! formulas. Everything here is a pure function of its inputs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, error};

use super::decimal::DecimalValue;
use super::error::ConversionError;
use super::record::PartitionKey;
use super::unit::{Category, FuelEconomyUnit, TemperatureScale, UnitDef, UnitKind};

/// L/100km per 1 MPG (US).
pub const K_US: Decimal = dec!(235.214583);

/// L/100km per 1 MPG (UK).
pub const K_UK: Decimal = dec!(282.481053);

const THIRTY_TWO: Decimal = dec!(32);
const FIVE: Decimal = dec!(5);
const NINE: Decimal = dec!(9);
const KELVIN_OFFSET: Decimal = dec!(273.15);
const RANKINE_OFFSET: Decimal = dec!(491.67);

fn k(constant: Decimal) -> DecimalValue {
    DecimalValue::from(constant)
}

/// Convert a parsed value between two units of `category`.
///
/// # Errors
/// - [`ConversionError::InvalidUnitForCategory`] if either unit is not part of
///   `category`.
/// - [`ConversionError::DivisionByZero`] for a zero fuel-economy rate.
/// - [`ConversionError::Overflow`] if an intermediate leaves the decimal range.
///
/// Converting a unit to itself returns `value` unrounded.
pub fn try_convert(
    value: DecimalValue,
    from: &UnitDef,
    to: &UnitDef,
    category: Category,
) -> Result<DecimalValue, ConversionError> {
    for unit in [from, to] {
        if !category.contains(unit) {
            return Err(invalid_unit(unit, category));
        }
    }

    if from.id == to.id {
        return Ok(value);
    }

    match (from.kind, to.kind) {
        (UnitKind::Linear(factor_a), UnitKind::Linear(factor_b)) => {
            value.multiply(&k(factor_a))?.divide(&k(factor_b))
        }
        (UnitKind::Temperature(a), UnitKind::Temperature(b)) => {
            from_celsius(to_celsius(value, a)?, b)
        }
        (UnitKind::FuelEconomy(a), UnitKind::FuelEconomy(b)) => fuel_economy(value, a, b),
        _ => Err(invalid_unit(to, category)),
    }
}

/// Convert raw input text and return the normalized result.
///
/// Input that does not parse (empty, a lone `-`, ...) and conversions that are
/// meaningless (zero fuel-economy rate, overflow) yield an empty string, which
/// callers treat as "no value yet".
///
/// # Errors
/// Returns [`ConversionError::InvalidUnitForCategory`] only; that is a caller
/// bug, never a user-input problem.
pub fn convert(
    input: &str,
    from: &UnitDef,
    to: &UnitDef,
    category: Category,
) -> Result<String, ConversionError> {
    let value = match DecimalValue::parse(input) {
        Ok(value) => value,
        Err(_) => return Ok(String::new()),
    };

    match try_convert(value, from, to, category) {
        Ok(result) => Ok(result.to_normalized_string()),
        Err(e) if e.is_recoverable() => {
            debug!(
                error = %e,
                category = %category,
                from = from.id,
                to = to.id,
                "Conversion produced no value"
            );
            Ok(String::new())
        }
        Err(e) => {
            error!(error = %e, "Unit does not belong to category");
            Err(e)
        }
    }
}

fn invalid_unit(unit: &UnitDef, category: Category) -> ConversionError {
    ConversionError::InvalidUnitForCategory {
        unit: unit.id.to_string(),
        category: category.name().to_string(),
    }
}

fn to_celsius(v: DecimalValue, scale: TemperatureScale) -> Result<DecimalValue, ConversionError> {
    match scale {
        TemperatureScale::Celsius => Ok(v),
        TemperatureScale::Fahrenheit => v
            .subtract(&k(THIRTY_TWO))?
            .multiply(&k(FIVE))?
            .divide(&k(NINE)),
        TemperatureScale::Kelvin => v.subtract(&k(KELVIN_OFFSET)),
        TemperatureScale::Rankine => v
            .subtract(&k(RANKINE_OFFSET))?
            .multiply(&k(FIVE))?
            .divide(&k(NINE)),
    }
}

fn from_celsius(c: DecimalValue, scale: TemperatureScale) -> Result<DecimalValue, ConversionError> {
    match scale {
        TemperatureScale::Celsius => Ok(c),
        TemperatureScale::Fahrenheit => c
            .multiply(&k(NINE))?
            .divide(&k(FIVE))?
            .add(&k(THIRTY_TWO)),
        TemperatureScale::Kelvin => c.add(&k(KELVIN_OFFSET)),
        TemperatureScale::Rankine => c
            .add(&k(KELVIN_OFFSET))?
            .multiply(&k(NINE))?
            .divide(&k(FIVE)),
    }
}

// MPG to MPG passes through L/100km: two divisions, each rounded.
fn fuel_economy(
    v: DecimalValue,
    from: FuelEconomyUnit,
    to: FuelEconomyUnit,
) -> Result<DecimalValue, ConversionError> {
    use FuelEconomyUnit::{LitersPer100Km, MpgUk, MpgUs};

    match (from, to) {
        (LitersPer100Km, LitersPer100Km) | (MpgUs, MpgUs) | (MpgUk, MpgUk) => Ok(v),
        (LitersPer100Km, MpgUs) | (MpgUs, LitersPer100Km) => k(K_US).divide(&v),
        (LitersPer100Km, MpgUk) | (MpgUk, LitersPer100Km) => k(K_UK).divide(&v),
        (MpgUs, MpgUk) => k(K_UK).divide(&k(K_US).divide(&v)?),
        (MpgUk, MpgUs) => k(K_US).divide(&k(K_UK).divide(&v)?),
    }
}

/// Converts between two sides of a conversion session.
///
/// Implemented for unit categories ([`UnitConverter`]) and for currencies
/// ([`CurrencyConverter`](super::currency::CurrencyConverter)).
pub trait PairConverter {
    /// What sits on each side: a unit or a currency code.
    type Unit: Copy + PartialEq + std::fmt::Debug;

    /// History partition this converter writes to.
    fn partition(&self) -> PartitionKey;

    /// Label written to history records for `unit`.
    fn label(&self, unit: &Self::Unit) -> String;

    /// Resolve a stored label back to a unit.
    fn resolve(&self, label: &str) -> Option<Self::Unit>;

    /// The pair used when no history exists.
    fn default_pair(&self) -> (Self::Unit, Self::Unit);

    /// Check that `unit` belongs to this converter.
    ///
    /// # Errors
    /// Returns [`ConversionError::InvalidUnitForCategory`] otherwise.
    fn validate(&self, unit: &Self::Unit) -> Result<(), ConversionError>;

    /// Convert raw input text; empty output means "no value".
    ///
    /// # Errors
    /// Returns [`ConversionError::InvalidUnitForCategory`] for foreign units.
    fn convert(
        &self,
        input: &str,
        from: &Self::Unit,
        to: &Self::Unit,
    ) -> Result<String, ConversionError>;
}

/// Converter for one unit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConverter {
    category: Category,
}

impl UnitConverter {
    #[must_use]
    pub const fn new(category: Category) -> Self {
        Self { category }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}

impl PairConverter for UnitConverter {
    type Unit = &'static UnitDef;

    fn partition(&self) -> PartitionKey {
        PartitionKey::Unit(self.category)
    }

    fn label(&self, unit: &Self::Unit) -> String {
        unit.name.to_string()
    }

    fn resolve(&self, label: &str) -> Option<Self::Unit> {
        self.category.find_unit(label)
    }

    fn default_pair(&self) -> (Self::Unit, Self::Unit) {
        self.category.default_pair()
    }

    fn validate(&self, unit: &Self::Unit) -> Result<(), ConversionError> {
        if self.category.contains(unit) {
            Ok(())
        } else {
            Err(invalid_unit(unit, self.category))
        }
    }

    fn convert(
        &self,
        input: &str,
        from: &Self::Unit,
        to: &Self::Unit,
    ) -> Result<String, ConversionError> {
        convert(input, from, to, self.category)
    }
}
