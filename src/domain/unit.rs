//! Unit categories and unit definitions.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::decimal::DecimalValue;

/// A family of mutually convertible units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Volume,
    Area,
    Temperature,
    Time,
    Speed,
    Energy,
    Power,
    Pressure,
    Frequency,
    Data,
    FuelEconomy,
    PlaneAngle,
    Amount,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 15] = [
        Category::Length,
        Category::Weight,
        Category::Volume,
        Category::Area,
        Category::Temperature,
        Category::Time,
        Category::Speed,
        Category::Energy,
        Category::Power,
        Category::Pressure,
        Category::Frequency,
        Category::Data,
        Category::FuelEconomy,
        Category::PlaneAngle,
        Category::Amount,
    ];

    /// Stable name, also used as the history partition suffix.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
            Category::Area => "Area",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
            Category::Speed => "Speed",
            Category::Energy => "Energy",
            Category::Power => "Power",
            Category::Pressure => "Pressure",
            Category::Frequency => "Frequency",
            Category::Data => "Data",
            Category::FuelEconomy => "FuelEconomy",
            Category::PlaneAngle => "PlaneAngle",
            Category::Amount => "Amount",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive; `-` and `_` are ignored so `fuel-economy` works.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Temperature scales. Conversions chain through Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

/// Fuel-economy units. Conversions between them are harmonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelEconomyUnit {
    LitersPer100Km,
    MpgUs,
    MpgUk,
}

/// How a unit converts to the other units of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Multiply by the factor to reach the category's base unit.
    Linear(Decimal),
    Temperature(TemperatureScale),
    FuelEconomy(FuelEconomyUnit),
}

/// One unit within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDef {
    /// Stable snake_case identifier.
    pub id: &'static str,
    /// English display label, also written to history records.
    pub name: &'static str,
    pub kind: UnitKind,
}

impl UnitDef {
    /// A linear unit with its factor to the category base.
    #[must_use]
    pub const fn linear(id: &'static str, name: &'static str, factor_to_base: Decimal) -> Self {
        Self {
            id,
            name,
            kind: UnitKind::Linear(factor_to_base),
        }
    }

    #[must_use]
    pub const fn temperature(id: &'static str, name: &'static str, scale: TemperatureScale) -> Self {
        Self {
            id,
            name,
            kind: UnitKind::Temperature(scale),
        }
    }

    #[must_use]
    pub const fn fuel_economy(id: &'static str, name: &'static str, unit: FuelEconomyUnit) -> Self {
        Self {
            id,
            name,
            kind: UnitKind::FuelEconomy(unit),
        }
    }

    /// Factor to the base unit, for linear units only.
    #[must_use]
    pub fn factor_to_base(&self) -> Option<DecimalValue> {
        match self.kind {
            UnitKind::Linear(factor) => Some(DecimalValue::from(factor)),
            UnitKind::Temperature(_) | UnitKind::FuelEconomy(_) => None,
        }
    }

    /// True if `label` names this unit by id or display name, ignoring ASCII case.
    #[must_use]
    pub fn matches_label(&self, label: &str) -> bool {
        self.id.eq_ignore_ascii_case(label) || self.name.eq_ignore_ascii_case(label)
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
