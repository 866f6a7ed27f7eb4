//! Built-in unit tables.
//!
//! Each category owns an ordered, read-only list of units. For linear
//! categories every factor is "base units per one of this unit"; the base is
//! noted above each table. Exact definitions are used where they exist
//! (international yard and pound, US liquid gallon, thermochemical calorie);
//! irrational factors are written to 18 significant digits.

use rust_decimal_macros::dec;

use super::unit::{Category, FuelEconomyUnit, TemperatureScale, UnitDef};

// Base: meter
static LENGTH: &[UnitDef] = &[
    UnitDef::linear("nanometer", "Nanometer", dec!(0.000000001)),
    UnitDef::linear("micrometer", "Micrometer", dec!(0.000001)),
    UnitDef::linear("millimeter", "Millimeter", dec!(0.001)),
    UnitDef::linear("centimeter", "Centimeter", dec!(0.01)),
    UnitDef::linear("meter", "Meter", dec!(1)),
    UnitDef::linear("kilometer", "Kilometer", dec!(1000)),
    UnitDef::linear("inch", "Inch", dec!(0.0254)),
    UnitDef::linear("foot", "Foot", dec!(0.3048)),
    UnitDef::linear("yard", "Yard", dec!(0.9144)),
    UnitDef::linear("mile", "Mile", dec!(1609.344)),
    UnitDef::linear("nautical_mile", "Nautical Mile", dec!(1852)),
];

// Base: kilogram
static WEIGHT: &[UnitDef] = &[
    UnitDef::linear("milligram", "Milligram", dec!(0.000001)),
    UnitDef::linear("gram", "Gram", dec!(0.001)),
    UnitDef::linear("kilogram", "Kilogram", dec!(1)),
    UnitDef::linear("metric_ton", "Metric Ton", dec!(1000)),
    UnitDef::linear("ounce", "Ounce", dec!(0.028349523125)),
    UnitDef::linear("pound", "Pound", dec!(0.45359237)),
    UnitDef::linear("stone", "Stone", dec!(6.35029318)),
    UnitDef::linear("short_ton", "Short Ton", dec!(907.18474)),
    UnitDef::linear("long_ton", "Long Ton", dec!(1016.0469088)),
];

// Base: liter
static VOLUME: &[UnitDef] = &[
    UnitDef::linear("milliliter", "Milliliter", dec!(0.001)),
    UnitDef::linear("liter", "Liter", dec!(1)),
    UnitDef::linear("cubic_meter", "Cubic Meter", dec!(1000)),
    UnitDef::linear("teaspoon_us", "Teaspoon (US)", dec!(0.00492892159375)),
    UnitDef::linear("tablespoon_us", "Tablespoon (US)", dec!(0.01478676478125)),
    UnitDef::linear("fluid_ounce_us", "Fluid Ounce (US)", dec!(0.0295735295625)),
    UnitDef::linear("cup_us", "Cup (US)", dec!(0.2365882365)),
    UnitDef::linear("pint_us", "Pint (US)", dec!(0.473176473)),
    UnitDef::linear("quart_us", "Quart (US)", dec!(0.946352946)),
    UnitDef::linear("gallon_us", "Gallon (US)", dec!(3.785411784)),
    UnitDef::linear("gallon_uk", "Gallon (UK)", dec!(4.54609)),
    UnitDef::linear("cubic_foot", "Cubic Foot", dec!(28.316846592)),
    UnitDef::linear("cubic_inch", "Cubic Inch", dec!(0.016387064)),
];

// Base: square meter
static AREA: &[UnitDef] = &[
    UnitDef::linear("square_millimeter", "Square Millimeter", dec!(0.000001)),
    UnitDef::linear("square_centimeter", "Square Centimeter", dec!(0.0001)),
    UnitDef::linear("square_meter", "Square Meter", dec!(1)),
    UnitDef::linear("hectare", "Hectare", dec!(10000)),
    UnitDef::linear("square_kilometer", "Square Kilometer", dec!(1000000)),
    UnitDef::linear("square_inch", "Square Inch", dec!(0.00064516)),
    UnitDef::linear("square_foot", "Square Foot", dec!(0.09290304)),
    UnitDef::linear("square_yard", "Square Yard", dec!(0.83612736)),
    UnitDef::linear("acre", "Acre", dec!(4046.8564224)),
    UnitDef::linear("square_mile", "Square Mile", dec!(2589988.110336)),
];

static TEMPERATURE: &[UnitDef] = &[
    UnitDef::temperature("celsius", "Celsius", TemperatureScale::Celsius),
    UnitDef::temperature("fahrenheit", "Fahrenheit", TemperatureScale::Fahrenheit),
    UnitDef::temperature("kelvin", "Kelvin", TemperatureScale::Kelvin),
    UnitDef::temperature("rankine", "Rankine", TemperatureScale::Rankine),
];

// Base: second. Month and year are Gregorian averages.
static TIME: &[UnitDef] = &[
    UnitDef::linear("nanosecond", "Nanosecond", dec!(0.000000001)),
    UnitDef::linear("microsecond", "Microsecond", dec!(0.000001)),
    UnitDef::linear("millisecond", "Millisecond", dec!(0.001)),
    UnitDef::linear("second", "Second", dec!(1)),
    UnitDef::linear("minute", "Minute", dec!(60)),
    UnitDef::linear("hour", "Hour", dec!(3600)),
    UnitDef::linear("day", "Day", dec!(86400)),
    UnitDef::linear("week", "Week", dec!(604800)),
    UnitDef::linear("month", "Month", dec!(2629746)),
    UnitDef::linear("year", "Year", dec!(31556952)),
];

// Base: kilometer per hour
static SPEED: &[UnitDef] = &[
    UnitDef::linear("kilometer_per_hour", "Kilometer per Hour", dec!(1)),
    UnitDef::linear("meter_per_second", "Meter per Second", dec!(3.6)),
    UnitDef::linear("mile_per_hour", "Mile per Hour", dec!(1.609344)),
    UnitDef::linear("knot", "Knot", dec!(1.852)),
    UnitDef::linear("foot_per_second", "Foot per Second", dec!(1.09728)),
];

// Base: joule
static ENERGY: &[UnitDef] = &[
    UnitDef::linear("joule", "Joule", dec!(1)),
    UnitDef::linear("kilojoule", "Kilojoule", dec!(1000)),
    UnitDef::linear("calorie", "Calorie", dec!(4.184)),
    UnitDef::linear("kilocalorie", "Kilocalorie", dec!(4184)),
    UnitDef::linear("watt_hour", "Watt Hour", dec!(3600)),
    UnitDef::linear("kilowatt_hour", "Kilowatt Hour", dec!(3600000)),
    UnitDef::linear("btu", "British Thermal Unit", dec!(1055.05585262)),
    UnitDef::linear("foot_pound", "Foot-Pound", dec!(1.3558179483314004)),
];

// Base: watt
static POWER: &[UnitDef] = &[
    UnitDef::linear("watt", "Watt", dec!(1)),
    UnitDef::linear("kilowatt", "Kilowatt", dec!(1000)),
    UnitDef::linear("megawatt", "Megawatt", dec!(1000000)),
    UnitDef::linear("horsepower", "Horsepower", dec!(745.69987158227022)),
    UnitDef::linear("metric_horsepower", "Metric Horsepower", dec!(735.49875)),
    UnitDef::linear("btu_per_hour", "BTU per Hour", dec!(0.293071070172222222)),
];

// Base: pascal
static PRESSURE: &[UnitDef] = &[
    UnitDef::linear("pascal", "Pascal", dec!(1)),
    UnitDef::linear("kilopascal", "Kilopascal", dec!(1000)),
    UnitDef::linear("bar", "Bar", dec!(100000)),
    UnitDef::linear("millibar", "Millibar", dec!(100)),
    UnitDef::linear("atmosphere", "Atmosphere", dec!(101325)),
    UnitDef::linear("psi", "PSI", dec!(6894.75729316836134)),
    UnitDef::linear("torr", "Torr", dec!(133.322368421052632)),
    UnitDef::linear("millimeter_of_mercury", "Millimeter of Mercury", dec!(133.322387415)),
];

// Base: hertz
static FREQUENCY: &[UnitDef] = &[
    UnitDef::linear("hertz", "Hertz", dec!(1)),
    UnitDef::linear("kilohertz", "Kilohertz", dec!(1000)),
    UnitDef::linear("megahertz", "Megahertz", dec!(1000000)),
    UnitDef::linear("gigahertz", "Gigahertz", dec!(1000000000)),
];

// Base: byte
static DATA: &[UnitDef] = &[
    UnitDef::linear("bit", "Bit", dec!(0.125)),
    UnitDef::linear("byte", "Byte", dec!(1)),
    UnitDef::linear("kilobyte", "Kilobyte", dec!(1000)),
    UnitDef::linear("megabyte", "Megabyte", dec!(1000000)),
    UnitDef::linear("gigabyte", "Gigabyte", dec!(1000000000)),
    UnitDef::linear("terabyte", "Terabyte", dec!(1000000000000)),
    UnitDef::linear("petabyte", "Petabyte", dec!(1000000000000000)),
    UnitDef::linear("kibibyte", "Kibibyte", dec!(1024)),
    UnitDef::linear("mebibyte", "Mebibyte", dec!(1048576)),
    UnitDef::linear("gibibyte", "Gibibyte", dec!(1073741824)),
    UnitDef::linear("tebibyte", "Tebibyte", dec!(1099511627776)),
    UnitDef::linear("pebibyte", "Pebibyte", dec!(1125899906842624)),
];

static FUEL_ECONOMY: &[UnitDef] = &[
    UnitDef::fuel_economy("liters_per_100km", "L/100km", FuelEconomyUnit::LitersPer100Km),
    UnitDef::fuel_economy("mpg_us", "MPG (US)", FuelEconomyUnit::MpgUs),
    UnitDef::fuel_economy("mpg_uk", "MPG (UK)", FuelEconomyUnit::MpgUk),
];

// Base: arcsecond
static PLANE_ANGLE: &[UnitDef] = &[
    UnitDef::linear("degree", "Degree", dec!(3600)),
    UnitDef::linear("arcminute", "Arcminute", dec!(60)),
    UnitDef::linear("arcsecond", "Arcsecond", dec!(1)),
    UnitDef::linear("gradian", "Gradian", dec!(3240)),
    UnitDef::linear("radian", "Radian", dec!(206264.806247096355)),
    UnitDef::linear("turn", "Turn", dec!(1296000)),
];

// Base: mole
static AMOUNT: &[UnitDef] = &[
    UnitDef::linear("nanomole", "Nanomole", dec!(0.000000001)),
    UnitDef::linear("micromole", "Micromole", dec!(0.000001)),
    UnitDef::linear("millimole", "Millimole", dec!(0.001)),
    UnitDef::linear("mole", "Mole", dec!(1)),
    UnitDef::linear("kilomole", "Kilomole", dec!(1000)),
];

/// Ordered units of `category`.
#[must_use]
pub fn units_for(category: Category) -> &'static [UnitDef] {
    match category {
        Category::Length => LENGTH,
        Category::Weight => WEIGHT,
        Category::Volume => VOLUME,
        Category::Area => AREA,
        Category::Temperature => TEMPERATURE,
        Category::Time => TIME,
        Category::Speed => SPEED,
        Category::Energy => ENERGY,
        Category::Power => POWER,
        Category::Pressure => PRESSURE,
        Category::Frequency => FREQUENCY,
        Category::Data => DATA,
        Category::FuelEconomy => FUEL_ECONOMY,
        Category::PlaneAngle => PLANE_ANGLE,
        Category::Amount => AMOUNT,
    }
}

impl Category {
    /// Ordered units of this category.
    #[must_use]
    pub fn units(self) -> &'static [UnitDef] {
        units_for(self)
    }

    /// Look a unit up by identifier.
    #[must_use]
    pub fn unit(self, id: &str) -> Option<&'static UnitDef> {
        self.units().iter().find(|u| u.id == id)
    }

    /// Resolve a stored label (identifier or display name, any ASCII case).
    #[must_use]
    pub fn find_unit(self, label: &str) -> Option<&'static UnitDef> {
        self.units().iter().find(|u| u.matches_label(label))
    }

    /// True if `unit` is one of this category's units.
    #[must_use]
    pub fn contains(self, unit: &UnitDef) -> bool {
        self.units().iter().any(|u| u == unit)
    }

    /// The pair a fresh session starts with when there is no history.
    ///
    /// Falls back to the first two units of the table.
    #[must_use]
    pub fn default_pair(self) -> (&'static UnitDef, &'static UnitDef) {
        let (from, to) = match self {
            Category::Length => ("meter", "foot"),
            Category::Weight => ("kilogram", "pound"),
            Category::Volume => ("liter", "gallon_us"),
            Category::Area => ("square_meter", "square_foot"),
            Category::Temperature => ("celsius", "fahrenheit"),
            Category::Time => ("millisecond", "minute"),
            Category::Speed => ("kilometer_per_hour", "mile_per_hour"),
            Category::Energy => ("joule", "kilowatt_hour"),
            Category::Power => ("kilowatt", "horsepower"),
            Category::Pressure => ("bar", "psi"),
            Category::Frequency => ("hertz", "kilohertz"),
            Category::Data => ("megabyte", "mebibyte"),
            Category::FuelEconomy => ("liters_per_100km", "mpg_us"),
            Category::PlaneAngle => ("degree", "radian"),
            Category::Amount => ("mole", "millimole"),
        };
        let units = self.units();
        let first = self.unit(from).unwrap_or(&units[0]);
        let second = self.unit(to).or_else(|| units.get(1)).unwrap_or(first);
        (first, second)
    }
}
