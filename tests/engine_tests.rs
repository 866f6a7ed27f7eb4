mod support;

use unitconv::domain::engine::{self, K_US};
use unitconv::domain::{Category, ConversionError, UnitKind};

use support::fixtures::{assert_close, unit};

fn conv(category: Category, input: &str, from: &str, to: &str) -> String {
    engine::convert(input, unit(category, from), unit(category, to), category)
        .expect("units belong to category")
}

#[test]
fn linear_pairs_round_trip() {
    for category in Category::ALL {
        let units = category.units();
        if !matches!(units[0].kind, UnitKind::Linear(_)) {
            continue;
        }
        for from in units {
            for to in units {
                for x in ["1", "123.456", "-7.25", "1000", "1e-30", "9.87654321e25"] {
                    let there = engine::convert(x, from, to, category).unwrap();
                    let back = engine::convert(&there, to, from, category).unwrap();
                    assert_close(&back, x, 16);
                }
            }
        }
    }
}

#[test]
fn empty_input_yields_empty_output_everywhere() {
    for category in Category::ALL {
        let (from, to) = category.default_pair();
        assert_eq!(engine::convert("", from, to, category).unwrap(), "");
        assert_eq!(engine::convert("-", from, to, category).unwrap(), "");
        assert_eq!(engine::convert(".", from, to, category).unwrap(), "");
    }
}

#[test]
fn temperature_reference_points() {
    let t = Category::Temperature;
    assert_eq!(conv(t, "0", "celsius", "fahrenheit"), "32");
    assert_eq!(conv(t, "100", "celsius", "fahrenheit"), "212");
    assert_eq!(conv(t, "0", "kelvin", "celsius"), "-273.15");
    assert_eq!(conv(t, "-40", "fahrenheit", "celsius"), "-40");
    assert_eq!(conv(t, "0", "rankine", "kelvin"), "0");
    assert_eq!(conv(t, "491.67", "rankine", "celsius"), "0");
}

#[test]
fn fuel_economy_reference_points() {
    let f = Category::FuelEconomy;
    assert_eq!(conv(f, &K_US.to_string(), "liters_per_100km", "mpg_us"), "1");
    assert_eq!(conv(f, "0", "liters_per_100km", "mpg_us"), "");
    assert_eq!(conv(f, "0", "mpg_uk", "mpg_us"), "");
    assert_eq!(conv(f, "12.5", "mpg_us", "mpg_us"), "12.5");
}

#[test]
fn try_convert_reports_division_by_zero() {
    let f = Category::FuelEconomy;
    let result = engine::try_convert(
        unitconv::domain::DecimalValue::zero(),
        unit(f, "liters_per_100km"),
        unit(f, "mpg_us"),
        f,
    );
    assert_eq!(result, Err(ConversionError::DivisionByZero));
}

#[test]
fn results_are_normalized() {
    let l = Category::Length;
    assert_eq!(conv(l, "1.000", "meter", "centimeter"), "100");
    assert_eq!(conv(l, "2.50", "meter", "meter"), "2.5");
    assert_eq!(conv(l, "-0", "meter", "foot"), "0");
}

#[test]
fn unit_from_another_category_is_fatal() {
    let result = engine::convert(
        "1",
        unit(Category::Length, "meter"),
        unit(Category::Weight, "kilogram"),
        Category::Length,
    );
    assert!(matches!(
        result,
        Err(ConversionError::InvalidUnitForCategory { ref unit, ref category })
            if unit == "kilogram" && category == "Length"
    ));
}

#[test]
fn unit_order_defines_fallback_defaults() {
    for category in Category::ALL {
        let units = category.units();
        assert!(units.len() >= 2, "{category} needs two units");
        let (from, to) = category.default_pair();
        assert_ne!(from, to);
    }
}

#[test]
fn extreme_magnitudes_keep_eighteen_digits() {
    assert_eq!(
        conv(Category::Time, "1", "nanosecond", "year"),
        "0.000000000000000031688738506811431"
    );
    let year = conv(Category::Time, "1", "nanosecond", "year");
    assert_eq!(conv(Category::Time, &year, "year", "nanosecond"), "1");
    let seven = conv(Category::Time, "7", "nanosecond", "year");
    assert_eq!(seven, "0.000000000000000221821169547680017");
    assert_eq!(conv(Category::Time, &seven, "year", "nanosecond"), "7.00000000000000001");
    assert_eq!(
        conv(Category::Data, "1e20", "petabyte", "bit"),
        format!("8{}", "0".repeat(35))
    );
}

#[test]
fn identity_conversion_passes_long_input_through() {
    let input = "1.2345678901234567891234";
    assert_eq!(conv(Category::Temperature, input, "celsius", "celsius"), input);
    assert_eq!(conv(Category::Area, input, "square_meter", "square_meter"), input);
}
