//! Files and values shared by integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use bigdecimal::BigDecimal;
use unitconv::domain::{Category, DecimalValue, UnitDef};

/// Rates quoted per USD, with strings and integers.
pub const RATES_JSON: &str = r#"{
    "base": "USD",
    "as_of_ms": 1700000000000,
    "rates": { "EUR": "0.92", "GBP": "0.79", "JPY": 150 }
}"#;

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

/// A config whose history lives in `dir`.
pub fn config_in(dir: &Path, extra: &str) -> PathBuf {
    let database = dir.join("history.db");
    let toml = format!(
        "[logging]\nlevel = \"warn\"\nformat = \"pretty\"\n\n[history]\ndatabase = \"{}\"\nmax_entries = 25\n{extra}",
        database.display()
    );
    write_file(dir, "unitconv.toml", &toml)
}

pub fn unit(category: Category, id: &str) -> &'static UnitDef {
    category
        .unit(id)
        .unwrap_or_else(|| panic!("{id} is not a {category} unit"))
}

pub fn decimal(text: &str) -> BigDecimal {
    DecimalValue::parse(text)
        .unwrap_or_else(|e| panic!("{text:?}: {e}"))
        .as_big_decimal()
        .clone()
}

/// |a - b| <= |b| * 10^-digits
pub fn assert_close(actual: &str, expected: &str, digits: u32) {
    let a = decimal(actual);
    let b = decimal(expected);
    let tolerance = b.abs() * BigDecimal::new(1.into(), i64::from(digits));
    assert!(
        (&a - &b).abs() <= tolerance,
        "{actual} differs from {expected} beyond 1e-{digits} relative"
    );
}
