//! `unitconv categories` and `unitconv units`.

use serde_json::json;
use tabled::{Table, Tabled};

use crate::adapter::inbound::cli::output;
use crate::domain::{Category, UnitDef, UnitKind};
use crate::error::Result;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    name: &'static str,
    #[tabled(rename = "Units")]
    units: usize,
    #[tabled(rename = "Default")]
    default_pair: String,
}

#[derive(Tabled)]
struct UnitRow {
    #[tabled(rename = "Id")]
    id: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
    #[tabled(rename = "To base")]
    factor: String,
    #[tabled(rename = "")]
    marker: &'static str,
}

fn describe_kind(unit: &UnitDef) -> String {
    match unit.kind {
        UnitKind::Linear(factor) => factor.to_string(),
        UnitKind::Temperature(_) => "affine".to_string(),
        UnitKind::FuelEconomy(_) => "harmonic".to_string(),
    }
}

/// List every category with its unit count and default pair.
pub fn execute_categories() -> Result<()> {
    if output::is_json() {
        let categories: Vec<_> = Category::ALL
            .into_iter()
            .map(|category| {
                let (from, to) = category.default_pair();
                json!({
                    "name": category.name(),
                    "units": category.units().len(),
                    "default": [from.id, to.id],
                })
            })
            .collect();
        output::document(&json!({ "categories": categories }));
        return Ok(());
    }

    let rows: Vec<CategoryRow> = Category::ALL
        .into_iter()
        .map(|category| {
            let (from, to) = category.default_pair();
            CategoryRow {
                name: category.name(),
                units: category.units().len(),
                default_pair: format!("{} → {}", from.name, to.name),
            }
        })
        .collect();

    output::table(Table::new(rows));
    output::note("run `unitconv units <category>` to see a category's units");
    Ok(())
}

/// List the units of one category in display order.
pub fn execute_units(category: &str) -> Result<()> {
    let category: Category = category.parse()?;
    let (default_from, default_to) = category.default_pair();

    if output::is_json() {
        let units: Vec<_> = category
            .units()
            .iter()
            .map(|unit| {
                json!({
                    "id": unit.id,
                    "name": unit.name,
                    "factor_to_base": unit.factor_to_base().map(|f| f.to_string()),
                })
            })
            .collect();
        output::document(&json!({
            "category": category.name(),
            "units": units,
            "default": [default_from.id, default_to.id],
        }));
        return Ok(());
    }

    let rows: Vec<UnitRow> = category
        .units()
        .iter()
        .map(|unit| UnitRow {
            id: unit.id,
            name: unit.name,
            factor: describe_kind(unit),
            marker: if std::ptr::eq(unit, default_from) {
                "from"
            } else if std::ptr::eq(unit, default_to) {
                "to"
            } else {
                ""
            },
        })
        .collect();

    output::heading(category.name());
    output::table(Table::new(rows));
    Ok(())
}
