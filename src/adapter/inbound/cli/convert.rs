//! `unitconv convert`.

use serde_json::json;

use crate::adapter::inbound::cli::command::ConvertArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{Category, ConversionError, ConversionSession, UnitConverter, UnitDef};
use crate::error::Result;
use crate::infrastructure::bootstrap::open_history;
use crate::infrastructure::config::Config;

/// Look up a unit of `category` by id or display name.
///
/// # Errors
/// Returns [`ConversionError::InvalidUnitForCategory`] when nothing matches.
pub fn resolve_unit(category: Category, label: &str) -> Result<&'static UnitDef> {
    category.find_unit(label).ok_or_else(|| {
        ConversionError::InvalidUnitForCategory {
            unit: label.to_string(),
            category: category.name().to_string(),
        }
        .into()
    })
}

/// Convert, print, and optionally record.
pub async fn execute(config: &Config, args: &ConvertArgs) -> Result<()> {
    let category: Category = args.category.parse()?;
    let from = resolve_unit(category, &args.from)?;
    let to = resolve_unit(category, &args.to)?;

    let mut session = ConversionSession::new(UnitConverter::new(category), from, to)?;
    session.set_value(&args.value)?;
    let value = session.to_value().to_string();

    output::conversion(
        &value,
        json!({
            "category": category.name(),
            "from": { "unit": from.id, "value": args.value },
            "to": { "unit": to.id, "value": value },
        }),
    );

    if args.record {
        let history = open_history(config)?;
        match history.commit(&mut session).await? {
            Some(record) => output::recorded(&record),
            None => output::warn("Nothing to record: both values must be non-zero"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn resolve_unit_accepts_id_and_name() {
        assert_eq!(resolve_unit(Category::Length, "nautical_mile").unwrap().id, "nautical_mile");
        assert_eq!(resolve_unit(Category::Length, "Nautical Mile").unwrap().id, "nautical_mile");
    }

    #[test]
    fn resolve_unit_rejects_foreign_unit() {
        assert!(matches!(
            resolve_unit(Category::Length, "kelvin"),
            Err(Error::Conversion(ConversionError::InvalidUnitForCategory { .. }))
        ));
    }
}
