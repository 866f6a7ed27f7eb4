//! Two-field conversion session.
//!
//! A session holds a "from" and a "to" field. Exactly one is active; edits go
//! to the active field verbatim and the other field is recomputed through the
//! session's [`PairConverter`], so the two never disagree.

use tracing::debug;

use super::decimal::DecimalValue;
use super::engine::PairConverter;
use super::error::ConversionError;
use super::record::{Conversion, ConversionRecord};

/// Which field is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveField {
    #[default]
    From,
    To,
}

impl ActiveField {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            ActiveField::From => ActiveField::To,
            ActiveField::To => ActiveField::From,
        }
    }
}

#[derive(Debug, Clone)]
struct Side<U> {
    unit: U,
    value: String,
}

/// Conversion state for one screen: a converter, two units, two values.
#[derive(Debug, Clone)]
pub struct ConversionSession<C: PairConverter> {
    converter: C,
    active: ActiveField,
    from: Side<C::Unit>,
    to: Side<C::Unit>,
}

impl<C: PairConverter> ConversionSession<C> {
    /// Start editing `from` with both fields empty.
    ///
    /// # Errors
    /// Returns [`ConversionError::InvalidUnitForCategory`] if either unit is
    /// foreign to `converter`.
    pub fn new(converter: C, from: C::Unit, to: C::Unit) -> Result<Self, ConversionError> {
        converter.validate(&from)?;
        converter.validate(&to)?;
        Ok(Self {
            converter,
            active: ActiveField::From,
            from: Side {
                unit: from,
                value: String::new(),
            },
            to: Side {
                unit: to,
                value: String::new(),
            },
        })
    }

    /// Start on the converter's default pair.
    ///
    /// # Errors
    /// Only if the converter's own default pair fails validation.
    pub fn with_defaults(converter: C) -> Result<Self, ConversionError> {
        let (from, to) = converter.default_pair();
        Self::new(converter, from, to)
    }

    /// Cold start from the partition's most recent record.
    ///
    /// The record's pair is used when both labels still resolve; otherwise
    /// the converter's defaults apply. Values start empty either way.
    ///
    /// # Errors
    /// Only if the converter's own default pair fails validation.
    pub fn restore(converter: C, latest: Option<&ConversionRecord>) -> Result<Self, ConversionError> {
        let pair = latest.and_then(|record| {
            let from = converter.resolve(&record.conversion.from_label)?;
            let to = converter.resolve(&record.conversion.to_label)?;
            Some((from, to))
        });

        match pair {
            Some((from, to)) => Self::new(converter, from, to),
            None => {
                if let Some(record) = latest {
                    debug!(
                        id = record.id,
                        from = %record.conversion.from_label,
                        to = %record.conversion.to_label,
                        "Stored pair no longer resolves, using defaults"
                    );
                }
                Self::with_defaults(converter)
            }
        }
    }

    /// Switch the active field. Nothing is recomputed.
    pub fn select_field(&mut self, field: ActiveField) {
        self.active = field;
    }

    /// Replace the active field's text and recompute the other field.
    ///
    /// Text that does not parse leaves the other field empty.
    ///
    /// # Errors
    /// Propagates [`ConversionError::InvalidUnitForCategory`] from the
    /// converter.
    pub fn set_value(&mut self, text: &str) -> Result<(), ConversionError> {
        self.side_mut(self.active).value = text.to_string();
        self.recompute()
    }

    /// Change the unit on `side` and recompute the non-active field from the
    /// active field's text, which is left untouched.
    ///
    /// # Errors
    /// Returns [`ConversionError::InvalidUnitForCategory`] for a foreign
    /// unit; the session is unchanged in that case.
    pub fn set_unit(&mut self, side: ActiveField, unit: C::Unit) -> Result<(), ConversionError> {
        self.converter.validate(&unit)?;
        self.side_mut(side).unit = unit;
        self.recompute()
    }

    /// Exchange the two units and recompute the non-active field.
    ///
    /// # Errors
    /// Propagates converter errors as [`set_value`](Self::set_value) does.
    pub fn swap_units(&mut self) -> Result<(), ConversionError> {
        std::mem::swap(&mut self.from.unit, &mut self.to.unit);
        self.recompute()
    }

    /// Finish the current entry.
    ///
    /// Returns the conversion, oriented from the active field to the other,
    /// when both fields hold non-zero values. The active field is cleared in
    /// every case.
    ///
    /// # Errors
    /// Propagates converter errors from clearing the fields.
    pub fn commit(&mut self) -> Result<Option<Conversion>, ConversionError> {
        let active = self.side(self.active);
        let other = self.side(self.active.other());

        let conversion = match (non_zero(&active.value), non_zero(&other.value)) {
            (Some(from_amount), Some(to_amount)) => Some(Conversion {
                partition: self.converter.partition(),
                from_amount: from_amount.to_normalized_string(),
                from_label: self.converter.label(&active.unit),
                to_amount: to_amount.to_normalized_string(),
                to_label: self.converter.label(&other.unit),
            }),
            _ => None,
        };

        self.set_value("")?;
        Ok(conversion)
    }

    #[must_use]
    pub fn active_field(&self) -> ActiveField {
        self.active
    }

    #[must_use]
    pub fn from_unit(&self) -> C::Unit {
        self.from.unit
    }

    #[must_use]
    pub fn to_unit(&self) -> C::Unit {
        self.to.unit
    }

    #[must_use]
    pub fn from_value(&self) -> &str {
        &self.from.value
    }

    #[must_use]
    pub fn to_value(&self) -> &str {
        &self.to.value
    }

    #[must_use]
    pub fn converter(&self) -> &C {
        &self.converter
    }

    fn recompute(&mut self) -> Result<(), ConversionError> {
        let source = self.side(self.active);
        let target = self.side(self.active.other());
        let result = self
            .converter
            .convert(&source.value, &source.unit, &target.unit)?;
        self.side_mut(self.active.other()).value = result;
        Ok(())
    }

    fn side(&self, field: ActiveField) -> &Side<C::Unit> {
        match field {
            ActiveField::From => &self.from,
            ActiveField::To => &self.to,
        }
    }

    fn side_mut(&mut self, field: ActiveField) -> &mut Side<C::Unit> {
        match field {
            ActiveField::From => &mut self.from,
            ActiveField::To => &mut self.to,
        }
    }
}

fn non_zero(text: &str) -> Option<DecimalValue> {
    DecimalValue::parse(text).ok().filter(|v| !v.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engine::UnitConverter;
    use crate::domain::record::PartitionKey;
    use crate::domain::unit::Category;

    fn length_session(from: &str, to: &str) -> ConversionSession<UnitConverter> {
        let category = Category::Length;
        ConversionSession::new(
            UnitConverter::new(category),
            category.unit(from).unwrap(),
            category.unit(to).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn editing_keeps_raw_text_and_recomputes_other() {
        let mut session = length_session("kilometer", "meter");
        session.set_value("1.50").unwrap();
        assert_eq!(session.from_value(), "1.50");
        assert_eq!(session.to_value(), "1500");
    }

    #[test]
    fn invalid_text_clears_other_field() {
        let mut session = length_session("kilometer", "meter");
        session.set_value("2").unwrap();
        session.set_value("2.").unwrap();
        assert_eq!(session.to_value(), "2000");
        session.set_value("-").unwrap();
        assert_eq!(session.from_value(), "-");
        assert_eq!(session.to_value(), "");
    }

    #[test]
    fn select_field_does_not_recompute() {
        let mut session = length_session("kilometer", "meter");
        session.set_value("3").unwrap();
        session.select_field(ActiveField::To);
        assert_eq!(session.active_field(), ActiveField::To);
        assert_eq!(session.from_value(), "3");
        assert_eq!(session.to_value(), "3000");

        session.set_value("500").unwrap();
        assert_eq!(session.from_value(), "0.5");
    }

    #[test]
    fn unit_change_recomputes_only_the_other_field() {
        let mut session = length_session("kilometer", "meter");
        session.set_value("1").unwrap();
        session
            .set_unit(ActiveField::To, Category::Length.unit("centimeter").unwrap())
            .unwrap();
        assert_eq!(session.from_value(), "1");
        assert_eq!(session.to_value(), "100000");

        session
            .set_unit(ActiveField::From, Category::Length.unit("meter").unwrap())
            .unwrap();
        assert_eq!(session.from_value(), "1");
        assert_eq!(session.to_value(), "100");
    }

    #[test]
    fn foreign_unit_is_rejected_and_state_kept() {
        let mut session = length_session("kilometer", "meter");
        let kelvin = Category::Temperature.unit("kelvin").unwrap();
        assert!(matches!(
            session.set_unit(ActiveField::To, kelvin),
            Err(ConversionError::InvalidUnitForCategory { .. })
        ));
        assert_eq!(session.to_unit().id, "meter");
    }

    #[test]
    fn swap_units_recomputes() {
        let mut session = length_session("kilometer", "meter");
        session.set_value("2").unwrap();
        session.swap_units().unwrap();
        assert_eq!(session.from_unit().id, "meter");
        assert_eq!(session.to_value(), "0.002");
    }

    #[test]
    fn commit_returns_conversion_and_clears() {
        let mut session = length_session("kilometer", "meter");
        session.set_value("1.500").unwrap();
        let conversion = session.commit().unwrap().unwrap();
        assert_eq!(
            conversion,
            Conversion {
                partition: PartitionKey::Unit(Category::Length),
                from_amount: "1.5".to_string(),
                from_label: "Kilometer".to_string(),
                to_amount: "1500".to_string(),
                to_label: "Meter".to_string(),
            }
        );
        assert_eq!(session.from_value(), "");
        assert_eq!(session.to_value(), "");
    }

    #[test]
    fn commit_is_oriented_from_active_field() {
        let mut session = length_session("kilometer", "meter");
        session.select_field(ActiveField::To);
        session.set_value("250").unwrap();
        let conversion = session.commit().unwrap().unwrap();
        assert_eq!(conversion.from_label, "Meter");
        assert_eq!(conversion.from_amount, "250");
        assert_eq!(conversion.to_amount, "0.25");
    }

    #[test]
    fn commit_skips_blank_and_zero() {
        let mut session = length_session("kilometer", "meter");
        assert_eq!(session.commit().unwrap(), None);

        session.set_value("0.000").unwrap();
        assert_eq!(session.commit().unwrap(), None);
        assert_eq!(session.from_value(), "");

        session.set_value("-0").unwrap();
        assert_eq!(session.commit().unwrap(), None);

        session.set_value("abc").unwrap();
        assert_eq!(session.commit().unwrap(), None);
    }

    #[test]
    fn restore_uses_latest_pair_or_defaults() {
        let converter = UnitConverter::new(Category::Length);
        let record = ConversionRecord {
            id: 7,
            conversion: Conversion {
                partition: PartitionKey::Unit(Category::Length),
                from_amount: "1".to_string(),
                from_label: "Mile".to_string(),
                to_amount: "1.609344".to_string(),
                to_label: "Kilometer".to_string(),
            },
            created_at_ms: 0,
        };

        let session = ConversionSession::restore(converter, Some(&record)).unwrap();
        assert_eq!(session.from_unit().id, "mile");
        assert_eq!(session.to_unit().id, "kilometer");
        assert_eq!(session.from_value(), "");

        let mut stale = record.clone();
        stale.conversion.to_label = "Parsec".to_string();
        let session = ConversionSession::restore(converter, Some(&stale)).unwrap();
        assert_eq!(
            (session.from_unit(), session.to_unit()),
            Category::Length.default_pair()
        );

        let session = ConversionSession::restore(converter, None).unwrap();
        assert_eq!(
            (session.from_unit(), session.to_unit()),
            Category::Length.default_pair()
        );
    }
}
