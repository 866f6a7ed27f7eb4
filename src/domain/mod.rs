//! Storage-agnostic conversion logic.

pub mod currency;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod record;
pub mod registry;
pub mod session;
pub mod unit;

pub use currency::{CurrencyCode, CurrencyConverter, ExchangeRates, MAJOR_CURRENCY_CODES};
pub use decimal::{DecimalValue, WORKING_PRECISION};
pub use engine::{PairConverter, UnitConverter};
pub use error::ConversionError;
pub use record::{Conversion, ConversionRecord, NewRecord, PartitionKey};
pub use session::{ActiveField, ConversionSession};
pub use unit::{Category, UnitDef, UnitKind};
