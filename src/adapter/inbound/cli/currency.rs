//! `unitconv currency`.

use std::path::PathBuf;

use serde_json::json;

use crate::adapter::inbound::cli::command::CurrencyArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::{ConversionSession, CurrencyCode, CurrencyConverter};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::bootstrap::{load_rates, open_history};
use crate::infrastructure::config::Config;

fn rates_path(config: &Config, args: &CurrencyArgs) -> Result<PathBuf> {
    args.rates
        .clone()
        .or_else(|| config.currency.rates.as_ref().map(PathBuf::from))
        .ok_or_else(|| ConfigError::MissingField { field: "rates" }.into())
}

fn parse_code(text: &str) -> Result<CurrencyCode> {
    text.parse().map_err(|e| Error::Parse(format!("{e}")))
}

/// Convert an amount between currencies, print, and optionally record.
pub async fn execute(config: &Config, args: &CurrencyArgs) -> Result<()> {
    let rates = load_rates(rates_path(config, args)?)?;
    let from = parse_code(&args.from)?;
    let to = parse_code(&args.to)?;

    let mut session = ConversionSession::new(CurrencyConverter::new(rates), from, to)?;
    session.set_value(&args.amount)?;
    let value = session.to_value().to_string();

    output::conversion(
        &value,
        json!({
            "from": { "currency": from, "amount": args.amount },
            "to": { "currency": to, "amount": value },
        }),
    );

    if args.record {
        let history = open_history(config)?;
        match history.commit(&mut session).await? {
            Some(record) => output::recorded(&record),
            None => output::warn("Nothing to record: both amounts must be non-zero"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(rates: Option<&str>) -> CurrencyArgs {
        CurrencyArgs {
            amount: "1".to_string(),
            from: "usd".to_string(),
            to: "eur".to_string(),
            rates: rates.map(PathBuf::from),
            record: false,
        }
    }

    #[test]
    fn rates_flag_wins_over_config() {
        let mut config = Config::default();
        config.currency.rates = Some("from-config.json".to_string());
        assert_eq!(
            rates_path(&config, &args(Some("flag.json"))).unwrap(),
            PathBuf::from("flag.json")
        );
        assert_eq!(
            rates_path(&config, &args(None)).unwrap(),
            PathBuf::from("from-config.json")
        );
    }

    #[test]
    fn missing_rates_is_a_config_error() {
        assert!(matches!(
            rates_path(&Config::default(), &args(None)),
            Err(Error::Config(ConfigError::MissingField { field: "rates" }))
        ));
    }

    #[test]
    fn bad_code_is_a_parse_error() {
        assert!(matches!(parse_code("dollars"), Err(Error::Parse(_))));
    }
}
