// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of aemo-tariff.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Command execution

use aemo_tariff_core::{
    BillingPeriod, LossFactors, Network, calculate_demand_fee, get_daily_fee, get_periods,
    get_periods_at, list_tariffs, spot_to_tariff,
};
use aemo_tariff_ha::{StatesSnapshot, TariffSensor};
use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use serde_json::json;
use tracing::{debug, info};

use crate::cli::{Commands, ConvertArgs, Selection};
use crate::config::AppConfig;
use crate::output;

/// Run a command and return what should be printed
pub fn execute(command: &Commands, config: &AppConfig, as_json: bool) -> Result<String> {
    match command {
        Commands::Convert(args) => convert(args, config, as_json),
        Commands::DailyFee(args) => {
            let (network, tariff) = resolve(&args.selection, config)?;
            let fee = get_daily_fee(&network, &tariff, args.annual_usage)?;
            Ok(if as_json {
                json!({ "network": network, "tariff": tariff, "daily_fee": fee }).to_string()
            } else {
                format!("{network} {tariff}: ${fee:.4}/day")
            })
        }
        Commands::DemandFee(args) => {
            let (network, tariff) = resolve(&args.selection, config)?;
            let period = args.days.map_or(config.billing, BillingPeriod::days);
            let fee = calculate_demand_fee(&network, &tariff, args.demand_kw, period)?;
            Ok(if as_json {
                json!({
                    "network": network,
                    "tariff": tariff,
                    "demand_kw": args.demand_kw,
                    "days": period.days,
                    "demand_fee": fee,
                })
                .to_string()
            } else {
                format!(
                    "{network} {tariff}: ${fee:.2} for {} kW over {} days",
                    args.demand_kw, period.days
                )
            })
        }
        Commands::Periods(args) => {
            let (network, tariff) = resolve(&args.selection, config)?;
            let periods = match &args.at {
                Some(at) => get_periods_at(&network, &tariff, at)?,
                None => get_periods(&network, &tariff)?,
            };
            Ok(if as_json {
                serde_json::to_string_pretty(periods)?
            } else {
                output::periods_table(periods).to_string()
            })
        }
        Commands::Tariffs(args) => {
            let network = args
                .network
                .clone()
                .or_else(|| config.defaults.network.clone())
                .context("No network given and no default network configured")?;
            let tariffs = list_tariffs(&network)?;
            Ok(if as_json {
                let entries: Vec<_> = tariffs
                    .iter()
                    .map(|(code, name)| json!({ "code": code, "name": name }))
                    .collect();
                serde_json::to_string_pretty(&entries)?
            } else {
                output::tariffs_table(&tariffs).to_string()
            })
        }
        Commands::Networks => Ok(if as_json {
            let entries: Vec<_> = Network::all()
                .iter()
                .map(|network| {
                    json!({
                        "id": network.to_config_value(),
                        "name": network.display_name(),
                        "unknown_tariffs": output::unknown_tariff_handling(*network),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&entries)?
        } else {
            output::networks_table().to_string()
        }),
        Commands::Sensor(args) => {
            let (network, tariff) = resolve(&args.selection, config)?;
            let dump = std::fs::read_to_string(&args.states)
                .with_context(|| format!("Failed to read {}", args.states.display()))?;
            let reader = StatesSnapshot::from_json(&dump)
                .with_context(|| format!("Failed to parse {}", args.states.display()))?;

            let price_entity = args
                .price_entity
                .clone()
                .unwrap_or_else(|| config.sensor.price_entity.clone());
            let mut sensor = TariffSensor::new(&network, &tariff)?
                .with_price_entity(price_entity)
                .with_loss_factors(config.loss_factors);

            let now = timestamp(args.at);
            sensor.update(&reader, now)?;
            info!("Updated {}", sensor.name());

            let entity = sensor.to_entity_state(now);
            Ok(if as_json {
                serde_json::to_string_pretty(&entity)?
            } else {
                output::entity_table(&entity).to_string()
            })
        }
    }
}

fn convert(args: &ConvertArgs, config: &AppConfig, as_json: bool) -> Result<String> {
    let (network, tariff) = resolve(&args.selection, config)?;
    let factors = LossFactors {
        dlf: args.dlf.unwrap_or(config.loss_factors.dlf),
        mlf: args.mlf.unwrap_or(config.loss_factors.mlf),
        market: args.market.unwrap_or(config.loss_factors.market),
    };
    if !factors.is_valid() {
        anyhow::bail!("Loss factors must be finite and positive");
    }

    let at = args.at.unwrap_or_else(|| Utc::now().fixed_offset());
    debug!("Converting {} $/MWh for {} {} at {}", args.rrp, network, tariff, at);
    let price = spot_to_tariff(&at, &network, &tariff, args.rrp, factors)?;

    Ok(if as_json {
        json!({
            "interval_time": at.to_rfc3339(),
            "network": network,
            "tariff": tariff,
            "rrp": args.rrp,
            "price": price,
        })
        .to_string()
    } else {
        format!("{price:.4} c/kWh")
    })
}

/// Network and tariff from the arguments, else from the configured defaults
fn resolve(selection: &Selection, config: &AppConfig) -> Result<(String, String)> {
    let network = selection
        .network
        .clone()
        .or_else(|| config.defaults.network.clone())
        .context("No network given and no default network configured")?;
    let tariff = selection
        .tariff
        .clone()
        .or_else(|| config.defaults.tariff.clone())
        .context("No tariff given and no default tariff configured")?;
    Ok((network, tariff))
}

fn timestamp(at: Option<DateTime<FixedOffset>>) -> DateTime<Utc> {
    at.map_or_else(Utc::now, |at| at.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;
    use std::io::Write;

    fn run(args: &[&str], config: &AppConfig) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("aemo-to-tariff").chain(args.iter().copied()))?;
        execute(&cli.command, config, cli.json)
    }

    fn unity_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.loss_factors = LossFactors::unity();
        config
    }

    #[test]
    fn test_convert_text() {
        let out = run(
            &[
                "convert",
                "-n",
                "energex",
                "-t",
                "6900",
                "--rrp",
                "1000",
                "--at",
                "2024-05-01T17:30:00+10:00",
            ],
            &unity_config(),
        )
        .unwrap();
        assert_eq!(out, "117.8610 c/kWh");
    }

    #[test]
    fn test_convert_uses_configured_defaults() {
        let mut config = unity_config();
        config.defaults.network = Some("energex".to_owned());
        config.defaults.tariff = Some("8400".to_owned());

        let out = run(
            &["convert", "--rrp", "500", "--at", "2024-05-01T12:00:00+10:00", "--json"],
            &config,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!((value["price"].as_f64().unwrap() - 59.648).abs() < 0.001);
        assert_eq!(value["network"], "energex");
    }

    #[test]
    fn test_convert_without_network_fails() {
        let err = run(&["convert", "--rrp", "10"], &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("No network given"));
    }

    #[test]
    fn test_convert_rejects_bad_factor() {
        let err = run(
            &["convert", "-n", "energex", "-t", "6900", "--rrp", "10", "--dlf", "0"],
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Loss factors"));
    }

    #[test]
    fn test_daily_fee() {
        let out = run(
            &["daily-fee", "-n", "energex", "-t", "6800", "--annual-usage", "65000"],
            &AppConfig::default(),
        )
        .unwrap();
        assert_eq!(out, "energex 6800: $1.6470/day");

        let err = run(&["daily-fee", "-n", "energex", "-t", "6800"], &AppConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("annual_usage"));
    }

    #[test]
    fn test_demand_fee_uses_configured_billing_days() {
        let mut config = AppConfig::default();
        config.billing = BillingPeriod::days(60);
        let out = run(
            &["demand-fee", "-n", "energex", "-t", "3700", "--demand-kw", "5", "--json"],
            &config,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["days"], 60);
        assert!((value["demand_fee"].as_f64().unwrap() - 89.98).abs() < 0.001);
    }

    #[test]
    fn test_periods_seasonal() {
        let out = run(
            &[
                "periods",
                "-n",
                "endeavour",
                "-t",
                "N71",
                "--at",
                "2024-01-15T17:00:00+11:00",
                "--json",
            ],
            &AppConfig::default(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["rate"], 20.0116);
        assert_eq!(value[0]["label"], "Peak");
    }

    #[test]
    fn test_periods_unknown_tariff() {
        let err = run(&["periods", "-n", "sapn", "-t", "XYZ"], &AppConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown tariff code"));
    }

    #[test]
    fn test_tariffs_and_networks() {
        let out = run(&["tariffs", "-n", "evoenergy"], &AppConfig::default()).unwrap();
        assert!(out.contains("New Residential TOU Network"));

        let out = run(&["networks", "--json"], &AppConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), Network::all().len());
    }

    #[test]
    fn test_sensor_from_states_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let dump = json!([{
            "entity_id": "sensor.current_rrp",
            "state": "1000",
            "attributes": {},
            "last_changed": "2024-05-01T07:30:00+00:00",
            "last_updated": "2024-05-01T07:30:00+00:00"
        }]);
        file.write_all(dump.to_string().as_bytes()).unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let out = run(
            &[
                "sensor",
                "-n",
                "energex",
                "-t",
                "6900",
                "--states",
                &path,
                "--at",
                "2024-05-01T17:30:00+10:00",
                "--json",
            ],
            &unity_config(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["entity_id"], "sensor.aemo_to_tariff_energex_6900");
        assert_eq!(value["state"], "117.8610");
        assert_eq!(value["attributes"]["rrp"], 1000.0);
    }

    #[test]
    fn test_sensor_missing_states_file() {
        let err = run(
            &["sensor", "-n", "energex", "-t", "6900", "--states", "/nonexistent/states.json"],
            &AppConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
