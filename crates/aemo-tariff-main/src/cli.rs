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

//! Command line definitions

use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "aemo-to-tariff")]
#[command(author, version, about = "Convert AEMO spot prices to network tariff prices")]
#[command(
    long_about = "Convert AEMO spot prices ($/MWh) into retail-equivalent network tariff prices (c/kWh).\n\
    \nNetwork and tariff default to the values in the configuration file or the\n\
    AEMO_TARIFF_NETWORK / AEMO_TARIFF_TARIFF environment variables.\n\
    \nExamples:\n  \
    aemo-to-tariff convert --network energex --tariff 6900 --rrp 87.5\n  \
    aemo-to-tariff periods --network endeavour --tariff N71 --at 2024-01-15T17:00:00+11:00\n  \
    aemo-to-tariff sensor --states states.json"
)]
pub struct Cli {
    /// Configuration file (defaults to ./aemo-tariff.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a spot price to a tariff price
    Convert(ConvertArgs),

    /// Daily supply fee of a tariff
    DailyFee(DailyFeeArgs),

    /// Demand fee for a peak demand over a billing period
    DemandFee(DemandFeeArgs),

    /// Time-of-day periods of a tariff
    Periods(PeriodsArgs),

    /// Tariffs known for a network
    Tariffs(NetworkArg),

    /// Supported networks
    Networks,

    /// Update the tariff sensor from a saved Home Assistant states dump
    Sensor(SensorArgs),
}

/// Network and tariff selection, falling back to configured defaults
#[derive(Debug, Args)]
pub struct Selection {
    /// Distribution network (e.g. energex, sapn)
    #[arg(long, short)]
    pub network: Option<String>,

    /// Network tariff code (e.g. 6900, RTOU)
    #[arg(long, short)]
    pub tariff: Option<String>,
}

#[derive(Debug, Args)]
pub struct NetworkArg {
    /// Distribution network (e.g. energex, sapn)
    #[arg(long, short)]
    pub network: Option<String>,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Spot price in $/MWh
    #[arg(long, allow_negative_numbers = true)]
    pub rrp: f64,

    /// Interval time as RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<DateTime<FixedOffset>>,

    /// Distribution loss factor
    #[arg(long)]
    pub dlf: Option<f64>,

    /// Marginal loss factor
    #[arg(long)]
    pub mlf: Option<f64>,

    /// Market factor
    #[arg(long)]
    pub market: Option<f64>,
}

#[derive(Debug, Args)]
pub struct DailyFeeArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Annual usage in kWh (required by usage-banded tariffs)
    #[arg(long)]
    pub annual_usage: Option<f64>,
}

#[derive(Debug, Args)]
pub struct DemandFeeArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Peak demand in kW
    #[arg(long)]
    pub demand_kw: f64,

    /// Billing period length in days (defaults to the configured period)
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Debug, Args)]
pub struct PeriodsArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Show the periods in force at this time (RFC 3339), including seasonal tables
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Args)]
pub struct SensorArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// JSON file holding the output of /api/states
    #[arg(long)]
    pub states: PathBuf,

    /// Entity holding the spot price (defaults to the configured entity)
    #[arg(long)]
    pub price_entity: Option<String>,

    /// Update time as RFC 3339 (defaults to now)
    #[arg(long, value_parser = parse_timestamp)]
    pub at: Option<DateTime<FixedOffset>>,
}

fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(value).map_err(|e| format!("invalid RFC 3339 timestamp: {e}"))
}
