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

//! Network-name based entry points
//!
//! Every function parses the network name case-insensitively and fails with
//! [`TariffError::UnknownNetwork`] for anything outside [`Network::all`].
//!
//! [`TariffError::UnknownNetwork`]: crate::TariffError::UnknownNetwork

use chrono::{DateTime, TimeZone, Utc};

use crate::error::Result;
use crate::factors::{BillingPeriod, LossFactors};
use crate::network::Network;
use crate::period::RatePeriod;

/// Convert a spot price ($/MWh) to a retail-equivalent price (c/kWh).
///
/// The spot price is scaled by the loss and market factors before it is
/// handed to the network's converter.
pub fn spot_to_tariff<Z: TimeZone>(
    interval: &DateTime<Z>,
    network: &str,
    tariff: &str,
    rrp: f64,
    factors: LossFactors,
) -> Result<f64> {
    let network: Network = network.parse()?;
    let adjusted_rrp = factors.adjust(rrp);
    network
        .converter()
        .convert(interval.with_timezone(&Utc), tariff, adjusted_rrp)
}

/// Daily supply fee in dollars.
///
/// Returns 0.0 for networks or tariffs without a fee table. Usage-banded
/// tariffs need `annual_usage_kwh`.
pub fn get_daily_fee(network: &str, tariff: &str, annual_usage_kwh: Option<f64>) -> Result<f64> {
    let network: Network = network.parse()?;
    network.tariff_model().daily_fee(tariff, annual_usage_kwh)
}

/// Demand fee in dollars for a peak demand held over a billing period
pub fn calculate_demand_fee(
    network: &str,
    tariff: &str,
    demand_kw: f64,
    period: BillingPeriod,
) -> Result<f64> {
    let network: Network = network.parse()?;
    Ok(network.tariff_model().demand_fee(tariff, demand_kw, period))
}

/// Base period list of a tariff; unknown codes always fail
pub fn get_periods(network: &str, tariff: &str) -> Result<&'static [RatePeriod]> {
    let network: Network = network.parse()?;
    network.tariff_model().periods(tariff)
}

/// Period list in force at `interval`, taking seasonal tables into account
pub fn get_periods_at<Z: TimeZone>(
    network: &str,
    tariff: &str,
    interval: &DateTime<Z>,
) -> Result<&'static [RatePeriod]> {
    let network: Network = network.parse()?;
    network
        .tariff_model()
        .periods_at(tariff, interval.with_timezone(&Utc))
}

/// `(code, name)` of every tariff of a network, ordered by code
pub fn list_tariffs(network: &str) -> Result<Vec<(&'static str, &'static str)>> {
    let network: Network = network.parse()?;
    Ok(network.tariff_model().tariffs())
}
