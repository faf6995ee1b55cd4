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

//! SA Power Networks
//!
//! Demand charges are quoted per kW per day. When no period matches, the
//! first period's rate applies.

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::fees::{DailyFee, DemandCharge};
use crate::network::Network;
use crate::period::{DefaultRate, TariffDefinition, hm};
use crate::schedule::NetworkSchedule;

/// Two-rate tariff with a solar sponge window.
///
/// Off-peak wraps through the middle of the day and is declared first, so it
/// shadows Solar Sponge everywhere except 14:00-15:00 where Peak wins.
fn residential_tou(
    code: &'static str,
    name: &'static str,
    peak: f64,
    off_peak: f64,
    solar_sponge: f64,
) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Peak", hm(14, 0), hm(20, 0), peak)
        .period("Off-peak", hm(20, 0), hm(14, 0), off_peak)
        .period("Solar Sponge", hm(10, 0), hm(15, 0), solar_sponge)
        .default_rate(DefaultRate::Flat(peak))
}

fn business_tou(code: &'static str, name: &'static str, peak: f64, off_peak: f64) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Peak", hm(7, 0), hm(21, 0), peak)
        .period("Off-peak", hm(21, 0), hm(7, 0), off_peak)
        .default_rate(DefaultRate::Flat(peak))
}

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::Sapn, Australia::Adelaide)
        .tariff(
            TariffDefinition::new("RSR", "Residential Single Rate")
                .period("Anytime", hm(0, 0), hm(23, 59), 15.04)
                .default_rate(DefaultRate::Flat(15.04)),
        )
        .tariff(residential_tou("RTOU", "Residential Time of Use", 18.79, 7.56, 3.81))
        .tariff(residential_tou("RPRO", "Residential Prosumer", 18.79, 7.56, 3.81))
        .tariff(residential_tou("RELE", "Residential Electrify", 33.09, 9.78, 3.01))
        .tariff(business_tou("SBTOU", "Small Business Time of Use", 25.68, 9.69))
        .tariff(business_tou("SBTOUE", "Small Business Time of Use Electrify", 32.57, 9.60))
        .supply_fee("RSR", DailyFee::Flat(57.53))
        .supply_fee("RTOU", DailyFee::Flat(57.53))
        .supply_fee("RPRO", DailyFee::Flat(57.53))
        .supply_fee("RELE", DailyFee::Flat(57.53))
        .supply_fee("SBTOU", DailyFee::Flat(72.59))
        .supply_fee("SBTOUE", DailyFee::Flat(72.59))
        .demand_charge("RPRO", DemandCharge::PerKwPerDay(83.39))
        .demand_charge("SBTOUD", DemandCharge::PerKwPerDay(8.42))
});
