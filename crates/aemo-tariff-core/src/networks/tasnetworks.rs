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

//! TasNetworks (Tasmania)

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::fees::{DailyFee, DemandCharge};
use crate::network::Network;
use crate::period::{DefaultRate, TariffDefinition, hm};
use crate::schedule::NetworkSchedule;

fn flat(code: &'static str, name: &'static str, rate: f64) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Anytime", hm(0, 0), hm(23, 59), rate)
        .default_rate(DefaultRate::Flat(rate))
}

/// Weekday peaks morning and evening, off-peak elsewhere
fn time_of_use(code: &'static str, name: &'static str, peak: f64, off_peak: f64) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Peak", hm(7, 0), hm(10, 0), peak)
        .period("Peak", hm(16, 0), hm(21, 0), peak)
        .period("Off-peak", hm(10, 0), hm(16, 0), off_peak)
        .period("Off-peak", hm(21, 0), hm(7, 0), off_peak)
}

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::TasNetworks, Australia::Hobart)
        .tariff(flat("TAS31", "Residential light and power", 10.349))
        .tariff(flat("TAS41", "Residential heating and hot water", 6.216))
        .tariff(flat("TAS22", "Business general", 12.735))
        .tariff(time_of_use("TAS93", "Residential time of use", 18.066, 5.461))
        .tariff(time_of_use("TAS94", "Residential time of use demand", 4.215, 1.987))
        .supply_fee("TAS31", DailyFee::Flat(0.6187))
        .supply_fee("TAS41", DailyFee::Flat(0.0816))
        .supply_fee("TAS22", DailyFee::Flat(0.6947))
        .supply_fee("TAS93", DailyFee::Flat(0.6187))
        .supply_fee("TAS94", DailyFee::Flat(0.6187))
        .demand_charge("TAS94", DemandCharge::PerKwPerDay(0.3211))
});
