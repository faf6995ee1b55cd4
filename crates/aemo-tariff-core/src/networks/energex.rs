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

//! Energex (south-east Queensland)
//!
//! Tariff codes are matched on their first four characters, so retailer
//! suffixes such as `6900_xyz` resolve to `6900`.

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::fees::{DailyFee, DemandCharge, UsageBand};
use crate::network::Network;
use crate::period::{DefaultRate, TariffDefinition, hm};
use crate::schedule::{NetworkSchedule, TariffKey};

fn anytime(code: &'static str, name: &'static str, rate: f64) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Anytime", hm(0, 0), hm(23, 59), rate)
        .default_rate(DefaultRate::Flat(rate))
}

fn usage_bands(fees: [f64; 5]) -> DailyFee {
    let [band1, band2, band3, band4, band5] = fees;
    DailyFee::Banded(vec![
        UsageBand::up_to(20_000.0, band1),
        UsageBand::up_to(40_000.0, band2),
        UsageBand::up_to(60_000.0, band3),
        UsageBand::up_to(80_000.0, band4),
        UsageBand::above(band5),
    ])
}

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::Energex, Australia::Brisbane)
        .tariff_key(TariffKey::Prefix(4))
        .tariff(anytime("8400", "Residential Flat", 9.648))
        .tariff(anytime("3900", "Residential Transitional Demand", 4.085))
        .tariff(anytime("3700", "Residential Demand", 3.320))
        .tariff(
            TariffDefinition::new("6900", "Residential Time of Use Energy")
                .period("Evening", hm(16, 0), hm(21, 0), 17.861)
                .period("Overnight", hm(21, 0), hm(9, 0), 6.268)
                .period("Day", hm(9, 0), hm(16, 0), 4.066)
                .default_rate(DefaultRate::ByLabel(vec![
                    ("Evening", 17.861),
                    ("Overnight", 6.268),
                    ("Day", 4.066),
                ])),
        )
        .tariff(anytime("3600", "Small Business Demand", 5.616))
        .tariff(anytime("3800", "Small Business Transitional Demand", 6.558))
        .tariff(anytime("6000", "Small Business Wide IFT", 10.359))
        // The published fallback differs from the period rate
        .tariff(
            TariffDefinition::new("8500", "Small Business Flat")
                .period("Anytime", hm(0, 0), hm(23, 59), 10.359)
                .default_rate(DefaultRate::Flat(10.195)),
        )
        .tariff(
            TariffDefinition::new("6800", "Small Business ToU Energy")
                .period("Day", hm(9, 0), hm(16, 0), 4.356)
                .period("Evening", hm(16, 0), hm(21, 0), 19.219)
                .period("Overnight", hm(21, 0), hm(9, 0), 14.097)
                .default_rate(DefaultRate::ByLabel(vec![
                    ("Day", 4.356),
                    ("Evening", 19.219),
                    ("Overnight", 14.097),
                ])),
        )
        .tariff(anytime("6600", "Large Residential Energy", 9.648))
        .tariff(anytime("6700", "Large Business Energy", 10.195))
        .tariff(anytime("7200", "LV Demand Time-of-Use", 2.484))
        .tariff(anytime("8100", "Demand Large", 1.301))
        .tariff(anytime("8300", "Demand Small", 1.799))
        .supply_fee("8400", DailyFee::Flat(0.556))
        .supply_fee("3900", DailyFee::Flat(0.556))
        .supply_fee("3700", DailyFee::Flat(0.556))
        .supply_fee("6900", DailyFee::Flat(0.556))
        .supply_fee("8500", DailyFee::Flat(0.739))
        .supply_fee("3600", DailyFee::Flat(0.739))
        .supply_fee("3800", DailyFee::Flat(0.739))
        .supply_fee("6000", usage_bands([0.739, 1.033, 1.322, 1.608, 1.888]))
        .supply_fee("6800", usage_bands([0.739, 1.041, 1.343, 1.647, 1.950]))
        .supply_fee("6600", DailyFee::Flat(5.273))
        .supply_fee("6700", DailyFee::Flat(5.273))
        .supply_fee("7200", DailyFee::Flat(4.994))
        .supply_fee("8100", DailyFee::Flat(37.740))
        .supply_fee("8300", DailyFee::Flat(5.273))
        .demand_charge("3700", DemandCharge::PerKwPerMonth(8.998))
        .demand_charge("3900", DemandCharge::PerKwPerMonth(5.127))
        .demand_charge("3600", DemandCharge::PerKwPerMonth(10.289))
        .demand_charge("3800", DemandCharge::PerKwPerMonth(4.975))
        // Peak demand only, excess demand is not modelled
        .demand_charge("7200", DemandCharge::PerKwPerMonth(15.254))
        // kVA based
        .demand_charge("8100", DemandCharge::PerKwPerMonth(15.773))
        .demand_charge("8300", DemandCharge::PerKwPerMonth(15.704))
});
