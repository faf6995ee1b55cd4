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

//! Powercor (western Victoria)
//!
//! No demand charges are modelled for this network.

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::fees::DailyFee;
use crate::network::Network;
use crate::period::{DefaultRate, TariffDefinition, hm};
use crate::schedule::NetworkSchedule;

fn flat(code: &'static str, name: &'static str, rate: f64) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Anytime", hm(0, 0), hm(23, 59), rate)
        .default_rate(DefaultRate::Flat(rate))
}

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::Powercor, Australia::Melbourne)
        .tariff(flat("D1", "Residential single rate", 9.1469))
        .tariff(
            TariffDefinition::new("PRTOU", "Residential time of use")
                .period("Peak", hm(15, 0), hm(21, 0), 18.7240)
                .period("Off-peak", hm(21, 0), hm(15, 0), 5.1987),
        )
        .tariff(
            TariffDefinition::new("PRDS", "Residential daytime saver")
                .period("Peak", hm(15, 0), hm(21, 0), 17.9012)
                .period("Solar soak", hm(10, 0), hm(15, 0), 1.7860)
                .period("Off-peak", hm(21, 0), hm(10, 0), 5.0551),
        )
        .tariff(flat("ND1", "Non-residential single rate", 11.0237))
        .supply_fee("D1", DailyFee::Flat(0.4521))
        .supply_fee("PRTOU", DailyFee::Flat(0.4521))
        .supply_fee("PRDS", DailyFee::Flat(0.4521))
        .supply_fee("ND1", DailyFee::Flat(0.6493))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::BillingPeriod;
    use crate::schedule::TariffModel;
    use chrono::{TimeZone, Utc};

    fn melbourne(hour: u32) -> chrono::DateTime<Utc> {
        Australia::Melbourne
            .with_ymd_and_hms(2024, 2, 20, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_daytime_saver() {
        assert!((SCHEDULE.convert(melbourne(12), "PRDS", 0.0).unwrap() - 1.7860).abs() < 0.001);
        assert!((SCHEDULE.convert(melbourne(18), "PRDS", 0.0).unwrap() - 17.9012).abs() < 0.001);
        assert!((SCHEDULE.convert(melbourne(4), "PRDS", 0.0).unwrap() - 5.0551).abs() < 0.001);
    }

    #[test]
    fn test_time_of_use() {
        let price = SCHEDULE.convert(melbourne(15), "PRTOU", 200.0).unwrap();
        assert!((price - 38.7240).abs() < 0.001);
    }

    #[test]
    fn test_fees() {
        assert_eq!(SCHEDULE.daily_fee("ND1", None).unwrap(), 0.6493);
        assert_eq!(SCHEDULE.daily_fee("PRDS", None).unwrap(), 0.4521);
        assert_eq!(SCHEDULE.demand_fee("PRTOU", 5.0, BillingPeriod::default()), 0.0);
    }
}
