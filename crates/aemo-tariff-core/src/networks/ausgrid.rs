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

//! Ausgrid (Sydney, Central Coast and Hunter)
//!
//! No daily or demand fee tables are modelled for this network.

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::network::Network;
use crate::period::{DefaultRate, TariffDefinition, hm};
use crate::schedule::NetworkSchedule;

fn time_of_use(
    code: &'static str,
    name: &'static str,
    peak: f64,
    shoulder: f64,
    off_peak: f64,
) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Peak", hm(15, 0), hm(21, 0), peak)
        .period("Shoulder", hm(7, 0), hm(15, 0), shoulder)
        .period("Shoulder", hm(21, 0), hm(22, 0), shoulder)
        .period("Off-peak", hm(22, 0), hm(7, 0), off_peak)
}

fn flat(code: &'static str, name: &'static str, rate: f64) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Anytime", hm(0, 0), hm(23, 59), rate)
        .default_rate(DefaultRate::Flat(rate))
}

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::Ausgrid, Australia::Sydney)
        .tariff(flat("EA010", "Residential flat", 10.8125))
        .tariff(time_of_use("EA025", "Residential ToU", 26.2463, 6.1597, 4.0212))
        .tariff(flat("EA111", "Residential demand (introductory)", 6.0121))
        .tariff(flat("EA116", "Residential demand", 2.6812))
        .tariff(time_of_use("EA225", "Small business ToU", 32.4815, 7.9915, 4.6130))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::BillingPeriod;
    use crate::schedule::TariffModel;
    use chrono::{TimeZone, Utc};

    fn sydney(month: u32, hour: u32) -> chrono::DateTime<Utc> {
        Australia::Sydney
            .with_ymd_and_hms(2024, month, 12, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_time_of_use_bands() {
        assert!((SCHEDULE.convert(sydney(6, 18), "EA025", 0.0).unwrap() - 26.2463).abs() < 0.001);
        assert!((SCHEDULE.convert(sydney(6, 21), "EA025", 0.0).unwrap() - 6.1597).abs() < 0.001);
        assert!((SCHEDULE.convert(sydney(6, 3), "EA025", 0.0).unwrap() - 4.0212).abs() < 0.001);
        assert!((SCHEDULE.convert(sydney(12, 10), "EA225", 0.0).unwrap() - 7.9915).abs() < 0.001);
    }

    #[test]
    fn test_flat_tariff() {
        let price = SCHEDULE.convert(sydney(1, 12), "EA010", 80.0).unwrap();
        assert!((price - 18.8125).abs() < 0.001);
    }

    #[test]
    fn test_no_fee_tables() {
        assert_eq!(SCHEDULE.daily_fee("EA025", None).unwrap(), 0.0);
        assert_eq!(SCHEDULE.demand_fee("EA116", 3.0, BillingPeriod::default()), 0.0);
    }
}
