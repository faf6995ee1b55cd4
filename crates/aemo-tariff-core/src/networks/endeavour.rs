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

//! Endeavour Energy (western Sydney, Blue Mountains and Illawarra)
//!
//! `N71` switches to a high-season table from November to March. Unknown
//! tariff codes are rejected.

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::fees::DemandCharge;
use crate::network::Network;
use crate::period::{DefaultRate, SeasonalPeriods, TariffDefinition, hm};
use crate::schedule::{NetworkSchedule, UnknownTariffPolicy};

/// Months (1-12) in which the `N71` high-season table applies
pub(crate) const HIGH_SEASON_MONTHS: [u32; 5] = [11, 12, 1, 2, 3];

fn flat(code: &'static str, name: &'static str, rate: f64) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Anytime", hm(0, 0), hm(23, 59), rate)
        .default_rate(DefaultRate::Flat(rate))
}

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::Endeavour, Australia::Sydney)
        .unknown_tariffs(UnknownTariffPolicy::Reject)
        .tariff(flat("N70", "Residential flat", 9.9556))
        .tariff(
            TariffDefinition::new("N71", "Residential seasonal time of use")
                .period("Peak", hm(16, 0), hm(20, 0), 10.8094)
                .period("Off-peak", hm(20, 0), hm(16, 0), 6.8217)
                .seasonal(
                    SeasonalPeriods::new("High season", HIGH_SEASON_MONTHS)
                        .period("Peak", hm(16, 0), hm(20, 0), 20.0116)
                        .period("Off-peak", hm(20, 0), hm(16, 0), 6.8217),
                ),
        )
        .tariff(flat("N90", "General supply non-residential", 11.4402))
        .tariff(
            TariffDefinition::new("N19", "Residential demand time of use")
                .period("Peak", hm(16, 0), hm(20, 0), 5.1207)
                .period("Off-peak", hm(20, 0), hm(16, 0), 2.7183),
        )
        .demand_charge("N19", DemandCharge::PerKwPerMonth(12.8523))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TariffError;
    use crate::factors::BillingPeriod;
    use crate::schedule::TariffModel;
    use chrono::{TimeZone, Utc};

    fn sydney(year: i32, month: u32, day: u32, hour: u32) -> chrono::DateTime<Utc> {
        Australia::Sydney
            .with_ymd_and_hms(year, month, day, hour, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_high_season_peak() {
        let price = SCHEDULE.convert(sydney(2023, 1, 15, 17), "N71", 100.0).unwrap();
        assert!((price - 30.0116).abs() < 0.0001);
    }

    #[test]
    fn test_low_season_peak() {
        let price = SCHEDULE.convert(sydney(2024, 8, 15, 17), "N71", 100.0).unwrap();
        assert!((price - 20.8094).abs() < 0.0001);
    }

    #[test]
    fn test_off_peak() {
        let price = SCHEDULE.convert(sydney(2023, 7, 15, 10), "N71", 100.0).unwrap();
        assert!((price - 16.8217).abs() < 0.0001);
    }

    #[test]
    fn test_season_boundaries() {
        let march = SCHEDULE.convert(sydney(2024, 3, 31, 17), "N71", 0.0).unwrap();
        let april = SCHEDULE.convert(sydney(2024, 4, 1, 17), "N71", 0.0).unwrap();
        let november = SCHEDULE.convert(sydney(2024, 11, 1, 17), "N71", 0.0).unwrap();
        assert!((march - 20.0116).abs() < 0.0001);
        assert!((april - 10.8094).abs() < 0.0001);
        assert!((november - 20.0116).abs() < 0.0001);
    }

    #[test]
    fn test_unknown_tariff_is_rejected() {
        let err = SCHEDULE.convert(sydney(2023, 7, 15, 10), "N999", 100.0).unwrap_err();
        assert_eq!(
            err,
            TariffError::UnknownTariff {
                network: "endeavour".to_string(),
                code: "N999".to_string(),
            }
        );
    }

    #[test]
    fn test_periods_at_follows_season() {
        let summer = SCHEDULE.periods_at("N71", sydney(2024, 1, 10, 12)).unwrap();
        let winter = SCHEDULE.periods_at("N71", sydney(2024, 7, 10, 12)).unwrap();
        assert_eq!(summer[0].rate, 20.0116);
        assert_eq!(winter[0].rate, 10.8094);
        assert_eq!(SCHEDULE.periods("N71").unwrap()[0].rate, 10.8094);
    }

    #[test]
    fn test_fees() {
        assert_eq!(SCHEDULE.daily_fee("N71", None).unwrap(), 0.0);
        let fee = SCHEDULE.demand_fee("N19", 3.0, BillingPeriod::default());
        assert!((fee - 3.0 * 12.8523).abs() < 0.001);
    }
}
