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

//! Evoenergy (ACT)
//!
//! Unknown tariff codes are rejected instead of approximated. The tables
//! carry no default rate, so an uncovered time falls back to the linear
//! approximation of the whole price.

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::network::Network;
use crate::period::{TariffDefinition, hm};
use crate::schedule::{NetworkSchedule, UnknownTariffPolicy};

fn closed_tou(code: &'static str, name: &'static str) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Peak", hm(7, 0), hm(9, 0), 14.063)
        .period("Peak", hm(17, 0), hm(20, 0), 14.063)
        .period("Shoulder", hm(9, 0), hm(17, 0), 6.285)
        .period("Shoulder", hm(20, 0), hm(22, 0), 6.285)
        .period("Off-peak", hm(22, 0), hm(7, 0), 3.210)
}

fn new_tou(code: &'static str, name: &'static str) -> TariffDefinition {
    TariffDefinition::new(code, name)
        .period("Peak", hm(7, 0), hm(9, 0), 14.109)
        .period("Peak", hm(17, 0), hm(21, 0), 14.109)
        .period("Solar Soak", hm(11, 0), hm(15, 0), 1.757)
        .period("Off-peak", hm(21, 0), hm(7, 0), 3.918)
        .period("Off-peak", hm(9, 0), hm(11, 0), 3.918)
        .period("Off-peak", hm(15, 0), hm(17, 0), 3.918)
}

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::Evoenergy, Australia::ACT)
        .unknown_tariffs(UnknownTariffPolicy::Reject)
        .tariff(closed_tou("015", "Residential TOU Network (closed)"))
        .tariff(closed_tou("016", "Residential TOU Network (closed) XMC"))
        .tariff(new_tou("017", "New Residential TOU Network"))
        .tariff(new_tou("018", "New Residential TOU Network XMC"))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TariffError;
    use crate::factors::BillingPeriod;
    use crate::schedule::TariffModel;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_overnight_off_peak() {
        // 13:00 UTC in July = 23:00 AEST (no daylight saving)
        let interval = Utc.with_ymd_and_hms(2024, 7, 1, 13, 0, 0).unwrap();
        let price = SCHEDULE.convert(interval, "017", 0.0).unwrap();
        assert!((price - 3.918).abs() < 0.001);
    }

    #[test]
    fn test_solar_soak() {
        // 02:00 UTC = 12:00 AEST
        let interval = Utc.with_ymd_and_hms(2024, 7, 1, 2, 0, 0).unwrap();
        let price = SCHEDULE.convert(interval, "018", 50.0).unwrap();
        assert!((price - 6.757).abs() < 0.001);
    }

    #[test]
    fn test_daylight_saving_shifts_local_time() {
        // 06:30 UTC is 17:30 AEDT in January but 16:30 AEST in July
        let summer = Utc.with_ymd_and_hms(2024, 1, 10, 6, 30, 0).unwrap();
        let winter = Utc.with_ymd_and_hms(2024, 7, 10, 6, 30, 0).unwrap();
        assert!((SCHEDULE.convert(summer, "015", 0.0).unwrap() - 14.063).abs() < 0.001);
        assert!((SCHEDULE.convert(winter, "015", 0.0).unwrap() - 6.285).abs() < 0.001);
    }

    #[test]
    fn test_unknown_tariff_is_rejected() {
        let interval = Utc.with_ymd_and_hms(2024, 7, 1, 2, 0, 0).unwrap();
        let err = SCHEDULE.convert(interval, "019", 50.0).unwrap_err();
        assert!(matches!(err, TariffError::UnknownTariff { ref code, .. } if code == "019"));
    }

    #[test]
    fn test_no_fee_tables() {
        assert_eq!(SCHEDULE.daily_fee("017", None).unwrap(), 0.0);
        assert_eq!(SCHEDULE.demand_fee("017", 5.0, BillingPeriod::default()), 0.0);
    }
}
