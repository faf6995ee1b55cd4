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

//! Generic Victorian tariffs
//!
//! Only the period and fee tables live here. Price conversion for this
//! network goes through Endeavour (see [`crate::Network::converter`]).

use std::sync::LazyLock;

use chrono_tz::Australia;

use crate::fees::{DailyFee, DemandCharge};
use crate::network::Network;
use crate::period::{DefaultRate, TariffDefinition, hm};
use crate::schedule::NetworkSchedule;

pub(crate) static SCHEDULE: LazyLock<NetworkSchedule> = LazyLock::new(|| {
    NetworkSchedule::new(Network::Victoria, Australia::Melbourne)
        .tariff(
            TariffDefinition::new("VRSR", "Residential single rate")
                .period("Anytime", hm(0, 0), hm(23, 59), 10.2113)
                .default_rate(DefaultRate::Flat(10.2113)),
        )
        .tariff(
            TariffDefinition::new("VRTOU", "Residential time of use")
                .period("Peak", hm(15, 0), hm(21, 0), 17.3321)
                .period("Off-peak", hm(21, 0), hm(15, 0), 4.9218),
        )
        .tariff(
            TariffDefinition::new("VRDEM", "Residential demand")
                .period("Peak", hm(15, 0), hm(21, 0), 8.4416)
                .period("Off-peak", hm(21, 0), hm(15, 0), 3.7205),
        )
        .tariff(
            TariffDefinition::new("VSBTOU", "Small business time of use")
                .period("Peak", hm(9, 0), hm(21, 0), 19.8110)
                .period("Off-peak", hm(21, 0), hm(9, 0), 6.1204),
        )
        .supply_fee("VRSR", DailyFee::Flat(1.0123))
        .supply_fee("VRTOU", DailyFee::Flat(1.0123))
        .supply_fee("VRDEM", DailyFee::Flat(0.8834))
        .supply_fee("VSBTOU", DailyFee::Flat(1.3378))
        .demand_charge("VRDEM", DemandCharge::PerKwPerMonth(7.9020))
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::BillingPeriod;
    use crate::schedule::TariffModel;

    #[test]
    fn test_periods() {
        let periods = SCHEDULE.periods("VSBTOU").unwrap();
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].label, "Peak");
        assert_eq!(periods[1].rate, 6.1204);
    }

    #[test]
    fn test_fees() {
        assert_eq!(SCHEDULE.daily_fee("VRDEM", None).unwrap(), 0.8834);
        assert_eq!(SCHEDULE.daily_fee("N71", None).unwrap(), 0.0);

        let fee = SCHEDULE.demand_fee("VRDEM", 2.5, BillingPeriod::days(60));
        assert!((fee - 2.5 * 7.9020 * 2.0).abs() < 0.001);
    }
}
