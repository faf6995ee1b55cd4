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

//! Spot price to network tariff conversion for Australian distribution networks
//!
//! Wholesale prices published by AEMO are quoted in $/MWh. Retail tariffs are
//! quoted in c/kWh and carry a network charge that depends on the time of day
//! (and for some tariffs the season). This crate holds the network tariff
//! tables and the lookup that combines them with a spot price.
//!
//! ## Effective Price
//!
//! For a known tariff the result is `rrp / 10 + period_rate` where `rrp` has
//! already been scaled by the loss and market factors. Unknown tariffs either
//! fall back to a linear approximation or fail, depending on the network.

pub mod dispatch;
pub mod error;
pub mod factors;
pub mod fees;
pub mod network;
mod networks;
pub mod period;
pub mod schedule;

pub use dispatch::{
    calculate_demand_fee, get_daily_fee, get_periods, get_periods_at, list_tariffs,
    spot_to_tariff,
};
pub use error::{Result, TariffError};
pub use factors::{BillingPeriod, LossFactors};
pub use fees::{DailyFee, DemandCharge, UsageBand};
pub use network::Network;
pub use period::{DefaultRate, RatePeriod, SeasonalPeriods, TariffDefinition, resolve_period};
pub use schedule::{
    LinearApproximation, NetworkSchedule, TariffKey, TariffModel, UnknownTariffPolicy,
};
