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

//! Per-network tariff schedule and the converter built on it

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

use crate::error::{Result, TariffError};
use crate::factors::BillingPeriod;
use crate::fees::{DailyFee, DemandCharge};
use crate::network::Network;
use crate::period::{RatePeriod, TariffDefinition};

/// Linear fit of retail price against spot price, used when a tariff is unknown.
///
/// This is a crude estimate, not a lookup result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearApproximation {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearApproximation {
    pub const DEFAULT: Self = Self {
        slope: 1.037869032618134,
        intercept: 5.586606750833143,
    };

    /// Apply to a spot price already expressed in c/kWh
    pub fn apply(&self, rrp_c_kwh: f64) -> f64 {
        rrp_c_kwh * self.slope + self.intercept
    }
}

impl Default for LinearApproximation {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// What `convert` does with a tariff code missing from the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownTariffPolicy {
    Approximate,
    Reject,
}

/// How a caller-supplied tariff code maps onto a table key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TariffKey {
    Exact,
    /// Only the first N characters are significant (suffixes are ignored)
    Prefix(usize),
}

impl TariffKey {
    pub fn normalize<'a>(&self, code: &'a str) -> &'a str {
        match self {
            Self::Exact => code,
            Self::Prefix(len) => match code.char_indices().nth(*len) {
                Some((idx, _)) => code.split_at(idx).0,
                None => code,
            },
        }
    }
}

/// Capabilities every network exposes to the dispatcher
pub trait TariffModel: Send + Sync {
    fn network(&self) -> Network;

    /// Fixed local timezone of the network
    fn timezone(&self) -> Tz;

    /// Price in c/kWh for a loss-adjusted spot price in $/MWh
    fn convert(
        &self,
        interval: DateTime<Utc>,
        tariff_code: &str,
        adjusted_rrp: f64,
    ) -> Result<f64>;

    /// Daily supply fee in dollars; 0.0 when the tariff has none
    fn daily_fee(&self, tariff_code: &str, annual_usage_kwh: Option<f64>) -> Result<f64>;

    /// Demand fee in dollars; 0.0 when the tariff has no demand charge
    fn demand_fee(&self, tariff_code: &str, demand_kw: f64, period: BillingPeriod) -> f64;

    /// Base period list of a tariff
    fn periods(&self, tariff_code: &str) -> Result<&[RatePeriod]>;

    /// Period list in force at an instant (season aware)
    fn periods_at(&self, tariff_code: &str, interval: DateTime<Utc>) -> Result<&[RatePeriod]>;

    /// `(code, name)` of every tariff, ordered by code
    fn tariffs(&self) -> Vec<(&'static str, &'static str)>;
}

/// Static tariff tables of one network
#[derive(Debug)]
pub struct NetworkSchedule {
    network: Network,
    timezone: Tz,
    key: TariffKey,
    unknown_tariff: UnknownTariffPolicy,
    approximation: LinearApproximation,
    tariffs: BTreeMap<&'static str, TariffDefinition>,
    daily_fees: HashMap<&'static str, DailyFee>,
    demand_charges: HashMap<&'static str, DemandCharge>,
}

impl NetworkSchedule {
    pub fn new(network: Network, timezone: Tz) -> Self {
        Self {
            network,
            timezone,
            key: TariffKey::Exact,
            unknown_tariff: UnknownTariffPolicy::Approximate,
            approximation: LinearApproximation::DEFAULT,
            tariffs: BTreeMap::new(),
            daily_fees: HashMap::new(),
            demand_charges: HashMap::new(),
        }
    }

    pub fn tariff_key(mut self, key: TariffKey) -> Self {
        self.key = key;
        self
    }

    pub fn unknown_tariffs(mut self, policy: UnknownTariffPolicy) -> Self {
        self.unknown_tariff = policy;
        self
    }

    pub fn tariff(mut self, definition: TariffDefinition) -> Self {
        self.tariffs.insert(definition.code, definition);
        self
    }

    pub fn supply_fee(mut self, code: &'static str, fee: DailyFee) -> Self {
        self.daily_fees.insert(code, fee);
        self
    }

    pub fn demand_charge(mut self, code: &'static str, charge: DemandCharge) -> Self {
        self.demand_charges.insert(code, charge);
        self
    }

    pub fn unknown_tariff_policy(&self) -> UnknownTariffPolicy {
        self.unknown_tariff
    }

    /// Look up a tariff after key normalisation
    pub fn definition(&self, tariff_code: &str) -> Option<&TariffDefinition> {
        self.tariffs.get(self.key.normalize(tariff_code))
    }

    fn require(&self, tariff_code: &str) -> Result<&TariffDefinition> {
        self.definition(tariff_code)
            .ok_or_else(|| TariffError::UnknownTariff {
                network: self.network.to_string(),
                code: tariff_code.to_owned(),
            })
    }
}

impl TariffModel for NetworkSchedule {
    fn network(&self) -> Network {
        self.network
    }

    fn timezone(&self) -> Tz {
        self.timezone
    }

    fn convert(
        &self,
        interval: DateTime<Utc>,
        tariff_code: &str,
        adjusted_rrp: f64,
    ) -> Result<f64> {
        let local = interval.with_timezone(&self.timezone).naive_local();
        let rrp_c_kwh = adjusted_rrp / 10.0;

        let Some(tariff) = self.definition(tariff_code) else {
            return match self.unknown_tariff {
                UnknownTariffPolicy::Approximate => {
                    warn!(
                        "Unknown {} tariff '{}', approximating from spot price",
                        self.network, tariff_code
                    );
                    Ok(self.approximation.apply(rrp_c_kwh))
                }
                UnknownTariffPolicy::Reject => Err(TariffError::UnknownTariff {
                    network: self.network.to_string(),
                    code: tariff_code.to_owned(),
                }),
            };
        };

        match tariff.rate_at(local) {
            Some(rate) => {
                let price = rrp_c_kwh + rate;
                debug!(
                    "{} {} at {}: {:.4} + {:.4} = {:.4} c/kWh",
                    self.network, tariff.code, local, rrp_c_kwh, rate, price
                );
                Ok(price)
            }
            None => {
                warn!(
                    "No {} period of tariff {} covers {}, approximating from spot price",
                    self.network, tariff.code, local
                );
                Ok(self.approximation.apply(rrp_c_kwh))
            }
        }
    }

    fn daily_fee(&self, tariff_code: &str, annual_usage_kwh: Option<f64>) -> Result<f64> {
        let code = self.key.normalize(tariff_code);
        match self.daily_fees.get(code) {
            Some(fee) => fee.amount(code, annual_usage_kwh),
            None => Ok(0.0),
        }
    }

    fn demand_fee(&self, tariff_code: &str, demand_kw: f64, period: BillingPeriod) -> f64 {
        self.demand_charges
            .get(self.key.normalize(tariff_code))
            .map_or(0.0, |charge| charge.fee(demand_kw, period.days))
    }

    fn periods(&self, tariff_code: &str) -> Result<&[RatePeriod]> {
        Ok(&self.require(tariff_code)?.periods)
    }

    fn periods_at(&self, tariff_code: &str, interval: DateTime<Utc>) -> Result<&[RatePeriod]> {
        let date = interval.with_timezone(&self.timezone).date_naive();
        Ok(self.require(tariff_code)?.periods_on(date))
    }

    fn tariffs(&self) -> Vec<(&'static str, &'static str)> {
        self.tariffs
            .values()
            .map(|definition| (definition.code, definition.name))
            .collect()
    }
}
