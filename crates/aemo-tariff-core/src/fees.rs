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

//! Daily supply fees and demand charges

use serde::Serialize;

use crate::error::{Result, TariffError};

/// Demand charges quoted per month are normalised with a fixed 30-day month
pub const DEMAND_MONTH_DAYS: f64 = 30.0;

/// One bracket of a usage-banded daily fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UsageBand {
    /// Inclusive annual usage ceiling in kWh; `None` for the open top band
    pub up_to_kwh: Option<f64>,

    /// Daily fee in dollars
    pub fee: f64,
}

impl UsageBand {
    pub fn up_to(up_to_kwh: f64, fee: f64) -> Self {
        Self {
            up_to_kwh: Some(up_to_kwh),
            fee,
        }
    }

    pub fn above(fee: f64) -> Self {
        Self {
            up_to_kwh: None,
            fee,
        }
    }

    fn covers(&self, annual_usage_kwh: f64) -> bool {
        self.up_to_kwh
            .is_none_or(|ceiling| annual_usage_kwh <= ceiling)
    }
}

/// Daily supply charge for a tariff
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DailyFee {
    Flat(f64),
    /// Brackets in ascending order of ceiling
    Banded(Vec<UsageBand>),
}

impl DailyFee {
    pub fn is_banded(&self) -> bool {
        matches!(self, Self::Banded(_))
    }

    /// Daily fee in dollars; banded fees need the annual usage
    pub fn amount(&self, tariff_code: &str, annual_usage_kwh: Option<f64>) -> Result<f64> {
        match self {
            Self::Flat(fee) => Ok(*fee),
            Self::Banded(bands) => {
                let usage = annual_usage_kwh.ok_or_else(|| TariffError::MissingParameter {
                    field: "annual_usage",
                    tariff: tariff_code.to_owned(),
                })?;

                Ok(bands
                    .iter()
                    .find(|band| band.covers(usage))
                    .or_else(|| bands.last())
                    .map_or(0.0, |band| band.fee))
            }
        }
    }
}

/// Charge on peak demand (kW) over a billing period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DemandCharge {
    /// $/kW/month, spread over [`DEMAND_MONTH_DAYS`]
    PerKwPerMonth(f64),
    /// $/kW/day
    PerKwPerDay(f64),
}

impl DemandCharge {
    pub fn daily_rate(&self) -> f64 {
        match self {
            Self::PerKwPerMonth(charge) => charge / DEMAND_MONTH_DAYS,
            Self::PerKwPerDay(charge) => *charge,
        }
    }

    /// Fee in dollars for `demand_kw` held over `days`
    pub fn fee(&self, demand_kw: f64, days: u32) -> f64 {
        demand_kw * self.daily_rate() * f64::from(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banded() -> DailyFee {
        DailyFee::Banded(vec![
            UsageBand::up_to(20_000.0, 0.739),
            UsageBand::up_to(40_000.0, 1.033),
            UsageBand::up_to(60_000.0, 1.322),
            UsageBand::up_to(80_000.0, 1.608),
            UsageBand::above(1.888),
        ])
    }

    #[test]
    fn test_flat_fee_ignores_usage() {
        let fee = DailyFee::Flat(0.556);
        assert_eq!(fee.amount("8400", None).unwrap(), 0.556);
        assert_eq!(fee.amount("8400", Some(1.0e6)).unwrap(), 0.556);
        assert!(!fee.is_banded());
    }

    #[test]
    fn test_band_ceilings_are_inclusive() {
        let fee = banded();
        assert_eq!(fee.amount("6000", Some(20_000.0)).unwrap(), 0.739);
        assert_eq!(fee.amount("6000", Some(20_000.5)).unwrap(), 1.033);
        assert_eq!(fee.amount("6000", Some(80_000.0)).unwrap(), 1.608);
        assert_eq!(fee.amount("6000", Some(80_001.0)).unwrap(), 1.888);
        assert_eq!(fee.amount("6000", Some(0.0)).unwrap(), 0.739);
    }

    #[test]
    fn test_banded_fee_requires_usage() {
        let err = banded().amount("6000", None).unwrap_err();
        assert_eq!(
            err,
            TariffError::MissingParameter {
                field: "annual_usage",
                tariff: "6000".to_string(),
            }
        );
        assert!(err.to_string().contains("annual_usage"));
    }

    #[test]
    fn test_monthly_demand_charge_uses_thirty_day_month() {
        let charge = DemandCharge::PerKwPerMonth(8.998);
        assert!((charge.daily_rate() - 8.998 / 30.0).abs() < 1e-12);
        assert!((charge.fee(5.0, 30) - 5.0 * 8.998).abs() < 1e-9);
        assert!((charge.fee(5.0, 31) - 5.0 * 8.998 * 31.0 / 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_demand_charge() {
        let charge = DemandCharge::PerKwPerDay(8.42);
        assert!((charge.fee(2.0, 10) - 168.4).abs() < 1e-9);
    }

    #[test]
    fn test_demand_fee_is_linear() {
        let charge = DemandCharge::PerKwPerMonth(15.254);
        let base = charge.fee(3.5, 30);
        assert!((charge.fee(7.0, 30) - 2.0 * base).abs() < 1e-9);
        assert!((charge.fee(3.5, 60) - 2.0 * base).abs() < 1e-9);
        assert_eq!(charge.fee(0.0, 30), 0.0);
    }
}
