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

//! Defaulted conversion parameters

use serde::{Deserialize, Serialize};

fn default_dlf() -> f64 {
    1.05905
}

fn default_mlf() -> f64 {
    1.0154
}

fn default_market() -> f64 {
    1.0154
}

fn default_billing_days() -> u32 {
    30
}

/// Multipliers applied to the raw spot price before conversion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossFactors {
    /// Distribution loss factor
    #[serde(default = "default_dlf")]
    pub dlf: f64,

    /// Marginal (metering) loss factor
    #[serde(default = "default_mlf")]
    pub mlf: f64,

    /// Market factor
    #[serde(default = "default_market")]
    pub market: f64,
}

impl Default for LossFactors {
    fn default() -> Self {
        Self {
            dlf: default_dlf(),
            mlf: default_mlf(),
            market: default_market(),
        }
    }
}

impl LossFactors {
    /// Factors that leave the spot price untouched
    pub const fn unity() -> Self {
        Self {
            dlf: 1.0,
            mlf: 1.0,
            market: 1.0,
        }
    }

    /// Scale a raw spot price ($/MWh)
    pub fn adjust(&self, rrp: f64) -> f64 {
        rrp * self.dlf * self.mlf * self.market
    }

    pub fn is_valid(&self) -> bool {
        [self.dlf, self.mlf, self.market]
            .iter()
            .all(|factor| factor.is_finite() && *factor > 0.0)
    }
}

/// Length of a demand billing period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    #[serde(default = "default_billing_days")]
    pub days: u32,
}

impl Default for BillingPeriod {
    fn default() -> Self {
        Self {
            days: default_billing_days(),
        }
    }
}

impl BillingPeriod {
    pub const fn days(days: u32) -> Self {
        Self { days }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factors() {
        let factors = LossFactors::default();
        assert_eq!(factors.dlf, 1.05905);
        assert_eq!(factors.mlf, 1.0154);
        assert_eq!(factors.market, 1.0154);
        assert!(factors.is_valid());
    }

    #[test]
    fn test_adjust() {
        assert_eq!(LossFactors::unity().adjust(123.4), 123.4);
        let adjusted = LossFactors::default().adjust(100.0);
        assert!((adjusted - 100.0 * 1.05905 * 1.0154 * 1.0154).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_factors() {
        let mut factors = LossFactors::default();
        factors.mlf = 0.0;
        assert!(!factors.is_valid());
        factors.mlf = f64::NAN;
        assert!(!factors.is_valid());
    }

    #[test]
    fn test_partial_deserialization_keeps_defaults() {
        let factors: LossFactors = serde_json::from_str(r#"{"dlf": 1.1}"#).unwrap();
        assert_eq!(factors.dlf, 1.1);
        assert_eq!(factors.mlf, 1.0154);

        let period: BillingPeriod = serde_json::from_str("{}").unwrap();
        assert_eq!(period, BillingPeriod::default());
        assert_eq!(period.days, 30);
    }
}
