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

//! Time-of-day rate periods and tariff definitions
//!
//! A tariff is an ordered list of [`RatePeriod`] windows. Resolution walks the
//! list in declaration order and takes the first window containing the local
//! time, so overlapping windows are legal and the earlier one wins.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::warn;

/// Wall-clock time from literal hour and minute values used in the tables
pub(crate) fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// A named time-of-day window with its network rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatePeriod {
    /// Display label (e.g. "Peak"); several periods may share one
    pub label: &'static str,

    /// Window start (inclusive)
    pub start: NaiveTime,

    /// Window end (exclusive); earlier than `start` for windows spanning midnight
    pub end: NaiveTime,

    /// Network rate in c/kWh
    pub rate: f64,
}

impl RatePeriod {
    pub fn new(label: &'static str, start: NaiveTime, end: NaiveTime, rate: f64) -> Self {
        Self {
            label,
            start,
            end,
            rate,
        }
    }

    /// Whether the window spans midnight (e.g. 22:00-07:00)
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Check if a local time falls inside this window
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.wraps_midnight() {
            time >= self.start || time < self.end
        } else {
            self.start <= time && time < self.end
        }
    }
}

/// Find the first period containing `time`, in table order
pub fn resolve_period(periods: &[RatePeriod], time: NaiveTime) -> Option<&RatePeriod> {
    periods.iter().find(|period| period.contains(time))
}

/// Last-resort rate used when no period matches
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DefaultRate {
    Flat(f64),
    /// Rates keyed by label; the first entry is the fallback
    ByLabel(Vec<(&'static str, f64)>),
}

impl DefaultRate {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Flat(rate) => Some(*rate),
            Self::ByLabel(rates) => rates.first().map(|(_, rate)| *rate),
        }
    }
}

/// Alternative period list in force during some calendar months
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalPeriods {
    pub label: &'static str,

    /// Months (1-12) in which `periods` replace the base list
    pub months: Vec<u32>,

    pub periods: Vec<RatePeriod>,
}

impl SeasonalPeriods {
    pub fn new(label: &'static str, months: impl Into<Vec<u32>>) -> Self {
        Self {
            label,
            months: months.into(),
            periods: Vec::new(),
        }
    }

    pub fn period(mut self, label: &'static str, start: NaiveTime, end: NaiveTime, rate: f64) -> Self {
        self.periods.push(RatePeriod::new(label, start, end, rate));
        self
    }

    pub fn applies_to(&self, date: NaiveDate) -> bool {
        self.months.contains(&date.month())
    }
}

/// A network tariff: name, ordered periods and fallbacks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TariffDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub periods: Vec<RatePeriod>,
    pub default_rate: Option<DefaultRate>,
    pub seasonal: Option<SeasonalPeriods>,
}

impl TariffDefinition {
    pub fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            periods: Vec::new(),
            default_rate: None,
            seasonal: None,
        }
    }

    pub fn period(mut self, label: &'static str, start: NaiveTime, end: NaiveTime, rate: f64) -> Self {
        self.periods.push(RatePeriod::new(label, start, end, rate));
        self
    }

    pub fn default_rate(mut self, rate: DefaultRate) -> Self {
        self.default_rate = Some(rate);
        self
    }

    pub fn seasonal(mut self, seasonal: SeasonalPeriods) -> Self {
        self.seasonal = Some(seasonal);
        self
    }

    /// Periods in force on a local date
    pub fn periods_on(&self, date: NaiveDate) -> &[RatePeriod] {
        match &self.seasonal {
            Some(season) if season.applies_to(date) => &season.periods,
            Some(_) | None => &self.periods,
        }
    }

    /// Network rate at a local date and time.
    ///
    /// Returns `None` only when no period matches and the tariff has no
    /// default rate.
    pub fn rate_at(&self, local: NaiveDateTime) -> Option<f64> {
        let time = local.time();
        if let Some(period) = resolve_period(self.periods_on(local.date()), time) {
            return Some(period.rate);
        }

        let fallback = self.default_rate.as_ref().and_then(DefaultRate::value);
        if let Some(rate) = fallback {
            warn!(
                "No period of tariff {} covers {}, using default rate {}",
                self.code, time, rate
            );
        }
        fallback
    }
}
