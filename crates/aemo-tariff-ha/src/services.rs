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

//! Services registered under the `aemo_to_tariff` domain
//!
//! Each service takes its call data as JSON and answers with a JSON object,
//! mirroring a Home Assistant service call with a response.

use std::collections::BTreeMap;
use std::fmt;

use aemo_tariff_core::{
    BillingPeriod, LossFactors, calculate_demand_fee, get_daily_fee, spot_to_tariff,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::errors::{HaError, HaResult};

pub const DOMAIN: &str = "aemo_to_tariff";
pub const SERVICE_CONVERT: &str = "convert_spot_to_tariff";
pub const SERVICE_DAILY_FEE: &str = "get_tariff_daily_fee";
pub const SERVICE_DEMAND_FEE: &str = "get_tariff_demand_fee";

fn default_days() -> u32 {
    BillingPeriod::default().days
}

/// Data of `aemo_to_tariff.convert_spot_to_tariff`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertSpotToTariffData {
    pub interval_time: DateTime<FixedOffset>,
    pub network: String,
    pub tariff: String,
    /// Spot price in $/MWh
    pub rrp: f64,
    #[serde(default)]
    pub dlf: Option<f64>,
    #[serde(default)]
    pub mlf: Option<f64>,
    #[serde(default)]
    pub market: Option<f64>,
}

impl ConvertSpotToTariffData {
    /// Loss factors with unset fields taken from the defaults
    pub fn loss_factors(&self) -> LossFactors {
        let defaults = LossFactors::default();
        LossFactors {
            dlf: self.dlf.unwrap_or(defaults.dlf),
            mlf: self.mlf.unwrap_or(defaults.mlf),
            market: self.market.unwrap_or(defaults.market),
        }
    }
}

/// Data of `aemo_to_tariff.get_tariff_daily_fee`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFeeData {
    pub network: String,
    pub tariff: String,
    /// Annual usage in kWh, needed by usage-banded tariffs
    #[serde(default)]
    pub annual_usage: Option<f64>,
}

/// Data of `aemo_to_tariff.get_tariff_demand_fee`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandFeeData {
    pub network: String,
    pub tariff: String,
    pub demand_kw: f64,
    #[serde(default = "default_days")]
    pub days: u32,
}

type Handler = Box<dyn Fn(Value) -> HaResult<Value> + Send + Sync>;

/// Service handlers keyed by `(domain, service)`
#[derive(Default)]
pub struct ServiceRegistry {
    handlers: BTreeMap<(String, String), Handler>,
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("services", &self.services())
            .finish()
    }
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three tariff services registered
    pub fn with_tariff_services() -> Self {
        let mut registry = Self::new();
        registry.register(DOMAIN, SERVICE_CONVERT, |data| {
            let request: ConvertSpotToTariffData = parse_data(SERVICE_CONVERT, data)?;
            let price = spot_to_tariff(
                &request.interval_time,
                &request.network,
                &request.tariff,
                request.rrp,
                request.loss_factors(),
            )?;
            Ok(json!({ "price": price }))
        });
        registry.register(DOMAIN, SERVICE_DAILY_FEE, |data| {
            let request: DailyFeeData = parse_data(SERVICE_DAILY_FEE, data)?;
            let fee = get_daily_fee(&request.network, &request.tariff, request.annual_usage)?;
            Ok(json!({ "daily_fee": fee }))
        });
        registry.register(DOMAIN, SERVICE_DEMAND_FEE, |data| {
            let request: DemandFeeData = parse_data(SERVICE_DEMAND_FEE, data)?;
            let fee = calculate_demand_fee(
                &request.network,
                &request.tariff,
                request.demand_kw,
                BillingPeriod::days(request.days),
            )?;
            Ok(json!({ "demand_fee": fee }))
        });
        info!("Registered {} services under {}", registry.handlers.len(), DOMAIN);
        registry
    }

    pub fn register<F>(&mut self, domain: &str, service: &str, handler: F)
    where
        F: Fn(Value) -> HaResult<Value> + Send + Sync + 'static,
    {
        let key = (domain.to_owned(), service.to_owned());
        if self.handlers.insert(key, Box::new(handler)).is_some() {
            warn!("Replaced handler for {}.{}", domain, service);
        }
    }

    /// `domain.service` names of every registered service
    pub fn services(&self) -> Vec<String> {
        self.handlers
            .keys()
            .map(|(domain, service)| format!("{domain}.{service}"))
            .collect()
    }

    /// Call a service given as `domain.service`
    pub fn call_service(&self, service: &str, data: Value) -> HaResult<Value> {
        let Some((domain, name)) = service.split_once('.') else {
            return Err(HaError::ServiceCallFailed {
                service: service.to_owned(),
                reason: "Invalid service format, expected 'domain.service'".to_owned(),
            });
        };
        self.call(domain, name, data)
    }

    pub fn call(&self, domain: &str, service: &str, data: Value) -> HaResult<Value> {
        let handler = self
            .handlers
            .get(&(domain.to_owned(), service.to_owned()))
            .ok_or_else(|| HaError::UnknownService(format!("{domain}.{service}")))?;

        debug!("Calling {}.{} with {}", domain, service, data);
        handler(data)
    }
}

fn parse_data<T: DeserializeOwned>(service: &str, data: Value) -> HaResult<T> {
    serde_json::from_value(data).map_err(|e| HaError::ServiceCallFailed {
        service: format!("{DOMAIN}.{service}"),
        reason: e.to_string(),
    })
}
