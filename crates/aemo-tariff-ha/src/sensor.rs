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

//! Converted price sensor

use aemo_tariff_core::{LossFactors, Network, spot_to_tariff};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::errors::{HaError, HaResult};
use crate::state::StateReader;
use crate::types::HaEntityState;

/// Entity publishing the current spot price ($/MWh)
pub const DEFAULT_PRICE_ENTITY: &str = "sensor.current_rrp";

/// Sensor exposing the spot price converted to a network tariff (c/kWh)
#[derive(Debug, Clone)]
pub struct TariffSensor {
    network: String,
    tariff: String,
    price_entity: String,
    factors: LossFactors,
    state: Option<f64>,
    attributes: Map<String, Value>,
}

impl TariffSensor {
    /// Fails for unknown network names
    pub fn new(network: &str, tariff: &str) -> HaResult<Self> {
        network.parse::<Network>()?;
        Ok(Self {
            network: network.to_owned(),
            tariff: tariff.to_owned(),
            price_entity: DEFAULT_PRICE_ENTITY.to_owned(),
            factors: LossFactors::default(),
            state: None,
            attributes: Map::new(),
        })
    }

    pub fn with_price_entity(mut self, entity_id: impl Into<String>) -> Self {
        self.price_entity = entity_id.into();
        self
    }

    pub fn with_loss_factors(mut self, factors: LossFactors) -> Self {
        self.factors = factors;
        self
    }

    pub fn name(&self) -> String {
        format!("AEMO to Tariff - {} - {}", self.network, self.tariff)
    }

    /// Entity id derived from the network and tariff
    pub fn entity_id(&self) -> String {
        let slug: String = format!("aemo_to_tariff_{}_{}", self.network, self.tariff)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        format!("sensor.{slug}")
    }

    pub fn price_entity(&self) -> &str {
        &self.price_entity
    }

    /// Last converted price in c/kWh; `None` before the first update
    pub fn state(&self) -> Option<f64> {
        self.state
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Read the spot price and recompute the converted price.
    ///
    /// On failure the previous state and attributes are kept.
    pub fn update(&mut self, reader: &dyn StateReader, now: DateTime<Utc>) -> HaResult<f64> {
        let price_state = reader.state(&self.price_entity)?;
        let Some(rrp) = price_state.numeric_state() else {
            warn!(
                "Price entity {} has non-numeric state '{}'",
                self.price_entity, price_state.state
            );
            return Err(HaError::InvalidState {
                entity_id: self.price_entity.clone(),
                state: price_state.state,
            });
        };

        let price = spot_to_tariff(&now, &self.network, &self.tariff, rrp, self.factors)?;
        debug!("{}: rrp {} $/MWh -> {:.4} c/kWh", self.name(), rrp, price);

        self.state = Some(price);
        self.attributes
            .insert("network".to_owned(), json!(self.network));
        self.attributes.insert("tariff".to_owned(), json!(self.tariff));
        self.attributes.insert("rrp".to_owned(), json!(rrp));
        Ok(price)
    }

    /// Current state in the shape Home Assistant publishes
    pub fn to_entity_state(&self, now: DateTime<Utc>) -> HaEntityState {
        let state = self
            .state
            .map_or_else(|| "unknown".to_owned(), |price| format!("{price:.4}"));
        let mut attributes = self.attributes.clone();
        attributes.insert("friendly_name".to_owned(), json!(self.name()));
        attributes.insert("unit_of_measurement".to_owned(), json!("c/kWh"));

        let mut entity = HaEntityState::new(self.entity_id(), state, now);
        entity.attributes = Value::Object(attributes);
        entity
    }
}
