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

//! Read access to Home Assistant entity states

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::errors::{HaError, HaResult};
use crate::types::HaEntityState;

/// Source of entity states
pub trait StateReader {
    fn state(&self, entity_id: &str) -> HaResult<HaEntityState>;
}

/// In-memory set of entity states, e.g. a saved `/api/states` dump
#[derive(Debug, Clone, Default)]
pub struct StatesSnapshot {
    states: HashMap<String, HaEntityState>,
}

impl StatesSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON array returned by `/api/states`
    pub fn from_json(json: &str) -> HaResult<Self> {
        let states: Vec<HaEntityState> = serde_json::from_str(json)?;
        debug!("Loaded {} entity states", states.len());
        Ok(Self {
            states: states
                .into_iter()
                .map(|state| (state.entity_id.clone(), state))
                .collect(),
        })
    }

    /// Insert or replace a state
    pub fn set(&mut self, entity_id: &str, state: &str, at: DateTime<Utc>) {
        self.states
            .insert(entity_id.to_owned(), HaEntityState::new(entity_id, state, at));
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl StateReader for StatesSnapshot {
    fn state(&self, entity_id: &str) -> HaResult<HaEntityState> {
        self.states
            .get(entity_id)
            .cloned()
            .ok_or_else(|| HaError::EntityNotFound(entity_id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let dump = json!([
            {
                "entity_id": "sensor.current_rrp",
                "state": "87.25",
                "attributes": {"unit_of_measurement": "$/MWh"},
                "last_changed": "2025-10-02T10:00:00Z",
                "last_updated": "2025-10-02T10:00:00Z"
            },
            {
                "entity_id": "sun.sun",
                "state": "above_horizon",
                "last_changed": "2025-10-02T10:00:00Z",
                "last_updated": "2025-10-02T10:00:00Z"
            }
        ])
        .to_string();

        let snapshot = StatesSnapshot::from_json(&dump).unwrap();
        assert_eq!(snapshot.len(), 2);

        let rrp = snapshot.state("sensor.current_rrp").unwrap();
        assert_eq!(rrp.numeric_state(), Some(87.25));
        assert_eq!(snapshot.state("sun.sun").unwrap().numeric_state(), None);
    }

    #[test]
    fn test_missing_entity() {
        let snapshot = StatesSnapshot::new();
        assert!(snapshot.is_empty());
        let result = snapshot.state("sensor.current_rrp");
        assert!(matches!(result, Err(HaError::EntityNotFound(ref id)) if id == "sensor.current_rrp"));
    }

    #[test]
    fn test_invalid_json() {
        let result = StatesSnapshot::from_json("{not json");
        assert!(matches!(result, Err(HaError::JsonError(_))));
    }

    #[test]
    fn test_set_replaces_state() {
        let mut snapshot = StatesSnapshot::new();
        snapshot.set("sensor.current_rrp", "10", Utc::now());
        snapshot.set("sensor.current_rrp", "-25.5", Utc::now());
        let state = snapshot.state("sensor.current_rrp").unwrap();
        assert_eq!(state.numeric_state(), Some(-25.5));
        assert_eq!(snapshot.len(), 1);
    }
}
