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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entity state as returned by `/api/states`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HaEntityState {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: serde_json::Value,
    pub last_changed: String,
    pub last_updated: String,
}

impl HaEntityState {
    /// Fresh state with both timestamps set to `at`
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>, at: DateTime<Utc>) -> Self {
        let stamp = at.to_rfc3339();
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: serde_json::Value::Object(serde_json::Map::new()),
            last_changed: stamp.clone(),
            last_updated: stamp,
        }
    }

    /// Numeric value of the state, if it parses as one
    pub fn numeric_state(&self) -> Option<f64> {
        self.state.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}
