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

use aemo_tariff_core::TariffError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HaError {
    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Entity {entity_id} has non-numeric state '{state}'")]
    InvalidState { entity_id: String, state: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown service: {0}")]
    UnknownService(String),

    #[error("Service call failed: {service} - {reason}")]
    ServiceCallFailed { service: String, reason: String },

    #[error(transparent)]
    Tariff(#[from] TariffError),
}

pub type HaResult<T> = Result<T, HaError>;
