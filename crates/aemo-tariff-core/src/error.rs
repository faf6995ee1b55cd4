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

//! Error types for tariff lookups

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TariffError {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Unknown tariff code for {network}: {code}")]
    UnknownTariff { network: String, code: String },

    #[error("{field} is required for tariff {tariff}")]
    MissingParameter { field: &'static str, tariff: String },
}

pub type Result<T> = std::result::Result<T, TariffError>;
