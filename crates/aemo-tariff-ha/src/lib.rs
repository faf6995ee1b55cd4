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

//! Home Assistant bridge for aemo-tariff
//!
//! Exposes the converted price as a sensor and registers the conversion
//! functions as services under the `aemo_to_tariff` domain. Entity states
//! are read through [`StateReader`], so nothing here talks to the network.

pub mod errors;
pub mod sensor;
pub mod services;
pub mod state;
pub mod types;

pub use errors::{HaError, HaResult};
pub use sensor::{DEFAULT_PRICE_ENTITY, TariffSensor};
pub use services::{
    ConvertSpotToTariffData, DOMAIN, DailyFeeData, DemandFeeData, ServiceRegistry,
};
pub use state::{StateReader, StatesSnapshot};
pub use types::HaEntityState;
