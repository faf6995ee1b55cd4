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

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::TariffError;
use crate::networks;
use crate::schedule::{NetworkSchedule, TariffModel};

/// Supported distribution networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// South-east Queensland
    Energex,
    /// Sydney, Central Coast and Hunter
    Ausgrid,
    /// Australian Capital Territory
    Evoenergy,
    /// SA Power Networks
    Sapn,
    /// Tasmania
    TasNetworks,
    /// Western Sydney, Blue Mountains and Illawarra
    Endeavour,
    /// Western Victoria
    Powercor,
    /// Generic Victorian tables
    Victoria,
}

impl Network {
    /// Get human-readable name for the network
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Energex => "Energex",
            Self::Ausgrid => "Ausgrid",
            Self::Evoenergy => "Evoenergy",
            Self::Sapn => "SA Power Networks",
            Self::TasNetworks => "TasNetworks",
            Self::Endeavour => "Endeavour Energy",
            Self::Powercor => "Powercor",
            Self::Victoria => "Victoria",
        }
    }

    /// Identifier accepted by [`Network::from_str`] (lowercase)
    pub fn to_config_value(&self) -> &'static str {
        match self {
            Self::Energex => "energex",
            Self::Ausgrid => "ausgrid",
            Self::Evoenergy => "evoenergy",
            Self::Sapn => "sapn",
            Self::TasNetworks => "tasnetworks",
            Self::Endeavour => "endeavour",
            Self::Powercor => "powercor",
            Self::Victoria => "victoria",
        }
    }

    /// List all supported networks
    pub fn all() -> &'static [Network] {
        &[
            Self::Energex,
            Self::Ausgrid,
            Self::Evoenergy,
            Self::Sapn,
            Self::TasNetworks,
            Self::Endeavour,
            Self::Powercor,
            Self::Victoria,
        ]
    }

    /// The network's own tariff and fee tables
    pub fn schedule(&self) -> &'static NetworkSchedule {
        let schedule = match self {
            Self::Energex => &networks::energex::SCHEDULE,
            Self::Ausgrid => &networks::ausgrid::SCHEDULE,
            Self::Evoenergy => &networks::evoenergy::SCHEDULE,
            Self::Sapn => &networks::sapower::SCHEDULE,
            Self::TasNetworks => &networks::tasnetworks::SCHEDULE,
            Self::Endeavour => &networks::endeavour::SCHEDULE,
            Self::Powercor => &networks::powercor::SCHEDULE,
            Self::Victoria => &networks::victoria::SCHEDULE,
        };
        LazyLock::force(schedule)
    }

    /// Model used for fees and period introspection
    pub fn tariff_model(&self) -> &'static dyn TariffModel {
        self.schedule()
    }

    /// Model used for price conversion.
    ///
    /// Victoria converts through Endeavour's tables while keeping its own
    /// fee and period tables.
    pub fn converter(&self) -> &'static dyn TariffModel {
        match self {
            Self::Victoria => Self::Endeavour.schedule(),
            Self::Energex
            | Self::Ausgrid
            | Self::Evoenergy
            | Self::Sapn
            | Self::TasNetworks
            | Self::Endeavour
            | Self::Powercor => self.schedule(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_config_value())
    }
}

impl FromStr for Network {
    type Err = TariffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|network| network.to_config_value() == name)
            .ok_or(TariffError::UnknownNetwork(name))
    }
}
