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

//! Static tariff tables, one module per distribution network

pub(crate) mod ausgrid;
pub(crate) mod endeavour;
pub(crate) mod energex;
pub(crate) mod evoenergy;
pub(crate) mod powercor;
pub(crate) mod sapower;
pub(crate) mod tasnetworks;
pub(crate) mod victoria;
