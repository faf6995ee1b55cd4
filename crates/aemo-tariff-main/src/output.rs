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

//! Table rendering for command results

use aemo_tariff_core::{Network, RatePeriod, TariffModel, UnknownTariffPolicy};
use aemo_tariff_ha::HaEntityState;
use comfy_table::{Attribute, Cell, Table, presets::UTF8_FULL};

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(
        header
            .iter()
            .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

pub fn periods_table(periods: &[RatePeriod]) -> Table {
    let mut table = table(&["Period", "Start", "End", "Rate\n(c/kWh)"]);
    for period in periods {
        let end = if period.wraps_midnight() {
            format!("{} (+1d)", period.end.format("%H:%M"))
        } else {
            period.end.format("%H:%M").to_string()
        };
        table.add_row(vec![
            Cell::new(period.label),
            Cell::new(period.start.format("%H:%M")),
            Cell::new(end),
            Cell::new(format!("{:.4}", period.rate)),
        ]);
    }
    table
}

pub fn tariffs_table(tariffs: &[(&str, &str)]) -> Table {
    let mut table = table(&["Code", "Name"]);
    for (code, name) in tariffs {
        table.add_row(vec![*code, *name]);
    }
    table
}

/// How a network treats tariff codes missing from its tables
pub fn unknown_tariff_handling(network: Network) -> String {
    let converter = network.converter().network();
    if converter != network {
        return format!("via {}", converter.display_name());
    }
    match network.schedule().unknown_tariff_policy() {
        UnknownTariffPolicy::Approximate => "approximate".to_owned(),
        UnknownTariffPolicy::Reject => "reject".to_owned(),
    }
}

pub fn networks_table() -> Table {
    let mut table = table(&["Id", "Network", "Timezone", "Unknown tariffs"]);
    for network in Network::all() {
        table.add_row(vec![
            network.to_config_value().to_owned(),
            network.display_name().to_owned(),
            network.tariff_model().timezone().name().to_owned(),
            unknown_tariff_handling(*network),
        ]);
    }
    table
}

pub fn entity_table(entity: &HaEntityState) -> Table {
    let mut table = table(&["Attribute", "Value"]);
    table.add_row(vec!["entity_id", entity.entity_id.as_str()]);
    table.add_row(vec!["state", entity.state.as_str()]);
    if let Some(attributes) = entity.attributes.as_object() {
        for (key, value) in attributes {
            let value = value
                .as_str()
                .map_or_else(|| value.to_string(), ToOwned::to_owned);
            table.add_row(vec![key.clone(), value]);
        }
    }
    table
}
