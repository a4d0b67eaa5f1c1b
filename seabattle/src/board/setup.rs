// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validation of a fleet before it is allowed onto a board.
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::{
    board::{Coordinate, FleetError},
    config::{BoardConfig, DeckClass},
    ships::Ship,
};

/// Check a fleet against the rules in `config`, in order: the number of ships, the
/// number of ships of each deck length, then overlap and adjacency.
///
/// Placement is checked in input order. Each ship is compared only against the forbidden
/// zones of the ships listed before it, so the reported coordinate always belongs to the
/// later of the two conflicting ships.
pub fn validate(ships: &[Ship], config: &BoardConfig) -> Result<(), FleetError> {
    check_size(ships, config)?;
    check_composition(ships, config)?;
    check_placement(ships, config)
}

fn check_size(ships: &[Ship], config: &BoardConfig) -> Result<(), FleetError> {
    let expected = config.fleet.total_ships();
    if ships.len() != expected {
        return Err(FleetError::InvalidFleetSize {
            expected,
            actual: ships.len(),
        });
    }
    Ok(())
}

fn check_composition(ships: &[Ship], config: &BoardConfig) -> Result<(), FleetError> {
    let mut actual = BTreeMap::new();
    for ship in ships {
        *actual.entry(ship.len()).or_insert(0) += 1;
    }
    // Lengths the fleet does not allow at all are reported with an expected count of 0.
    let lengths: BTreeSet<usize> = config
        .fleet
        .iter()
        .map(|(class, _)| class.len())
        .chain(actual.keys().copied())
        .collect();
    for len in lengths {
        let expected = config.fleet.required(len);
        let actual = actual.get(&len).copied().unwrap_or(0);
        if expected != actual {
            return Err(FleetError::InvalidFleetComposition {
                class: DeckClass(len),
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn check_placement(ships: &[Ship], config: &BoardConfig) -> Result<(), FleetError> {
    let mut forbidden: HashSet<Coordinate> = HashSet::new();
    for (index, ship) in ships.iter().enumerate() {
        if let Some(coord) = ship.coords().find(|coord| forbidden.contains(*coord)) {
            return Err(FleetError::IllegalPlacement {
                coord: *coord,
                ship: index,
            });
        }
        forbidden.extend(ship.forbidden_zone(&config.dimensions));
    }
    Ok(())
}
