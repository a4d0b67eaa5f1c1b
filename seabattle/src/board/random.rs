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

//! Random generation of valid fleets.
use std::collections::HashSet;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Coordinate, RectDimensions},
    config::BoardConfig,
};

/// Number of random positions tried for a single ship before the fleet is restarted.
const PLACEMENT_ATTEMPTS: usize = 200;

/// Number of times the whole fleet is restarted before giving up.
const FLEET_ATTEMPTS: usize = 100;

/// Error returned when no valid fleet was found.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RandomFleetError {
    /// Every attempt got stuck with a ship that did not fit anywhere.
    #[error("could not place the fleet after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Generate endpoint pairs for a fleet that satisfies `config`. Ships are placed longest
/// first in random positions and orientations.
pub fn random_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    config: &BoardConfig,
) -> Result<Vec<(Coordinate, Coordinate)>, RandomFleetError> {
    for attempt in 0..FLEET_ATTEMPTS {
        if let Some(fleet) = try_place_fleet(rng, config) {
            return Ok(fleet);
        }
        debug!("random fleet attempt {} got stuck, restarting", attempt);
    }
    Err(RandomFleetError::Exhausted {
        attempts: FLEET_ATTEMPTS,
    })
}

fn try_place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    config: &BoardConfig,
) -> Option<Vec<(Coordinate, Coordinate)>> {
    let dim = &config.dimensions;
    let mut forbidden = HashSet::new();
    let mut fleet = Vec::with_capacity(config.fleet.total_ships());
    'ships: for len in config.fleet.ship_lengths() {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let (start, end) = match random_span(rng, dim, len) {
                Some(span) => span,
                None => return None,
            };
            if cells(&start, &end).any(|coord| forbidden.contains(&coord)) {
                continue;
            }
            forbidden.extend(dim.padded(&start, &end));
            fleet.push((start, end));
            continue 'ships;
        }
        return None;
    }
    Some(fleet)
}

/// Pick a random span of `len` cells that fits on the board. Returns `None` if the ship has
/// no decks or is longer than the board in both directions.
fn random_span<R: Rng + ?Sized>(
    rng: &mut R,
    dim: &RectDimensions,
    len: usize,
) -> Option<(Coordinate, Coordinate)> {
    if len == 0 {
        return None;
    }
    let fits_row = len <= dim.cols();
    let fits_col = len <= dim.rows();
    let horizontal = match (fits_row, fits_col) {
        (false, false) => return None,
        (true, false) => true,
        (false, true) => false,
        (true, true) => rng.gen(),
    };
    let span = len - 1;
    if horizontal {
        let row = rng.gen_range(0, dim.rows());
        let col = rng.gen_range(0, dim.cols() - span);
        Some((Coordinate::new(row, col), Coordinate::new(row, col + span)))
    } else {
        let row = rng.gen_range(0, dim.rows() - span);
        let col = rng.gen_range(0, dim.cols());
        Some((Coordinate::new(row, col), Coordinate::new(row + span, col)))
    }
}

/// Iterate the cells between two endpoints on a shared row or column.
fn cells<'a>(start: &'a Coordinate, end: &'a Coordinate) -> impl 'a + Iterator<Item = Coordinate> {
    (start.row..=end.row).flat_map(move |row| (start.col..=end.col).map(move |col| Coordinate::new(row, col)))
}
