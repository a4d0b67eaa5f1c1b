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

//! Types that make up the game board.

use std::{collections::HashMap, fmt};

use log::{debug, trace};

use crate::{config::BoardConfig, ships::Ship};

pub use self::{
    coordinate::Coordinate,
    dimensions::RectDimensions,
    errors::FleetError,
    setup::validate,
};
#[cfg(feature = "rng_gen")]
pub use self::random::{random_fleet, RandomFleetError};

mod coordinate;
mod dimensions;
mod errors;
#[cfg(feature = "rng_gen")]
mod random;
mod setup;

/// Result of a shot on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship, but did not sink it.
    Hit,
    /// The shot hit a ship and every deck of that ship is now destroyed.
    Sunk,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Hit!",
            ShotOutcome::Sunk => "Sunk!",
        })
    }
}

/// What a single cell of the board shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DisplayState {
    /// No ship occupies the cell.
    Water,
    /// A deck that has not been hit.
    Untouched,
    /// A destroyed deck of a ship that is still afloat.
    Hit,
    /// A deck of a sunk ship.
    Drowned,
}

/// A single player's ocean with a validated fleet.
#[derive(Debug, Clone)]
pub struct Board {
    /// Dimensions the fleet was validated against.
    dim: RectDimensions,

    /// Ships in the order they were supplied.
    ships: Vec<Ship>,

    /// Index into `ships` for every occupied cell.
    index: HashMap<Coordinate, usize>,
}

impl Board {
    /// Build a board with the standard 10x10 configuration from a list of ship endpoint
    /// pairs.
    pub fn new<I, C>(ships: I) -> Result<Self, FleetError>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        Self::with_config(&BoardConfig::default(), ships)
    }

    /// Build a board from a list of ship endpoint pairs, validated against `config`.
    /// Fails if any ship is malformed or the fleet breaks any placement rule.
    pub fn with_config<I, C>(config: &BoardConfig, ships: I) -> Result<Self, FleetError>
    where
        I: IntoIterator<Item = (C, C)>,
        C: Into<Coordinate>,
    {
        let ships = ships
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                Ship::new(start.into(), end.into(), &config.dimensions)
                    .map_err(|reason| FleetError::MalformedShip { index, reason })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(log_rejection)?;
        validate(&ships, config).map_err(log_rejection)?;

        let mut index = HashMap::with_capacity(ships.iter().map(Ship::len).sum());
        for (i, ship) in ships.iter().enumerate() {
            for coord in ship.coords() {
                index.insert(*coord, i);
            }
        }
        debug!(
            "created {}x{} board with {} ships",
            config.dimensions.rows(),
            config.dimensions.cols(),
            ships.len()
        );
        Ok(Self {
            dim: config.dimensions,
            ships,
            index,
        })
    }

    /// Get the [`RectDimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &RectDimensions {
        &self.dim
    }

    /// The fleet in the order it was supplied.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship occupying `coord`, if any.
    pub fn ship_at<C: Into<Coordinate>>(&self, coord: C) -> Option<&Ship> {
        self.index.get(&coord.into()).map(|&i| &self.ships[i])
    }

    /// Number of ships that have not been sunk.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|ship| !ship.sunk()).count()
    }

    /// Returns true if every ship has been sunk.
    pub fn defeated(&self) -> bool {
        self.remaining_ships() == 0
    }

    /// Fire a shot at `coord`. Cells no ship occupies, including cells off the board, are
    /// a [`ShotOutcome::Miss`] and change nothing. Firing on the same cell again repeats
    /// the outcome of the owning ship's current state.
    pub fn fire<C: Into<Coordinate>>(&mut self, coord: C) -> ShotOutcome {
        let coord = coord.into();
        let outcome = match self.index.get(&coord) {
            None => ShotOutcome::Miss,
            Some(&i) => {
                let ship = &mut self.ships[i];
                match ship.fire(&coord) {
                    Ok(()) => {}
                    // The index only holds coordinates of the ship it points to.
                    Err(_) => unreachable!(),
                }
                if ship.sunk() {
                    ShotOutcome::Sunk
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        trace!("shot at {}: {}", coord, outcome);
        outcome
    }

    /// Get the state of the cell at `coord`. Returns `None` if `coord` is out of bounds.
    pub fn state_at<C: Into<Coordinate>>(&self, coord: C) -> Option<DisplayState> {
        let coord = coord.into();
        if !self.dim.contains(&coord) {
            return None;
        }
        Some(match self.index.get(&coord) {
            None => DisplayState::Water,
            Some(&i) => {
                let ship = &self.ships[i];
                if ship.sunk() {
                    DisplayState::Drowned
                } else if ship.get_deck(&coord).map_or(false, |deck| deck.alive()) {
                    DisplayState::Untouched
                } else {
                    DisplayState::Hit
                }
            }
        })
    }

    /// Get an iterator over every cell of the board in row-major order, with its state.
    pub fn snapshot(&self) -> impl '_ + Iterator<Item = (Coordinate, DisplayState)> {
        self.iter_board().flatten()
    }

    /// Get an iterator over the rows of the board. Each row is an iterator over the cells
    /// of that row.
    pub fn iter_board(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = (Coordinate, DisplayState)>> {
        self.dim.iter_coordinates().map(move |row| {
            row.map(move |coord| {
                // Coordinates come from our own dimensions so they are always in bounds.
                let state = self.state_at(coord).unwrap_or(DisplayState::Water);
                (coord, state)
            })
        })
    }
}

fn log_rejection(err: FleetError) -> FleetError {
    debug!("rejected fleet: {}", err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_fleet() -> Vec<((usize, usize), (usize, usize))> {
        vec![
            ((0, 0), (0, 3)),
            ((2, 0), (2, 2)),
            ((2, 4), (2, 6)),
            ((4, 0), (4, 1)),
            ((4, 3), (4, 4)),
            ((4, 6), (4, 7)),
            ((6, 0), (6, 0)),
            ((6, 2), (6, 2)),
            ((6, 4), (6, 4)),
            ((6, 6), (6, 6)),
        ]
    }

    #[test]
    fn index_covers_every_deck() {
        let board = Board::new(standard_fleet()).unwrap();
        assert_eq!(board.index.len(), 4 + 3 * 2 + 2 * 3 + 4);
        assert_eq!(board.ship_at((0, 2)).map(Ship::len), Some(4));
        assert!(board.ship_at((1, 2)).is_none());
    }

    #[test]
    fn fire_outcomes() {
        let mut board = Board::new(standard_fleet()).unwrap();
        assert_eq!(board.fire((9, 9)), ShotOutcome::Miss);
        assert_eq!(board.fire((6, 6)), ShotOutcome::Sunk);
        assert_eq!(board.fire((4, 3)), ShotOutcome::Hit);
        assert_eq!(board.fire((4, 4)), ShotOutcome::Sunk);
        assert_eq!(board.fire((4, 3)), ShotOutcome::Sunk);
        assert_eq!(board.remaining_ships(), 8);
    }

    #[test]
    fn off_board_shot_misses() {
        let mut board = Board::new(standard_fleet()).unwrap();
        assert_eq!(board.fire((10, 0)), ShotOutcome::Miss);
        assert_eq!(board.state_at((10, 0)), None);
    }

    #[test]
    fn state_transitions() {
        let mut board = Board::new(standard_fleet()).unwrap();
        assert_eq!(board.state_at((2, 0)), Some(DisplayState::Untouched));
        assert_eq!(board.state_at((1, 0)), Some(DisplayState::Water));
        board.fire((2, 0));
        assert_eq!(board.state_at((2, 0)), Some(DisplayState::Hit));
        assert_eq!(board.state_at((2, 1)), Some(DisplayState::Untouched));
        board.fire((2, 1));
        board.fire((2, 2));
        for col in 0..3 {
            assert_eq!(board.state_at((2, col)), Some(DisplayState::Drowned));
        }
    }

    #[test]
    fn sinking_everything_defeats() {
        let mut board = Board::new(standard_fleet()).unwrap();
        let targets: Vec<Coordinate> = board.ships().iter().flat_map(|s| s.coords().copied()).collect();
        for coord in targets {
            assert!(!board.defeated());
            board.fire(coord);
        }
        assert!(board.defeated());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(ShotOutcome::Miss.to_string(), "Miss!");
        assert_eq!(ShotOutcome::Hit.to_string(), "Hit!");
        assert_eq!(ShotOutcome::Sunk.to_string(), "Sunk!");
    }

    #[test]
    fn malformed_ship_reports_index() {
        let mut fleet = standard_fleet();
        fleet[3] = ((4, 0), (5, 1));
        assert_eq!(
            Board::new(fleet).unwrap_err(),
            FleetError::MalformedShip {
                index: 3,
                reason: crate::ships::ShapeError::NotStraight {
                    start: Coordinate::new(4, 0),
                    end: Coordinate::new(5, 1),
                },
            }
        );
    }

    #[test]
    fn board_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Board>();
    }
}
