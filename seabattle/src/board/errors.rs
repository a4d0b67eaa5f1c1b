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

//! Errors used when building a [`Board`][crate::board::Board].

use thiserror::Error;

use crate::{board::Coordinate, config::DeckClass, ships::ShapeError};

/// Reason a fleet was rejected. Boards are only ever created from a fleet that passed
/// every check, so any of these aborts construction.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum FleetError {
    /// The endpoints of one ship do not describe a ship on the board.
    #[error("ship {index} is malformed: {reason}")]
    MalformedShip {
        /// Position of the ship in the input list.
        index: usize,
        #[source]
        reason: ShapeError,
    },

    /// The fleet does not contain the required number of ships.
    #[error("the total number of ships should be {expected}, got {actual}")]
    InvalidFleetSize { expected: usize, actual: usize },

    /// The fleet has the wrong number of ships of one deck length.
    #[error("there should be {expected} {class} ships, you have {actual}")]
    InvalidFleetComposition {
        class: DeckClass,
        expected: usize,
        actual: usize,
    },

    /// A ship overlaps or touches a ship listed before it.
    #[error("it is impossible to place ship {ship} here {coord}")]
    IllegalPlacement {
        /// First cell of the offending ship found inside the forbidden area.
        coord: Coordinate,
        /// Position of the offending ship in the input list.
        ship: usize,
    },
}
