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

//! Ships and the decks they are made of.
use thiserror::Error;

use crate::board::Coordinate;

pub use self::{
    deck::Deck,
    linear::{Orientation, Ship},
};

mod deck;
mod linear;

/// Reason a pair of endpoints does not describe a ship.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ShapeError {
    /// One of the endpoints is outside the board.
    #[error("endpoint {coord} is out of bounds")]
    OutOfBounds { coord: Coordinate },

    /// The endpoints share neither a row nor a column.
    #[error("endpoints {start} and {end} are not on the same row or column")]
    NotStraight { start: Coordinate, end: Coordinate },
}

/// Error returned when looking up a deck on a ship that does not cover the coordinate.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("ship has no deck at {coord}")]
pub struct DeckNotFound {
    /// The coordinate that was looked up.
    pub coord: Coordinate,
}
