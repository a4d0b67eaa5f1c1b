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

use crate::board::Coordinate;

/// A single segment of a ship, occupying one cell of the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Deck {
    /// Cell occupied by this deck.
    coord: Coordinate,

    /// Whether this deck has not been hit yet.
    alive: bool,
}

impl Deck {
    pub(super) fn new(coord: Coordinate) -> Self {
        Self { coord, alive: true }
    }

    /// The grid coordinate of this deck.
    pub fn coord(&self) -> &Coordinate {
        &self.coord
    }

    /// Whether this deck is still intact.
    pub fn alive(&self) -> bool {
        self.alive
    }

    /// Mark the deck as hit. Decks never recover.
    pub(super) fn destroy(&mut self) {
        self.alive = false;
    }
}
