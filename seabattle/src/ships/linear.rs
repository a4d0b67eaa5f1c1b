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

use std::collections::HashSet;

use log::debug;

use crate::{
    board::{Coordinate, RectDimensions},
    config::DeckClass,
    ships::{DeckNotFound, ShapeError},
};

use super::Deck;

/// Direction a ship extends in from its start.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// Decks share a row. Single-deck ships are reported as horizontal.
    Horizontal,
    /// Decks share a column.
    Vertical,
}

/// A straight ship spanning every cell between two endpoints, inclusive.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ship {
    /// Top-left endpoint.
    start: Coordinate,

    /// Bottom-right endpoint.
    end: Coordinate,

    /// Decks in order from `start` to `end`.
    decks: Vec<Deck>,

    /// Set once every deck is destroyed.
    sunk: bool,
}

impl Ship {
    /// Construct a ship between `start` and `end` on a board with the given dimensions.
    /// Both endpoints must be on the board and share a row or a column. Endpoints given
    /// bottom-right first are swapped.
    pub fn new(start: Coordinate, end: Coordinate, dim: &RectDimensions) -> Result<Self, ShapeError> {
        for coord in [start, end].iter() {
            if !dim.contains(coord) {
                return Err(ShapeError::OutOfBounds { coord: *coord });
            }
        }
        if start.row != end.row && start.col != end.col {
            return Err(ShapeError::NotStraight { start, end });
        }
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        let decks = if start.row == end.row {
            (start.col..=end.col)
                .map(|col| Deck::new(Coordinate::new(start.row, col)))
                .collect()
        } else {
            (start.row..=end.row)
                .map(|row| Deck::new(Coordinate::new(row, start.col)))
                .collect()
        };
        Ok(Self {
            start,
            end,
            decks,
            sunk: false,
        })
    }

    /// Endpoint closest to the top-left corner.
    pub fn start(&self) -> &Coordinate {
        &self.start
    }

    /// Endpoint closest to the bottom-right corner.
    pub fn end(&self) -> &Coordinate {
        &self.end
    }

    /// Number of decks.
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    /// Ships are built with at least one deck, so this is always false.
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Category of this ship by number of decks.
    pub fn class(&self) -> DeckClass {
        DeckClass(self.len())
    }

    /// Whether the decks share a row or a column.
    pub fn orientation(&self) -> Orientation {
        if self.start.row == self.end.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    /// The decks of this ship in order from start to end.
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Get an iterator over the coordinates of this ship.
    pub fn coords(&self) -> impl '_ + Iterator<Item = &Coordinate> {
        self.decks.iter().map(Deck::coord)
    }

    /// Whether one of the decks of this ship sits on `coord`.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        self.coords().any(|c| c == coord)
    }

    /// Check if every deck of this ship has been destroyed.
    pub fn sunk(&self) -> bool {
        self.sunk
    }

    /// Cells no other ship may occupy: this ship's cells and every cell touching them,
    /// diagonals included, clipped to the board.
    pub fn forbidden_zone(&self, dim: &RectDimensions) -> HashSet<Coordinate> {
        dim.padded(&self.start, &self.end)
    }

    /// Get the deck at `coord`.
    pub fn get_deck(&self, coord: &Coordinate) -> Result<&Deck, DeckNotFound> {
        self.decks
            .iter()
            .find(|deck| deck.coord() == coord)
            .ok_or(DeckNotFound { coord: *coord })
    }

    /// Destroy the deck at `coord`. Firing on a deck which is already destroyed changes
    /// nothing. Fails without modifying the ship if `coord` is not one of its decks.
    pub fn fire(&mut self, coord: &Coordinate) -> Result<(), DeckNotFound> {
        let deck = self
            .decks
            .iter_mut()
            .find(|deck| deck.coord() == coord)
            .ok_or(DeckNotFound { coord: *coord })?;
        deck.destroy();
        // Full scan; ships are at most a handful of decks long.
        let sunk = self.decks.iter().all(|deck| !deck.alive());
        if sunk && !self.sunk {
            debug!("{} ship at {}..{} sunk", self.class(), self.start, self.end);
        }
        self.sunk = sunk;
        Ok(())
    }
}
