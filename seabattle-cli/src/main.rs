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

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::{App, Arg, ArgMatches};
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use thiserror::Error;

use seabattle::{
    board::{random_fleet, Board, Coordinate, FleetError, RandomFleetError},
    BoardConfig,
};

use crate::{
    fleet::{parse_fleet, parse_target, ParseFleetError},
    render::BoardView,
};

mod fleet;
mod render;

/// Reasons the board could not be set up from the command line.
#[derive(Debug, Error)]
enum SetupError {
    #[error("invalid fleet: {0}")]
    Parse(#[from] ParseFleetError),
    #[error("invalid fleet: {0}")]
    Fleet(#[from] FleetError),
    #[error(transparent)]
    Random(#[from] RandomFleetError),
    #[error("invalid seed \"{0}\", must be an unsigned integer")]
    Seed(String),
}

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let matches = app().get_matches();

    let mut board = match setup_board(&matches) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(2);
        }
    };
    let reveal = matches.is_present("reveal");

    let stdin = std::io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&mut board, &mut input, reveal)
}

/// Command line interface. Without `--fleet` the fleet is placed randomly.
fn app() -> App<'static, 'static> {
    App::new("Sea Battle")
        .version("1.0")
        .about("Single-player battleship: sink a fleet of ten ships.")
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("FLEET")
                .help("ships as \"row,col-row,col\" endpoint pairs separated by spaces or ';'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for random fleet placement")
                .takes_value(true)
                .conflicts_with("fleet"),
        )
        .arg(
            Arg::with_name("reveal")
                .long("reveal")
                .help("print the board after every shot"),
        )
}

/// Build the board either from the fleet given on the command line or a random fleet.
fn setup_board(matches: &ArgMatches) -> Result<Board, SetupError> {
    let config = BoardConfig::default();
    if let Some(fleet) = matches.value_of("fleet") {
        return Ok(Board::with_config(&config, parse_fleet(fleet)?)?);
    }
    let fleet = match matches.value_of("seed") {
        Some(seed) => {
            let seed = seed
                .parse()
                .map_err(|_| SetupError::Seed(seed.to_owned()))?;
            info!("placing fleet with seed {}", seed);
            random_fleet(&mut StdRng::seed_from_u64(seed), &config)?
        }
        None => random_fleet(&mut rand::thread_rng(), &config)?,
    };
    Ok(Board::with_config(&config, fleet)?)
}

/// Read shots from the player until every ship is sunk.
fn play(board: &mut Board, input: &mut InputReader<impl BufRead>, reveal: bool) -> io::Result<()> {
    enum Command {
        Fire(Coordinate),
        Show,
        Help,
        Quit,
    }

    println!(
        "{} ships are hidden on a {}x{} board. Type help or ? for commands.",
        board.ships().len(),
        board.dimensions().rows(),
        board.dimensions().cols(),
    );
    let mut shots = 0;
    loop {
        let cmd = input.read_input_lower(">", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "show" | "board" => Some(Command::Show),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => match parse_target(other) {
                Some(coord) => Some(Command::Fire(coord)),
                None => {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            },
        })?;

        match cmd {
            Command::Fire(coord) => {
                shots += 1;
                println!("{}", board.fire(coord));
                if board.defeated() {
                    println!();
                    print!("{}", BoardView(&*board));
                    println!("All ships sunk after {} shots.", shots);
                    return Ok(());
                }
                if reveal {
                    print!("{}", BoardView(&*board));
                }
            }
            Command::Show => print!("{}", BoardView(&*board)),
            Command::Quit => return Ok(()),
            Command::Help => {
                println!(
                    "Available Commands:
    <row>,<col>     fire at the given cell, rows and columns start at 0.
    show            print the board.
    quit            leave the game."
                );
            }
        }
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            self.read_input_inner(prompt)?;
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }

    /// Helper to print the prompt, clear the string buffer and read a line.
    fn read_input_inner(&mut self, prompt: &str) -> io::Result<()> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        self.buf.clear();
        if self.read.read_line(&mut self.buf)? == 0 {
            println!();
            process::exit(0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_with_fleet_rejected() {
        let result = app().get_matches_from_safe(vec![
            "seabattle",
            "--fleet",
            "0,0-0,3",
            "--seed",
            "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn seeded_random_board() {
        let matches = app()
            .get_matches_from_safe(vec!["seabattle", "--seed", "3"])
            .unwrap();
        let board = setup_board(&matches).unwrap();
        assert_eq!(board.ships().len(), 10);
    }

    #[test]
    fn invalid_fleet_reported() {
        let matches = app()
            .get_matches_from_safe(vec!["seabattle", "--fleet", "0,0-0,3"])
            .unwrap();
        assert!(matches!(
            setup_board(&matches),
            Err(SetupError::Fleet(FleetError::InvalidFleetSize { actual: 1, .. }))
        ));
    }
}
