#![cfg(feature = "std")]

//! Console front end: prompts, rendering and the input retry loops.

use std::io::{BufRead, Write};
use std::string::String;

use anyhow::{bail, Context};
use rand::Rng;

use crate::{
    common::BattlefieldError,
    game::{opponent, Game, GamePhase},
};

const SEPARATOR: &str = "---------------------";

/// One terminal shared by both players for the whole session.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play `game` to the end: both placement phases, then alternating shots.
    pub fn run<G: Rng>(&mut self, game: &mut Game, rng: &mut G) -> anyhow::Result<()> {
        loop {
            match game.phase() {
                GamePhase::Placement { player, .. } => {
                    if player > 0 {
                        self.pass_turn()?;
                    }
                    self.place_fleet(game, rng, player)?;
                }
                GamePhase::Combat { .. } => {
                    self.pass_turn()?;
                    self.take_turn(game)?;
                }
                GamePhase::Finished { winner } => {
                    log::info!("game over, winner: {}", game.battlefield(winner).name());
                    return Ok(());
                }
            }
        }
    }

    fn place_fleet<G: Rng>(&mut self, game: &mut Game, rng: &mut G, player: usize) -> anyhow::Result<()> {
        let field = game.battlefield(player);
        writeln!(self.output, "{}, place your ships on the game field", field.name())?;
        writeln!(self.output, "(press Enter on an empty line to place a ship at random)")?;
        write!(self.output, "{}", field.view(false))?;

        while let GamePhase::Placement { player: current, ship } = game.phase() {
            if current != player {
                break;
            }
            writeln!(
                self.output,
                "\nEnter the coordinates of the {} ({} cells):\n",
                ship,
                ship.length()
            )?;
            loop {
                let line = self.read_line()?;
                let placed = if line.is_empty() {
                    game.place_ship_randomly(rng)
                        .map(|(_, begin, end)| Some((begin, end)))
                } else {
                    game.place_ship(&line).map(|_| None)
                };
                match placed {
                    Ok(random) => {
                        if let Some((begin, end)) = random {
                            writeln!(self.output, "{} placed at {} {}", ship, begin, end)?;
                        }
                        break;
                    }
                    Err(e) => self.report(e)?,
                }
            }
            write!(self.output, "{}", game.battlefield(player).view(true))?;
        }
        Ok(())
    }

    fn take_turn(&mut self, game: &mut Game) -> anyhow::Result<()> {
        let Some(attacker) = game.current_player() else {
            return Ok(());
        };
        let target = opponent(attacker);
        write!(self.output, "{}", game.battlefield(target).view(false))?;
        writeln!(self.output, "{}", SEPARATOR)?;
        write!(self.output, "{}", game.battlefield(attacker).view(true))?;
        writeln!(self.output, "\n{}, it's your turn:\n", game.battlefield(attacker).name())?;

        loop {
            let line = self.read_line()?;
            match game.fire(&line) {
                Ok(outcome) => {
                    writeln!(self.output, "\n{}\n", outcome)?;
                    return Ok(());
                }
                Err(e) => self.report(e)?,
            }
        }
    }

    fn pass_turn(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Press Enter and pass the move to another player")?;
        self.read_line()?;
        Ok(())
    }

    fn report(&mut self, error: BattlefieldError) -> anyhow::Result<()> {
        log::debug!("rejected input: {:?}", error);
        writeln!(self.output, "\nError! {}! Try again:", error)?;
        Ok(())
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }
}
