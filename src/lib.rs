#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod battlefield;
mod common;
mod config;
mod coordinate;
pub mod game;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
mod view;

pub use battlefield::*;
pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::{Game, GamePhase};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use view::*;
