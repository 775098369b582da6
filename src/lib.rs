#![allow(clippy::type_complexity)]

pub mod utils;
pub mod error;
pub mod payoff;
pub mod game_tree;
pub mod info;
pub mod game;
pub mod random;
pub mod history;
pub mod execution;
pub mod query;
pub mod minimax;
pub mod strategy;
pub mod display;
pub mod games;

pub use error::{GameError, Result};
pub use execution::{play_iterations, run_iterations, Execution, Player, Status, Strategy};
pub use game::{GameDefinition, StateMachine, TurnBased};
pub use game_tree::GameTree;
pub use history::{ByGame, ByPlayer, Event, Summary, Transcript};
pub use info::InformationGroup;
pub use payoff::{Distribution, Payoff};
