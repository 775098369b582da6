//! # Example Games
//!
//! Small classics built with each of the definition builders:
//! - **Normal form**: Prisoner's Dilemma (symmetric), Rock-Paper-Scissors (zero-sum matrix)
//! - **Extensive form**: Matching Pennies behind a coin flip that sets the stakes
//! - **State machine**: Tic-Tac-Toe, from the empty board or any position with X to move

pub mod prisoners_dilemma;
pub mod rock_paper_scissors;
pub mod matching_pennies;
pub mod tictactoe;
