//! Read-only views of an execution for strategies to build on.

use std::sync::Arc;
use crate::error::{GameError, Result};
use crate::execution::Execution;
use crate::game::GameDefinition;
use crate::game_tree::GameTree;
use crate::history::*;
use crate::info::InformationGroup;
use crate::payoff::Payoff;
use crate::utils::*;

impl<'g, M: MoveI> Execution<'g, M> {
    // ---------- The current play ---------- //
    #[inline] pub fn game(&self) -> &'g GameDefinition<M> { self.game }
    #[inline] pub fn num_players(&self) -> usize { self.game.num_players() }
    #[inline] pub fn player_names(&self) -> &ByPlayer<String> { &self.names }
    /// What the player at the current location is allowed to know about it
    pub fn info_group(&self) -> InformationGroup<M> { self.game.classify(&self.location) }
    /// The current node, only when the game lets players see it
    pub fn location(&self) -> Result<Arc<GameTree<M>>> {
        match self.info_group() {
            InformationGroup::Perfect(node) => Ok(node),
            other => Err(GameError::UnsupportedGameType(format!("location is hidden ({:?})", other))),
        }
    }
    /// Moves open to whoever acts next. Always visible, even when the location is not.
    pub fn available_moves(&self) -> Vec<M> { self.location.available_moves() }
    /// Events of the play in progress, oldest first
    pub fn current_transcript(&self) -> &[Event<M>] { &self.transcript }

    // ---------- Finished plays ---------- //
    #[inline] pub fn num_games(&self) -> usize { self.summaries.len() }
    /// 1-based number of the play in progress
    #[inline] pub fn game_number(&self) -> usize { self.summaries.len() + 1 }
    #[inline] pub fn transcripts(&self) -> &ByGame<Transcript<M>> { &self.transcripts }
    #[inline] pub fn summaries(&self) -> &ByGame<Summary<M>> { &self.summaries }
    /// Each player's moves in each finished play
    pub fn moves(&self) -> ByGame<ByPlayer<Vec<M>>> { self.summaries.map(|s| s.moves.clone()) }
    pub fn payoffs(&self) -> ByGame<Payoff> { self.summaries.map(|s| s.payoff.clone()) }
    /// Total payoff per player over every finished play
    pub fn score(&self) -> Payoff {
        let mut total = vec![0.0; self.num_players()];
        for summary in self.summaries.iter() {
            for (t, v) in total.iter_mut().zip(summary.payoff.values()) {
                *t += v;
            }
        }
        Payoff::new(total)
    }

    // ---------- Relative players ---------- //
    /// 0-based index of the player deciding at the current location
    pub fn my_index(&self) -> Result<usize> {
        match self.location.as_ref() {
            GameTree::Decision { player, .. } => player.checked_sub(1).ok_or(GameError::NotADecisionNode),
            GameTree::Chance { .. } | GameTree::Payoff(_) => Err(GameError::NotADecisionNode),
        }
    }
    pub fn my<'a, T>(&self, xs: &'a ByPlayer<T>) -> Result<&'a T> {
        xs.at(self.my_index()?)
    }
    /// The next player after me (wrapping). Only the real opponent in two player games.
    pub fn his<'a, T>(&self, xs: &'a ByPlayer<T>) -> Result<&'a T> {
        xs.next_after(self.my_index()?)
    }
    pub fn her<'a, T>(&self, xs: &'a ByPlayer<T>) -> Result<&'a T> { self.his(xs) }
    /// Everyone but me, in player order
    pub fn their<'a, T>(&self, xs: &'a ByPlayer<T>) -> Result<Vec<&'a T>> {
        Ok(xs.except(self.my_index()?))
    }
    pub fn our<'a, T>(&self, xs: &'a ByPlayer<T>) -> Vec<&'a T> { xs.iter().collect() }
    /// 1-based direct lookup
    pub fn playern<'a, T>(&self, p: PlayerIndex, xs: &'a ByPlayer<T>) -> Result<&'a T> {
        xs.player(p)
    }
}
