//! Ready-made strategies. Each only reads the execution through its public queries.

use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::error::{GameError, Result};
use crate::execution::{Execution, Strategy};
use crate::minimax::minimax;
use crate::payoff::Distribution;
use crate::random::Randomness;
use crate::utils::*;

// ---------- Fixed moves ----------
/// Always the same move
#[derive(Debug, Clone)]
pub struct Pure<M>(pub M);

pub fn pure<M>(mv: M) -> Pure<M> { Pure(mv) }

impl<M: MoveI> Strategy<M> for Pure<M> {
    fn next_move(&mut self, _: &Execution<'_, M>) -> Result<M> { Ok(self.0.clone()) }
}

/// Move i in game i, then the last move forever
#[derive(Debug, Clone)]
pub struct Scripted<M>(pub Vec<M>);

pub fn scripted<M>(moves: Vec<M>) -> Scripted<M> { Scripted(moves) }

impl<M: MoveI> Strategy<M> for Scripted<M> {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> {
        clamped(&self.0, exec.num_games())
            .cloned()
            .ok_or_else(|| GameError::out_of_range("scripted moves", exec.num_games(), 0))
    }
}

/// Cycle through `moves`, one per game
#[derive(Debug, Clone)]
pub struct Periodic<M>(pub Vec<M>);

pub fn periodic<M>(moves: Vec<M>) -> Periodic<M> { Periodic(moves) }

impl<M: MoveI> Strategy<M> for Periodic<M> {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> {
        if self.0.is_empty() {
            return Err(GameError::out_of_range("periodic moves", exec.num_games(), 0));
        }
        Ok(self.0[exec.num_games() % self.0.len()].clone())
    }
}

// ---------- Randomized ----------
/// Sample from a fixed distribution over moves
#[derive(Debug, Clone)]
pub struct Mixed<M> {
    dist: Distribution<M>,
    rng: StdRng,
}

pub fn mixed<M>(dist: Distribution<M>) -> Mixed<M> {
    Mixed { dist, rng: StdRng::from_rng(&mut rand::rng()) }
}

impl<M> Mixed<M> {
    pub fn seeded(self, seed: u64) -> Self {
        Mixed { rng: StdRng::seed_from_u64(seed), ..self }
    }
}

impl<M: MoveI> Strategy<M> for Mixed<M> {
    fn next_move(&mut self, _: &Execution<'_, M>) -> Result<M> {
        self.rng.pick_weighted(&self.dist.weights())
            .and_then(|i| self.dist.get(i))
            .cloned()
            .ok_or_else(|| GameError::MalformedTree("mixed strategy over no moves".into()))
    }
}

/// Uniform over whatever moves are available right now
#[derive(Debug, Clone)]
pub struct Random { rng: StdRng }

pub fn random() -> Random {
    Random { rng: StdRng::from_rng(&mut rand::rng()) }
}

impl Random {
    pub fn seeded(seed: u64) -> Self { Random { rng: StdRng::seed_from_u64(seed) } }
}

impl<M: MoveI> Strategy<M> for Random {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> {
        let moves = exec.available_moves();
        self.rng.pick_uniform(moves.len())
            .and_then(|i| moves.get(i))
            .cloned()
            .ok_or(GameError::NotADecisionNode)
    }
}

// ---------- Phases ----------
/// Strategy k runs during game k+1; the final one keeps going after that
pub struct Phases<M> { phases: Vec<Box<dyn Strategy<M>>> }

pub fn phases<M>(phases: Vec<Box<dyn Strategy<M>>>) -> Phases<M> { Phases { phases } }

/// `first` for the opening game, `then` for the rest
pub fn initially<M>(first: impl Strategy<M> + 'static, then: impl Strategy<M> + 'static) -> Phases<M> {
    phases(vec![Box::new(first), Box::new(then)])
}

impl<M: MoveI> Strategy<M> for Phases<M> {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> {
        let i = clamp_index(self.phases.len(), exec.num_games())
            .ok_or_else(|| GameError::out_of_range("phases", exec.num_games(), 0))?;
        self.phases[i].next_move(exec)
    }
}

// ---------- Reactive ----------
/// Cooperate first, then copy what the next player did last game.
/// Falls back to cooperating when that player made no move last game.
#[derive(Debug, Clone)]
pub struct TitForTat<M> { cooperate: M }

pub fn tit_for_tat<M>(cooperate: M) -> TitForTat<M> { TitForTat { cooperate } }

impl<M: MoveI> Strategy<M> for TitForTat<M> {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> {
        let moves = exec.moves();
        if moves.is_empty() {
            return Ok(self.cooperate.clone());
        }
        let last_game = moves.prev()?;
        Ok(exec.his(last_game)?.last().cloned().unwrap_or_else(|| self.cooperate.clone()))
    }
}

/// Cooperate until anyone else ever does something else, then defect for good
#[derive(Debug, Clone)]
pub struct GrimTrigger<M> { cooperate: M, defect: M }

pub fn grim_trigger<M>(cooperate: M, defect: M) -> GrimTrigger<M> { GrimTrigger { cooperate, defect } }

impl<M: MoveI> Strategy<M> for GrimTrigger<M> {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> {
        for game in exec.moves().iter() {
            let betrayed = exec.their(game)?.into_iter().flatten().any(|m| *m != self.cooperate);
            if betrayed {
                return Ok(self.defect.clone());
            }
        }
        Ok(self.cooperate.clone())
    }
}

// ---------- Search ----------
/// Play the alpha-beta best move from wherever we are
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

pub fn minimax_strategy() -> Minimax { Minimax }

impl<M: MoveI> Strategy<M> for Minimax {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> {
        let location = exec.location()?;
        minimax(exec.game(), &location)
    }
}
