use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use log::{debug, trace, warn};
use rand::RngCore;
use crate::error::{GameError, Result};
use crate::game::GameDefinition;
use crate::game_tree::GameTree;
use crate::history::*;
use crate::payoff::Payoff;
use crate::random::Randomness;
use crate::utils::*;

// ---------- Strategies & Players ----------
/// How a player picks a move. `&mut self` is the strategy's own memory;
/// everything shared is read through the execution.
pub trait Strategy<M> {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M>;
}

impl<M, F> Strategy<M> for F
where F: FnMut(&Execution<'_, M>) -> Result<M> {
    fn next_move(&mut self, exec: &Execution<'_, M>) -> Result<M> { self(exec) }
}

/// A named strategy. The driver owns these, never the execution.
pub struct Player<M> {
    pub name: String,
    pub strategy: Box<dyn Strategy<M>>,
}

impl<M> Player<M> {
    pub fn new(name: impl Into<String>, strategy: impl Strategy<M> + 'static) -> Self {
        Player { name: name.into(), strategy: Box::new(strategy) }
    }
}

impl<M> Debug for Player<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.name)
    }
}

/// Where the current play stands
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    AwaitingDecision(PlayerIndex),
    AwaitingChance,
    Terminal(Payoff),
}

// ---------- Execution ----------
/// State of one run of repeated plays: where we are in the tree, what happened so far this play,
/// and everything recorded from finished plays.
pub struct Execution<'g, M> {
    pub(crate) game: &'g GameDefinition<M>,
    pub(crate) names: ByPlayer<String>,
    pub(crate) location: Arc<GameTree<M>>,
    pub(crate) transcript: Transcript<M>,
    pub(crate) transcripts: ByGame<Transcript<M>>,
    pub(crate) summaries: ByGame<Summary<M>>,
    rng: Box<dyn RngCore>,
}

impl<'g, M: MoveI> Execution<'g, M> {
    /// Fresh run at the root of `game` with one name per player
    pub fn new(game: &'g GameDefinition<M>, names: Vec<String>) -> Result<Self> {
        if names.len() != game.num_players() {
            return Err(GameError::PlayerCount { expected: game.num_players(), found: names.len() });
        }
        Ok(Execution {
            game,
            names: ByPlayer::new(names),
            location: game.tree().clone(),
            transcript: vec![],
            transcripts: ByGame::default(),
            summaries: ByGame::default(),
            rng: Box::new(rand::rng()),
        })
    }

    /// Use a specific source of randomness for chance nodes
    pub fn with_rng(self, rng: impl RngCore + 'static) -> Self {
        Execution { rng: Box::new(rng), ..self }
    }

    pub fn status(&self) -> Status {
        match self.location.as_ref() {
            GameTree::Decision { player, .. } => Status::AwaitingDecision(*player),
            GameTree::Chance { .. } => Status::AwaitingChance,
            GameTree::Payoff(p) => Status::Terminal(p.clone()),
        }
    }

    /// Advance one node. Returns the payoff when this step closed out a play.
    /// On error the partial play is thrown away and the next one starts from the root.
    pub fn step(&mut self, players: &mut [Player<M>]) -> Result<Option<Payoff>> {
        self.advance(players).inspect_err(|e| {
            warn!("aborting game {}: {}", self.game_number(), e);
            self.abort();
        })
    }

    fn advance(&mut self, players: &mut [Player<M>]) -> Result<Option<Payoff>> {
        if players.len() != self.game.num_players() {
            return Err(GameError::PlayerCount { expected: self.game.num_players(), found: players.len() });
        }
        let node = self.location.clone();
        match node.as_ref() {
            GameTree::Decision { player, edges } => {
                if edges.is_empty() {
                    return Err(GameError::MalformedTree(format!("decision node for player {} has no edges", player)));
                }
                let len = players.len();
                let decider = player.checked_sub(1)
                    .and_then(|i| players.get_mut(i))
                    .ok_or_else(|| GameError::out_of_range("players", *player, len))?;
                let mv = decider.strategy.next_move(self)?;
                let child = edges.iter()
                    .find(|(m, _)| *m == mv)
                    .map(|(_, t)| t.clone())
                    .ok_or_else(|| GameError::IllegalMove { player: *player, mv: format!("{:?}", mv) })?;
                debug!("{} (player {}) plays {:?}", decider.name, player, mv);
                self.transcript.push(Event::Decision { player: *player, mv });
                self.location = child;
                Ok(None)
            }
            GameTree::Chance { outcomes } => {
                let i = self.rng.pick_weighted(&outcomes.weights())
                    .ok_or_else(|| GameError::MalformedTree("chance node has no outcomes".into()))?;
                let (mv, child) = outcomes.get(i)
                    .ok_or_else(|| GameError::out_of_range("chance outcomes", i, outcomes.len()))?;
                trace!("chance picks outcome {} ({:?})", i, mv);
                self.transcript.push(Event::Chance(i));
                self.location = child.clone();
                Ok(None)
            }
            GameTree::Payoff(payoff) => {
                self.finish(payoff.clone());
                Ok(Some(payoff.clone()))
            }
        }
    }

    /// Play from the current location to the end of this play
    pub fn once(&mut self, players: &mut [Player<M>]) -> Result<Payoff> {
        debug!("starting game {}", self.game_number());
        loop {
            if let Some(payoff) = self.step(players)? {
                return Ok(payoff);
            }
        }
    }

    /// Play `n` more times, stopping at the first error
    pub fn times(&mut self, n: usize, players: &mut [Player<M>]) -> Result<()> {
        for _ in 0..n {
            self.once(players)?;
        }
        Ok(())
    }

    /// Record a finished play and go back to the root
    fn finish(&mut self, payoff: Payoff) {
        let summary = Summary::from_transcript(self.game.num_players(), &self.transcript, payoff.clone());
        let mut transcript = std::mem::take(&mut self.transcript);
        transcript.push(Event::Payoff(payoff));
        debug!("game {} finished: {:?}", self.game_number(), summary.payoff.values());
        self.transcripts.push(transcript);
        self.summaries.push(summary);
        self.location = self.game.tree().clone();
    }

    /// Drop the partial play without touching the history
    fn abort(&mut self) {
        self.transcript.clear();
        self.location = self.game.tree().clone();
    }
}

impl<M: MoveI> Debug for Execution<'_, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Execution({:?}, {} games played, at {} node)",
               self.names.as_slice(), self.summaries.len(), self.location.kind())
    }
}

/// Play `game` `iterations` times with `players` and hand back the finished run.
/// A failed play discards the whole run; use `play_iterations` to keep the plays finished before it.
pub fn run_iterations<'g, M: MoveI>(
    game: &'g GameDefinition<M>,
    players: &mut [Player<M>],
    iterations: usize,
) -> Result<Execution<'g, M>> {
    let (exec, outcome) = play_iterations(game, players, iterations)?;
    outcome.map(|_| exec)
}

/// Like `run_iterations`, but the run comes back even when a play fails,
/// alongside the error that stopped it
pub fn play_iterations<'g, M: MoveI>(
    game: &'g GameDefinition<M>,
    players: &mut [Player<M>],
    iterations: usize,
) -> Result<(Execution<'g, M>, Result<()>)> {
    let names = players.iter().map(|p| p.name.clone()).collect();
    let mut exec = Execution::new(game, names)?;
    let outcome = exec.times(iterations, players);
    Ok((exec, outcome))
}
