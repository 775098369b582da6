use crate::error::{GameError, Result};
use crate::utils::*;

// ---------- Payoff ----------
/// One reward per player, player 1 first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payoff(Vec<Reward>);

impl Payoff {
    pub fn new(values: Vec<Reward>) -> Self { Payoff(values) }
    /// Nobody wins anything
    pub fn zero(num_players: usize) -> Self { Payoff(vec![0.0; num_players]) }
    /// Two player zero-sum outcome: player 1 gets `v`, player 2 pays it
    pub fn zero_sum(v: Reward) -> Self { Payoff(vec![v, -v]) }

    #[inline] pub fn values(&self) -> &[Reward] { &self.0 }
    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
    /// 0-based lookup
    #[inline] pub fn get(&self, index: usize) -> Option<Reward> { self.0.get(index).copied() }

    /// 1-based lookup matching the player numbers on decision nodes
    pub fn for_player(&self, player: PlayerIndex) -> Result<Reward> {
        player.checked_sub(1)
            .and_then(|i| self.get(i))
            .ok_or_else(|| GameError::out_of_range("payoff", player, self.len()))
    }

    /// Elementwise sum, both sides must cover the same players
    pub fn plus(&self, other: &Payoff) -> Result<Payoff> {
        if self.len() != other.len() {
            return Err(GameError::TypeMismatch(format!(
                "cannot add payoffs for {} and {} players", self.len(), other.len()
            )));
        }
        Ok(Payoff(self.0.iter().zip(other.0.iter()).map(|(a, b)| a + b).collect()))
    }
}

impl From<Vec<Reward>> for Payoff {
    fn from(values: Vec<Reward>) -> Self { Payoff(values) }
}

// ---------- Distribution ----------
/// Discrete distribution given by relative frequencies (weight 3 is three times as likely as weight 1)
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution<T>(Vec<(Weight, T)>);

impl<T> Distribution<T> {
    /// Build from (weight, item) pairs, rejecting zero weights
    pub fn new(pairs: Vec<(Weight, T)>) -> Result<Self> {
        if let Some(i) = pairs.iter().position(|(w, _)| *w == 0) {
            return Err(GameError::MalformedTree(format!("outcome {} has zero weight", i)));
        }
        Ok(Distribution(pairs))
    }
    /// Every item equally likely
    pub fn uniform(items: Vec<T>) -> Self {
        Distribution(items.into_iter().map(|x| (1, x)).collect())
    }

    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
    #[inline] pub fn total_weight(&self) -> Weight { self.0.iter().map(|(w, _)| w).sum() }
    pub fn weights(&self) -> Vec<Weight> { self.0.iter().map(|(w, _)| *w).collect() }
    pub fn items(&self) -> impl Iterator<Item = &T> { self.0.iter().map(|(_, x)| x) }
    pub fn pairs(&self) -> &[(Weight, T)] { &self.0 }
    pub fn get(&self, index: usize) -> Option<&T> { self.0.get(index).map(|(_, x)| x) }

    /// Outcomes of `other` follow ours
    pub fn concat(mut self, other: Distribution<T>) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Distribution<U> {
        Distribution(self.0.into_iter().map(|(w, x)| (w, f(x))).collect())
    }
}
