//! Records of finished games and the lookups strategies use on them.
//!
//! All offset arithmetic lives here. Per-game records are stored most recent
//! first, so index 0 is always the game that just finished.

use crate::error::{GameError, Result};
use crate::payoff::Payoff;
use crate::utils::*;

// ---------- Events ----------
/// One step of a single play, in the order it happened
#[derive(Debug, Clone, PartialEq)]
pub enum Event<M> {
    Decision { player: PlayerIndex, mv: M },
    /// Index of the outcome the environment picked
    Chance(usize),
    Payoff(Payoff),
}

/// Every event of one play, oldest first
pub type Transcript<M> = Vec<Event<M>>;

/// Condensed record of one play
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<M> {
    /// Each player's moves, oldest first
    pub moves: ByPlayer<Vec<M>>,
    pub payoff: Payoff,
}

impl<M: MoveI> Summary<M> {
    /// Pull each player's decisions out of a finished transcript
    pub fn from_transcript(num_players: usize, transcript: &[Event<M>], payoff: Payoff) -> Self {
        let mut moves = vec![vec![]; num_players];
        for event in transcript {
            if let Event::Decision { player, mv } = event {
                if let Some(ms) = player.checked_sub(1).and_then(|i| moves.get_mut(i)) {
                    ms.push(mv.clone());
                }
            }
        }
        Summary { moves: ByPlayer::new(moves), payoff }
    }
}

// ---------- ByPlayer ----------
/// One entry per player, player 1 first
#[derive(Debug, Clone, PartialEq)]
pub struct ByPlayer<T>(Vec<T>);

impl<T> Default for ByPlayer<T> {
    fn default() -> Self { ByPlayer(vec![]) }
}

impl<T> ByPlayer<T> {
    pub fn new(items: Vec<T>) -> Self { ByPlayer(items) }
    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
    #[inline] pub fn as_slice(&self) -> &[T] { &self.0 }
    pub fn into_vec(self) -> Vec<T> { self.0 }
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// 0-based
    pub fn at(&self, i: usize) -> Result<&T> {
        self.0.get(i).ok_or_else(|| GameError::out_of_range("players", i, self.len()))
    }
    /// 1-based, as on decision nodes
    pub fn player(&self, p: PlayerIndex) -> Result<&T> {
        p.checked_sub(1)
            .and_then(|i| self.0.get(i))
            .ok_or_else(|| GameError::out_of_range("players", p, self.len()))
    }
    /// The player after `i` (0-based), wrapping around
    pub fn next_after(&self, i: usize) -> Result<&T> {
        if self.is_empty() {
            return Err(GameError::out_of_range("players", i, 0));
        }
        self.at((i + 1) % self.len())
    }
    /// Everyone except `i` (0-based), in player order
    pub fn except(&self, i: usize) -> Vec<&T> {
        self.0.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, x)| x).collect()
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> ByPlayer<U> {
        ByPlayer(self.0.iter().map(f).collect())
    }
}

// ---------- ByGame ----------
/// One entry per finished game, most recent first
#[derive(Debug, Clone, PartialEq)]
pub struct ByGame<T>(Vec<T>);

impl<T> Default for ByGame<T> {
    fn default() -> Self { ByGame(vec![]) }
}

impl<T> ByGame<T> {
    /// Build from entries that are already most recent first
    pub fn new(items: Vec<T>) -> Self { ByGame(items) }
    /// Build from entries in the order they were played
    pub fn from_chronological(mut items: Vec<T>) -> Self {
        items.reverse();
        ByGame(items)
    }
    /// Record the game that just finished
    pub fn push(&mut self, item: T) { self.0.insert(0, item) }

    #[inline] pub fn len(&self) -> usize { self.0.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }
    /// Most recent first
    #[inline] pub fn as_slice(&self) -> &[T] { &self.0 }
    /// Most recent first
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Everything, in the order it was played
    pub fn every(&self) -> Vec<&T> { self.0.iter().rev().collect() }
    /// The earliest game
    pub fn first(&self) -> Result<&T> {
        self.0.last().ok_or_else(|| GameError::out_of_range("games", 0, 0))
    }
    /// The game that just finished
    pub fn prev(&self) -> Result<&T> {
        self.0.first().ok_or_else(|| GameError::out_of_range("games", 0, 0))
    }
    /// The earliest `n` games in the order they were played
    pub fn firstn(&self, n: usize) -> Result<Vec<&T>> {
        if n > self.len() {
            return Err(GameError::out_of_range("games", n, self.len()));
        }
        Ok(self.0.iter().rev().take(n).collect())
    }
    /// The latest `n` games, most recent first
    pub fn prevn(&self, n: usize) -> Result<Vec<&T>> {
        if n > self.len() {
            return Err(GameError::out_of_range("games", n, self.len()));
        }
        Ok(self.0.iter().take(n).collect())
    }
    /// Game number `i`, counting the first game played as 1
    pub fn gamen(&self, i: usize) -> Result<&T> {
        if i == 0 || i > self.len() {
            return Err(GameError::out_of_range("games", i, self.len()));
        }
        Ok(&self.0[self.len() - i])
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> ByGame<U> {
        ByGame(self.0.iter().map(f).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Games 1, 2, 3 played in that order
    fn three_games() -> ByGame<u32> {
        let mut games = ByGame::default();
        for g in [1, 2, 3] {
            games.push(g);
        }
        games
    }

    #[test]
    fn storage_is_most_recent_first() {
        assert_eq!(three_games().as_slice(), &[3, 2, 1]);
        assert_eq!(three_games(), ByGame::from_chronological(vec![1, 2, 3]));
    }

    #[test]
    fn prev_is_latest() {
        assert_eq!(three_games().prev(), Ok(&3));
    }

    #[test]
    fn first_is_earliest() {
        assert_eq!(three_games().first(), Ok(&1));
    }

    #[test]
    fn every_is_chronological() {
        assert_eq!(three_games().every(), vec![&1, &2, &3]);
    }

    #[test]
    fn gamen_counts_from_one() {
        let games = three_games();
        assert_eq!(games.gamen(1), Ok(&1));
        assert_eq!(games.gamen(2), Ok(&2));
        assert_eq!(games.gamen(3), Ok(&3));
        assert!(matches!(games.gamen(4), Err(GameError::IndexOutOfRange { index: 4, len: 3, .. })));
        assert!(games.gamen(0).is_err());
    }

    #[test]
    fn prevn_and_firstn() {
        let games = three_games();
        assert_eq!(games.prevn(2), Ok(vec![&3, &2]));
        assert_eq!(games.firstn(2), Ok(vec![&1, &2]));
        assert!(games.prevn(4).is_err());
        assert_eq!(games.firstn(0), Ok(vec![]));
    }

    #[test]
    fn empty_history() {
        let games: ByGame<u32> = ByGame::default();
        assert!(games.prev().is_err());
        assert!(games.first().is_err());
        assert!(games.every().is_empty());
    }

    #[test]
    fn by_player_lookups() {
        let xs = ByPlayer::new(vec!['a', 'b', 'c']);
        assert_eq!(xs.player(1), Ok(&'a'));
        assert_eq!(xs.player(3), Ok(&'c'));
        assert!(xs.player(0).is_err());
        assert!(xs.player(4).is_err());
        assert_eq!(xs.next_after(0), Ok(&'b'));
        assert_eq!(xs.next_after(2), Ok(&'a'));
        assert_eq!(xs.except(1), vec![&'a', &'c']);
    }

    #[test]
    fn summary_splits_moves_by_player() {
        let transcript = vec![
            Event::Decision { player: 1, mv: 'x' },
            Event::Chance(0),
            Event::Decision { player: 2, mv: 'y' },
            Event::Decision { player: 1, mv: 'z' },
        ];
        let s = Summary::from_transcript(2, &transcript, Payoff::zero(2));
        assert_eq!(s.moves, ByPlayer::new(vec![vec!['x', 'z'], vec!['y']]));
    }
}
