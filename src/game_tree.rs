use std::collections::VecDeque;
use std::sync::Arc;
use log::trace;
use crate::error::{GameError, Result};
use crate::payoff::{Distribution, Payoff};
use crate::utils::*;

/// A move together with the subtree it leads to
pub type Edge<M> = (M, Arc<GameTree<M>>);

// ---------- Game Tree ----------
/// Extensive form of a game. Subtrees sit behind `Arc` so trees are cheap to share and combine.
#[derive(Debug, Clone, PartialEq)]
pub enum GameTree<M> {
    /// `player` picks one of the edges
    Decision { player: PlayerIndex, edges: Vec<Edge<M>> },
    /// The environment picks an edge with the given relative weights
    Chance { outcomes: Distribution<Edge<M>> },
    /// Game over
    Payoff(Payoff),
}

impl<M: MoveI> GameTree<M> {
    // ---------- Constructors ---------- //
    pub fn decision(player: PlayerIndex, edges: Vec<(M, GameTree<M>)>) -> Self {
        GameTree::Decision { player, edges: edges.into_iter().map(|(m, t)| (m, Arc::new(t))).collect() }
    }
    pub fn chance(outcomes: Distribution<(M, GameTree<M>)>) -> Self {
        GameTree::Chance { outcomes: outcomes.map(|(m, t)| (m, Arc::new(t))) }
    }
    pub fn payoff(values: Vec<Reward>) -> Self {
        GameTree::Payoff(Payoff::new(values))
    }

    // ---------- Local structure ---------- //
    /// Human-readable node kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            GameTree::Decision { .. } => "decision",
            GameTree::Chance { .. } => "chance",
            GameTree::Payoff(_) => "payoff",
        }
    }
    /// The deciding player, if this is a decision node
    pub fn player(&self) -> Option<PlayerIndex> {
        match self {
            GameTree::Decision { player, .. } => Some(*player),
            GameTree::Chance { .. } | GameTree::Payoff(_) => None,
        }
    }
    /// Edges leaving this node, in move order
    pub fn edges(&self) -> Vec<&Edge<M>> {
        match self {
            GameTree::Decision { edges, .. } => edges.iter().collect(),
            GameTree::Chance { outcomes } => outcomes.items().collect(),
            GameTree::Payoff(_) => vec![],
        }
    }
    pub fn available_moves(&self) -> Vec<M> {
        self.edges().into_iter().map(|(m, _)| m.clone()).collect()
    }
    /// Children in the same order as `available_moves`
    pub fn children(&self) -> Vec<&Arc<GameTree<M>>> {
        self.edges().into_iter().map(|(_, t)| t).collect()
    }
    /// Subtree reached by playing `mv` (first matching edge)
    pub fn child(&self, mv: &M) -> Option<&Arc<GameTree<M>>> {
        self.edges().into_iter().find(|(m, _)| m == mv).map(|(_, t)| t)
    }
    #[inline] pub fn is_terminal(&self) -> bool { matches!(self, GameTree::Payoff(_)) }

    // ---------- Traversal ---------- //
    /// Breadth-first walk starting at this node
    pub fn bfs(&self) -> Bfs<'_, M> { Bfs { queue: VecDeque::from([self]) } }
    /// Depth-first (pre-order) walk starting at this node
    pub fn dfs(&self) -> Dfs<'_, M> { Dfs { stack: vec![self] } }
    /// Number of nodes in the whole tree
    pub fn size(&self) -> usize { self.dfs().count() }
    /// Highest player number found on any decision node
    pub fn max_player(&self) -> Option<PlayerIndex> {
        self.dfs().filter_map(|t| t.player()).max()
    }

    /// Check that every decision and chance node has somewhere to go
    pub fn validate(&self) -> Result<()> {
        for node in self.dfs() {
            match node {
                GameTree::Decision { player, edges } if edges.is_empty() => {
                    return Err(GameError::MalformedTree(format!("decision node for player {} has no edges", player)));
                }
                GameTree::Decision { player: 0, .. } => {
                    return Err(GameError::MalformedTree("decision node for player 0 (players are numbered from 1)".into()));
                }
                GameTree::Chance { outcomes } if outcomes.is_empty() => {
                    return Err(GameError::MalformedTree("chance node has no outcomes".into()));
                }
                GameTree::Decision { .. } | GameTree::Chance { .. } | GameTree::Payoff(_) => {}
            }
        }
        Ok(())
    }

    // ---------- Combinators ---------- //
    /// Merge two trees of the same shape at the root:
    /// payoffs add up, chance outcomes and same-player decision edges are concatenated.
    pub fn combine(&self, other: &GameTree<M>) -> Result<GameTree<M>> {
        trace!("combining {} node with {} node", self.kind(), other.kind());
        match (self, other) {
            (GameTree::Payoff(a), GameTree::Payoff(b)) => Ok(GameTree::Payoff(a.plus(b)?)),
            (GameTree::Chance { outcomes: a }, GameTree::Chance { outcomes: b }) => {
                Ok(GameTree::Chance { outcomes: a.clone().concat(b.clone()) })
            }
            (GameTree::Decision { player: p, edges: a }, GameTree::Decision { player: q, edges: b }) => {
                if p != q {
                    return Err(GameError::TypeMismatch(format!(
                        "cannot combine decisions for player {} and player {}", p, q
                    )));
                }
                Ok(GameTree::Decision { player: *p, edges: a.iter().chain(b.iter()).cloned().collect() })
            }
            (a, b) => Err(GameError::TypeMismatch(format!("cannot combine {} node with {} node", a.kind(), b.kind()))),
        }
    }

    /// Add one edge to a decision node. The new edge goes first, ahead of the existing ones.
    pub fn with_edge(&self, mv: M, child: GameTree<M>) -> Result<GameTree<M>> {
        match self {
            GameTree::Decision { player, edges } => {
                let mut new_edges = Vec::with_capacity(edges.len() + 1);
                new_edges.push((mv, Arc::new(child)));
                new_edges.extend(edges.iter().cloned());
                Ok(GameTree::Decision { player: *player, edges: new_edges })
            }
            other => Err(GameError::TypeMismatch(format!("cannot add an edge to a {} node", other.kind()))),
        }
    }
}

// ---------- Iterators ---------- //
pub struct Bfs<'a, M> { queue: VecDeque<&'a GameTree<M>> }

impl<'a, M: MoveI> Iterator for Bfs<'a, M> {
    type Item = &'a GameTree<M>;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children().into_iter().map(|t| t.as_ref()));
        Some(node)
    }
}

pub struct Dfs<'a, M> { stack: Vec<&'a GameTree<M>> }

impl<'a, M: MoveI> Iterator for Dfs<'a, M> {
    type Item = &'a GameTree<M>;
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // reversed so the leftmost child comes out next
        self.stack.extend(node.children().into_iter().rev().map(|t| t.as_ref()));
        Some(node)
    }
}
