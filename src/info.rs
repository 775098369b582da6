use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use crate::game_tree::GameTree;
use crate::utils::*;

// ---------- Information groups ----------
/// What the acting player can tell about where they are in the tree
#[derive(Clone, PartialEq)]
pub enum InformationGroup<M> {
    /// The exact node is known
    Perfect(Arc<GameTree<M>>),
    /// Any of these nodes could be the real one
    Imperfect(Vec<Arc<GameTree<M>>>),
    /// The location can't be inspected at all
    NoInfo,
}

impl<M: MoveI> InformationGroup<M> {
    #[inline] pub fn is_perfect(&self) -> bool { matches!(self, InformationGroup::Perfect(_)) }
    /// Every node the player might be at (empty when nothing is known)
    pub fn nodes(&self) -> Vec<&Arc<GameTree<M>>> {
        match self {
            InformationGroup::Perfect(t) => vec![t],
            InformationGroup::Imperfect(ts) => ts.iter().collect(),
            InformationGroup::NoInfo => vec![],
        }
    }
}

impl<M: MoveI> Debug for InformationGroup<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // whole subtrees are far too noisy here
        match self {
            InformationGroup::Perfect(t) => write!(f, "Perfect({})", t.kind()),
            InformationGroup::Imperfect(ts) => write!(f, "Imperfect({} nodes)", ts.len()),
            InformationGroup::NoInfo => write!(f, "NoInfo"),
        }
    }
}

// ---------- Partition functions ----------
/// Maps a node to its information group. Shared by every run of a game.
pub type InfoFn<M> = Arc<dyn Fn(&Arc<GameTree<M>>) -> InformationGroup<M> + Send + Sync>;

/// Every node is fully visible
pub fn perfect<M: MoveI>() -> InfoFn<M> {
    Arc::new(|node: &Arc<GameTree<M>>| InformationGroup::Perfect(node.clone()))
}

/// Nothing is visible, as when everyone moves at once
pub fn simultaneous<M: MoveI>() -> InfoFn<M> {
    Arc::new(|_: &Arc<GameTree<M>>| InformationGroup::NoInfo)
}

/// A player's decision nodes are all indistinguishable from each other,
/// which is how a normal form game looks when laid out as a tree
pub fn by_player<M: MoveI>(root: &Arc<GameTree<M>>) -> InfoFn<M> {
    let mut groups: Vec<Vec<Arc<GameTree<M>>>> = vec![];
    let mut stack = vec![root.clone()];
    while let Some(node) = stack.pop() {
        if let Some(p) = node.player().filter(|p| *p > 0) {
            if groups.len() < p {
                groups.resize(p, vec![]);
            }
            groups[p - 1].push(node.clone());
        }
        stack.extend(node.children().into_iter().rev().cloned());
    }
    Arc::new(move |node: &Arc<GameTree<M>>| {
        match node.player().and_then(|p| p.checked_sub(1)).and_then(|i| groups.get(i)) {
            Some(group) => InformationGroup::Imperfect(group.clone()),
            None => InformationGroup::Perfect(node.clone()),
        }
    })
}
