use std::sync::Arc;
use log::trace;
use crate::error::{GameError, Result};
use crate::game::GameDefinition;
use crate::game_tree::GameTree;
use crate::utils::*;

/// Best move for the player deciding at `node`, by alpha-beta search.
/// That player maximizes their own payoff and everyone else is assumed to minimize it.
/// Only works on perfect information trees without chance nodes. Ties go to the earliest edge.
pub fn minimax<M: MoveI>(game: &GameDefinition<M>, node: &Arc<GameTree<M>>) -> Result<M> {
    let (me, edges) = match node.as_ref() {
        GameTree::Decision { player, edges } => (*player, edges),
        GameTree::Chance { .. } | GameTree::Payoff(_) => return Err(GameError::NotADecisionNode),
    };
    check_perfect(game, node)?;
    let (mut alpha, beta) = MINIMAX_WINDOW;
    let mut best: Option<&M> = None;
    for (mv, child) in edges {
        let value = alpha_beta(game, child, me, alpha, beta)?;
        trace!("minimax: {:?} is worth {}", mv, value);
        if best.is_none() || value > alpha {
            alpha = alpha.max(value);
            best = Some(mv);
        }
    }
    best.cloned().ok_or_else(|| GameError::MalformedTree(format!("decision node for player {} has no edges", me)))
}

/// Value of `node` for player `me`
fn alpha_beta<M: MoveI>(game: &GameDefinition<M>, node: &Arc<GameTree<M>>, me: PlayerIndex,
                        mut alpha: Reward, mut beta: Reward) -> Result<Reward> {
    check_perfect(game, node)?;
    match node.as_ref() {
        GameTree::Payoff(payoff) => payoff.for_player(me),
        GameTree::Chance { .. } => Err(GameError::UnsupportedGameType("minimax cannot search chance nodes".into())),
        GameTree::Decision { player, edges } if edges.is_empty() => {
            Err(GameError::MalformedTree(format!("decision node for player {} has no edges", player)))
        }
        GameTree::Decision { player, edges } if *player == me => {
            let mut value = Reward::NEG_INFINITY;
            for (_, child) in edges {
                value = value.max(alpha_beta(game, child, me, alpha, beta)?);
                alpha = alpha.max(value);
                if alpha >= beta { break; }
            }
            Ok(value)
        }
        GameTree::Decision { edges, .. } => {
            let mut value = Reward::INFINITY;
            for (_, child) in edges {
                value = value.min(alpha_beta(game, child, me, alpha, beta)?);
                beta = beta.min(value);
                if alpha >= beta { break; }
            }
            Ok(value)
        }
    }
}

fn check_perfect<M: MoveI>(game: &GameDefinition<M>, node: &Arc<GameTree<M>>) -> Result<()> {
    let group = game.classify(node);
    if group.is_perfect() {
        Ok(())
    } else {
        Err(GameError::UnsupportedGameType(format!("minimax needs perfect information, got {:?}", group)))
    }
}
