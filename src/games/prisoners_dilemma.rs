use crate::error::Result;
use crate::game::GameDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dilemma { Cooperate, Defect }

/// Row player's payoffs for (C,C) (C,D) (D,C) (D,D)
pub const PAYOFFS: [f64; 4] = [2.0, 0.0, 3.0, 1.0];

pub fn prisoners_dilemma() -> Result<GameDefinition<Dilemma>> {
    GameDefinition::symmetric(vec![Dilemma::Cooperate, Dilemma::Defect], PAYOFFS.to_vec())
}
