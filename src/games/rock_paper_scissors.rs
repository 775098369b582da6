use crate::error::Result;
use crate::game::GameDefinition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rps { Rock, Paper, Scissors }

pub const MOVES: [Rps; 3] = [Rps::Rock, Rps::Paper, Rps::Scissors];

/// Zero-sum, a win is worth 1
pub fn rock_paper_scissors() -> Result<GameDefinition<Rps>> {
    GameDefinition::matrix(MOVES.to_vec(), MOVES.to_vec(), vec![
         0.0, -1.0,  1.0,
         1.0,  0.0, -1.0,
        -1.0,  1.0,  0.0,
    ])
}
