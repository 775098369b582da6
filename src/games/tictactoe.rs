use crate::error::{GameError, Result};
use crate::game::{GameDefinition, TurnBased};
use crate::payoff::Payoff;
use crate::utils::*;

/// Cells 0..9 row by row, each empty or holding the player who marked it (X = 1, O = 2)
pub type Board = [Option<PlayerIndex>; 9];

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

/// Tic-Tac-Toe from some position with X to move. Moves are cell numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct TicTacToe { start: Board }

impl Default for TicTacToe {
    fn default() -> Self { TicTacToe { start: [None; 9] } }
}

impl TicTacToe {
    /// Start from `board`, which must have X to move and nobody already won
    pub fn from_board(board: Board) -> Result<Self> {
        let count = |p| board.iter().filter(|c| **c == Some(p)).count();
        if count(1) != count(2) {
            return Err(GameError::MalformedTree(format!(
                "X must be to move, board has {} X and {} O", count(1), count(2)
            )));
        }
        if let Some(c) = board.iter().flatten().find(|p| **p != 1 && **p != 2) {
            return Err(GameError::MalformedTree(format!("no player {} in tic-tac-toe", c)));
        }
        if winner(&board).is_some() {
            return Err(GameError::MalformedTree("board is already won".into()));
        }
        Ok(TicTacToe { start: board })
    }

    /// Read a board from 9 characters of `X`, `O` and `.`
    pub fn parse(cells: &str) -> Result<Self> {
        let cells: Vec<char> = cells.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 9 {
            return Err(GameError::MalformedTree(format!("board needs 9 cells, got {}", cells.len())));
        }
        let mut board = [None; 9];
        for (cell, c) in board.iter_mut().zip(cells) {
            *cell = match c {
                'X' | 'x' => Some(1),
                'O' | 'o' => Some(2),
                '.' => None,
                other => return Err(GameError::MalformedTree(format!("unknown cell {:?}", other))),
            };
        }
        Self::from_board(board)
    }

    pub fn definition(self) -> Result<GameDefinition<usize>> {
        GameDefinition::take_turns(self)
    }
}

fn winner(board: &Board) -> Option<PlayerIndex> {
    LINES.iter()
        .find(|[a, b, c]| board[*a].is_some() && board[*a] == board[*b] && board[*b] == board[*c])
        .and_then(|[a, _, _]| board[*a])
}

fn to_move(board: &Board) -> PlayerIndex {
    if board.iter().flatten().count() % 2 == 0 { 1 } else { 2 }
}

impl TurnBased for TicTacToe {
    type State = Board;
    type Move = usize;

    fn num_players(&self) -> usize { 2 }
    fn initial_state(&self) -> Board { self.start }
    fn is_over(&self, board: &Board) -> bool {
        winner(board).is_some() || board.iter().all(|c| c.is_some())
    }
    fn available_moves(&self, board: &Board) -> Vec<usize> {
        (0..9).filter(|i| board[*i].is_none()).collect()
    }
    fn play(&self, board: &Board, mv: &usize) -> Board {
        let mut next = *board;
        next[*mv] = Some(to_move(board));
        next
    }
    fn payoff(&self, board: &Board) -> Payoff {
        match winner(board) {
            Some(1) => Payoff::zero_sum(1.0),
            Some(_) => Payoff::zero_sum(-1.0),
            None => Payoff::zero(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::minimax;

    /// X wins at 3, blocks at 0, or loses after 6
    const BOARD: &str = ".OO .XX .XO";

    #[test]
    fn x_takes_the_win() {
        let game = TicTacToe::parse(BOARD).unwrap().definition().unwrap();
        assert_eq!(game.tree().available_moves(), vec![0, 3, 6]);
        assert_eq!(minimax(&game, game.tree()), Ok(3));
    }

    #[test]
    fn o_blocks() {
        let game = TicTacToe::parse(BOARD).unwrap().definition().unwrap();
        let after = game.tree().child(&0).unwrap().clone();
        assert_eq!(after.player(), Some(2));
        assert_eq!(minimax(&game, &after), Ok(3));
    }

    #[test]
    fn rejects_bad_boards() {
        assert!(TicTacToe::parse("XX. ... ...").is_err());
        assert!(TicTacToe::parse("XXX OO. O..").is_err());
        assert!(TicTacToe::parse("........").is_err());
        assert!(TicTacToe::parse("..? ... ...").is_err());
    }

    #[test]
    fn winner_scores() {
        let t = TicTacToe::default();
        let board = [Some(2), Some(2), Some(2), Some(1), Some(1), None, Some(1), None, None];
        assert!(t.is_over(&board));
        assert_eq!(t.payoff(&board), Payoff::zero_sum(-1.0));
    }
}
