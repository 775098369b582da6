//! Human readable output for trees, histories and scores.

use std::fmt::{self, Display, Formatter, Write};
use crate::execution::{Execution, Status};
use crate::game_tree::GameTree;
use crate::history::Event;
use crate::payoff::Payoff;
use crate::utils::*;

impl Display for Payoff {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.values().iter().map(|v| format!("{}", v)).collect();
        write!(f, "[{}]", values.join(", "))
    }
}

impl<M: MoveI> Display for Event<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Event::Decision { player, mv } => write!(f, "player {} plays {:?}", player, mv),
            Event::Chance(i) => write!(f, "chance picks outcome {}", i),
            Event::Payoff(p) => write!(f, "payoff {}", p),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Status::AwaitingDecision(p) => write!(f, "waiting on player {}", p),
            Status::AwaitingChance => write!(f, "waiting on chance"),
            Status::Terminal(p) => write!(f, "finished with {}", p),
        }
    }
}

/// One node per line, children indented under the edge that reaches them
impl<M: MoveI> Display for GameTree<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node<M: MoveI>(f: &mut Formatter<'_>, node: &GameTree<M>, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match node {
        GameTree::Payoff(p) => writeln!(f, "{}{}", pad, p),
        GameTree::Decision { player, edges } => {
            writeln!(f, "{}Player {}:", pad, player)?;
            for (mv, child) in edges {
                writeln!(f, "{}  {:?} ->", pad, mv)?;
                write_node(f, child, depth + 2)?;
            }
            Ok(())
        }
        GameTree::Chance { outcomes } => {
            writeln!(f, "{}Chance (out of {}):", pad, outcomes.total_weight())?;
            for (w, (mv, child)) in outcomes.pairs() {
                writeln!(f, "{}  {} x {:?} ->", pad, w, mv)?;
                write_node(f, child, depth + 2)?;
            }
            Ok(())
        }
    }
}

// ---------- Reports ----------
/// Every finished play's events, oldest game first
pub fn transcript<M: MoveI>(exec: &Execution<'_, M>) -> String {
    let mut out = String::new();
    for (i, events) in exec.transcripts().every().into_iter().enumerate() {
        let _ = writeln!(out, "Game {}:", i + 1);
        for event in events {
            let _ = writeln!(out, "  {}", event);
        }
    }
    out
}

/// Each player's moves and payoff per finished play, oldest game first
pub fn summaries<M: MoveI>(exec: &Execution<'_, M>) -> String {
    let names = exec.player_names();
    let mut out = String::new();
    for (i, summary) in exec.summaries().every().into_iter().enumerate() {
        let _ = writeln!(out, "Game {}:", i + 1);
        for ((name, moves), value) in names.iter().zip(summary.moves.iter()).zip(summary.payoff.values()) {
            let _ = writeln!(out, "  {} moved {:?} and got {}", name, moves, value);
        }
    }
    out
}

/// Total score per player over every finished play
pub fn score<M: MoveI>(exec: &Execution<'_, M>) -> String {
    let mut out = format!("Score after {} games:\n", exec.num_games());
    for (name, total) in exec.player_names().iter().zip(exec.score().values()) {
        let _ = writeln!(out, "  {}: {}", name, total);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::execution::{run_iterations, Player};
    use crate::game::GameDefinition;
    use crate::payoff::Distribution;

    #[test]
    fn payoff_and_events() {
        assert_eq!(Payoff::new(vec![1.0, -0.5]).to_string(), "[1, -0.5]");
        assert_eq!(Event::Decision { player: 2, mv: 'x' }.to_string(), "player 2 plays 'x'");
        assert_eq!(Event::<char>::Chance(1).to_string(), "chance picks outcome 1");
        assert_eq!(Status::AwaitingDecision(1).to_string(), "waiting on player 1");
    }

    #[test]
    fn tree_is_indented() {
        let tree = GameTree::decision(1, vec![
            ('a', GameTree::chance(Distribution::uniform(vec![('h', GameTree::payoff(vec![1.0]))]))),
        ]);
        let expected = "Player 1:\n  'a' ->\n    Chance (out of 1):\n      1 x 'h' ->\n        [1]\n";
        assert_eq!(tree.to_string(), expected);
    }

    #[test]
    fn reports_name_players() {
        let game = GameDefinition::matrix(vec!['r', 'p'], vec!['r', 'p'], vec![0.0, -1.0, 1.0, 0.0]).unwrap();
        let rock = |_: &Execution<'_, char>| -> Result<char> { Ok('r') };
        let paper = |_: &Execution<'_, char>| -> Result<char> { Ok('p') };
        let mut players = vec![Player::new("ann", rock), Player::new("bob", paper)];
        let exec = run_iterations(&game, &mut players, 2).unwrap();

        let t = transcript(&exec);
        assert!(t.starts_with("Game 1:\n  player 1 plays 'r'\n  player 2 plays 'p'\n  payoff [-1, 1]\n"));
        assert!(t.contains("Game 2:"));
        assert!(summaries(&exec).contains("  bob moved ['p'] and got 1\n"));
        assert_eq!(score(&exec), "Score after 2 games:\n  ann: -2\n  bob: 2\n");
    }
}
