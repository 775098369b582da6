use crate::error::Result;
use crate::game::GameDefinition;
use crate::game_tree::GameTree;
use crate::info;
use crate::payoff::Distribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin { Heads, Tails }

/// A fair coin sets the stakes (1 on tails, 2 on heads), then each player shows a penny.
/// Player 1 wins on a match. Neither player sees the flip or the other penny.
pub fn matching_pennies() -> Result<GameDefinition<Coin>> {
    let round = |stakes: f64| {
        let second = |first: Coin| GameTree::decision(2, [Coin::Heads, Coin::Tails].into_iter()
            .map(|c| (c, GameTree::payoff(if c == first { vec![stakes, -stakes] } else { vec![-stakes, stakes] })))
            .collect());
        GameTree::decision(1, vec![(Coin::Heads, second(Coin::Heads)), (Coin::Tails, second(Coin::Tails))])
    };
    let tree = GameTree::chance(Distribution::uniform(vec![
        (Coin::Heads, round(2.0)),
        (Coin::Tails, round(1.0)),
    ]));
    let game = GameDefinition::with_players(2, tree)?;
    let info = info::by_player(game.tree());
    Ok(game.with_info(info))
}
