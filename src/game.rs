use std::fmt::{Debug, Formatter};
use std::sync::Arc;
use log::{debug, trace};
use crate::error::{GameError, Result};
use crate::game_tree::GameTree;
use crate::info::{self, InfoFn, InformationGroup};
use crate::payoff::Payoff;
use crate::utils::*;

// ---------- Game Definition ----------
/// Everything needed to play a game: how many players, what they can see, and the tree itself.
/// Immutable once built, so one definition can back any number of runs.
#[derive(Clone)]
pub struct GameDefinition<M> {
    num_players: usize,
    info: InfoFn<M>,
    tree: Arc<GameTree<M>>,
}

impl<M: MoveI> GameDefinition<M> {
    /// Checks the tree and that no decision belongs to a player beyond `num_players`
    pub fn new(num_players: usize, info: InfoFn<M>, tree: GameTree<M>) -> Result<Self> {
        Self::from_shared(num_players, info, Arc::new(tree))
    }

    fn from_shared(num_players: usize, info: InfoFn<M>, tree: Arc<GameTree<M>>) -> Result<Self> {
        tree.validate()?;
        if let Some(p) = tree.max_player().filter(|p| *p > num_players) {
            return Err(GameError::MalformedTree(format!(
                "decision for player {} in a {} player game", p, num_players
            )));
        }
        if let Some(GameTree::Payoff(p)) = tree.dfs().find(|t| matches!(t, GameTree::Payoff(p) if p.len() != num_players)) {
            return Err(GameError::MalformedTree(format!(
                "payoff {:?} does not cover {} players", p.values(), num_players
            )));
        }
        debug!("defined {} player game with {} nodes", num_players, tree.size());
        Ok(GameDefinition { num_players, info, tree })
    }

    /// Perfect information game straight from a tree; the player count is the highest player on any decision
    pub fn extensive(tree: GameTree<M>) -> Result<Self> {
        let num_players = tree.max_player().ok_or_else(|| GameError::MalformedTree(
            "no decision nodes to infer the player count from (use with_players)".into()
        ))?;
        Self::new(num_players, info::perfect(), tree)
    }

    /// Perfect information game with an explicit player count
    pub fn with_players(num_players: usize, tree: GameTree<M>) -> Result<Self> {
        Self::new(num_players, info::perfect(), tree)
    }

    /// Swap in a different information partition
    pub fn with_info(self, info: InfoFn<M>) -> Self {
        GameDefinition { info, ..self }
    }

    /// Normal form game: one move list per player and the payoffs flattened in row-major order
    /// (player 1's move varies slowest). Each player moves without seeing earlier moves.
    pub fn normal_form(moves: Vec<Vec<M>>, payoffs: Vec<Payoff>) -> Result<Self> {
        let num_players = moves.len();
        let cells: usize = moves.iter().map(|ms| ms.len()).product();
        if payoffs.len() != cells {
            return Err(GameError::MalformedTree(format!(
                "normal form needs {} payoffs, got {}", cells, payoffs.len()
            )));
        }
        if let Some(p) = payoffs.iter().find(|p| p.len() != num_players) {
            return Err(GameError::MalformedTree(format!(
                "payoff {:?} does not cover {} players", p.values(), num_players
            )));
        }
        let root = Arc::new(normal_form_level(&moves, 0, &payoffs));
        let info = info::by_player(&root);
        Self::from_shared(num_players, info, root)
    }

    /// Two player zero-sum normal form game, `values` are player 1's payoffs
    pub fn matrix(rows: Vec<M>, cols: Vec<M>, values: Vec<Reward>) -> Result<Self> {
        Self::normal_form(vec![rows, cols], values.into_iter().map(Payoff::zero_sum).collect())
    }

    /// Two player symmetric normal form game, `values` are the row player's payoffs
    pub fn symmetric(moves: Vec<M>, values: Vec<Reward>) -> Result<Self> {
        let n = moves.len();
        if values.len() != n * n {
            return Err(GameError::MalformedTree(format!(
                "symmetric game needs {} payoffs, got {}", n * n, values.len()
            )));
        }
        let payoffs = (0..n).flat_map(|i| (0..n).map(move |j| (i, j)))
            .map(|(i, j)| Payoff::new(vec![values[i * n + j], values[j * n + i]]))
            .collect();
        Self::normal_form(vec![moves.clone(), moves], payoffs)
    }

    /// Unroll a state machine into a perfect information tree.
    /// The state graph must be acyclic; a cycle recurses forever.
    pub fn state_machine<G: StateMachine<Move = M>>(game: &G) -> Result<Self> {
        let tree = unroll(game, &game.initial_state());
        Self::with_players(game.num_players(), tree)
    }

    /// Like `state_machine`, with players taking turns in order starting from player 1
    pub fn take_turns<G: TurnBased<Move = M>>(game: G) -> Result<Self> {
        Self::state_machine(&TakeTurns(game))
    }

    // ---------- Getters ---------- //
    #[inline] pub fn num_players(&self) -> usize { self.num_players }
    #[inline] pub fn tree(&self) -> &Arc<GameTree<M>> { &self.tree }
    /// Information group of any node in this game
    pub fn classify(&self, node: &Arc<GameTree<M>>) -> InformationGroup<M> {
        (self.info)(node)
    }
}

impl<M: MoveI> Debug for GameDefinition<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GameDefinition({} players, {} nodes)", self.num_players, self.tree.size())
    }
}

/// One level of a normal form tree per player
fn normal_form_level<M: MoveI>(moves: &[Vec<M>], level: usize, payoffs: &[Payoff]) -> GameTree<M> {
    match moves.get(level) {
        None => GameTree::Payoff(payoffs.first().cloned().unwrap_or_default()),
        Some(options) => {
            let block = payoffs.len() / options.len().max(1);
            let edges = options.iter().enumerate()
                .map(|(i, m)| (m.clone(), normal_form_level(moves, level + 1, &payoffs[i * block..(i + 1) * block])))
                .collect();
            GameTree::decision(level + 1, edges)
        }
    }
}

// ---------- State driven games ----------
/// A game described by its states and transitions rather than by a tree
pub trait StateMachine {
    type State: Clone + Debug;
    type Move: MoveI;

    fn num_players(&self) -> usize;
    fn initial_state(&self) -> Self::State;
    /// The player to move in a non-terminal state
    fn whose_turn(&self, state: &Self::State) -> PlayerIndex;
    fn is_over(&self, state: &Self::State) -> bool;
    fn available_moves(&self, state: &Self::State) -> Vec<Self::Move>;
    fn play(&self, state: &Self::State, mv: &Self::Move) -> Self::State;
    /// Only asked of terminal states
    fn payoff(&self, state: &Self::State) -> Payoff;
}

/// A state machine where players simply rotate, so there is no `whose_turn` to write
pub trait TurnBased {
    type State: Clone + Debug;
    type Move: MoveI;

    fn num_players(&self) -> usize;
    fn initial_state(&self) -> Self::State;
    fn is_over(&self, state: &Self::State) -> bool;
    fn available_moves(&self, state: &Self::State) -> Vec<Self::Move>;
    fn play(&self, state: &Self::State, mv: &Self::Move) -> Self::State;
    fn payoff(&self, state: &Self::State) -> Payoff;
}

/// Adapts a `TurnBased` game by pairing its state with the player to move
#[derive(Debug, Clone)]
pub struct TakeTurns<G>(pub G);

impl<G: TurnBased> StateMachine for TakeTurns<G> {
    type State = (G::State, PlayerIndex);
    type Move = G::Move;

    fn num_players(&self) -> usize { self.0.num_players() }
    fn initial_state(&self) -> Self::State { (self.0.initial_state(), 1) }
    fn whose_turn(&self, state: &Self::State) -> PlayerIndex { state.1 }
    fn is_over(&self, state: &Self::State) -> bool { self.0.is_over(&state.0) }
    fn available_moves(&self, state: &Self::State) -> Vec<Self::Move> { self.0.available_moves(&state.0) }
    fn play(&self, state: &Self::State, mv: &Self::Move) -> Self::State {
        (self.0.play(&state.0, mv), state.1 % self.0.num_players().max(1) + 1)
    }
    fn payoff(&self, state: &Self::State) -> Payoff { self.0.payoff(&state.0) }
}

/// Recursively expand every reachable state
fn unroll<G: StateMachine>(game: &G, state: &G::State) -> GameTree<G::Move> {
    if game.is_over(state) {
        trace!("terminal state {:?}", state);
        return GameTree::Payoff(game.payoff(state));
    }
    let edges = game.available_moves(state).into_iter()
        .map(|m| {
            let next = game.play(state, &m);
            (m, unroll(game, &next))
        })
        .collect();
    GameTree::decision(game.whose_turn(state), edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_form_round_trip() {
        let payoffs: Vec<Payoff> = vec![
            Payoff::new(vec![1.0, 2.0]), Payoff::new(vec![3.0, 4.0]),
            Payoff::new(vec![5.0, 6.0]), Payoff::new(vec![7.0, 8.0]),
        ];
        let game = GameDefinition::normal_form(vec![vec!['a', 'b'], vec!['x', 'y']], payoffs.clone()).unwrap();
        assert_eq!(game.num_players(), 2);
        let root = game.tree();
        assert_eq!(root.player(), Some(1));
        let kids = root.children();
        assert_eq!(kids.len(), 2);
        let mut leaves = vec![];
        for kid in kids {
            assert_eq!(kid.player(), Some(2));
            assert_eq!(kid.available_moves(), vec!['x', 'y']);
            for leaf in kid.children() {
                match leaf.as_ref() {
                    GameTree::Payoff(p) => leaves.push(p.clone()),
                    other => panic!("expected payoff, got {}", other.kind()),
                }
            }
        }
        assert_eq!(leaves, payoffs);
    }

    #[test]
    fn normal_form_is_imperfect_for_second_player() {
        let game = GameDefinition::matrix(vec![0, 1], vec![0, 1], vec![1.0, -1.0, -1.0, 1.0]).unwrap();
        let second = game.tree().children()[0].clone();
        match game.classify(&second) {
            InformationGroup::Imperfect(nodes) => assert_eq!(nodes.len(), 2),
            other => panic!("expected imperfect, got {:?}", other),
        }
    }

    #[test]
    fn normal_form_checks_size() {
        let res = GameDefinition::normal_form(vec![vec![0, 1], vec![0, 1]], vec![Payoff::zero(2); 3]);
        assert!(matches!(res, Err(GameError::MalformedTree(_))));
    }

    #[test]
    fn symmetric_mirrors_payoffs() {
        // cooperate = 0, defect = 1
        let game = GameDefinition::symmetric(vec![0, 1], vec![2.0, 0.0, 3.0, 1.0]).unwrap();
        let cd = game.tree().children()[0].children()[1].clone();
        assert_eq!(*cd, GameTree::payoff(vec![0.0, 3.0]));
        let dc = game.tree().children()[1].children()[0].clone();
        assert_eq!(*dc, GameTree::payoff(vec![3.0, 0.0]));
    }

    #[test]
    fn extensive_infers_players() {
        let tree = GameTree::decision(1, vec![
            ('l', GameTree::decision(3, vec![('r', GameTree::payoff(vec![0.0, 0.0, 0.0]))])),
        ]);
        let game = GameDefinition::extensive(tree).unwrap();
        assert_eq!(game.num_players(), 3);
        assert!(game.classify(game.tree()).is_perfect());
    }

    #[test]
    fn extensive_without_decisions_fails() {
        let tree: GameTree<char> = GameTree::payoff(vec![1.0]);
        assert!(matches!(GameDefinition::extensive(tree.clone()), Err(GameError::MalformedTree(_))));
        assert_eq!(GameDefinition::with_players(1, tree).unwrap().num_players(), 1);
    }

    #[test]
    fn too_many_players_rejected() {
        let tree = GameTree::decision(3, vec![('x', GameTree::payoff(vec![0.0; 3]))]);
        assert!(GameDefinition::with_players(2, tree).is_err());
    }

    /// Count down from a number; each player takes 1 or 2, whoever takes the last one wins
    struct Nim(u8);

    impl TurnBased for Nim {
        type State = (u8, PlayerIndex);  // sticks left, who moved last
        type Move = u8;
        fn num_players(&self) -> usize { 2 }
        fn initial_state(&self) -> Self::State { (self.0, 0) }
        fn is_over(&self, state: &Self::State) -> bool { state.0 == 0 }
        fn available_moves(&self, state: &Self::State) -> Vec<u8> { (1..=state.0.min(2)).collect() }
        fn play(&self, state: &Self::State, mv: &u8) -> Self::State {
            (state.0 - mv, if state.1 == 1 { 2 } else { 1 })
        }
        fn payoff(&self, state: &Self::State) -> Payoff {
            if state.1 == 1 { Payoff::zero_sum(1.0) } else { Payoff::zero_sum(-1.0) }
        }
    }

    #[test]
    fn take_turns_rotates_players() {
        let game = GameDefinition::take_turns(Nim(3)).unwrap();
        let root = game.tree();
        assert_eq!(root.player(), Some(1));
        assert_eq!(root.available_moves(), vec![1, 2]);
        let after_one = root.child(&1).unwrap();
        assert_eq!(after_one.player(), Some(2));
        assert_eq!(after_one.child(&1).unwrap().player(), Some(1));
        // 3 -> 1 -> 0: player 2 took the last stick
        assert_eq!(**root.child(&2).unwrap().child(&1).unwrap(), GameTree::payoff(vec![-1.0, 1.0]));
    }
}
