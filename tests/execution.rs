use game_arena::strategy::{pure, scripted};
use game_arena::*;

/// One player picks their own reward
fn pick_a_number() -> GameDefinition<char> {
    GameDefinition::extensive(GameTree::decision(1, vec![
        ('a', GameTree::payoff(vec![1.0])),
        ('b', GameTree::payoff(vec![2.0])),
        ('c', GameTree::payoff(vec![3.0])),
    ])).unwrap()
}

#[test]
fn history_offsets_after_three_games() {
    let game = pick_a_number();
    let mut players = vec![Player::new("solo", scripted(vec!['a', 'b', 'c']))];
    let exec = run_iterations(&game, &mut players, 3).unwrap();
    let payoffs = exec.payoffs();

    assert_eq!(payoffs.prev(), Ok(&Payoff::new(vec![3.0])));
    assert_eq!(payoffs.first(), Ok(&Payoff::new(vec![1.0])));
    assert_eq!(payoffs.gamen(2), Ok(&Payoff::new(vec![2.0])));
    assert_eq!(payoffs.prevn(2), Ok(vec![&Payoff::new(vec![3.0]), &Payoff::new(vec![2.0])]));
    assert_eq!(payoffs.firstn(2), Ok(vec![&Payoff::new(vec![1.0]), &Payoff::new(vec![2.0])]));
    assert!(payoffs.gamen(4).is_err());
    assert_eq!(exec.score(), Payoff::new(vec![6.0]));
    assert_eq!(exec.game_number(), 4);
}

#[test]
fn strategies_see_history_as_it_grows() {
    let game = pick_a_number();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(vec![]));
    let log = seen.clone();
    let watcher = move |exec: &Execution<'_, char>| -> Result<char> {
        let last = exec.payoffs().prev().ok().and_then(|p| p.get(0));
        log.borrow_mut().push((exec.game_number(), last));
        Ok('b')
    };
    let mut players = vec![Player::new("watcher", watcher)];
    run_iterations(&game, &mut players, 3).unwrap();
    assert_eq!(*seen.borrow(), vec![(1, None), (2, Some(2.0)), (3, Some(2.0))]);
}

#[test]
fn illegal_move_rolls_back_the_play() {
    let game = GameDefinition::extensive(GameTree::decision(1, vec![
        ('x', GameTree::decision(2, vec![('y', GameTree::payoff(vec![1.0, 1.0]))])),
    ])).unwrap();
    let mut exec = Execution::new(&game, vec!["p".into(), "q".into()]).unwrap();

    let mut good = vec![Player::new("p", pure('x')), Player::new("q", pure('y'))];
    exec.once(&mut good).unwrap();
    let mut bad = vec![Player::new("p", pure('x')), Player::new("q", pure('n'))];
    assert_eq!(exec.once(&mut bad), Err(GameError::IllegalMove { player: 2, mv: "'n'".into() }));

    assert_eq!(exec.num_games(), 1);
    assert!(exec.current_transcript().is_empty());
    assert_eq!(exec.status(), Status::AwaitingDecision(1));
    // and the run carries on fine afterwards
    exec.once(&mut good).unwrap();
    assert_eq!(exec.num_games(), 2);
}

#[test]
fn transcripts_record_every_event() {
    let game = pick_a_number();
    let mut players = vec![Player::new("solo", pure('c'))];
    let exec = run_iterations(&game, &mut players, 1).unwrap();
    assert_eq!(exec.transcripts().prev().unwrap(), &vec![
        Event::Decision { player: 1, mv: 'c' },
        Event::Payoff(Payoff::new(vec![3.0])),
    ]);
    assert_eq!(exec.summaries().prev().unwrap().moves, ByPlayer::new(vec![vec!['c']]));
}

#[test]
fn failed_run_still_hands_back_finished_plays() {
    let game = pick_a_number();
    let mut players = vec![Player::new("solo", scripted(vec!['a', 'a', 'z']))];
    assert!(run_iterations(&game, &mut players, 3).is_err());

    let mut players = vec![Player::new("solo", scripted(vec!['a', 'a', 'z']))];
    let (exec, outcome) = play_iterations(&game, &mut players, 3).unwrap();
    assert_eq!(outcome, Err(GameError::IllegalMove { player: 1, mv: "'z'".into() }));
    assert_eq!(exec.num_games(), 2);
    assert_eq!(exec.score(), Payoff::new(vec![2.0]));
}

#[test]
fn stepping_into_an_illegal_move_starts_over() {
    let game = GameDefinition::extensive(GameTree::decision(1, vec![
        ('x', GameTree::decision(2, vec![('y', GameTree::payoff(vec![1.0, 1.0]))])),
    ])).unwrap();
    let mut exec = Execution::new(&game, vec!["p".into(), "q".into()]).unwrap();
    let mut players = vec![Player::new("p", pure('x')), Player::new("q", pure('n'))];
    assert_eq!(exec.step(&mut players), Ok(None));
    assert!(exec.step(&mut players).is_err());
    assert!(exec.current_transcript().is_empty());
    assert_eq!(exec.status(), Status::AwaitingDecision(1));
    assert_eq!(exec.num_games(), 0);
}
