use log::info;
use game_arena::display;
use game_arena::games::matching_pennies::matching_pennies;
use game_arena::games::prisoners_dilemma::{prisoners_dilemma, Dilemma};
use game_arena::games::rock_paper_scissors::{rock_paper_scissors, Rps};
use game_arena::games::tictactoe::TicTacToe;
use game_arena::payoff::Distribution;
use game_arena::strategy::*;
use game_arena::utils::DEFAULT_ITERATIONS;
use game_arena::{run_iterations, Player, Result};

fn dilemma_tournament(iterations: usize) -> Result<()> {
    let game = prisoners_dilemma()?;
    let mut players = vec![
        Player::new("tit-for-tat", tit_for_tat(Dilemma::Cooperate)),
        Player::new("grim", grim_trigger(Dilemma::Cooperate, Dilemma::Defect)),
    ];
    let exec = run_iterations(&game, &mut players, iterations)?;
    print!("{}", display::score(&exec));

    let mut players = vec![
        Player::new("tit-for-tat", tit_for_tat(Dilemma::Cooperate)),
        Player::new("opportunist", initially(pure(Dilemma::Defect), random())),
    ];
    let exec = run_iterations(&game, &mut players, iterations)?;
    print!("{}", display::summaries(&exec));
    print!("{}", display::score(&exec));
    Ok(())
}

fn rps_match(iterations: usize) -> Result<()> {
    let game = rock_paper_scissors()?;
    let rock_heavy = Distribution::new(vec![(2, Rps::Rock), (1, Rps::Paper), (1, Rps::Scissors)])?;
    let mut players = vec![
        Player::new("rocky", mixed(rock_heavy)),
        Player::new("cycler", periodic(vec![Rps::Paper, Rps::Scissors, Rps::Rock])),
    ];
    let exec = run_iterations(&game, &mut players, iterations)?;
    print!("{}", display::score(&exec));
    Ok(())
}

fn pennies(iterations: usize) -> Result<()> {
    let game = matching_pennies()?;
    let mut players = vec![Player::new("matcher", random()), Player::new("mismatcher", random())];
    let exec = run_iterations(&game, &mut players, iterations)?;
    print!("{}", display::score(&exec));
    Ok(())
}

fn endgame() -> Result<()> {
    let game = TicTacToe::parse("X.O .O. X..")?.definition()?;
    info!("tic-tac-toe endgame: {:?}", game);
    let mut players = vec![Player::new("X", minimax_strategy()), Player::new("O", minimax_strategy())];
    let exec = run_iterations(&game, &mut players, 1)?;
    print!("{}", display::transcript(&exec));
    Ok(())
}

fn main() {
    env_logger::init();
    let iterations = std::env::args().nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERATIONS);
    info!("running each game {} times", iterations);

    let demos: [(&str, Box<dyn Fn() -> Result<()>>); 4] = [
        ("Prisoner's Dilemma", Box::new(move || dilemma_tournament(iterations))),
        ("Rock-Paper-Scissors", Box::new(move || rps_match(iterations))),
        ("Matching Pennies", Box::new(move || pennies(iterations))),
        ("Tic-Tac-Toe", Box::new(endgame)),
    ];
    for (name, demo) in demos.iter() {
        println!("== {} ==", name);
        if let Err(e) = demo() {
            eprintln!("{} failed: {}", name, e);
        }
    }
}
