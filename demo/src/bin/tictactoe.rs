//! Pick tic-tac-toe moves with Minimax or Alpha-Beta and compare how much
//! of the game tree each one visits.

use clap::Parser;
use gamesearch_demo::init_logging;
use gamesearch_tree::{
    GameState, SearchStats, Square, Strategy, TreeNode, alpha_beta_decide_with_stats, best_move,
    minimax_decide_with_stats,
};

#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Choose tic-tac-toe moves by exhaustive game-tree search")]
#[command(version)]
struct Args {
    /// Board in row-major order, `.` for empty, e.g. "O.X/XOO/X.."
    #[arg(default_value = ".........")]
    board: GameState,

    /// O moves next (by default X moves when both have played equally often)
    #[arg(long)]
    o_next: bool,

    /// Play the game out to the end with this strategy
    #[arg(long)]
    play: Option<Strategy>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn count(state: &GameState, sq: Square) -> usize {
    state.board.iter().flatten().filter(|&&s| s == sq).count()
}

fn report(strategy: Strategy, choice: Option<GameState>, stats: SearchStats) {
    match (choice, stats.value) {
        (Some(next), Some(value)) => {
            println!(
                "{strategy}: value {value:+}, visited {} nodes, {} leaves",
                stats.visited, stats.leaves
            );
            println!("{next}");
        }
        _ => println!("{strategy}: no move from a full board"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut state = args.board;
    let mut x_next = !args.o_next && count(&state, Square::X) <= count(&state, Square::O);
    println!("{state}");

    if let Some(strategy) = args.play {
        while !state.is_full() && state.winner().is_none() {
            state = best_move(state, x_next, strategy)?;
            println!("{} plays ({strategy}):\n{state}", if x_next { 'X' } else { 'O' });
            x_next = !x_next;
        }
        match state.winner() {
            Some(w) => println!("{w} wins"),
            None => println!("draw"),
        }
        return Ok(());
    }

    // Evaluators maximize for X, so O's turn is searched on the swapped board.
    println!("{} to move; values are from the mover's side", if x_next { 'X' } else { 'O' });
    let view = if x_next { state } else { state.swapped() };
    let root = TreeNode::generate(view, true);
    println!("tree: {} nodes, {} leaves", root.size(), root.leaf_count());

    let (mm, mm_stats) = minimax_decide_with_stats(&root);
    let (ab, ab_stats) = alpha_beta_decide_with_stats(&root);
    let unswap = |c: &TreeNode| if x_next { c.state } else { c.state.swapped() };
    report(Strategy::Minimax, mm.map(unswap), mm_stats);
    report(Strategy::AlphaBeta, ab.map(unswap), ab_stats);
    Ok(())
}
