use anyhow::Result;
use chessrules_core::{legal_moves, load_position, perft, STARTING_FEN};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("chessrules starting");

    let mut position = load_position(STARTING_FEN)?;
    let moves = legal_moves(&mut position);
    info!(count = moves.len(), "legal moves from starting position");

    let nodes = perft(&mut position, 3);
    info!(depth = 3, nodes, "perft from starting position");

    Ok(())
}
