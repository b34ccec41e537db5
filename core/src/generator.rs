use ndarray::Array2;
use rand::Rng;

use crate::*;

/// Fills a fresh board with uniform palette draws. The engine owns the RNG,
/// so the initial fill and later refills come from one seeded stream.
pub(crate) fn random_board<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Board {
    let side = usize::from(config.size);
    let cells = Array2::from_shape_simple_fn((side, side), || Token::random(config.kinds, rng));
    log::debug!(
        "generated {}x{} board with {} kinds",
        config.size,
        config.size,
        config.kinds
    );
    Board::from_cells(cells, config.kinds)
}
