use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::collections::BTreeSet;

use crate::generator::random_board;
use crate::*;

/// Gameplay engine for one session: sole owner of the board, the selection
/// state and the score. All mutation goes through [`GridEngine::select`],
/// which runs a full swap-and-resolve cycle before returning.
#[derive(Clone, Debug)]
pub struct GridEngine {
    config: GameConfig,
    board: Board,
    selected: Option<Coord2>,
    score: u32,
    rng: SmallRng,
}

impl GridEngine {
    /// Fresh session with a fully randomized board. The same `config` and
    /// `seed` always produce the same session.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(config, &mut rng);
        Self {
            config,
            board,
            selected: None,
            score: 0,
            rng,
        }
    }

    pub fn from_entropy(config: GameConfig) -> Self {
        let mut rng = SmallRng::from_os_rng();
        let board = random_board(config, &mut rng);
        Self {
            config,
            board,
            selected: None,
            score: 0,
            rng,
        }
    }

    /// Session over a crafted board; refills still draw from `seed`.
    pub fn with_board(board: Board, reward: u32, seed: u64) -> Self {
        let config = GameConfig::new_unchecked(board.size(), board.kinds(), reward);
        Self {
            config,
            board,
            selected: None,
            score: 0,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn token_at(&self, coords: Coord2) -> Result<Token> {
        self.board.token_at(coords)
    }

    pub fn selected(&self) -> Option<Coord2> {
        self.selected
    }

    pub fn is_selected(&self, coords: Coord2) -> bool {
        self.selected == Some(coords)
    }

    /// Handles one click. First click records a selection; clicking the
    /// selected cell again clears it; a click on an orthogonal neighbor runs
    /// swap-and-validate and always returns to the unselected state; any
    /// other click moves the selection to the new cell.
    pub fn select(&mut self, coords: Coord2) -> Result<SelectOutcome> {
        use SelectOutcome::*;

        let coords = self.board.validate_coords(coords)?;

        Ok(match self.selected {
            None => {
                self.selected = Some(coords);
                Selected
            }
            Some(prev) if prev == coords => {
                self.selected = None;
                Deselected
            }
            Some(prev) if is_orthogonal_neighbor(prev, coords) => {
                self.selected = None;
                self.swap_and_resolve(prev, coords)
            }
            Some(_) => {
                self.selected = Some(coords);
                Reselected
            }
        })
    }

    /// Trial swap, whole-board detection, then either commit with a single
    /// resolution pass or undo. A reverted attempt leaves the board
    /// bit-for-bit as it was.
    fn swap_and_resolve(&mut self, a: Coord2, b: Coord2) -> SelectOutcome {
        self.board.swap(a, b);

        let triples = find_triples(&self.board);
        if triples.is_empty() {
            self.board.swap(a, b);
            log::debug!("swap {a:?} <-> {b:?} reverted");
            return SelectOutcome::Reverted;
        }

        // A cell shared by overlapping triples is rewritten once.
        let matched: BTreeSet<Coord2> = triples.iter().flat_map(|triple| triple.cells()).collect();
        for cell in matched {
            self.board[cell] = Token::random(self.config.kinds, &mut self.rng);
        }

        self.score += self.config.reward * triples.len() as u32;
        log::debug!(
            "swap {a:?} <-> {b:?} committed: {} triples, score {}",
            triples.len(),
            self.score
        );
        SelectOutcome::Swapped {
            triples: triples.len() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn engine(size: Coord, kinds: u8, tokens: &[u8]) -> GridEngine {
        let board = Board::from_kinds(size, kinds, tokens).unwrap();
        GridEngine::with_board(board, 30, 1)
    }

    // Contains no triple, and none of the swaps made below creates one.
    const QUIET: [u8; 16] = [
        0, 1, 0, 2, //
        1, 0, 0, 3, //
        4, 5, 1, 2, //
        3, 4, 5, 0,
    ];

    #[test]
    fn selection_records_and_toggles_off() {
        let mut game = engine(4, 6, &QUIET);

        assert_eq!(game.select((1, 2)).unwrap(), SelectOutcome::Selected);
        assert!(game.is_selected((1, 2)));

        assert_eq!(game.select((1, 2)).unwrap(), SelectOutcome::Deselected);
        assert_eq!(game.selected(), None);
        assert_eq!(game.board(), &Board::from_kinds(4, 6, &QUIET).unwrap());
    }

    #[test]
    fn non_adjacent_click_moves_the_selection() {
        let mut game = engine(4, 6, &QUIET);

        game.select((0, 0)).unwrap();
        assert_eq!(game.select((2, 2)).unwrap(), SelectOutcome::Reselected);
        assert!(game.is_selected((2, 2)));
        assert!(!game.is_selected((0, 0)));

        // diagonal clicks are not neighbors either
        assert_eq!(game.select((3, 3)).unwrap(), SelectOutcome::Reselected);
        assert!(game.is_selected((3, 3)));
        assert_eq!(game.board(), &Board::from_kinds(4, 6, &QUIET).unwrap());
    }

    #[test]
    fn failed_swap_reverts_the_board_exactly() {
        let mut game = engine(4, 6, &QUIET);
        let before = game.board().clone();

        game.select((3, 0)).unwrap();
        assert_eq!(game.select((3, 1)).unwrap(), SelectOutcome::Reverted);

        assert_eq!(game.board(), &before);
        assert_eq!(game.score(), 0);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn matching_swap_commits_and_scores_once() {
        let mut game = engine(
            4,
            6,
            &[
                0, 1, 0, 2, //
                1, 0, 0, 3, //
                4, 5, 1, 2, //
                3, 4, 5, 0,
            ],
        );

        game.select((0, 1)).unwrap();
        let outcome = game.select((1, 1)).unwrap();

        assert_eq!(outcome, SelectOutcome::Swapped { triples: 1 });
        assert_eq!(game.score(), 30);
        assert_eq!(game.selected(), None);

        // the swapped-out token landed on the partner cell
        assert_eq!(game.token_at((1, 1)).unwrap().kind(), 1);
        // cells outside the matched run kept their tokens
        assert_eq!(game.token_at((2, 0)).unwrap().kind(), 4);
        assert_eq!(game.token_at((0, 3)).unwrap().kind(), 2);
        // the matched run was refilled from the palette
        for col in 0..3 {
            assert!(game.token_at((0, col)).unwrap().kind() < 6);
        }
    }

    #[test]
    fn simultaneous_row_and_column_triples_score_twice() {
        let mut game = engine(
            4,
            6,
            &[
                0, 2, 1, 3, //
                4, 0, 1, 5, //
                1, 1, 2, 0, //
                3, 4, 1, 2,
            ],
        );

        game.select((2, 2)).unwrap();
        let outcome = game.select((3, 2)).unwrap();

        assert_eq!(outcome, SelectOutcome::Swapped { triples: 2 });
        assert_eq!(game.score(), 60);
    }

    #[test]
    fn run_of_four_counts_as_two_triples() {
        let mut game = engine(
            4,
            6,
            &[
                1, 1, 0, 1, //
                2, 3, 1, 4, //
                0, 2, 3, 5, //
                4, 5, 0, 2,
            ],
        );

        game.select((0, 2)).unwrap();
        let outcome = game.select((1, 2)).unwrap();

        assert_eq!(outcome, SelectOutcome::Swapped { triples: 2 });
        assert_eq!(game.score(), 60);
        assert_eq!(game.token_at((1, 2)).unwrap().kind(), 0);
    }

    #[test]
    fn out_of_bounds_click_is_rejected_without_state_change() {
        let mut game = engine(4, 6, &QUIET);

        game.select((0, 0)).unwrap();
        assert_eq!(game.select((4, 0)), Err(GameError::InvalidPosition));
        assert_eq!(game.select((0, 4)), Err(GameError::InvalidPosition));
        assert!(game.is_selected((0, 0)));
        assert_eq!(game.token_at((4, 4)), Err(GameError::InvalidPosition));
    }

    #[test]
    fn same_seed_replays_identically() {
        let config = GameConfig::new(3, 2, 10).unwrap();
        let mut a = GridEngine::new(config, 42);
        let mut b = GridEngine::new(config, 42);

        assert_eq!(a.board(), b.board());

        for clicks in [(0, 0), (0, 1), (2, 2), (2, 1), (1, 1), (1, 1)] {
            assert_eq!(a.select(clicks).unwrap(), b.select(clicks).unwrap());
        }
        assert_eq!(a.board(), b.board());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn tokens_stay_inside_the_palette_under_play() {
        let config = GameConfig::new(8, 6, 30).unwrap();
        let mut game = GridEngine::new(config, 9);
        let mut driver = SmallRng::seed_from_u64(1234);

        for _ in 0..500 {
            let coords = (driver.random_range(0..8), driver.random_range(0..8));
            game.select(coords).unwrap();
        }

        assert_eq!(game.board().total_cells(), 64);
        for row in 0..8 {
            for col in 0..8 {
                assert!(game.token_at((row, col)).unwrap().kind() < 6);
            }
        }
        assert_eq!(game.score() % 30, 0);
    }
}
