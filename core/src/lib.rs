use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use detect::*;
pub use engine::*;
pub use error::*;
pub use token::*;
pub use types::*;

mod detect;
mod engine;
mod error;
mod generator;
mod token;
mod types;

/// Parameters of one game session: board side length, palette size and the
/// score reward paid per detected triple.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub kinds: u8,
    pub reward: u32,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord, kinds: u8, reward: u32) -> Self {
        Self {
            size,
            kinds,
            reward,
        }
    }

    pub fn new(size: Coord, kinds: u8, reward: u32) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidGridSize);
        }
        if kinds == 0 {
            return Err(GameError::EmptyPalette);
        }
        Ok(Self::new_unchecked(size, kinds, reward))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

/// Square grid of tokens. The board knows its palette size so crafted
/// boards can be validated against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Token>,
    kinds: u8,
}

impl Board {
    /// Builds a board from row-major token kinds, for crafted positions.
    pub fn from_kinds(size: Coord, kinds: u8, tokens: &[u8]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidGridSize);
        }
        if kinds == 0 {
            return Err(GameError::EmptyPalette);
        }
        if tokens.len() != usize::from(size) * usize::from(size) {
            return Err(GameError::BoardShapeMismatch);
        }
        if tokens.iter().any(|&kind| kind >= kinds) {
            return Err(GameError::UnknownTokenKind);
        }

        let side = usize::from(size);
        let cells: Vec<Token> = tokens.iter().copied().map(Token::new).collect();
        let cells =
            Array2::from_shape_vec((side, side), cells).map_err(|_| GameError::BoardShapeMismatch)?;
        Ok(Self { cells, kinds })
    }

    pub(crate) fn from_cells(cells: Array2<Token>, kinds: u8) -> Self {
        Self { cells, kinds }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap_or(Coord::MAX)
    }

    pub fn kinds(&self) -> u8 {
        self.kinds
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size(), self.size())
    }

    pub fn token_at(&self, coords: Coord2) -> Result<Token> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub(crate) fn swap(&mut self, a: Coord2, b: Coord2) {
        self.cells.swap(a.to_nd_index(), b.to_nd_index());
    }
}

impl Index<Coord2> for Board {
    type Output = Token;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Outcome of a `select` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First cell of a pair recorded.
    Selected,
    /// Toggle-off of the already selected cell.
    Deselected,
    /// Non-adjacent second click became a fresh selection.
    Reselected,
    /// Adjacent swap validated and committed; carries the triple count.
    Swapped { triples: u8 },
    /// Adjacent swap produced no match and was undone.
    Reverted,
}

impl SelectOutcome {
    /// Whether this outcome changed any token on the board.
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            Selected => false,
            Deselected => false,
            Reselected => false,
            Swapped { .. } => true,
            Reverted => false,
        }
    }

    pub const fn swap_attempted(self) -> bool {
        matches!(self, Self::Swapped { .. } | Self::Reverted)
    }
}
