use smallvec::SmallVec;

use crate::*;

/// Axis a run of equal tokens lies on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Three same-kind tokens contiguous in a row or column, identified by the
/// topmost/leftmost cell. Longer runs show up as several overlapping triples.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    pub start: Coord2,
    pub orientation: Orientation,
}

impl Triple {
    pub const fn cells(self) -> [Coord2; 3] {
        let (row, col) = self.start;
        match self.orientation {
            Orientation::Horizontal => [(row, col), (row, col + 1), (row, col + 2)],
            Orientation::Vertical => [(row, col), (row + 1, col), (row + 2, col)],
        }
    }
}

pub type TripleSet = SmallVec<[Triple; 8]>;

/// Sliding-window scan of the whole board, rows first, then columns.
pub fn find_triples(board: &Board) -> TripleSet {
    let mut triples = TripleSet::new();
    let size = board.size();
    if size < 3 {
        return triples;
    }

    for row in 0..size {
        for col in 0..size - 2 {
            let kind = board[(row, col)];
            if board[(row, col + 1)] == kind && board[(row, col + 2)] == kind {
                triples.push(Triple {
                    start: (row, col),
                    orientation: Orientation::Horizontal,
                });
            }
        }
    }

    for row in 0..size - 2 {
        for col in 0..size {
            let kind = board[(row, col)];
            if board[(row + 1, col)] == kind && board[(row + 2, col)] == kind {
                triples.push(Triple {
                    start: (row, col),
                    orientation: Orientation::Vertical,
                });
            }
        }
    }

    triples
}
