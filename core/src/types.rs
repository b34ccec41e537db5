/// Single coordinate axis used for board dimension and positions.
pub type Coord = u8;

/// Count type used for cell totals.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Orthogonal adjacency: same row with columns off by one, or same column
/// with rows off by one. Diagonals are not neighbors.
pub const fn is_orthogonal_neighbor(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
}
