/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Bounds-clipped Moore neighborhood of `center`, without the cell itself.
pub fn neighbors(center: Coord2, bounds: Coord2) -> impl Iterator<Item = Coord2> {
    let (row, col) = center;
    let (rows, cols) = bounds;

    (-1i8..=1)
        .flat_map(|d_row| (-1i8..=1).map(move |d_col| (d_row, d_col)))
        .filter(|&delta| delta != (0, 0))
        .filter_map(move |(d_row, d_col)| {
            let next_row = row.checked_add_signed(d_row).filter(|&r| r < rows)?;
            let next_col = col.checked_add_signed(d_col).filter(|&c| c < cols)?;
            Some((next_row, next_col))
        })
}
