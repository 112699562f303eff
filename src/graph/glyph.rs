//! src/graph/glyph.rs
//!
//! Maps a column's filled-row count to braille glyphs, one per cell.
//!
//! Rows are filled from the baseline: the bottom of the graph when upright,
//! the top when inverted. Every filled row except the last gets the solid
//! glyph; the last one gets a partial glyph picked from a ten-level table
//! keyed by `rows % height`.

/// Glyph for a completely filled cell.
pub const FULL: char = '⣿';

/// Glyph for an empty cell.
pub const BLANK: char = ' ';

/// Highest remainder level in [`REMAINDER_GLYPHS`].
pub const MAX_LEVEL: usize = 9;

/// Partial glyphs per remainder level: `(upright, inverted)`.
///
/// Levels 5/6 and 7/8 intentionally share a glyph pair.
pub const REMAINDER_GLYPHS: [(char, char); MAX_LEVEL + 1] = [
    ('⣿', '⣿'),
    ('⢀', '⠈'),
    ('⢠', '⠘'),
    ('⢰', '⠸'),
    ('⢸', '⢸'),
    ('⣸', '⢹'),
    ('⣸', '⢹'),
    ('⣼', '⢻'),
    ('⣼', '⢻'),
    ('⣾', '⢿'),
];

/// Which edge of the graph columns grow from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Columns grow upward from the bottom row.
    #[default]
    Upright,
    /// Columns hang downward from the top row.
    Inverted,
}

impl Orientation {
    pub fn from_inverted(inverted: bool) -> Self {
        if inverted {
            Orientation::Inverted
        } else {
            Orientation::Upright
        }
    }

    pub fn is_inverted(self) -> bool {
        self == Orientation::Inverted
    }
}

/// Partial glyph for remainder `level`; levels past 9 saturate.
pub fn remainder_glyph(level: usize, orientation: Orientation) -> char {
    let (upright, inverted) = REMAINDER_GLYPHS[level.min(MAX_LEVEL)];
    match orientation {
        Orientation::Upright => upright,
        Orientation::Inverted => inverted,
    }
}

/// Filled cells of one column as `(grid_row, glyph)` pairs, grid rows
/// counted from the top.
///
/// `rows` past `height` is clamped to a full column. Cells not yielded stay
/// blank, so `rows == 0` yields nothing.
pub fn column(
    rows: usize,
    height: usize,
    orientation: Orientation,
) -> impl Iterator<Item = (usize, char)> {
    let rows = rows.min(height);
    (0..rows).map(move |i| {
        let grid_row = match orientation {
            Orientation::Upright => height - 1 - i,
            Orientation::Inverted => i,
        };
        let glyph = if i + 1 < rows {
            FULL
        } else {
            remainder_glyph(rows % height, orientation)
        };
        (grid_row, glyph)
    })
}
