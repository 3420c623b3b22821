use super::Color;

/// One board cell: where it sits and the color it currently shows.
///
/// The board hands these out as snapshots; click results report the tiles
/// that changed as (coordinate, new color) pairs in this shape.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub x: usize,
    pub y: usize,
    pub color: Color,
}

impl Tile {
    pub const fn new(x: usize, y: usize, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Whether the tile has been clicked away (holds the cleared sentinel).
    pub const fn is_cleared(self) -> bool {
        self.color.is_cleared()
    }
}
