use rand::Rng;
use thiserror::Error;

use super::{Color, Tile};

/// Error raised when a coordinate outside the board reaches a board
/// operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },
}

/// Fixed-size square grid of colored tiles.
///
/// The board owns every tile color. After construction the only mutations
/// are the click operation (spill onto the neighborhood, then clear the
/// source) and explicit `set` calls used to stage test scenarios.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: usize,
    colors: Vec<Color>,
}

impl Board {
    /// Create a board with every tile already cleared (black).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            colors: vec![Color::BLACK; size * size],
        }
    }

    /// Create a board of independently random tile colors.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        let colors = (0..size * size).map(|_| Color::random(rng)).collect();
        Self { size, colors }
    }

    /// Tiles per side.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to the flat index. Callers check bounds first.
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), BoardError> {
        if x < self.size && y < self.size {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Current color of the tile at (x, y).
    pub fn color(&self, x: usize, y: usize) -> Result<Color, BoardError> {
        self.check_bounds(x, y)?;
        Ok(self.colors[self.index(x, y)])
    }

    /// Snapshot of the tile at (x, y).
    pub fn tile(&self, x: usize, y: usize) -> Result<Tile, BoardError> {
        Ok(Tile::new(x, y, self.color(x, y)?))
    }

    /// Overwrite the color of the tile at (x, y).
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<(), BoardError> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.colors[idx] = color;
        Ok(())
    }

    /// The 3x3 neighborhood around (x, y) clipped to the board, in row-major
    /// order. The source coordinate is part of its own neighborhood.
    pub fn neighborhood(&self, x: usize, y: usize) -> Result<Vec<(usize, usize)>, BoardError> {
        self.check_bounds(x, y)?;
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(self.size - 1);
        let y1 = (y + 1).min(self.size - 1);
        Ok((y0..=y1)
            .flat_map(|ny| (x0..=x1).map(move |nx| (nx, ny)))
            .collect())
    }

    /// Click the tile at (x, y): spill its color onto the neighborhood, then
    /// clear it to black.
    ///
    /// Returns every tile whose color actually changed, the cleared source
    /// tile first. Clicking an already-cleared tile changes nothing and
    /// returns an empty list.
    pub fn click(&mut self, x: usize, y: usize) -> Result<Vec<Tile>, BoardError> {
        let clicked = self.color(x, y)?;
        if clicked.is_cleared() {
            return Ok(Vec::new());
        }

        let mut changed = vec![Tile::new(x, y, Color::BLACK)];
        for (nx, ny) in self.neighborhood(x, y)? {
            let idx = self.index(nx, ny);
            let before = self.colors[idx];
            let after = before.merge(clicked);
            if after != before {
                self.colors[idx] = after;
                changed.push(Tile::new(nx, ny, after));
            }
        }
        // The source still held its own color during the merge pass, so the
        // self-merge was idempotent; only now does the tile go black.
        let source = self.index(x, y);
        self.colors[source] = Color::BLACK;
        Ok(changed)
    }

    /// Iterate over all tiles with their positions, row by row.
    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.size)
            .flat_map(move |y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| Tile::new(x, y, self.colors[self.index(x, y)]))
    }

    /// Number of cleared (black) tiles.
    pub fn cleared_tiles(&self) -> usize {
        self.colors.iter().filter(|c| c.is_cleared()).count()
    }

    /// Number of fully saturated (white) tiles.
    pub fn saturated_tiles(&self) -> usize {
        self.colors.iter().filter(|c| c.is_white()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_board_starts_all_black() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.cleared_tiles(), 16);
        assert!(board.iter_tiles().all(|t| t.is_cleared()));
    }

    #[test]
    fn test_random_boards_are_reproducible_per_seed() {
        let a = Board::random(16, &mut StdRng::seed_from_u64(99));
        let b = Board::random(16, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_out_of_bounds_coordinates_are_rejected() {
        let mut board = Board::new(10);
        let oob = |x, y| BoardError::OutOfBounds { x, y, size: 10 };

        assert_eq!(board.color(10, 0).unwrap_err(), oob(10, 0));
        assert_eq!(board.tile(0, 10).unwrap_err(), oob(0, 10));
        assert_eq!(board.set(10, 10, Color::RED).unwrap_err(), oob(10, 10));
        assert_eq!(board.neighborhood(0, 99).unwrap_err(), oob(0, 99));
        assert_eq!(board.click(99, 0).unwrap_err(), oob(99, 0));
    }

    #[test]
    fn test_neighborhood_includes_the_source_tile() {
        let board = Board::new(3);
        let hood = board.neighborhood(1, 1).unwrap();
        assert_eq!(hood.len(), 9);
        assert!(hood.contains(&(1, 1)));
    }

    #[test]
    fn test_neighborhood_clips_at_corners_and_edges() {
        let board = Board::new(3);
        assert_eq!(
            board.neighborhood(0, 0).unwrap(),
            vec![(0, 0), (1, 0), (0, 1), (1, 1)]
        );
        assert_eq!(
            board.neighborhood(2, 2).unwrap(),
            vec![(1, 1), (2, 1), (1, 2), (2, 2)]
        );
        // An edge tile keeps six neighbors.
        assert_eq!(board.neighborhood(0, 1).unwrap().len(), 6);

        let single = Board::new(1);
        assert_eq!(single.neighborhood(0, 0).unwrap(), vec![(0, 0)]);
    }

    #[test]
    fn test_center_click_spills_onto_all_eight_neighbors() {
        let mut board = Board::new(3);
        board.set(1, 1, Color::RED).unwrap();

        let changed = board.click(1, 1).unwrap();

        // The cleared source plus all eight neighbors.
        assert_eq!(changed.len(), 9);
        assert_eq!(changed[0], Tile::new(1, 1, Color::BLACK));
        assert_eq!(board.color(1, 1).unwrap(), Color::BLACK);
        for tile in board.iter_tiles().filter(|t| (t.x, t.y) != (1, 1)) {
            assert_eq!(tile.color, Color::RED, "tile ({}, {})", tile.x, tile.y);
        }
    }

    #[test]
    fn test_corner_click_touches_only_the_in_bounds_neighborhood() {
        let mut board = Board::new(16);
        board.set(0, 0, Color::MAGENTA).unwrap();

        let changed = board.click(0, 0).unwrap();

        // Source plus the three in-bounds neighbors.
        assert_eq!(changed.len(), 4);
        assert_eq!(board.color(0, 0).unwrap(), Color::BLACK);
        assert_eq!(board.color(1, 0).unwrap(), Color::MAGENTA);
        assert_eq!(board.color(0, 1).unwrap(), Color::MAGENTA);
        assert_eq!(board.color(1, 1).unwrap(), Color::MAGENTA);
        assert_eq!(board.color(2, 2).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_click_on_cleared_tile_is_a_no_op() {
        let mut board = Board::random(5, &mut StdRng::seed_from_u64(7));
        board.set(2, 2, Color::GREEN).unwrap();
        board.click(2, 2).unwrap();

        let before = board.clone();
        let changed = board.click(2, 2).unwrap();

        assert!(changed.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_changed_list_skips_tiles_the_merge_cannot_alter() {
        let mut board = Board::new(3);
        board.set(1, 1, Color::RED).unwrap();
        board.set(0, 0, Color::WHITE).unwrap();
        board.set(2, 2, Color::RED).unwrap();

        let changed = board.click(1, 1).unwrap();

        // White absorbs and red+red=red, so neither neighbor is reported.
        assert_eq!(changed.len(), 7);
        assert!(!changed.iter().any(|t| (t.x, t.y) == (0, 0)));
        assert!(!changed.iter().any(|t| (t.x, t.y) == (2, 2)));
        assert_eq!(board.color(0, 0).unwrap(), Color::WHITE);
        assert_eq!(board.color(2, 2).unwrap(), Color::RED);
    }

    #[test]
    fn test_spill_chain_builds_secondary_colors() {
        let mut board = Board::new(3);
        board.set(0, 0, Color::RED).unwrap();
        board.set(1, 0, Color::GREEN).unwrap();

        board.click(0, 0).unwrap();
        assert_eq!(board.color(1, 0).unwrap(), Color::YELLOW);
        assert_eq!(board.color(0, 1).unwrap(), Color::RED);
        assert_eq!(board.color(1, 1).unwrap(), Color::RED);

        let changed = board.click(1, 0).unwrap();
        assert_eq!(changed[0], Tile::new(1, 0, Color::BLACK));

        // The first tile had been cleared, so the yellow spill re-colors it;
        // the red tiles below pick up green and turn yellow as well.
        assert_eq!(board.color(0, 0).unwrap(), Color::YELLOW);
        assert_eq!(board.color(2, 0).unwrap(), Color::YELLOW);
        assert_eq!(board.color(0, 1).unwrap(), Color::YELLOW);
        assert_eq!(board.color(1, 1).unwrap(), Color::YELLOW);
        assert_eq!(board.color(2, 1).unwrap(), Color::YELLOW);
        assert_eq!(board.color(1, 0).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_clicking_white_clears_it_and_whitens_the_neighborhood() {
        let mut board = Board::new(3);
        board.set(1, 1, Color::WHITE).unwrap();

        let changed = board.click(1, 1).unwrap();

        assert_eq!(changed.len(), 9);
        assert_eq!(board.color(1, 1).unwrap(), Color::BLACK);
        assert_eq!(board.saturated_tiles(), 8);
    }

    #[test]
    fn test_tile_counters() {
        let mut board = Board::new(2);
        board.set(0, 0, Color::WHITE).unwrap();
        board.set(1, 0, Color::CYAN).unwrap();
        assert_eq!(board.cleared_tiles(), 2);
        assert_eq!(board.saturated_tiles(), 1);
    }
}
