use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::{Board, BoardError, Tile};

/// How long the outline over freshly changed tiles stays visible, in seconds.
const FLASH_SECONDS: f32 = 0.35;

/// GameState orchestrates one play session.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub board: Board,
    rng: StdRng,
    /// Tiles spilled so far this session.
    pub clicks: u64,
    /// Tiles updated by the most recent click, kept for the flash overlay.
    pub last_changes: Vec<Tile>,
    /// Remaining flash time for `last_changes`, in seconds.
    pub flash_timer: f32,
}

impl GameState {
    /// Create a session with a freshly randomized board.
    /// A seed makes the board (and every later board) reproducible.
    pub fn new(size: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let board = Board::random(size, &mut rng);
        Self {
            board,
            rng,
            clicks: 0,
            last_changes: Vec::new(),
            flash_timer: 0.0,
        }
    }

    fn reset_to(&mut self, size: usize) {
        self.board = Board::random(size, &mut self.rng);
        self.clicks = 0;
        self.last_changes.clear();
        self.flash_timer = 0.0;
        info!("new game: {size}x{size} board");
    }

    /// Start over on a fresh random board of the current size.
    pub fn new_game(mut self) -> Self {
        self.reset_to(self.board.size());
        self
    }

    /// Start over on a fresh board with the given size. Selecting the size
    /// already in play keeps the current board.
    pub fn with_size(mut self, size: usize) -> Self {
        if size != self.board.size() {
            self.reset_to(size);
        }
        self
    }

    /// Route a click to the board. Returns how many tiles changed.
    ///
    /// An out-of-bounds coordinate is a caller bug; the error carries it
    /// back for the caller to surface.
    pub fn click_at(&mut self, x: usize, y: usize) -> Result<usize, BoardError> {
        let changes = self.board.click(x, y)?;
        if changes.is_empty() {
            debug!("click on cleared tile ({x}, {y}) ignored");
            return Ok(0);
        }

        self.clicks += 1;
        debug!("spill at ({x}, {y}): {} tiles changed", changes.len());

        let count = changes.len();
        self.last_changes = changes;
        self.flash_timer = FLASH_SECONDS;
        Ok(count)
    }

    /// Advance per-frame state: fade out the change flash.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if self.flash_timer > 0.0 {
            self.flash_timer = (self.flash_timer - delta_time).max(0.0);
            if self.flash_timer == 0.0 {
                self.last_changes.clear();
            }
        }
        self
    }

    /// Flash intensity in [0, 1] for the changed-tile overlay.
    pub fn flash_strength(&self) -> f32 {
        self.flash_timer / FLASH_SECONDS
    }
}
