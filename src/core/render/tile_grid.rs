/// Edge length of a tile in pixels. A load-balancing tuning knob, not a
/// correctness parameter: tiles near the set boundary cost far more than
/// interior or exterior tiles, and smaller tiles spread that cost.
pub const TILE_EDGE: u32 = 64;

/// A clipped tile: a rectangle of pixels with exclusive right/bottom bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Tile {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// The fixed grid of tiles covering a buffer, recomputed fresh for every
/// render pass from the current output dimensions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles_x: u32,
    tiles_y: u32,
}

impl TileGrid {
    /// Derives the grid by ceiling division; the last row and column of
    /// tiles are clipped to the buffer bounds.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);

        Self {
            width,
            height,
            tiles_x: width.div_ceil(TILE_EDGE),
            tiles_y: height.div_ceil(TILE_EDGE),
        }
    }

    #[must_use]
    pub fn total_tiles(&self) -> u32 {
        self.tiles_x * self.tiles_y
    }

    /// The clipped tile at a linear index in `[0, total_tiles)`, row-major
    /// over tile columns and rows.
    #[must_use]
    pub fn tile(&self, index: u32) -> Tile {
        debug_assert!(index < self.total_tiles());

        let tile_x = index % self.tiles_x;
        let tile_y = index / self.tiles_x;

        let left = tile_x * TILE_EDGE;
        let top = tile_y * TILE_EDGE;

        Tile {
            left,
            top,
            right: (left + TILE_EDGE).min(self.width),
            bottom: (top + TILE_EDGE).min(self.height),
        }
    }

    /// The round-robin share of tiles for one worker: indices
    /// `worker, worker + workers, worker + 2·workers, …`. Interleaving
    /// balances load across workers when per-tile cost varies.
    pub fn assigned_tiles(&self, worker: u32, workers: u32) -> impl Iterator<Item = Tile> + '_ {
        debug_assert!(workers > 0 && worker < workers);

        (worker..self.total_tiles())
            .step_by(workers as usize)
            .map(|index| self.tile(index))
    }
}
