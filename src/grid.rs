/// Tile grid and solidity classification.
///
/// The grid answers point and cell queries in world space.  Anything outside
/// the authored extent reads back as `TileKind::Air`, so collision code never
/// bounds-checks on its own.

/// Edge length of one square tile, in world pixels.
pub const TILE: f32 = 32.0;

/// A grid coordinate as `(row, col)`.
pub type Cell = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Air,
    Ground,
    Brick,
    /// Coin block.  Stays solid after it has been spent.
    Question,
    PipeTopLeft,
    PipeTopRight,
    PipeBottomLeft,
    PipeBottomRight,
    /// Goal pole.  Non-solid: the player walks into it to win.
    Flag,
}

impl TileKind {
    pub fn is_solid(self) -> bool {
        is_solid(self)
    }
}

/// Solidity is a pure function of the tile kind; spent state never matters.
pub fn is_solid(tile: TileKind) -> bool {
    match tile {
        TileKind::Ground | TileKind::Brick | TileKind::Question => true,
        TileKind::PipeTopLeft
        | TileKind::PipeTopRight
        | TileKind::PipeBottomLeft
        | TileKind::PipeBottomRight => true,
        TileKind::Air | TileKind::Flag => false,
    }
}

/// World coordinate → cell index along one axis (may be negative).
pub fn cell_index(world: f32) -> i32 {
    (world / TILE).floor() as i32
}

/// Fixed-size, row-major tile array.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// An all-air grid of the given shape.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            tiles: vec![TileKind::Air; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width_px(&self) -> f32 {
        self.cols as f32 * TILE
    }

    pub fn height_px(&self) -> f32 {
        self.rows as f32 * TILE
    }

    /// Author a single cell.  Writes outside the grid are dropped.
    pub fn set(&mut self, row: usize, col: usize, kind: TileKind) {
        if row < self.rows && col < self.cols {
            self.tiles[row * self.cols + col] = kind;
        }
    }

    /// Tile at a signed cell coordinate; air outside `[0,rows)×[0,cols)`.
    pub fn tile_at_cell(&self, row: i32, col: i32) -> TileKind {
        if row < 0 || col < 0 {
            return TileKind::Air;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return TileKind::Air;
        }
        self.tiles[row * self.cols + col]
    }

    /// Tile containing the world-space point `(x, y)`.
    pub fn tile_at(&self, x: f32, y: f32) -> TileKind {
        self.tile_at_cell(cell_index(y), cell_index(x))
    }
}
