//! Level grid: tile classification, pickup consumption, and rebuild
//!
//! The grid has an immutable shape and mutable content. Cells change only
//! through `consume` (Coin -> Empty) or `rebuild` (restore the authored
//! layout). Out-of-bounds queries are defined, never an error: solid on the
//! left, right, and above, open below the bottom row so a body can fall out
//! of the world and trigger fall-death.

/// One cell of the level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Solid,
    Coin,
    Goal,
}

impl Tile {
    /// Does this tile block movement?
    #[inline]
    pub fn is_solid(self) -> bool {
        self == Tile::Solid
    }

    /// Can this tile be consumed by pickup?
    #[inline]
    pub fn is_coin(self) -> bool {
        self == Tile::Coin
    }
}

/// Fixed-size tile grid plus the authored layout it can be rebuilt from
#[derive(Debug, Clone)]
pub struct Level {
    width: u32,
    height: u32,
    cells: Vec<Tile>,
    authored: Vec<Tile>,
}

impl Level {
    /// Build a level from a row-major cell array. The array is retained as
    /// the authored layout for `rebuild`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), (width * height) as usize);
        Self {
            width,
            height,
            authored: cells.clone(),
            cells,
        }
    }

    /// Grid width in tiles
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in tiles
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Classify a cell by tile index. Indices left of, right of, or above
    /// the grid classify as `Solid` (the world is walled in); indices below
    /// the bottom row classify as `Empty` (the fall-death region).
    pub fn classify(&self, col: i32, row: i32) -> Tile {
        if row >= self.height as i32 {
            return Tile::Empty;
        }
        if col < 0 || col >= self.width as i32 || row < 0 {
            return Tile::Solid;
        }
        self.cells[(row as u32 * self.width + col as u32) as usize]
    }

    /// Consume a coin cell, turning it empty. A no-op for any other tile or
    /// for out-of-bounds indices; a caller defect must never become a fault.
    pub fn consume(&mut self, col: i32, row: i32) {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return;
        }
        let idx = (row as u32 * self.width + col as u32) as usize;
        if self.cells[idx] == Tile::Coin {
            self.cells[idx] = Tile::Empty;
        }
    }

    /// Restore every cell to the authored layout (consumed coins included)
    pub fn rebuild(&mut self) {
        self.cells.copy_from_slice(&self.authored);
    }

    /// Count of coin cells currently in the grid
    pub fn coins_remaining(&self) -> usize {
        self.cells.iter().filter(|t| t.is_coin()).count()
    }
}

/// The authored first level: a 64x16 world with a ground strip, four
/// platforms, five coins, a three-column pit, and a goal flag near the end.
pub fn level_one() -> Level {
    const W: u32 = 64;
    const H: u32 = 16;
    let mut cells = vec![Tile::Empty; (W * H) as usize];
    let mut set = |col: u32, row: u32, t: Tile| {
        cells[(row * W + col) as usize] = t;
    };

    // ground strip
    for col in 0..W {
        for row in 12..H {
            set(col, row, Tile::Solid);
        }
    }

    // platforms
    for col in 6..12 {
        set(col, 9, Tile::Solid);
    }
    for col in 18..26 {
        set(col, 8, Tile::Solid);
    }
    for col in 30..36 {
        set(col, 10, Tile::Solid);
    }
    for col in 42..50 {
        set(col, 7, Tile::Solid);
    }

    // coins
    set(8, 8, Tile::Coin);
    set(20, 7, Tile::Coin);
    set(22, 6, Tile::Coin);
    set(33, 9, Tile::Coin);
    set(45, 6, Tile::Coin);

    // pit through the ground strip
    for col in 14..17 {
        for row in 12..H {
            set(col, row, Tile::Empty);
        }
    }

    // goal flag column
    for row in 6..12 {
        set(60, row, Tile::Goal);
    }

    Level::from_cells(W, H, cells)
}
