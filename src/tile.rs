//! Row-major tile partitioning and the atomic work queue workers pull from.

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

pub struct TileQueue {
    tiles: Vec<Tile>,
    cursor: AtomicUsize,
}

impl TileQueue {
    /// Partitions a `width x height` image into `tile_size`-square tiles in
    /// row-major order, clamping the last tile in each row/column to the
    /// image bounds.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Self {
        let mut tiles = Vec::new();
        let mut y0 = 0;
        while y0 < height {
            let y1 = (y0 + tile_size).min(height);
            let mut x0 = 0;
            while x0 < width {
                let x1 = (x0 + tile_size).min(width);
                tiles.push(Tile { x0, y0, x1, y1 });
                x0 = x1;
            }
            y0 = y1;
        }
        Self { tiles, cursor: AtomicUsize::new(0) }
    }

    /// Atomically claims the next unclaimed tile, or `None` once exhausted.
    /// Relaxed ordering suffices: workers never observe each other's film
    /// writes through this counter, only through the final thread join.
    pub fn next(&self) -> Option<Tile> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.tiles.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
