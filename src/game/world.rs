//! # World Module
//!
//! The grid model: tile kinds and the dungeon grid itself. Pure data — the
//! generator is the only writer, and once generation completes the grid is
//! only ever replaced wholesale.

use crate::game::GridPos;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One cell of the dungeon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileKind {
    /// Solid rock; blocks movement
    Wall,
    /// Room interior
    Floor,
    /// Connective tissue carved between rooms
    Corridor,
}

impl TileKind {
    /// Whether the player can occupy this tile.
    pub fn is_walkable(self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Corridor)
    }
}

/// A fixed-size rectangular tile grid, indexed `[z][x]`.
///
/// Owned by one level session and replaced wholesale on regeneration. The
/// invariant that every row has identical length is upheld by construction:
/// the only constructor allocates a full `width × height` rectangle and
/// [`set_tile`](DungeonGrid::set_tile) never resizes.
///
/// # Examples
///
/// ```
/// use gloam::{DungeonGrid, GridPos, TileKind};
///
/// let grid = DungeonGrid::new(10, 8);
/// assert_eq!(grid.width(), 10);
/// assert_eq!(grid.tile(GridPos::new(3, 3)), Some(TileKind::Wall));
/// assert_eq!(grid.tile(GridPos::new(-1, 0)), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonGrid {
    width: usize,
    height: usize,
    tiles: Vec<Vec<TileKind>>,
    /// Grid cell the player starts on; set by the generator.
    pub player_spawn: GridPos,
}

impl DungeonGrid {
    /// Creates a grid of the given size with every cell set to `Wall`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![vec![TileKind::Wall; width]; height],
            player_spawn: GridPos::new(width as i32 / 2, height as i32 / 2),
        }
    }

    /// Grid width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether a coordinate lies inside the grid.
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.z >= 0 && (pos.x as usize) < self.width && (pos.z as usize) < self.height
    }

    /// The tile at `pos`, or `None` when out of bounds.
    pub fn tile(&self, pos: GridPos) -> Option<TileKind> {
        if self.in_bounds(pos) {
            Some(self.tiles[pos.z as usize][pos.x as usize])
        } else {
            None
        }
    }

    /// Whether `pos` blocks movement. Out-of-bounds counts as wall.
    pub fn is_wall(&self, pos: GridPos) -> bool {
        self.tile(pos).map_or(true, |t| t == TileKind::Wall)
    }

    /// Whether the player may stand on `pos`.
    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.tile(pos).is_some_and(TileKind::is_walkable)
    }

    /// Writes a tile. Out-of-bounds writes are silently ignored; the
    /// generator relies on this when carving near the border.
    pub fn set_tile(&mut self, pos: GridPos, kind: TileKind) {
        if self.in_bounds(pos) {
            self.tiles[pos.z as usize][pos.x as usize] = kind;
        }
    }

    /// Iterates every cell with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (GridPos, TileKind)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(z, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, &tile)| (GridPos::new(x as i32, z as i32), tile))
        })
    }

    /// Number of walkable (`Floor` or `Corridor`) cells.
    pub fn walkable_count(&self) -> usize {
        self.cells().filter(|(_, t)| t.is_walkable()).count()
    }

    /// Renders the grid as ASCII for the demo binary and debugging.
    ///
    /// When a discovered set is supplied, undiscovered cells render as `' '`
    /// the way a fog-of-war minimap would hide them. `#` wall, `.` floor,
    /// `,` corridor, `@` player spawn.
    pub fn render_ascii(&self, discovered: Option<&HashSet<GridPos>>) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for z in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let pos = GridPos::new(x, z);
                if let Some(seen) = discovered {
                    if !seen.contains(&pos) {
                        out.push(' ');
                        continue;
                    }
                }
                let ch = if pos == self.player_spawn {
                    '@'
                } else {
                    match self.tiles[z as usize][x as usize] {
                        TileKind::Wall => '#',
                        TileKind::Floor => '.',
                        TileKind::Corridor => ',',
                    }
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
