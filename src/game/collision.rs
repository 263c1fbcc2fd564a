//! # Collision Module
//!
//! Grid-based collision resolution for continuous-space movement.
//!
//! Validity is decided by a full AABB overlap test between the player's
//! square footprint and every wall cell in the 3×3 neighborhood of the
//! candidate position. The same test is applied uniformly everywhere; there
//! is deliberately no cheaper corner-sampling variant living alongside it.

use crate::config::SimConfig;
use crate::game::{DungeonGrid, GridPos, Vec2};
use serde::{Deserialize, Serialize};

/// Resolves candidate positions and proposed displacements against the grid.
///
/// # Examples
///
/// ```
/// use gloam::{CollisionResolver, DungeonGrid, GridPos, TileKind, Vec2};
///
/// let mut grid = DungeonGrid::new(5, 5);
/// grid.set_tile(GridPos::new(2, 2), TileKind::Floor);
///
/// let resolver = CollisionResolver::new(2.0, 0.35);
/// // Cell (2,2) centers at world (4,4).
/// assert!(resolver.is_valid_position(Vec2::new(4.0, 4.0), &grid));
/// assert!(!resolver.is_valid_position(Vec2::new(0.0, 0.0), &grid));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionResolver {
    tile_size: f32,
    player_radius: f32,
}

impl CollisionResolver {
    /// Creates a resolver for the given cell size and player footprint.
    pub fn new(tile_size: f32, player_radius: f32) -> Self {
        Self {
            tile_size,
            player_radius,
        }
    }

    /// Creates a resolver from the simulation config.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.tile_size, config.player_radius)
    }

    /// Whether the player's footprint at `pos` is clear of walls.
    ///
    /// Scans the 3×3 cell neighborhood around the position's grid cell and
    /// rejects on any AABB overlap with a wall cell. Out-of-bounds cells
    /// count as walls.
    pub fn is_valid_position(&self, pos: Vec2, grid: &DungeonGrid) -> bool {
        let center = GridPos::from_world(pos, self.tile_size);
        for dz in -1..=1 {
            for dx in -1..=1 {
                let cell = GridPos::new(center.x + dx, center.z + dz);
                if grid.is_wall(cell) && self.overlaps_cell(pos, cell) {
                    return false;
                }
            }
        }
        true
    }

    /// Resolves a proposed displacement with wall sliding.
    ///
    /// The full displacement is tried first; if blocked, each axis is tested
    /// independently from the current position and every axis that passes is
    /// applied. Diagonal movement into a wall therefore slides along it
    /// instead of stopping dead. Returns the committed position; the caller
    /// measures the actually-committed displacement from it.
    pub fn resolve_movement(&self, current: Vec2, displacement: Vec2, grid: &DungeonGrid) -> Vec2 {
        let full = current + displacement;
        if self.is_valid_position(full, grid) {
            return full;
        }

        let x_only = Vec2::new(current.x + displacement.x, current.z);
        let z_only = Vec2::new(current.x, current.z + displacement.z);

        Vec2::new(
            if self.is_valid_position(x_only, grid) {
                x_only.x
            } else {
                current.x
            },
            if self.is_valid_position(z_only, grid) {
                z_only.z
            } else {
                current.z
            },
        )
    }

    /// AABB overlap between the player footprint at `pos` and a cell's
    /// square footprint. Touching edges do not count as overlap.
    fn overlaps_cell(&self, pos: Vec2, cell: GridPos) -> bool {
        let half_tile = self.tile_size / 2.0;
        let center = cell.to_world(self.tile_size);

        pos.x - self.player_radius < center.x + half_tile
            && pos.x + self.player_radius > center.x - half_tile
            && pos.z - self.player_radius < center.z + half_tile
            && pos.z + self.player_radius > center.z - half_tile
    }
}
