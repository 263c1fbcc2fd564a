//! # Generation Module
//!
//! Procedural dungeon generation: room placement with overlap rejection and
//! L-shaped corridor carving.
//!
//! All randomness flows through an injected, seedable RNG so the same seed
//! always reproduces the same dungeon.

pub mod dungeon;

pub use dungeon::*;

use crate::config::SimConfig;
use crate::game::GridPos;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for dungeon generation.
///
/// # Examples
///
/// ```
/// use gloam::GenerationConfig;
///
/// let config = GenerationConfig::new(42);
/// assert!(config.min_room_size <= config.max_room_size);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Grid width in tiles
    pub width: usize,
    /// Grid height in tiles
    pub height: usize,
    /// Number of room placement attempts (rejected candidates are not retried)
    pub max_rooms: u32,
    /// Minimum room side length
    pub min_room_size: usize,
    /// Maximum room side length
    pub max_room_size: usize,
}

impl GenerationConfig {
    /// Creates a generation configuration with default dimensions.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: crate::config::DEFAULT_DUNGEON_WIDTH,
            height: crate::config::DEFAULT_DUNGEON_HEIGHT,
            max_rooms: crate::config::DEFAULT_MAX_ROOMS,
            min_room_size: crate::config::DEFAULT_MIN_ROOM_SIZE,
            max_room_size: crate::config::DEFAULT_MAX_ROOM_SIZE,
        }
    }

    /// Creates a configuration for testing with a small, simple grid.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 20,
            height: 20,
            max_rooms: 5,
            min_room_size: 3,
            max_room_size: 5,
        }
    }

    /// Derives a generation configuration from the simulation config.
    pub fn from_sim(sim: &SimConfig, seed: u64) -> Self {
        Self {
            seed,
            width: sim.dungeon_width,
            height: sim.dungeon_height,
            max_rooms: sim.max_rooms,
            min_room_size: sim.min_room_size,
            max_room_size: sim.max_room_size,
        }
    }

    /// Creates the seeded RNG this configuration describes.
    pub fn create_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// An axis-aligned rectangular room in grid coordinates.
///
/// Rooms exist only transiently during generation; the grid does not retain
/// them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Left edge (inclusive)
    pub x: i32,
    /// Top edge (inclusive)
    pub z: i32,
    /// Width in tiles
    pub width: usize,
    /// Height in tiles
    pub height: usize,
}

impl Room {
    /// Creates a new room.
    pub fn new(x: i32, z: i32, width: usize, height: usize) -> Self {
        Self { x, z, width, height }
    }

    /// Center cell of the room (integer division rounds toward the top-left).
    pub fn center(&self) -> GridPos {
        GridPos::new(
            self.x + self.width as i32 / 2,
            self.z + self.height as i32 / 2,
        )
    }

    /// Inclusive-edge overlap test.
    ///
    /// Deliberately conservative: rooms that merely touch edges also count
    /// as overlapping, which keeps at least one wall cell between any two
    /// accepted rooms.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloam::Room;
    ///
    /// let a = Room::new(1, 1, 4, 4);
    /// let touching = Room::new(5, 1, 3, 3);
    /// let apart = Room::new(6, 1, 3, 3);
    /// assert!(a.overlaps(&touching));
    /// assert!(!a.overlaps(&apart));
    /// ```
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x <= other.x + other.width as i32
            && other.x <= self.x + self.width as i32
            && self.z <= other.z + other.height as i32
            && other.z <= self.z + self.height as i32
    }

    /// Iterates every cell of the room rectangle.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> + '_ {
        let (x0, z0) = (self.x, self.z);
        let (w, h) = (self.width as i32, self.height as i32);
        (z0..z0 + h).flat_map(move |z| (x0..x0 + w).map(move |x| GridPos::new(x, z)))
    }
}
