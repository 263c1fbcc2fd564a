//! # Orb Module
//!
//! Collectible light orbs: spawn placement, proximity collection, and the
//! derived hover/pulse animation.

use crate::config::SimConfig;
use crate::game::{DungeonGrid, Vec2};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Angular speed of the vertical hover oscillation, radians per second.
const HOVER_SPEED: f32 = 2.0;

/// Amplitude of the vertical hover oscillation in world units.
const HOVER_AMPLITUDE: f32 = 0.15;

/// Angular speed of the glow pulse, radians per second.
const PULSE_SPEED: f32 = 3.0;

/// Per-orb phase shift so neighboring orbs do not bob in lockstep.
const PHASE_STRIDE: f32 = 0.7;

/// Orb size classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbSize {
    Small,
    Medium,
    Large,
}

impl OrbSize {
    /// All sizes, for uniform sampling.
    pub const ALL: [OrbSize; 3] = [OrbSize::Small, OrbSize::Medium, OrbSize::Large];

    /// Visual radius in world units.
    pub fn radius(self) -> f32 {
        match self {
            OrbSize::Small => 0.15,
            OrbSize::Medium => 0.25,
            OrbSize::Large => 0.4,
        }
    }

    /// Light budget restored on collection.
    pub fn light_value(self) -> f32 {
        match self {
            OrbSize::Small => 15.0,
            OrbSize::Medium => 30.0,
            OrbSize::Large => 50.0,
        }
    }
}

/// A static collectible that replenishes the light budget on proximity.
///
/// Orbs never move; only the `used` flag changes, false→true exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orb {
    /// Unique, ascending id; also the stable collection-scan order
    pub id: u32,
    /// World-space position, centered on the spawn cell
    pub position: Vec2,
    /// Size class, mapping to radius and light value
    pub size: OrbSize,
    /// Whether this orb has already been collected
    pub used: bool,
}

/// Instantaneous animation state, derived rather than persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbAnimation {
    /// Vertical offset from the spawn height
    pub hover_offset: f32,
    /// Glow pulse in `[0, 1]`
    pub pulse: f32,
}

impl Orb {
    /// Animation state at `elapsed` seconds since level start.
    ///
    /// Pure in `(elapsed, id)`: recomputing for the same inputs reproduces
    /// the same instantaneous value, so call timing affects smoothness only,
    /// never correctness.
    pub fn animation(&self, elapsed: f32) -> OrbAnimation {
        let phase = self.id as f32 * PHASE_STRIDE;
        OrbAnimation {
            hover_offset: (elapsed * HOVER_SPEED + phase).sin() * HOVER_AMPLITUDE,
            pulse: 0.5 + 0.5 * (elapsed * PULSE_SPEED + phase).cos(),
        }
    }
}

/// Result of a successful collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollectedOrb {
    pub id: u32,
    pub light_value: f32,
}

/// Spawns orbs across the grid.
///
/// Every walkable (`Floor` or `Corridor`) cell independently hosts an orb
/// with probability `config.orb_probability`, centered in the cell, with a
/// uniformly drawn size. Cell iteration order is row-major, so the same seed
/// always yields the same orb list.
pub fn spawn_orbs(grid: &DungeonGrid, config: &SimConfig, rng: &mut StdRng) -> Vec<Orb> {
    let mut orbs = Vec::new();
    for (pos, tile) in grid.cells() {
        if !tile.is_walkable() {
            continue;
        }
        if !rng.gen_bool(config.orb_probability) {
            continue;
        }
        let size = OrbSize::ALL[rng.gen_range(0..OrbSize::ALL.len())];
        orbs.push(Orb {
            id: orbs.len() as u32,
            position: pos.to_world(config.tile_size),
            size,
            used: false,
        });
    }
    orbs
}

/// Attempts to collect one orb near the player.
///
/// Live orbs are scanned in id order and the first within
/// `collection_distance` is collected — at most one per tick. Collection is
/// irreversible; a used orb never matches again.
pub fn try_collect(
    player_pos: Vec2,
    orbs: &mut [Orb],
    collection_distance: f32,
) -> Option<CollectedOrb> {
    for orb in orbs.iter_mut() {
        if orb.used {
            continue;
        }
        if player_pos.distance(orb.position) <= collection_distance {
            orb.used = true;
            return Some(CollectedOrb {
                id: orb.id,
                light_value: orb.size.light_value(),
            });
        }
    }
    None
}
