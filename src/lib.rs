//! # Gloam
//!
//! The deterministic simulation core of a first-person dungeon exploration
//! game where light is a depletable resource.
//!
//! ## Architecture Overview
//!
//! Gloam is rendering-agnostic: it owns the simulation, collaborators own the
//! screen. The core is built from a handful of components:
//!
//! - **Grid Model**: the tile grid and its tile kinds; pure data
//! - **Dungeon Generator**: room-and-corridor procedural generation
//! - **Collision Resolver**: AABB checks plus wall-sliding movement resolution
//! - **Light State Machine**: the depletable light budget and its response curve
//! - **Orb Registry**: collectible placement, proximity collection, visibility
//! - **Fog-of-War Tracker**: monotonic tile-discovery bookkeeping
//! - **Simulation Loop**: the `Session`, the single mutation gateway that
//!   composes everything once per tick
//!
//! Data flows one direction per tick: input → movement proposal → collision
//! resolution → committed position → light decay → orb collection → terminal
//! check → fog discovery. Everything outside [`Session::tick`] is a pure
//! function over explicit arguments, so the whole core is reproducible from a
//! seed and a tick script.
//!
//! ## Collaborator Boundary
//!
//! A rendering collaborator drives [`Session::tick`] once per frame with the
//! elapsed time and the current pressed-key set, then reads the returned
//! events and [`Session::snapshot`]. Snapshots are read-only; there is no
//! subscription model.
//!
//! [`Session::tick`]: game::Session::tick
//! [`Session::snapshot`]: game::Session::snapshot

pub mod game;
pub mod generation;
pub mod input;

pub use game::{
    discover_nearby, CollisionResolver, DungeonGrid, GameEvent, GridPos, LightOutput, LightState,
    Orb, OrbSize, OrbView, Phase, Session, SessionStats, Snapshot, TileKind, Vec2,
};

pub use generation::{DungeonGenerator, GenerationConfig, Room};

pub use input::{InputState, Key};

/// Core error type for the gloam engine.
///
/// The simulation path itself is total — ticks never fail. This type covers
/// the genuinely fallible surfaces: configuration validation and the demo
/// binary's I/O.
#[derive(thiserror::Error, Debug)]
pub enum GloamError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type used throughout the gloam codebase.
pub type GloamResult<T> = Result<T, GloamError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation configuration constants and the immutable config record.
pub mod config {
    use serde::{Deserialize, Serialize};

    /// Default dungeon width in tiles
    pub const DEFAULT_DUNGEON_WIDTH: usize = 32;

    /// Default dungeon height in tiles
    pub const DEFAULT_DUNGEON_HEIGHT: usize = 32;

    /// Default maximum number of room placement attempts
    pub const DEFAULT_MAX_ROOMS: u32 = 10;

    /// Default minimum room side length in tiles
    pub const DEFAULT_MIN_ROOM_SIZE: usize = 3;

    /// Default maximum room side length in tiles
    pub const DEFAULT_MAX_ROOM_SIZE: usize = 8;

    /// World-space side length of one grid cell
    pub const TILE_SIZE: f32 = 2.0;

    /// Half-width of the player's square collision footprint
    pub const PLAYER_RADIUS: f32 = 0.35;

    /// Player movement speed in world units per second
    pub const MOVE_SPEED: f32 = 4.0;

    /// Player rotation speed in radians per second
    pub const ROTATION_SPEED: f32 = 2.5;

    /// Upper bound of the light budget
    pub const MAX_LIGHT_DURATION: f32 = 100.0;

    /// Light budget lost per world unit of committed movement
    pub const DECAY_RATE: f32 = 0.5;

    /// Light intensity when the budget is empty
    pub const MIN_INTENSITY: f32 = 0.1;

    /// Light intensity when the budget is full
    pub const MAX_INTENSITY: f32 = 2.5;

    /// Light reach when the budget is empty
    pub const MIN_DISTANCE: f32 = 2.0;

    /// Light reach when the budget is full
    pub const MAX_DISTANCE: f32 = 14.0;

    /// Independent per-cell probability of hosting an orb
    pub const ORB_PROBABILITY: f64 = 0.06;

    /// World-space height at which orbs hover
    pub const ORB_SPAWN_HEIGHT: f32 = 0.9;

    /// Maximum player-to-orb distance for collection
    pub const COLLECTION_DISTANCE: f32 = 1.0;

    /// Chebyshev radius of the square fog-of-war discovery neighborhood
    pub const DISCOVERY_RADIUS: i32 = 2;

    /// Seconds spent in `GameOver` before the automatic return to `Intro`
    pub const GAME_OVER_RESET_DELAY: f32 = 3.0;

    /// Immutable record of every tunable the simulation reads.
    ///
    /// Built once at startup and threaded through the [`Session`] by value;
    /// nothing here is runtime-reconfigurable.
    ///
    /// [`Session`]: crate::game::Session
    ///
    /// # Examples
    ///
    /// ```
    /// use gloam::config::SimConfig;
    ///
    /// let config = SimConfig::default();
    /// assert!(config.max_light_duration > 0.0);
    /// assert!(config.min_intensity < config.max_intensity);
    /// ```
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct SimConfig {
        /// Dungeon width in tiles
        pub dungeon_width: usize,
        /// Dungeon height in tiles
        pub dungeon_height: usize,
        /// Maximum room placement attempts per generation
        pub max_rooms: u32,
        /// Minimum room side length
        pub min_room_size: usize,
        /// Maximum room side length
        pub max_room_size: usize,
        /// World-space side length of one grid cell
        pub tile_size: f32,
        /// Half-width of the player's collision footprint
        pub player_radius: f32,
        /// Movement speed in world units per second
        pub move_speed: f32,
        /// Rotation speed in radians per second
        pub rotation_speed: f32,
        /// Upper bound of the light budget
        pub max_light_duration: f32,
        /// Budget lost per world unit moved
        pub decay_rate: f32,
        /// Intensity at empty budget
        pub min_intensity: f32,
        /// Intensity at full budget
        pub max_intensity: f32,
        /// Light reach at empty budget
        pub min_distance: f32,
        /// Light reach at full budget
        pub max_distance: f32,
        /// Per-cell orb spawn probability
        pub orb_probability: f64,
        /// Hover height for spawned orbs
        pub orb_spawn_height: f32,
        /// Collection proximity threshold
        pub collection_distance: f32,
        /// Fog-of-war discovery radius
        pub discovery_radius: i32,
        /// Delay before `GameOver` auto-returns to `Intro`
        pub game_over_reset_delay: f32,
    }

    impl SimConfig {
        /// Validates cross-field constraints.
        pub fn validate(&self) -> crate::GloamResult<()> {
            if self.dungeon_width < 3 || self.dungeon_height < 3 {
                return Err(crate::GloamError::InvalidConfig(
                    "dungeon must be at least 3x3".to_string(),
                ));
            }
            if self.min_room_size > self.max_room_size {
                return Err(crate::GloamError::InvalidConfig(
                    "min_room_size exceeds max_room_size".to_string(),
                ));
            }
            if self.max_light_duration <= 0.0 {
                return Err(crate::GloamError::InvalidConfig(
                    "max_light_duration must be positive".to_string(),
                ));
            }
            if !(0.0..=1.0).contains(&self.orb_probability) {
                return Err(crate::GloamError::InvalidConfig(
                    "orb_probability must be in [0, 1]".to_string(),
                ));
            }
            Ok(())
        }
    }

    impl Default for SimConfig {
        fn default() -> Self {
            Self {
                dungeon_width: DEFAULT_DUNGEON_WIDTH,
                dungeon_height: DEFAULT_DUNGEON_HEIGHT,
                max_rooms: DEFAULT_MAX_ROOMS,
                min_room_size: DEFAULT_MIN_ROOM_SIZE,
                max_room_size: DEFAULT_MAX_ROOM_SIZE,
                tile_size: TILE_SIZE,
                player_radius: PLAYER_RADIUS,
                move_speed: MOVE_SPEED,
                rotation_speed: ROTATION_SPEED,
                max_light_duration: MAX_LIGHT_DURATION,
                decay_rate: DECAY_RATE,
                min_intensity: MIN_INTENSITY,
                max_intensity: MAX_INTENSITY,
                min_distance: MIN_DISTANCE,
                max_distance: MAX_DISTANCE,
                orb_probability: ORB_PROBABILITY,
                orb_spawn_height: ORB_SPAWN_HEIGHT,
                collection_distance: COLLECTION_DISTANCE,
                discovery_radius: DISCOVERY_RADIUS,
                game_over_reset_delay: GAME_OVER_RESET_DELAY,
            }
        }
    }

}
