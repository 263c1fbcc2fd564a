//! # Game Module
//!
//! Core simulation state, world representation, and the per-tick systems.
//!
//! This module contains the fundamental building blocks of the gloam core:
//! - Grid model and tile kinds
//! - Collision resolution for continuous-space movement
//! - The light-budget state machine
//! - Orb placement, collection, and visibility
//! - Fog-of-war discovery bookkeeping
//! - The `Session` simulation loop tying it all together

pub mod collision;
pub mod fog;
pub mod light;
pub mod orbs;
pub mod state;
pub mod world;

pub use collision::*;
pub use fog::*;
pub use light::*;
pub use orbs::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// A continuous 2D position in world space.
///
/// The vertical (y) axis plays no part in collision or collection, so the
/// core works in the horizontal plane only: `x` runs across the grid, `z`
/// down it.
///
/// # Examples
///
/// ```
/// use gloam::Vec2;
///
/// let a = Vec2::new(0.0, 0.0);
/// let b = Vec2::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub z: f32,
}

impl Vec2 {
    /// Creates a new vector with the given components.
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Returns the zero vector.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean length of the vector.
    pub fn length(self) -> f32 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Component-wise scaling.
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.z * factor)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.z + other.z)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.z - other.z)
    }
}

/// A discrete grid coordinate.
///
/// Doubles as the fog-of-war discovery key: being `Eq + Hash`, a `GridPos`
/// is the composite `"x,z"` key without the string allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub z: i32,
}

impl GridPos {
    /// Creates a new grid coordinate.
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Rounds a continuous world position to its containing grid cell.
    ///
    /// Cell centers sit at integer multiples of `tile_size`, so rounding is
    /// `floor(coord / tile_size + 0.5)` on each axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloam::{GridPos, Vec2};
    ///
    /// let pos = GridPos::from_world(Vec2::new(2.9, -0.9), 2.0);
    /// assert_eq!(pos, GridPos::new(1, 0));
    /// ```
    pub fn from_world(world: Vec2, tile_size: f32) -> Self {
        Self::new(
            (world.x / tile_size + 0.5).floor() as i32,
            (world.z / tile_size + 0.5).floor() as i32,
        )
    }

    /// World-space position of this cell's center.
    pub fn to_world(self, tile_size: f32) -> Vec2 {
        Vec2::new(self.x as f32 * tile_size, self.z as f32 * tile_size)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

/// Linear interpolation between `a` and `b` by `t` in `[0, 1]`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -1.0);
        assert_eq!(a + b, Vec2::new(4.0, 1.0));
        assert_eq!(b - a, Vec2::new(2.0, -3.0));
        assert_eq!(a.scale(2.0), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn test_vec2_length() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec2::zero().length(), 0.0);
    }

    #[test]
    fn test_grid_pos_rounding() {
        // Cell centers at multiples of tile_size; boundaries at half-tiles.
        assert_eq!(GridPos::from_world(Vec2::new(0.0, 0.0), 2.0), GridPos::new(0, 0));
        assert_eq!(GridPos::from_world(Vec2::new(0.99, 0.0), 2.0), GridPos::new(0, 0));
        assert_eq!(GridPos::from_world(Vec2::new(1.0, 0.0), 2.0), GridPos::new(1, 0));
        assert_eq!(GridPos::from_world(Vec2::new(-1.01, 0.0), 2.0), GridPos::new(-1, 0));
    }

    #[test]
    fn test_grid_world_round_trip() {
        let pos = GridPos::new(7, -3);
        assert_eq!(GridPos::from_world(pos.to_world(2.0), 2.0), pos);
    }

    #[test]
    fn test_grid_pos_display_key() {
        assert_eq!(GridPos::new(4, 11).to_string(), "4,11");
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
    }
}
