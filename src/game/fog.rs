//! # Fog-of-War Module
//!
//! Monotonic tile-discovery bookkeeping for the minimap. The discovered set
//! itself lives on the session; this module only computes what is newly
//! visible.

use crate::game::GridPos;
use std::collections::HashSet;

/// Returns the tiles around `center` that are not yet discovered.
///
/// Enumerates the square neighborhood of side `2·radius + 1` — corners
/// included, no circular distance test — and returns only the keys absent
/// from `discovered`, so the caller can merge them. The set is not mutated
/// here; bounds filtering (out-of-grid cells are not discoverable) is also
/// the caller's concern.
///
/// Callers should invoke this only when the player's rounded grid coordinate
/// actually changes tick-to-tick; calling it every tick just burns set
/// lookups.
///
/// # Examples
///
/// ```
/// use gloam::{discover_nearby, GridPos};
/// use std::collections::HashSet;
///
/// let fresh = discover_nearby(GridPos::new(5, 5), 2, &HashSet::new());
/// assert_eq!(fresh.len(), 25); // (2*2 + 1)^2
/// ```
pub fn discover_nearby(
    center: GridPos,
    radius: i32,
    discovered: &HashSet<GridPos>,
) -> Vec<GridPos> {
    let mut new_keys = Vec::new();
    for dz in -radius..=radius {
        for dx in -radius..=radius {
            let key = GridPos::new(center.x + dx, center.z + dz);
            if !discovered.contains(&key) {
                new_keys.push(key);
            }
        }
    }
    new_keys
}
