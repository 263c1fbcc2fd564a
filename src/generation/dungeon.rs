//! # Dungeon Generation
//!
//! Room-and-corridor layout generation.
//!
//! The algorithm is deliberately simple and single-pass: sample up to
//! `max_rooms` rectangles, skip (never retry) any that would overlap or
//! touch an accepted room, carve accepted rooms to floor, and chain each new
//! room to the previously accepted one with an L-shaped corridor. Rooms
//! rejected for overlap are simply dropped, which can leave isolated
//! sub-graphs — accepted generator behavior, not a bug.

use crate::game::{DungeonGrid, GridPos, TileKind};
use crate::generation::{GenerationConfig, Room};
use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Primary dungeon generator using the room-and-corridor algorithm.
///
/// # Examples
///
/// ```
/// use gloam::{DungeonGenerator, GenerationConfig};
///
/// let config = GenerationConfig::for_testing(12345);
/// let mut rng = config.create_rng();
/// let grid = DungeonGenerator::new().generate(&config, &mut rng);
/// assert!(grid.walkable_count() >= 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator;

impl DungeonGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }

    /// Generates a dungeon grid from the given configuration and RNG.
    ///
    /// Guarantees at least one walkable cell: if every candidate room is
    /// rejected, the grid's center cell is forced to floor as a fallback
    /// rather than signalling an error.
    pub fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DungeonGrid {
        self.generate_with_rooms(config, rng).0
    }

    /// Like [`generate`](Self::generate), but also returns the accepted
    /// rooms in acceptance order. The grid does not retain room structure;
    /// this exists for spawn-room queries and property tests.
    pub fn generate_with_rooms(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> (DungeonGrid, Vec<Room>) {
        let mut grid = DungeonGrid::new(config.width, config.height);
        let mut rooms: Vec<Room> = Vec::new();

        for _ in 0..config.max_rooms {
            let Some(candidate) = self.sample_room(config, rng) else {
                continue;
            };

            // Inclusive-edge test: touching counts as overlap. Rejected
            // candidates are dropped, not retried.
            if rooms.iter().any(|r| candidate.overlaps(r)) {
                continue;
            }

            self.carve_room(&mut grid, &candidate);

            if let Some(prev) = rooms.last() {
                self.carve_l_corridor(&mut grid, prev.center(), candidate.center(), rng);
            }

            rooms.push(candidate);
        }

        debug!(
            "generated {}x{} dungeon: {} rooms accepted of {} attempts",
            config.width,
            config.height,
            rooms.len(),
            config.max_rooms
        );

        // Corridor rounding can clip a room center; the spawn cell must be
        // walkable no matter what, and a zero-room grid gets its center
        // forced to floor instead of erroring out.
        let spawn = match rooms.first() {
            Some(first) => first.center(),
            None => GridPos::new(config.width as i32 / 2, config.height as i32 / 2),
        };
        grid.set_tile(spawn, TileKind::Floor);
        grid.player_spawn = spawn;

        (grid, rooms)
    }

    /// Samples one candidate room strictly inside the 1-cell border.
    ///
    /// Returns `None` when the sampled dimensions cannot fit the grid at
    /// all; such a candidate is skipped like any other rejection.
    fn sample_room(&self, config: &GenerationConfig, rng: &mut StdRng) -> Option<Room> {
        let width = rng.gen_range(config.min_room_size..=config.max_room_size);
        let height = rng.gen_range(config.min_room_size..=config.max_room_size);

        // x in [1, grid_width - width - 1] keeps the rectangle off the border.
        if config.width < width + 2 || config.height < height + 2 {
            return None;
        }
        let x = rng.gen_range(1..=(config.width - width - 1)) as i32;
        let z = rng.gen_range(1..=(config.height - height - 1)) as i32;

        Some(Room::new(x, z, width, height))
    }

    /// Carves the full room rectangle to floor. Grid-border cells are never
    /// carved, regardless of what placement produced.
    fn carve_room(&self, grid: &mut DungeonGrid, room: &Room) {
        for pos in room.cells() {
            if !self.on_border(grid, pos) {
                grid.set_tile(pos, TileKind::Floor);
            }
        }
    }

    /// Carves an L-shaped corridor between two cell centers.
    ///
    /// Bend order is an unweighted coin flip. Only `Wall` cells are
    /// overwritten, so corridors never eat into room floors, and the 1-cell
    /// border stays intact.
    fn carve_l_corridor(
        &self,
        grid: &mut DungeonGrid,
        from: GridPos,
        to: GridPos,
        rng: &mut StdRng,
    ) {
        let horizontal_first = rng.gen_bool(0.5);
        if horizontal_first {
            self.carve_horizontal(grid, from.x, to.x, from.z);
            self.carve_vertical(grid, from.z, to.z, to.x);
        } else {
            self.carve_vertical(grid, from.z, to.z, from.x);
            self.carve_horizontal(grid, from.x, to.x, to.z);
        }
    }

    fn carve_horizontal(&self, grid: &mut DungeonGrid, x0: i32, x1: i32, z: i32) {
        for x in x0.min(x1)..=x0.max(x1) {
            self.carve_corridor_cell(grid, GridPos::new(x, z));
        }
    }

    fn carve_vertical(&self, grid: &mut DungeonGrid, z0: i32, z1: i32, x: i32) {
        for z in z0.min(z1)..=z0.max(z1) {
            self.carve_corridor_cell(grid, GridPos::new(x, z));
        }
    }

    fn carve_corridor_cell(&self, grid: &mut DungeonGrid, pos: GridPos) {
        if !self.on_border(grid, pos) && grid.tile(pos) == Some(TileKind::Wall) {
            grid.set_tile(pos, TileKind::Corridor);
        }
    }

    fn on_border(&self, grid: &DungeonGrid, pos: GridPos) -> bool {
        pos.x <= 0
            || pos.z <= 0
            || pos.x >= grid.width() as i32 - 1
            || pos.z >= grid.height() as i32 - 1
    }
}
