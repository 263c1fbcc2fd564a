//! Property tests for the generator, light budget, and fog tracker.

use gloam::config::SimConfig;
use gloam::{discover_nearby, DungeonGenerator, GenerationConfig, GridPos, LightState};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_config() -> impl Strategy<Value = GenerationConfig> {
    (
        any::<u64>(),
        12usize..48,
        12usize..48,
        1u32..16,
        3usize..5,
        5usize..10,
    )
        .prop_map(|(seed, width, height, max_rooms, min_room, max_room)| {
            GenerationConfig {
                seed,
                width,
                height,
                max_rooms,
                min_room_size: min_room,
                max_room_size: max_room,
            }
        })
}

proptest! {
    #[test]
    fn prop_generated_grid_has_a_walkable_cell(config in arb_config()) {
        let mut rng = config.create_rng();
        let grid = DungeonGenerator::new().generate(&config, &mut rng);
        prop_assert!(grid.walkable_count() >= 1);
        prop_assert!(grid.is_walkable(grid.player_spawn));
    }

    #[test]
    fn prop_border_cells_are_never_walkable(config in arb_config()) {
        let mut rng = config.create_rng();
        let grid = DungeonGenerator::new().generate(&config, &mut rng);
        let (w, h) = (grid.width() as i32, grid.height() as i32);
        for x in 0..w {
            prop_assert!(grid.is_wall(GridPos::new(x, 0)));
            prop_assert!(grid.is_wall(GridPos::new(x, h - 1)));
        }
        for z in 0..h {
            prop_assert!(grid.is_wall(GridPos::new(0, z)));
            prop_assert!(grid.is_wall(GridPos::new(w - 1, z)));
        }
    }

    #[test]
    fn prop_accepted_rooms_are_disjoint_and_floored(config in arb_config()) {
        use gloam::TileKind;
        let mut rng = config.create_rng();
        let (grid, rooms) = DungeonGenerator::new().generate_with_rooms(&config, &mut rng);

        for (i, a) in rooms.iter().enumerate() {
            for b in rooms.iter().skip(i + 1) {
                prop_assert!(!a.overlaps(b));
            }
            for pos in a.cells() {
                prop_assert_eq!(grid.tile(pos), Some(TileKind::Floor));
            }
        }
    }

    #[test]
    fn prop_light_duration_stays_in_range(
        start in 0.0f32..100.0,
        ops in prop::collection::vec((any::<bool>(), 0.0f32..500.0), 1..100),
    ) {
        let config = SimConfig::default();
        let mut light = LightState::with_duration(&config, start);
        for (is_collect, magnitude) in ops {
            if is_collect {
                light.collect(magnitude);
            } else {
                light.decay(magnitude);
            }
            prop_assert!(light.duration() >= 0.0);
            prop_assert!(light.duration() <= config.max_light_duration);
        }
    }

    #[test]
    fn prop_light_output_is_monotone_in_duration(
        lo in 0.0f32..100.0,
        hi in 0.0f32..100.0,
    ) {
        let config = SimConfig::default();
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let dim = LightState::with_duration(&config, lo).output();
        let bright = LightState::with_duration(&config, hi).output();
        prop_assert!(dim.intensity <= bright.intensity);
        prop_assert!(dim.distance <= bright.distance);
    }

    #[test]
    fn prop_fog_discovery_of_empty_set_is_full_square(
        x in -1000i32..1000,
        z in -1000i32..1000,
        radius in 0i32..6,
    ) {
        let keys = discover_nearby(GridPos::new(x, z), radius, &HashSet::new());
        let side = (2 * radius + 1) as usize;
        prop_assert_eq!(keys.len(), side * side);

        let distinct: HashSet<_> = keys.iter().copied().collect();
        prop_assert_eq!(distinct.len(), side * side);
    }

    #[test]
    fn prop_fog_discovery_never_returns_known_keys(
        x in -50i32..50,
        z in -50i32..50,
        radius in 0i32..5,
        known in prop::collection::hash_set((-60i32..60, -60i32..60), 0..80),
    ) {
        let discovered: HashSet<GridPos> = known
            .into_iter()
            .map(|(kx, kz)| GridPos::new(kx, kz))
            .collect();
        let keys = discover_nearby(GridPos::new(x, z), radius, &discovered);
        prop_assert!(keys.iter().all(|key| !discovered.contains(key)));
    }
}
