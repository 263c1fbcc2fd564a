//! # Session Module
//!
//! The simulation loop: one `Session` owns all mutable run state and is the
//! single mutation gateway. An external scheduler calls [`Session::tick`]
//! once per frame with the elapsed time and the current pressed-key set;
//! everything else in the crate is a pure function over explicit arguments.
//!
//! Per-tick data flow: input → movement proposal → collision resolution →
//! committed position → light decay → orb collection → terminal check → fog
//! discovery.

use crate::config::SimConfig;
use crate::game::{
    discover_nearby, try_collect, CollisionResolver, DungeonGrid, GridPos, LightOutput,
    LightState, Orb, OrbSize, Vec2,
};
use crate::generation::{DungeonGenerator, GenerationConfig};
use crate::input::{InputState, Key};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Coarse game-lifecycle state.
///
/// Exactly one phase is active at a time; movement and light only advance in
/// `Playing`. Inputs that make no sense for the current phase are silent
/// no-ops, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Title state; `Enter` starts a run
    Intro,
    /// A run is live
    Playing,
    /// The light died; auto-returns to `Intro` after a fixed delay
    GameOver,
}

/// Discrete events emitted by the tick function for the notification
/// collaborator. The core does not know how they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An orb was collected this tick
    OrbCollected { light_value: f32, new_total: f32 },
    /// The light budget hit zero; one-shot per run
    LightDepleted,
    /// The phase changed
    PhaseChanged { to: Phase },
}

/// Running statistics for the current run, surfaced on the snapshot for HUD
/// display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionStats {
    /// Orbs collected this run
    pub orbs_collected: u32,
    /// Total committed distance travelled, world units
    pub distance_travelled: f32,
    /// Tiles currently in the discovered set
    pub tiles_discovered: usize,
}

/// Read-only view of one orb for the rendering collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrbView {
    pub id: u32,
    pub position: Vec2,
    pub size: OrbSize,
    pub used: bool,
    /// Whether the player's light currently reveals this orb. False for
    /// used orbs and whenever the light sits at its intensity floor,
    /// independent of distance.
    pub visible: bool,
    /// Derived vertical hover offset at this instant
    pub hover_offset: f32,
    /// Derived glow pulse in `[0, 1]` at this instant
    pub pulse: f32,
}

/// Immutable per-tick snapshot for the rendering collaborator.
///
/// Collaborators read or diff this; there is no subscription model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub player_position: Vec2,
    pub rotation: f32,
    pub light: LightOutput,
    pub light_duration: f32,
    pub orbs: Vec<OrbView>,
    pub stats: SessionStats,
    pub elapsed: f32,
}

/// All mutable state belonging to one level run. Built completely before it
/// is swapped in, so a concurrently rendering frame never sees a partial
/// regeneration.
#[derive(Debug, Clone)]
struct LevelRun {
    grid: DungeonGrid,
    orbs: Vec<Orb>,
    discovered: HashSet<GridPos>,
    player_pos: Vec2,
    player_cell: GridPos,
    rotation: f32,
    light: LightState,
    elapsed: f32,
    stats: SessionStats,
}

/// The simulation loop and single mutation gateway.
///
/// # Examples
///
/// ```
/// use gloam::config::SimConfig;
/// use gloam::{InputState, Key, Phase, Session};
///
/// let mut session = Session::new(SimConfig::default(), 42);
/// assert_eq!(session.phase(), Phase::Intro);
///
/// let start = InputState::with_keys([Key::Enter]);
/// session.tick(0.016, &start);
/// assert_eq!(session.phase(), Phase::Playing);
/// ```
#[derive(Debug)]
pub struct Session {
    config: SimConfig,
    resolver: CollisionResolver,
    seed: u64,
    /// Runs started so far; salts the per-run seed
    runs: u64,
    phase: Phase,
    level: Option<LevelRun>,
    game_over_elapsed: f32,
}

impl Session {
    /// Creates a session in the `Intro` phase. No level exists until the
    /// first `Enter` press.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let resolver = CollisionResolver::from_config(&config);
        Self {
            config,
            resolver,
            seed,
            runs: 0,
            phase: Phase::Intro,
            level: None,
            game_over_elapsed: 0.0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The live grid, if a run exists.
    pub fn grid(&self) -> Option<&DungeonGrid> {
        self.level.as_ref().map(|run| &run.grid)
    }

    /// The monotonically growing discovered-tile set of the current run.
    pub fn discovered(&self) -> Option<&HashSet<GridPos>> {
        self.level.as_ref().map(|run| &run.discovered)
    }

    /// Advances the simulation by one tick.
    ///
    /// `delta` is the wall-clock time since the previous tick, supplied by
    /// the external scheduler — the core never measures time itself. Returns
    /// the discrete events produced this tick.
    pub fn tick(&mut self, delta: f32, input: &InputState) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.phase {
            Phase::Intro => {
                if input.is_pressed(Key::Enter) {
                    self.start_run();
                    self.set_phase(Phase::Playing, &mut events);
                }
            }
            Phase::Playing => {
                if input.is_pressed(Key::Escape) {
                    // Abandoning a run discards the level; the caller is
                    // expected to deregister its frame callback so no
                    // orphaned ticks reach a disposed run.
                    self.level = None;
                    self.set_phase(Phase::Intro, &mut events);
                } else {
                    self.advance(delta, input, &mut events);
                }
            }
            Phase::GameOver => {
                self.game_over_elapsed += delta;
                if self.game_over_elapsed >= self.config.game_over_reset_delay {
                    self.level = None;
                    self.set_phase(Phase::Intro, &mut events);
                }
            }
        }

        events
    }

    /// Immutable snapshot of the current run, or `None` while no level
    /// exists (the pre-first-run intro).
    pub fn snapshot(&self) -> Option<Snapshot> {
        let run = self.level.as_ref()?;
        let contributing = run.light.is_contributing();
        let orbs = run
            .orbs
            .iter()
            .map(|orb| {
                let anim = orb.animation(run.elapsed);
                OrbView {
                    id: orb.id,
                    position: orb.position,
                    size: orb.size,
                    used: orb.used,
                    visible: !orb.used && contributing,
                    hover_offset: anim.hover_offset,
                    pulse: anim.pulse,
                }
            })
            .collect();

        Some(Snapshot {
            phase: self.phase,
            player_position: run.player_pos,
            rotation: run.rotation,
            light: run.light.output(),
            light_duration: run.light.duration(),
            orbs,
            stats: run.stats,
            elapsed: run.elapsed,
        })
    }

    /// Builds a complete new level run and swaps it in atomically.
    fn start_run(&mut self) {
        let run_seed = self.seed.wrapping_add(self.runs);
        self.runs += 1;

        let gen_config = GenerationConfig::from_sim(&self.config, run_seed);
        let mut rng = gen_config.create_rng();
        let grid = DungeonGenerator::new().generate(&gen_config, &mut rng);
        let orbs = crate::game::spawn_orbs(&grid, &self.config, &mut rng);

        let player_cell = grid.player_spawn;
        let player_pos = player_cell.to_world(self.config.tile_size);

        let mut run = LevelRun {
            grid,
            orbs,
            discovered: HashSet::new(),
            player_pos,
            player_cell,
            rotation: 0.0,
            light: LightState::new(&self.config),
            elapsed: 0.0,
            stats: SessionStats::default(),
        };
        Self::discover_cells(&self.config, &mut run, player_cell);

        info!(
            "run {} started: seed {}, {} orbs, spawn {}",
            self.runs,
            run_seed,
            run.orbs.len(),
            player_cell
        );

        self.game_over_elapsed = 0.0;
        self.level = Some(run);
    }

    /// One `Playing` tick: movement, light, collection, terminal check, fog.
    fn advance(&mut self, delta: f32, input: &InputState, events: &mut Vec<GameEvent>) {
        let Some(run) = self.level.as_mut() else {
            return;
        };
        run.elapsed += delta;

        // Rotation wraps implicitly through sin/cos; the raw angle is
        // unbounded on purpose.
        if input.is_pressed(Key::ArrowLeft) {
            run.rotation += self.config.rotation_speed * delta;
        }
        if input.is_pressed(Key::ArrowRight) {
            run.rotation -= self.config.rotation_speed * delta;
        }

        let forward = Vec2::new(run.rotation.sin(), run.rotation.cos());
        let right = Vec2::new(forward.z, -forward.x);

        let mut direction = Vec2::zero();
        if input.is_pressed(Key::W) {
            direction = direction + forward;
        }
        if input.is_pressed(Key::S) {
            direction = direction - forward;
        }
        if input.is_pressed(Key::D) {
            direction = direction + right;
        }
        if input.is_pressed(Key::A) {
            direction = direction - right;
        }

        let proposed = if direction.length() > 0.0 {
            direction
                .scale(1.0 / direction.length())
                .scale(self.config.move_speed * delta)
        } else {
            Vec2::zero()
        };

        let committed = self
            .resolver
            .resolve_movement(run.player_pos, proposed, &run.grid);

        // Decay is driven by what actually moved, not what was proposed; a
        // blocked axis costs no light.
        let moved = committed.distance(run.player_pos);
        run.player_pos = committed;
        run.stats.distance_travelled += moved;
        run.light.decay(moved);

        if let Some(hit) = try_collect(
            run.player_pos,
            &mut run.orbs,
            self.config.collection_distance,
        ) {
            run.light.collect(hit.light_value);
            run.stats.orbs_collected += 1;
            events.push(GameEvent::OrbCollected {
                light_value: hit.light_value,
                new_total: run.light.duration(),
            });
        }

        if run.light.is_depleted() {
            events.push(GameEvent::LightDepleted);
            info!("light depleted after {:.1}s", run.elapsed);
            self.game_over_elapsed = 0.0;
            self.set_phase(Phase::GameOver, events);
            return;
        }

        // Fog discovery only runs when the rounded cell actually changed.
        let cell = GridPos::from_world(run.player_pos, self.config.tile_size);
        if cell != run.player_cell {
            run.player_cell = cell;
            Self::discover_cells(&self.config, run, cell);
        }
    }

    fn discover_cells(config: &SimConfig, run: &mut LevelRun, cell: GridPos) {
        for key in discover_nearby(cell, config.discovery_radius, &run.discovered) {
            // Out-of-bounds cells are not discoverable.
            if run.grid.in_bounds(key) {
                run.discovered.insert(key);
            }
        }
        run.stats.tiles_discovered = run.discovered.len();
    }

    fn set_phase(&mut self, to: Phase, events: &mut Vec<GameEvent>) {
        if self.phase != to {
            info!("phase {:?} -> {:?}", self.phase, to);
            self.phase = to;
            events.push(GameEvent::PhaseChanged { to });
        }
    }
}
