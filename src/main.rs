//! # Gloam Headless Demo
//!
//! Drives the simulation core without any renderer: generates a dungeon,
//! runs a simple wandering bot for a fixed number of ticks, then prints a
//! fog-of-war ASCII map and a run summary. Stands in for the rendering
//! collaborator and exercises the full tick path end to end.

use clap::Parser;
use gloam::config::SimConfig;
use gloam::{GameEvent, GloamResult, InputState, Key, Phase, Session};
use log::info;

/// Simulated frame time: a fixed 60 Hz tick.
const TICK_DELTA: f32 = 1.0 / 60.0;

/// Command line arguments for the gloam demo.
#[derive(Parser, Debug)]
#[command(name = "gloam")]
#[command(about = "Headless demo of the gloam dungeon simulation core")]
#[command(version)]
struct Args {
    /// Random seed for dungeon generation
    #[arg(short, long, default_value_t = 12345)]
    seed: u64,

    /// Number of simulation ticks to run
    #[arg(short, long, default_value_t = 3600)]
    ticks: u32,

    /// Dump the final snapshot as JSON instead of the ASCII map
    #[arg(long)]
    dump_json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> GloamResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.clone()),
    )
    .init();

    info!("gloam v{} demo, seed {}", gloam::VERSION, args.seed);

    let config = SimConfig::default();
    config.validate()?;

    let mut session = Session::new(config, args.seed);

    // Start the run from the intro.
    session.tick(TICK_DELTA, &InputState::with_keys([Key::Enter]));

    run_bot(&mut session, args.ticks);
    report(&session, args.dump_json)?;

    Ok(())
}

/// A minimal wandering policy: hold forward, and turn for a while whenever
/// movement stalls against a wall.
fn run_bot(session: &mut Session, ticks: u32) {
    let mut input = InputState::with_keys([Key::W]);
    let mut turn_ticks_left = 0u32;
    let mut last_pos = session
        .snapshot()
        .map(|s| s.player_position)
        .unwrap_or_default();

    for tick in 0..ticks {
        if turn_ticks_left > 0 {
            turn_ticks_left -= 1;
            if turn_ticks_left == 0 {
                input.release(Key::ArrowLeft);
            }
        }

        let events = session.tick(TICK_DELTA, &input);
        for event in &events {
            match event {
                GameEvent::OrbCollected {
                    light_value,
                    new_total,
                } => info!("tick {}: orb collected (+{} -> {:.0})", tick, light_value, new_total),
                GameEvent::LightDepleted => info!("tick {}: the light has failed", tick),
                GameEvent::PhaseChanged { to } => info!("tick {}: phase -> {:?}", tick, to),
            }
        }

        if session.phase() != Phase::Playing {
            break;
        }

        if let Some(snapshot) = session.snapshot() {
            let moved = snapshot.player_position.distance(last_pos);
            last_pos = snapshot.player_position;
            if moved < 0.001 && turn_ticks_left == 0 {
                input.press(Key::ArrowLeft);
                turn_ticks_left = 45;
            }
        }
    }
}

fn report(session: &Session, dump_json: bool) -> GloamResult<()> {
    let Some(snapshot) = session.snapshot() else {
        println!("run ended; no level state remains (back at intro)");
        return Ok(());
    };

    if dump_json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    if let (Some(grid), Some(discovered)) = (session.grid(), session.discovered()) {
        print!("{}", grid.render_ascii(Some(discovered)));
    }

    println!(
        "phase {:?} | {:.1}s | light {:.0} | orbs {} | travelled {:.1} | discovered {}",
        snapshot.phase,
        snapshot.elapsed,
        snapshot.light_duration,
        snapshot.stats.orbs_collected,
        snapshot.stats.distance_travelled,
        snapshot.stats.tiles_discovered,
    );

    Ok(())
}
