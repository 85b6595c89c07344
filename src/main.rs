//! Headless duel between the forager and a greedy scripted rival.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use forager::prelude::*;
use forager::{init_logging, vec_normalize, ActorRole, Removal, TargetSelector};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Run a headless meteor duel
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of fixed ticks to simulate
    #[arg(short, long, default_value_t = 3000)]
    ticks: u64,
    /// JSON configuration file overriding the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the meteor spawner and growth delays
    #[arg(short, long)]
    seed: Option<u64>,
    /// Write a JSON summary of the run to this path
    #[arg(long)]
    report: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const SPAWN_EVERY: u64 = 40;
const RIVAL_SPEED: f32 = 4.0;

#[derive(Serialize)]
struct Summary {
    ticks: u64,
    agent: ScoreCard,
    rival: ScoreCard,
    collected_by_agent: usize,
    collected_by_rival: usize,
    exited: usize,
}

/// Launches a meteor from just outside a random edge towards the interior.
fn spawn_from_edge(arena: &mut Arena, rng: &mut StdRng, color: MeteorColor) {
    let half = Vec2::new(arena.config().arena.half_width, arena.config().arena.half_height);
    let along = rng.gen_range(-1.0_f32..1.0);
    let start = match rng.gen_range(0..4) {
        0 => Vec2::new(-half.x - 0.5, along * half.y),
        1 => Vec2::new(half.x + 0.5, along * half.y),
        2 => Vec2::new(along * half.x, -half.y - 0.5),
        _ => Vec2::new(along * half.x, half.y + 0.5),
    };
    let aim = Vec2::new(rng.gen_range(-0.5_f32..0.5) * half.x, rng.gen_range(-0.5_f32..0.5) * half.y);
    let speed = rng.gen_range(0.5_f32..1.5);
    arena.spawn_meteor(start, vec_normalize(aim - start) * speed, color);
}

/// The rival greedily runs at the closest meteor of the color it needs.
fn drive_rival(arena: &mut Arena) {
    let rival = arena.actor(ActorRole::Rival).position;
    let need = arena.needed_color(ActorRole::Rival);
    let target = TargetSelector::new(arena.registry(), rival)
        .closest_of_color(need)
        .map_or(rival, |m| m.position);
    let step = RIVAL_SPEED * arena.config().tick_seconds;
    let to_target = target - rival;
    let next = if to_target.length() <= step {
        target
    } else {
        rival + vec_normalize(to_target) * step
    };
    arena.move_rival(next);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config = match &args.config {
        Some(path) => ForagerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ForagerConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.arena.seed = seed;
    }

    let mut arena = Arena::with_rect(config);
    arena.place_agent(Vec2::new(-2.0, 0.0));
    arena.set_rival_motion(Vec2::new(2.0, 0.0), Vec2::ZERO);
    let mut rng = StdRng::seed_from_u64(config.arena.seed.wrapping_add(1));

    let mut summary = Summary {
        ticks: args.ticks,
        agent: ScoreCard::default(),
        rival: ScoreCard::default(),
        collected_by_agent: 0,
        collected_by_rival: 0,
        exited: 0,
    };
    let mut colors = MeteorColor::ALL.iter().copied().cycle();

    for tick in 0..args.ticks {
        if tick % SPAWN_EVERY == 0 {
            if let Some(color) = colors.next() {
                spawn_from_edge(&mut arena, &mut rng, color);
            }
        }
        drive_rival(&mut arena);
        let report = arena.step();
        for removal in report.removals {
            match removal {
                Removal::Collected {
                    by: ActorRole::Agent,
                    ..
                } => summary.collected_by_agent += 1,
                Removal::Collected {
                    by: ActorRole::Rival,
                    ..
                } => summary.collected_by_rival += 1,
                Removal::Exited { .. } | Removal::Expired { .. } => summary.exited += 1,
            }
        }
    }

    summary.agent = arena.actor(ActorRole::Agent).scores;
    summary.rival = arena.actor(ActorRole::Rival).scores;
    info!("Agent {} (total {})", summary.agent, summary.agent.total());
    info!("Rival {} (total {})", summary.rival, summary.rival.total());
    info!(
        "Collected agent={} rival={} exited={}",
        summary.collected_by_agent, summary.collected_by_rival, summary.exited
    );

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&summary)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    }
    Ok(())
}
