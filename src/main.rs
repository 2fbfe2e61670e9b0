//! Jolleyball entry point
//!
//! Headless driver: loads the configuration, seats bot-controlled players and
//! runs the fixed-cadence game loop for a set duration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use jolleyball::bot::Bot;
use jolleyball::renderer::MeshRenderer;
use jolleyball::{Game, GameConfig};

const PLAYER_COLORS: [&str; 6] = ["red", "blue", "yellow", "orange", "purple", "white"];

#[derive(Parser, Debug)]
#[command(about = "Run a headless Jolleyball match between bots", version)]
struct Args {
    /// JSON config file; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Simulated seconds to run
    #[arg(long, default_value_t = 10.0)]
    seconds: f32,
    /// Seed for the bots
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 2)]
    players: usize,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        log::info!("Using default config");
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = GameConfig::from_json(&json)
        .with_context(|| format!("loading config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Jolleyball (native) starting...");

    let config = load_config(args.config.as_ref())?;
    let dt = config.frame_dt();
    let frames = config.frames_for(args.seconds);
    let frames_per_second = config.frames_for(1.0).max(1);
    log::info!(
        "Arena {}x{}, {} fps, contact resolution {}",
        config.arena_width,
        config.arena_height,
        config.fps,
        config.contact_resolution.as_str()
    );

    let renderer = MeshRenderer::new(config.arena_height);
    let mut game = Game::new(config.clone(), renderer).context("building game")?;

    let mut bots = Vec::with_capacity(args.players);
    for i in 0..args.players {
        let color = PLAYER_COLORS[i % PLAYER_COLORS.len()];
        let controller = game.add_player(color);
        bots.push(Bot::new(controller.player(), args.seed.wrapping_add(i as u64)));
    }
    if !game.can_start() {
        log::warn!("Only {} player(s); a match needs at least two", args.players);
    }

    let mut bounces = 0u32;
    for frame in 0..frames {
        for bot in &mut bots {
            let (world, queue) = game.world_and_input();
            bot.think(world, queue);
        }
        game.frame(dt);
        bounces += game.world().last_wall_hits().count();

        if frame % frames_per_second == 0 {
            let ball = game.world().ball();
            log::info!(
                "t={:.1}s ball at ({:.1}, {:.1}) speed {:.1}",
                frame as f32 * dt,
                ball.pos.x,
                ball.pos.y,
                ball.vel.length()
            );
        }
    }

    log::info!(
        "Finished {} ticks, {} wall bounces, {} vertices in last frame",
        game.world().tick_count(),
        bounces,
        game.renderer().vertices().len()
    );
    let snapshot = serde_json::to_string_pretty(&game.world().snapshot())
        .context("serializing final snapshot")?;
    println!("{}", snapshot);
    Ok(())
}
