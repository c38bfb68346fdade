//! Headless 2048 runner (default binary).
//!
//! Plays random pushes through a [`GameSession`] until no push changes the
//! grid or the move cap is reached, then prints the final board. There is no
//! renderer: animations are skipped by ticking the full duration after every
//! accepted move.
//!
//! Environment:
//! - `MERGE2048_SIZE`: board side length (default 4)
//! - `MERGE2048_SEED`: RNG seed (default: derived from the clock)
//! - `MERGE2048_MAX_MOVES`: stop after this many accepted moves (default 10000)
//! - `RUST_LOG`: tracing filter (default `info`)

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{debug, info};

use merge2048::core::SimpleRng;
use merge2048::session::{GameSession, PushOutcome, SessionConfig};
use merge2048::types::{Direction, DEFAULT_GRID_SIZE};

const DEFAULT_MAX_MOVES: u32 = 10_000;

#[derive(Debug, Clone, Copy)]
struct AutoplayConfig {
    size: usize,
    seed: u32,
    max_moves: u32,
}

impl AutoplayConfig {
    fn from_env() -> Result<Self> {
        let size = env_or("MERGE2048_SIZE", DEFAULT_GRID_SIZE)?;
        let seed = match std::env::var("MERGE2048_SEED") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MERGE2048_SEED is not a u32: {raw:?}"))?,
            Err(_) => clock_seed(),
        };
        let max_moves = env_or("MERGE2048_MAX_MOVES", DEFAULT_MAX_MOVES)?;
        Ok(Self {
            size,
            seed,
            max_moves,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AutoplayConfig::from_env()?;
    info!(?config, "starting autoplay");

    let session_config = SessionConfig {
        grid_size: config.size,
        seed: config.seed,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(session_config).context("failed to start a new game")?;
    // Separate stream for choosing directions so spawns replay for a given seed.
    let mut chooser = SimpleRng::new(config.seed.wrapping_add(1));

    while session.moves() < config.max_moves {
        let direction = Direction::ALL[chooser.next_range(4) as usize];
        match session.push(direction)? {
            PushOutcome::Moved { score_delta, .. } => {
                debug!(direction = direction.as_str(), score_delta, "pushed");
                session.tick(session_config.animation_ms);
            }
            PushOutcome::NoChange => {}
            PushOutcome::Busy => session.finish_animation(),
            PushOutcome::GameOver => break,
        }
    }

    info!(
        score = session.score(),
        moves = session.moves(),
        max_tile = session.grid().max_tile(),
        game_over = session.is_game_over(),
        "autoplay finished"
    );
    println!("{}", session.grid());
    println!("score: {}", session.score());
    Ok(())
}
