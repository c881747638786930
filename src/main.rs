//! Headless session runner (default binary).
//!
//! Plays a seeded session with random intents and prints the final field and
//! score summary. Configuration comes from the environment (see
//! `bricks::engine::config`); `BRICKS_STEPS` sets the number of steps and
//! `RUST_LOG` the log level.

use anyhow::{Context, Result};
use log::{debug, info};

use bricks::core::SimpleRng;
use bricks::engine::{Intents, Session, SessionConfig};
use bricks::types::Intent;

const DEFAULT_STEPS: u32 = 2000;

/// Intents a player might press during one step
const CHOICES: [Intent; 5] = [
    Intent::MoveLeft,
    Intent::MoveRight,
    Intent::SoftDrop,
    Intent::HardDrop,
    Intent::Rotate,
];

fn steps_from_env() -> Result<u32> {
    match std::env::var("BRICKS_STEPS") {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("BRICKS_STEPS={:?} is not a step count", raw)),
        Err(_) => Ok(DEFAULT_STEPS),
    }
}

/// Draw up to two intents; hard drops are rare so pieces get moved around first
fn random_intents(rng: &mut SimpleRng) -> Intents {
    let mut intents = Intents::new();
    for _ in 0..rng.next_range(3) {
        let intent = CHOICES[rng.next_range(CHOICES.len() as u32) as usize];
        if intent == Intent::HardDrop && rng.next_range(4) != 0 {
            continue;
        }
        intents.push(intent);
    }
    intents
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SessionConfig::from_env();
    let steps = steps_from_env()?;
    info!(
        "starting {}x{} session, seed {}, {} steps",
        config.width, config.height, config.seed, steps
    );

    let mut input_rng = SimpleRng::new(config.seed.wrapping_add(1));
    let mut session = Session::new(config).context("invalid session configuration")?;

    let mut games = 1u32;
    let mut locked = 0u32;
    for step in 0..steps {
        let intents = random_intents(&mut input_rng);
        let outcome = session
            .step(&intents)
            .with_context(|| format!("step {} failed", step))?;

        if outcome.locked {
            locked += 1;
        }
        if outcome.game_over {
            games += 1;
            debug!("game {} started at step {}", games, step);
        }
    }

    println!("{}", session.field());
    println!("score:  {}", session.score());
    println!("best:   {}", session.best_score());
    println!("level:  {}", session.level());
    println!("lines:  {}", session.lines());
    println!("pieces: {}", locked);
    println!("games:  {}", games);
    Ok(())
}
