//! Stepper Climb headless runner
//!
//! Drives the simulation with the demo autopilot, paced at the configured
//! frame rate when asked, and reports how the sessions went.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;

use stepper_climb::Settings;
use stepper_climb::autopilot::autopilot_input;
use stepper_climb::sim::{Game, GameEvent, TickOutcome};

#[derive(Parser, Debug)]
#[command(name = "stepper-climb")]
#[command(about = "Run the stepper platformer simulation headless")]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many frames
    #[arg(long, default_value_t = 3_600)]
    frames: u64,
    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pace frames at the configured fps instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Hold the shoot key the whole run
    #[arg(long)]
    shoot: bool,
    /// Restart after each ending until this many sessions have been played
    #[arg(long, default_value_t = 1)]
    sessions: u32,
    /// Print the final frame snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

/// Fixed-rate frame clock. Sleeps off the rest of each frame and never tries
/// to catch up after a slow one.
struct FramePacer {
    frame: Duration,
    next: Instant,
}

impl FramePacer {
    fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            next: Instant::now(),
        }
    }

    fn wait(&mut self) {
        self.next += self.frame;
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        } else {
            self.next = now;
        }
    }
}

#[derive(Debug, Default)]
struct RunStats {
    wins: u32,
    losses: u32,
    best_score: u32,
    enemy_hits: u32,
    pickups: u32,
}

impl RunStats {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Won { score } => {
                    self.wins += 1;
                    self.best_score = self.best_score.max(*score);
                }
                GameEvent::Lost { score } => {
                    self.losses += 1;
                    self.best_score = self.best_score.max(*score);
                }
                GameEvent::PlatformPassed { score } => {
                    self.best_score = self.best_score.max(*score);
                }
                GameEvent::EnemyHit { .. } => self.enemy_hits += 1,
                GameEvent::CollectiblePicked { .. } => self.pickups += 1,
                _ => {}
            }
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("Stepper Climb (headless) starting...");

    let mut game = Game::new(settings, seed);
    let mut pacer = FramePacer::new(game.settings().fps);
    let mut stats = RunStats::default();

    while game.total_frames() < args.frames {
        let mut input = autopilot_input(game.session(), game.settings(), args.shoot);
        if game.session().is_over() {
            if game.sessions_started() >= args.sessions {
                break;
            }
            input.restart = true;
        }

        if game.tick(&input) == TickOutcome::Quit {
            break;
        }
        stats.record(&game.session().events);

        if args.realtime {
            pacer.wait();
        }
    }

    let snapshot = game.snapshot();
    println!(
        "seed {} | frames {} | sessions {} | wins {} | losses {} | best score {}/{} | enemy hits {} | pickups {}",
        game.seed(),
        game.total_frames(),
        game.sessions_started(),
        stats.wins,
        stats.losses,
        stats.best_score,
        game.settings().platform_count,
        stats.enemy_hits,
        stats.pickups,
    );
    println!(
        "final: {:?} score {} health {} lives {}",
        snapshot.phase, snapshot.score, snapshot.health, snapshot.lives
    );
    if args.snapshot {
        println!("{}", snapshot.to_json()?);
    }

    Ok(())
}
