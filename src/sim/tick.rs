//! Per-frame simulation step
//!
//! [`Game`] owns the settings, the seeded RNG and the current session, and
//! advances everything one frame per [`Game::tick`]. Within a playing frame
//! the order is fixed: player, level, enemy contact, pickups, projectiles.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{overlapping, take_overlapping};
use super::entities::CollectibleKind;
use super::snapshot::FrameSnapshot;
use super::state::{GameEvent, GamePhase, Session};
use crate::settings::Settings;

/// Input for a single tick: held keys plus one-shot events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub shoot: bool,
    /// Terminate immediately, from any phase
    pub quit: bool,
    /// Start a new session (only honored once the current one is over)
    pub restart: bool,
}

/// Result of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// The old session was discarded and a new one started
    Restarted,
    /// Quit was requested; nothing was simulated
    Quit,
}

/// The session driver
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    session: Session,
    sessions_started: u32,
    /// Ticks processed across all sessions
    total_frames: u64,
}

impl Game {
    /// Start the first session. The same settings and seed always produce the
    /// same layouts and spawns for the same inputs.
    pub fn new(settings: Settings, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let session = Session::new(&settings, &mut rng);
        log::info!("Game initialized with seed: {}", seed);

        let mut game = Self {
            settings,
            seed,
            rng,
            session,
            sessions_started: 1,
            total_frames: 0,
        };
        game.session.events.push(GameEvent::SessionStarted { session: 1 });
        game
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Direct access for harnesses that stage a scene
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Renderer view of the current frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.session)
    }

    /// Discard the current session and start over with a new layout
    pub fn restart(&mut self) {
        self.session = Session::new(&self.settings, &mut self.rng);
        self.sessions_started += 1;
        self.session.events.push(GameEvent::SessionStarted {
            session: self.sessions_started,
        });
        log::info!("Session {} started", self.sessions_started);
    }

    /// Place a collectible on a random platform. Nothing calls this on a
    /// timer unless `collectible_spawn_interval` is set.
    pub fn spawn_collectible(&mut self) -> Option<CollectibleKind> {
        let kind = self
            .session
            .level
            .spawn_collectible(&self.settings, &mut self.rng)?;
        self.session.events.push(GameEvent::CollectibleSpawned { kind });
        Some(kind)
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome {
        if input.quit {
            log::info!("Quit requested after {} frames", self.total_frames);
            return TickOutcome::Quit;
        }

        self.total_frames += 1;
        self.session.frame += 1;
        self.session.events.clear();

        match self.session.phase {
            GamePhase::Playing => {
                step_playing(&mut self.session, input, &self.settings, &mut self.rng);
            }
            GamePhase::Win | GamePhase::GameOver | GamePhase::AwaitingRestart(_) => {
                if input.restart {
                    self.restart();
                    return TickOutcome::Restarted;
                }
                if let Some(end) = self.session.phase.end() {
                    self.session.phase = GamePhase::AwaitingRestart(end);
                }
            }
        }

        TickOutcome::Continue
    }
}

/// Run one playing frame of a session
fn step_playing(session: &mut Session, input: &TickInput, settings: &Settings, rng: &mut Pcg32) {
    let step = session
        .player
        .update(session.level.platforms(), input, settings);

    if step.scored > 0 {
        log::debug!("Platform passed, score {}", session.player.score);
        session.events.push(GameEvent::PlatformPassed {
            score: session.player.score,
        });
    }

    if step.reached_top {
        log::info!("You win! Score: {}", session.player.score);
        session.phase = GamePhase::Win;
        session.events.push(GameEvent::Won {
            score: session.player.score,
        });
        return;
    }

    let level_step = session.level.update(settings, rng);
    if level_step.enemy_spawned {
        session.events.push(GameEvent::EnemySpawned);
    }
    if let Some(kind) = level_step.collectible_spawned {
        session.events.push(GameEvent::CollectibleSpawned { kind });
    }

    // Enemies stay in play after a hit; each one costs health once per frame
    for _ in overlapping(&session.player.rect, &session.level.enemies) {
        let health = session.player.take_damage(settings.enemy_damage);
        log::debug!("Enemy hit, health {}", health);
        session.events.push(GameEvent::EnemyHit { health });

        if session.player.is_dead() {
            log::info!("Game over! Score: {}", session.player.score);
            session.phase = GamePhase::GameOver;
            session.events.push(GameEvent::Lost {
                score: session.player.score,
            });
            return;
        }
    }

    for collectible in take_overlapping(&session.player.rect, &mut session.level.collectibles) {
        let kind = collectible.apply_effect(&mut session.player, settings);
        log::debug!("Picked up {:?}", kind);
        session.events.push(GameEvent::CollectiblePicked { kind });
    }

    session.player.advance_projectiles(settings);
}
