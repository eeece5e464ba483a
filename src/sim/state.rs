//! Session state
//!
//! A session is one play-through: a fresh player, a freshly generated level,
//! and the phase machine Playing → Win/GameOver → AwaitingRestart. Restarting
//! throws the whole session away.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entities::CollectibleKind;
use super::level::Level;
use super::player::Player;
use crate::settings::Settings;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEnd {
    Won,
    Lost,
}

impl SessionEnd {
    /// Headline shown on the end screen
    pub fn message(&self) -> &'static str {
        match self {
            SessionEnd::Won => "You Win!",
            SessionEnd::Lost => "Game Over",
        }
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every platform scored (entered on the winning frame)
    Win,
    /// Health ran out (entered on the losing frame)
    GameOver,
    /// End screen up; only restart or quit do anything
    AwaitingRestart(SessionEnd),
}

impl GamePhase {
    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// The end state, once the session is over
    pub fn end(&self) -> Option<SessionEnd> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Win => Some(SessionEnd::Won),
            GamePhase::GameOver => Some(SessionEnd::Lost),
            GamePhase::AwaitingRestart(end) => Some(*end),
        }
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new session began (1-based count)
    SessionStarted { session: u32 },
    PlatformPassed { score: u32 },
    EnemySpawned,
    CollectibleSpawned { kind: CollectibleKind },
    /// An enemy touched the player; health after the hit
    EnemyHit { health: u32 },
    CollectiblePicked { kind: CollectibleKind },
    Won { score: u32 },
    Lost { score: u32 },
}

/// One play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub player: Player,
    pub level: Level,
    pub phase: GamePhase,
    /// Ticks processed since the session started
    pub frame: u64,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl Session {
    pub fn new<R: Rng>(settings: &Settings, rng: &mut R) -> Self {
        Self {
            player: Player::new(settings),
            level: Level::new(settings, rng),
            phase: GamePhase::Playing,
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        !self.phase.is_playing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_new_session_is_playing() {
        let settings = Settings::default();
        let session = Session::new(&settings, &mut Pcg32::seed_from_u64(1));
        assert_eq!(session.phase, GamePhase::Playing);
        assert!(!session.is_over());
        assert_eq!(session.frame, 0);
        assert_eq!(session.level.platforms().len(), settings.platform_count);
        assert!(session.level.enemies.is_empty());
        assert!(session.player.projectiles.is_empty());
    }

    #[test]
    fn test_phase_end() {
        assert_eq!(GamePhase::Playing.end(), None);
        assert_eq!(GamePhase::Win.end(), Some(SessionEnd::Won));
        assert_eq!(GamePhase::GameOver.end(), Some(SessionEnd::Lost));
        assert_eq!(
            GamePhase::AwaitingRestart(SessionEnd::Lost).end(),
            Some(SessionEnd::Lost)
        );
        assert_eq!(SessionEnd::Won.message(), "You Win!");
        assert_eq!(SessionEnd::Lost.message(), "Game Over");
    }
}
