//! Renderer-facing view of a frame
//!
//! Everything a renderer needs to draw the current frame, flattened into
//! rectangles and counters. Serializes to JSON for external renderers and
//! debugging.

use serde::Serialize;

use super::entities::{CollectibleKind, Entity};
use super::rect::Rect;
use super::state::{GamePhase, Session};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectibleView {
    pub rect: Rect,
    pub kind: CollectibleKind,
}

/// End-screen text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndScreen {
    pub headline: &'static str,
    pub score: u32,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub health: u32,
    pub lives: u32,
    pub player: Rect,
    pub platforms: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub projectiles: Vec<Rect>,
    pub collectibles: Vec<CollectibleView>,
    /// Present once the session has ended
    pub end_screen: Option<EndScreen>,
}

impl FrameSnapshot {
    pub fn capture(session: &Session) -> Self {
        let player = &session.player;
        let level = &session.level;
        Self {
            frame: session.frame,
            phase: session.phase,
            score: player.score,
            health: player.health,
            lives: player.lives,
            player: player.rect,
            platforms: level.platforms().iter().map(|p| *p.rect()).collect(),
            enemies: level.enemies.iter().map(|e| e.rect).collect(),
            projectiles: player.projectiles.iter().map(|p| p.rect).collect(),
            collectibles: level
                .collectibles
                .iter()
                .map(|c| CollectibleView {
                    rect: c.rect,
                    kind: c.kind,
                })
                .collect(),
            end_screen: session.phase.end().map(|end| EndScreen {
                headline: end.message(),
                score: player.score,
                prompt: "Press R to Restart",
            }),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
