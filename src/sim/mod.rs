//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-frame deltas
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entities;
pub mod level;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Landing, overlapping, resolve_landing, take_overlapping};
pub use entities::{
    Collectible, CollectibleKind, Enemy, Entity, Platform, Projectile, advance_pool,
};
pub use level::{Level, LevelStep};
pub use player::{Player, PlayerStep};
pub use rect::Rect;
pub use snapshot::{CollectibleView, EndScreen, FrameSnapshot};
pub use state::{GameEvent, GamePhase, Session, SessionEnd};
pub use tick::{Game, TickInput, TickOutcome};
