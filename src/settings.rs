//! Game settings and tuning
//!
//! Built once at startup (defaults, or a JSON file) and handed to the
//! simulation by reference. Holds tuning only, never game progress.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How passing a platform is detected for scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoringRule {
    /// Sample the overlap each frame: the player's bottom edge must sit inside
    /// the platform band while the player's top is above it. Can skip a
    /// platform when a single frame moves the bottom edge across the band.
    #[default]
    Overlap,
    /// Score when the bottom edge moves from below a platform's top to at or
    /// above it within one frame.
    Crossing,
}

impl ScoringRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringRule::Overlap => "Overlap",
            ScoringRule::Crossing => "Crossing",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "overlap" => Some(ScoringRule::Overlap),
            "crossing" | "cross" => Some(ScoringRule::Crossing),
            _ => None,
        }
    }
}

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Viewport ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_height: f32,
    /// Frame pacing target for the runner; the simulation itself is per-frame
    pub fps: u32,

    // === Player ===
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub player_size: f32,
    /// Top-left corner of the player at session start
    pub player_spawn: Vec2,
    pub max_health: u32,
    pub initial_lives: u32,
    /// Frames between shots while shoot is held (0 = every frame)
    pub shoot_cooldown_frames: u32,
    pub scoring: ScoringRule,

    // === Platforms ===
    pub platform_count: usize,
    pub platform_spacing: f32,
    pub platform_base_offset: f32,
    pub platform_height: f32,
    pub platform_min_width: f32,
    pub platform_max_width: f32,
    pub platform_min_x: f32,
    pub platform_right_margin: f32,

    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_speed_min: u32,
    pub enemy_speed_max: u32,
    pub enemy_spawn_interval: u32,
    pub enemy_spawn_gap_x: f32,
    pub enemy_damage: u32,

    // === Projectiles ===
    pub projectile_size: Vec2,
    pub projectile_speed: f32,

    // === Collectibles ===
    pub collectible_size: f32,
    pub health_boost: u32,
    /// Automatic collectible cadence in frames; `None` leaves spawning to callers
    pub collectible_spawn_interval: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            fps: FPS,

            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            player_size: PLAYER_SIZE,
            player_spawn: Vec2::new(100.0, SCREEN_HEIGHT - GROUND_HEIGHT - 100.0),
            max_health: MAX_HEALTH,
            initial_lives: INITIAL_LIVES,
            shoot_cooldown_frames: 0,
            scoring: ScoringRule::Overlap,

            platform_count: PLATFORM_COUNT,
            platform_spacing: PLATFORM_SPACING,
            platform_base_offset: PLATFORM_BASE_OFFSET,
            platform_height: PLATFORM_HEIGHT,
            platform_min_width: PLATFORM_MIN_WIDTH,
            platform_max_width: PLATFORM_MAX_WIDTH,
            platform_min_x: PLATFORM_MIN_X,
            platform_right_margin: PLATFORM_RIGHT_MARGIN,

            enemy_size: ENEMY_SIZE,
            enemy_speed_min: ENEMY_SPEED_MIN,
            enemy_speed_max: ENEMY_SPEED_MAX,
            enemy_spawn_interval: ENEMY_SPAWN_INTERVAL,
            enemy_spawn_gap_x: ENEMY_SPAWN_GAP_X,
            enemy_damage: ENEMY_DAMAGE,

            projectile_size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            projectile_speed: PROJECTILE_SPEED,

            collectible_size: COLLECTIBLE_SIZE,
            health_boost: HEALTH_BOOST,
            collectible_spawn_interval: None,
        }
    }
}

impl Settings {
    /// Y coordinate of the ground surface
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Largest left-edge x a generated platform may take
    #[inline]
    pub fn platform_max_x(&self) -> f32 {
        self.screen_width - self.platform_right_margin
    }

    /// Top edge of the platform at `index` (0 = lowest)
    #[inline]
    pub fn platform_top(&self, index: usize) -> f32 {
        self.ground_line() - (index as f32 * self.platform_spacing + self.platform_base_offset)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load_from(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Reject tuning the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width > 0.0 && self.screen_height > 0.0,
            "viewport must be positive, got {}x{}",
            self.screen_width,
            self.screen_height
        );
        ensure!(
            self.ground_height >= 0.0 && self.ground_height < self.screen_height,
            "ground height {} does not fit a {} px viewport",
            self.ground_height,
            self.screen_height
        );
        ensure!(self.fps > 0, "fps must be at least 1");
        ensure!(self.max_health > 0, "max_health must be at least 1");
        ensure!(self.player_size > 0.0, "player_size must be positive");
        ensure!(self.platform_count > 0, "platform_count must be at least 1");
        ensure!(
            self.platform_min_width <= self.platform_max_width,
            "platform width range {}..={} is inverted",
            self.platform_min_width,
            self.platform_max_width
        );
        ensure!(
            self.platform_min_width >= self.collectible_size,
            "platforms narrower than a collectible ({} < {})",
            self.platform_min_width,
            self.collectible_size
        );
        ensure!(
            self.platform_min_x <= self.platform_max_x(),
            "platform x range {}..={} is inverted",
            self.platform_min_x,
            self.platform_max_x()
        );
        ensure!(
            self.platform_top(self.platform_count - 1) >= 0.0,
            "{} platforms spaced {} px do not fit above the ground",
            self.platform_count,
            self.platform_spacing
        );
        ensure!(
            self.enemy_speed_min >= 1 && self.enemy_speed_min <= self.enemy_speed_max,
            "enemy speed range {}..={} is invalid",
            self.enemy_speed_min,
            self.enemy_speed_max
        );
        ensure!(
            self.projectile_speed > 0.0,
            "projectile_speed must be positive"
        );
        Ok(())
    }
}
