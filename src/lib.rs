//! Stepper Climb - a side-scrolling platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, session state)
//! - `settings`: Data-driven tuning, loaded once and passed by reference
//! - `autopilot`: Demo-mode input generator for headless runs

pub mod autopilot;
pub mod settings;
pub mod sim;

pub use settings::{ScoringRule, Settings};

/// Default tuning constants (one simulation tick per rendered frame)
pub mod consts {
    /// Target frame rate; every per-frame delta below assumes it
    pub const FPS: u32 = 60;

    /// Viewport dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Height of the ground strip at the bottom of the viewport
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Downward acceleration added to vertical speed every frame
    pub const GRAVITY: f32 = 0.8;
    /// Horizontal speed while a direction is held
    pub const MOVE_SPEED: f32 = 5.0;
    /// Vertical speed set (not added) when a jump starts
    pub const JUMP_IMPULSE: f32 = 15.0;

    pub const PLAYER_SIZE: f32 = 40.0;
    pub const MAX_HEALTH: u32 = 100;
    pub const INITIAL_LIVES: u32 = 3;

    /// Platform layout
    pub const PLATFORM_COUNT: usize = 6;
    pub const PLATFORM_SPACING: f32 = 80.0;
    /// Gap between the ground line and the top of the lowest platform
    pub const PLATFORM_BASE_OFFSET: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 100.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 200.0;
    pub const PLATFORM_MIN_X: f32 = 100.0;
    /// Right-hand margin for the platform's left edge
    pub const PLATFORM_RIGHT_MARGIN: f32 = 200.0;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const ENEMY_SPEED_MIN: u32 = 2;
    pub const ENEMY_SPEED_MAX: u32 = 5;
    /// Frames between enemy spawns (spawn fires once the timer exceeds this)
    pub const ENEMY_SPAWN_INTERVAL: u32 = 100;
    pub const ENEMY_SPAWN_GAP_X: f32 = 20.0;
    pub const ENEMY_DAMAGE: u32 = 10;

    /// Projectiles
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;

    /// Collectibles
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const HEALTH_BOOST: u32 = 25;
}
