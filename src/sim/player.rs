//! The player body: movement, landing, shooting and platform scoring

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Landing, resolve_landing};
use super::entities::{Entity, Platform, Projectile, advance_pool};
use super::rect::Rect;
use super::tick::TickInput;
use crate::settings::{ScoringRule, Settings};

/// What a single player update produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStep {
    /// Platforms scored this frame
    pub scored: u32,
    /// Score now equals the platform count
    pub reached_top: bool,
    /// A projectile was fired
    pub fired: bool,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    /// Airborne from a jump; blocks another jump until landing
    pub jumping: bool,
    pub health: u32,
    /// Raised by Life pickups; nothing consumes lives
    pub lives: u32,
    pub score: u32,
    /// Top edge of the highest platform scored so far
    pub last_platform_y: f32,
    pub projectiles: Vec<Projectile>,
    shoot_cooldown: u32,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rect: Rect::from_pos_size(
                settings.player_spawn,
                Vec2::splat(settings.player_size),
            ),
            vel: Vec2::ZERO,
            jumping: false,
            health: settings.max_health,
            lives: settings.initial_lives,
            score: 0,
            last_platform_y: settings.screen_height,
            projectiles: Vec::new(),
            shoot_cooldown: 0,
        }
    }

    /// Advance the player one frame against the given platforms
    pub fn update(
        &mut self,
        platforms: &[Platform],
        input: &TickInput,
        settings: &Settings,
    ) -> PlayerStep {
        let mut step = PlayerStep::default();

        // Gravity applies every frame; landing cancels it below
        self.vel.y += settings.gravity;

        self.vel.x = if input.left {
            -settings.move_speed
        } else if input.right {
            settings.move_speed
        } else {
            0.0
        };

        if input.jump && !self.jumping {
            self.jumping = true;
            self.vel.y = -settings.jump_impulse;
        }

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
        if input.shoot && self.shoot_cooldown == 0 {
            self.shoot(settings);
            self.shoot_cooldown = settings.shoot_cooldown_frames;
            step.fired = true;
        }

        let prev_bottom = self.rect.bottom();
        self.rect.x += self.vel.x;
        self.rect.y += self.vel.y;

        if resolve_landing(&mut self.rect, &mut self.vel, platforms, settings.ground_line())
            != Landing::Airborne
        {
            self.jumping = false;
        }

        step.scored = self.score_platforms(platforms, prev_bottom, settings.scoring);
        step.reached_top = self.score as usize == platforms.len();

        self.clamp_to_viewport(settings.screen_width);
        step
    }

    /// Fire a projectile from the leading edge, at half height
    pub fn shoot(&mut self, settings: &Settings) {
        self.projectiles.push(Projectile::new(
            self.rect.right(),
            self.rect.center_y(),
            settings,
        ));
    }

    /// Move owned projectiles and drop the ones that left the screen
    pub fn advance_projectiles(&mut self, settings: &Settings) -> usize {
        advance_pool(&mut self.projectiles, settings)
    }

    /// Restore health without exceeding `max`
    pub fn heal(&mut self, amount: u32, max: u32) {
        self.health = self.health.saturating_add(amount).min(max);
    }

    /// Subtract health, stopping at zero. Returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Count platforms passed this frame. Each platform must be higher than
    /// the last one scored, so a platform is never counted twice.
    fn score_platforms(&mut self, platforms: &[Platform], prev_bottom: f32, rule: ScoringRule) -> u32 {
        let mut scored = 0;
        for platform in platforms {
            let p = platform.rect();
            let bottom = self.rect.bottom();
            let passed = match rule {
                ScoringRule::Overlap => {
                    p.top() < bottom && bottom < p.bottom() && self.rect.top() < p.top()
                }
                ScoringRule::Crossing => prev_bottom > p.top() && bottom <= p.top(),
            };
            if passed && self.last_platform_y > p.top() {
                self.score += 1;
                self.last_platform_y = p.top();
                scored += 1;
            }
        }
        scored
    }

    fn clamp_to_viewport(&mut self, width: f32) {
        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.right() > width {
            self.rect.set_right(width);
        }
    }
}
