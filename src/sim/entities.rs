//! Platforms, enemies, projectiles and collectibles
//!
//! Every kind shares one capability set ([`Entity`]) and lives in a plain
//! `Vec` pool owned by the level or the player. Pools are advanced and pruned
//! in one pass with [`advance_pool`], so nothing that should be gone survives
//! the frame.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::rect::Rect;
use crate::settings::Settings;

/// Per-frame behavior shared by every pooled entity
pub trait Entity {
    /// Advance one frame
    fn update(&mut self);
    /// Current bounds
    fn rect(&self) -> &Rect;
    /// True once the entity should leave its pool
    fn is_removable(&self, settings: &Settings) -> bool;
}

/// Update every entity in the pool, then drop the removable ones.
/// Returns how many were dropped.
pub fn advance_pool<E: Entity>(pool: &mut Vec<E>, settings: &Settings) -> usize {
    for entity in pool.iter_mut() {
        entity.update();
    }
    let before = pool.len();
    pool.retain(|e| !e.is_removable(settings));
    before - pool.len()
}

/// A static stepper the player can land on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

impl Entity for Platform {
    fn update(&mut self) {}

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn is_removable(&self, _settings: &Settings) -> bool {
        false
    }
}

/// A hazard sliding leftward across the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Pixels moved left per frame
    pub speed: u32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, speed: u32, settings: &Settings) -> Self {
        Self {
            rect: Rect::new(x, y, settings.enemy_size, settings.enemy_size),
            speed,
        }
    }
}

impl Entity for Enemy {
    fn update(&mut self) {
        self.rect.x -= self.speed as f32;
    }

    fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Fully past the left edge of the viewport
    fn is_removable(&self, _settings: &Settings) -> bool {
        self.rect.right() < 0.0
    }
}

/// A shot fired by the player; travels right and never hits anything
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub speed: f32,
}

impl Projectile {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Self {
            rect: Rect::new(
                x,
                y,
                settings.projectile_size.x,
                settings.projectile_size.y,
            ),
            speed: settings.projectile_speed,
        }
    }
}

impl Entity for Projectile {
    fn update(&mut self) {
        self.rect.x += self.speed;
    }

    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn is_removable(&self, settings: &Settings) -> bool {
        self.rect.x > settings.screen_width
    }
}

/// Collectible types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectibleKind {
    /// Restores health, capped at the maximum
    Health,
    /// Adds one life
    Life,
}

/// A pickup resting above a platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    pub kind: CollectibleKind,
}

impl Collectible {
    pub fn new(x: f32, y: f32, kind: CollectibleKind, settings: &Settings) -> Self {
        Self {
            rect: Rect::new(x, y, settings.collectible_size, settings.collectible_size),
            kind,
        }
    }

    /// Apply the pickup to the player. Consumes the collectible, so it is
    /// gone whether or not the effect changed anything.
    pub fn apply_effect(self, player: &mut Player, settings: &Settings) -> CollectibleKind {
        match self.kind {
            CollectibleKind::Health => player.heal(settings.health_boost, settings.max_health),
            CollectibleKind::Life => player.lives += 1,
        }
        self.kind
    }
}

impl Entity for Collectible {
    fn update(&mut self) {}

    fn rect(&self) -> &Rect {
        &self.rect
    }

    /// Collectibles leave their pool only when picked up
    fn is_removable(&self, _settings: &Settings) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_leaves_past_right_edge() {
        let settings = Settings::default();
        let mut pool = vec![Projectile::new(200.0, 300.0, &settings)];

        for _ in 0..60 {
            advance_pool(&mut pool, &settings);
        }
        // Sitting exactly on the edge is still on screen
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].rect.x, 800.0);

        let removed = advance_pool(&mut pool, &settings);
        assert_eq!(removed, 1);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_enemy_leaves_once_fully_off_left_edge() {
        let settings = Settings::default();
        let mut pool = vec![Enemy::new(750.0, 100.0, 5, &settings)];

        // Right edge starts at 800 and reaches 0 after 160 frames
        for _ in 0..160 {
            advance_pool(&mut pool, &settings);
        }
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].rect.right(), 0.0);

        advance_pool(&mut pool, &settings);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_pool_keeps_order_of_survivors() {
        let settings = Settings::default();
        let mut pool = vec![
            Enemy::new(-48.0, 0.0, 5, &settings),
            Enemy::new(300.0, 0.0, 2, &settings),
            Enemy::new(-49.0, 0.0, 3, &settings),
            Enemy::new(400.0, 0.0, 4, &settings),
        ];
        assert_eq!(advance_pool(&mut pool, &settings), 2);
        assert_eq!(pool[0].rect.x, 298.0);
        assert_eq!(pool[1].rect.x, 396.0);
    }

    #[test]
    fn test_platforms_and_collectibles_stay_put() {
        let settings = Settings::default();
        let mut platforms = vec![Platform::new(Rect::new(100.0, 450.0, 150.0, 20.0))];
        let mut collectibles = vec![Collectible::new(
            120.0,
            420.0,
            CollectibleKind::Life,
            &settings,
        )];
        for _ in 0..1000 {
            advance_pool(&mut platforms, &settings);
            advance_pool(&mut collectibles, &settings);
        }
        assert_eq!(platforms[0].rect(), &Rect::new(100.0, 450.0, 150.0, 20.0));
        assert_eq!(collectibles[0].rect.x, 120.0);
    }

    #[test]
    fn test_health_pickup_is_capped() {
        let settings = Settings::default();
        let mut player = Player::new(&settings);

        player.health = 90;
        Collectible::new(0.0, 0.0, CollectibleKind::Health, &settings)
            .apply_effect(&mut player, &settings);
        assert_eq!(player.health, 100);

        Collectible::new(0.0, 0.0, CollectibleKind::Health, &settings)
            .apply_effect(&mut player, &settings);
        assert_eq!(player.health, 100);

        player.health = 40;
        Collectible::new(0.0, 0.0, CollectibleKind::Health, &settings)
            .apply_effect(&mut player, &settings);
        assert_eq!(player.health, 65);
    }

    #[test]
    fn test_life_pickup_adds_a_life() {
        let settings = Settings::default();
        let mut player = Player::new(&settings);
        let kind = Collectible::new(0.0, 0.0, CollectibleKind::Life, &settings)
            .apply_effect(&mut player, &settings);
        assert_eq!(kind, CollectibleKind::Life);
        assert_eq!(player.lives, settings.initial_lives + 1);
        assert_eq!(player.health, settings.max_health);
    }
}
