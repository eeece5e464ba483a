//! Level layout and spawning
//!
//! A level owns one platform set, generated once and never touched again,
//! plus the enemy and collectible pools. All randomness comes from the RNG
//! the caller passes in.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entities::{
    Collectible, CollectibleKind, Enemy, Entity, Platform, advance_pool,
};
use super::rect::Rect;
use crate::settings::Settings;

/// What a level update spawned or dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStep {
    pub enemy_spawned: bool,
    pub collectible_spawned: Option<CollectibleKind>,
    /// Enemies that walked off the left edge this frame
    pub enemies_despawned: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub collectibles: Vec<Collectible>,
    /// Frames since the last enemy spawn
    pub enemy_spawn_timer: u32,
    /// Frames since the last collectible spawn (only runs with a cadence set)
    pub collectible_spawn_timer: u32,
}

impl Level {
    pub fn new<R: Rng>(settings: &Settings, rng: &mut R) -> Self {
        Self {
            platforms: Self::generate_platforms(settings, rng),
            enemies: Vec::new(),
            collectibles: Vec::new(),
            enemy_spawn_timer: 0,
            collectible_spawn_timer: 0,
        }
    }

    /// Build the staircase: one platform per height band, lowest first,
    /// each with a random left edge and width.
    pub fn generate_platforms<R: Rng>(settings: &Settings, rng: &mut R) -> Vec<Platform> {
        (0..settings.platform_count)
            .map(|i| {
                let x = rng.random_range(settings.platform_min_x..=settings.platform_max_x());
                let width =
                    rng.random_range(settings.platform_min_width..=settings.platform_max_width);
                Platform::new(Rect::new(
                    x,
                    settings.platform_top(i),
                    width,
                    settings.platform_height,
                ))
            })
            .collect()
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Spawn an enemy just right of a random platform, resting above it
    pub fn spawn_enemy<R: Rng>(&mut self, settings: &Settings, rng: &mut R) -> bool {
        if self.platforms.is_empty() {
            return false;
        }
        let p = *self.platforms[rng.random_range(0..self.platforms.len())].rect();
        let speed = rng.random_range(settings.enemy_speed_min..=settings.enemy_speed_max);
        let enemy = Enemy::new(
            p.right() + settings.enemy_spawn_gap_x,
            p.top() - settings.enemy_size,
            speed,
            settings,
        );
        log::debug!("Enemy spawned at ({}, {}) speed {}", enemy.rect.x, enemy.rect.y, speed);
        self.enemies.push(enemy);
        true
    }

    /// Spawn a collectible of random kind somewhere along a random platform
    pub fn spawn_collectible<R: Rng>(
        &mut self,
        settings: &Settings,
        rng: &mut R,
    ) -> Option<CollectibleKind> {
        if self.platforms.is_empty() {
            return None;
        }
        let p = *self.platforms[rng.random_range(0..self.platforms.len())].rect();
        let max_x = (p.right() - settings.collectible_size).max(p.left());
        let x = rng.random_range(p.left()..=max_x);
        let kind = if rng.random_bool(0.5) {
            CollectibleKind::Health
        } else {
            CollectibleKind::Life
        };
        log::debug!("{:?} collectible spawned at ({}, {})", kind, x, p.top() - settings.collectible_size);
        self.collectibles.push(Collectible::new(
            x,
            p.top() - settings.collectible_size,
            kind,
            settings,
        ));
        Some(kind)
    }

    /// Advance every pool one frame and run the spawn timers
    pub fn update<R: Rng>(&mut self, settings: &Settings, rng: &mut R) -> LevelStep {
        let mut step = LevelStep::default();

        advance_pool(&mut self.platforms, settings);
        step.enemies_despawned = advance_pool(&mut self.enemies, settings);
        advance_pool(&mut self.collectibles, settings);

        self.enemy_spawn_timer += 1;
        if self.enemy_spawn_timer > settings.enemy_spawn_interval {
            step.enemy_spawned = self.spawn_enemy(settings, rng);
            self.enemy_spawn_timer = 0;
        }

        if let Some(interval) = settings.collectible_spawn_interval {
            self.collectible_spawn_timer += 1;
            if self.collectible_spawn_timer > interval {
                step.collectible_spawned = self.spawn_collectible(settings, rng);
                self.collectible_spawn_timer = 0;
            }
        }

        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn level(seed: u64) -> (Level, Settings, Pcg32) {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::new(&settings, &mut rng);
        (level, settings, rng)
    }

    #[test]
    fn test_platforms_form_a_staircase() {
        let (level, settings, _) = level(7);
        assert_eq!(level.platforms().len(), 6);

        let tops: Vec<f32> = level.platforms().iter().map(|p| p.rect().top()).collect();
        assert_eq!(tops, [450.0, 370.0, 290.0, 210.0, 130.0, 50.0]);

        for p in level.platforms() {
            let r = p.rect();
            assert!(r.x >= 100.0 && r.x <= 600.0, "x {}", r.x);
            assert!(r.w >= 100.0 && r.w <= 200.0, "w {}", r.w);
            assert_eq!(r.h, settings.platform_height);
        }
    }

    #[test]
    fn test_layout_follows_seed() {
        let (a, _, _) = level(42);
        let (b, _, _) = level(42);
        let (c, _, _) = level(43);
        assert_eq!(a.platforms(), b.platforms());
        assert_ne!(a.platforms(), c.platforms());
    }

    #[test]
    fn test_enemy_cadence() {
        let (mut level, settings, mut rng) = level(1);

        let spawn_frames: Vec<u32> = (1..=400)
            .filter(|_| level.update(&settings, &mut rng).enemy_spawned)
            .collect();
        assert_eq!(spawn_frames, [101, 202, 303]);
    }

    #[test]
    fn test_enemy_spawns_beside_a_platform() {
        let (mut level, settings, mut rng) = level(3);
        for _ in 0..20 {
            assert!(level.spawn_enemy(&settings, &mut rng));
        }
        for enemy in &level.enemies {
            assert!((2..=5).contains(&enemy.speed));
            assert!(level.platforms().iter().any(|p| {
                enemy.rect.x == p.rect().right() + 20.0 && enemy.rect.bottom() == p.rect().top()
            }));
        }
    }

    #[test]
    fn test_collectible_rests_on_a_platform() {
        let (mut level, settings, mut rng) = level(5);
        let mut kinds = Vec::new();
        for _ in 0..40 {
            kinds.push(level.spawn_collectible(&settings, &mut rng).unwrap());
        }
        assert!(kinds.contains(&CollectibleKind::Health));
        assert!(kinds.contains(&CollectibleKind::Life));

        for c in &level.collectibles {
            assert!(level.platforms().iter().any(|p| {
                let r = p.rect();
                c.rect.bottom() == r.top()
                    && c.rect.x >= r.left()
                    && c.rect.right() <= r.right() + 1e-3
            }));
        }
    }

    #[test]
    fn test_no_automatic_collectibles_by_default() {
        let (mut level, settings, mut rng) = level(9);
        for _ in 0..2000 {
            assert_eq!(level.update(&settings, &mut rng).collectible_spawned, None);
        }
        assert!(level.collectibles.is_empty());
    }

    #[test]
    fn test_collectible_cadence_when_configured() {
        let settings = Settings {
            collectible_spawn_interval: Some(50),
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(11);
        let mut level = Level::new(&settings, &mut rng);
        for _ in 0..153 {
            level.update(&settings, &mut rng);
        }
        assert_eq!(level.collectibles.len(), 3);
    }

    #[test]
    fn test_platforms_unchanged_by_updates() {
        let (mut level, settings, mut rng) = level(13);
        let before = level.platforms().to_vec();
        for _ in 0..500 {
            level.update(&settings, &mut rng);
        }
        assert_eq!(level.platforms(), &before[..]);
    }

    #[test]
    fn test_offscreen_enemies_are_dropped() {
        let (mut level, settings, mut rng) = level(17);
        level.enemies.push(Enemy::new(-49.0, 100.0, 2, &settings));
        let step = level.update(&settings, &mut rng);
        assert_eq!(step.enemies_despawned, 1);
        assert!(level.enemies.is_empty());
    }
}
