//! Collision detection and response
//!
//! Only downward landings are resolved: the ground line first, then any
//! platform the body overlaps while falling. Side and ceiling contacts pass
//! straight through. Pool queries report overlaps against the player.

use glam::Vec2;

use super::entities::{Entity, Platform};
use super::rect::Rect;

/// Where a body ended up after landing resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Ground,
    /// Index into the platform slice
    Platform(usize),
    Airborne,
}

/// Snap a moving body onto the ground or a platform.
///
/// The ground wins whenever the bottom edge reached it; platforms are only
/// checked otherwise, and only while the body is falling (`vel.y > 0`).
/// Any landing zeroes vertical speed.
pub fn resolve_landing(
    body: &mut Rect,
    vel: &mut Vec2,
    platforms: &[Platform],
    ground_line: f32,
) -> Landing {
    if body.bottom() >= ground_line {
        body.set_bottom(ground_line);
        vel.y = 0.0;
        return Landing::Ground;
    }

    let mut landing = Landing::Airborne;
    for (i, platform) in platforms.iter().enumerate() {
        if vel.y > 0.0 && platform.rect().intersects(body) {
            body.set_bottom(platform.rect().top());
            vel.y = 0.0;
            landing = Landing::Platform(i);
        }
    }
    landing
}

/// Indices of every pool entity overlapping `rect`, in pool order
pub fn overlapping<E: Entity>(rect: &Rect, pool: &[E]) -> Vec<usize> {
    pool.iter()
        .enumerate()
        .filter(|(_, e)| e.rect().intersects(rect))
        .map(|(i, _)| i)
        .collect()
}

/// Remove every pool entity overlapping `rect` and hand them back
pub fn take_overlapping<E: Entity>(rect: &Rect, pool: &mut Vec<E>) -> Vec<E> {
    let (hit, kept): (Vec<E>, Vec<E>) = std::mem::take(pool)
        .into_iter()
        .partition(|e| e.rect().intersects(rect));
    *pool = kept;
    hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::entities::{Collectible, CollectibleKind, Enemy};

    fn platforms() -> Vec<Platform> {
        vec![
            Platform::new(Rect::new(100.0, 450.0, 150.0, 20.0)),
            Platform::new(Rect::new(300.0, 370.0, 150.0, 20.0)),
        ]
    }

    #[test]
    fn test_ground_takes_priority() {
        let mut body = Rect::new(120.0, 520.0, 40.0, 40.0);
        let mut vel = Vec2::new(0.0, 12.0);
        assert_eq!(resolve_landing(&mut body, &mut vel, &platforms(), 550.0), Landing::Ground);
        assert_eq!(body.bottom(), 550.0);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_falling_body_snaps_to_platform_top() {
        let mut body = Rect::new(320.0, 335.0, 40.0, 40.0);
        let mut vel = Vec2::new(5.0, 4.0);
        assert_eq!(
            resolve_landing(&mut body, &mut vel, &platforms(), 550.0),
            Landing::Platform(1)
        );
        assert_eq!(body.bottom(), 370.0);
        assert_eq!(vel, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_rising_body_is_not_caught() {
        let mut body = Rect::new(320.0, 335.0, 40.0, 40.0);
        let mut vel = Vec2::new(0.0, -4.0);
        assert_eq!(
            resolve_landing(&mut body, &mut vel, &platforms(), 550.0),
            Landing::Airborne
        );
        assert_eq!(body.y, 335.0);
    }

    #[test]
    fn test_deep_overlap_while_falling_pulls_body_up() {
        // No side or ceiling handling: any overlap while falling is a landing
        let mut body = Rect::new(120.0, 440.0, 40.0, 40.0);
        let mut vel = Vec2::new(0.0, 1.0);
        resolve_landing(&mut body, &mut vel, &platforms(), 550.0);
        assert_eq!(body.bottom(), 450.0);
    }

    #[test]
    fn test_clear_of_platforms_stays_airborne() {
        let mut body = Rect::new(600.0, 200.0, 40.0, 40.0);
        let mut vel = Vec2::new(0.0, 3.0);
        assert_eq!(
            resolve_landing(&mut body, &mut vel, &platforms(), 550.0),
            Landing::Airborne
        );
        assert_eq!(vel.y, 3.0);
    }

    #[test]
    fn test_overlapping_reports_indices() {
        let settings = Settings::default();
        let enemies = vec![
            Enemy::new(90.0, 440.0, 3, &settings),
            Enemy::new(500.0, 440.0, 3, &settings),
            Enemy::new(130.0, 470.0, 3, &settings),
        ];
        let player = Rect::new(100.0, 450.0, 40.0, 40.0);
        assert_eq!(overlapping(&player, &enemies), vec![0, 2]);
        assert!(overlapping(&player, &enemies[1..2]).is_empty());
    }

    #[test]
    fn test_take_overlapping_removes_hits_only() {
        let settings = Settings::default();
        let mut pool = vec![
            Collectible::new(110.0, 460.0, CollectibleKind::Health, &settings),
            Collectible::new(400.0, 100.0, CollectibleKind::Life, &settings),
        ];
        let player = Rect::new(100.0, 450.0, 40.0, 40.0);

        let taken = take_overlapping(&player, &mut pool);
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].kind, CollectibleKind::Health);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].kind, CollectibleKind::Life);

        assert!(take_overlapping(&player, &mut pool).is_empty());
    }
}
