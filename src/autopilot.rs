//! Demo-mode input
//!
//! Plays the game from the current session state: walk under the next
//! unscored platform, jump through it, land on it, repeat. Hops over enemies
//! closing in at the player's height. Good enough to drive headless runs and
//! soak tests, not to play well.

use crate::settings::Settings;
use crate::sim::{Entity, Rect, Session, TickInput};

/// Horizontal slack when lining up under a platform
const ALIGN_TOLERANCE: f32 = 12.0;
/// How far ahead (either side) an enemy triggers a hop
const DODGE_RANGE: f32 = 70.0;

/// Build the input for the next tick
pub fn autopilot_input(session: &Session, settings: &Settings, shoot: bool) -> TickInput {
    let mut input = TickInput {
        shoot,
        ..Default::default()
    };
    if session.is_over() {
        return input;
    }

    let player = &session.player;
    let grounded = !player.jumping && player.vel.y == 0.0;

    if let Some(target) = next_platform(session) {
        let dx = target.center().x - player.rect.center().x;
        let slack = (target.w / 2.0 - ALIGN_TOLERANCE).max(0.0);
        if dx > slack {
            input.right = true;
        } else if dx < -slack {
            input.left = true;
        } else if grounded {
            input.jump = true;
        }
    }

    if grounded && enemy_closing_in(session) {
        input.jump = true;
    }

    // Stay out of the clamp against the right wall
    if input.right && player.rect.right() >= settings.screen_width {
        input.right = false;
    }

    input
}

/// Lowest platform that still counts for score
fn next_platform(session: &Session) -> Option<Rect> {
    let last = session.player.last_platform_y;
    session
        .level
        .platforms()
        .iter()
        .map(|p| *p.rect())
        .filter(|r| r.top() < last)
        .max_by(|a, b| a.top().total_cmp(&b.top()))
}

fn enemy_closing_in(session: &Session) -> bool {
    let player = &session.player.rect;
    session.level.enemies.iter().any(|e| {
        let same_height = e.rect.top() < player.bottom() && e.rect.bottom() > player.top();
        let ahead = e.rect.left() - player.right();
        same_height && ahead > -player.w && ahead < DODGE_RANGE
    })
}
