//! Ball versus player contact response
//!
//! A hit does not conserve momentum. The ball leaves with the magnitude of
//! the summed ball and player velocities, pointed away from the player along
//! the L1-normalized center displacement. Bodies are never pushed apart; only
//! the ball velocity changes.

use glam::Vec2;

use super::entity::Entity;

/// Result of testing the ball against one player
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactOutcome {
    /// Circles do not overlap
    Apart,
    /// Overlapping, but the ball is below an airborne player's center
    PassedUnder,
    /// Centers coincide; no direction can be derived
    Concentric,
    /// Ball should take this velocity
    Hit(Vec2),
}

/// Divide by |x| + |y|. None for the zero vector.
pub fn l1_normalize(v: Vec2) -> Option<Vec2> {
    let norm = v.x.abs() + v.y.abs();
    if norm > 0.0 && norm.is_finite() {
        Some(v / norm)
    } else {
        None
    }
}

/// Test the ball against a player and compute the response velocity
pub fn ball_player_contact(ball: &Entity, player: &Entity) -> ContactOutcome {
    // Points from the ball to the player
    let dv = player.pos - ball.pos;
    let distance = dv.length();

    if distance > player.radius + ball.radius {
        return ContactOutcome::Apart;
    }

    // Top of the ball still below the player's center
    if ball.pos.y + ball.radius < player.pos.y {
        return ContactOutcome::PassedUnder;
    }

    let Some(dir) = l1_normalize(dv) else {
        return ContactOutcome::Concentric;
    };

    let speed = (ball.vel + player.vel).length();
    ContactOutcome::Hit(-dir * speed)
}
