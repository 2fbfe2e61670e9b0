//! Rectangular court and ball/wall bounces
//!
//! The court spans [0, width] × [0, height] with y = 0 on the ground and y
//! growing upward.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Fixed play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

/// Which walls the ball touched during one bounce pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallHits {
    pub floor: bool,
    pub ceiling: bool,
    pub left: bool,
    pub right: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.floor || self.ceiling || self.left || self.right
    }

    /// Corner hits count two
    pub fn count(&self) -> u32 {
        [self.floor, self.ceiling, self.left, self.right]
            .iter()
            .filter(|&&hit| hit)
            .count() as u32
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if a body of `radius` at the entity's position lies fully inside
    pub fn contains(&self, entity: &Entity) -> bool {
        let r = entity.radius;
        (r..=self.width - r).contains(&entity.pos.x) && (r..=self.height - r).contains(&entity.pos.y)
    }

    /// Clamp the ball inside the court, reflecting the velocity on every wall
    /// it reached. At most one vertical and one horizontal wall per call.
    pub fn bounce(&self, ball: &mut Entity) -> WallHits {
        let r = ball.radius;
        let mut hits = WallHits::default();

        if ball.pos.y <= r {
            ball.pos.y = r;
            ball.vel.y = -ball.vel.y;
            hits.floor = true;
        } else if ball.pos.y >= self.height - r {
            ball.pos.y = self.height - r;
            ball.vel.y = -ball.vel.y;
            hits.ceiling = true;
        }

        if ball.pos.x <= r {
            ball.pos.x = r;
            ball.vel.x = -ball.vel.x;
            hits.left = true;
        } else if ball.pos.x >= self.width - r {
            ball.pos.x = self.width - r;
            ball.vel.x = -ball.vel.x;
            hits.right = true;
        }

        hits
    }
}

/// Move `vx` toward zero by `amount` without crossing it
pub fn air_drag(vx: f32, amount: f32) -> f32 {
    if vx > 0.0 {
        (vx - amount).max(0.0)
    } else if vx < 0.0 {
        (vx + amount).min(0.0)
    } else {
        vx
    }
}
