//! Per-player controller
//!
//! A controller never touches the world on its own. It is handed the bound
//! player's entity and only ever writes that entity's velocity.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::sim::{Entity, PlayerId};

/// The four inputs a player has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Left,
    Right,
    Jump,
    Down,
}

/// Input handle bound to one player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controller {
    player: PlayerId,
    player_speed: f32,
    jump_speed: f32,
}

impl Controller {
    pub fn new(player: PlayerId, config: &GameConfig) -> Self {
        Self {
            player,
            player_speed: config.player_speed,
            jump_speed: config.jump_speed,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Releasing zeroes horizontal speed even if the other direction is held
    pub fn left(&self, entity: &mut Entity, pressed: bool) {
        entity.vel.x = if pressed { -self.player_speed } else { 0.0 };
    }

    pub fn right(&self, entity: &mut Entity, pressed: bool) {
        entity.vel.x = if pressed { self.player_speed } else { 0.0 };
    }

    /// Launches on press; release does nothing
    pub fn jump(&self, entity: &mut Entity, pressed: bool) {
        if pressed {
            entity.vel.y = self.jump_speed;
        }
    }

    /// Reserved
    pub fn down(&self, _entity: &mut Entity, _pressed: bool) {}

    pub fn apply(&self, entity: &mut Entity, action: Action, pressed: bool) {
        match action {
            Action::Left => self.left(entity, pressed),
            Action::Right => self.right(entity, pressed),
            Action::Jump => self.jump(entity, pressed),
            Action::Down => self.down(entity, pressed),
        }
    }
}
