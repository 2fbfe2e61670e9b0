//! Keyboard layouts and their assignment to players
//!
//! Layouts are handed out first come, first served. A key press is routed to
//! the first assigned layout that binds the key.

use serde::{Deserialize, Serialize};

use super::controller::{Action, Controller};
use super::queue::{InputEvent, InputQueue};
use crate::sim::PlayerId;

/// Key names for one player's four actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyLayout {
    pub left: String,
    pub right: String,
    pub down: String,
    pub jump: String,
}

impl KeyLayout {
    pub fn new(left: &str, right: &str, down: &str, jump: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            down: down.to_string(),
            jump: jump.to_string(),
        }
    }

    pub fn arrows() -> Self {
        Self::new("ArrowLeft", "ArrowRight", "ArrowDown", "ArrowUp")
    }

    pub fn wasd() -> Self {
        Self::new("a", "d", "s", "w")
    }

    pub fn ijkl() -> Self {
        Self::new("j", "l", "k", "i")
    }

    pub fn action_for(&self, key: &str) -> Option<Action> {
        if key == self.left {
            Some(Action::Left)
        } else if key == self.right {
            Some(Action::Right)
        } else if key == self.down {
            Some(Action::Down)
        } else if key == self.jump {
            Some(Action::Jump)
        } else {
            None
        }
    }
}

/// Free and assigned keyboard layouts
#[derive(Debug, Clone)]
pub struct KeyBindings {
    free: Vec<KeyLayout>,
    used: Vec<(KeyLayout, PlayerId)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::with_layouts(vec![KeyLayout::arrows(), KeyLayout::wasd(), KeyLayout::ijkl()])
    }
}

impl KeyBindings {
    pub fn with_layouts(layouts: Vec<KeyLayout>) -> Self {
        Self {
            free: layouts,
            used: Vec::new(),
        }
    }

    pub fn has_free(&self) -> bool {
        !self.free.is_empty()
    }

    /// Bind the next free layout to the controller's player
    pub fn assign(&mut self, controller: &Controller) -> Option<&KeyLayout> {
        if self.free.is_empty() {
            return None;
        }
        let layout = self.free.remove(0);
        self.used.push((layout, controller.player()));
        self.used.last().map(|(layout, _)| layout)
    }

    pub fn layout_of(&self, player: PlayerId) -> Option<&KeyLayout> {
        self.used
            .iter()
            .find(|(_, p)| *p == player)
            .map(|(layout, _)| layout)
    }

    pub fn resolve(&self, key: &str) -> Option<(PlayerId, Action)> {
        self.used
            .iter()
            .find_map(|(layout, player)| layout.action_for(key).map(|a| (*player, a)))
    }

    /// Queue the event for a bound key. Returns false for unbound keys.
    pub fn key_event(&self, key: &str, pressed: bool, queue: &mut InputQueue) -> bool {
        match self.resolve(key) {
            Some((player, action)) => {
                queue.push(InputEvent {
                    player,
                    action,
                    pressed,
                });
                true
            }
            None => false,
        }
    }
}
