//! Input events buffered between ticks
//!
//! Key events can arrive at any time; they are queued in arrival order and
//! drained once at the start of the next tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::controller::Action;
use crate::sim::PlayerId;

/// One press or release for one player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    pub player: PlayerId,
    pub action: Action,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(player: PlayerId, action: Action) -> Self {
        Self {
            player,
            action,
            pressed: true,
        }
    }

    pub fn release(player: PlayerId, action: Action) -> Self {
        Self {
            player,
            action,
            pressed: false,
        }
    }
}

/// FIFO of pending input events
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every pending event, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}
