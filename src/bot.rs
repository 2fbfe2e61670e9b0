//! Demo bots
//!
//! Seeded stand-ins for human players, used by the headless driver. A bot
//! produces the same key events a person would, through the input queue, so
//! it exercises the exact path real input takes.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::{Action, InputEvent, InputQueue};
use crate::sim::{PhysicsWorld, PlayerId};

/// Horizontal distance under which the bot stops chasing
const DEAD_ZONE: f32 = 15.0;
/// How far above the player the ball may be for a jump to connect
const JUMP_REACH: f32 = 220.0;
/// Chance per tick of doing nothing at all
const IDLE_CHANCE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Still,
    Left,
    Right,
}

pub struct Bot {
    player: PlayerId,
    rng: Pcg32,
    heading: Heading,
}

impl Bot {
    pub fn new(player: PlayerId, seed: u64) -> Self {
        Self {
            player,
            rng: Pcg32::seed_from_u64(seed),
            heading: Heading::Still,
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Look at the world and queue this tick's key events
    pub fn think(&mut self, world: &PhysicsWorld, queue: &mut InputQueue) {
        let Some(me) = world.player(self.player) else {
            return;
        };
        if self.rng.random_bool(IDLE_CHANCE) {
            return;
        }

        let ball = world.ball();
        let dx = ball.pos.x - me.pos.x;

        let wanted = if dx < -DEAD_ZONE {
            Heading::Left
        } else if dx > DEAD_ZONE {
            Heading::Right
        } else {
            Heading::Still
        };
        if wanted != self.heading {
            match self.heading {
                Heading::Left => queue.push(InputEvent::release(self.player, Action::Left)),
                Heading::Right => queue.push(InputEvent::release(self.player, Action::Right)),
                Heading::Still => {}
            }
            match wanted {
                Heading::Left => queue.push(InputEvent::press(self.player, Action::Left)),
                Heading::Right => queue.push(InputEvent::press(self.player, Action::Right)),
                Heading::Still => {}
            }
            self.heading = wanted;
        }

        let dy = ball.pos.y - me.pos.y;
        let close = dx.abs() < me.radius + ball.radius;
        if me.is_grounded() && close && dy > 0.0 && dy < JUMP_REACH && ball.vel.y < 0.0 {
            queue.push(InputEvent::press(self.player, Action::Jump));
            queue.push(InputEvent::release(self.player, Action::Jump));
        }
    }
}
