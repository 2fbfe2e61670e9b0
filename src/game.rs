//! Application context
//!
//! One `Game` owns everything a running match needs: configuration, the
//! physics world, key bindings, pending input and the render backend. The
//! driver loop feeds it key events and calls [`Game::frame`] once per tick.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::input::{Controller, InputEvent, InputQueue, KeyBindings};
use crate::renderer::{Renderer, render_world};
use crate::sim::{Color, PhysicsWorld};

/// Who joined, in join order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub color: Color,
}

pub struct Game<R: Renderer> {
    config: GameConfig,
    world: PhysicsWorld,
    players: Vec<PlayerInfo>,
    controllers: Vec<Controller>,
    bindings: KeyBindings,
    input: InputQueue,
    renderer: R,
}

impl<R: Renderer> Game<R> {
    /// Start a session with the default key layouts. The config is
    /// validated before anything is built.
    pub fn new(config: GameConfig, renderer: R) -> Result<Self, ConfigError> {
        Self::with_bindings(config, renderer, KeyBindings::default())
    }

    pub fn with_bindings(
        config: GameConfig,
        renderer: R,
        bindings: KeyBindings,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            world: PhysicsWorld::try_new(config.clone())?,
            config,
            players: Vec::new(),
            controllers: Vec::new(),
            bindings,
            input: InputQueue::new(),
            renderer,
        })
    }

    /// Spawn a player, give it the next free key layout and return its controller
    pub fn add_player(&mut self, color: impl Into<Color>) -> Controller {
        let color = color.into();
        let name = format!("Player{}", self.players.len());
        let id = self.world.add_player(color.clone());
        let controller = Controller::new(id, &self.config);

        match self.bindings.assign(&controller) {
            Some(layout) => log::info!(
                "{} ({}) joined on keys {}/{}/{}/{}",
                name,
                color.name(),
                layout.left,
                layout.right,
                layout.jump,
                layout.down
            ),
            None => log::warn!("{} ({}) joined without a free key layout", name, color.name()),
        }

        self.players.push(PlayerInfo { name, color });
        self.controllers.push(controller);

        if self.can_start() {
            log::info!("{} players present, match can start", self.players.len());
        }
        controller
    }

    pub fn can_start(&self) -> bool {
        self.world.can_start()
    }

    /// Route a raw key to its player. Unbound keys are ignored.
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        self.bindings.key_event(key, pressed, &mut self.input)
    }

    /// Queue an event directly (bots, replays)
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn input_mut(&mut self) -> &mut InputQueue {
        &mut self.input
    }

    /// Read the world while queueing input, e.g. for bots
    pub fn world_and_input(&mut self) -> (&PhysicsWorld, &mut InputQueue) {
        (&self.world, &mut self.input)
    }

    /// One tick: apply queued input, step the physics, draw
    pub fn frame(&mut self, dt: f32) {
        self.apply_input();
        self.world.update(dt);
        render_world(&self.world, &mut self.renderer);
    }

    fn apply_input(&mut self) {
        for event in self.input.drain() {
            let Some(controller) = self.controllers.get(event.player.0) else {
                log::warn!("dropping input for unknown player {}", event.player.0);
                continue;
            };
            if let Some(entity) = self.world.player_mut(event.player) {
                controller.apply(entity, event.action, event.pressed);
            }
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn players(&self) -> &[PlayerInfo] {
        &self.players
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
