//! Physics world and the per-tick update
//!
//! All gameplay physics lives here. The update is a total function of the
//! current state, the tick delta and the configuration:
//! - Players are integrated and pinned to the ground plane
//! - The ball is integrated, bounced off the walls and slowed by air
//! - Ball/player contacts are resolved in join order

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, WallHits, air_drag};
use super::collision::{ContactOutcome, ball_player_contact};
use super::entity::{Color, Entity};
use crate::config::{ConfigError, ContactResolution, GameConfig};
use crate::consts::{BALL_COLOR, BALL_SPAWN_X};

/// Index of a player in join order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

/// Read-only copy of the world for observers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub arena: Arena,
    pub ball: Entity,
    pub players: Vec<Entity>,
    pub last_wall_hits: WallHits,
}

/// Owns the court, the ball and every player
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    config: GameConfig,
    arena: Arena,
    ball: Entity,
    /// Join order, stable for the whole session
    players: Vec<Entity>,
    tick: u64,
    last_wall_hits: WallHits,
    /// Scratch buffer for accumulated contact responses
    responses: Vec<Vec2>,
}

impl PhysicsWorld {
    /// Build a world from `config`, which is expected to have passed
    /// [`GameConfig::validate`]. Use [`PhysicsWorld::try_new`] for untrusted
    /// input.
    pub fn new(config: GameConfig) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut ball = Entity::new(Color::new(BALL_COLOR), config.ball_radius);
        ball.pos.x = BALL_SPAWN_X;

        Self {
            config,
            arena,
            ball,
            players: Vec::new(),
            tick: 0,
            last_wall_hits: WallHits::default(),
            responses: Vec::new(),
        }
    }

    /// Validate `config` and build a world from it
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Spawn a player at the shared spawn point
    pub fn add_player(&mut self, color: Color) -> PlayerId {
        let id = PlayerId(self.players.len());
        self.players
            .push(Entity::new(color, self.config.player_radius));
        id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn ball(&self) -> &Entity {
        &self.ball
    }

    /// Direct ball access for scripted setups (serves, tests)
    pub fn ball_mut(&mut self) -> &mut Entity {
        &mut self.ball
    }

    pub fn players(&self) -> &[Entity] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Entity> {
        self.players.get(id.0)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Entity> {
        self.players.get_mut(id.0)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Walls the ball touched during the most recent update
    pub fn last_wall_hits(&self) -> WallHits {
        self.last_wall_hits
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            arena: self.arena,
            ball: self.ball.clone(),
            players: self.players.clone(),
            last_wall_hits: self.last_wall_hits,
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            // No time passed: nothing moves, bounces or collides
            log::debug!("tick {}: skipping step for delta {}", self.tick, dt);
            self.tick += 1;
            return;
        }
        let gravity = self.config.gravity;

        for player in &mut self.players {
            player.integrate(dt, gravity);
            player.clamp_to_ground();
        }

        self.ball.integrate(dt, gravity);

        let hits = self.arena.bounce(&mut self.ball);
        self.ball.vel.x = air_drag(self.ball.vel.x, self.config.ball_air_resistance * dt);
        if hits.any() {
            self.ball.vel *= self.config.restitution();
        }
        self.last_wall_hits = hits;

        self.resolve_contacts();

        self.tick += 1;
    }

    fn resolve_contacts(&mut self) {
        match self.config.contact_resolution {
            ContactResolution::LastContactWins => {
                for (i, player) in self.players.iter().enumerate() {
                    match ball_player_contact(&self.ball, player) {
                        ContactOutcome::Hit(vel) => self.ball.vel = vel,
                        ContactOutcome::Concentric => {
                            log::debug!("tick {}: ball concentric with player {}", self.tick, i)
                        }
                        ContactOutcome::Apart | ContactOutcome::PassedUnder => {}
                    }
                }
            }
            ContactResolution::Accumulate => {
                self.responses.clear();
                for (i, player) in self.players.iter().enumerate() {
                    match ball_player_contact(&self.ball, player) {
                        ContactOutcome::Hit(vel) => self.responses.push(vel),
                        ContactOutcome::Concentric => {
                            log::debug!("tick {}: ball concentric with player {}", self.tick, i)
                        }
                        ContactOutcome::Apart | ContactOutcome::PassedUnder => {}
                    }
                }
                if !self.responses.is_empty() {
                    let sum: Vec2 = self.responses.iter().copied().sum();
                    self.ball.vel = sum / self.responses.len() as f32;
                }
            }
        }
    }

    /// A match needs at least two players
    pub fn can_start(&self) -> bool {
        self.players.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;
    /// Small enough that contact geometry barely moves during the step
    const SHORT_DT: f32 = 1e-4;

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(GameConfig::default())
    }

    #[test]
    fn test_spawn_layout() {
        let mut w = world();
        assert_eq!(w.ball().pos, Vec2::new(20.0, 200.0));
        assert_eq!(w.ball().radius, 20.0);
        assert_eq!(w.ball().color.name(), "green");

        let id = w.add_player("red".into());
        assert_eq!(id, PlayerId(0));
        let p = w.player(id).unwrap();
        assert_eq!(p.pos, Vec2::new(200.0, 200.0));
        assert_eq!(p.radius, 50.0);
    }

    #[test]
    fn test_try_new_validates_config() {
        assert!(PhysicsWorld::try_new(GameConfig::default()).is_ok());

        let config = GameConfig {
            ball_radius: -1.0,
            ..Default::default()
        };
        let err = PhysicsWorld::try_new(config).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ball_radius", .. }));
    }

    #[test]
    fn test_can_start_needs_two_players() {
        let mut w = world();
        assert!(!w.can_start());
        w.add_player("red".into());
        assert!(!w.can_start());
        w.add_player("blue".into());
        assert!(w.can_start());
    }

    #[test]
    fn test_ball_free_fall_matches_euler_accumulation() {
        let mut w = world();
        // Keep the ball away from the left wall
        w.ball_mut().pos = Vec2::new(400.0, 380.0);

        let mut y = 380.0f32;
        let mut vy = 0.0f32;
        for _ in 0..60 {
            w.update(DT);
            vy -= 980.0 * DT;
            y += vy * DT;
            if y <= 20.0 {
                break;
            }
            assert_eq!(w.ball().pos.y, y);
            assert_eq!(w.ball().vel.y, vy);
        }
    }

    #[test]
    fn test_ball_starting_at_left_wall_falls_like_euler() {
        // Ball spawns touching the left wall: every tick is a wall hit that
        // scales velocity by 0.9 after the step
        let mut w = world();
        let mut y = 200.0f32;
        let mut vy = 0.0f32;
        for _ in 0..60 {
            w.update(DT);
            vy -= 980.0 * DT;
            y += vy * DT;
            vy *= 0.9;
            assert!((w.ball().pos.y - y).abs() < 1e-3);
            assert!((w.ball().vel.y - vy).abs() < 1e-3);
            assert_eq!(w.ball().pos.x, 20.0);
        }
        assert!(w.last_wall_hits().left);
    }

    #[test]
    fn test_players_land_and_stay_grounded() {
        let mut w = world();
        let id = w.add_player("red".into());
        for _ in 0..120 {
            w.update(DT);
        }
        let p = w.player(id).unwrap();
        assert_eq!(p.pos.y, 0.0);
        assert_eq!(p.vel.y, 0.0);
        assert!(p.is_grounded());
    }

    #[test]
    fn test_bounce_loses_energy() {
        let mut w = world();
        w.ball_mut().pos = Vec2::new(400.0, 21.0);
        w.ball_mut().vel = Vec2::new(0.0, -600.0);
        w.update(DT);
        assert!(w.last_wall_hits().floor);
        let vy_expected = (600.0 + 980.0 * DT) * 0.9;
        assert!((w.ball().vel.y - vy_expected).abs() < 1e-3);
        assert_eq!(w.ball().pos.y, 20.0);
    }

    #[test]
    fn test_air_resistance_only_horizontal() {
        let mut w = world();
        w.ball_mut().pos = Vec2::new(400.0, 200.0);
        w.ball_mut().vel = Vec2::new(100.0, 0.0);
        w.update(0.1);
        assert!((w.ball().vel.x - 97.0).abs() < 1e-4);
        assert!((w.ball().vel.y + 98.0).abs() < 1e-3);
    }

    #[test]
    fn test_single_contact_reflects_ball() {
        let mut w = world();
        let id = w.add_player("red".into());
        {
            let p = w.player_mut(id).unwrap();
            p.pos = Vec2::new(400.0, 0.0);
            p.clamp_to_ground();
        }
        // Ball just above and left of the player
        w.ball_mut().pos = Vec2::new(370.0, 45.0);
        w.ball_mut().vel = Vec2::new(0.0, -200.0);

        w.update(SHORT_DT);
        let ball = w.ball();
        // Contact is judged after the ball moves: dv ~ (30, -45), pushed to the upper left
        let vy = -200.0 - 980.0 * SHORT_DT;
        let dv = Vec2::new(400.0, 0.0) - Vec2::new(370.0, 45.0 + vy * SHORT_DT);
        let expected = -dv / (dv.x.abs() + dv.y.abs()) * vy.abs();
        assert!((ball.vel - expected).length() < 1e-3);
        assert!(ball.vel.x < 0.0 && ball.vel.y > 0.0);
    }

    #[test]
    fn test_multiple_contacts_resolution_modes() {
        let setup = |mode| {
            let config = GameConfig {
                contact_resolution: mode,
                ..Default::default()
            };
            let mut w = PhysicsWorld::new(config);
            for x in [350.0, 450.0] {
                let id = w.add_player("red".into());
                let p = w.player_mut(id).unwrap();
                p.pos = Vec2::new(x, 0.0);
                p.clamp_to_ground();
            }
            w.ball_mut().pos = Vec2::new(400.0, 40.0);
            w.ball_mut().vel = Vec2::new(0.0, -100.0);
            w.update(SHORT_DT);
            w.ball().vel
        };

        // dv ~ (∓50, -40) for the two players once the ball has moved
        let vy = -100.0 - 980.0 * SHORT_DT;
        let y = 40.0 + vy * SHORT_DT;
        let l1 = 50.0 + y;
        let first = Vec2::new(50.0, y) / l1 * vy.abs();

        // Symmetric contacts cancel sideways
        let avg = setup(ContactResolution::Accumulate);
        assert!(avg.x.abs() < 1e-4);
        assert!((avg.y - first.y).abs() < 1e-3);

        // Second player overwrites, starting from the first response
        let last = setup(ContactResolution::LastContactWins);
        let expected = Vec2::new(-50.0, y) / l1 * first.length();
        assert!((last - expected).length() < 1e-3);
    }

    #[test]
    fn test_concentric_contact_does_not_poison_ball() {
        let mut w = world();
        let id = w.add_player("red".into());
        // Same start and velocity keep both centres together through the step
        {
            let p = w.player_mut(id).unwrap();
            p.pos = Vec2::new(400.0, 200.0);
            p.vel = Vec2::new(5.0, 5.0);
        }
        w.ball_mut().pos = Vec2::new(400.0, 200.0);
        w.ball_mut().vel = Vec2::new(5.0, 5.0);
        w.update(SHORT_DT);
        assert_eq!(w.ball().pos, w.player(id).unwrap().pos);

        let expected = Vec2::new(air_drag(5.0, 30.0 * SHORT_DT), 5.0 - 980.0 * SHORT_DT);
        assert!(w.ball().vel.is_finite());
        assert!((w.ball().vel - expected).length() < 1e-4);
    }

    #[test]
    fn test_zero_and_negative_delta() {
        let mut w = world();
        w.add_player("red".into());
        w.ball_mut().pos = Vec2::new(400.0, 200.0);
        w.ball_mut().vel = Vec2::new(10.0, 10.0);
        let before = w.snapshot();

        w.update(0.0);
        w.update(-0.5);
        w.update(f32::NAN);

        let after = w.snapshot();
        assert_eq!(after.ball, before.ball);
        assert_eq!(after.players, before.players);
        assert_eq!(after.tick, 3);
    }

    #[test]
    fn test_zero_delta_leaves_ball_on_wall_alone() {
        let mut w = world();
        // Touching the left wall while moving away from it
        w.ball_mut().pos = Vec2::new(20.0, 200.0);
        w.ball_mut().vel = Vec2::new(100.0, 0.0);

        w.update(0.0);
        w.update(-1.0);

        assert_eq!(w.ball().pos, Vec2::new(20.0, 200.0));
        assert_eq!(w.ball().vel, Vec2::new(100.0, 0.0));
        assert!(!w.last_wall_hits().any());
    }

    #[test]
    fn test_zero_delta_does_not_strike_overlapping_ball() {
        let mut w = world();
        let id = w.add_player("red".into());
        {
            let p = w.player_mut(id).unwrap();
            p.pos = Vec2::new(400.0, 0.0);
            p.clamp_to_ground();
            p.vel.x = 300.0;
        }
        // Resting ball overlapping the running player
        w.ball_mut().pos = Vec2::new(370.0, 45.0);
        w.ball_mut().vel = Vec2::ZERO;

        for _ in 0..5 {
            w.update(0.0);
        }
        assert_eq!(w.ball().vel, Vec2::ZERO);
        assert_eq!(w.ball().pos, Vec2::new(370.0, 45.0));
        assert_eq!(w.player(id).unwrap().pos, Vec2::new(400.0, 0.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut w = world();
        w.add_player("red".into());
        w.update(DT);
        let json = serde_json::to_string(&w.snapshot()).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, w.snapshot());
    }

    fn finite_velocity() -> impl Strategy<Value = Vec2> {
        (-1500.0f32..1500.0, -1500.0f32..1500.0).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn prop_ball_stays_in_arena(
            x in 20.0f32..780.0,
            y in 20.0f32..380.0,
            vel in finite_velocity(),
            ticks in 1usize..240,
        ) {
            let mut w = world();
            w.ball_mut().pos = Vec2::new(x, y);
            w.ball_mut().vel = vel;
            for _ in 0..ticks {
                w.update(DT);
                prop_assert!(w.arena().contains(w.ball()));
            }
        }

        #[test]
        fn prop_players_never_below_ground(
            x in 0.0f32..800.0,
            y in 0.0f32..400.0,
            vel in finite_velocity(),
            ticks in 1usize..240,
        ) {
            let mut w = world();
            let id = w.add_player("red".into());
            {
                let p = w.player_mut(id).unwrap();
                p.pos = Vec2::new(x, y);
                p.vel = vel;
            }
            for _ in 0..ticks {
                w.update(DT);
                let p = w.player(id).unwrap();
                prop_assert!(p.pos.y >= 0.0);
                if p.pos.y == 0.0 {
                    prop_assert_eq!(p.vel.y, 0.0);
                }
            }
        }

        #[test]
        fn prop_air_resistance_keeps_sign(
            vx in -2000.0f32..2000.0,
            dt in 0.0f32..0.01,
        ) {
            // Ball centered with no contacts: only drag touches vx
            let mut w = world();
            w.ball_mut().pos = Vec2::new(400.0, 300.0);
            w.ball_mut().vel = Vec2::new(vx, 0.0);
            w.update(dt);
            let after = w.ball().vel.x;
            prop_assert!(after * vx >= 0.0);
            prop_assert!(after.abs() <= vx.abs());
        }

        #[test]
        fn prop_single_contact_speed(
            bvel in finite_velocity(),
            pvel in finite_velocity(),
            offset_x in -60.0f32..60.0,
            offset_y in 1.0f32..60.0,
        ) {
            let mut w = world();
            let id = w.add_player("red".into());
            {
                let p = w.player_mut(id).unwrap();
                p.pos = Vec2::new(400.0, 100.0);
                p.vel = pvel;
            }
            let ball_pos = Vec2::new(400.0 + offset_x, 100.0 + offset_y);
            w.ball_mut().pos = ball_pos;
            w.ball_mut().vel = bvel;

            // Where both bodies end up after one short Euler step
            let gravity = Vec2::new(0.0, -980.0 * SHORT_DT);
            let pvel = pvel + gravity;
            let player_pos = Vec2::new(400.0, 100.0) + pvel * SHORT_DT;
            let mut bvel = bvel + gravity;
            let ball_pos = ball_pos + bvel * SHORT_DT;
            bvel.x = air_drag(bvel.x, 30.0 * SHORT_DT);
            prop_assume!(ball_pos.distance(player_pos) <= 69.0);

            w.update(SHORT_DT);

            let dv = player_pos - ball_pos;
            let l1 = dv.x.abs() + dv.y.abs();
            let expected = -(dv / l1) * (bvel + pvel).length();
            prop_assert!((w.ball().vel - expected).length() < 1e-2);
        }
    }
}
