//! Render backends
//!
//! Renderers only read entity state. A frame is `clear`, every player in
//! join order, the ball, then `present`.

pub mod mesh;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshRenderer;
pub use scene::{SceneNode, SceneRenderer};
pub use vertex::Vertex;

use crate::sim::{Entity, PhysicsWorld};

/// What every render backend must support
pub trait Renderer {
    /// Start a new frame
    fn clear(&mut self);
    fn submit_player(&mut self, player: &Entity);
    fn submit_ball(&mut self, ball: &Entity);
    /// Publish the frame built since the last `clear`
    fn present(&mut self);
}

/// Draw the current world state as one frame
pub fn render_world<R: Renderer + ?Sized>(world: &PhysicsWorld, renderer: &mut R) {
    renderer.clear();
    for player in world.players() {
        renderer.submit_player(player);
    }
    renderer.submit_ball(world.ball());
    renderer.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    /// Records the call sequence
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Renderer for Recorder {
        fn clear(&mut self) {
            self.calls.push("clear".into());
        }
        fn submit_player(&mut self, player: &Entity) {
            self.calls.push(format!("player:{}", player.color.name()));
        }
        fn submit_ball(&mut self, ball: &Entity) {
            self.calls.push(format!("ball:{}", ball.color.name()));
        }
        fn present(&mut self) {
            self.calls.push("present".into());
        }
    }

    #[test]
    fn test_frame_order() {
        let mut world = PhysicsWorld::new(GameConfig::default());
        world.add_player("red".into());
        world.add_player("blue".into());

        let mut recorder = Recorder::default();
        render_world(&world, &mut recorder);
        assert_eq!(
            recorder.calls,
            vec!["clear", "player:red", "player:blue", "ball:green", "present"]
        );
    }
}
