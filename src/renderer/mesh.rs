//! Flat 2D backend producing triangle lists in screen space
//!
//! Screen space has y pointing down, so world y is flipped against the
//! court height. Players are drawn as domes, the ball as a full disc.

use super::Renderer;
use super::shapes::{circle, dome};
use super::vertex::Vertex;
use crate::sim::Entity;

/// Segments for a full circle; domes use half
pub const CIRCLE_SEGMENTS: u32 = 32;

pub struct MeshRenderer {
    /// Court height, used to flip into screen space
    height: f32,
    building: Vec<Vertex>,
    presented: Vec<Vertex>,
    frames: u64,
}

impl MeshRenderer {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            building: Vec::new(),
            presented: Vec::new(),
            frames: 0,
        }
    }

    /// Vertices of the most recently presented frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    fn to_screen(&self, mut vertices: Vec<Vertex>) -> Vec<Vertex> {
        for v in &mut vertices {
            v.position[1] = self.height - v.position[1];
        }
        vertices
    }
}

impl Renderer for MeshRenderer {
    fn clear(&mut self) {
        self.building.clear();
    }

    fn submit_player(&mut self, player: &Entity) {
        let verts = dome(player.pos, player.radius, player.color.rgba(), CIRCLE_SEGMENTS / 2);
        let verts = self.to_screen(verts);
        self.building.extend(verts);
    }

    fn submit_ball(&mut self, ball: &Entity) {
        let verts = circle(ball.pos, ball.radius, ball.color.rgba(), CIRCLE_SEGMENTS);
        let verts = self.to_screen(verts);
        self.building.extend(verts);
    }

    fn present(&mut self) {
        std::mem::swap(&mut self.presented, &mut self.building);
        self.building.clear();
        self.frames += 1;
        log::trace!("presented {} vertices", self.presented.len());
    }
}
