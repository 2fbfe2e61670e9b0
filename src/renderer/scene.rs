//! Scene-graph backend
//!
//! Emits one node per entity for a 3D scene. The court lies in the z = 0
//! plane with y up, so world coordinates carry over unchanged.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::Renderer;
use crate::sim::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Hemisphere resting on its flat side
    Player,
    /// Full sphere
    Ball,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub translation: Vec3,
    /// Uniform scale of a unit mesh
    pub scale: f32,
    pub color: [f32; 4],
}

impl SceneNode {
    fn from_entity(kind: NodeKind, entity: &Entity) -> Self {
        Self {
            kind,
            translation: entity.pos.extend(0.0),
            scale: entity.radius,
            color: entity.color.rgba(),
        }
    }
}

#[derive(Default)]
pub struct SceneRenderer {
    pending: Vec<SceneNode>,
    nodes: Vec<SceneNode>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes of the most recently presented frame
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }
}

impl Renderer for SceneRenderer {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn submit_player(&mut self, player: &Entity) {
        self.pending.push(SceneNode::from_entity(NodeKind::Player, player));
    }

    fn submit_ball(&mut self, ball: &Entity) {
        self.pending.push(SceneNode::from_entity(NodeKind::Ball, ball));
    }

    fn present(&mut self) {
        self.nodes = std::mem::take(&mut self.pending);
    }
}
