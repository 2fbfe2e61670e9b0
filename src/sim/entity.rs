//! Circular moving bodies (players and the ball)

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SPAWN_X, SPAWN_Y};

/// Ground contact of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Contact {
    /// Falling or rising; gravity applies
    #[default]
    Airborne,
    /// Resting on the ground after a clamp; gravity suspended until lift-off
    Grounded,
}

/// Opaque colour tag used by renderers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub String);

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// RGBA for the named colour (unknown names are grey)
    pub fn rgba(&self) -> [f32; 4] {
        match self.0.to_lowercase().as_str() {
            "red" => [0.9, 0.2, 0.2, 1.0],
            "blue" => [0.2, 0.4, 0.95, 1.0],
            "green" => [0.2, 0.8, 0.3, 1.0],
            "yellow" => [0.95, 0.85, 0.2, 1.0],
            "orange" => [1.0, 0.55, 0.1, 1.0],
            "purple" => [0.6, 0.25, 0.85, 1.0],
            "white" => [1.0, 1.0, 1.0, 1.0],
            "black" => [0.0, 0.0, 0.0, 1.0],
            _ => [0.5, 0.5, 0.5, 1.0],
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::new(name)
    }
}

/// A circular body with explicit Euler motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    pub contact: Contact,
}

impl Entity {
    /// Entity at the shared spawn point, at rest
    pub fn new(color: Color, radius: f32) -> Self {
        Self {
            pos: Vec2::new(SPAWN_X, SPAWN_Y),
            vel: Vec2::ZERO,
            radius,
            color,
            contact: Contact::Airborne,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.contact == Contact::Grounded
    }

    /// Advance by `dt` seconds: gravity while airborne, then position += vel * dt
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        let dt = dt.max(0.0);

        if self.contact == Contact::Airborne {
            self.vel.y -= gravity * dt;
        }
        self.pos += self.vel * dt;

        if self.pos.y > 0.0 {
            self.contact = Contact::Airborne;
        }
    }

    /// Pin to the ground plane if at or below it. Returns true if clamped.
    pub fn clamp_to_ground(&mut self) -> bool {
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = 0.0;
            self.contact = Contact::Grounded;
            true
        } else {
            false
        }
    }
}
