//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circular sector between two angles
pub fn sector(
    center: Vec2,
    radius: f32,
    theta_start: f32,
    theta_end: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let segments = segments.max(1);
    let span = theta_end - theta_start;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = theta_start + (i as f32 / segments as f32) * span;
        let theta2 = theta_start + ((i + 1) as f32 / segments as f32) * span;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    sector(center, radius, 0.0, 2.0 * PI, color, segments)
}

/// Upper half of a circle (y-up), the flat side resting on `center.y`
pub fn dome(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    sector(center, radius, 0.0, PI, color, segments)
}
