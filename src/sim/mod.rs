//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Time only enters through the tick delta
//! - Stable iteration order (player join order)
//! - No rendering, input or platform dependencies

pub mod arena;
pub mod collision;
pub mod entity;
pub mod world;

pub use arena::{Arena, WallHits, air_drag};
pub use collision::{ContactOutcome, ball_player_contact, l1_normalize};
pub use entity::{Color, Contact, Entity};
pub use world::{PhysicsWorld, PlayerId, WorldSnapshot};
