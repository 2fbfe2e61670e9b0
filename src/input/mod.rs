//! Player input
//!
//! Keys map to actions through [`KeyBindings`], land in the [`InputQueue`],
//! and are applied through each player's [`Controller`] once per tick.

pub mod bindings;
pub mod controller;
pub mod queue;

pub use bindings::{KeyBindings, KeyLayout};
pub use controller::{Action, Controller};
pub use queue::{InputEvent, InputQueue};
