//! Game tuning
//!
//! Loaded once at startup and treated as immutable for the session.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::MAX_FRAME_DT;

/// How the ball resolves touching several players in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactResolution {
    /// Each contact overwrites the ball velocity in join order
    LastContactWins,
    /// Every contact responds to the pre-contact ball velocity; the results are averaged
    #[default]
    Accumulate,
}

impl ContactResolution {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactResolution::LastContactWins => "last_contact_wins",
            ContactResolution::Accumulate => "accumulate",
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Horizontal player speed
    pub player_speed: f32,
    /// Vertical launch speed of a jump
    pub jump_speed: f32,
    pub player_radius: f32,
    /// Simulation ticks per second
    pub fps: u32,
    /// Horizontal ball deceleration (units/s²)
    pub ball_air_resistance: f32,
    /// Fraction of ball velocity lost on a wall bounce, in [0, 1]
    pub ball_collision_percentage: f32,
    pub ball_radius: f32,
    pub arena_width: f32,
    pub arena_height: f32,
    pub contact_resolution: ContactResolution,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 980.0,
            player_speed: 300.0,
            jump_speed: 500.0,
            player_radius: 50.0,
            fps: 60,
            ball_air_resistance: 30.0,
            ball_collision_percentage: 0.1,
            ball_radius: 20.0,
            arena_width: 800.0,
            arena_height: 400.0,
            contact_resolution: ContactResolution::default(),
        }
    }
}

/// Reasons a configuration is refused
#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON, or fields of the wrong type
    Parse(serde_json::Error),
    /// A field holds a value the simulation cannot run with
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "malformed config: {}", e),
            ConfigError::Invalid { field, reason } => {
                write!(f, "invalid config field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Fixed simulation timestep derived from `fps`
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Delta the driver feeds each frame: the tick, capped at [`MAX_FRAME_DT`]
    pub fn frame_dt(&self) -> f32 {
        self.tick_dt().min(MAX_FRAME_DT)
    }

    /// Frames of [`GameConfig::frame_dt`] covering `seconds` of simulated time
    pub fn frames_for(&self, seconds: f32) -> u64 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        (seconds / self.frame_dt()).round() as u64
    }

    /// Velocity multiplier applied after a wall bounce
    pub fn restitution(&self) -> f32 {
        1.0 - self.ball_collision_percentage
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("gravity", self.gravity)?;
        non_negative("player_speed", self.player_speed)?;
        non_negative("jump_speed", self.jump_speed)?;
        positive("player_radius", self.player_radius)?;
        non_negative("ball_air_resistance", self.ball_air_resistance)?;
        positive("ball_radius", self.ball_radius)?;
        positive("arena_width", self.arena_width)?;
        positive("arena_height", self.arena_height)?;

        if self.fps == 0 {
            return Err(ConfigError::Invalid {
                field: "fps",
                reason: "must be at least 1",
            });
        }
        let pct = self.ball_collision_percentage;
        if !pct.is_finite() || !(0.0..=1.0).contains(&pct) {
            return Err(ConfigError::Invalid {
                field: "ball_collision_percentage",
                reason: "must lie in [0, 1]",
            });
        }
        if 2.0 * self.ball_radius > self.arena_width.min(self.arena_height) {
            return Err(ConfigError::Invalid {
                field: "ball_radius",
                reason: "ball does not fit inside the arena",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a finite number greater than zero",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a finite, non-negative number",
        })
    }
}
