//! Ambient conditions the disc flies through.

use crate::Vector3r;
use serde::{Deserialize, Serialize};

/// Sea-level air density (kg/m³).
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Standard gravity used by default (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Air and gravity, read-only for the lifetime of an evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    /// Air density (kg/m³).
    pub air_density: f64,
    /// Gravitational acceleration magnitude (m/s²).
    pub g: f64,
    /// Unit vector gravity points along, world frame.
    pub gravity_direction: Vector3r,
}

impl Environment {
    pub fn new(air_density: f64, g: f64, gravity_direction: Vector3r) -> Self {
        Self {
            air_density,
            g,
            gravity_direction,
        }
    }

    /// Gravitational acceleration as a vector (m/s²).
    pub fn gravity(&self) -> Vector3r {
        self.gravity_direction * self.g
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY_SEA_LEVEL,
            g: GRAVITY,
            gravity_direction: Vector3r::new(0.0, 0.0, -1.0),
        }
    }
}
