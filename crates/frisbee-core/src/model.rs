//! Physical description of the disc.

use crate::coefficients::{AeroCoefficients, LinearCoefficients};
use crate::error::{EomError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Default disc diameter (m), a regulation ultimate disc.
pub const DIAMETER: f64 = 0.27;

/// Default disc mass (kg).
pub const MASS: f64 = 0.175;

/// Mass, geometry, inertia, damping and the coefficient model of a disc.
///
/// Inertia is about the principal axes of an axisymmetric body: `i_zz` about
/// the spin axis, `i_xx` about any transverse axis. The damping factors are
/// multiplied into the torque amplitude, so negative values decay the
/// angular velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model<C = LinearCoefficients> {
    pub mass: f64,
    pub area: f64,
    pub diameter: f64,
    pub i_xx: f64,
    pub i_zz: f64,
    pub dampening_factor: f64,
    pub dampening_z: f64,
    pub coefficients: C,
}

impl<C: Default> Default for Model<C> {
    fn default() -> Self {
        Self {
            mass: MASS,
            area: PI * (DIAMETER / 2.0).powi(2),
            diameter: DIAMETER,
            i_xx: 0.001,
            i_zz: 0.002,
            dampening_factor: -1e-4,
            dampening_z: -1e-5,
            coefficients: C::default(),
        }
    }
}

impl<C: AeroCoefficients> Model<C> {
    /// Swap the coefficient model, keeping the physical parameters.
    pub fn with_coefficients<D: AeroCoefficients>(self, coefficients: D) -> Model<D> {
        Model {
            mass: self.mass,
            area: self.area,
            diameter: self.diameter,
            i_xx: self.i_xx,
            i_zz: self.i_zz,
            dampening_factor: self.dampening_factor,
            dampening_z: self.dampening_z,
            coefficients,
        }
    }

    /// Check the parameters every evaluation divides by or scales with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("mass", self.mass),
            ("area", self.area),
            ("diameter", self.diameter),
            ("i_xx", self.i_xx),
            ("i_zz", self.i_zz),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(EomError::InvalidModel { field, value });
            }
        }
        for (field, value) in [
            ("dampening_factor", self.dampening_factor),
            ("dampening_z", self.dampening_z),
        ] {
            if !value.is_finite() {
                return Err(EomError::InvalidModel { field, value });
            }
        }
        Ok(())
    }

    /// Spin angular momentum about the symmetry axis for a given spin rate.
    pub fn spin_momentum(&self, spin: f64) -> f64 {
        self.i_zz * spin
    }
}
