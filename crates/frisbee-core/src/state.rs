//! Layout of the 13-component state and derivative vectors.
//!
//! ```text
//! index  0..3   position            (x, y, z)
//!        3..6   velocity            (vx, vy, vz)
//!        6..10  orientation         (qx, qy, qz, qw)   scalar last
//!       10..13  angular velocity    (dphi, dtheta, dgamma)
//! ```
//!
//! The derivative vector uses the same positions: velocity, acceleration,
//! quaternion rate, angular acceleration.

use crate::error::{EomError, Result};
use crate::Vector3r;
use nalgebra::{Quaternion, SVector};

/// Number of components in a state or derivative vector.
pub const STATE_LEN: usize = 13;

pub const POSITION: usize = 0;
pub const VELOCITY: usize = 3;
pub const ORIENTATION: usize = 6;
pub const ANGULAR_VELOCITY: usize = 10;

/// Flat state handed over by the integrator.
pub type StateVector = SVector<f64, STATE_LEN>;

/// Flat derivative handed back to the integrator.
pub type DerivativeVector = SVector<f64, STATE_LEN>;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Kinematic state of the disc.
///
/// `orientation` is expected to be a unit quaternion; keeping it normalized is
/// the integrator's job and nothing here renormalizes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiscState {
    pub position: Vector3r,
    pub velocity: Vector3r,
    pub orientation: Quaternion<f64>,
    /// (dphi, dtheta, dgamma); the last component is the spin rate.
    pub angular_velocity: Vector3r,
}

impl DiscState {
    pub fn from_vector(v: &StateVector) -> Self {
        Self {
            position: v.fixed_rows::<3>(POSITION).into_owned(),
            velocity: v.fixed_rows::<3>(VELOCITY).into_owned(),
            orientation: Quaternion::from(v.fixed_rows::<4>(ORIENTATION).into_owned()),
            angular_velocity: v.fixed_rows::<3>(ANGULAR_VELOCITY).into_owned(),
        }
    }

    /// Unpack a raw slice, rejecting anything that is not 13 long.
    pub fn from_slice(s: &[f64]) -> Result<Self> {
        if s.len() != STATE_LEN {
            return Err(EomError::StateLength { got: s.len() });
        }
        Ok(Self::from_vector(&StateVector::from_column_slice(s)))
    }

    pub fn to_vector(&self) -> StateVector {
        let mut v = StateVector::zeros();
        v.fixed_rows_mut::<3>(POSITION).copy_from(&self.position);
        v.fixed_rows_mut::<3>(VELOCITY).copy_from(&self.velocity);
        v.fixed_rows_mut::<4>(ORIENTATION).copy_from(&self.orientation.coords);
        v.fixed_rows_mut::<3>(ANGULAR_VELOCITY).copy_from(&self.angular_velocity);
        v
    }

    /// Spin rate about the disc normal (rad/s).
    pub fn spin(&self) -> f64 {
        self.angular_velocity.z
    }
}

// ---------------------------------------------------------------------------
// Derivatives
// ---------------------------------------------------------------------------

/// Time derivative of a [`DiscState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Derivatives {
    pub velocity: Vector3r,
    pub acceleration: Vector3r,
    pub orientation_rate: Quaternion<f64>,
    pub angular_acceleration: Vector3r,
}

impl Derivatives {
    pub fn to_vector(&self) -> DerivativeVector {
        let mut d = DerivativeVector::zeros();
        d.fixed_rows_mut::<3>(POSITION).copy_from(&self.velocity);
        d.fixed_rows_mut::<3>(VELOCITY).copy_from(&self.acceleration);
        d.fixed_rows_mut::<4>(ORIENTATION).copy_from(&self.orientation_rate.coords);
        d.fixed_rows_mut::<3>(ANGULAR_VELOCITY).copy_from(&self.angular_acceleration);
        d
    }
}
