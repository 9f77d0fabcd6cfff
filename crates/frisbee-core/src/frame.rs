//! Aerodynamic frame and angle of attack.
//!
//! `zhat` is the disc normal, `xhat` the direction of the in-plane part of
//! the velocity and `yhat = zhat × xhat` completes a right-handed basis.

use crate::error::{EomError, Result};
use crate::Vector3r;
use nalgebra::{Quaternion, UnitQuaternion};
use serde::Serialize;

/// Speeds (m/s) at or below this are treated as zero.
pub const SPEED_EPSILON: f64 = 1e-9;

/// Body-relative aerodynamic quantities for one state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AeroFrame {
    pub xhat: Vector3r,
    pub yhat: Vector3r,
    pub zhat: Vector3r,
    /// Signed angle between velocity and the disc plane (rad).
    pub angle_of_attack: f64,
    /// Transverse angular velocity (dphi, dtheta, 0) rotated into the world frame.
    pub wobble: Vector3r,
    /// Velocity component along `zhat` (m/s).
    pub v_dot_zhat: f64,
    /// Magnitude of the velocity in the disc plane (m/s).
    pub in_plane_speed: f64,
}

/// Resolve the aerodynamic frame of a disc.
///
/// Fails when there is no relative wind or when it blows straight along the
/// disc normal; in both cases `xhat` has no direction.
pub fn resolve(
    orientation: &Quaternion<f64>,
    velocity: &Vector3r,
    angular_velocity: &Vector3r,
) -> Result<AeroFrame> {
    let speed = velocity.norm();
    if speed <= SPEED_EPSILON {
        return Err(EomError::ZeroVelocity { speed });
    }

    let rot = UnitQuaternion::new_unchecked(*orientation).to_rotation_matrix();
    let zhat = rot * Vector3r::z();

    let v_dot_zhat = velocity.dot(&zhat);
    let v_in_plane = velocity - zhat * v_dot_zhat;
    let in_plane_speed = v_in_plane.norm();
    if in_plane_speed <= SPEED_EPSILON {
        return Err(EomError::VelocityAlongNormal { in_plane_speed });
    }

    let xhat = v_in_plane / in_plane_speed;
    let yhat = zhat.cross(&xhat);
    let angle_of_attack = -(v_dot_zhat / in_plane_speed).atan();

    // spin (dgamma) is left out; it enters through the torque stage
    let wobble = rot * Vector3r::new(angular_velocity.x, angular_velocity.y, 0.0);

    Ok(AeroFrame {
        xhat,
        yhat,
        zhat,
        angle_of_attack,
        wobble,
        v_dot_zhat,
        in_plane_speed,
    })
}
