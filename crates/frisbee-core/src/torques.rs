//! Moments, precession and angular acceleration.
//!
//! The aerodynamic pitch and roll moments are not integrated as angular
//! acceleration. For a fast-spinning disc a transverse torque `M` turns the
//! spin axis at rate `M / (I_zz · ω_z)`, so the moments are folded into the
//! orientation rate as precession. Angular acceleration only carries damping
//! and the torque-free wobble of an axisymmetric body.

use crate::coefficients::AeroCoefficients;
use crate::environment::Environment;
use crate::error::{EomError, Result};
use crate::frame::AeroFrame;
use crate::kinematics::quaternion_rate;
use crate::model::Model;
use crate::Vector3r;
use nalgebra::Quaternion;
use serde::Serialize;

/// Spin rates (rad/s) at or below this cannot carry precession.
pub const SPIN_EPSILON: f64 = 1e-12;

/// Everything the rotational stage produces for one state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Torques {
    /// `½ ρ (v·v) d A`, multiplied by each moment coefficient.
    pub torque_amplitude: f64,
    /// `C_y · τ · xhat` (N·m).
    pub roll_moment: Vector3r,
    /// `C_x · τ · yhat` (N·m).
    pub pitch_moment: Vector3r,
    /// Moments divided by spin angular momentum (rad/s).
    pub precession_rate: Vector3r,
    /// Precession plus wobble; drives the orientation rate (rad/s).
    pub angular_rate: Vector3r,
    /// Rate of change of (dphi, dtheta, dgamma) (rad/s²).
    pub angular_acceleration: Vector3r,
    /// Quaternion derivative, scalar last.
    pub orientation_rate: Quaternion<f64>,
}

/// Compute moments, precession, angular acceleration and orientation rate.
///
/// Needs a non-zero spin rate (`angular_velocity.z`): the moments are
/// divided by the spin angular momentum.
pub fn compute_torques<C: AeroCoefficients>(
    env: &Environment,
    model: &Model<C>,
    frame: &AeroFrame,
    orientation: &Quaternion<f64>,
    velocity: &Vector3r,
    angular_velocity: &Vector3r,
) -> Result<Torques> {
    let spin = angular_velocity.z;
    if spin.abs() <= SPIN_EPSILON {
        return Err(EomError::ZeroSpin { spin });
    }

    let aoa = frame.angle_of_attack;
    let speed = velocity.norm();
    let coeffs = &model.coefficients;

    let torque_amplitude =
        0.5 * env.air_density * velocity.dot(velocity) * model.diameter * model.area;

    let roll_moment = frame.xhat * (coeffs.c_y(aoa) * torque_amplitude);
    let pitch_moment = frame.yhat * (coeffs.c_x(aoa, speed, spin) * torque_amplitude);

    let precession_rate = (roll_moment + pitch_moment) / model.spin_momentum(spin);
    let angular_rate = precession_rate + frame.wobble;

    let angular_acceleration = wobble_damping(model, angular_velocity, torque_amplitude);
    let orientation_rate = quaternion_rate(orientation, &angular_rate);

    Ok(Torques {
        torque_amplitude,
        roll_moment,
        pitch_moment,
        precession_rate,
        angular_rate,
        angular_acceleration,
        orientation_rate,
    })
}

/// Angular acceleration from damping and gyroscopic self-coupling.
///
/// ```text
/// damping = τ · (wx·k/I_xx, wy·k/I_xx, wz·k_z/I_zz)
/// wobble  = 2·wz·(I_zz − I_xx)/I_xx · (−wy, wx, 0)
/// ```
pub fn wobble_damping<C>(
    model: &Model<C>,
    angular_velocity: &Vector3r,
    torque_amplitude: f64,
) -> Vector3r {
    let (wx, wy, wz) = (angular_velocity.x, angular_velocity.y, angular_velocity.z);
    let i_xx = model.i_xx;
    let i_zz = model.i_zz;

    let damping = Vector3r::new(
        wx * model.dampening_factor / i_xx,
        wy * model.dampening_factor / i_xx,
        wz * model.dampening_z / i_zz,
    ) * torque_amplitude;

    let coupling = 2.0 * wz * (i_zz - i_xx) / i_xx;
    let precession = Vector3r::new(-wy, wx, 0.0) * coupling;

    damping + precession
}
