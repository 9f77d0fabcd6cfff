//! Lift, side, drag and gravity.

use crate::coefficients::AeroCoefficients;
use crate::environment::Environment;
use crate::error::{EomError, Result};
use crate::frame::{AeroFrame, SPEED_EPSILON};
use crate::model::Model;
use crate::Vector3r;
use serde::Serialize;

/// Forces on the disc (N) and the resulting linear acceleration (m/s²).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Forces {
    /// `½ ρ (v·v) A`, multiplied by each force coefficient.
    pub force_amplitude: f64,
    pub lift: Vector3r,
    pub side: Vector3r,
    pub drag: Vector3r,
    pub gravity: Vector3r,
    pub total: Vector3r,
    pub acceleration: Vector3r,
}

/// Accumulate the four forces acting on the disc.
///
/// Lift acts along `vhat × yhat`, side force along `yhat` and drag against
/// the velocity. The side coefficient sees speed and spin (`dgamma`).
pub fn compute_forces<C: AeroCoefficients>(
    env: &Environment,
    model: &Model<C>,
    frame: &AeroFrame,
    velocity: &Vector3r,
    angular_velocity: &Vector3r,
) -> Result<Forces> {
    let speed = velocity.norm();
    if speed <= SPEED_EPSILON {
        return Err(EomError::ZeroVelocity { speed });
    }
    let vhat = velocity / speed;
    let aoa = frame.angle_of_attack;
    let coeffs = &model.coefficients;

    let force_amplitude = 0.5 * env.air_density * velocity.dot(velocity) * model.area;

    let lift = vhat.cross(&frame.yhat) * (coeffs.c_lift(aoa) * force_amplitude);
    let side = frame.yhat * (coeffs.c_side(aoa, speed, angular_velocity.z) * force_amplitude);
    let drag = -vhat * (coeffs.c_drag(aoa) * force_amplitude);
    let gravity = env.gravity_direction * (model.mass * env.g);

    let total = lift + side + drag + gravity;

    Ok(Forces {
        force_amplitude,
        lift,
        side,
        drag,
        gravity,
        total,
        acceleration: total / model.mass,
    })
}
