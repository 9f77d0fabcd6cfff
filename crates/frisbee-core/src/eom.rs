//! Right-hand side of the flight ODE.
//!
//! [`EquationsOfMotion`] holds an [`Environment`] and a [`Model`] and turns a
//! 13-component state into its 13-component time derivative. It keeps no
//! state between calls, so an integrator may call it in any order, as often
//! as it likes, from any trial state.

use crate::coefficients::{AeroCoefficients, LinearCoefficients};
use crate::environment::Environment;
use crate::error::Result;
use crate::forces::{compute_forces, Forces};
use crate::frame::{resolve, AeroFrame};
use crate::model::Model;
use crate::state::{DerivativeVector, Derivatives, DiscState, StateVector};
use crate::torques::{compute_torques, Torques};
use serde::Serialize;

/// All intermediate quantities of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Intermediates {
    pub frame: AeroFrame,
    pub forces: Forces,
    pub torques: Torques,
}

/// Stateless derivative evaluator for a flying disc.
#[derive(Debug, Clone)]
pub struct EquationsOfMotion<C = LinearCoefficients> {
    environment: Environment,
    model: Model<C>,
}

impl Default for EquationsOfMotion {
    fn default() -> Self {
        Self::new(Environment::default(), Model::default())
    }
}

impl<C: AeroCoefficients> EquationsOfMotion<C> {
    pub fn new(environment: Environment, model: Model<C>) -> Self {
        Self { environment, model }
    }

    /// Like [`new`](Self::new), but rejects a model with non-physical parameters.
    pub fn try_new(environment: Environment, model: Model<C>) -> Result<Self> {
        model.validate()?;
        Ok(Self::new(environment, model))
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn model(&self) -> &Model<C> {
        &self.model
    }

    /// Time derivative of `state`.
    ///
    /// `time` does not enter the physics; it is accepted so the signature
    /// matches what an ODE integrator calls.
    pub fn derivative(&self, time: f64, state: &StateVector) -> Result<DerivativeVector> {
        let s = DiscState::from_vector(state);
        self.derivatives(time, &s).map(|d| d.to_vector())
    }

    /// [`derivative`](Self::derivative) for a raw slice, which must hold 13 values.
    pub fn derivative_from_slice(&self, time: f64, state: &[f64]) -> Result<DerivativeVector> {
        let s = DiscState::from_slice(state)?;
        self.derivatives(time, &s).map(|d| d.to_vector())
    }

    /// Structured form of [`derivative`](Self::derivative).
    pub fn derivatives(&self, time: f64, state: &DiscState) -> Result<Derivatives> {
        let res = self.intermediates(state).inspect_err(|e| {
            tracing::debug!(time, error = %e, "derivative evaluation rejected state");
        })?;

        tracing::trace!(
            time,
            aoa = res.frame.angle_of_attack,
            speed = state.velocity.norm(),
            spin = state.spin(),
            "evaluated derivative"
        );

        Ok(Derivatives {
            velocity: state.velocity,
            acceleration: res.forces.acceleration,
            orientation_rate: res.torques.orientation_rate,
            angular_acceleration: res.torques.angular_acceleration,
        })
    }

    /// Run frame, force and torque stages in order and keep every result.
    pub fn intermediates(&self, state: &DiscState) -> Result<Intermediates> {
        let frame = resolve(&state.orientation, &state.velocity, &state.angular_velocity)?;
        let forces = compute_forces(
            &self.environment,
            &self.model,
            &frame,
            &state.velocity,
            &state.angular_velocity,
        )?;
        let torques = compute_torques(
            &self.environment,
            &self.model,
            &frame,
            &state.orientation,
            &state.velocity,
            &state.angular_velocity,
        )?;

        Ok(Intermediates {
            frame,
            forces,
            torques,
        })
    }
}
