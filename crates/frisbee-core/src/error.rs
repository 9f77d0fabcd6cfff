//! Error types for derivative evaluation.
//!
//! Every failure is detected where it occurs and handed straight back to the
//! caller of [`EquationsOfMotion::derivative`](crate::EquationsOfMotion::derivative).
//! Nothing is retried here; the integrator decides what to do with a bad state.

use thiserror::Error;

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, EomError>;

/// Reasons a derivative cannot be evaluated.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EomError {
    /// The disc is not moving, so there is no relative wind to build a frame from.
    #[error("degenerate geometry: speed {speed:e} m/s is zero, no aerodynamic frame exists")]
    ZeroVelocity {
        /// Magnitude of the velocity that was rejected.
        speed: f64,
    },

    /// The velocity points along the disc normal, so the in-plane direction is undefined.
    #[error(
        "degenerate geometry: velocity is parallel to the disc normal \
         (in-plane speed {in_plane_speed:e} m/s)"
    )]
    VelocityAlongNormal {
        /// Magnitude of the in-plane velocity component.
        in_plane_speed: f64,
    },

    /// The disc is not spinning; precession torque divides by the spin rate.
    #[error("zero spin: spin rate {spin:e} rad/s cannot carry precession torque")]
    ZeroSpin {
        /// Spin rate (dgamma) that was rejected.
        spin: f64,
    },

    /// A raw state slice did not have 13 components.
    #[error("state vector has {got} components, expected 13")]
    StateLength {
        /// Number of components supplied.
        got: usize,
    },

    /// A model parameter is outside its physical range.
    #[error("invalid model: {field} = {value} must be positive and finite")]
    InvalidModel {
        /// Name of the offending parameter.
        field: &'static str,
        /// Value supplied for it.
        value: f64,
    },
}

impl EomError {
    /// True for the two "no aerodynamic frame" variants.
    pub fn is_degenerate_geometry(&self) -> bool {
        matches!(
            self,
            EomError::ZeroVelocity { .. } | EomError::VelocityAlongNormal { .. }
        )
    }
}
