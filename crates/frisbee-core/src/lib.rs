//! # Frisbee Core
//!
//! Equations of motion for a spinning, lifting disc, written for an external
//! ODE integrator. The integrator owns the time loop and calls
//! [`EquationsOfMotion::derivative`] with a 13-component state:
//!
//! ```text
//! [x, y, z, vx, vy, vz, qx, qy, qz, qw, dphi, dtheta, dgamma]
//! ```
//!
//! and gets back the matching derivative. Each call runs four stages:
//! - [`frame`]: aerodynamic basis, angle of attack, wobble
//! - [`forces`]: lift, side force, drag, gravity
//! - [`torques`]: pitch/roll moments as precession, damping, wobble coupling
//! - [`kinematics`]: quaternion rate `½ ω ⊗ q`
//!
//! Degenerate states (no relative wind, wind along the disc normal, no spin)
//! come back as [`EomError`] rather than NaN.
//!
//! ```
//! use frisbee_core::{EquationsOfMotion, StateVector};
//!
//! let eom = EquationsOfMotion::default();
//! let state = StateVector::from_column_slice(&[
//!     0.0, 0.0, 1.0, // position
//!     10.0, 0.0, 0.0, // velocity
//!     0.0, 0.0, 0.0, 1.0, // orientation (x, y, z, w)
//!     0.0, 0.0, 50.0, // angular velocity
//! ]);
//! let d = eom.derivative(0.0, &state).unwrap();
//! assert_eq!(d[0], 10.0);
//! ```

pub mod coefficients;
pub mod environment;
pub mod eom;
pub mod error;
pub mod forces;
pub mod frame;
pub mod kinematics;
pub mod model;
pub mod state;
pub mod torques;

use nalgebra::Vector3;

pub type Vector3r = Vector3<f64>;

// Re-export core types
pub use coefficients::{AeroCoefficients, ConstantCoefficients, LinearCoefficients};
pub use environment::Environment;
pub use eom::{EquationsOfMotion, Intermediates};
pub use error::{EomError, Result};
pub use forces::Forces;
pub use frame::AeroFrame;
pub use model::Model;
pub use state::{DerivativeVector, Derivatives, DiscState, StateVector, STATE_LEN};
pub use torques::Torques;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
