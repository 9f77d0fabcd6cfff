//! Quaternion kinematics.
//!
//! Convention: quaternions are stored scalar last, `(x, y, z, w)`, which is
//! exactly nalgebra's `Quaternion::coords` layout. The orientation rate is
//!
//! ```text
//! dq/dt = ½ · ω ⊗ q
//! ```
//!
//! with `⊗` the Hamilton product and the pure angular-rate quaternion
//! `ω = (wx, wy, wz, 0)` on the LEFT, i.e. `ω` is a world-frame rate.
//! Putting `ω` on the right instead flips the sign of every precession
//! term, so the order is pinned by a unit test below.

use crate::Vector3r;
use approx::abs_diff_eq;
use nalgebra::{Quaternion, UnitQuaternion};

/// Angular rates at or below this magnitude (rad/s) have no usable axis.
pub const RATE_EPSILON: f64 = 1e-12;

/// Build the rotation held in a state vector's quaternion block.
///
/// The components are taken as given; the integrator keeps them unit-norm.
pub fn rotation_from_state(qx: f64, qy: f64, qz: f64, qw: f64) -> UnitQuaternion<f64> {
    UnitQuaternion::new_unchecked(Quaternion::new(qw, qx, qy, qz))
}

/// Time derivative of `orientation` under the angular rate `omega`.
///
/// Below [`RATE_EPSILON`] the identity quaternion stands in for the rate
/// operator and is scaled by `|ω|/2`, which keeps the result continuous with
/// the general branch as both go to zero.
pub fn quaternion_rate(orientation: &Quaternion<f64>, omega: &Vector3r) -> Quaternion<f64> {
    let rate = omega.norm();
    if abs_diff_eq!(rate, 0.0, epsilon = RATE_EPSILON) {
        return Quaternion::identity() * (rate / 2.0);
    }

    let axis = Quaternion::from_imag(omega / rate);
    (axis * orientation) * (rate / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_rate_pre_multiplies_orientation() {
        // 90° about x, spun about world z.
        let (s, c) = FRAC_PI_4.sin_cos();
        let q = Quaternion::new(c, s, 0.0, 0.0);
        let dq = quaternion_rate(&q, &Vector3r::new(0.0, 0.0, 1.0));

        // ½ (0,0,1,0) ⊗ (s,0,0,c) = ½ (0, s, c, 0)
        assert_abs_diff_eq!(dq.i, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(dq.j, 0.5 * s, epsilon = 1e-15);
        assert_abs_diff_eq!(dq.k, 0.5 * c, epsilon = 1e-15);
        assert_abs_diff_eq!(dq.w, 0.0, epsilon = 1e-15);

        // The opposite order would give a negative y component.
        let post = q * Quaternion::from_imag(Vector3r::z()) * 0.5;
        assert!(post.j < 0.0);
    }

    #[test]
    fn test_identity_orientation_gives_half_omega() {
        let omega = Vector3r::new(0.3, -0.4, 1.2);
        let dq = quaternion_rate(&Quaternion::identity(), &omega);
        assert_abs_diff_eq!(dq.imag(), omega * 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(dq.w, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rate_is_linear_in_omega() {
        let q = *UnitQuaternion::from_euler_angles(0.2, -0.5, 1.0).quaternion();
        let w = Vector3r::new(1.0, 2.0, -0.5);
        let a = quaternion_rate(&q, &w);
        let b = quaternion_rate(&q, &(w * 3.0));
        assert_abs_diff_eq!(b.coords, a.coords * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rate_branch() {
        let q = *UnitQuaternion::from_euler_angles(0.1, 0.2, 0.3).quaternion();
        let dq = quaternion_rate(&q, &Vector3r::zeros());
        assert_eq!(dq.coords, Quaternion::new(0.0, 0.0, 0.0, 0.0).coords);
    }

    #[test]
    fn test_small_rate_converges_to_zero_branch() {
        let q = *UnitQuaternion::from_euler_angles(0.4, -0.1, 2.0).quaternion();
        let dir = Vector3r::new(1.0, -2.0, 0.5).normalize();
        let mut last = f64::INFINITY;
        for exp in [2, 4, 6, 8, 10] {
            let w = dir * 10f64.powi(-exp);
            let n = quaternion_rate(&q, &w).norm();
            assert!(n < last, "rate norm must shrink with |w|: {n} >= {last}");
            last = n;
        }
        assert!(last < 1e-10);
        let inside = quaternion_rate(&q, &(dir * 1e-13));
        assert!(inside.norm() < 1e-12);
    }

    #[test]
    fn test_rotation_from_state_order() {
        let r = rotation_from_state(0.0, 0.0, FRAC_PI_4.sin(), FRAC_PI_4.cos());
        let x = r * Vector3r::x();
        assert_abs_diff_eq!(x, Vector3r::y(), epsilon = 1e-12);
    }
}
