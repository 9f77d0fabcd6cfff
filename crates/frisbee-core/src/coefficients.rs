//! Aerodynamic coefficient models.
//!
//! The equations of motion only ever see a disc through [`AeroCoefficients`]:
//! five dimensionless numbers as functions of angle of attack (radians),
//! speed (m/s) and spin rate (rad/s). Any table lookup or fit can sit behind
//! the trait; the two models here cover the usual linear disc fit and a
//! constant model for controlled experiments.

use serde::{Deserialize, Serialize};

/// Coefficient functions consumed by the force and torque stages.
///
/// Inputs are finite, with `aoa` in (−π/2, π/2). Implementations must return
/// finite values over that domain.
pub trait AeroCoefficients {
    /// Lift coefficient.
    fn c_lift(&self, aoa: f64) -> f64;

    /// Drag coefficient.
    fn c_drag(&self, aoa: f64) -> f64;

    /// Side-force coefficient.
    fn c_side(&self, aoa: f64, speed: f64, spin: f64) -> f64;

    /// Pitch-like moment coefficient, applied about `yhat`.
    fn c_x(&self, aoa: f64, speed: f64, spin: f64) -> f64;

    /// Roll-like moment coefficient, applied about `xhat`.
    fn c_y(&self, aoa: f64) -> f64;
}

impl<C: AeroCoefficients + ?Sized> AeroCoefficients for &C {
    fn c_lift(&self, aoa: f64) -> f64 {
        (**self).c_lift(aoa)
    }
    fn c_drag(&self, aoa: f64) -> f64 {
        (**self).c_drag(aoa)
    }
    fn c_side(&self, aoa: f64, speed: f64, spin: f64) -> f64 {
        (**self).c_side(aoa, speed, spin)
    }
    fn c_x(&self, aoa: f64, speed: f64, spin: f64) -> f64 {
        (**self).c_x(aoa, speed, spin)
    }
    fn c_y(&self, aoa: f64) -> f64 {
        (**self).c_y(aoa)
    }
}

// ---------------------------------------------------------------------------
// Linear disc model
// ---------------------------------------------------------------------------

/// Linear-in-alpha lift, quadratic drag bucket and spin-over-speed terms.
///
/// ```text
/// C_lift = PL0 + PLa·α
/// C_drag = PD0 + PDa·(α − α0)²
/// C_y    = PTy0 + PTya·α
/// C_x    = PTx_adv · ω/v
/// C_side = PS_adv · ω/v
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearCoefficients {
    pub pl0: f64,
    pub pla: f64,
    pub pd0: f64,
    pub pda: f64,
    /// Angle of minimum drag (rad).
    pub alpha_0: f64,
    pub pty0: f64,
    pub ptya: f64,
    pub ptx_advance: f64,
    pub ps_advance: f64,
}

impl Default for LinearCoefficients {
    fn default() -> Self {
        Self {
            pl0: 0.33,
            pla: 1.9,
            pd0: 0.18,
            pda: 0.69,
            alpha_0: 4.0_f64.to_radians(),
            pty0: -0.082,
            ptya: 0.43,
            ptx_advance: -1.7e-3,
            ps_advance: 0.0,
        }
    }
}

fn spin_over_speed(speed: f64, spin: f64) -> f64 {
    if speed > 0.0 {
        spin / speed
    } else {
        0.0
    }
}

impl AeroCoefficients for LinearCoefficients {
    fn c_lift(&self, aoa: f64) -> f64 {
        self.pl0 + self.pla * aoa
    }

    fn c_drag(&self, aoa: f64) -> f64 {
        self.pd0 + self.pda * (aoa - self.alpha_0).powi(2)
    }

    fn c_side(&self, _aoa: f64, speed: f64, spin: f64) -> f64 {
        self.ps_advance * spin_over_speed(speed, spin)
    }

    fn c_x(&self, _aoa: f64, speed: f64, spin: f64) -> f64 {
        self.ptx_advance * spin_over_speed(speed, spin)
    }

    fn c_y(&self, aoa: f64) -> f64 {
        self.pty0 + self.ptya * aoa
    }
}

// ---------------------------------------------------------------------------
// Constant model
// ---------------------------------------------------------------------------

/// Every coefficient is a fixed number regardless of flight condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantCoefficients {
    pub lift: f64,
    pub drag: f64,
    pub side: f64,
    pub x: f64,
    pub y: f64,
}

impl ConstantCoefficients {
    /// All five coefficients zero: no aerodynamic force or moment at all.
    pub fn zero() -> Self {
        Self::default()
    }
}

impl AeroCoefficients for ConstantCoefficients {
    fn c_lift(&self, _aoa: f64) -> f64 {
        self.lift
    }
    fn c_drag(&self, _aoa: f64) -> f64 {
        self.drag
    }
    fn c_side(&self, _aoa: f64, _speed: f64, _spin: f64) -> f64 {
        self.side
    }
    fn c_x(&self, _aoa: f64, _speed: f64, _spin: f64) -> f64 {
        self.x
    }
    fn c_y(&self, _aoa: f64) -> f64 {
        self.y
    }
}
