use approx::{assert_abs_diff_eq, assert_relative_eq};
use frisbee_core::kinematics::quaternion_rate;
use frisbee_core::{
    ConstantCoefficients, DiscState, EomError, EquationsOfMotion, Environment, Model,
    StateVector, Vector3r,
};
use nalgebra::{Quaternion, UnitQuaternion, Vector4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scenario_model(c: ConstantCoefficients) -> Model<ConstantCoefficients> {
    Model {
        mass: 0.175,
        area: 0.058,
        diameter: 0.27,
        i_xx: 0.002,
        i_zz: 0.004,
        dampening_factor: 0.0,
        dampening_z: 0.0,
        coefficients: c,
    }
}

fn pack(position: Vector3r, velocity: Vector3r, q: &Quaternion<f64>, w: Vector3r) -> StateVector {
    DiscState {
        position,
        velocity,
        orientation: *q,
        angular_velocity: w,
    }
    .to_vector()
}

fn random_orientation(rng: &mut StdRng) -> Quaternion<f64> {
    let v = Vector4::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    );
    Quaternion::from(v.normalize())
}

fn random_state(rng: &mut StdRng) -> StateVector {
    let q = random_orientation(rng);
    let position = Vector3r::new(
        rng.gen_range(-50.0..50.0),
        rng.gen_range(-50.0..50.0),
        rng.gen_range(0.0..10.0),
    );
    let velocity = Vector3r::new(
        rng.gen_range(-25.0..25.0),
        rng.gen_range(-25.0..25.0),
        rng.gen_range(-10.0..10.0),
    );
    let spin = rng.gen_range(20.0..120.0) * if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let w = Vector3r::new(rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0), spin);
    pack(position, velocity, &q, w)
}

// ---------------------------------------------------------------------------
// Concrete scenario
// ---------------------------------------------------------------------------

#[test]
fn test_level_throw_scenario() {
    let env = Environment::new(1.225, 9.81, Vector3r::new(0.0, 0.0, -1.0));
    let model = scenario_model(ConstantCoefficients {
        lift: 0.3,
        drag: 0.1,
        ..Default::default()
    });
    let eom = EquationsOfMotion::try_new(env, model).unwrap();

    let state = pack(
        Vector3r::zeros(),
        Vector3r::new(10.0, 0.0, 0.0),
        &Quaternion::identity(),
        Vector3r::new(0.0, 0.0, 50.0),
    );
    let res = eom.intermediates(&DiscState::from_vector(&state)).unwrap();

    let q = 0.5 * 1.225 * 100.0 * 0.058;
    assert_eq!(res.frame.yhat, Vector3r::y());
    assert_relative_eq!(res.forces.lift, Vector3r::new(0.0, 0.0, 0.3 * q), epsilon = 1e-12);
    assert_relative_eq!(res.forces.drag, Vector3r::new(-0.1 * q, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(res.forces.gravity, Vector3r::new(0.0, 0.0, -1.71675), epsilon = 1e-12);

    // pure spin: no transverse rate, so the coupling term is zero too
    assert_eq!(res.torques.angular_acceleration, Vector3r::zeros());

    let d = eom.derivative(0.0, &state).unwrap();
    assert_relative_eq!(d[3], -0.1 * q / 0.175, epsilon = 1e-12);
    assert_relative_eq!(d[5], (0.3 * q - 1.71675) / 0.175, epsilon = 1e-12);
    for i in 6..13 {
        assert_eq!(d[i], 0.0, "component {i} should vanish for a level pure-spin throw");
    }

    let mut stopped = state;
    stopped[12] = 0.0;
    assert_eq!(eom.derivative(0.0, &stopped), Err(EomError::ZeroSpin { spin: 0.0 }));
}

#[test]
fn test_wobble_coupling_with_asymmetric_inertia() {
    let eom = EquationsOfMotion::new(
        Environment::default(),
        scenario_model(ConstantCoefficients::zero()),
    );
    let state = pack(
        Vector3r::zeros(),
        Vector3r::new(10.0, 0.0, 0.0),
        &Quaternion::identity(),
        Vector3r::new(0.5, -0.25, 50.0),
    );
    let d = eom.derivative(0.0, &state).unwrap();
    // 2·50·(0.004 − 0.002)/0.002 = 100
    assert_relative_eq!(d[10], 25.0, epsilon = 1e-9);
    assert_relative_eq!(d[11], 50.0, epsilon = 1e-9);
    assert_eq!(d[12], 0.0);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_random_valid_states_are_finite() {
    let mut rng = StdRng::seed_from_u64(42);
    let eom = EquationsOfMotion::default();
    for _ in 0..500 {
        let s = random_state(&mut rng);
        let d = eom.derivative(rng.gen_range(0.0..10.0), &s).unwrap();
        assert!(d.iter().all(|x| x.is_finite()), "non-finite derivative {d:?} for {s:?}");
    }
}

#[test]
fn test_basis_is_orthonormal() {
    let mut rng = StdRng::seed_from_u64(7);
    let eom = EquationsOfMotion::default();
    for _ in 0..500 {
        let s = DiscState::from_vector(&random_state(&mut rng));
        let f = eom.intermediates(&s).unwrap().frame;
        assert_abs_diff_eq!(f.xhat.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.yhat.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.zhat.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.xhat.dot(&f.yhat), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.xhat.dot(&f.zhat), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.yhat.dot(&f.zhat), 0.0, epsilon = 1e-12);
        // right-handed
        assert_abs_diff_eq!(f.xhat.cross(&f.yhat), f.zhat, epsilon = 1e-12);
    }
}

#[test]
fn test_in_plane_velocity_has_zero_aoa() {
    let eom = EquationsOfMotion::default();
    let level = pack(
        Vector3r::zeros(),
        Vector3r::new(7.0, -3.0, 0.0),
        &Quaternion::identity(),
        Vector3r::new(0.0, 0.0, 40.0),
    );
    let res = eom.intermediates(&DiscState::from_vector(&level)).unwrap();
    assert_eq!(res.frame.angle_of_attack, 0.0);

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let q = random_orientation(&mut rng);
        let rot = UnitQuaternion::new_unchecked(q);
        let v = rot * Vector3r::new(rng.gen_range(1.0..20.0), rng.gen_range(-5.0..5.0), 0.0);
        let s = pack(Vector3r::zeros(), v, &q, Vector3r::new(0.0, 0.0, 40.0));
        let res = eom.intermediates(&DiscState::from_vector(&s)).unwrap();
        assert_abs_diff_eq!(res.frame.angle_of_attack, 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_no_air_no_gravity_conserves() {
    let env = Environment {
        g: 0.0,
        ..Default::default()
    };
    let eom = EquationsOfMotion::new(env, scenario_model(ConstantCoefficients::zero()));
    let w = Vector3r::new(0.8, -1.3, 45.0);
    let s = pack(
        Vector3r::zeros(),
        Vector3r::new(11.0, 2.0, -1.0),
        &Quaternion::identity(),
        w,
    );
    let res = eom.intermediates(&DiscState::from_vector(&s)).unwrap();

    assert_eq!(res.forces.total, Vector3r::zeros());
    assert_eq!(res.forces.acceleration, Vector3r::zeros());
    assert_eq!(res.torques.roll_moment, Vector3r::zeros());
    assert_eq!(res.torques.pitch_moment, Vector3r::zeros());
    assert_eq!(res.torques.precession_rate, Vector3r::zeros());

    let coupling = 2.0 * w.z * (0.004 - 0.002) / 0.002;
    let gyro = Vector3r::new(-w.y, w.x, 0.0) * coupling;
    assert_relative_eq!(res.torques.angular_acceleration, gyro, epsilon = 1e-12);

    // without air the torque amplitude itself vanishes
    let still_air = EquationsOfMotion::new(
        Environment {
            air_density: 0.0,
            g: 0.0,
            ..Default::default()
        },
        scenario_model(ConstantCoefficients::zero()),
    );
    let res = still_air.intermediates(&DiscState::from_vector(&s)).unwrap();
    assert_eq!(res.torques.torque_amplitude, 0.0);
    assert_eq!(res.forces.force_amplitude, 0.0);
}

#[test]
fn test_small_rate_continuity() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let q = random_orientation(&mut rng);
        let dir = Vector3r::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        )
        .normalize();
        let zero = quaternion_rate(&q, &Vector3r::zeros());
        let tiny = quaternion_rate(&q, &(dir * 1e-9));
        assert_eq!(zero.coords, Vector4::zeros());
        assert_abs_diff_eq!(tiny.coords, zero.coords, epsilon = 1e-9);
    }
}

#[test]
fn test_orientation_rate_uses_left_product() {
    // wobble-only disc, banked 90° about x: dq must equal ½ ω ⊗ q
    let q = *UnitQuaternion::from_axis_angle(&Vector3r::x_axis(), std::f64::consts::FRAC_PI_2)
        .quaternion();
    let eom = EquationsOfMotion::new(
        Environment::default(),
        scenario_model(ConstantCoefficients::zero()),
    );
    // zhat is -y after the bank, so fly along +x
    let s = pack(Vector3r::zeros(), Vector3r::new(10.0, 0.0, 0.0), &q, Vector3r::new(0.0, 1.0, 30.0));
    let res = eom.intermediates(&DiscState::from_vector(&s)).unwrap();

    let omega = res.torques.angular_rate;
    let left = Quaternion::from_imag(omega) * q * 0.5;
    let right = q * Quaternion::from_imag(omega) * 0.5;
    assert_abs_diff_eq!(res.torques.orientation_rate.coords, left.coords, epsilon = 1e-12);
    assert!((res.torques.orientation_rate.coords - right.coords).norm() > 1e-3);
}

#[test]
fn test_degenerate_states_report_geometry() {
    let eom = EquationsOfMotion::default();
    let along_normal = pack(
        Vector3r::zeros(),
        Vector3r::new(0.0, 0.0, 5.0),
        &Quaternion::identity(),
        Vector3r::new(0.0, 0.0, 40.0),
    );
    let err = eom.derivative(0.0, &along_normal).unwrap_err();
    assert!(err.is_degenerate_geometry());
    assert!(err.to_string().contains("parallel"));

    let resting = pack(
        Vector3r::zeros(),
        Vector3r::zeros(),
        &Quaternion::identity(),
        Vector3r::new(0.0, 0.0, 40.0),
    );
    assert_eq!(
        eom.derivative(0.0, &resting),
        Err(EomError::ZeroVelocity { speed: 0.0 })
    );
}
