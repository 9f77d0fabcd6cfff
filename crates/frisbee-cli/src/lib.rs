//! Frisbee CLI - evaluate and tabulate the disc equations of motion.

pub mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command, DiscArgs, OutputFormat};
use frisbee_core::{
    DiscState, EquationsOfMotion, Environment, Intermediates, LinearCoefficients, Model,
};
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::path::Path;

/// Everything needed to build an evaluator, as read from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub environment: Environment,
    pub model: Model<LinearCoefficients>,
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_args(args: &DiscArgs) -> Result<Self> {
        if let Some(path) = &args.config {
            return Self::from_file(path);
        }
        Ok(Self {
            environment: Environment {
                air_density: args.air_density,
                g: args.gravity,
                ..Default::default()
            },
            model: Model {
                mass: args.mass,
                diameter: args.diameter,
                area: args.area.unwrap_or(PI * (args.diameter / 2.0).powi(2)),
                i_xx: args.i_xx,
                i_zz: args.i_zz,
                dampening_factor: args.dampening,
                dampening_z: args.dampening_z,
                coefficients: LinearCoefficients::default(),
            },
        })
    }

    pub fn into_eom(self) -> Result<EquationsOfMotion> {
        EquationsOfMotion::try_new(self.environment, self.model).context("invalid disc model")
    }
}

/// Entry point shared by the binary and tests.
pub fn run_cli_main(args: &[&str]) -> Result<()> {
    let cli = Cli::parse_from(args);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::from_args(&cli.disc)?;

    match cli.command {
        Command::Eval {
            state,
            time,
            format,
        } => {
            let eom = config.into_eom()?;
            let report = evaluate(&eom, time, &state)?;
            match format {
                OutputFormat::Text => print_report(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Command::Sweep {
            speed,
            spin,
            aoa_from,
            aoa_to,
            steps,
            output_dir,
        } => {
            let eom = config.into_eom()?;
            let rows = aoa_sweep(&eom, speed, spin, aoa_from, aoa_to, steps)?;
            let path = write_sweep(&output_dir, &rows)?;
            println!("Sweep of {} angles written to {:?}", rows.len(), path);
        }
        Command::Defaults => {
            println!("{}", serde_json::to_string_pretty(&Config::default())?);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Single evaluation
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct EvalReport {
    pub time: f64,
    pub derivative: Vec<f64>,
    pub intermediates: Intermediates,
}

pub fn evaluate(eom: &EquationsOfMotion, time: f64, state: &[f64]) -> Result<EvalReport> {
    let s = DiscState::from_slice(state)?;
    let derivative = eom
        .derivatives(time, &s)
        .context("derivative evaluation failed")?
        .to_vector();
    let intermediates = eom.intermediates(&s)?;
    Ok(EvalReport {
        time,
        derivative: derivative.iter().copied().collect(),
        intermediates,
    })
}

fn print_report(report: &EvalReport) {
    let d = &report.derivative;
    let frame = &report.intermediates.frame;
    let forces = &report.intermediates.forces;
    let torques = &report.intermediates.torques;

    println!("Derivative at t = {:.4} s", report.time);
    println!("  velocity:        [{:.4}, {:.4}, {:.4}]", d[0], d[1], d[2]);
    println!("  acceleration:    [{:.4}, {:.4}, {:.4}]", d[3], d[4], d[5]);
    println!("  quaternion rate: [{:.4}, {:.4}, {:.4}, {:.4}]", d[6], d[7], d[8], d[9]);
    println!("  angular accel:   [{:.4}, {:.4}, {:.4}]", d[10], d[11], d[12]);
    println!("-----------------------------");
    println!("  Angle of attack: {:.3}°", frame.angle_of_attack.to_degrees());
    println!("  Lift:            {:.4} N", forces.lift.norm());
    println!("  Drag:            {:.4} N", forces.drag.norm());
    println!("  Side:            {:.4} N", forces.side.norm());
    println!("  Torque ampl.:    {:.5} N·m", torques.torque_amplitude);
    println!("  Precession:      {:.4} rad/s", torques.precession_rate.norm());
}

// ---------------------------------------------------------------------------
// Angle-of-attack sweep
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub aoa_deg: f64,
    pub lift: f64,
    pub drag: f64,
    pub side: f64,
    pub acceleration: Vector3<f64>,
    pub precession_rate: f64,
}

/// Level throw along +x with the disc pitched to each angle of attack.
pub fn aoa_sweep(
    eom: &EquationsOfMotion,
    speed: f64,
    spin: f64,
    aoa_from: f64,
    aoa_to: f64,
    steps: usize,
) -> Result<Vec<SweepRow>> {
    if steps < 2 {
        bail!("sweep needs at least 2 steps, got {steps}");
    }
    if aoa_from.abs() >= 90.0 || aoa_to.abs() >= 90.0 {
        bail!("angle of attack must stay inside (-90°, 90°)");
    }

    let mut rows = Vec::with_capacity(steps);
    for i in 0..steps {
        let aoa_deg = aoa_from + (aoa_to - aoa_from) * (i as f64 / (steps - 1) as f64);
        // raising the leading edge by α is a rotation of -α about +y
        let q = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), -aoa_deg.to_radians());
        let state = DiscState {
            position: Vector3::zeros(),
            velocity: Vector3::new(speed, 0.0, 0.0),
            orientation: *q.quaternion(),
            angular_velocity: Vector3::new(0.0, 0.0, spin),
        };
        let res = eom
            .intermediates(&state)
            .with_context(|| format!("evaluating aoa {aoa_deg:.2}°"))?;

        tracing::debug!(aoa_deg, lift = res.forces.lift.norm(), "sweep point");
        rows.push(SweepRow {
            aoa_deg,
            lift: res.forces.lift.norm(),
            drag: res.forces.drag.norm(),
            side: res.forces.side.norm(),
            acceleration: res.forces.acceleration,
            precession_rate: res.torques.precession_rate.norm(),
        });
    }
    Ok(rows)
}

fn write_sweep(dir: &Path, rows: &[SweepRow]) -> Result<std::path::PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("aoa_sweep.csv");
    let mut wtr = csv::Writer::from_path(&path)?;
    wtr.write_record([
        "aoa_deg",
        "lift_n",
        "drag_n",
        "side_n",
        "accel_x",
        "accel_y",
        "accel_z",
        "precession_rad_s",
    ])?;
    for r in rows {
        wtr.write_record(&[
            format!("{:.4}", r.aoa_deg),
            format!("{:.6}", r.lift),
            format!("{:.6}", r.drag),
            format!("{:.6}", r.side),
            format!("{:.6}", r.acceleration.x),
            format!("{:.6}", r.acceleration.y),
            format!("{:.6}", r.acceleration.z),
            format!("{:.6}", r.precession_rate),
        ])?;
    }
    wtr.flush()?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote sweep");
    Ok(path)
}
