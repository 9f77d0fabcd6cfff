//! Command line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "frisbee")]
#[command(about = "Flying-disc equations of motion")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub disc: DiscArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate the derivative of a single state
    Eval {
        /// x y z vx vy vz qx qy qz qw dphi dtheta dgamma
        #[arg(long, num_args = 13, required = true, allow_negative_numbers = true)]
        state: Vec<f64>,

        /// Simulation time passed to the evaluator
        #[arg(long, default_value_t = 0.0)]
        time: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Sweep angle of attack for a level throw and write a CSV table
    Sweep {
        /// Airspeed (m/s)
        #[arg(long, default_value_t = 14.0)]
        speed: f64,

        /// Spin rate (rad/s)
        #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
        spin: f64,

        /// First angle of attack (deg)
        #[arg(long, default_value_t = -20.0, allow_negative_numbers = true)]
        aoa_from: f64,

        /// Last angle of attack (deg)
        #[arg(long, default_value_t = 40.0, allow_negative_numbers = true)]
        aoa_to: f64,

        #[arg(long, default_value_t = 61)]
        steps: usize,

        /// Output directory
        #[arg(short, long, default_value = "output")]
        output_dir: PathBuf,
    },
    /// Print the default configuration as JSON
    Defaults,
}

/// Environment and disc parameters.
///
/// `--config` replaces every flag below with the contents of a JSON file.
#[derive(Args, Debug, Clone)]
pub struct DiscArgs {
    /// JSON file with `environment` and `model` sections
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    // ── Environment ───────────────────────────────────────────
    #[arg(long, global = true, default_value_t = 1.225)]
    pub air_density: f64,

    #[arg(long, global = true, default_value_t = 9.81)]
    pub gravity: f64,

    // ── Disc ──────────────────────────────────────────────────
    #[arg(long, global = true, default_value_t = 0.175)]
    pub mass: f64,

    #[arg(long, global = true, default_value_t = 0.27)]
    pub diameter: f64,

    /// Planform area (m²); defaults to π(d/2)²
    #[arg(long, global = true)]
    pub area: Option<f64>,

    #[arg(long, global = true, default_value_t = 0.001)]
    pub i_xx: f64,

    #[arg(long, global = true, default_value_t = 0.002)]
    pub i_zz: f64,

    #[arg(long, global = true, default_value_t = -1e-4, allow_negative_numbers = true)]
    pub dampening: f64,

    #[arg(long, global = true, default_value_t = -1e-5, allow_negative_numbers = true)]
    pub dampening_z: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
