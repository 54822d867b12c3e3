#[macro_use]
extern crate log;

mod plane;
mod viewer;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use structopt::StructOpt;
use widgetry::{Canvas, Color, GfxCtx, Settings, SharedAppState};

use pendulum_model::{Config, Scheduler, SimulatorParams, StopSignal, TrajectoryError};

#[derive(StructOpt)]
struct Args {
    /// Simulated time to cover, in seconds. Only used when recalculating.
    #[structopt(long, env = "VISUALIZATION_TIME_IN_S", default_value = "0", allow_hyphen_values = true)]
    time: f64,
    /// Initial angle of the upper load, in degrees
    #[structopt(long, env = "PENDULUM_LOAD_ANGLES_IN_DEG_1", default_value = "0", allow_hyphen_values = true)]
    angle1: f64,
    /// Initial angle of the lower load, in degrees
    #[structopt(long, env = "PENDULUM_LOAD_ANGLES_IN_DEG_2", default_value = "0", allow_hyphen_values = true)]
    angle2: f64,
    /// Initial angular velocity of the upper load, in degrees per second
    #[structopt(long, env = "PENDULUM_LOAD_ANGLES_VELOCITY_IN_DEG_1", default_value = "0", allow_hyphen_values = true)]
    velocity1: f64,
    /// Initial angular velocity of the lower load, in degrees per second
    #[structopt(long, env = "PENDULUM_LOAD_ANGLES_VELOCITY_IN_DEG_2", default_value = "0", allow_hyphen_values = true)]
    velocity2: f64,
    /// Set to 1 to run the simulator and overwrite the samples before loading them
    #[structopt(long, env = "RECALCULATE_PENDULUM_LOADS_COORDINATES", default_value = "0")]
    recalculate: i64,
    /// The CSV file with one x1,x2,y1,y2 record per frame
    #[structopt(long)]
    samples: Option<PathBuf>,
    /// The simulator executable
    #[structopt(long)]
    simulator: Option<PathBuf>,
    /// Simulated seconds per frame
    #[structopt(long)]
    frame_time_step: Option<f64>,
    /// Real time between frames, in milliseconds
    #[structopt(long)]
    redraw_interval_ms: Option<u64>,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config {
            simulator: SimulatorParams {
                visualization_time_s: self.time,
                angle_deg_1: self.angle1,
                angle_deg_2: self.angle2,
                angular_velocity_deg_1: self.velocity1,
                angular_velocity_deg_2: self.velocity2,
            },
            recalculate: self.recalculate == 1,
            ..Default::default()
        };
        if let Some(path) = self.samples {
            config.samples_path = path;
        }
        if let Some(path) = self.simulator {
            config.simulator_path = path;
        }
        if let Some(step) = self.frame_time_step {
            config.frame_time_step = step;
        }
        if let Some(ms) = self.redraw_interval_ms {
            config.redraw_interval = Duration::from_millis(ms);
        }
        config
    }
}

fn load(config: &Config) -> Result<Scheduler> {
    let scheduler = pendulum_model::bootstrap::scheduler(config)?;
    info!(
        "Playing {} frames, one every {:?}",
        scheduler.trajectory().len(),
        config.redraw_interval
    );
    Ok(scheduler)
}

fn main() {
    abstutil::logger::setup();

    let config = Args::from_iter(abstutil::cli_args()).into_config();
    // Fail before opening a window
    let scheduler = match load(&config) {
        Ok(scheduler) => scheduler,
        Err(err) => {
            if let Some(TrajectoryError::EmptyTrajectory) = err.downcast_ref::<TrajectoryError>() {
                error!("Pendulum loads coordinates not found");
            }
            error!("Couldn't start: {:?}", err);
            std::process::exit(1);
        }
    };

    let stop = StopSignal::new();
    widgetry::run(Settings::new("Double Pendulum"), move |ctx| {
        let app = App {
            stop,
            redraw_interval: config.redraw_interval,
        };
        let states = vec![viewer::Viewer::new_state(ctx, &app, scheduler)];
        (app, states)
    });
}

pub struct App {
    // Raised when the window closes
    stop: StopSignal,
    redraw_interval: Duration,
}

impl SharedAppState for App {
    fn draw_default(&self, g: &mut GfxCtx) {
        g.clear(Color::BLACK);
    }

    fn before_quit(&self, _: &Canvas) {
        self.stop.raise();
    }
}

pub type Transition = widgetry::Transition<App>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_zero() {
        let config = Args::from_iter(vec!["pendulum"]).into_config();
        assert_eq!(config.simulator, SimulatorParams::default());
        assert!(!config.recalculate);
        assert_eq!(config.redraw_interval, Duration::from_millis(25));
    }

    #[test]
    fn flags_override() {
        let config = Args::from_iter(vec![
            "pendulum",
            "--time",
            "12.5",
            "--angle1",
            "-90",
            "--recalculate",
            "1",
            "--samples",
            "/tmp/samples.csv",
            "--redraw-interval-ms",
            "40",
        ])
        .into_config();
        assert_eq!(config.simulator.visualization_time_s, 12.5);
        assert_eq!(config.simulator.angle_deg_1, -90.0);
        assert!(config.recalculate);
        assert_eq!(config.samples_path, PathBuf::from("/tmp/samples.csv"));
        assert_eq!(config.redraw_interval, Duration::from_millis(40));
    }

    #[test]
    fn only_one_means_recalculate() {
        let config = Args::from_iter(vec!["pendulum", "--recalculate", "2"]).into_config();
        assert!(!config.recalculate);
    }
}
