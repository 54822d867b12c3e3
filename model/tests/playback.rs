use std::time::Duration;

use pendulum_model::{
    bootstrap, Cadence, Config, PlaybackState, Point, RenderSink, StopSignal, TrajectoryError,
};

/// Records frames and raises a stop signal once a given number have been presented.
struct StopAfter {
    polyline: Vec<Point>,
    label: String,
    frames: Vec<(Vec<Point>, String)>,
    stop: StopSignal,
    stop_after: usize,
}

impl StopAfter {
    fn new(stop: StopSignal, stop_after: usize) -> Self {
        Self {
            polyline: Vec::new(),
            label: String::new(),
            frames: Vec::new(),
            stop,
            stop_after,
        }
    }

    fn frame_indices(&self) -> Vec<usize> {
        self.frames
            .iter()
            .map(|(pts, _)| pts[1].x as usize)
            .collect()
    }
}

impl RenderSink for StopAfter {
    fn set_polyline(&mut self, points: &[Point]) {
        self.polyline = points.to_vec();
    }

    fn set_label(&mut self, text: &str) {
        self.label = text.to_string();
    }

    fn present(&mut self) {
        self.frames.push((self.polyline.clone(), self.label.clone()));
        if self.frames.len() == self.stop_after {
            self.stop.raise();
        }
    }
}

fn write_samples(dir: &tempfile::TempDir, contents: &str) -> Config {
    let samples_path = dir.path().join("pendulum_loads_coordinates.csv");
    fs_err::write(&samples_path, contents).unwrap();
    Config {
        samples_path,
        redraw_interval: Duration::from_millis(1),
        ..Default::default()
    }
}

fn numbered_csv(n: usize) -> String {
    let mut out = String::new();
    for i in 0..n {
        out.push_str(&format!("{},0.5,-0.5,1.5\n", i));
    }
    out
}

#[test]
fn two_frame_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_samples(&dir, "0.0,0.1,0.2,0.3\n0.05,0.12,0.22,0.32\n");
    let mut scheduler = bootstrap::scheduler(&config).unwrap();
    let stop = StopSignal::new();
    let mut sink = StopAfter::new(stop.clone(), usize::MAX);

    let state = Cadence::new(config.redraw_interval).run(&mut scheduler, &mut sink, &stop);
    assert_eq!(state, PlaybackState::Finished);
    assert_eq!(
        sink.frames,
        vec![
            (
                vec![Point::new(0.0, 0.0), Point::new(0.0, 0.1), Point::new(0.2, 0.3)],
                "time = 0.0s".to_string()
            ),
            (
                vec![
                    Point::new(0.0, 0.0),
                    Point::new(0.05, 0.12),
                    Point::new(0.22, 0.32)
                ],
                "time = 0.1s".to_string()
            ),
        ]
    );
}

#[test]
fn full_run_is_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_samples(&dir, &numbered_csv(50));
    let mut scheduler = bootstrap::scheduler(&config).unwrap();
    let stop = StopSignal::new();
    let mut sink = StopAfter::new(stop.clone(), usize::MAX);

    let state = Cadence::new(config.redraw_interval).run(&mut scheduler, &mut sink, &stop);
    assert_eq!(state, PlaybackState::Finished);
    assert_eq!(sink.frame_indices(), (0..50).collect::<Vec<_>>());
    // The last frame is what stays on screen
    assert_eq!(sink.polyline[1], Point::new(49.0, 0.5));
}

#[test]
fn abort_mid_run() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_samples(&dir, &numbered_csv(100));
    let mut scheduler = bootstrap::scheduler(&config).unwrap();
    let stop = StopSignal::new();
    // Frame 5 is the sixth one presented
    let mut sink = StopAfter::new(stop.clone(), 6);

    let state = Cadence::new(config.redraw_interval).run(&mut scheduler, &mut sink, &stop);
    assert_eq!(state, PlaybackState::Aborted);
    assert_eq!(scheduler.state(), PlaybackState::Aborted);
    assert_eq!(sink.frame_indices(), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn single_sample() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_samples(&dir, "1.0,2.0,3.0,4.0\n");
    let mut scheduler = bootstrap::scheduler(&config).unwrap();
    let stop = StopSignal::new();
    let mut sink = StopAfter::new(stop.clone(), usize::MAX);

    let state = Cadence::new(config.redraw_interval).run(&mut scheduler, &mut sink, &stop);
    assert_eq!(state, PlaybackState::Finished);
    assert_eq!(sink.frames.len(), 1);
}

#[test]
fn empty_file_never_plays() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_samples(&dir, "");
    let err = match bootstrap::scheduler(&config) {
        Ok(_) => panic!("an empty trajectory shouldn't produce a scheduler"),
        Err(err) => err,
    };
    assert!(matches!(
        err.downcast_ref::<TrajectoryError>(),
        Some(TrajectoryError::EmptyTrajectory)
    ));
}

#[test]
fn malformed_file_never_plays() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_samples(&dir, "0,0,0,0\n1,1,1,1\n1.0,2.0,bad\n4,4,4,4\n");
    let err = match bootstrap::scheduler(&config) {
        Ok(_) => panic!("a malformed file shouldn't produce a scheduler"),
        Err(err) => err,
    };
    assert!(matches!(
        err.downcast_ref::<TrajectoryError>(),
        Some(TrajectoryError::MalformedRecord { line: 3, .. })
    ));
}
