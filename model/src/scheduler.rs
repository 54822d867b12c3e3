use crate::{GeometryMapper, Point, Trajectory};

/// The drawing surface frames are sent to. Each tick calls `set_polyline`, `set_label`, then
/// `present`, in that order.
pub trait RenderSink {
    fn set_polyline(&mut self, points: &[Point]);
    fn set_label(&mut self, text: &str);
    /// Make everything set since the last call visible.
    fn present(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    /// Every frame was emitted. The last one stays on screen.
    Finished,
    /// Stopped from outside before the end.
    Aborted,
}

impl PlaybackState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PlaybackState::Finished | PlaybackState::Aborted)
    }
}

/// Plays a trajectory exactly once, one frame per tick. Whoever owns this decides when ticks
/// happen; see `Cadence` and `FrameClock`.
pub struct Scheduler {
    trajectory: Trajectory,
    mapper: GeometryMapper,
    current_frame: usize,
    state: PlaybackState,
}

impl Scheduler {
    pub fn new(trajectory: Trajectory, mapper: GeometryMapper) -> Self {
        Self {
            trajectory,
            mapper,
            current_frame: 0,
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// The next frame to be emitted
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn is_finished(&self) -> bool {
        self.current_frame >= self.trajectory.len()
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Only does something from `Idle`. Playback can't be restarted.
    pub fn start(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Idle {
            self.current_frame = 0;
            self.transition(PlaybackState::Running);
        } else {
            warn!("Ignoring start, playback is already {:?}", self.state);
        }
        self.state
    }

    /// Emits the current frame and moves to the next one. The tick after the last frame moves
    /// to `Finished` without touching the sink. Outside of `Running`, this does nothing.
    pub fn tick<S: RenderSink + ?Sized>(&mut self, sink: &mut S) -> PlaybackState {
        if self.state != PlaybackState::Running {
            return self.state;
        }
        if self.is_finished() {
            self.transition(PlaybackState::Finished);
            return self.state;
        }

        let frame = match self.mapper.map(&self.trajectory, self.current_frame) {
            Ok(frame) => frame,
            // is_finished just checked the bound
            Err(err) => unreachable!("scheduler emitted a frame past the end: {}", err),
        };
        sink.set_polyline(&frame.vertices);
        sink.set_label(&frame.label);
        sink.present();
        self.current_frame += 1;

        self.state
    }

    /// Stops playback for good. A finished playback stays finished.
    pub fn abort(&mut self) -> PlaybackState {
        if !self.state.is_terminal() {
            self.transition(PlaybackState::Aborted);
        }
        self.state
    }

    fn transition(&mut self, to: PlaybackState) {
        debug!(
            "Playback {:?} -> {:?} at frame {}/{}",
            self.state,
            to,
            self.current_frame,
            self.trajectory.len()
        );
        self.state = to;
    }
}
