//! Frame throttling.
//!
//! The host calls [`FrameScheduler::should_tick`] from its display-refresh
//! callback (requestAnimationFrame on the web) with the callback timestamp.
//! The scheduler answers whether the simulation step should run this frame.
//! The host keeps rescheduling regardless of the answer while Running.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running,
}

#[derive(Debug)]
pub struct FrameScheduler {
    state: SchedulerState,
    interval_ms: f64,
    last_tick_ms: Option<f64>,
    // A stopped instance is never resumed; a new one is created instead.
    retired: bool,
}

impl FrameScheduler {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            state: SchedulerState::Stopped,
            interval_ms,
            last_tick_ms: None,
            retired: false,
        }
    }

    #[inline]
    pub fn state(&self) -> SchedulerState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Stopped → Running. Returns false if this instance was already started
    /// or has been stopped.
    pub fn start(&mut self) -> bool {
        if self.retired || self.is_running() {
            return false;
        }
        self.state = SchedulerState::Running;
        log::debug!("[sched] running, interval={}ms", self.interval_ms);
        true
    }

    /// Running → Stopped. Terminal for this instance.
    pub fn stop(&mut self) {
        if self.is_running() {
            log::debug!("[sched] stopped");
        }
        self.state = SchedulerState::Stopped;
        self.retired = true;
    }

    /// True at most once per throttle window while running.
    pub fn should_tick(&mut self, now_ms: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        // First frame: measure from zero, as a fresh rAF loop does.
        let last = self.last_tick_ms.unwrap_or(0.0);
        if now_ms - last >= self.interval_ms {
            self.last_tick_ms = Some(now_ms);
            true
        } else {
            false
        }
    }
}
