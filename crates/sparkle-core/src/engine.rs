//! One mounted cursor instance.
//!
//! `CursorEngine` owns the pointer tracker, the sparkle simulator and the
//! frame scheduler for a single mount. Everything is plain owned state: no
//! globals, so independent engines (or parallel tests) never interfere.
//!
//! The host forwards input events and display-refresh callbacks; the engine
//! answers with [`ImmediatePaint`] for pointer moves and a [`FrameSnapshot`]
//! for every executed tick. After [`CursorEngine::unmount`] every entry point
//! is a no-op, so a stray callback that fires late cannot touch any state.

use crate::params::{ParamsError, SparkleParams};
use crate::particles::{BatchIds, Particle, ParticleSimulator};
use crate::pointer::{InteractiveHandle, PointerState, PointerTracker};
use crate::scheduler::{FrameScheduler, SchedulerState};
use crate::snapshot::{FrameSnapshot, ImmediatePaint, ParticleView, PointerView};

/// Outcome of a viewport resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    /// Crossed below the width threshold: scheduler stopped, sparkles
    /// cleared, press and hover dropped.
    EnteredTouch,
    /// Crossed back above it: a fresh scheduler is running.
    LeftTouch,
}

pub struct CursorEngine {
    params: SparkleParams,
    pointer: PointerTracker,
    sim: ParticleSimulator,
    scheduler: FrameScheduler,
    mounted: bool,
    ticks: u64,
}

impl CursorEngine {
    /// Validates the parameters and mounts. The scheduler starts right away
    /// unless the viewport classifies as a touch device.
    pub fn new(params: SparkleParams, seed: u64, viewport_width: f64) -> Result<Self, ParamsError> {
        let sim = ParticleSimulator::new(params.clone(), seed)?;
        let pointer = PointerTracker::new(viewport_width, params.touch_width_threshold);
        let mut scheduler = FrameScheduler::new(params.frame_interval_ms);
        if !pointer.is_touch_device() {
            scheduler.start();
        }
        log::info!(
            "[engine] mounted width={} touch={}",
            viewport_width,
            pointer.is_touch_device()
        );
        Ok(Self {
            params,
            pointer,
            sim,
            scheduler,
            mounted: true,
            ticks: 0,
        })
    }

    #[inline]
    fn is_active(&self) -> bool {
        self.mounted && !self.pointer.is_touch_device()
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn is_touch_device(&self) -> bool {
        self.pointer.is_touch_device()
    }

    /// Whether the host should keep its frame callback scheduled.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.mounted && self.scheduler.is_running()
    }

    #[inline]
    pub fn scheduler_state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.sim.particles()
    }

    /// Number of simulation steps executed since mount.
    #[inline]
    pub fn ticks_executed(&self) -> u64 {
        self.ticks
    }

    /// Records the new pointer position and emits one sparkle batch there.
    /// Returns the pointer view for immediate painting, or `None` when inert.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<ImmediatePaint> {
        self.pointer_move_with_batch(x, y).map(|(paint, _)| paint)
    }

    /// Same as [`pointer_move`](Self::pointer_move), also returning the ids
    /// of the emitted batch.
    pub fn pointer_move_with_batch(&mut self, x: f32, y: f32) -> Option<(ImmediatePaint, BatchIds)> {
        if !self.is_active() {
            return None;
        }
        self.pointer.on_pointer_move(x, y);
        let ids = self.sim.spawn_batch(x, y);
        Some((self.pointer.state().into(), ids))
    }

    pub fn pointer_down(&mut self) {
        if self.is_active() {
            self.pointer.on_press();
        }
    }

    pub fn pointer_up(&mut self) {
        if self.is_active() {
            self.pointer.on_release();
        }
    }

    pub fn enter_interactive(&mut self, handle: InteractiveHandle) {
        if self.is_active() {
            self.pointer.on_enter_interactive(handle);
        }
    }

    pub fn leave_interactive(&mut self, handle: InteractiveHandle) {
        if self.is_active() {
            self.pointer.on_leave_interactive(handle);
        }
    }

    /// Registration is kept across touch transitions so handles survive a
    /// round trip through a narrow viewport.
    pub fn register_interactive(&mut self, handle: InteractiveHandle) -> bool {
        self.mounted && self.pointer.register_interactive(handle)
    }

    pub fn unregister_interactive(&mut self, handle: InteractiveHandle) -> bool {
        self.mounted && self.pointer.unregister_interactive(handle)
    }

    pub fn resize(&mut self, viewport_width: f64) -> Transition {
        if !self.mounted || !self.pointer.resize(viewport_width) {
            return Transition::Unchanged;
        }
        if self.pointer.is_touch_device() {
            self.scheduler.stop();
            self.pointer.reset_interaction();
            let dropped = self.sim.len();
            self.sim.clear();
            log::info!(
                "[engine] touch viewport width={}, dropped {} sparkles",
                viewport_width,
                dropped
            );
            Transition::EnteredTouch
        } else {
            self.scheduler = FrameScheduler::new(self.params.frame_interval_ms);
            self.scheduler.start();
            log::info!("[engine] pointer viewport width={}", viewport_width);
            Transition::LeftTouch
        }
    }

    /// Display-refresh callback. Runs at most one simulation step per
    /// throttle window and returns the snapshot when it did.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<FrameSnapshot> {
        if !self.mounted || !self.scheduler.should_tick(now_ms) {
            return None;
        }
        self.sim.tick();
        self.ticks += 1;
        Some(self.snapshot())
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            pointer: PointerView::from(self.pointer.state()),
            particles: self.sim.particles().iter().map(ParticleView::from).collect(),
        }
    }

    /// Terminal teardown. Later calls to any entry point change nothing.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.scheduler.stop();
        self.sim.clear();
        log::info!("[engine] unmounted after {} ticks", self.ticks);
    }
}
