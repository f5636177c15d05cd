// Host-side tests for the frame throttle state machine.

use sparkle_core::constants::FRAME_INTERVAL_MS;
use sparkle_core::*;

#[test]
fn new_scheduler_is_stopped_and_never_ticks() {
    let mut s = FrameScheduler::new(FRAME_INTERVAL_MS);
    assert_eq!(s.state(), SchedulerState::Stopped);
    for t in 0..10 {
        assert!(!s.should_tick(t as f64 * 100.0));
    }
}

#[test]
fn ticks_at_most_once_per_window() {
    let mut s = FrameScheduler::new(FRAME_INTERVAL_MS);
    assert!(s.start());
    // 144Hz display: callbacks every ~6.9ms
    let mut ticks = 0;
    let mut t = 0.0;
    while t < 1000.0 {
        if s.should_tick(t) {
            ticks += 1;
        }
        t += 1000.0 / 144.0;
    }
    // Every third callback clears the 16ms window
    assert!((40..=63).contains(&ticks), "got {ticks} ticks in one second");
}

#[test]
fn sixty_hz_display_ticks_every_callback() {
    let mut s = FrameScheduler::new(FRAME_INTERVAL_MS);
    s.start();
    let frame = 1000.0 / 60.0;
    let ticks = (1..=60).filter(|k| s.should_tick(*k as f64 * frame)).count();
    assert_eq!(ticks, 60);
}

#[test]
fn window_boundary_is_inclusive() {
    let mut s = FrameScheduler::new(16.0);
    s.start();
    assert!(!s.should_tick(15.9));
    assert!(s.should_tick(16.0));
    assert!(!s.should_tick(31.9));
    assert!(s.should_tick(32.0));
}

#[test]
fn start_only_once_and_stop_is_terminal() {
    let mut s = FrameScheduler::new(16.0);
    assert!(s.start());
    assert!(!s.start(), "already running");
    s.stop();
    assert_eq!(s.state(), SchedulerState::Stopped);
    assert!(!s.start(), "stopped instances are not resumed");
    assert!(!s.should_tick(1_000.0));
}
