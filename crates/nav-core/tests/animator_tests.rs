// Host-side tests for the pointer interpolation animator.

use glam::DVec2;
use nav_core::{InterpolationAnimator, POINTER_DAMPING};

#[test]
fn start_requests_scheduling_only_once() {
    let mut a = InterpolationAnimator::new(POINTER_DAMPING);
    assert!(a.start(DVec2::new(100.0, 0.0)));
    assert!(!a.start(DVec2::new(50.0, 0.0)));
    assert!(a.is_active());
    assert!(a.is_scheduled());
    assert_eq!(a.target().unwrap().target_px, DVec2::new(50.0, 0.0));
}

#[test]
fn error_decays_geometrically() {
    let mut a = InterpolationAnimator::new(0.05);
    a.start(DVec2::new(100.0, 0.0));
    let mut current = DVec2::ZERO;
    for n in 1..=60 {
        let step = a.step(current).unwrap();
        assert!(step.reschedule);
        current = step.position_px;
        let expected = 0.95_f64.powi(n) * 100.0;
        let remaining = 100.0 - current.x;
        assert!(
            (remaining - expected).abs() < 1e-9,
            "frame {n}: remaining {remaining}, expected {expected}"
        );
    }
    assert!(100.0 - current.x < 5.0);
    // asymptotic: still running, never exactly there
    assert!(a.is_scheduled());
    assert!(current.x < 100.0);
}

#[test]
fn stop_lets_the_pending_frame_finish_without_rescheduling() {
    let mut a = InterpolationAnimator::new(0.5);
    a.start(DVec2::new(10.0, 10.0));
    a.stop();
    assert!(!a.is_active());
    let last = a.step(DVec2::ZERO).unwrap();
    assert!(!last.reschedule);
    assert_eq!(last.position_px, DVec2::new(5.0, 5.0));
    assert!(a.step(last.position_px).is_none());
    assert!(!a.is_scheduled());
}

#[test]
fn retarget_only_moves_an_active_animation() {
    let mut a = InterpolationAnimator::new(0.05);
    a.retarget(DVec2::new(1.0, 1.0));
    assert!(a.target().is_none());
    a.start(DVec2::new(100.0, 0.0));
    a.retarget(DVec2::new(200.0, 50.0));
    assert_eq!(a.target().unwrap().target_px, DVec2::new(200.0, 50.0));
    a.stop();
    a.retarget(DVec2::new(0.0, 0.0));
    assert_eq!(a.target().unwrap().target_px, DVec2::new(200.0, 50.0));
}

#[test]
fn cancel_skips_the_final_step() {
    let mut a = InterpolationAnimator::new(0.05);
    a.start(DVec2::new(100.0, 0.0));
    a.cancel();
    assert!(a.step(DVec2::ZERO).is_none());
    // a later start schedules again
    assert!(a.start(DVec2::new(1.0, 0.0)));
}
