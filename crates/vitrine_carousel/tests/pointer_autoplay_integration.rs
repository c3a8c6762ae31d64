//! Integration tests for the carousel controller under a virtual frame clock
//!
//! These tests verify that:
//! - A full drag gesture hands the offset back to autoplay cleanly
//! - Hover pauses and drag pauses compose without losing the offset
//! - Only one autoplay loop ever exists for a controller instance

use vitrine_carousel::{CarouselConfig, CarouselController, ManualFrameScheduler};

/// Full gesture: grab the strip, fling it, release, and let autoplay
/// carry on from where the drag left it.
#[test]
fn drag_then_autoplay_resumes_from_the_dragged_offset() {
    let mut scheduler = ManualFrameScheduler::new();
    let mut controller = CarouselController::new(CarouselConfig::default());
    controller.set_viewport(400.0, 500.0, &mut scheduler); // max_scroll = 100

    controller.pointer_down(0.0, &mut scheduler);
    assert!(controller.pointer_move(-30.0));
    // base 0, walk (-30 - 0) * 2 = -60, offset 0 - (-60) = 60
    assert_eq!(controller.scroll_offset(), 60.0);

    controller.pointer_up(&mut scheduler);
    assert!(controller.may_auto_advance());

    // Autoplay increments by 1.5 per frame from the released offset.
    scheduler.run_frame().expect("frame");
    controller.tick(&mut scheduler);
    assert_eq!(controller.scroll_offset(), 61.5);

    scheduler.run_frame().expect("frame");
    controller.tick(&mut scheduler);
    assert_eq!(controller.scroll_offset(), 63.0);

    // Run out the rest of the window; the offset must wrap, never escape.
    let mut wrapped = false;
    for _ in 0..100 {
        scheduler.run_frame().expect("frame");
        controller.tick(&mut scheduler);
        let offset = controller.scroll_offset();
        assert!((0.0..=100.0).contains(&offset));
        if offset == 0.0 {
            wrapped = true;
            break;
        }
    }
    assert!(wrapped, "autoplay never wrapped around");
}

/// A drag that starts from a hover goes back to the hover pause on
/// release, and only a pointer-leave restarts the loop.
#[test]
fn hover_drag_hover_keeps_the_loop_parked() {
    let mut scheduler = ManualFrameScheduler::new();
    let mut controller = CarouselController::new(CarouselConfig::default());
    controller.set_viewport(400.0, 1000.0, &mut scheduler);

    // Advance a little so the pause offset is distinguishable from zero.
    for _ in 0..4 {
        scheduler.run_frame().expect("frame");
        controller.tick(&mut scheduler);
    }
    assert_eq!(controller.scroll_offset(), 6.0);

    controller.pointer_enter(&mut scheduler);
    controller.pointer_down(200.0, &mut scheduler);
    controller.pointer_move(190.0);
    assert_eq!(controller.scroll_offset(), 26.0);

    controller.pointer_up(&mut scheduler);
    // Still inside the bounds: paused, nothing scheduled.
    assert!(!controller.may_auto_advance());
    assert_eq!(scheduler.pending_frames(), 0);

    controller.pointer_leave(&mut scheduler);
    scheduler.run_frame().expect("frame");
    controller.tick(&mut scheduler);
    assert_eq!(controller.scroll_offset(), 27.5);
}

/// Re-entrant pause/resume churn must never stack up multiple pending
/// frames for the same controller.
#[test]
fn pause_resume_churn_leaves_at_most_one_pending_frame() {
    let mut scheduler = ManualFrameScheduler::new();
    let mut controller = CarouselController::new(CarouselConfig::default());
    controller.set_viewport(400.0, 1000.0, &mut scheduler);

    for _ in 0..10 {
        controller.pointer_enter(&mut scheduler);
        controller.pointer_leave(&mut scheduler);
        assert!(scheduler.pending_frames() <= 1);
    }
    assert_eq!(scheduler.pending_frames(), 1);

    controller.unmount(&mut scheduler);
    assert_eq!(scheduler.pending_frames(), 0);
}
