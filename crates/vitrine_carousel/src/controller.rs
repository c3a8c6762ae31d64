//! Looping carousel controller
//!
//! Composes three tightly coupled responsibilities around one mutable
//! state record:
//!
//! - **Playback arbitration**: pointer enter/leave/down/up decide which
//!   input source owns the scroll offset, with dragging taking precedence
//!   over hovering, and hovering over autoplay.
//! - **Drag translation**: pointer movement maps to a clamped offset while
//!   a drag is active.
//! - **Loop scheduling**: a per-frame tick advances the offset and wraps
//!   it back to zero when the duplicated content window is exhausted.
//!
//! The controller is single-threaded and event-driven: every handler runs
//! to completion, mutates state, and synchronously cancels or re-arms the
//! pending frame before returning. At most one frame token is ever live
//! per controller, so two autoplay loops can never coexist.

use tracing::{debug, trace};

use crate::frame::{FrameScheduler, FrameToken};
use crate::state::{CursorHint, DragAnchor, PlaybackPhase, Viewport};

// ============================================================================
// Configuration
// ============================================================================

/// Tuning constants for autoplay and drag feel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Offset advance per frame while autoplay runs, in content pixels
    pub autoplay_step: f32,
    /// Multiplier from pointer displacement to content displacement
    ///
    /// A value above 1.0 gives the strip a faster-than-1:1 feel: dragging
    /// the pointer one unit moves the content by `drag_sensitivity` units.
    pub drag_sensitivity: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_step: 1.5,
            drag_sensitivity: 2.0,
        }
    }
}

impl CarouselConfig {
    /// Slower autoplay for dense strips
    pub fn gentle() -> Self {
        Self {
            autoplay_step: 0.75,
            ..Default::default()
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Headless state machine behind a looping screenshot carousel
///
/// The host forwards pointer events and the per-frame callback, applies
/// [`CarouselController::scroll_offset`] as the horizontal scroll position
/// of its viewport, and styles the pointer after
/// [`CarouselController::cursor`].
#[derive(Debug)]
pub struct CarouselController {
    config: CarouselConfig,
    /// Current horizontal scroll position; always in `[0, max_scroll]`
    offset: f32,
    phase: PlaybackPhase,
    /// Measurement supplied by the host at mount; `None` until measured
    viewport: Option<Viewport>,
    /// Token of the pending autoplay frame, if one is scheduled
    scheduled_frame: Option<FrameToken>,
}

impl CarouselController {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            phase: PlaybackPhase::AutoPlay,
            viewport: None,
            scheduled_frame: None,
        }
    }

    // =========================================================================
    // Host outputs
    // =========================================================================

    /// Current horizontal scroll position, in content pixels
    pub fn scroll_offset(&self) -> f32 {
        self.offset
    }

    /// Cursor shape derived from the drag state
    pub fn cursor(&self) -> CursorHint {
        if self.phase.is_dragging() {
            CursorHint::Grabbing
        } else {
            CursorHint::Grab
        }
    }

    /// Current playback phase
    pub fn phase(&self) -> PlaybackPhase {
        self.phase
    }

    /// True while an autoplay frame is waiting to fire
    pub fn has_scheduled_frame(&self) -> bool {
        self.scheduled_frame.is_some()
    }

    /// Maximum reachable offset; zero until the host measures the viewport
    pub fn max_scroll(&self) -> f32 {
        self.viewport.map(|v| v.max_scroll()).unwrap_or(0.0)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Record the host's measurement and start autoplay if nothing pauses it
    ///
    /// Until this is called the carousel degrades to a static view: drags
    /// and ticks are silent no-ops.
    pub fn set_viewport(
        &mut self,
        viewport_width: f32,
        content_width: f32,
        scheduler: &mut dyn FrameScheduler,
    ) {
        let viewport = Viewport {
            width: viewport_width,
            content_width,
        };
        debug!(
            viewport_width,
            content_width,
            max_scroll = viewport.max_scroll(),
            "carousel measured"
        );
        self.viewport = Some(viewport);
        self.offset = self.offset.clamp(0.0, viewport.max_scroll());
        if self.may_auto_advance() {
            self.arm(scheduler);
        }
    }

    /// Release the pending frame token; the only resource the controller owns
    pub fn unmount(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.disarm(scheduler);
    }

    // =========================================================================
    // Playback arbitration
    // =========================================================================

    /// True iff autoplay currently owns the offset
    ///
    /// Pure predicate over the playback phase; dragging and hovering both
    /// veto advancement.
    pub fn may_auto_advance(&self) -> bool {
        matches!(self.phase, PlaybackPhase::AutoPlay)
    }

    /// Pointer crossed into the carousel's bounds
    pub fn pointer_enter(&mut self, scheduler: &mut dyn FrameScheduler) {
        match self.phase {
            PlaybackPhase::AutoPlay => {
                // No silent continuation while paused.
                self.disarm(scheduler);
                self.phase = PlaybackPhase::Hovering;
            }
            PlaybackPhase::Hovering => {}
            PlaybackPhase::Dragging { anchor, .. } => {
                self.phase = PlaybackPhase::Dragging {
                    anchor,
                    resume_hover: true,
                };
            }
        }
    }

    /// Pointer left the carousel's bounds
    ///
    /// Leaving ends a drag in progress as well as the hover pause, so
    /// autoplay always resumes from the offset at pause time.
    pub fn pointer_leave(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.phase.is_dragging() {
            trace!(offset = self.offset, "drag ended by pointer leave");
        }
        self.phase = PlaybackPhase::AutoPlay;
        self.arm(scheduler);
    }

    /// Pointer pressed inside the carousel's bounds
    pub fn pointer_down(&mut self, pointer_x: f32, scheduler: &mut dyn FrameScheduler) {
        // Unmeasured carousels cannot scroll, so there is nothing to drag.
        if self.viewport.is_none() {
            return;
        }
        let resume_hover = self.phase.is_hovering();
        self.disarm(scheduler);
        self.phase = PlaybackPhase::Dragging {
            anchor: DragAnchor {
                start_pointer_x: pointer_x,
                base_offset: self.offset,
            },
            resume_hover,
        };
    }

    /// Pointer released
    ///
    /// If the pointer is still inside the bounds the carousel stays paused
    /// as a hover; otherwise autoplay re-arms.
    pub fn pointer_up(&mut self, scheduler: &mut dyn FrameScheduler) {
        let PlaybackPhase::Dragging { resume_hover, .. } = self.phase else {
            return;
        };
        if resume_hover {
            self.phase = PlaybackPhase::Hovering;
        } else {
            self.phase = PlaybackPhase::AutoPlay;
            self.arm(scheduler);
        }
    }

    // =========================================================================
    // Drag translation
    // =========================================================================

    /// Translate pointer movement into a scroll offset
    ///
    /// Returns true when the host must suppress the event's default action
    /// (text or image selection while dragging). Outside an active drag, or
    /// before measurement, the call is a silent no-op.
    ///
    /// The offset is recomputed from the drag anchor on every call, so the
    /// translation is idempotent for a given `(pointer_x, anchor)` pair.
    pub fn pointer_move(&mut self, pointer_x: f32) -> bool {
        let PlaybackPhase::Dragging { anchor, .. } = self.phase else {
            return false;
        };
        let Some(viewport) = self.viewport else {
            return false;
        };
        let walk = (pointer_x - anchor.start_pointer_x) * self.config.drag_sensitivity;
        self.offset = (anchor.base_offset - walk).clamp(0.0, viewport.max_scroll());
        true
    }

    // =========================================================================
    // Loop scheduling
    // =========================================================================

    /// Advance autoplay by one frame
    ///
    /// Called by the host when the frame it requested fires. A tick that
    /// arrives while paused neither mutates the offset nor reschedules;
    /// the arbiter re-arms the loop on the next state change instead of
    /// busy-polling.
    pub fn tick(&mut self, scheduler: &mut dyn FrameScheduler) {
        // The frame that invoked us has fired; its token is spent.
        self.scheduled_frame = None;

        if !self.may_auto_advance() {
            return;
        }
        let Some(viewport) = self.viewport else {
            return;
        };

        let max_scroll = viewport.max_scroll();
        let advanced = self.offset + self.config.autoplay_step;
        if advanced >= max_scroll {
            // The duplicated window shows the same imagery at both ends,
            // so restarting at zero is imperceptible.
            trace!(offset = self.offset, max_scroll, "carousel wrapped");
            self.offset = 0.0;
        } else {
            self.offset = advanced;
        }

        self.scheduled_frame = Some(scheduler.request_frame());
    }

    // =========================================================================
    // Frame bookkeeping
    // =========================================================================

    /// Schedule the next autoplay frame unless one is already pending
    ///
    /// Scheduling starts only once the host has measured the viewport.
    fn arm(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.viewport.is_none() || self.scheduled_frame.is_some() {
            return;
        }
        self.scheduled_frame = Some(scheduler.request_frame());
    }

    /// Synchronously cancel the pending autoplay frame, if any
    fn disarm(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(token) = self.scheduled_frame.take() {
            scheduler.cancel_frame(token);
        }
    }
}

impl Default for CarouselController {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ManualFrameScheduler;

    fn measured(max_scroll: f32) -> (CarouselController, ManualFrameScheduler) {
        let mut scheduler = ManualFrameScheduler::new();
        let mut controller = CarouselController::default();
        controller.set_viewport(400.0, 400.0 + max_scroll, &mut scheduler);
        (controller, scheduler)
    }

    /// Drain one frame and tick the controller with it.
    fn step(controller: &mut CarouselController, scheduler: &mut ManualFrameScheduler) {
        scheduler.run_frame().expect("a frame should be pending");
        controller.tick(scheduler);
    }

    #[test]
    fn autoplay_starts_after_measurement() {
        let mut scheduler = ManualFrameScheduler::new();
        let mut controller = CarouselController::default();
        assert!(!controller.has_scheduled_frame());

        controller.set_viewport(400.0, 1000.0, &mut scheduler);
        assert!(controller.has_scheduled_frame());

        step(&mut controller, &mut scheduler);
        assert_eq!(controller.scroll_offset(), 1.5);
        // Tick rescheduled itself.
        assert!(controller.has_scheduled_frame());
    }

    #[test]
    fn gentle_config_halves_the_autoplay_step() {
        let mut scheduler = ManualFrameScheduler::new();
        let mut controller = CarouselController::new(CarouselConfig::gentle());
        controller.set_viewport(400.0, 1000.0, &mut scheduler);

        step(&mut controller, &mut scheduler);
        step(&mut controller, &mut scheduler);
        assert_eq!(controller.scroll_offset(), 1.5);
    }

    #[test]
    fn tick_wraps_to_zero_at_the_end_of_the_window() {
        let (mut controller, mut scheduler) = measured(100.0);
        controller.offset = 99.5;

        step(&mut controller, &mut scheduler);
        assert_eq!(controller.scroll_offset(), 0.0);
    }

    #[test]
    fn tick_wraps_from_exactly_max_scroll() {
        let (mut controller, mut scheduler) = measured(100.0);
        controller.offset = 100.0;

        step(&mut controller, &mut scheduler);
        assert_eq!(controller.scroll_offset(), 0.0);
    }

    #[test]
    fn offset_stays_within_bounds_across_a_full_loop() {
        let (mut controller, mut scheduler) = measured(100.0);
        for _ in 0..200 {
            step(&mut controller, &mut scheduler);
            let offset = controller.scroll_offset();
            assert!((0.0..=100.0).contains(&offset), "offset {offset} escaped");
        }
    }

    #[test]
    fn hover_pauses_without_rescheduling() {
        let (mut controller, mut scheduler) = measured(100.0);
        step(&mut controller, &mut scheduler);
        let paused_at = controller.scroll_offset();

        controller.pointer_enter(&mut scheduler);
        assert!(!controller.may_auto_advance());
        assert!(!controller.has_scheduled_frame());
        assert_eq!(scheduler.pending_frames(), 0);

        // No frames fire while paused; the offset is untouched.
        assert_eq!(scheduler.run_frame(), None);
        assert_eq!(controller.scroll_offset(), paused_at);

        // Leaving resumes from the paused offset, not from zero.
        controller.pointer_leave(&mut scheduler);
        step(&mut controller, &mut scheduler);
        assert_eq!(controller.scroll_offset(), paused_at + 1.5);
    }

    #[test]
    fn dragging_and_a_scheduled_frame_are_mutually_exclusive() {
        let (mut controller, mut scheduler) = measured(100.0);
        assert!(controller.has_scheduled_frame());

        controller.pointer_enter(&mut scheduler);
        controller.pointer_down(10.0, &mut scheduler);
        assert!(controller.phase().is_dragging());
        assert!(!controller.has_scheduled_frame());
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn drag_translation_clamps_to_both_edges() {
        let (mut controller, mut scheduler) = measured(100.0);
        controller.offset = 20.0;
        controller.pointer_down(50.0, &mut scheduler);

        // Forward past the left edge: 20 - (60 - 50) * 2 = 0 (clamped).
        controller.pointer_move(60.0);
        assert_eq!(controller.scroll_offset(), 0.0);

        // Backward within range: 20 - (40 - 50) * 2 = 40.
        controller.pointer_move(40.0);
        assert_eq!(controller.scroll_offset(), 40.0);
    }

    #[test]
    fn drag_translation_is_idempotent_per_anchor() {
        let (mut controller, mut scheduler) = measured(100.0);
        controller.offset = 20.0;
        controller.pointer_down(50.0, &mut scheduler);

        controller.pointer_move(43.0);
        let first = controller.scroll_offset();
        controller.pointer_move(43.0);
        assert_eq!(controller.scroll_offset(), first);
    }

    #[test]
    fn move_without_a_drag_is_a_no_op() {
        let (mut controller, _scheduler) = measured(100.0);
        controller.offset = 30.0;

        assert!(!controller.pointer_move(500.0));
        assert_eq!(controller.scroll_offset(), 30.0);
    }

    #[test]
    fn drag_before_measurement_is_a_no_op() {
        let mut scheduler = ManualFrameScheduler::new();
        let mut controller = CarouselController::default();

        controller.pointer_down(10.0, &mut scheduler);
        assert!(!controller.phase().is_dragging());
        assert!(!controller.pointer_move(50.0));
        assert_eq!(controller.scroll_offset(), 0.0);
    }

    #[test]
    fn release_inside_the_bounds_stays_paused_as_hover() {
        let (mut controller, mut scheduler) = measured(100.0);
        controller.pointer_enter(&mut scheduler);
        controller.pointer_down(10.0, &mut scheduler);

        controller.pointer_up(&mut scheduler);
        assert!(controller.phase().is_hovering());
        assert!(!controller.has_scheduled_frame());
    }

    #[test]
    fn release_outside_the_bounds_resumes_autoplay() {
        let (mut controller, mut scheduler) = measured(100.0);
        controller.pointer_down(10.0, &mut scheduler);

        controller.pointer_up(&mut scheduler);
        assert!(controller.may_auto_advance());
        assert!(controller.has_scheduled_frame());
    }

    #[test]
    fn cursor_tracks_the_drag_state() {
        let (mut controller, mut scheduler) = measured(100.0);
        assert_eq!(controller.cursor(), CursorHint::Grab);

        controller.pointer_down(0.0, &mut scheduler);
        assert_eq!(controller.cursor(), CursorHint::Grabbing);

        controller.pointer_up(&mut scheduler);
        assert_eq!(controller.cursor(), CursorHint::Grab);
    }

    #[test]
    fn negative_max_scroll_pins_the_offset_at_zero() {
        // Viewport wider than content: no scrolling possible.
        let mut scheduler = ManualFrameScheduler::new();
        let mut controller = CarouselController::default();
        controller.set_viewport(800.0, 500.0, &mut scheduler);
        assert_eq!(controller.max_scroll(), 0.0);

        controller.pointer_down(100.0, &mut scheduler);
        controller.pointer_move(-300.0);
        assert_eq!(controller.scroll_offset(), 0.0);
        controller.pointer_up(&mut scheduler);

        step(&mut controller, &mut scheduler);
        assert_eq!(controller.scroll_offset(), 0.0);
    }

    #[test]
    fn unmount_cancels_the_pending_frame() {
        let (mut controller, mut scheduler) = measured(100.0);
        assert_eq!(scheduler.pending_frames(), 1);

        controller.unmount(&mut scheduler);
        assert!(!controller.has_scheduled_frame());
        assert_eq!(scheduler.pending_frames(), 0);
    }
}
