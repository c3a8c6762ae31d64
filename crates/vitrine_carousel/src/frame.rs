//! Frame scheduling abstraction
//!
//! The controller never talks to a display refresh loop directly. It asks
//! a [`FrameScheduler`] for a callback before the next paint and holds the
//! returned token so the pending frame can be cancelled synchronously when
//! a pause or unmount demands it. Tests substitute a manually advanced
//! scheduler for the real one.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a pending frame callback
    pub struct FrameToken;
}

/// Per-frame scheduling primitive
///
/// Implementations must guarantee that a cancelled token never fires and
/// that cancelling an unknown or already-fired token is a no-op.
pub trait FrameScheduler {
    /// Register a callback before the next paint and return its token
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a pending frame; silently ignores stale tokens
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Manually advanced scheduler for tests and headless hosts
///
/// Frames never fire on their own; the host drains them with
/// [`ManualFrameScheduler::run_frame`] once per simulated paint.
#[derive(Debug, Default)]
pub struct ManualFrameScheduler {
    pending: SlotMap<FrameToken, ()>,
}

impl ManualFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames currently waiting to fire
    pub fn pending_frames(&self) -> usize {
        self.pending.len()
    }

    /// True if the given token is still pending
    pub fn is_pending(&self, token: FrameToken) -> bool {
        self.pending.contains_key(token)
    }

    /// Consume one pending frame, returning its token
    ///
    /// Returns `None` when nothing is scheduled, which is how a paused or
    /// unmounted carousel looks from the outside.
    pub fn run_frame(&mut self) -> Option<FrameToken> {
        let token = self.pending.keys().next()?;
        self.pending.remove(token);
        Some(token)
    }
}

impl FrameScheduler for ManualFrameScheduler {
    fn request_frame(&mut self) -> FrameToken {
        self.pending.insert(())
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_frame_is_pending_until_run() {
        let mut scheduler = ManualFrameScheduler::new();
        let token = scheduler.request_frame();
        assert!(scheduler.is_pending(token));
        assert_eq!(scheduler.run_frame(), Some(token));
        assert_eq!(scheduler.pending_frames(), 0);
    }

    #[test]
    fn cancelled_frame_never_fires() {
        let mut scheduler = ManualFrameScheduler::new();
        let token = scheduler.request_frame();
        scheduler.cancel_frame(token);
        assert_eq!(scheduler.run_frame(), None);
    }

    #[test]
    fn cancelling_a_stale_token_is_a_no_op() {
        let mut scheduler = ManualFrameScheduler::new();
        let token = scheduler.request_frame();
        assert_eq!(scheduler.run_frame(), Some(token));
        // Already fired; cancelling again must not panic or disturb state.
        scheduler.cancel_frame(token);
        let next = scheduler.request_frame();
        assert!(scheduler.is_pending(next));
    }
}
