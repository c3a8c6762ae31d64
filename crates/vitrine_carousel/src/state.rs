//! Playback state and measurement types for the carousel controller

// ============================================================================
// Playback Phase
// ============================================================================

/// Snapshot of the drag gesture taken at pointer-down
///
/// Replaying the same pointer position against the same anchor always
/// produces the same offset, so a drag never accumulates rounding drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragAnchor {
    /// Horizontal pointer coordinate at drag start
    pub start_pointer_x: f32,
    /// Scroll offset at drag start
    pub base_offset: f32,
}

/// Which input source currently controls the scroll offset
///
/// Exactly one variant is active at a time, which makes the precedence
/// rule (`Dragging > Hovering > AutoPlay`) a property of the type rather
/// than a convention over boolean flags. The transient "drag started
/// while hovering" overlap is carried inside the dragging variant so
/// releasing the pointer inside the bounds returns to `Hovering` instead
/// of resuming autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlaybackPhase {
    /// Frame-driven advancement; no pointer inside the bounds
    #[default]
    AutoPlay,
    /// Pointer inside the bounds but not pressed; autoplay is paused
    Hovering,
    /// Pointer pressed; the drag translator owns the offset
    Dragging {
        /// Gesture snapshot from pointer-down
        anchor: DragAnchor,
        /// Whether the pointer was inside the bounds when the drag began
        resume_hover: bool,
    },
}

impl PlaybackPhase {
    /// True while a drag gesture is active
    pub fn is_dragging(&self) -> bool {
        matches!(self, PlaybackPhase::Dragging { .. })
    }

    /// True while the pointer rests inside the bounds without dragging
    pub fn is_hovering(&self) -> bool {
        matches!(self, PlaybackPhase::Hovering)
    }
}

/// Cursor shape the host should apply over the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    /// Open hand; the content can be grabbed
    #[default]
    Grab,
    /// Closed hand; a drag is in progress
    Grabbing,
}

// ============================================================================
// Measurement
// ============================================================================

/// Host-supplied measurement of the carousel at mount
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible width of the carousel, in content pixels
    pub width: f32,
    /// Total width of the scrollable content, in content pixels
    pub content_width: f32,
}

impl Viewport {
    /// Maximum reachable scroll offset
    ///
    /// A viewport wider than its content cannot scroll at all, so the
    /// offset stays pinned at zero.
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.width).max(0.0)
    }
}

/// Layout of the duplicated item strip the host renders
///
/// The source list is rendered twice so the wrap back to offset zero lands
/// on identical imagery. This is a presentation concern: the controller
/// itself only ever sees the resulting `content_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentWindow {
    /// Number of items in the source list (before duplication)
    pub item_count: usize,
    /// Fixed width of each item
    pub item_width: f32,
    /// Fixed spacing between neighbouring items
    pub gap: f32,
}

impl ContentWindow {
    /// Total width of the duplicated strip: `2n` items with `2n - 1` gaps
    pub fn content_width(&self) -> f32 {
        let doubled = self.item_count * 2;
        if doubled == 0 {
            return 0.0;
        }
        doubled as f32 * self.item_width + (doubled - 1) as f32 * self.gap
    }
}
