//! Vitrine Carousel Controller
//!
//! A headless controller for an auto-advancing, seamlessly looping,
//! pointer-draggable horizontal carousel. The controller owns the scroll
//! offset and decides, at every frame, which input source is allowed to
//! move it. Rendering is entirely the host's concern: the host feeds
//! pointer events and viewport measurements in, and reads the scroll
//! offset and cursor hint back out.
//!
//! # Features
//!
//! - **Playback arbitration**: dragging beats hovering beats autoplay
//! - **Drag translation**: pointer displacement maps to a clamped offset
//! - **Seamless looping**: the offset wraps to zero when the duplicated
//!   content window is exhausted
//! - **Virtual frames**: scheduling goes through [`FrameScheduler`], so
//!   the whole controller runs under a manually advanced clock in tests

pub mod controller;
pub mod frame;
pub mod state;

pub use controller::{CarouselConfig, CarouselController};
pub use frame::{FrameScheduler, FrameToken, ManualFrameScheduler};
pub use state::{ContentWindow, CursorHint, DragAnchor, PlaybackPhase, Viewport};
