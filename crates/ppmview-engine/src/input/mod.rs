//! Input subsystem.
//!
//! The public API is platform-agnostic and does not expose winit types. The
//! runtime translates platform events into [`InputEvent`]s via
//! [`platform::translate_window_event`] and queues them in an [`InputFrame`].

mod frame;
pub(crate) mod platform;
mod types;

pub use frame::InputFrame;
pub use types::{InputEvent, Key, KeyState, MouseWheelDelta};
