//! View transform state.
//!
//! [`ViewState`] holds the scalar parameters (quarter-turn rotation, uniform
//! scale, horizontal shear, pan offsets) mutated by discrete input events.
//! [`ViewState::compose`] turns them into the 4x4 matrix uploaded each frame.
//!
//! The state is owned by a single consumer; event sources feed it through
//! [`ViewAction`] values drained in arrival order.

mod action;
mod compose;
mod state;

pub use action::{ViewAction, ViewSignal};
pub use state::ViewState;
