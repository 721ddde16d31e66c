//! Roll Control Module
//!
//! This module drives one roll-and-report cycle: the time-based animation
//! state machine, the debounced resize handling, and the controller that
//! ties them to the trigger button and the result texts.

mod animator;
mod controller;
mod debounce;
mod systems;
mod ui;

pub use animator::*;
pub use controller::*;
pub use debounce::*;
pub use systems::*;
pub use ui::*;
