//! Systems for the dice duel window
//!
//! This module is organized into submodules:
//! - `setup` - Camera, page layout and the initial board measurement
//! - `rendering` - Display list to UI node painting
//! - `resize` - Debounced window resize handling

pub mod rendering;
pub mod resize;
pub mod setup;

pub use rendering::*;
pub use resize::*;
pub use setup::*;
