//! Type definitions for the dice duel
//!
//! This module is organized into submodules:
//! - `dice` - Die values, roll outcomes and player names
//! - `layout` - Board geometry computed from the container size
//! - `settings` - Application settings and persistence
//! - `ui` - UI marker components for the window front end

pub mod dice;
pub mod layout;
pub mod settings;
pub mod ui;

// Re-export all public types for convenient access
pub use dice::*;
pub use layout::*;
pub use settings::*;
pub use ui::*;
