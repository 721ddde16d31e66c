pub mod plugin;
pub mod render;
pub mod roll_control;
pub mod systems;
pub mod types;

pub use plugin::*;
pub use render::*;
pub use roll_control::*;
pub use systems::*;
pub use types::*;
