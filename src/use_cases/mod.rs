// Use cases layer: projecting server events and preparing player selections.

pub mod projector;
pub mod select;
pub mod types;

pub use projector::{GameStateProjector, projector_task};
pub use select::{SelectError, prepare_selection};
pub use types::{ClientEvent, Selection};
