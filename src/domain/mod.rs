//! Domain layer: the inventory hierarchy, its renderer and deep clone
//!
//! This layer is independent of external concerns (no I/O besides printing, no CLI, no config loading).

pub mod clone;
pub mod element;
pub mod entities;

pub use clone::{deep_clone, DeepClone};
pub use element::{prefix, Element, Render};
pub use entities::*;
