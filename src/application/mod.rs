//! Application layer: use cases around the domain
//!
//! Builds hierarchies from inventory descriptions and reports failures with context.

pub mod error;
pub mod error_ext;
pub mod inventory;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use inventory::{build_network, load_inventory, parse_inventory, sample_network};
