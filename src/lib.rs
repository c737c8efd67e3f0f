//! netinv: a network inventory hierarchy rendered as an ASCII tree.
//!
//! A [`domain::Network`] owns machines, each machine owns IP addresses and
//! hardware units, storage devices own partitions. Every node renders itself
//! through [`domain::Render`] and duplicates itself through [`domain::DeepClone`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
