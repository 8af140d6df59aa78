//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod demo;
pub mod estimate;
pub mod periods;
