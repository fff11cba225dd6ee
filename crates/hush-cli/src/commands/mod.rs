//! Command implementations.

mod silence;

pub use silence::SilenceCommand;
