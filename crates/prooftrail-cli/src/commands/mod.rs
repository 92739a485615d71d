//! Subcommand implementations.

pub mod append;
pub mod canonicalize;
pub mod keygen;
pub mod list;
pub mod verify;
