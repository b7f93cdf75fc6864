//! Interaction with the locally running ZeroTier service.
//!
//! - [`cli`] - Command execution for the `zerotier-cli` control program

mod cli;

// Re-export public functions
pub use cli::{run, zerotier_cli_json};
