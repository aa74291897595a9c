//! Tooling Layer
//!
//! The demo application and the command-line interface that drives it.

pub mod app;
pub mod cli;

pub use app::{render_app, register_services, ProfileView};
pub use cli::{Cli, CliContext, Commands};
