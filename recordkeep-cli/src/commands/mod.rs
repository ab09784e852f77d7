//! Command implementations for the recordkeep CLI

pub mod serve;

pub use serve::{run_serve, App, ServeArgs};
