mod args;
mod commands;
mod handlers;
pub mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
