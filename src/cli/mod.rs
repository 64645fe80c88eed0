//! CLI module for the mininotes application

mod app;
mod main;

pub use app::*;
pub use main::*;
