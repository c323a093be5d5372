//! Command-line driver for fog-of-war chess
//!
//! This crate provides:
//! - The scripted demonstration game
//! - Hot-seat play over stdin with fogged views for each side
//! - Random-engine self-play matches configured from TOML
//!
//! # Usage
//!
//! ```bash
//! cargo run -p fog_cli -- demo
//! cargo run -p fog_cli -- play
//! cargo run -p fog_cli -- selfplay --games 20 --seed 7
//! ```

pub mod config;
pub mod demo;
pub mod match_runner;
pub mod session;

pub use config::*;
pub use demo::*;
pub use match_runner::*;
pub use session::*;
