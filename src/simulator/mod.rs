//! Game balance simulator for Monte Carlo analysis.
//!
//! Run many simulated playthroughs to analyze:
//! - Questions needed to clear each zone
//! - Research and chest spending patterns
//! - Coin and gem income over a run
//!
//! The simulator drives the same action reducer as a live session, so
//! simulation results match real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
