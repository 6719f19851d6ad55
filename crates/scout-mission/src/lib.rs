//! Fleet mission control: exploration, goal discovery and convergence.
//!
//! A [`MissionController`] owns everything shared by the fleet (the
//! perception grid, the visited and frontier sets, the discovered goal)
//! and is asked for one [`Direction`](scout_core::Direction) per agent per
//! tick. The phases it steps through are described by [`MissionState`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod controller;
pub mod error;
pub mod metrics;
pub mod priority;
pub mod state;

pub use agent::Agent;
pub use config::{ConfigError, MissionConfig};
pub use controller::MissionController;
pub use error::MissionError;
pub use metrics::MissionMetrics;
pub use priority::{is_permutation, DEFAULT_PRIORITIES};
pub use state::MissionState;
