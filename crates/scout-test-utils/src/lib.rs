//! Test utilities for Scout development.
//!
//! Provides [`Terrain`] (the hidden ground truth a host simulation would
//! own) and brute-force shortest-path oracles used to check the searches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod oracle;
pub mod terrain;

pub use oracle::shortest_distance;
pub use terrain::{Terrain, TerrainError};
