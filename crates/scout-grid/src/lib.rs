//! Bounded grids and accumulated perception for Scout.
//!
//! [`GridBounds`] defines the rectangle the fleet operates in and its
//! 8-connected neighbourhood. [`Observation`] is one partial snapshot as
//! supplied by the host each tick; [`PerceptionGrid`] folds snapshots into
//! a single canonical classification that only ever gains knowledge.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod error;
pub mod grid;
pub mod observation;

pub use bounds::GridBounds;
pub use error::GridError;
pub use grid::{MergeStats, PerceptionGrid};
pub use observation::Observation;
