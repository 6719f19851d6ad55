//! Core types for the Scout exploration engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other Scout crate: grid positions, the nine
//! move directions, cell classifications, agent identifiers, and the
//! search error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod id;
pub mod position;

pub use cell::CellState;
pub use direction::Direction;
pub use error::SearchError;
pub use id::AgentId;
pub use position::Position;
