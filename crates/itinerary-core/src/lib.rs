//! Itinerary Board Core
//!
//! The board state for a trip itinerary: place cards partitioned into named,
//! ordered day columns, plus the drag-gesture state machine that rearranges
//! them and the wire types of the persistence service.
//!
//! Everything in this crate is plain data with synchronous operations, so it
//! compiles and tests on the host without any wasm toolchain.

mod error;

pub mod drag;
pub mod partition;
pub mod wire;

pub use error::BoardError;
pub use partition::{Card, Partition, PlaceSelection, DEFAULT_COLUMN_NAME, PENDING_COLUMN_NAME};
