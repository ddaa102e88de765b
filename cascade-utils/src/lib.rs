//! # Cascade Utils
//!
//! Shared value types for the cascade workspace: block positions, directions,
//! vectors, deterministic random sources and logging setup.

pub mod direction;
pub mod logger;
pub mod math;
pub mod random;
pub mod types;

pub use direction::Direction;
pub use types::{BlockPos, UpdateFlags};
