//! Scheduled tick queue.
//!
//! Fluids book their next evaluation here. The queue fires entries in trigger
//! order and keeps at most one pending entry per (position, type).
//!
//! # Architecture
//!
//! - [`ScheduledTick`] - A single scheduled tick entry
//! - [`TickPriority`] - Priority for ordering ticks within the same game tick
//! - [`LevelTicks`] - The de-duplicating queue

mod level_ticks;
mod scheduled_tick;

pub use level_ticks::LevelTicks;
pub use scheduled_tick::{ScheduledTick, TickKey, TickPriority};
