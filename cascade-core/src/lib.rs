//! # Cascade Core
//!
//! A tick-driven liquid flow engine for voxel grids.
//!
//! Fluid cells spread, recede, fall and harden one scheduled evaluation at a
//! time. The engine reaches the grid only through the [`BlockAccess`] and
//! [`FluidTickScheduler`] traits; [`World`] is a ready-made grid that
//! implements both.

pub mod behavior;
pub mod config;
pub mod fluid;
pub mod random;
pub mod ticks;
pub mod world;

pub use config::{ConfigError, FluidConfig};
pub use fluid::{FlowingFluid, flow_vector, fluid_behaviour};
pub use random::FluidRandom;
pub use world::{BlockAccess, FluidTickScheduler, World};
