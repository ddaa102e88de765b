//! Cell behaviors driven by grid events.

mod liquid_block;

pub use liquid_block::LiquidBlockBehavior;
