//! Scheduled tick entries and their firing order.

use std::cmp::{Ordering, Reverse};

use cascade_utils::BlockPos;

/// Ordering among ticks that fire on the same game tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TickPriority {
    /// Runs before everything else due on the same tick.
    High,
    /// The priority of every fluid evaluation.
    #[default]
    Normal,
    /// Runs after everything else due on the same tick.
    Low,
}

/// What a tick is about: a position and the type being ticked there.
///
/// The queue keeps at most one pending tick per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickKey<T> {
    /// The position to evaluate.
    pub pos: BlockPos,
    /// The type being ticked, for fluids the fluid kind.
    pub tick_type: T,
}

/// A pending evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ScheduledTick<T> {
    /// Position and type.
    pub key: TickKey<T>,
    /// The absolute game tick this fires on.
    pub trigger_tick: u64,
    /// Ordering among ticks due on the same game tick.
    pub priority: TickPriority,
    /// Insertion counter, breaks the remaining ties first come first served.
    pub sub_tick_order: u64,
}

impl<T> ScheduledTick<T> {
    /// Creates a tick for `tick_type` at `pos`.
    pub fn new(
        pos: BlockPos,
        tick_type: T,
        trigger_tick: u64,
        priority: TickPriority,
        sub_tick_order: u64,
    ) -> Self {
        Self {
            key: TickKey { pos, tick_type },
            trigger_tick,
            priority,
            sub_tick_order,
        }
    }

    /// Larger values fire first, matching the max-heap the queue uses.
    fn firing_order(&self) -> (Reverse<u64>, Reverse<TickPriority>, Reverse<u64>) {
        (
            Reverse(self.trigger_tick),
            Reverse(self.priority),
            Reverse(self.sub_tick_order),
        )
    }
}

// Two entries are equal when they fire at the same moment, whatever they tick.
impl<T> PartialEq for ScheduledTick<T> {
    fn eq(&self, other: &Self) -> bool {
        self.firing_order() == other.firing_order()
    }
}

impl<T> Eq for ScheduledTick<T> {}

impl<T> PartialOrd for ScheduledTick<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ScheduledTick<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.firing_order().cmp(&other.firing_order())
    }
}
