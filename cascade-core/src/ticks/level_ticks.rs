//! The de-duplicating scheduled tick queue.

use std::collections::BinaryHeap;
use std::hash::Hash;

use cascade_utils::BlockPos;
use rustc_hash::FxHashSet;

use super::{ScheduledTick, TickKey, TickPriority};

/// Priority queue of scheduled ticks with de-duplication.
///
/// When a tick is scheduled for a (pos, type) that already has a pending
/// tick, the new tick is ignored and the existing one keeps its timing. Once
/// a tick has been polled, the same (pos, type) may be scheduled again, even
/// from inside the evaluation that the polled tick triggered.
pub struct LevelTicks<T: Copy + Eq + Hash> {
    /// Pending ticks, next to fire on top.
    tick_queue: BinaryHeap<ScheduledTick<T>>,
    /// Keys of every pending tick.
    pending: FxHashSet<TickKey<T>>,
    /// Next insertion order value.
    sub_tick_counter: u64,
}

impl<T: Copy + Eq + Hash> LevelTicks<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_queue: BinaryHeap::new(),
            pending: FxHashSet::default(),
            sub_tick_counter: 0,
        }
    }

    /// Schedules a tick to fire at `current_tick + delay`.
    ///
    /// Returns `true` if the tick was scheduled, `false` if one was already
    /// pending for this (pos, type).
    pub fn schedule(
        &mut self,
        pos: BlockPos,
        tick_type: T,
        current_tick: u64,
        delay: u32,
        priority: TickPriority,
    ) -> bool {
        if !self.pending.insert(TickKey { pos, tick_type }) {
            return false;
        }

        let trigger_tick = current_tick + u64::from(delay);
        let sub_tick_order = self.sub_tick_counter;
        self.sub_tick_counter += 1;

        self.tick_queue.push(ScheduledTick::new(
            pos,
            tick_type,
            trigger_tick,
            priority,
            sub_tick_order,
        ));

        log::trace!("Scheduled tick at {pos} for tick {trigger_tick} (delay={delay})");
        true
    }

    /// Schedules a tick with normal priority.
    pub fn schedule_tick(
        &mut self,
        pos: BlockPos,
        tick_type: T,
        current_tick: u64,
        delay: u32,
    ) -> bool {
        self.schedule(pos, tick_type, current_tick, delay, TickPriority::Normal)
    }

    /// Checks if a tick is already scheduled for the given position and type.
    #[must_use]
    pub fn has_scheduled_tick(&self, pos: BlockPos, tick_type: T) -> bool {
        self.pending.contains(&TickKey { pos, tick_type })
    }

    /// Removes and returns up to `max_ticks` ticks due at or before
    /// `current_tick`, in firing order.
    ///
    /// Due ticks beyond the cap stay queued and fire on a later call.
    #[must_use]
    pub fn tick(&mut self, current_tick: u64, max_ticks: usize) -> Vec<(BlockPos, T)> {
        let mut result = Vec::new();

        while result.len() < max_ticks {
            match self.tick_queue.peek() {
                Some(next) if next.trigger_tick <= current_tick => {}
                _ => break,
            }
            let Some(tick) = self.tick_queue.pop() else {
                break;
            };
            self.pending.remove(&tick.key);
            result.push((tick.key.pos, tick.key.tick_type));
        }

        result
    }

    /// The trigger tick of the next pending tick.
    #[must_use]
    pub fn next_trigger_tick(&self) -> Option<u64> {
        self.tick_queue.peek().map(|tick| tick.trigger_tick)
    }

    /// Returns the number of pending ticks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tick_queue.len()
    }

    /// Returns `true` if there are no pending ticks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tick_queue.is_empty()
    }
}

impl<T: Copy + Eq + Hash> Default for LevelTicks<T> {
    fn default() -> Self {
        Self::new()
    }
}
