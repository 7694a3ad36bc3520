//! Single-slot boolean cell shared between event sources and the frame loop.

use core::sync::atomic::{AtomicBool, AtomicU8, AtomicU32, Ordering};
use std::sync::Arc;

struct Slot {
    value: AtomicBool,
    /// Bumped on every write that changes `value`.
    changes: AtomicU32,
    /// Source tag of the writer that stored the current value.
    last_writer: AtomicU8,
}

/// Source tag of writers that were never given one.
const UNTAGGED: u8 = 0;

/// Constructor namespace for the writer/reader pair.
pub struct FlagCell;

impl FlagCell {
    /// Create a cell holding `initial` and return its two halves.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(initial: bool) -> (FlagWriter, FlagReader) {
        let slot = Arc::new(Slot {
            value: AtomicBool::new(initial),
            changes: AtomicU32::new(0),
            last_writer: AtomicU8::new(UNTAGGED),
        });
        (
            FlagWriter {
                slot: Arc::clone(&slot),
                source: UNTAGGED,
            },
            FlagReader { slot },
        )
    }
}

/// Write half.  Cloneable so several sources can drive one cell.
#[derive(Clone)]
pub struct FlagWriter {
    slot: Arc<Slot>,
    source: u8,
}

impl FlagWriter {
    /// Another writer on the same cell whose writes carry `source`.
    pub fn tagged(&self, source: u8) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            source,
        }
    }

    /// Store `value`.  Returns `true` if it differs from the previous one.
    pub fn set(&self, value: bool) -> bool {
        self.slot.last_writer.store(self.source, Ordering::Release);
        let prev = self.slot.value.swap(value, Ordering::AcqRel);
        if prev != value {
            self.slot.changes.fetch_add(1, Ordering::Release);
        }
        prev != value
    }

    /// Clear the cell only if this writer's source made the last write.
    /// Returns `true` if the value changed.
    pub fn release_if_last_writer(&self) -> bool {
        if self.slot.last_writer.load(Ordering::Acquire) != self.source {
            return false;
        }
        self.set(false)
    }

    /// Current value, as last written by any writer.
    pub fn get(&self) -> bool {
        self.slot.value.load(Ordering::Acquire)
    }
}

/// Read half, owned by the consumer.
#[derive(Clone)]
pub struct FlagReader {
    slot: Arc<Slot>,
}

impl FlagReader {
    /// Latest value.
    pub fn sample(&self) -> bool {
        self.slot.value.load(Ordering::Acquire)
    }

    /// Number of value changes since the cell was created (wraps).
    pub fn change_count(&self) -> u32 {
        self.slot.changes.load(Ordering::Acquire)
    }
}
