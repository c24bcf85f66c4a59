//! The fixed-capacity object pool
//!
//! Holds the CPU mirror of the ball storage buffer and the allocation
//! cursor. wgpu offers no persistently mapped device-local buffer across
//! backends, so mutations land in the mirror and mark a dirty slot range;
//! [`flush_dirty`](BallPool::flush_dirty) hands that range to the renderer
//! for upload before the draw. Every mutation made during a frame is
//! therefore visible to the same frame's draw.

use std::ops::Range;

use glam::{Vec2, Vec3};
use thiserror::Error;

use super::record::BallRecord;

/// Rejected pool operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    /// `add` would consume the last free slot of the backing buffer.
    #[error("ball pool is full (capacity {capacity})")]
    CapacityExhausted { capacity: usize },
    /// An index referred to a slot outside the live prefix.
    #[error("slot index {index} out of range (live count {live})")]
    IndexOutOfRange { index: usize, live: usize },
}

/// Fixed-capacity pool of [`BallRecord`] slots.
///
/// Slots in `[0, len)` are allocated; slots in `[len, capacity)` are free
/// and hold stale data. The live count stays strictly below capacity for
/// the pool's lifetime.
pub struct BallPool {
    slots: Vec<BallRecord>,
    len: usize,
    /// Slot range modified since the last flush, kept as one merged span.
    dirty: Option<Range<usize>>,
}

impl BallPool {
    /// Create a pool with `capacity` default-inactive slots and no live
    /// balls. The capacity never changes afterwards.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ball pool needs at least one slot");
        Self {
            slots: vec![BallRecord::inactive(); capacity],
            len: 0,
            dirty: None,
        }
    }

    /// Fixed slot count of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current live count (the allocation cursor).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live prefix, `[0, len)`. Free slots are never exposed.
    pub fn balls(&self) -> &[BallRecord] {
        &self.slots[..self.len]
    }

    /// Mutable view of the live prefix. Marks it all dirty, since the
    /// caller may touch any of it.
    pub fn balls_mut(&mut self) -> &mut [BallRecord] {
        if self.len > 0 {
            self.mark_dirty(0..self.len);
        }
        &mut self.slots[..self.len]
    }

    /// Write a live record into the next free slot and advance the cursor.
    ///
    /// Fails with [`PoolError::CapacityExhausted`] rather than overflowing;
    /// the caller decides whether to drop the request or evict.
    pub fn add(&mut self, position: Vec2, colour: Vec3, scale: f32) -> Result<(), PoolError> {
        if self.len + 1 >= self.capacity() {
            return Err(PoolError::CapacityExhausted {
                capacity: self.capacity(),
            });
        }
        self.slots[self.len] = BallRecord::new(position, colour, scale);
        self.mark_dirty(self.len..self.len + 1);
        self.len += 1;
        Ok(())
    }

    /// Deactivate the last live slot and retreat the cursor. No-op while
    /// one or fewer balls are live; the pool never drains to zero once a
    /// ball has been added.
    ///
    /// The record itself is not cleared - only its visibility flag - and
    /// the freed slot may be overwritten by a later `add`.
    pub fn remove_last(&mut self) {
        if self.len <= 1 {
            return;
        }
        self.len -= 1;
        self.slots[self.len].set_active(false);
        // The slot is free now but its cleared flag must still reach the
        // GPU, since the draw covers the full capacity.
        self.mark_dirty(self.len..self.len + 1);
    }

    /// Exchange the full contents of two live slots. Combined with
    /// [`remove_last`](Self::remove_last) this gives arbitrary-index
    /// removal: swap the target to the end, then pop it.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), PoolError> {
        for index in [a, b] {
            if index >= self.len {
                return Err(PoolError::IndexOutOfRange {
                    index,
                    live: self.len,
                });
            }
        }
        self.slots.swap(a, b);
        let (lo, hi) = (a.min(b), a.max(b));
        self.mark_dirty(lo..hi + 1);
        Ok(())
    }

    /// Primitives per draw: one triangle per slot, active or not. Sizing
    /// the draw by capacity keeps the draw parameters stable as balls come
    /// and go; the shader discards inactive slots.
    pub fn triangle_count(&self) -> u32 {
        self.capacity() as u32
    }

    /// Drain the dirty range for upload. Returns the first dirty slot
    /// index and the records to write there, or `None` when the GPU copy
    /// is already current.
    pub fn flush_dirty(&mut self) -> Option<(usize, &[BallRecord])> {
        let range = self.dirty.take()?;
        Some((range.start, &self.slots[range]))
    }

    /// Full backing array, free slots included. Upload-side only.
    pub(crate) fn records(&self) -> &[BallRecord] {
        &self.slots
    }

    fn mark_dirty(&mut self, range: Range<usize>) {
        self.dirty = Some(match self.dirty.take() {
            Some(dirty) => dirty.start.min(range.start)..dirty.end.max(range.end),
            None => range,
        });
    }
}
