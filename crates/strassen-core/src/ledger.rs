//! Per-thread allocation ledger for matrix buffers.
//!
//! Every [`Matrix`](crate::Matrix) records its allocation here and records
//! its release when dropped. The counters are thread-local, so a
//! multiplication running on one thread is never disturbed by another.

use std::cell::Cell;

/// Snapshot of the ledger counters for the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedgerStats {
    /// Matrices currently alive.
    pub live_matrices: u64,
    /// Elements held by live matrices.
    pub live_elements: u64,
    /// High-water mark of `live_elements` since the last reset.
    pub peak_elements: u64,
    /// Matrices allocated since the last reset.
    pub allocated: u64,
    /// Matrices released since the last reset.
    pub released: u64,
}

struct Counters {
    live_matrices: Cell<u64>,
    live_elements: Cell<u64>,
    peak_elements: Cell<u64>,
    allocated: Cell<u64>,
    released: Cell<u64>,
}

thread_local! {
    static COUNTERS: Counters = const {
        Counters {
            live_matrices: Cell::new(0),
            live_elements: Cell::new(0),
            peak_elements: Cell::new(0),
            allocated: Cell::new(0),
            released: Cell::new(0),
        }
    };
}

/// Record that a matrix buffer of `elements` values was allocated.
pub(crate) fn record_alloc(elements: usize) {
    COUNTERS.with(|c| {
        let live = c.live_elements.get() + elements as u64;
        c.live_elements.set(live);
        c.live_matrices.set(c.live_matrices.get() + 1);
        c.allocated.set(c.allocated.get() + 1);
        if live > c.peak_elements.get() {
            c.peak_elements.set(live);
        }
    });
}

/// Record that a matrix buffer of `elements` values was released.
pub(crate) fn record_release(elements: usize) {
    COUNTERS.with(|c| {
        c.live_elements
            .set(c.live_elements.get().saturating_sub(elements as u64));
        c.live_matrices.set(c.live_matrices.get().saturating_sub(1));
        c.released.set(c.released.get() + 1);
    });
}

/// Take a snapshot of the current thread's counters.
#[must_use]
pub fn snapshot() -> LedgerStats {
    COUNTERS.with(|c| LedgerStats {
        live_matrices: c.live_matrices.get(),
        live_elements: c.live_elements.get(),
        peak_elements: c.peak_elements.get(),
        allocated: c.allocated.get(),
        released: c.released.get(),
    })
}

/// Reset the allocation totals and lower the peak to the current live size.
///
/// Live counts are left untouched: matrices that are still alive will
/// release themselves later.
pub fn reset() {
    COUNTERS.with(|c| {
        c.peak_elements.set(c.live_elements.get());
        c.allocated.set(0);
        c.released.set(0);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_snapshot() {
        reset();
        let before = snapshot();
        record_alloc(16);
        record_alloc(4);
        let mid = snapshot();
        assert_eq!(mid.live_matrices, before.live_matrices + 2);
        assert_eq!(mid.live_elements, before.live_elements + 20);
        assert_eq!(mid.allocated, 2);

        record_release(16);
        record_release(4);
        let after = snapshot();
        assert_eq!(after.live_matrices, before.live_matrices);
        assert_eq!(after.released, 2);
        assert!(after.peak_elements >= before.live_elements + 20);
    }

    #[test]
    fn reset_lowers_peak_to_live() {
        record_alloc(100);
        record_release(100);
        reset();
        let snap = snapshot();
        assert_eq!(snap.peak_elements, snap.live_elements);
        assert_eq!(snap.allocated, 0);
        assert_eq!(snap.released, 0);
    }

    #[test]
    fn counters_are_per_thread() {
        reset();
        record_alloc(8);
        let other = std::thread::spawn(|| snapshot().allocated).join().unwrap();
        assert_eq!(other, 0);
        record_release(8);
    }
}
