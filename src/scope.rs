//! Scoped Value Supply
//!
//! Thread-local stack of supplied values. A supply pushes a frame that lives
//! until its guard drops; a read walks the stack from the innermost frame
//! outward and returns the first frame for the requested handle. This gives
//! nested suppliers of the same handle shadowing semantics, while suppliers of
//! different handles compose independently.
//!
//! Frames never cross threads: a value supplied on one thread is invisible to
//! every other thread.

use crate::types::HandleId;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::sync::Arc;

type ErasedValue = Arc<dyn Any + Send + Sync>;

struct Frame {
    seq: u64,
    handle: HandleId,
    value: ErasedValue,
}

thread_local! {
    static FRAMES: RefCell<Vec<Frame>> = const { RefCell::new(Vec::new()) };
    static NEXT_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Keeps one supplied value in scope; dropping it ends the supply.
///
/// Guards are tied to the thread that created them. Dropping guards out of
/// order removes exactly the guard's own frame, leaving the others intact.
#[must_use = "the value is only supplied while the guard is alive"]
pub struct SupplyGuard {
    seq: u64,
    handle: HandleId,
    _not_send: PhantomData<*const ()>,
}

impl SupplyGuard {
    pub(crate) fn push(handle: HandleId, value: ErasedValue) -> Self {
        let seq = NEXT_SEQ.with(|next| {
            let seq = next.get();
            next.set(seq.wrapping_add(1));
            seq
        });
        FRAMES.with(|frames| frames.borrow_mut().push(Frame { seq, handle, value }));
        Self {
            seq,
            handle,
            _not_send: PhantomData,
        }
    }

    /// The handle this guard supplies a value for
    pub fn handle_id(&self) -> HandleId {
        self.handle
    }
}

impl Drop for SupplyGuard {
    fn drop(&mut self) {
        // try_with: the thread-local may already be gone during thread teardown
        let removed = FRAMES.try_with(|frames| {
            let mut frames = frames.borrow_mut();
            frames
                .iter()
                .rposition(|f| f.seq == self.seq)
                .map(|pos| frames.remove(pos))
        });
        // The value's own Drop may read or supply; release the borrow first.
        drop(removed);
    }
}

/// Nearest value supplied for `handle` on the current thread
pub(crate) fn nearest(handle: HandleId) -> Option<ErasedValue> {
    FRAMES.with(|frames| {
        frames
            .borrow()
            .iter()
            .rev()
            .find(|f| f.handle == handle)
            .map(|f| Arc::clone(&f.value))
    })
}

/// Number of live supply frames on the current thread
pub fn depth() -> usize {
    FRAMES.with(|frames| frames.borrow().len())
}
