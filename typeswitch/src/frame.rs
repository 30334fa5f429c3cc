use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Callback run at the next paint boundary.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Schedules work for the next animation frame.
pub trait FrameScheduler: Clone + 'static {
    fn request_frame(&self, callback: FrameCallback);
}

/// In-process animation frame queue.
///
/// Callbacks requested while a frame runs are deferred to the following
/// frame, like `requestAnimationFrame`.
#[derive(Clone, Default)]
pub struct FrameQueue {
    pending: Rc<RefCell<VecDeque<FrameCallback>>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Run every callback queued before this call. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let count = batch.len();
        for callback in batch {
            callback();
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.borrow_mut().push_back(callback);
    }
}
