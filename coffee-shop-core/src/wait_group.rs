//! Completion counter shared between a driver and the tasks it launches.
//!
//! Registration happens through [`WaitGroup::enter`] before a task is spawned;
//! the returned guard releases the registration when it is dropped, whether the
//! task returned, panicked or was cancelled.

use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

use tokio::sync::Notify;

#[derive(Debug, Default)]
struct Inner {
  count: AtomicUsize,
  zero: Notify,
}

#[derive(Debug, Clone, Default)]
pub struct WaitGroup {
  inner: Arc<Inner>,
}

impl WaitGroup {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register one unit of work. Must be called before the work is launched.
  pub fn enter(&self) -> WaitGroupGuard {
    self.inner.count.fetch_add(1, Ordering::AcqRel);
    WaitGroupGuard {
      inner: self.inner.clone(),
    }
  }

  pub fn count(&self) -> usize {
    self.inner.count.load(Ordering::Acquire)
  }

  /// Resolves once every registered unit of work has released its guard.
  pub async fn wait(&self) {
    loop {
      let zero = self.inner.zero.notified();
      tokio::pin!(zero);
      // Register interest before checking so a release in between is not missed.
      zero.as_mut().enable();

      if self.count() == 0 {
        return;
      }

      zero.await;
    }
  }
}

/// Releases one registration on drop.
#[derive(Debug)]
pub struct WaitGroupGuard {
  inner: Arc<Inner>,
}

impl Drop for WaitGroupGuard {
  fn drop(&mut self) {
    let previous = self.inner.count.fetch_sub(1, Ordering::AcqRel);
    debug_assert!(previous > 0, "wait group counter underflow");
    if previous == 1 {
      self.inner.zero.notify_waiters();
    }
  }
}
