//! Launch-and-abandon dispatch.
//!
//! **Not a pattern to copy.** Every order gets its own task and nothing keeps
//! track of them: the driver reports as soon as the last task is spawned. When
//! the runtime shuts down (for the binary, when `main` returns) every task that
//! has not finished is dropped mid-order and its remaining lines are never
//! announced. That loss is the behaviour this strategy exists to show.

use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

use tracing::{debug, warn};

use crate::{announcer::Announcer, barista::Barista};

use super::Ticket;

/// Spawn one detached task per order and return without waiting for any of
/// them. Returns how many had already finished at that moment, which is
/// usually none.
///
/// Must be called from within a tokio runtime.
pub fn launch_and_abandon<A, I>(barista: &Arc<Barista<A>>, tickets: I) -> usize
where
  A: Announcer,
  I: Iterator<Item = Ticket>,
{
  let completed = Arc::new(AtomicUsize::new(0));
  let mut launched = 0;

  for ticket in tickets {
    let barista = barista.clone();
    let completed = completed.clone();
    // The handle is dropped on purpose: nobody will ever join this task.
    drop(tokio::spawn(async move {
      barista
        .work_order(ticket.barista, ticket.number, &ticket.order)
        .await;
      completed.fetch_add(1, Ordering::Relaxed);
    }));
    launched += 1;
  }

  let completed = completed.load(Ordering::Relaxed);
  if completed < launched {
    warn!(
      "Abandoning {} of {} unsupervised orders",
      launched - completed,
      launched
    );
  } else {
    debug!("All {} unsupervised orders finished before the driver", launched);
  }
  completed
}
