use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};

use tracing::debug;

use crate::{announcer::Announcer, barista::Barista, wait_group::WaitGroup};

use super::Ticket;

/// Spawn one task per order and block the driver on a [`WaitGroup`] until every
/// task has released its registration. Completion order between orders is
/// whatever the scheduler makes of it.
pub async fn serve_and_wait<A, I>(barista: &Arc<Barista<A>>, tickets: I) -> usize
where
  A: Announcer,
  I: Iterator<Item = Ticket>,
{
  let group = WaitGroup::new();
  let completed = Arc::new(AtomicUsize::new(0));

  for ticket in tickets {
    let guard = group.enter();
    let barista = barista.clone();
    let completed = completed.clone();
    tokio::spawn(async move {
      let _guard = guard;
      barista
        .work_order(ticket.barista, ticket.number, &ticket.order)
        .await;
      completed.fetch_add(1, Ordering::AcqRel);
    });
  }

  debug!("Waiting on {} orders", group.count());
  group.wait().await;

  completed.load(Ordering::Acquire)
}
