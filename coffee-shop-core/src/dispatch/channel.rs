//! Dispatch whose results come back through a bounded queue.
//!
//! Producers never announce anything themselves. Each one pushes an
//! [`OrderReceipt`] into a channel sized to the batch, so a push never waits
//! for room. A supervisor closes the channel once the wait group reaches zero,
//! which means the consumer sees end-of-stream only after the last receipt.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
  announcer::Announcer,
  barista::{Barista, OrderReceipt},
  wait_group::WaitGroup,
};

use super::Ticket;

/// Launch one producer per ticket plus the closing supervisor, and hand back
/// the receiving end.
pub fn spawn_producers<A, I>(barista: &Arc<Barista<A>>, tickets: I) -> mpsc::Receiver<OrderReceipt>
where
  A: Announcer,
  I: ExactSizeIterator<Item = Ticket>,
{
  // A tokio channel cannot have zero capacity; an empty batch sends nothing.
  let (sender, receiver) = mpsc::channel(tickets.len().max(1));
  let group = WaitGroup::new();

  for ticket in tickets {
    let guard = group.enter();
    let barista = barista.clone();
    let sender = sender.clone();
    tokio::spawn(async move {
      let _guard = guard;
      let receipt = barista
        .prepare_receipt(ticket.barista, ticket.number, &ticket.order)
        .await;
      if let Err(error) = sender.send(receipt).await {
        warn!(
          "Receipt for order {:?} had nowhere to go: {}",
          ticket.number, error
        );
      }
    });
  }

  tokio::spawn(async move {
    group.wait().await;
    drop(sender);
    debug!("All producers finished, receipt channel closed");
  });

  receiver
}

/// Read exactly one receipt per ticket, in arrival order, announcing each.
pub async fn serve_through_counter<A, I>(barista: &Arc<Barista<A>>, tickets: I) -> usize
where
  A: Announcer,
  I: ExactSizeIterator<Item = Ticket>,
{
  let expected = tickets.len();
  let mut receipts = spawn_producers(barista, tickets);
  let announcer = barista.announcer();

  let mut received = 0;
  while received < expected {
    match receipts.recv().await {
      Some(receipt) => {
        announcer.announce("");
        for line in receipt.lines() {
          announcer.announce(line);
        }
        announcer.announce("");
        received += 1;
      }
      None => {
        warn!(
          "Receipt channel closed after {} of {} receipts",
          received, expected
        );
        break;
      }
    }
  }

  if receipts.recv().await.is_some() {
    warn!("Receipt channel delivered more receipts than orders");
  }

  received
}
