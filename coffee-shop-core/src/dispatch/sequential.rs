use std::sync::Arc;

use tracing::debug;

use crate::{announcer::Announcer, barista::Barista};

use super::Ticket;

/// Serve every order on the driver itself, one after another, in batch order.
pub async fn serve_in_turn<A, I>(barista: &Arc<Barista<A>>, tickets: I) -> usize
where
  A: Announcer,
  I: Iterator<Item = Ticket>,
{
  let mut completed = 0;
  for ticket in tickets {
    let elapsed = barista
      .work_order(ticket.barista, ticket.number, &ticket.order)
      .await;
    debug!("Order {:?} served in turn in {:?}", ticket.number, elapsed);
    completed += 1;
  }
  completed
}
