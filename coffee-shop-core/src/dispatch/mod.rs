//! The four ways the shop can work through a batch of orders.

use std::{fmt::Display, str::FromStr, sync::Arc, time::Duration, time::Instant};

use rand::{rngs::StdRng, Rng};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
  announcer::Announcer,
  barista::Barista,
  order::{random_orders, CoffeeOrder},
  BaristaId, OrderNumber,
};

pub mod channel;
pub mod sequential;
pub mod synchronized;
pub mod unsupervised;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
  Sequential,
  /// Launch and abandon. Kept for contrast only; see [`unsupervised`].
  Unsupervised,
  WaitGroup,
  Channel,
}

impl Strategy {
  pub const ALL: [Strategy; 4] = [
    Strategy::Sequential,
    Strategy::Unsupervised,
    Strategy::WaitGroup,
    Strategy::Channel,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Strategy::Sequential => "sequential",
      Strategy::Unsupervised => "unsupervised",
      Strategy::WaitGroup => "wait-group",
      Strategy::Channel => "channel",
    }
  }

  /// Banner shown before the order count prompt.
  pub fn title(&self) -> &'static str {
    match self {
      Strategy::Sequential => "=== ORDER WITHOUT GOROUTINE ===",
      Strategy::Unsupervised => "=== ORDER WITH GOROUTINE ===",
      Strategy::WaitGroup => "=== ORDER WITH WAITGROUP ===",
      Strategy::Channel => "=== ORDER WITH WAITGROUP AND CHANNEL ===",
    }
  }

  fn summary_label(&self) -> &'static str {
    match self {
      Strategy::Sequential => "Squential process",
      Strategy::Unsupervised => "Concurrent process",
      Strategy::WaitGroup => "Concurrent and WaitGroup process",
      Strategy::Channel => "WaitGroup via channel process",
    }
  }
}

impl Display for Strategy {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown strategy `{0}`, expected one of: sequential, unsupervised, wait-group, channel")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
  type Err = ParseStrategyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "sequential" => Ok(Strategy::Sequential),
      "unsupervised" | "goroutine" => Ok(Strategy::Unsupervised),
      "wait-group" | "waitgroup" => Ok(Strategy::WaitGroup),
      "channel" => Ok(Strategy::Channel),
      _ => Err(ParseStrategyError(s.to_string())),
    }
  }
}

/// An order with the labels the driver gave it.
#[derive(Debug, Clone, Copy)]
pub struct Ticket {
  pub barista: BaristaId,
  pub number: OrderNumber,
  pub order: CoffeeOrder,
}

/// Number the orders from 1 and draw a barista for each one as it is reached.
fn issue_tickets<'a, R: Rng + ?Sized>(
  orders: Vec<CoffeeOrder>,
  barista_count: u32,
  rng: &'a mut R,
) -> impl ExactSizeIterator<Item = Ticket> + 'a {
  orders
    .into_iter()
    .enumerate()
    .map(move |(index, order)| Ticket {
      barista: BaristaId(rng.gen_range(0..barista_count)),
      number: OrderNumber(index as u32 + 1),
      order,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
  pub strategy: Strategy,
  pub orders: usize,
  /// Orders whose barista had finished when the driver stopped to report.
  pub completed: usize,
  pub elapsed: Duration,
}

pub struct CoffeeShop<A, R = StdRng> {
  barista: Arc<Barista<A>>,
  barista_count: u32,
  rng: R,
}

impl<A: Announcer, R: Rng> CoffeeShop<A, R> {
  /// `barista_count` is clamped to at least one.
  pub fn new(barista: Barista<A>, barista_count: u32, rng: R) -> Self {
    Self {
      barista: Arc::new(barista),
      barista_count: barista_count.max(1),
      rng,
    }
  }

  pub fn take_orders(&mut self, count: i64) -> Vec<CoffeeOrder> {
    random_orders(count, &mut self.rng)
  }

  pub async fn serve(&mut self, strategy: Strategy, orders: Vec<CoffeeOrder>) -> DispatchReport {
    let total = orders.len();
    info!("Serving {} orders with the {} strategy", total, strategy);

    let start = Instant::now();
    let tickets = issue_tickets(orders, self.barista_count, &mut self.rng);
    let completed = match strategy {
      Strategy::Sequential => sequential::serve_in_turn(&self.barista, tickets).await,
      Strategy::Unsupervised => unsupervised::launch_and_abandon(&self.barista, tickets),
      Strategy::WaitGroup => synchronized::serve_and_wait(&self.barista, tickets).await,
      Strategy::Channel => channel::serve_through_counter(&self.barista, tickets).await,
    };
    let elapsed = start.elapsed();

    let announcer = self.barista.announcer();
    if strategy == Strategy::Channel {
      announcer.announce("");
    }
    announcer.announce(&format!(
      "{} take time: {:?}",
      strategy.summary_label(),
      elapsed
    ));
    announcer.announce("");

    debug!(
      "{} strategy reported {}/{} completed orders after {:?}",
      strategy, completed, total, elapsed
    );

    DispatchReport {
      strategy,
      orders: total,
      completed,
      elapsed,
    }
  }
}
