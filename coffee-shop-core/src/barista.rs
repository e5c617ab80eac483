use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use chrono::Local;
use tokio::time::sleep;

use crate::{announcer::Announcer, order::CoffeeOrder, BaristaId, OrderNumber};

const RECEIVE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S%.3f";
// Stamp with milliseconds, e.g. "Jan  2 15:04:05.000".
const RECEIPT_TIME_FORMAT: &str = "%b %e %H:%M:%S%.3f";

/// The four status lines produced for one order, handed back instead of printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
  pub barista: BaristaId,
  pub number: OrderNumber,
  pub receive: String,
  pub serving: String,
  pub finish: String,
  pub complete: String,
  pub elapsed: Duration,
}

impl OrderReceipt {
  pub fn lines(&self) -> [&str; 4] {
    [&self.receive, &self.serving, &self.finish, &self.complete]
  }
}

/// Executes orders. There is no real work: an order is a handful of formatted
/// lines, optionally stretched by a simulated brew time.
pub struct Barista<A> {
  announcer: Arc<A>,
  brew_time: Duration,
}

impl<A: Announcer> Barista<A> {
  pub fn new(announcer: Arc<A>) -> Self {
    Self {
      announcer,
      brew_time: Duration::ZERO,
    }
  }

  pub fn with_brew_time(mut self, brew_time: Duration) -> Self {
    self.brew_time = brew_time;
    self
  }

  pub fn announcer(&self) -> &Arc<A> {
    &self.announcer
  }

  /// Serve an order, announcing each status line as it happens.
  pub async fn work_order(
    &self,
    barista: BaristaId,
    number: OrderNumber,
    order: &CoffeeOrder,
  ) -> Duration {
    // Starts on a fresh line even when the cursor still sits after the prompt.
    self.announcer.announce("");
    let elapsed = self
      .brew(barista, number, order, RECEIVE_TIME_FORMAT, |line| {
        self.announcer.announce(&line)
      })
      .await;
    self.announcer.announce("");
    elapsed
  }

  /// Serve an order silently and return what would have been announced.
  pub async fn prepare_receipt(
    &self,
    barista: BaristaId,
    number: OrderNumber,
    order: &CoffeeOrder,
  ) -> OrderReceipt {
    let mut lines = Vec::with_capacity(4);
    let elapsed = self
      .brew(barista, number, order, RECEIPT_TIME_FORMAT, |line| {
        lines.push(line)
      })
      .await;

    let mut lines = lines.into_iter();
    let mut next = || lines.next().unwrap_or_default();
    OrderReceipt {
      barista,
      number,
      receive: next(),
      serving: next(),
      finish: next(),
      complete: next(),
      elapsed,
    }
  }

  async fn brew<F>(
    &self,
    barista: BaristaId,
    number: OrderNumber,
    order: &CoffeeOrder,
    time_format: &str,
    mut emit: F,
  ) -> Duration
  where
    F: FnMut(String),
  {
    let start = Instant::now();
    emit(format!(
      "Barista number {} receive order number {} at {}, order: {}",
      barista,
      number,
      Local::now().format(time_format),
      order
    ));
    emit(format!("Barista number {} serving order number {}", barista, number));

    if !self.brew_time.is_zero() {
      sleep(self.brew_time).await;
    }

    emit(format!("Barista number {} finish order number {}", barista, number));
    let elapsed = start.elapsed();
    emit(format!("Order number {} completed in {:?}", number, elapsed));
    elapsed
  }
}
