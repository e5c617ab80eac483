use std::fmt::{Debug, Display};

pub mod announcer;
pub mod barista;
pub mod dispatch;
pub mod order;
pub mod wait_group;

pub use announcer::{Announcer, MemoryAnnouncer, StdoutAnnouncer};
pub use barista::{Barista, OrderReceipt};
pub use dispatch::{CoffeeShop, DispatchReport, Strategy};
pub use order::{random_orders, CoffeeFlavor, CoffeeOrder, CoffeeSize, CoffeeType};
pub use wait_group::{WaitGroup, WaitGroupGuard};

/// Label for the barista that picks up an order. It names no real resource.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BaristaId(pub u32);

impl Debug for BaristaId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Display for BaristaId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// 1-based position of an order in its batch.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderNumber(pub u32);

impl Debug for OrderNumber {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "#{}", self.0)
  }
}

impl Display for OrderNumber {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}
