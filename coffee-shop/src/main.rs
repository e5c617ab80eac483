use std::{io, sync::Arc};

use coffee_shop_core::{Barista, CoffeeShop, StdoutAnnouncer};
use config::{ConfigError, ShopConfig};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod config;
mod counter;

fn print_usage(program: &str) {
  eprintln!("Usage: {program} [sequential|unsupervised|wait-group|channel]");
  eprintln!();
  eprintln!("Environment:");
  eprintln!("  {}  strategy when no argument is given (default unsupervised)", config::STRATEGY_VAR);
  eprintln!("  {}  number of baristas to draw ids from (default 5)", config::BARISTAS_VAR);
  eprintln!("  {}   simulated brew time per order in ms (default 0)", config::BREW_MS_VAR);
  eprintln!("  RUST_LOG         log filter for diagnostics on stderr (default info)");
}

fn exit_with_usage(program: &str, error: &ConfigError) -> ! {
  eprintln!("{error}");
  print_usage(program);
  std::process::exit(2);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let program = std::env::args()
    .next()
    .unwrap_or_else(|| "coffee-shop".to_string());

  let config = match ShopConfig::load(std::env::args().skip(1)) {
    Ok(config) => config,
    Err(error) => exit_with_usage(&program, &error),
  };

  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
  let subscriber = FmtSubscriber::builder()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .finish();

  tracing::subscriber::set_global_default(subscriber)?;

  info!("Opening coffee shop with config: {:?}", config);

  counter::prompt(&mut io::stdout().lock(), config.strategy.title())?;
  let count = counter::read_order_count(&mut io::stdin().lock());

  let barista = Barista::new(Arc::new(StdoutAnnouncer)).with_brew_time(config.brew_time);
  let mut shop = CoffeeShop::new(barista, config.barista_count, StdRng::from_entropy());

  let orders = shop.take_orders(count);
  let report = shop.serve(config.strategy, orders).await;

  // Unsupervised orders still in flight are dropped with the runtime.
  info!("Closing shop: {:?}", report);

  Ok(())
}
