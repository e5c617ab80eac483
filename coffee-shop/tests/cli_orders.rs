//! Runs the compiled binary with piped stdin and inspects what it prints.

use std::collections::HashSet;
use std::io::{Read, Write};
use std::process::{Command, Output, Stdio};

const KINDS: [&str; 2] = ["Hot", "Ice"];
const SIZES: [&str; 3] = ["Regular", "Medium", "Large"];
const FLAVORS: [&str; 8] = [
    "Americano",
    "Latte",
    "Cappuccino",
    "Espresso",
    "Black",
    "Doppio",
    "Cortado",
    "Red Eye",
];

fn shop_command(args: &[&str], envs: &[(&str, &str)]) -> Command {
    let bin = env!("CARGO_BIN_EXE_coffee-shop");
    let mut command = Command::new(bin);
    command
        .args(args)
        .env_remove("COFFEE_STRATEGY")
        .env_remove("COFFEE_BARISTAS")
        .env_remove("COFFEE_BREW_MS")
        .env("RUST_LOG", "off")
        .envs(envs.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    command
}

fn run_shop(args: &[&str], input: &str) -> Output {
    run_shop_with_env(args, &[], input)
}

fn run_shop_with_env(args: &[&str], envs: &[(&str, &str)], input: &str) -> Output {
    let mut child = shop_command(args, envs)
        .spawn()
        .expect("failed to start coffee-shop binary");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write order count");

    child.wait_with_output().expect("failed to wait for coffee-shop")
}

/// (barista, order number, order) for every receive line.
fn received_orders(stdout: &str) -> Vec<(u32, u32, String)> {
    stdout
        .lines()
        .filter(|line| line.contains(" receive order number "))
        .map(|line| {
            let rest = line
                .strip_prefix("Barista number ")
                .expect("receive line should start with the barista");
            let (barista, rest) = rest
                .split_once(" receive order number ")
                .expect("receive line should name the order");
            let (number, rest) = rest.split_once(" at ").expect("receive line has a time");
            let (_, order) = rest
                .split_once(", order: ")
                .expect("receive line has an order");
            (
                barista.parse().expect("barista id is a number"),
                number.parse().expect("order number is a number"),
                order.to_string(),
            )
        })
        .collect()
}

fn assert_well_formed_order(order: &str) {
    let inner = order
        .strip_prefix('{')
        .and_then(|order| order.strip_suffix('}'))
        .unwrap_or_else(|| panic!("order not braced: {order}"));
    let (kind, rest) = inner.split_once(' ').expect("order has a kind");
    let (size, flavor) = rest.split_once(' ').expect("order has a size and flavor");
    assert!(KINDS.contains(&kind), "unknown kind {kind}");
    assert!(SIZES.contains(&size), "unknown size {size}");
    assert!(FLAVORS.contains(&flavor), "unknown flavor {flavor}");
}

#[test]
fn channel_run_prints_five_distinct_receipts() {
    let output = run_shop(&["channel"], "5\n");
    assert!(
        output.status.success(),
        "coffee-shop exited with non-zero status: {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== ORDER WITH WAITGROUP AND CHANNEL ==="));
    assert!(stdout.contains("Number of order: "));

    let received = received_orders(&stdout);
    assert_eq!(received.len(), 5, "expected five receipts in:\n{stdout}");

    let numbers: HashSet<u32> = received.iter().map(|(_, number, _)| *number).collect();
    assert_eq!(numbers, (1..=5).collect::<HashSet<_>>());

    for (barista, _, order) in &received {
        assert!(*barista < 5, "barista id {barista} out of range");
        assert_well_formed_order(order);
    }

    assert_eq!(
        stdout
            .lines()
            .filter(|line| line.starts_with("Order number ") && line.contains(" completed in "))
            .count(),
        5
    );
    assert!(stdout.contains("WaitGroup via channel process take time: "));
}

#[test]
fn empty_batch_reports_elapsed_time_for_every_strategy() {
    let summaries = [
        ("sequential", "Squential process take time: "),
        ("unsupervised", "Concurrent process take time: "),
        ("wait-group", "Concurrent and WaitGroup process take time: "),
        ("channel", "WaitGroup via channel process take time: "),
    ];

    for (strategy, summary) in summaries {
        let output = run_shop(&[strategy], "0\n");
        assert!(output.status.success(), "{strategy} failed: {:?}", output.status);

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(received_orders(&stdout).is_empty());
        assert!(stdout.contains(summary), "{strategy} printed no summary:\n{stdout}");
    }
}

#[test]
fn wait_group_run_serves_every_order() {
    let output = run_shop(&["wait-group"], "8\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let numbers: HashSet<u32> = received_orders(&stdout)
        .into_iter()
        .map(|(_, number, _)| number)
        .collect();
    assert_eq!(numbers, (1..=8).collect::<HashSet<_>>());
}

#[test]
fn non_numeric_input_serves_nothing() {
    let output = run_shop(&["sequential"], "a flat white\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(received_orders(&stdout).is_empty());
    assert!(stdout.contains("Squential process take time: "));
}

#[test]
fn unknown_strategy_exits_with_usage() {
    let output = run_shop(&["drive-through"], "");
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown strategy `drive-through`"));
    assert!(stderr.contains("Usage:"));
}

#[test]
fn unsupervised_run_abandons_orders_still_brewing() {
    let output = run_shop_with_env(&["unsupervised"], &[("COFFEE_BREW_MS", "500")], "3\n");
    assert!(
        output.status.success(),
        "coffee-shop exited with non-zero status: {:?}",
        output.status
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== ORDER WITH GOROUTINE ==="));
    assert!(stdout.contains("Concurrent process take time: "));
    // main returns long before any brew finishes, so no order gets that far.
    assert!(
        !stdout.contains(" finish order number "),
        "an abandoned order finished:\n{stdout}"
    );
    assert!(!stdout.contains(" completed in "));
}

#[test]
fn closed_stdout_ends_the_run_quietly() {
    let mut child = shop_command(&["sequential"], &[])
        .spawn()
        .expect("failed to start coffee-shop binary");

    // Wait for the prompt, then hang up before any order is announced.
    let mut stdout = child.stdout.take().expect("stdout is piped");
    let mut seen = Vec::new();
    let mut buffer = [0u8; 256];
    while !String::from_utf8_lossy(&seen).contains("Number of order: ") {
        let read = stdout.read(&mut buffer).expect("failed to read prompt");
        assert!(read > 0, "stdout closed before the prompt");
        seen.extend_from_slice(&buffer[..read]);
    }
    drop(stdout);

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(b"200\n")
        .expect("failed to write order count");

    let output = child.wait_with_output().expect("failed to wait for coffee-shop");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "exit {:?}, stderr:\n{stderr}", output.status);
    assert!(!stderr.contains("panicked"), "stderr:\n{stderr}");
}
