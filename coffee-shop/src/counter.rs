use std::io::{self, BufRead, Write};

/// Show the strategy banner and ask for the batch size.
pub fn prompt<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
  writeln!(out)?;
  writeln!(out, "{}", title)?;
  writeln!(out)?;
  write!(out, "Number of order: ")?;
  out.flush()
}

/// Read the order count from the first whitespace-delimited token.
///
/// Only the leading integer of the token counts (`4.5` is 4, `12abc` is 12).
/// A token with no leading digits, an out-of-range value, or end of input
/// counts as zero. Negative counts are passed through; they produce an empty
/// batch.
pub fn read_order_count<R: BufRead>(input: &mut R) -> i64 {
  let mut line = String::new();
  loop {
    line.clear();
    match input.read_line(&mut line) {
      Ok(0) | Err(_) => return 0,
      Ok(_) => {
        if let Some(token) = line.split_whitespace().next() {
          return leading_integer(token);
        }
      }
    }
  }
}

fn leading_integer(token: &str) -> i64 {
  let sign = usize::from(token.starts_with(|c: char| c == '+' || c == '-'));
  let digits = token[sign..]
    .find(|c: char| !c.is_ascii_digit())
    .unwrap_or(token.len() - sign);
  token[..sign + digits].parse().unwrap_or(0)
}
