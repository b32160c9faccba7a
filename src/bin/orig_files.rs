//! Print the corpus files under `orig/` whose `chtb_<id>` falls within any given ID range
use std::io;

use anyhow::Result;
use chtb_tools::corpus::{Selection, DEFAULT_ROOT};
use chtb_tools::span::parse_spans;
use clap::Parser;

#[derive(Parser)]
#[command(name = "orig-files")]
#[command(about = "Select chtb_<id> corpus files under orig/ by inclusive ID ranges")]
struct Args {
  /// Inclusive ID ranges, as `low-high`
  ranges: Vec<String>,
  /// Print each file once, even when several ranges contain it
  #[arg(long)]
  unique: bool,
  /// Visit directory entries in name order
  #[arg(long)]
  sort: bool,
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let args = Args::parse();

  // a missing orig/ is not an error, the walk just finds nothing
  let mut selection = Selection::new(DEFAULT_ROOT, parse_spans(&args.ranges)?);
  selection.unique = args.unique;
  selection.sorted = args.sort;

  let stdout = io::stdout();
  selection.write_to(stdout.lock())?;
  Ok(())
}
