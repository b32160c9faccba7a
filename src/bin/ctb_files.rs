//! Print the corpus files under a directory whose `chtb_<id>` falls within any given ID range
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use chtb_tools::corpus::Selection;
use chtb_tools::span::parse_spans;
use clap::Parser;

#[derive(Parser)]
#[command(name = "ctb-files")]
#[command(about = "Select chtb_<id> corpus files under a directory by inclusive ID ranges")]
struct Args {
  /// Corpus directory to search recursively
  dir: PathBuf,
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

  let mut selection = Selection::checked(&args.dir, Vec::new())?;
  selection.spans = parse_spans(&args.ranges)?;
  selection.unique = args.unique;
  selection.sorted = args.sort;

  let stdout = io::stdout();
  selection.write_to(stdout.lock())?;
  Ok(())
}
