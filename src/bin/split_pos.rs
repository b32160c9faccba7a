//! Strip POS tags from `word_TAG` tokens read on stdin
use std::io;

use anyhow::Result;
use chtb_tools::pos::{self, TagMode};
use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(name = "split-pos")]
#[command(about = "Remove the trailing _TAG from every token of every stdin line")]
struct Args {
  /// Keep the tags and drop the words instead
  #[arg(long)]
  tags: bool,
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
  let args = Args::parse();
  let mode = if args.tags { TagMode::Tags } else { TagMode::Words };

  let stdin = io::stdin();
  let stdout = io::stdout();
  let lines = pos::process(stdin.lock(), stdout.lock(), mode)?;
  debug!("processed {} lines", lines);
  Ok(())
}
