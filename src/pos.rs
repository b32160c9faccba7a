//! Stripping part-of-speech tags from `word_TAG` tokenized text.
//!
//! Lines are handled as raw bytes: corpus text is often GB2312/GBK rather than UTF-8, and only the
//! ASCII whitespace and `_` delimiters matter. Token bytes are written back unchanged.
use std::io::{self, BufRead, Write};

use lazy_static::lazy_static;
use regex::bytes::Regex;

lazy_static! {
  static ref TOKEN_SEPARATOR: Regex = Regex::new(r"[ \t\n\r\x0B\x0C]+").unwrap();
}

/// Which part of a `word_TAG` token to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagMode {
  /// keep the word, dropping the final `_TAG` segment
  Words,
  /// keep only the final segment, the tag itself
  Tags,
}
impl Default for TagMode {
  fn default() -> TagMode { TagMode::Words }
}

/// Everything before the last underscore. A token without any underscore has no word portion,
/// and strips to the empty string rather than to itself.
pub fn strip_tag(token: &[u8]) -> &[u8] {
  match token.iter().rposition(|&b| b == b'_') {
    Some(cut) => &token[..cut],
    None => &[],
  }
}

/// The segment after the last underscore (the whole token if there is none)
pub fn tag_of(token: &[u8]) -> &[u8] {
  match token.iter().rposition(|&b| b == b'_') {
    Some(cut) => &token[cut + 1..],
    None => token,
  }
}

/// Transform each whitespace-separated token of `line`, rejoining with single spaces
pub fn transform_line(line: &[u8], mode: TagMode) -> Vec<u8> {
  let keep: fn(&[u8]) -> &[u8] = match mode {
    TagMode::Words => strip_tag,
    TagMode::Tags => tag_of,
  };
  TOKEN_SEPARATOR
    .split(line)
    .filter(|token| !token.is_empty())
    .map(keep)
    .collect::<Vec<_>>()
    .join(&b' ')
}

/// Stream `reader` line by line into `writer`, one transformed line (with a trailing newline) per
/// input line. Returns the number of lines processed.
pub fn process<R: BufRead, W: Write>(mut reader: R, mut writer: W, mode: TagMode) -> io::Result<usize> {
  let mut count = 0;
  let mut line = Vec::new();
  while reader.read_until(b'\n', &mut line)? > 0 {
    writer.write_all(&transform_line(&line, mode))?;
    writer.write_all(b"\n")?;
    line.clear();
    count += 1;
  }
  writer.flush()?;
  Ok(count)
}
