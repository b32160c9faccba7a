//! Inclusive document-ID ranges, as given on the command line (`"low-high"`)
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::{Error, Result};

/// An inclusive range of document IDs. `low > high` is legal and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
  /// Lowest selected ID
  pub low: i64,
  /// Highest selected ID
  pub high: i64,
}

impl Span {
  /// Create a span covering `low..=high`
  pub fn new(low: i64, high: i64) -> Self { Span { low, high } }

  /// Does `id` fall within this span (bounds included)?
  pub fn contains(&self, id: i64) -> bool { self.low <= id && id <= self.high }
}

impl FromStr for Span {
  type Err = Error;

  /// Parses `"<low>-<high>"`. The specifier must split on `-` into exactly two integers.
  fn from_str(arg: &str) -> Result<Span> {
    let invalid = || Error::InvalidSpan(arg.to_string());
    let bounds = arg
      .split('-')
      .map(|part| parse_bound(part.trim()))
      .collect::<std::result::Result<Vec<_>, _>>()
      .map_err(|_| invalid())?;
    match bounds.as_slice() {
      [low, high] => Ok(Span::new(*low, *high)),
      _ => Err(invalid()),
    }
  }
}

/// Bounds beyond the `i64` range saturate, the same range document IDs are limited to.
fn parse_bound(part: &str) -> std::result::Result<i64, ParseIntError> {
  match part.parse::<i64>() {
    Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
    Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
    parsed => parsed,
  }
}

impl fmt::Display for Span {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}-{}", self.low, self.high) }
}

/// Parse every range specifier in order. The first malformed one aborts, and an empty list is an
/// error of its own.
pub fn parse_spans<I, S>(args: I) -> Result<Vec<Span>>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let spans = args
    .into_iter()
    .map(|arg| arg.as_ref().parse::<Span>())
    .collect::<Result<Vec<_>>>()?;
  if spans.is_empty() {
    return Err(Error::NoSpans);
  }
  Ok(spans)
}
