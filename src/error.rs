//! Error types shared by the corpus selection and span parsing routines
use std::io;
use std::path::PathBuf;

/// Failures that abort a selection run
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The search root handed to `ctb-files` does not exist
  #[error("no directory?: {}", .0.display())]
  DirectoryNotFound(PathBuf),

  /// A range specifier that is not of the form `<int>-<int>`
  #[error("invalid arg: {0}")]
  InvalidSpan(String),

  /// No range specifier was given at all
  #[error("no spans")]
  NoSpans,

  /// Reading input or writing results failed
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}

/// Alias for Result with the crate's `Error`
pub type Result<T> = std::result::Result<T, Error>;
