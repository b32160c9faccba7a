//! # chtb-tools
//! Small utilities for working with a Chinese Treebank style corpus: selecting `chtb_<id>` files
//! by ranges of document IDs, and stripping POS tags from `word_TAG` tokenized text.

#![deny(
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unused_import_braces,
  unused_qualifications
)]

pub mod corpus;
pub mod error;
pub mod pos;
pub mod span;

pub use crate::error::{Error, Result};
