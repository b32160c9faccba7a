//! Selection of Chinese Treebank corpus files by document ID.
//!
//! Corpus files follow the `chtb_<digits>...` naming convention, where the leading digit run is
//! the document ID. A `Selection` walks a search root and yields the path of every file whose ID
//! lies within one of its spans.
//!
//! A file is yielded **once per span that contains it**: with spans `1-5` and `3-10`, the file
//! `chtb_0004.mrg` is reported twice. Set `Selection::unique` to collapse such repeats.
use std::cmp::Ordering;
use std::ffi::OsStr;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::bytes::Regex;
use walkdir::IntoIter as WalkDirIterator;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::span::Span;

/// The search root of `orig-files`
pub const DEFAULT_ROOT: &str = "orig/";

lazy_static! {
  static ref CHTB_FILE_NAME: Regex = Regex::new(r"^chtb_([0-9]+)").unwrap();
}

/// Extract the document ID from a corpus file name (not a full path).
/// Returns `None` for names outside the `chtb_<digits>` convention, and for IDs too large to fall
/// within any span. Only the leading bytes are inspected, so the rest of the name need not be
/// valid UTF-8.
pub fn document_id<S: AsRef<OsStr> + ?Sized>(file_name: &S) -> Option<i64> {
  let file_name = file_name.as_ref();
  let captures = CHTB_FILE_NAME.captures(name_bytes(file_name)?)?;
  // the capture is ASCII digits only
  let digits = std::str::from_utf8(captures.get(1)?.as_bytes()).ok()?;
  match digits.parse::<i64>() {
    Ok(id) => Some(id),
    Err(_) => {
      debug!("document id of {:?} overflows, matches no span", file_name);
      None
    },
  }
}

#[cfg(unix)]
fn name_bytes(file_name: &OsStr) -> Option<&[u8]> { Some(file_name.as_bytes()) }

#[cfg(not(unix))]
fn name_bytes(file_name: &OsStr) -> Option<&[u8]> { file_name.to_str().map(str::as_bytes) }

/// Files under a search root, selected by document ID spans
#[derive(Debug, Clone)]
pub struct Selection {
  /// root directory of the walk
  pub root: PathBuf,
  /// the inclusive ID spans; a file is selected when any of them contains its ID
  pub spans: Vec<Span>,
  /// report each file at most once, instead of once per containing span
  pub unique: bool,
  /// visit the files of a directory by name before its subdirectories
  pub sorted: bool,
}

/// Iterator over the paths of a `Selection`, in traversal order
pub struct SelectionIterator<'iter> {
  /// the directory walker
  walker: Box<WalkDirIterator>,
  /// reference to the parent selection
  pub selection: &'iter Selection,
  /// path still owed to the caller, with its remaining repeat count
  pending: Option<(PathBuf, usize)>,
}

impl Selection {
  /// Select under `root` without checking that it exists. A missing root selects nothing.
  pub fn new<P: Into<PathBuf>>(root: P, spans: Vec<Span>) -> Self {
    Selection {
      root: root.into(),
      spans,
      unique: false,
      sorted: false,
    }
  }

  /// Select under `root`, failing if it does not exist
  pub fn checked<P: Into<PathBuf>>(root: P, spans: Vec<Span>) -> Result<Self> {
    let root = root.into();
    if !root.exists() {
      return Err(Error::DirectoryNotFound(root));
    }
    Ok(Selection::new(root, spans))
  }

  /// How many times a file with document ID `id` is reported
  pub fn multiplicity(&self, id: i64) -> usize {
    let hits = self.spans.iter().filter(|span| span.contains(id)).count();
    if self.unique {
      hits.min(1)
    } else {
      hits
    }
  }

  /// Walk the root, yielding the full path of each selected file once per containing span
  pub fn iter(&self) -> SelectionIterator<'_> {
    let mut walk = WalkDir::new(&self.root);
    if self.sorted {
      walk = walk.sort_by(files_first_by_name);
    }
    SelectionIterator {
      walker: Box::new(walk.into_iter()),
      selection: self,
      pending: None,
    }
  }

  /// Write every selected path on its own line, returning the number of lines written
  pub fn write_to<W: Write>(&self, mut writer: W) -> Result<usize> {
    debug!(
      "selecting under {} with spans {}",
      self.root.display(),
      self
        .spans
        .iter()
        .map(Span::to_string)
        .collect::<Vec<_>>()
        .join(", ")
    );
    let mut written = 0;
    for path in self.iter() {
      writeln!(writer, "{}", path.display())?;
      written += 1;
    }
    writer.flush()?;
    debug!("selected {} paths", written);
    Ok(written)
  }
}

impl<'iter> IntoIterator for &'iter Selection {
  type Item = PathBuf;
  type IntoIter = SelectionIterator<'iter>;
  fn into_iter(self) -> SelectionIterator<'iter> { self.iter() }
}

impl<'iter> Iterator for SelectionIterator<'iter> {
  type Item = PathBuf;
  fn next(&mut self) -> Option<PathBuf> {
    loop {
      if let Some((path, remaining)) = self.pending.take() {
        if remaining > 1 {
          self.pending = Some((path.clone(), remaining - 1));
        }
        return Some(path);
      }
      let entry = match self.walker.next()? {
        Ok(entry) => entry,
        Err(e) => {
          warn!("skipping unreadable corpus entry: {}", e);
          continue;
        },
      };
      if !is_file_like(&entry) {
        continue;
      }
      let id = match document_id(entry.file_name()) {
        Some(id) => id,
        None => continue,
      };
      let repeats = self.selection.multiplicity(id);
      if repeats > 0 {
        self.pending = Some((entry.into_path(), repeats));
      }
    }
  }
}

/// Anything below the root that is not a directory, where symbolic links to directories count as
/// directories
fn is_file_like(entry: &DirEntry) -> bool {
  let file_type = entry.file_type();
  if entry.depth() == 0 || file_type.is_dir() {
    false
  } else if file_type.is_symlink() {
    !entry.path().is_dir()
  } else {
    true
  }
}

fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
  let a_dir = a.file_type().is_dir();
  let b_dir = b.file_type().is_dir();
  a_dir
    .cmp(&b_dir)
    .then_with(|| a.file_name().cmp(b.file_name()))
}
