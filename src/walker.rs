//! Depth-first directory walking with exclusion filtering
//!
//! The walker emits one line per entry directly to an `io::Write` sink as
//! it descends, so memory use is O(depth) regardless of tree size.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::content::summarize_file;
use crate::exclude::ExcludeSet;

/// Ordering of sibling entries within a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortOrder {
    /// Directories first, then files, each group alphabetical
    #[default]
    DirsFirst,
    /// Plain alphabetical, directories and files interleaved
    Alphabetical,
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub sort: SortOrder,
    /// Inline a content summary after each file name.
    pub include_contents: bool,
    /// Files larger than this are summarized without being read.
    /// `None` means no cap.
    pub max_file_size: Option<u64>,
    /// Absolute paths never emitted, regardless of patterns.
    /// Used to keep the output file out of its own dump.
    pub skip_paths: Vec<PathBuf>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            sort: SortOrder::DirsFirst,
            include_contents: true,
            max_file_size: None,
            skip_paths: Vec::new(),
        }
    }
}

/// Counts and per-directory failures accumulated over a walk.
///
/// `errors` holds directories whose listing failed; the walk continues
/// past them rather than aborting.
#[derive(Debug, Default)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
    pub errors: Vec<(PathBuf, io::Error)>,
}

/// A directory entry that survived filtering, ready to emit.
#[derive(Debug)]
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Tree walker that streams formatted lines to a sink.
pub struct TreeWalker {
    config: WalkerConfig,
    excludes: ExcludeSet,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self {
            config,
            excludes: ExcludeSet::empty(),
        }
    }

    pub fn with_excludes(mut self, excludes: ExcludeSet) -> Self {
        self.excludes = excludes;
        self
    }

    /// Walk `root` depth-first, writing one line per entry to `out`.
    ///
    /// An unreadable root is a fatal error; unreadable subdirectories are
    /// recorded in the summary and skipped. Write errors on the sink
    /// abort the walk.
    pub fn walk<W: Write>(&self, root: &Path, out: &mut W) -> io::Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let entries = self.read_entries(root, root)?;
        self.emit(root, entries, "", out, &mut summary)?;
        Ok(summary)
    }

    /// List, filter, and sort one directory's entries.
    fn read_entries(&self, root: &Path, dir: &Path) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => continue,
            };
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            // Skip symlinks to prevent cycles and escape from the root
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(_) => continue,
            };
            if file_type.is_symlink() {
                continue;
            }

            // .git is never worth dumping
            if name == ".git" {
                continue;
            }

            if self.config.skip_paths.iter().any(|s| s == &path) {
                continue;
            }

            let relative = path.strip_prefix(root).unwrap_or(&path);
            if self.excludes.matches(relative) {
                continue;
            }

            entries.push(Entry {
                name,
                path,
                is_dir: file_type.is_dir(),
            });
        }

        match self.config.sort {
            SortOrder::DirsFirst => {
                entries.sort_by(|a, b| {
                    (!a.is_dir, &a.name).cmp(&(!b.is_dir, &b.name))
                });
            }
            SortOrder::Alphabetical => {
                entries.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }

        Ok(entries)
    }

    fn emit<W: Write>(
        &self,
        root: &Path,
        entries: Vec<Entry>,
        prefix: &str,
        out: &mut W,
        summary: &mut WalkSummary,
    ) -> io::Result<()> {
        let count = entries.len();
        for (i, entry) in entries.into_iter().enumerate() {
            let is_last = i + 1 == count;

            if entry.is_dir {
                summary.dirs += 1;
                let (connector, child_prefix) = if is_last {
                    ("\\-- ", format!("{prefix}    "))
                } else {
                    ("+-- ", format!("{prefix}|   "))
                };
                writeln!(out, "{prefix}{connector}{}", entry.name)?;

                match self.read_entries(root, &entry.path) {
                    Ok(children) => {
                        self.emit(root, children, &child_prefix, out, summary)?;
                    }
                    Err(e) => summary.errors.push((entry.path, e)),
                }
            } else {
                summary.files += 1;
                // Files always use the plain connector, last or not
                if self.config.include_contents {
                    let content = summarize_file(&entry.path, self.config.max_file_size);
                    writeln!(out, "{prefix}--- {}: {content}", entry.name)?;
                } else {
                    writeln!(out, "{prefix}--- {}", entry.name)?;
                }
            }
        }
        Ok(())
    }
}
