//! CLI entry point for stump

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use stump::{
    DEFAULT_EXCLUDES, ExcludeSet, SortOrder, TreeWalker, WalkerConfig, create_output_file,
    default_output_path,
};

#[derive(Parser, Debug)]
#[command(name = "stump")]
#[command(about = "Dump a directory tree with file contents inlined")]
#[command(version)]
struct Args {
    /// Directory to dump
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Exclude entries whose root-relative path matches pattern
    /// (can be used multiple times)
    #[arg(short = 'I', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Do not apply the built-in exclusion patterns
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Sort order for sibling entries
    #[arg(long = "sort", value_enum, default_value_t)]
    sort: SortOrder,

    /// List names only, without inlined file contents
    #[arg(long = "no-contents")]
    no_contents: bool,

    /// Maximum file size for content inlining (default: unlimited)
    /// Larger files get a placeholder. Use suffixes: K, M, G (e.g. 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Write to FILE instead of tree.<timestamp>.txt
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    Ok(num * multiplier)
}

/// Absolute form of the output path, used so the dump never lists the
/// file it is being written to. None if the path cannot be resolved;
/// the default-exclude pattern still covers the common case.
fn absolute_output_path(path: &Path) -> Option<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::current_dir().ok()?,
    };
    let parent = std::fs::canonicalize(parent).ok()?;
    Some(parent.join(path.file_name()?))
}

fn main() {
    let args = Args::parse();

    let max_file_size = args.max_file_size.as_ref().map(|s| {
        parse_file_size(s).unwrap_or_else(|e| {
            eprintln!("stump: invalid --max-file-size '{}': {}", s, e);
            process::exit(1);
        })
    });

    let mut patterns: Vec<String> = Vec::new();
    if !args.no_default_excludes {
        patterns.extend(DEFAULT_EXCLUDES.iter().map(|s| s.to_string()));
    }
    patterns.extend(args.exclude.iter().cloned());

    let excludes = ExcludeSet::new(&patterns).unwrap_or_else(|(pattern, e)| {
        eprintln!("stump: invalid exclude pattern '{}': {}", pattern, e);
        process::exit(1);
    });

    // Resolve the root up front so a bad path fails before the output
    // file is created
    let root = std::fs::canonicalize(&args.path).unwrap_or_else(|e| {
        eprintln!("stump: cannot access '{}': {}", args.path.display(), e);
        process::exit(1);
    });
    if !root.is_dir() {
        eprintln!("stump: not a directory: '{}'", args.path.display());
        process::exit(1);
    }

    let output_path = args.output.clone().unwrap_or_else(default_output_path);
    let mut out = create_output_file(&output_path).unwrap_or_else(|e| {
        eprintln!("stump: cannot create '{}': {}", output_path.display(), e);
        process::exit(1);
    });

    let config = WalkerConfig {
        sort: args.sort,
        include_contents: !args.no_contents,
        max_file_size,
        skip_paths: absolute_output_path(&output_path).into_iter().collect(),
    };

    let walker = TreeWalker::new(config).with_excludes(excludes);
    let result = walker.walk(&root, &mut out).and_then(|summary| {
        out.flush()?;
        Ok(summary)
    });

    let summary = result.unwrap_or_else(|e| {
        eprintln!("stump: error writing output: {}", e);
        process::exit(1);
    });

    for (path, e) in &summary.errors {
        eprintln!("stump: warning: cannot read '{}': {}", path.display(), e);
    }

    println!("Directory structure saved to {}.", output_path.display());
    println!("{} directories, {} files", summary.dirs, summary.files);
}
