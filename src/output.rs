//! Output file naming and creation

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use chrono::Local;

/// Build the default output filename, `tree.{timestamp}.txt`, from the
/// current local time. Relative, so it lands in the working directory.
pub fn default_output_path() -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d%H%M%S");
    PathBuf::from(format!("tree.{timestamp}.txt"))
}

/// Create (or truncate) the output file, buffered for line-at-a-time writes.
pub fn create_output_file(path: &Path) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}
