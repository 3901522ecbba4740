//! Append-only CSV log of override records

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// The session's output file.
///
/// Cleared once with [`CsvLog::reset`] at startup and only appended to after.
#[derive(Debug, Clone)]
pub struct CsvLog {
    path: PathBuf,
}

impl CsvLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file if it exists. A missing file is not an error.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "removed previous output file");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::io(&self.path, e)),
        }
    }

    /// Append each line plus a terminator, flushing after every line.
    ///
    /// The file is created when absent. Returns the number of lines written.
    pub fn append_all<I, S>(&self, lines: I) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;

        let mut written = 0;
        for line in lines {
            writeln!(file, "{}", line.as_ref()).map_err(|e| Error::io(&self.path, e))?;
            file.flush().map_err(|e| Error::io(&self.path, e))?;
            written += 1;
        }

        debug!(path = %self.path.display(), lines = written, "appended records");
        Ok(written)
    }
}
