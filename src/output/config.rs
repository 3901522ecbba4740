//! Output configuration types

use std::path::PathBuf;

use super::csv::CsvLog;

pub const DEFAULT_BASE_NAME: &str = "AutoDocumentationMethods";
const DEFAULT_DIRECTORY: &str = ".";

/// Where the record log is written.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub directory: PathBuf,
    /// File name without the `.csv` extension
    pub base_name: String,
}

impl ExportConfig {
    /// `<directory>/<base_name>.csv`
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(format!("{}.csv", self.base_name))
    }

    pub fn open_log(&self) -> CsvLog {
        CsvLog::new(self.file_path())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_DIRECTORY),
            base_name: DEFAULT_BASE_NAME.to_string(),
        }
    }
}

/// Console presentation settings for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub use_color: bool,
    /// Print parameter lists and method properties instead of bare names
    pub details: bool,
}
