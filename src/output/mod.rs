//! Console and file output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `console` - Menu, header and method list rendering
//! - `csv` - Append-only record log

mod config;
pub mod console;
mod csv;

pub use config::{DEFAULT_BASE_NAME, ExportConfig, SessionConfig};
pub use console::{print_catalogue, print_divider, print_header, print_method_list};
pub use csv::CsvLog;
