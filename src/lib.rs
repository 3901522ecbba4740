//! autodoc - interactive method documentation for compiled module manifests

pub mod error;
pub mod extract;
pub mod output;
pub mod record;
pub mod registry;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use extract::{Catalogue, Extractor, MethodFilter, MethodHandle};
pub use output::{CsvLog, ExportConfig, SessionConfig};
pub use record::{MethodFact, format_record};
pub use registry::{ModuleInfo, TypeDef};
pub use session::{Session, State};
