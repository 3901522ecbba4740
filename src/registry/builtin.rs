//! The manifest describing autodoc's own types
//!
//! Sessions started without `--manifest` document this module.

use super::ModuleInfo;
use crate::error::Result;

/// JSON manifest compiled into the binary.
pub const SELF_MANIFEST: &str = include_str!("../../manifests/autodoc.json");

/// Parse the embedded manifest.
pub fn self_module() -> Result<ModuleInfo> {
    ModuleInfo::from_json("<built-in>", SELF_MANIFEST)
}
