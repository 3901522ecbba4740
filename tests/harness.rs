//! Test harness for autodoc integration tests

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

pub use autodoc::test_utils::{TestWorkspace, alpha_beta_module};

/// Run the binary in `dir`, feeding `stdin` to the session.
///
/// Colors are always disabled so output can be compared as plain text.
pub fn run_autodoc(dir: &Path, args: &[&str], stdin: &str) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_autodoc");
    let mut child = Command::new(binary)
        .args(["--color", "never"])
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run autodoc");

    {
        let mut pipe = child.stdin.take().expect("stdin should be piped");
        // The process may exit before reading everything (e.g. on errors).
        let _ = pipe.write_all(stdin.as_bytes());
    }

    let output = child.wait_with_output().expect("Failed to wait for autodoc");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path().exists());
    }

    #[test]
    fn test_harness_writes_manifest() {
        let workspace = TestWorkspace::new();
        let path = workspace.write_manifest("greek.json", &alpha_beta_module());
        assert!(path.exists());
    }
}
