//! Edge case and error handling tests for autodoc

mod harness;

use harness::{TestWorkspace, alpha_beta_module, run_autodoc};

// ============================================================================
// Startup Errors
// ============================================================================

#[test]
fn test_missing_manifest_fails() {
    let workspace = TestWorkspace::new();

    let (_stdout, stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "nope.json"], "");
    assert!(!success, "missing manifest should fail");
    assert!(stderr.contains("autodoc:"), "stderr: {}", stderr);
    assert!(stderr.contains("nope.json"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_manifest_fails() {
    let workspace = TestWorkspace::new();
    workspace.add_file("bad.json", "{ \"types\": [ }");

    let (_stdout, stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "bad.json"], "");
    assert!(!success);
    assert!(stderr.contains("invalid manifest"), "stderr: {}", stderr);
}

#[test]
fn test_cyclic_manifest_fails() {
    let workspace = TestWorkspace::new();
    workspace.add_file(
        "cycle.json",
        r#"{ "name": "m", "types": [
            { "name": "A", "base": "B" },
            { "name": "B", "base": "A" } ] }"#,
    );

    let (_stdout, stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "cycle.json"], "");
    assert!(!success);
    assert!(stderr.contains("inheritance cycle"), "stderr: {}", stderr);
}

#[test]
fn test_missing_output_directory_fails_on_append() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (_stdout, stderr, success) = run_autodoc(
        workspace.path(),
        &["--manifest", "greek.json", "--output-dir", "does/not/exist"],
        "1\nN\n",
    );
    assert!(!success, "append into a missing directory should fail");
    assert!(stderr.contains("AutoDocumentationMethods.csv"), "stderr: {}", stderr);
}

// ============================================================================
// Operator Input
// ============================================================================

#[test]
fn test_malformed_and_out_of_range_selections_reprompt() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (stdout, _stderr, success) = run_autodoc(
        workspace.path(),
        &["--manifest", "greek.json"],
        "abc\n-1\n4\n1\nN\n",
    );
    assert!(success);
    assert_eq!(
        stdout
            .matches("Possible malformed input, please enter a valid value and try again.")
            .count(),
        2
    );
    assert_eq!(stdout.matches("Please select a value between 1 and 3").count(), 1);
    assert!(stdout.contains("---Alpha---"));
}

#[test]
fn test_invalid_continue_answer_reprompts() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (stdout, _stderr, success) = run_autodoc(
        workspace.path(),
        &["--manifest", "greek.json"],
        "1\nyes\nq\nN\n",
    );
    assert!(success);
    assert_eq!(stdout.matches("Please enter a valid input: ").count(), 2);
    assert_eq!(stdout.matches("---MODULE TYPES---").count(), 1);
}

#[test]
fn test_closed_input_ends_session() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (stdout, _stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "greek.json"], "");
    assert!(success, "end of input should end the session normally");
    assert!(stdout.contains("1.) Alpha"));
    assert!(workspace.read("AutoDocumentationMethods.csv").is_none());
}

// ============================================================================
// Module Shapes
// ============================================================================

#[test]
fn test_empty_module_offers_print_all_only() {
    let workspace = TestWorkspace::new();
    workspace.add_file("empty.json", r#"{ "name": "empty" }"#);

    let (stdout, _stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "empty.json"], "1\nN\n");
    assert!(success);
    assert!(stdout.contains("1.) Print all methods"), "{}", stdout);
    assert_eq!(
        harness_read(&workspace),
        "",
        "nothing to document in an empty module"
    );
}

#[test]
fn test_override_of_external_base_is_not_recorded() {
    let workspace = TestWorkspace::new();
    workspace.add_file(
        "widgets.json",
        r#"{ "name": "widgets", "types": [
            { "name": "Button", "base": "Control", "methods": [
                { "name": "Render", "visibility": "public", "dispatch": "override" },
                { "name": "Click", "visibility": "public" } ] } ] }"#,
    );

    let (stdout, _stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "widgets.json"], "1\nN\n");
    assert!(success);
    assert!(stdout.contains("Render - Public"), "still listed: {}", stdout);
    assert_eq!(harness_read(&workspace), "Button,Click,Button,False,True\n");
}

fn harness_read(workspace: &TestWorkspace) -> String {
    workspace
        .read("AutoDocumentationMethods.csv")
        .unwrap_or_default()
}
