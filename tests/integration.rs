//! Integration tests for autodoc

mod harness;

use harness::{TestWorkspace, alpha_beta_module, run_autodoc};

const OUTPUT: &str = "AutoDocumentationMethods.csv";

#[test]
fn test_select_one_type_then_stop() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (stdout, stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "greek.json"], "1\nN\n");
    assert!(success, "autodoc should succeed: {}", stderr);

    assert!(stdout.contains("1.) Alpha\n"), "menu: {}", stdout);
    assert!(stdout.contains("2.) Beta\n"), "menu: {}", stdout);
    assert!(stdout.contains("3.) Print all methods\n"), "menu: {}", stdout);
    assert!(stdout.contains("---Alpha---\n"));
    assert!(stdout.contains("Describe - Public\n"));
    assert!(stdout.contains("Validate - Non-Public\n"));
    assert!(stdout.trim_end().ends_with("Continue? (Y/N):"));

    assert_eq!(
        workspace.read(OUTPUT).unwrap(),
        "Alpha,Describe,Alpha,False,True\nAlpha,Validate,Alpha,False,False\n"
    );
}

#[test]
fn test_previous_output_removed_at_startup() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());
    workspace.add_file(OUTPUT, "old,record,from,last,run\n");

    let (_stdout, _stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "greek.json"], "2\nN\n");
    assert!(success);

    let content = workspace.read(OUTPUT).unwrap();
    assert!(!content.contains("old,record"), "stale content: {}", content);
    assert_eq!(content, "Beta,Describe,Alpha,True,True\nBeta,Reset,Beta,False,False\n");
}

#[test]
fn test_print_all_then_continue() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (stdout, _stderr, success) = run_autodoc(
        workspace.path(),
        &["--manifest", "greek.json"],
        "3\nY\n1\nn\n",
    );
    assert!(success);
    assert!(stdout.contains("---Beta---"));
    assert_eq!(stdout.matches("---MODULE TYPES---").count(), 2);

    let content = workspace.read(OUTPUT).unwrap();
    assert_eq!(content.lines().count(), 7, "records: {}", content);
    assert!(content.lines().all(|line| line.split(',').count() == 5));
}

#[test]
fn test_custom_output_location() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());
    workspace.add_file("docs/.keep", "");

    let (_stdout, stderr, success) = run_autodoc(
        workspace.path(),
        &[
            "--manifest",
            "greek.json",
            "--output-dir",
            "docs",
            "--base-name",
            "greek",
        ],
        "1\nN\n",
    );
    assert!(success, "{}", stderr);
    assert!(workspace.read("docs/greek.csv").is_some());
    assert!(workspace.read(OUTPUT).is_none());
}

#[test]
fn test_batch_mode_documents_everything() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (stdout, _stderr, success) =
        run_autodoc(workspace.path(), &["--manifest", "greek.json", "--all"], "");
    assert!(success);
    assert!(!stdout.contains("Continue?"));
    assert!(!stdout.contains("<Alpha>d__1"));
    assert_eq!(workspace.read(OUTPUT).unwrap().lines().count(), 5);
}

#[test]
fn test_details_flag() {
    let workspace = TestWorkspace::new();
    workspace.write_manifest("greek.json", &alpha_beta_module());

    let (stdout, _stderr, success) = run_autodoc(
        workspace.path(),
        &["--manifest", "greek.json", "--details"],
        "1\nN\n",
    );
    assert!(success);
    assert!(stdout.contains("Alpha.Describe() - Public\n"), "{}", stdout);
    assert!(stdout.contains("IsVirtual = True"), "{}", stdout);
}

#[test]
fn test_builtin_module_by_default() {
    let workspace = TestWorkspace::new();

    let (stdout, _stderr, success) = run_autodoc(workspace.path(), &[], "1\nN\n");
    assert!(success);
    assert!(stdout.contains("1.) Error\n"), "{}", stdout);
    assert!(stdout.contains("Print all methods"));
    assert!(!stdout.contains("{{closure}}"));
}
