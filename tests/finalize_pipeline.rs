//! End-to-end pipeline runs against materialized project trees.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use groundwork::command::CommandSpec;
use groundwork::context::ProjectContext;
use groundwork::git;
use groundwork::pipeline::{FinalizeOutcome, GenerationPipeline};
use groundwork::report::Reporter;

const MIT_TEXT: &str = "MIT License\n\nCopyright (c) 2024 Jane Doe\n\nPermission is hereby granted, free of charge, to any person obtaining a copy\n";

/// Lay out what the template engine would have materialized for an
/// "Example Project" generation.
fn seed_tree(root: &Path, with_license: bool) {
    fs::create_dir_all(root.join("src/example_project")).unwrap();
    fs::write(
        root.join("src/example_project/__init__.py"),
        "\"\"\"Example Project.\"\"\"\n",
    )
    .unwrap();

    if with_license {
        fs::write(root.join("LICENSE"), MIT_TEXT).unwrap();
    }

    let workflow = root.join(".github/workflows/template-update.yml");
    fs::create_dir_all(workflow.parent().unwrap()).unwrap();
    fs::write(workflow, "on:\n  schedule:\n    - cron: '0 6 * * 1'\n").unwrap();
}

fn run_pipeline(root: &Path, context_json: &str) -> FinalizeOutcome {
    let context = ProjectContext::from_json(context_json).unwrap();
    let commands = vec![CommandSpec::new("true", Vec::<String>::new())];
    let mut pipeline = GenerationPipeline::new(root, context, commands);
    let mut reporter = Reporter::silent("finalize");
    pipeline.run(&mut reporter).unwrap()
}

#[test]
fn mit_project_is_finalized_in_place() {
    let tmp = TempDir::new().unwrap();
    seed_tree(tmp.path(), true);

    let outcome = run_pipeline(
        tmp.path(),
        r#"{"project_name": "Example Project", "license": "MIT"}"#,
    );

    assert_eq!(outcome.repository_name, "example-project");
    assert_eq!(outcome.package_name, "example_project");

    // The package tree survives finalization untouched.
    assert!(tmp.path().join("src/example_project").is_dir());

    // The license file is verified against its canonical header.
    let license = fs::read_to_string(tmp.path().join("LICENSE")).unwrap();
    assert!(license.starts_with("MIT License\n"));
    assert_eq!(outcome.pruning.license_header.as_deref(), Some("MIT License"));

    // No public template link: the update workflow is disabled, not deleted.
    assert!(!tmp
        .path()
        .join(".github/workflows/template-update.yml")
        .exists());
    assert!(tmp
        .path()
        .join(".github/workflows/template-update.yml.disabled")
        .is_file());

    if outcome.git_initialised {
        assert!(git::is_git_repo(tmp.path()));
    } else {
        assert!(outcome
            .warnings
            .iter()
            .any(|w| w.contains("Could not initialise Git")));
    }
}

#[test]
fn unlicensed_project_is_finalized_without_license_file() {
    let tmp = TempDir::new().unwrap();
    seed_tree(tmp.path(), false);

    let outcome = run_pipeline(
        tmp.path(),
        r#"{"project_name": "Example Project", "license": "None"}"#,
    );

    assert_eq!(outcome.repository_name, "example-project");
    assert!(outcome.pruning.license_header.is_none());
    assert!(!tmp.path().join("LICENSE").exists());
    assert!(tmp.path().join("src/example_project").is_dir());
}

#[test]
fn public_template_link_keeps_update_workflow() {
    let tmp = TempDir::new().unwrap();
    seed_tree(tmp.path(), false);

    let outcome = run_pipeline(
        tmp.path(),
        r#"{
            "project_name": "Example Project",
            "license": "None",
            "_template": "https://www.github.com/org/template"
        }"#,
    );

    assert!(!outcome.pruning.workflow_disabled);
    assert!(tmp
        .path()
        .join(".github/workflows/template-update.yml")
        .is_file());
}

#[test]
fn setup_failures_and_git_failures_never_fail_generation() {
    let tmp = TempDir::new().unwrap();
    seed_tree(tmp.path(), false);
    // A regular file named .git makes `git init` fail.
    fs::write(tmp.path().join(".git"), "not a repository\n").unwrap();

    let context = ProjectContext::from_json(
        r#"{"project_name": "Example Project", "license": "None"}"#,
    )
    .unwrap();
    let commands = vec![
        CommandSpec::new("groundwork-no-such-formatter", [".", "--quiet"]),
        CommandSpec::new("false", Vec::<String>::new()),
        CommandSpec::new("true", Vec::<String>::new()),
    ];
    let mut pipeline = GenerationPipeline::new(tmp.path(), context, commands);
    let mut reporter = Reporter::silent("finalize");
    let outcome = pipeline.run(&mut reporter).unwrap();

    // Every command was attempted, in order, despite the failures.
    assert_eq!(outcome.setup.commands.len(), 3);
    assert!(!outcome.setup.commands[0].ran);
    assert!(!outcome.setup.commands[1].ran);
    assert!(outcome.setup.commands[2].ran);
    assert!(!outcome.setup.all_ran);

    assert!(!outcome.git_initialised);
    assert_eq!(outcome.warnings.len(), 3);
}

#[test]
fn missing_license_file_aborts_generation() {
    let tmp = TempDir::new().unwrap();
    seed_tree(tmp.path(), false);

    let context = ProjectContext::from_json(
        r#"{"project_name": "Example Project", "license": "MIT"}"#,
    )
    .unwrap();
    let mut pipeline = GenerationPipeline::new(tmp.path(), context, Vec::new());
    let mut reporter = Reporter::silent("finalize");
    let err = pipeline.run(&mut reporter).unwrap_err();

    assert_eq!(err.code.as_str(), "artifact.missing");
}

#[test]
fn outcome_serializes_with_camel_case_keys() {
    let tmp = TempDir::new().unwrap();
    seed_tree(tmp.path(), true);

    let outcome = run_pipeline(
        tmp.path(),
        r#"{"project_name": "Example Project", "license": "MIT"}"#,
    );

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["repositoryName"], "example-project");
    assert_eq!(value["packageName"], "example_project");
    assert_eq!(value["pruning"]["workflowDisabled"], true);
    assert!(value["setup"]["allRan"].is_boolean());
}
