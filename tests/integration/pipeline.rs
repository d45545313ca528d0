//! End-to-end pipeline runs against a scripted runner and selector

use crossterm::event::KeyCode;
use gitcheckout::commands::checkout::{run_with, CheckoutOptions};
use gitcheckout::error::{Error, ExecutionError, InteractionError};

use super::helpers::{ScriptedRunner, ScriptedSelector};

const LISTING: &str = "  develop\n* main\n  feature-x\n  remotes/origin/main\n";

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_enter_without_typing_checks_out_active_branch() {
    let runner = ScriptedRunner::new().then_output(LISTING).then_output("");
    let mut selector = ScriptedSelector::new(&[KeyCode::Enter]);

    let branch = run_with(&runner, &mut selector, CheckoutOptions::default()).unwrap();

    assert_eq!(branch, "main");
    assert_eq!(
        runner.calls(),
        vec![
            (args(&["branch", "--sort=-committerdate"]), false),
            (args(&["checkout", "main"]), true),
        ]
    );

    let seen = selector.seen.expect("selector should have been shown a listing");
    assert_eq!(seen.names(), ["develop", "main", "feature-x"]);
    assert_eq!(seen.active_index(), 1);
}

#[test]
fn test_typed_query_selects_filtered_branch() {
    let runner = ScriptedRunner::new().then_output(LISTING).then_output("");
    let mut selector = ScriptedSelector::typing("fea");

    let branch = run_with(&runner, &mut selector, CheckoutOptions::default()).unwrap();

    assert_eq!(branch, "feature-x");
    assert_eq!(runner.calls()[1], (args(&["checkout", "feature-x"]), true));
}

#[test]
fn test_remote_branches_requested_with_origin_option() {
    let runner = ScriptedRunner::new()
        .then_output("* main\n  remotes/origin/HEAD -> origin/main\n  remotes/origin/main\n  remotes/origin/release\n")
        .then_output("");
    let mut selector = ScriptedSelector::new(&[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
    let options = CheckoutOptions {
        include_remotes: true,
    };

    let branch = run_with(&runner, &mut selector, options).unwrap();

    assert_eq!(branch, "release");
    assert_eq!(
        runner.calls()[0],
        (args(&["branch", "--sort=-committerdate", "-a"]), false)
    );
}

#[test]
fn test_listing_failure_skips_selection_and_checkout() {
    let runner = ScriptedRunner::new().then_fail("git branch --sort=-committerdate");
    let mut selector = ScriptedSelector::new(&[KeyCode::Enter]);

    let err = run_with(&runner, &mut selector, CheckoutOptions::default()).unwrap_err();

    assert!(matches!(err, Error::Execution(ExecutionError::Launch { .. })));
    assert_eq!(runner.calls().len(), 1);
    assert!(selector.seen.is_none());
}

#[test]
fn test_cancelled_selection_skips_checkout() {
    let runner = ScriptedRunner::new().then_output(LISTING);
    let mut selector = ScriptedSelector::new(&[KeyCode::Char('d'), KeyCode::Esc]);

    let err = run_with(&runner, &mut selector, CheckoutOptions::default()).unwrap_err();

    assert!(matches!(err, Error::Interaction(InteractionError::Cancelled)));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_empty_listing_is_an_error() {
    let runner = ScriptedRunner::new().then_output("\n");
    let mut selector = ScriptedSelector::new(&[KeyCode::Enter]);

    let err = run_with(&runner, &mut selector, CheckoutOptions::default()).unwrap_err();

    assert!(matches!(err, Error::Interaction(InteractionError::Empty)));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_checkout_failure_is_reported() {
    let runner = ScriptedRunner::new()
        .then_output(LISTING)
        .then_fail("git checkout main");
    let mut selector = ScriptedSelector::new(&[KeyCode::Enter]);

    let err = run_with(&runner, &mut selector, CheckoutOptions::default()).unwrap_err();

    assert!(err.to_string().contains("git checkout main"));
    assert_eq!(runner.calls().len(), 2);
}
