//! Calculator session tests — form lifecycle and result collection.

use ept_core::{
    error::EstimatorError,
    form::{FormEdit, FormField},
    role::Role,
    session::CalculatorSession,
};

#[test]
fn new_session_has_one_undeletable_form() {
    let mut session = CalculatorSession::default();
    assert_eq!(session.forms().len(), 1);

    let first = session.forms()[0].id.clone();
    assert!(!session.is_deletable(&first));
    assert!(matches!(
        session.delete_form(&first),
        Err(EstimatorError::FormNotDeletable { .. })
    ));
    assert_eq!(session.take_scroll_request(), None);
}

#[test]
fn added_form_requests_scroll_once() {
    let mut session = CalculatorSession::default();
    let id = session.add_form();

    assert_eq!(session.forms().len(), 2);
    assert!(session.is_deletable(&id));
    assert_eq!(session.take_scroll_request(), Some(id));
    assert_eq!(session.take_scroll_request(), None);
}

#[test]
fn form_ids_are_unique() {
    let mut session = CalculatorSession::default();
    let a = session.add_form();
    let b = session.add_form();

    assert_ne!(a, b);
    assert_ne!(session.forms()[0].id, a);
}

#[test]
fn delete_removes_form_and_result() {
    let mut session = CalculatorSession::default();
    let first = session.forms()[0].id.clone();
    let second = session.add_form();

    session.calculate(&first).unwrap();
    session.calculate(&second).unwrap();
    assert_eq!(session.results().len(), 2);

    let removed = session.delete_form(&second).unwrap();
    assert_eq!(removed.id, second);
    assert!(removed.result.is_some());
    assert_eq!(session.results().len(), 1);
    assert!(matches!(
        session.form(&second),
        Err(EstimatorError::FormNotFound { .. })
    ));
}

#[test]
fn deleting_unscrolled_form_clears_scroll_request() {
    let mut session = CalculatorSession::default();
    let id = session.add_form();
    session.delete_form(&id).unwrap();

    assert_eq!(session.take_scroll_request(), None);
}

#[test]
fn unknown_form_id_is_an_error() {
    let mut session = CalculatorSession::default();

    assert!(matches!(
        session.calculate("nope"),
        Err(EstimatorError::FormNotFound { .. })
    ));
    assert!(matches!(
        session.delete_form("nope"),
        Err(EstimatorError::FormNotFound { .. })
    ));
}

#[test]
fn edits_are_per_form() {
    let mut session = CalculatorSession::default();
    let first = session.forms()[0].id.clone();
    let second = session.add_form();

    session
        .edit(&second, &FormEdit::SetRole { role: Role::SalesDevelopmentRep })
        .unwrap();

    assert_eq!(session.form(&first).unwrap().state.role, Role::ServiceAgent);
    let state = &session.form(&second).unwrap().state;
    assert_eq!(state.role, Role::SalesDevelopmentRep);
    assert_eq!(state.expected_tasks_per_day, "120");
}

#[test]
fn failed_calculation_keeps_previous_result() {
    let mut session = CalculatorSession::default();
    let id = session.forms()[0].id.clone();

    let before = session.calculate(&id).unwrap().clone();
    session
        .edit(&id, &FormEdit::SetField { field: FormField::ClicksPerTask, value: "0".into() })
        .unwrap();

    assert!(matches!(
        session.calculate(&id),
        Err(EstimatorError::ZeroDivisor { .. })
    ));
    assert_eq!(session.form(&id).unwrap().result.as_ref(), Some(&before));
}

#[test]
fn failed_edit_leaves_form_unchanged() {
    let mut session = CalculatorSession::default();
    let id = session.forms()[0].id.clone();
    let before = session.form(&id).unwrap().state.clone();

    assert!(session.edit(&id, &FormEdit::SetEpt { ept: 9.99 }).is_err());
    assert_eq!(session.form(&id).unwrap().state, before);
}

#[test]
fn total_role_value_sums_recorded_results() {
    let mut session = CalculatorSession::default();
    let first = session.forms()[0].id.clone();
    let second = session.add_form();

    assert_eq!(session.total_role_value(), 0.0);

    let a = session.calculate(&first).unwrap().total_role_value;
    let b = session.calculate(&second).unwrap().total_role_value;

    assert_eq!(session.total_role_value(), a + b);
}

#[test]
fn session_debug_lists_forms() {
    let mut session = CalculatorSession::new();
    let id = session.add_form();
    let debug = format!("{session:?}");

    assert!(debug.contains("CalculatorSession"));
    assert!(debug.contains(&id));
}
