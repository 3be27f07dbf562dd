//! Add/edit dialog flows as the grid drives them.

use crate::test_utils::{key, keys};
use rosterdb::{Command, Error, FormMode, FormValues, Level, Notification, Output, Roster, RowAction};

#[test]
fn add_user_via_dialog() {
    let mut roster = Roster::new();
    let view = roster.open_create().unwrap();
    assert_eq!(view.title, "Add User");
    assert_eq!(view.values, FormValues::default());

    let note = roster
        .submit(FormValues::new("Arun", "Lead", " 300 "))
        .unwrap();
    assert_eq!(note, Notification::success("User added!"));
    assert_eq!(keys(&roster), vec![205, 195, 123, 300]);
    assert_eq!(roster.form_view().unwrap().mode, FormMode::Closed);
}

#[test]
fn duplicate_reg_no_keeps_dialog_open() {
    let mut roster = Roster::new();
    roster.open_create().unwrap();

    let err = roster.submit(FormValues::new("X", "Y", "205")).unwrap_err();
    let note = Notification::from_error(&err);
    assert_eq!(note.level, Level::Error);
    assert_eq!(note.message, "Reg No already exists!");

    let view = roster.form_view().unwrap();
    assert_eq!(view.mode, FormMode::Creating);
    assert_eq!(view.values, FormValues::new("X", "Y", "205"));

    roster.submit(FormValues::new("X", "Y", "206")).unwrap();
    assert_eq!(keys(&roster), vec![205, 195, 123, 206]);
}

#[test]
fn edit_row_action_round_trip() {
    let mut roster = Roster::new();

    let out = roster.execute(RowAction::Edit.command(key(195))).unwrap();
    let view = match out {
        Output::Form(view) => view,
        other => panic!("Expected Form, got {:?}", other),
    };
    assert!(view.key_locked);
    assert_eq!(view.submit_label, "Update");

    let mut values = view.values;
    values.name = "Suresh K".into();
    values.designation = "CTO".into();
    let note = roster.submit(values).unwrap();
    assert_eq!(note.message, "User updated!");
    assert_eq!(roster.records()[1].name, "Suresh K");
    assert_eq!(keys(&roster), vec![205, 195, 123]);
}

#[test]
fn delete_row_action_always_reports_deleted() {
    let mut roster = Roster::new();
    assert_eq!(
        roster.delete_row(key(123)),
        Notification::success("User deleted")
    );
    assert_eq!(
        roster.delete_row(key(123)),
        Notification::success("User deleted")
    );
    assert_eq!(keys(&roster), vec![205, 195]);

    let out = roster.execute(RowAction::Delete.command(key(205))).unwrap();
    assert_eq!(out, Output::Bool(true));
}

#[test]
fn cancel_discards_input() {
    let mut roster = Roster::new();
    roster.open_create().unwrap();
    roster.submit(FormValues::new("", "Lead", "300")).unwrap_err();
    let view = roster.cancel().unwrap();
    assert_eq!(view.mode, FormMode::Closed);
    assert_eq!(view.values, FormValues::default());
    assert_eq!(roster.records().len(), 3);
}

#[test]
fn submit_without_dialog() {
    let mut roster = Roster::new();
    let err = roster
        .execute(Command::FormSubmit {
            values: FormValues::new("A", "B", "1"),
        })
        .unwrap_err();
    assert_eq!(err, Error::FormNotOpen);
}
