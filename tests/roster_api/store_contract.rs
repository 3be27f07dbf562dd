//! Store contract through the facade.

use crate::test_utils::{key, keys, snapshot};
use rosterdb::{Error, ErrorKind, Field, Record, RecordChanges, RecordStore, Roster, RosterError};

#[test]
fn demo_seed_is_in_declared_order() {
    let roster = Roster::new();
    assert_eq!(
        roster.records(),
        &[
            Record::new("Yuva", "Intern", 205),
            Record::new("Suresh", "CEO", 195),
            Record::new("Jeeva", "Manager", 123),
        ]
    );
}

#[test]
fn demo_scenario() {
    let mut roster = Roster::new();

    roster.insert(Record::new("Arun", "Lead", 300)).unwrap();
    let rows = roster.list().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows.last().unwrap(), &Record::new("Arun", "Lead", 300));

    let err = roster.insert(Record::new("X", "Y", 205)).unwrap_err();
    assert_eq!(err, Error::DuplicateKey { key: key(205) });
    assert_eq!(roster.list().unwrap().len(), 4);

    roster
        .update(key(195), RecordChanges::new("Suresh K", "CTO"))
        .unwrap();
    assert_eq!(
        roster.list().unwrap()[1],
        Record::new("Suresh K", "CTO", 195)
    );

    assert!(roster.delete(key(123)).unwrap());
    assert_eq!(keys(&roster), vec![205, 195, 300]);
}

#[test]
fn blank_fields_rejected_without_mutation() {
    let mut roster = Roster::new();
    let before = snapshot(&roster);

    let err = roster.insert(Record::new("", "Lead", 300)).unwrap_err();
    assert!(matches!(err, Error::Validation { field: Field::Name, .. }));

    let err = roster.insert(Record::new("Arun", "", 300)).unwrap_err();
    assert_eq!(
        err,
        Error::Validation {
            field: Field::Designation,
            reason: "Designation must not be empty".into(),
        }
    );

    let err = roster
        .update(key(205), RecordChanges::new("Yuva", " "))
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));

    assert_eq!(snapshot(&roster), before);
}

#[test]
fn update_missing_key_reports_not_found() {
    let mut roster = Roster::new();
    let before = snapshot(&roster);
    let err = roster
        .update(key(404), RecordChanges::new("A", "B"))
        .unwrap_err();
    assert_eq!(err, Error::NotFound { key: key(404) });
    assert_eq!(snapshot(&roster), before);
}

#[test]
fn delete_is_idempotent() {
    let mut roster = Roster::new();
    assert!(roster.delete(key(205)).unwrap());
    assert!(!roster.delete(key(205)).unwrap());
    assert_eq!(keys(&roster), vec![195, 123]);
}

#[test]
fn get_by_key() {
    let mut roster = Roster::new();
    assert_eq!(
        roster.get(key(123)).unwrap(),
        Some(Record::new("Jeeva", "Manager", 123))
    );
    assert_eq!(roster.get(key(1)).unwrap(), None);
}

#[test]
fn store_errors_carry_kind() {
    let mut store = RecordStore::seeded();
    let err: RosterError = store.insert(Record::new("X", "Y", 195)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateKey);
}
