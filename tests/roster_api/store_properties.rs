//! Randomized checks of the store contract.

use crate::test_utils::{key, keys, snapshot};
use proptest::prelude::*;
use rosterdb::{Error, Record, RecordChanges, Roster};

fn empty_roster() -> Roster {
    Roster::from_store(rosterdb::RecordStore::new())
}

proptest! {
    #[test]
    fn distinct_inserts_grow_in_append_order(
        raw in proptest::collection::hash_set(-1000i64..1000, 0..30)
    ) {
        let raw: Vec<i64> = raw.into_iter().collect();
        let mut roster = empty_roster();
        for k in &raw {
            roster.insert(Record::new("n", "d", *k)).unwrap();
        }
        prop_assert_eq!(keys(&roster), raw);
    }

    #[test]
    fn duplicate_insert_changes_nothing(
        raw in proptest::collection::hash_set(0i64..50, 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let raw: Vec<i64> = raw.into_iter().collect();
        let mut roster = empty_roster();
        for k in &raw {
            roster.insert(Record::new("n", "d", *k)).unwrap();
        }
        let before = snapshot(&roster);
        let dup = raw[pick.index(raw.len())];
        let err = roster.insert(Record::new("other", "other", dup)).unwrap_err();
        prop_assert_eq!(err, Error::DuplicateKey { key: key(dup) });
        prop_assert_eq!(snapshot(&roster), before);
    }

    #[test]
    fn update_touches_only_its_row(
        raw in proptest::collection::hash_set(0i64..50, 1..10),
        pick in any::<prop::sample::Index>(),
        name in "[A-Z][a-z]{1,8}",
        designation in "[A-Z][a-z]{1,8}",
    ) {
        let raw: Vec<i64> = raw.into_iter().collect();
        let mut roster = empty_roster();
        for k in &raw {
            roster.insert(Record::new("n", "d", *k)).unwrap();
        }
        let idx = pick.index(raw.len());
        roster
            .update(key(raw[idx]), RecordChanges::new(name.clone(), designation.clone()))
            .unwrap();

        for (i, row) in roster.records().iter().enumerate() {
            prop_assert_eq!(row.key().get(), raw[i]);
            if i == idx {
                prop_assert_eq!(&row.name, &name);
                prop_assert_eq!(&row.designation, &designation);
            } else {
                prop_assert_eq!(row, &Record::new("n", "d", raw[i]));
            }
        }
    }

    #[test]
    fn delete_absent_key_is_noop(
        raw in proptest::collection::hash_set(0i64..50, 0..10),
        absent in 100i64..200,
    ) {
        let mut roster = empty_roster();
        for k in raw {
            roster.insert(Record::new("n", "d", k)).unwrap();
        }
        let before = snapshot(&roster);
        prop_assert!(!roster.delete(key(absent)).unwrap());
        prop_assert_eq!(snapshot(&roster), before);
    }
}
