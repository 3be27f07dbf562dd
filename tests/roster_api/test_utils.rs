//! Shared helpers for the roster API tests.

use rosterdb::{Record, RegistrationNumber, Roster};

pub fn key(n: i64) -> RegistrationNumber {
    RegistrationNumber::new(n)
}

pub fn keys(roster: &Roster) -> Vec<i64> {
    roster.records().iter().map(|r| r.key().get()).collect()
}

pub fn snapshot(roster: &Roster) -> Vec<Record> {
    roster.records().to_vec()
}
