//! Seeding a roster from `roster.toml`.

use crate::test_utils::keys;
use rosterdb::{Error, Record, Roster, RosterConfig, CONFIG_FILE_NAME};
use tempfile::TempDir;

#[test]
fn config_file_seeds_roster() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        r#"
[[records]]
name = "Meena"
designation = "Analyst"
registration_number = 42
"#,
    )
    .unwrap();

    let config = RosterConfig::from_file(&path).unwrap();
    let roster = Roster::from_config(&config).unwrap();
    assert_eq!(roster.records(), &[Record::new("Meena", "Analyst", 42)]);
}

#[test]
fn default_config_is_demo_seed() {
    let roster = Roster::from_config(&RosterConfig::default()).unwrap();
    assert_eq!(keys(&roster), vec![205, 195, 123]);
}

#[test]
fn invalid_seed_surfaces_as_executor_error() {
    let config = RosterConfig {
        records: Some(vec![Record::new("", "Lead", 1)]),
    };
    let err = Roster::from_config(&config).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}
