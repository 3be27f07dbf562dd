//! Roster API Test Suite
//!
//! End-to-end tests through the public `rosterdb` facade.
//!
//! ## Test Groups
//!
//! - **store_contract**: insert/update/delete/list rules and the demo scenario
//! - **store_properties**: randomized checks of the same rules
//! - **form_flow**: add/edit dialog behavior and notifications
//! - **config_seed**: seeding from `roster.toml`
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test roster_api
//! ```

mod test_utils;

mod config_seed;
mod form_flow;
mod store_contract;
mod store_properties;
