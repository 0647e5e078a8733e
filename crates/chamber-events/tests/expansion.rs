//! Table-driven expansion cases run against the public API.

use chamber_events::event::{Event, RecurrenceRule};
use chamber_events::expand::expand;

include!("expansion_cases_data/mod.rs");

#[test_log::test]
fn expansion_cases_integration() {
    for case in expansion_cases() {
        tracing::debug!(case = case.name, "Checking expansion case");
        assert_case(&case);
    }
}
