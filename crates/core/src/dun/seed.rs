//! Demo data for seeding the remote store.
//!
//! Pure functions with no side effects, usable from tests and from the
//! remote data source at startup.

use super::types::Dun;

/// The two duns the remote service starts with.
pub fn seed_duns() -> Vec<Dun> {
    vec![
        Dun::new(
            "Build tower in Pisa",
            "Ground looks good, no foundation work required.",
        ),
        Dun::new(
            "Finish bridge in Tacoma",
            "Found awesome girders at half the cost!",
        ),
    ]
}
