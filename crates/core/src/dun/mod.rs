mod error;
mod operations;
mod seed;
mod types;

pub use error::DunError;
pub use operations::{compute_statistics, filter_duns, sort_duns_by_id, validate_dun};
pub use seed::seed_duns;
pub use types::{Dun, DunFilter, Statistics};
