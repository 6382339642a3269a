pub mod application;
pub mod stats;
pub mod status;

pub use application::{ApplicationRecord, COLUMNS, IndexedRecord, NewApplication};
pub use stats::StatsReport;
pub use status::Status;
