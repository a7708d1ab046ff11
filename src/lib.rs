pub mod aggregate;
pub mod delimited;
pub mod describe;
pub mod error;
pub mod lookup;
pub mod matches;
pub mod model;
pub mod radar;
pub mod ranking;
pub mod schema;
pub mod stats;
pub mod xlsx;

pub use error::{MissingColumnError, Result, StatsError};
pub use model::*;
