//! Domain models exchanged with the RGS API.

mod metadata;
mod metrics;
mod patient;
mod record;
mod timezone;
mod validation;

pub use metadata::*;
pub use metrics::*;
pub use patient::*;
pub use record::*;
pub use timezone::*;
pub use validation::*;
